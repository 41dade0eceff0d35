//! DynamoDB implementation of [`TableAccessor`].

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use beerhouse_core::storage::Result;

use super::error::{map_put_item_error, map_query_error};
use crate::config::DynamoDbConfig;
use crate::storage::codec::{self, ATTR_ACTIVE, ATTR_ID, ENTITY_TYPE};
use crate::storage::{Item, ScanPage, TableAccessor};

/// Beers table in DynamoDB.
///
/// Expects `id` (S) as partition key and a global secondary index on
/// `active` (N); see [`super::schema`].
#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
    index_name: String,
    page_size: Option<i32>,
}

impl DynamoDbTable {
    /// Creates a table accessor with the given client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: super::schema::ACTIVE_INDEX.to_string(),
            page_size: None,
        }
    }

    /// Uses a different name for the active-beers index.
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Caps the number of items per index page (`Limit`).
    pub fn with_page_size(mut self, page_size: Option<i32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Builds the SDK client from the default credential chain plus the
    /// configured region and endpoint.
    pub async fn from_config(config: &DynamoDbConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), &config.table_name)
            .with_index_name(&config.index_name)
            .with_page_size(config.page_size)
    }

    /// Get the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[async_trait]
impl TableAccessor for DynamoDbTable {
    async fn get_by_key(&self, id: i64) -> Result<Vec<Item>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#id = :id")
            .expression_attribute_names("#id", ATTR_ID)
            .expression_attribute_values(":id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(result.items.unwrap_or_default())
    }

    async fn put_if_absent(&self, item: Item) -> Result<()> {
        let id = codec::key_of(&item).unwrap_or_default().to_string();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", ATTR_ID)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, ENTITY_TYPE, id))?;

        Ok(())
    }

    async fn scan_active_page(&self, start: Option<Item>) -> Result<ScanPage> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression("#active = :active")
            .expression_attribute_names("#active", ATTR_ACTIVE)
            .expression_attribute_values(":active", codec::active_value())
            .set_exclusive_start_key(start)
            .set_limit(self.page_size)
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(ScanPage {
            items: result.items.unwrap_or_default(),
            next: result.last_evaluated_key.filter(|key| !key.is_empty()),
        })
    }
}
