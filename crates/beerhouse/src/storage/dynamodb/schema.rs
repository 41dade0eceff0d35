//! Beers table provisioning.
//!
//! Creates the table with its `by_active` index when it does not exist and
//! waits until both are active. Intended for local DynamoDB and first
//! deployments; an existing table is never modified.

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, IndexStatus, KeySchemaElement,
    KeyType, Projection, ProjectionType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use thiserror::Error;

use crate::storage::codec::{ATTR_ACTIVE, ATTR_ID};

/// Default name of the index over `active`.
pub const ACTIVE_INDEX: &str = "by_active";

const MAX_WAIT_ATTEMPTS: u32 = 60;
const WAIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),
    #[error("Timed out waiting for table '{0}' to become active")]
    TableActivationTimeout(String),
}

/// Outcome of [`ensure_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

/// Creates the beers table unless it already exists.
pub async fn ensure_table(
    client: &Client,
    table_name: &str,
    index_name: &str,
) -> Result<Provisioned, SchemaError> {
    if table_status(client, table_name).await?.is_some() {
        tracing::info!(table = table_name, "table already exists");
        return Ok(Provisioned::AlreadyExists);
    }

    tracing::info!(table = table_name, index = index_name, "creating table");
    create_table(client, table_name, index_name).await?;
    wait_for_table_active(client, table_name).await?;
    tracing::info!(table = table_name, "table is active");

    Ok(Provisioned::Created)
}

async fn create_table(
    client: &Client,
    table_name: &str,
    index_name: &str,
) -> Result<(), SchemaError> {
    let attribute_definitions = vec![
        attribute(ATTR_ID, ScalarAttributeType::S)?,
        attribute(ATTR_ACTIVE, ScalarAttributeType::N)?,
    ];

    let index = GlobalSecondaryIndex::builder()
        .index_name(index_name)
        .key_schema(hash_key(ATTR_ACTIVE)?)
        .projection(
            Projection::builder()
                .projection_type(ProjectionType::All)
                .build(),
        )
        .build()
        .map_err(|e| SchemaError::AwsSdk(e.to_string()))?;

    client
        .create_table()
        .table_name(table_name)
        .set_attribute_definitions(Some(attribute_definitions))
        .key_schema(hash_key(ATTR_ID)?)
        .global_secondary_indexes(index)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| SchemaError::AwsSdk(e.to_string()))?;

    Ok(())
}

fn attribute(
    name: &str,
    attribute_type: ScalarAttributeType,
) -> Result<AttributeDefinition, SchemaError> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(attribute_type)
        .build()
        .map_err(|e| SchemaError::AwsSdk(e.to_string()))
}

fn hash_key(name: &str) -> Result<KeySchemaElement, SchemaError> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| SchemaError::AwsSdk(e.to_string()))
}

/// Whether the table and all its indexes are active.
/// `None` when the table does not exist.
async fn table_status(client: &Client, table_name: &str) -> Result<Option<bool>, SchemaError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };
            let table_active = matches!(table.table_status(), Some(TableStatus::Active));
            let indexes_active = table
                .global_secondary_indexes()
                .iter()
                .all(|gsi| matches!(gsi.index_status(), Some(IndexStatus::Active)));
            Ok(Some(table_active && indexes_active))
        }
        Err(err) => {
            let err = err.into_service_error();
            if err.is_resource_not_found_exception() {
                Ok(None)
            } else {
                Err(SchemaError::AwsSdk(err.to_string()))
            }
        }
    }
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<(), SchemaError> {
    for _ in 0..MAX_WAIT_ATTEMPTS {
        if table_status(client, table_name).await? == Some(true) {
            return Ok(());
        }
        tokio::time::sleep(WAIT_DELAY).await;
    }

    Err(SchemaError::TableActivationTimeout(table_name.to_string()))
}
