use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use beerhouse_core::storage::Result;

/// A raw stored item: attribute name to typed value.
pub type Item = HashMap<String, AttributeValue>;

/// One page of the active-beers index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// Key to resume from. `None` on the last page.
    pub next: Option<Item>,
}

/// Operations against the beers table.
///
/// Implementations return raw items; decoding belongs to the caller.
#[async_trait]
pub trait TableAccessor: Send + Sync {
    /// Queries the primary key for `id`.
    ///
    /// Returns every matching item, which is zero or one for a well-formed
    /// table.
    async fn get_by_key(&self, id: i64) -> Result<Vec<Item>>;

    /// Writes `item` unless an item with the same `id` already exists.
    ///
    /// Fails with `RepositoryError::AlreadyExists` when the key is taken.
    async fn put_if_absent(&self, item: Item) -> Result<()>;

    /// Reads one page of the active-beers index, starting after `start`.
    ///
    /// `None` requests the first page. Does not follow continuation keys.
    async fn scan_active_page(&self, start: Option<Item>) -> Result<ScanPage>;
}
