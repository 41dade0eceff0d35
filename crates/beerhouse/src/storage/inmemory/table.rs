use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use beerhouse_core::storage::{RepositoryError, Result};

use crate::storage::codec::{self, ATTR_ACTIVE, ATTR_ID, ENTITY_TYPE};
use crate::storage::{Item, ScanPage, TableAccessor};

/// Default number of items per index page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory beers table.
///
/// Items are keyed by the string form of their `id`, and index pages come
/// back in key order. Continuation keys carry `id` and `active`, the same
/// shape DynamoDB returns for a query on the index.
#[derive(Debug)]
pub struct InMemoryTable {
    items: RwLock<BTreeMap<String, Item>>,
    page_size: usize,
    unavailable: AtomicBool,
}

impl Default for InMemoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            page_size: DEFAULT_PAGE_SIZE,
            unavailable: AtomicBool::new(false),
        }
    }

    /// Sets how many items an index page holds (at least one).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Stores an item as-is, bypassing the uniqueness check.
    ///
    /// Lets tests plant data the codec would never produce.
    pub async fn insert_raw(&self, item: Item) {
        let key = codec::key_of(&item).unwrap_or_default().to_string();
        self.items.write().await.insert(key, item);
    }

    /// Makes every following operation fail with `ConnectionFailed`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed(
                "in-memory table is unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_active(item: &Item) -> bool {
    item.get(ATTR_ACTIVE) == Some(&codec::active_value())
}

fn continuation_key(key: &str) -> Item {
    let mut next = Item::new();
    next.insert(
        ATTR_ID.to_string(),
        aws_sdk_dynamodb::types::AttributeValue::S(key.to_string()),
    );
    next.insert(ATTR_ACTIVE.to_string(), codec::active_value());
    next
}

#[async_trait]
impl TableAccessor for InMemoryTable {
    async fn get_by_key(&self, id: i64) -> Result<Vec<Item>> {
        self.check_available()?;
        let items = self.items.read().await;
        Ok(items.get(&id.to_string()).cloned().into_iter().collect())
    }

    async fn put_if_absent(&self, item: Item) -> Result<()> {
        self.check_available()?;
        let key = codec::key_of(&item)
            .ok_or_else(|| {
                RepositoryError::QueryFailed(format!("Missing key attribute: {}", ATTR_ID))
            })?
            .to_string();

        let mut items = self.items.write().await;
        if items.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY_TYPE,
                id: key,
            });
        }
        items.insert(key, item);
        Ok(())
    }

    async fn scan_active_page(&self, start: Option<Item>) -> Result<ScanPage> {
        self.check_available()?;

        let lower = match start.as_ref().and_then(codec::key_of) {
            Some(key) => Bound::Excluded(key.to_string()),
            None => Bound::Unbounded,
        };

        let items = self.items.read().await;
        let mut active = items
            .range((lower, Bound::Unbounded))
            .filter(|(_, item)| is_active(item));

        let page: Vec<(&String, &Item)> = active.by_ref().take(self.page_size).collect();
        let next = match (page.last(), active.next()) {
            (Some((last_key, _)), Some(_)) => Some(continuation_key(last_key)),
            _ => None,
        };

        Ok(ScanPage {
            items: page.into_iter().map(|(_, item)| item.clone()).collect(),
            next,
        })
    }
}
