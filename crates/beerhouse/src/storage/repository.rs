//! Catalog repository: domain operations over a [`TableAccessor`].

use std::sync::Arc;

use beerhouse_core::beer::Beer;
use beerhouse_core::storage::Result;

use super::{codec, TableAccessor};

/// Beer catalog backed by a key-value table.
///
/// The only component that translates between [`Beer`] and stored items.
#[derive(Clone)]
pub struct CatalogRepository {
    table: Arc<dyn TableAccessor>,
}

impl CatalogRepository {
    /// Creates a repository over the given table.
    pub fn new(table: Arc<dyn TableAccessor>) -> Self {
        Self { table }
    }

    /// Finds a beer by id.
    ///
    /// Returns `Beer::default()` (id `0`) when no beer has this id. Callers
    /// that want an explicit signal should use [`Self::find_optional`].
    pub async fn find(&self, id: i64) -> Result<Beer> {
        Ok(self.find_optional(id).await?.unwrap_or_default())
    }

    /// Finds a beer by id, returning `None` when it does not exist.
    ///
    /// If the key query returns several items only the first is decoded.
    pub async fn find_optional(&self, id: i64) -> Result<Option<Beer>> {
        let items = self.table.get_by_key(id).await.inspect_err(|e| {
            tracing::error!(beer_id = id, error = %e, "error finding beer");
        })?;

        match items.first() {
            Some(item) => Ok(Some(codec::decode(item)?)),
            None => {
                tracing::debug!(beer_id = id, "beer not found");
                Ok(None)
            }
        }
    }

    /// Saves a new beer.
    ///
    /// Fails with `RepositoryError::AlreadyExists` when the id is taken; the
    /// stored beer is left untouched in that case.
    pub async fn save(&self, beer: &Beer) -> Result<()> {
        tracing::info!(beer_id = beer.id, name = %beer.name, "saving beer");

        self.table
            .put_if_absent(codec::encode(beer))
            .await
            .inspect_err(|e| {
                tracing::warn!(beer_id = beer.id, error = %e, "error saving beer");
            })
    }

    /// Lists every active beer.
    ///
    /// Follows continuation keys until the last page, then decodes all
    /// items at once. A failing page or an undecodable item fails the whole
    /// call; no partial list is returned.
    pub async fn list(&self) -> Result<Vec<Beer>> {
        tracing::info!("listing beers");

        let first = self.table.scan_active_page(None).await.inspect_err(|e| {
            tracing::error!(error = %e, "error listing beers");
        })?;

        if first.items.is_empty() {
            tracing::info!("no beers found");
            return Ok(Vec::new());
        }

        let mut items = first.items;
        let mut next = first.next;
        let mut pages = 1usize;

        while let Some(start) = next.take().filter(|key| !key.is_empty()) {
            let page = self
                .table
                .scan_active_page(Some(start))
                .await
                .inspect_err(|e| {
                    tracing::error!(page = pages + 1, error = %e, "error reading another page");
                })?;
            items.extend(page.items);
            next = page.next;
            pages += 1;
        }

        let beers = codec::decode_all(&items).inspect_err(|e| {
            tracing::error!(error = %e, "error decoding listed beers");
        })?;

        tracing::debug!(pages, count = beers.len(), "listed beers");
        Ok(beers)
    }
}
