//! In-memory storage backend.
//!
//! Stores items in a `BTreeMap` behind a `tokio::sync::RwLock`. Used by the
//! test suite and by `--storage memory` for local development. Data is lost
//! when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! let table = Arc::new(InMemoryTable::new().with_page_size(2));
//! let repo = CatalogRepository::new(table);
//! ```

mod table;

pub use table::InMemoryTable;
