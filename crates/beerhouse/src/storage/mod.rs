//! Storage layer for the beer catalog.
//!
//! [`CatalogRepository`] is the only type handlers talk to. It encodes and
//! decodes records with [`codec`] and reaches the store through a
//! [`TableAccessor`], implemented for DynamoDB and for an in-memory table.

pub mod codec;
pub mod dynamodb;
pub mod inmemory;
mod repository;
mod traits;

pub use dynamodb::DynamoDbTable;
pub use inmemory::InMemoryTable;
pub use repository::CatalogRepository;
pub use traits::{Item, ScanPage, TableAccessor};
