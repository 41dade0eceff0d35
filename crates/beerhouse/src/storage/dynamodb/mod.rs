//! DynamoDB storage backend.
//!
//! [`DynamoDbTable`] implements [`crate::storage::TableAccessor`] with
//! `aws-sdk-dynamodb`; [`schema`] creates the table and its index.

mod error;
pub mod schema;
mod table;

pub use table::DynamoDbTable;
