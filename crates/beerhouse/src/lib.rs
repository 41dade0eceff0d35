//! Beer catalog service: HTTP handlers over a DynamoDB-backed catalog.

pub mod app;
pub mod config;
pub mod currency;
pub mod handlers;
pub mod state;
pub mod storage;
pub mod validation;
