//! Functional core of the beerhouse catalog service.
//!
//! Pure data types and functions shared by the service binary. Nothing in
//! this crate performs I/O.

pub mod beer;
pub mod storage;
