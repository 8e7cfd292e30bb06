//! Read operations for retrieving items from DynamoDB tables.

/// Common utilities and types for read operations.
pub mod common;

/// Get item operation for retrieving a single item by primary key.
pub mod get_item;
