//! Write operations for modifying items in DynamoDB tables.
//!
//! Only the two writes the API needs exist: an unconditional put and a conditional,
//! atomic update.

/// Common utilities and types for write operations.
pub mod common;

/// Put item operation for creating or replacing items.
pub mod put_item;

/// Update item operation for modifying existing items.
pub mod update_item;
