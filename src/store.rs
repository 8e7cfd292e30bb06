//! Storage adapters mapping a book key onto exactly one storage round trip.
//!
//! No retries, no caching: every call is a single read, write or atomic update.

/// DynamoDB-backed store.
pub mod dynamo;

/// In-memory store for tests and local runs.
pub mod memory;

use crate::{book::Book, error::StoreResult};

use async_trait::async_trait;

/// Persistence of books by their (ISBN, author) composite key.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Point lookup. `None` when no book is stored under the key.
    async fn fetch(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>>;

    /// Unconditional write of the book with its counter seeded to one.
    ///
    /// An existing book under the same key is replaced, which resets its counter.
    async fn create(&self, book: &Book) -> StoreResult<()>;

    /// Atomically adds one to the counter and returns the updated book.
    ///
    /// `None` when no book is stored under the key; nothing is created in that case.
    async fn increment_count(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>>;
}
