use crate::{
    book::Book,
    error::{StoreError, StoreResult},
    store::BookStore,
};

use async_trait::async_trait;
use std::{collections, sync};

type Key = (String, String);

/// Books held in a process-local map.
///
/// Each operation runs under one lock, so an increment is as atomic here as the
/// conditional update is in DynamoDB.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: sync::Mutex<collections::HashMap<Key, Book>>,
}

impl MemoryBookStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> StoreResult<sync::MutexGuard<'_, collections::HashMap<Key, Book>>> {
        self.books
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

fn key(isbn: &str, author: &str) -> Key {
    (isbn.to_string(), author.to_string())
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn fetch(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>> {
        Ok(self.books()?.get(&key(isbn, author)).cloned())
    }

    async fn create(&self, book: &Book) -> StoreResult<()> {
        self.books()?
            .insert(key(&book.isbn, &book.author), book.seeded());
        Ok(())
    }

    async fn increment_count(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>> {
        let mut books = self.books()?;
        let updated = books.get_mut(&key(isbn, author)).map(|book| {
            book.count += 1;
            book.clone()
        });
        Ok(updated)
    }
}
