use crate::book;

use aws_sdk_dynamodb::types;
use std::collections;

/// Named string key attribute.
///
/// ```rust
/// use books_api::common::key;
///
/// let key = key::KeyAttribute {
///     name: "pk".to_string(),
///     value: "123-4567890123".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct KeyAttribute {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: String,
}

/// Primary key of a table with both a partition key and a sort key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompositeKey {
    /// The partition key.
    pub partition_key: KeyAttribute,
    /// The sort key.
    pub sort_key: KeyAttribute,
}

impl CompositeKey {
    /// Key of the book identified by `isbn` and `author`.
    ///
    /// ```rust
    /// use books_api::common::key::CompositeKey;
    ///
    /// let key = CompositeKey::book("123-4567890123", "Orwell");
    /// assert_eq!(key.partition_key.name, "pk");
    /// assert_eq!(key.sort_key.value, "Orwell");
    /// ```
    pub fn book(isbn: &str, author: &str) -> Self {
        Self {
            partition_key: KeyAttribute {
                name: book::PARTITION_KEY.to_string(),
                value: isbn.to_string(),
            },
            sort_key: KeyAttribute {
                name: book::SORT_KEY.to_string(),
                value: author.to_string(),
            },
        }
    }
}

impl From<CompositeKey> for collections::HashMap<String, types::AttributeValue> {
    fn from(key: CompositeKey) -> Self {
        Self::from([
            (
                key.partition_key.name,
                types::AttributeValue::S(key.partition_key.value),
            ),
            (
                key.sort_key.name,
                types::AttributeValue::S(key.sort_key.value),
            ),
        ])
    }
}
