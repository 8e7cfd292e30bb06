//! The `Book` entity, shared by the wire JSON and the stored DynamoDB item.

use serde::{Deserialize, Serialize, de};
use std::fmt;

/// Attribute (and JSON key) holding the ISBN.
pub const PARTITION_KEY: &str = "pk";

/// Attribute (and JSON key) holding the author.
pub const SORT_KEY: &str = "sk";

/// Attribute (and JSON key) holding the title.
pub const TITLE: &str = "title";

/// Attribute (and JSON key) holding the usage counter.
pub const COUNT: &str = "count";

/// Counter value of a freshly created book.
pub const INITIAL_COUNT: u64 = 1;

/// A book, identified by its ISBN and author.
///
/// Only an object (a JSON object or a stored item) deserializes into a book. Missing and
/// `null` fields take their defaults so that an incomplete request is caught by validation
/// rather than by parsing.
///
/// ```rust
/// use books_api::book::Book;
///
/// let book: Book = serde_json::from_str(r#"{"pk":"123-4567890123","sk":"Orwell"}"#).unwrap();
/// assert_eq!(book.title, "");
/// assert_eq!(book.count, 0);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Book {
    /// ISBN, the partition key.
    #[serde(rename = "pk")]
    pub isbn: String,
    /// Author, the sort key.
    #[serde(rename = "sk")]
    pub author: String,
    /// Title.
    pub title: String,
    /// Usage counter.
    pub count: u64,
}

impl Book {
    /// This book as written by a create: same key and title, counter reset.
    pub fn seeded(&self) -> Self {
        Self {
            count: INITIAL_COUNT,
            ..self.clone()
        }
    }

    /// Path under which the book can be fetched.
    ///
    /// ```rust
    /// use books_api::book::Book;
    ///
    /// let book = Book {
    ///     isbn: "123-4567890123".to_string(),
    ///     author: "George Orwell".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(book.location(), "/books?pk=123-4567890123&sk=George%20Orwell");
    /// ```
    pub fn location(&self) -> String {
        format!(
            "/books?{PARTITION_KEY}={}&{SORT_KEY}={}",
            urlencoding::encode(&self.isbn),
            urlencoding::encode(&self.author)
        )
    }

    /// Names of every stored attribute.
    pub(crate) fn attributes() -> [&'static str; 4] {
        [PARTITION_KEY, SORT_KEY, TITLE, COUNT]
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct BookVisitor;

        impl<'de> de::Visitor<'de> for BookVisitor {
            type Value = Book;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a book object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut book = Book::default();
                while let Some(name) = map.next_key::<String>()? {
                    match name.as_str() {
                        PARTITION_KEY => {
                            book.isbn = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        SORT_KEY => {
                            book.author = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        TITLE => {
                            book.title = map.next_value::<Option<String>>()?.unwrap_or_default();
                        }
                        COUNT => {
                            book.count = map.next_value::<Option<u64>>()?.unwrap_or_default();
                        }
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(book)
            }
        }

        deserializer.deserialize_map(BookVisitor)
    }
}
