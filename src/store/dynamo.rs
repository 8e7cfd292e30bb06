use crate::{
    book::{self, Book},
    common,
    config::Config,
    error::StoreResult,
    read,
    store::BookStore,
    write,
};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, operation::update_item::UpdateItemError, types};
use serde_dynamo::from_item;

/// Requests against the books table, built without a client.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BookTable {
    /// The table name.
    pub table_name: String,
    /// Whether lookups use strongly consistent reads.
    pub consistent_read: bool,
}

impl BookTable {
    /// Table described by the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            table_name: config.table_name.clone(),
            consistent_read: config.consistent_read,
        }
    }

    /// Point lookup of the four book attributes.
    pub fn get_item(&self, isbn: &str, author: &str) -> read::get_item::GetItem {
        read::get_item::GetItem {
            keys: common::key::CompositeKey::book(isbn, author),
            single_read_args: read::common::SingleReadArgs {
                consistent_read: Some(self.consistent_read),
                selection: Some(common::selection::Selection::new(Book::attributes())),
                table_name: self.table_name.clone(),
            },
        }
    }

    /// Unconditional write of the seeded book.
    pub fn put_item(&self, book: &Book) -> write::put_item::PutItem<Book> {
        write::put_item::PutItem {
            item: book.seeded(),
            write_args: write::common::WriteArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        }
    }

    /// `ADD count 1` on an existing item, returning the updated item.
    pub fn increment_item(&self, isbn: &str, author: &str) -> write::update_item::UpdateItem<u64> {
        write::update_item::UpdateItem {
            keys: common::key::CompositeKey::book(isbn, author),
            add: write::update_item::AddInputs(vec![(book::COUNT.to_string(), 1)]),
            write_args: write::common::WriteArgs {
                condition: Some(common::condition::ExistenceCondition::new([
                    book::PARTITION_KEY,
                ])),
                return_values: Some(types::ReturnValue::AllNew),
                table_name: self.table_name.clone(),
            },
        }
    }
}

/// Books stored in a DynamoDB table keyed by `pk` (ISBN) and `sk` (author).
#[derive(Clone, Debug)]
pub struct DynamoBookStore {
    client: Client,
    table: BookTable,
}

impl DynamoBookStore {
    /// Store using `client` against the configured table.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            table: BookTable::new(config),
        }
    }

    /// The table requests are built for.
    pub fn table(&self) -> &BookTable {
        &self.table
    }
}

#[async_trait]
impl BookStore for DynamoBookStore {
    async fn fetch(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>> {
        let output = self.table.get_item(isbn, author).send(&self.client).await?;
        let book = output.item.map(|item| from_item(item)).transpose()?;
        Ok(book)
    }

    async fn create(&self, book: &Book) -> StoreResult<()> {
        self.table.put_item(book).send(&self.client).await?;
        Ok(())
    }

    async fn increment_count(&self, isbn: &str, author: &str) -> StoreResult<Option<Book>> {
        match self.table.increment_item(isbn, author).send(&self.client).await {
            Ok(output) => {
                let book = output.attributes.map(|item| from_item(item)).transpose()?;
                Ok(book)
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(UpdateItemError::is_conditional_check_failed_exception) =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    use aws_sdk_dynamodb::{
        operation::{
            get_item::GetItemOutput,
            put_item::PutItemOutput,
            update_item::UpdateItemOutput,
        },
        types::error::{ConditionalCheckFailedException, ResourceNotFoundException},
    };
    use aws_smithy_mocks::{mock, mock_client};
    use rstest::rstest;
    use std::{collections, io, sync};

    fn orwell_item() -> collections::HashMap<String, types::AttributeValue> {
        collections::HashMap::from([
            (
                "pk".to_string(),
                types::AttributeValue::S("123-4567890123".to_string()),
            ),
            (
                "sk".to_string(),
                types::AttributeValue::S("Orwell".to_string()),
            ),
            (
                "title".to_string(),
                types::AttributeValue::S("1984".to_string()),
            ),
            ("count".to_string(), types::AttributeValue::N("3".to_string())),
        ])
    }

    fn store(client: Client) -> DynamoBookStore {
        DynamoBookStore::new(client, &Config::default())
    }

    /// Log output collected by a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(sync::Arc<sync::Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn table() -> BookTable {
        BookTable {
            table_name: "Books-API".to_string(),
            consistent_read: false,
        }
    }

    #[rstest]
    #[case::eventual(false)]
    #[case::consistent(true)]
    fn test_get_item(#[case] consistent_read: bool) {
        let table = BookTable {
            consistent_read,
            ..table()
        };
        let expected = read::get_item::GetItem {
            keys: common::key::CompositeKey::book("123-4567890123", "Orwell"),
            single_read_args: read::common::SingleReadArgs {
                consistent_read: Some(consistent_read),
                selection: Some(common::selection::Selection::new([
                    "pk", "sk", "title", "count",
                ])),
                table_name: "Books-API".to_string(),
            },
        };
        assert_eq!(table.get_item("123-4567890123", "Orwell"), expected);
    }

    #[test]
    fn test_put_item_seeds_count() {
        let book = Book {
            isbn: "123-4567890123".to_string(),
            author: "Orwell".to_string(),
            title: "1984".to_string(),
            count: 9,
        };
        let put_item = table().put_item(&book);
        assert_eq!(put_item.item.count, 1);
        assert_eq!(put_item.item.title, "1984");
        assert_eq!(put_item.write_args.condition, None);
        assert_eq!(put_item.write_args.table_name, "Books-API");
    }

    #[test]
    fn test_increment_item_is_conditional() {
        let update_item = table().increment_item("123-4567890123", "Orwell");
        assert_eq!(
            update_item.add,
            write::update_item::AddInputs(vec![("count".to_string(), 1)])
        );
        assert_eq!(
            update_item.write_args.condition,
            Some(common::condition::ExistenceCondition::new(["pk"]))
        );
        assert_eq!(
            update_item.write_args.return_values,
            Some(types::ReturnValue::AllNew)
        );
    }

    #[test]
    fn test_stored_item_reads_back_as_book() {
        let book: Book = from_item(orwell_item()).unwrap();
        assert_eq!(book.count, 3);
        assert_eq!(book.author, "Orwell");
    }

    #[test]
    fn test_stored_item_with_null_title() {
        let mut item = orwell_item();
        item.insert("title".to_string(), types::AttributeValue::Null(true));
        let book: Book = from_item(item).unwrap();
        assert_eq!(book.title, "");
        assert_eq!(book.count, 3);
    }

    #[tokio::test]
    async fn test_fetch() {
        let get_item = mock!(Client::get_item)
            .match_requests(|request| {
                request.table_name() == Some("Books-API")
                    && request.projection_expression() == Some("#pk, #sk, #title, #count")
            })
            .then_output(|| GetItemOutput::builder().set_item(Some(orwell_item())).build());
        let store = store(mock_client!(aws_sdk_dynamodb, [&get_item]));
        let book = store.fetch("123-4567890123", "Orwell").await.unwrap().unwrap();
        assert_eq!(book.title, "1984");
        assert_eq!(book.count, 3);
    }

    #[tokio::test]
    async fn test_fetch_missing() {
        let get_item = mock!(Client::get_item).then_output(|| GetItemOutput::builder().build());
        let store = store(mock_client!(aws_sdk_dynamodb, [&get_item]));
        assert_eq!(store.fetch("123-4567890123", "Huxley").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create() {
        let put_item = mock!(Client::put_item)
            .match_requests(|request| {
                request.condition_expression().is_none()
                    && request
                        .item()
                        .and_then(|item| item.get("count"))
                        == Some(&types::AttributeValue::N("1".to_string()))
            })
            .then_output(|| PutItemOutput::builder().build());
        let store = store(mock_client!(aws_sdk_dynamodb, [&put_item]));
        let book = Book {
            count: 5,
            ..from_item(orwell_item()).unwrap()
        };
        store.create(&book).await.unwrap();
    }

    #[tokio::test]
    async fn test_increment_count() {
        let update_item = mock!(Client::update_item)
            .match_requests(|request| {
                request.update_expression() == Some("ADD #count :add0")
                    && request.condition_expression() == Some("attribute_exists(#pk)")
            })
            .then_output(|| {
                UpdateItemOutput::builder()
                    .set_attributes(Some(orwell_item()))
                    .build()
            });
        let store = store(mock_client!(aws_sdk_dynamodb, [&update_item]));
        let book = store
            .increment_count("123-4567890123", "Orwell")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(book.count, 3);
    }

    #[tokio::test]
    async fn test_increment_count_missing() {
        let update_item = mock!(Client::update_item).then_error(|| {
            UpdateItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder()
                    .message("The conditional request failed")
                    .build(),
            )
        });
        let store = store(mock_client!(aws_sdk_dynamodb, [&update_item]));
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let book = store.increment_count("123-4567890123", "Huxley").await.unwrap();

        assert_eq!(book, None);
        assert_eq!(log.text(), "");
    }

    #[tokio::test]
    async fn test_increment_count_failure() {
        let update_item = mock!(Client::update_item).then_error(|| {
            UpdateItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });
        let store = store(mock_client!(aws_sdk_dynamodb, [&update_item]));
        let error = store
            .increment_count("123-4567890123", "Orwell")
            .await
            .unwrap_err();
        assert!(matches!(error, StoreError::UpdateItem(_)));
    }
}
