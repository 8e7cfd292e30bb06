use crate::write;

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_item};
use std::collections;

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: collections::HashMap<String, types::AttributeValue>,
    write_operation: write::common::WriteInput,
}

/// Put item operation.
///
/// The item replaces any existing item with the same primary key.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use books_api::write;
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: json!({"pk": "123-4567890123", "sk": "Orwell", "title": "1984", "count": 1}),
///     write_args: write::common::WriteArgs {
///         table_name: "Books-API".to_string(),
///         ..Default::default()
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PutItem<T> {
    /// The item to put into the table.
    pub item: T,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<PutItem<T>> for PutItemInput {
    type Error = Error;

    fn try_from(put_item: PutItem<T>) -> Result<Self> {
        let item = to_item(put_item.item)?;
        let operation = Self {
            item,
            write_operation: put_item.write_args.into(),
        };
        Ok(operation)
    }
}

impl<T: Serialize + std::fmt::Debug> PutItem<T> {
    /// Execute the put item operation.
    #[tracing::instrument(name = "books_api.put_item", skip(client), err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::json(
        PutItem {
            item: json!(
                {
                    "a": "b"
                }
            ),
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
                ..Default::default()
            },
        },
        PutItemInput {
            item: collections::HashMap::from(
                [(
                    "a".to_string(),
                    types::AttributeValue::S(
                        "b".to_string()
                    ),
                )]
            ),
            write_operation: write::common::WriteInput {
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem<Value>, #[case] expected: PutItemInput) {
        let actual: PutItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_put_book_uses_wire_attribute_names() {
        let put_item = PutItem {
            item: Book {
                isbn: "123-4567890123".to_string(),
                author: "Orwell".to_string(),
                title: "1984".to_string(),
                count: 1,
            },
            write_args: write::common::WriteArgs {
                table_name: "Books-API".to_string(),
                ..Default::default()
            },
        };
        let actual: PutItemInput = put_item.try_into().unwrap();
        let expected = collections::HashMap::from([
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
            ("count".to_string(), types::AttributeValue::N("1".to_string())),
        ]);
        assert_eq!(actual.item, expected);
        assert_eq!(actual.write_operation.condition_expression, None);
    }
}
