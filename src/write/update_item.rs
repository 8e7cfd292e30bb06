use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// ADD operations for numeric attributes.
///
/// DynamoDB applies every `ADD` of one update expression atomically, so concurrent
/// increments of the same attribute never lose an update.
///
/// ```rust
/// use books_api::write::update_item;
///
/// let inputs = update_item::AddInputs(vec![("count".to_string(), 1)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AddInputs<T>(pub Vec<(String, T)>);

impl<T: Serialize> TryFrom<AddInputs<T>> for common::ExpressionInput {
    type Error = Error;

    fn try_from(add_inputs: AddInputs<T>) -> Result<Self> {
        let mut operations = Vec::with_capacity(add_inputs.0.len());
        for (index, (name, delta)) in add_inputs.0.into_iter().enumerate() {
            let value = to_attribute_value(delta)?;
            let value_placeholder = format!(":add{index}");
            let mut operation = common::ExpressionInput::for_attribute(name, |placeholder| {
                format!("{placeholder} {value_placeholder}")
            });
            operation
                .expression_attribute_values
                .insert(value_placeholder, value);
            operations.push(operation);
        }
        let mut operation = common::ExpressionInput::merge(", ", operations);
        if !operation.expression.is_empty() {
            operation.expression = format!("ADD {}", operation.expression);
        }
        Ok(operation)
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    keys: collections::HashMap<String, types::AttributeValue>,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types};
/// use books_api::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     keys: common::key::CompositeKey::book("123-4567890123", "Orwell"),
///     add: write::update_item::AddInputs(vec![("count".to_string(), 1)]),
///     write_args: write::common::WriteArgs {
///         condition: Some(common::condition::ExistenceCondition::new(["pk"])),
///         return_values: Some(types::ReturnValue::AllNew),
///         table_name: "Books-API".to_string(),
///     },
/// };
/// // Sends "ADD #count :add0" guarded by "attribute_exists(#pk)"
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<T> {
    /// The primary key of the item to update.
    pub keys: common::key::CompositeKey,
    /// The attributes to add to, with their deltas.
    pub add: AddInputs<T>,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<UpdateItem<T>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem<T>) -> Result<Self> {
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let operation = update_item.add.try_into()?;
        let update_expression = write_operation.merge_expression(operation);
        let operation = Self {
            keys: update_item.keys.into(),
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl<T: Serialize + std::fmt::Debug> UpdateItem<T> {
    /// Execute the update item operation.
    ///
    /// Errors are recorded at debug level: a failed condition is an ordinary miss.
    #[tracing::instrument(name = "books_api.update_item", skip(client), err(level = "debug"))]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
