//! Expression building shared by the read and write operations.
//!
//! Every attribute reference goes through a `#name` placeholder: `count` is a DynamoDB
//! reserved word and would otherwise be rejected in projection and update expressions.

/// `attribute_exists` conditions for conditional writes.
pub mod condition;

/// Composite primary keys.
pub mod key;

/// Attribute selection for projection expressions.
pub mod selection;

use aws_sdk_dynamodb::types;
use std::collections;

pub(crate) fn placeholder(identifier: &str) -> String {
    format!("#{identifier}")
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    /// Expression over a single attribute, referenced through its placeholder.
    pub(crate) fn for_attribute(name: String, expression: impl FnOnce(&str) -> String) -> Self {
        let placeholder = placeholder(&name);
        Self {
            expression: expression(&placeholder),
            expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
            ..Default::default()
        }
    }

    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        match names {
            Some(existing) => existing.extend(self.expression_attribute_names),
            None => *names = Some(self.expression_attribute_names),
        }
        if !self.expression_attribute_values.is_empty() {
            match values {
                Some(existing) => existing.extend(self.expression_attribute_values),
                None => *values = Some(self.expression_attribute_values),
            }
        }
        self.expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::both("a", "b", "a, b")]
    #[case::left_empty("", "b", "b")]
    #[case::right_empty("a", "", "a")]
    fn test_get_expression(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        let actual = get_expression(left.to_string(), ", ", right.to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_merge_into_keeps_values_unset_when_empty() {
        let mut names = None;
        let mut values = None;
        let expression = ExpressionInput::for_attribute("pk".to_string(), |placeholder| {
            format!("attribute_exists({placeholder})")
        })
        .merge_into(&mut names, &mut values);
        assert_eq!(expression, "attribute_exists(#pk)");
        assert_eq!(
            names,
            Some(collections::HashMap::from([(
                "#pk".to_string(),
                "pk".to_string()
            )]))
        );
        assert_eq!(values, None);
    }
}
