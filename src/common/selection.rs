use crate::common;

/// Attributes to retrieve, rendered as a projection expression.
///
/// ```rust
/// use books_api::common::selection;
///
/// let selection = selection::Selection::new(["pk", "sk", "count"]);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Selection {
    /// The attribute names, in projection order.
    pub attributes: Vec<String>,
}

impl Selection {
    /// Select the given attribute names.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Selection> for common::ExpressionInput {
    fn from(selection: Selection) -> Self {
        let operations = selection
            .attributes
            .into_iter()
            .map(|name| common::ExpressionInput::for_attribute(name, str::to_string))
            .collect();
        common::ExpressionInput::merge(", ", operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use std::collections;

    #[rstest]
    #[case::single(
        Selection::new(["title"]),
        common::ExpressionInput {
            expression: "#title".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#title".to_string(), "title".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    #[case::reserved_word(
        Selection::new(["pk", "count"]),
        common::ExpressionInput {
            expression: "#pk, #count".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#pk".to_string(), "pk".to_string()),
                    ("#count".to_string(), "count".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    #[case::empty(Selection::default(), common::ExpressionInput::default())]
    fn test_selection(#[case] selection: Selection, #[case] expected: common::ExpressionInput) {
        let actual: common::ExpressionInput = selection.into();
        assert_eq!(actual, expected);
    }
}
