use crate::common;

/// Logical operator joining the checks of a condition.
const AND: &str = " AND ";

/// Condition requiring every listed attribute to be present on the stored item.
///
/// Guarding an update with the partition key turns "no such item" into a
/// `ConditionalCheckFailedException` instead of an upsert.
///
/// ```rust
/// use books_api::common::condition;
///
/// let condition = condition::ExistenceCondition::new(["pk"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExistenceCondition {
    /// Attributes that must exist.
    pub attributes: Vec<String>,
}

impl ExistenceCondition {
    /// Require the given attributes to exist.
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

impl From<ExistenceCondition> for common::ExpressionInput {
    fn from(condition: ExistenceCondition) -> Self {
        let operations = condition
            .attributes
            .into_iter()
            .map(|name| {
                common::ExpressionInput::for_attribute(name, |placeholder| {
                    format!("attribute_exists({placeholder})")
                })
            })
            .collect();
        common::ExpressionInput::merge(AND, operations)
    }
}
