use super::super::AppError;
use crate::impl_validated_id;

/// A validated option identifier, unique within its category.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters, `-`, or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(String);

impl_validated_id!(OptionId, AppError::InvalidOptionId);

impl From<OptionId> for String {
    fn from(val: OptionId) -> Self {
        val.0
    }
}
