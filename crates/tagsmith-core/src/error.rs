//! Error types for element construction and mutation.

/// Result type for element operations
pub type TagResult<T> = Result<T, TagError>;

/// Validation errors raised while building or mutating an element.
///
/// Every variant is an invalid-argument failure: the caller passed input the
/// element refuses to store. Rendering never produces an error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
	#[error("Tag name can't be an empty string")]
	EmptyName,

	#[error("Attribute name must be a non-empty string")]
	EmptyAttributeName,

	#[error("Attribute with name \"{0}\" already exists")]
	DuplicateAttribute(String),

	#[error("Attribute \"{0}\" does not exist")]
	MissingAttribute(String),
}

impl TagError {
	/// Returns `true` for every variant.
	///
	/// Lets callers that only distinguish argument errors from other failures
	/// match on one predicate instead of the variant list.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(
			self,
			Self::EmptyName
				| Self::EmptyAttributeName
				| Self::DuplicateAttribute(_)
				| Self::MissingAttribute(_)
		)
	}
}
