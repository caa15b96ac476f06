//! Validated tag and attribute names.
//!
//! Both names follow the same rule: they must contain at least one
//! character that is neither whitespace nor NUL. The stored text is kept
//! exactly as given.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;

use crate::error::{TagError, TagResult};

fn is_blank(name: &str) -> bool {
	name.chars().all(|c| c.is_whitespace() || c == '\0')
}

/// `const` counterpart of [`is_blank`] for ASCII input.
///
/// Non-ASCII whitespace is rejected by the runtime constructors only.
const fn is_blank_ascii(name: &str) -> bool {
	let bytes = name.as_bytes();
	let mut i = 0;
	while i < bytes.len() {
		if !(bytes[i].is_ascii_whitespace() || bytes[i] == b'\0' || bytes[i] == 0x0B) {
			return false;
		}
		i += 1;
	}
	true
}

/// Type-safe HTML tag name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(Cow<'static, str>);

impl TagName {
	/// Creates a tag name with runtime validation.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::TagName;
	///
	/// assert_eq!(TagName::new("div").unwrap().as_str(), "div");
	/// assert!(TagName::new("").is_err());
	/// assert!(TagName::new("  \t").is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> TagResult<Self> {
		let name = name.into();
		if is_blank(&name) {
			tracing::debug!("rejected blank tag name");
			return Err(TagError::EmptyName);
		}
		Ok(Self(Cow::Owned(name)))
	}

	/// Creates a tag name from a literal, validated at compile time when
	/// used in a `const` context.
	///
	/// # Panics
	///
	/// Panics if the name is empty or only ASCII whitespace and NUL.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::TagName;
	///
	/// const SECTION: TagName = TagName::new_const("section");
	/// assert_eq!(SECTION.as_str(), "section");
	/// ```
	pub const fn new_const(name: &'static str) -> Self {
		assert!(!is_blank_ascii(name), "Tag name can't be an empty string");
		Self(Cow::Borrowed(name))
	}

	/// Returns the name as given at construction.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for TagName {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for TagName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TagName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<&str> for TagName {
	type Error = TagError;

	fn try_from(name: &str) -> TagResult<Self> {
		Self::new(name)
	}
}

impl TryFrom<String> for TagName {
	type Error = TagError;

	fn try_from(name: String) -> TagResult<Self> {
		Self::new(name)
	}
}

/// Type-safe attribute name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeName(Cow<'static, str>);

impl AttributeName {
	/// Creates an attribute name with runtime validation.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::AttributeName;
	///
	/// assert_eq!(AttributeName::new("data-id").unwrap().as_str(), "data-id");
	/// assert!(AttributeName::new(" ").is_err());
	/// ```
	pub fn new(name: impl Into<String>) -> TagResult<Self> {
		let name = name.into();
		if is_blank(&name) {
			tracing::debug!("rejected blank attribute name");
			return Err(TagError::EmptyAttributeName);
		}
		Ok(Self(Cow::Owned(name)))
	}

	/// Creates an attribute name from a literal.
	///
	/// # Panics
	///
	/// Panics if the name is empty or only ASCII whitespace and NUL.
	pub const fn new_const(name: &'static str) -> Self {
		assert!(
			!is_blank_ascii(name),
			"Attribute name must be a non-empty string"
		);
		Self(Cow::Borrowed(name))
	}

	/// Returns the name as given at construction.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for AttributeName {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for AttributeName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

// Lets `IndexMap<AttributeName, _>` be queried with a plain `&str`.
impl Borrow<str> for AttributeName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for AttributeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<&str> for AttributeName {
	type Error = TagError;

	fn try_from(name: &str) -> TagResult<Self> {
		Self::new(name)
	}
}

impl TryFrom<String> for AttributeName {
	type Error = TagError;

	fn try_from(name: String) -> TagResult<Self> {
		Self::new(name)
	}
}
