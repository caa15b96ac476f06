//! Ordered attribute storage.
//!
//! Attributes serialize in insertion order. Keys are [`AttributeName`]s, so
//! every [`Attributes`] value holds only valid names.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};

use crate::error::TagResult;
use crate::name::AttributeName;

/// Value stored under an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
	/// A single string value.
	Text(String),
	/// A list of tokens, serialized joined by single spaces
	/// (e.g. `class="a b"`).
	List(Vec<String>),
}

impl AttributeValue {
	/// Returns the value as it is serialized, before escaping.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::AttributeValue;
	///
	/// let classes = AttributeValue::from(vec!["btn", "btn-primary"]);
	/// assert_eq!(classes.to_text(), "btn btn-primary");
	/// ```
	pub fn to_text(&self) -> Cow<'_, str> {
		match self {
			Self::Text(text) => Cow::Borrowed(text),
			Self::List(items) => Cow::Owned(items.join(" ")),
		}
	}

	/// Returns `true` if the value serializes to an empty string.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text(text) => text.is_empty(),
			Self::List(items) => items.iter().all(String::is_empty) && items.len() <= 1,
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(items: Vec<String>) -> Self {
		Self::List(items)
	}
}

impl From<Vec<&str>> for AttributeValue {
	fn from(items: Vec<&str>) -> Self {
		Self::List(items.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for AttributeValue {
	fn from(items: [&str; N]) -> Self {
		Self::List(items.into_iter().map(str::to_string).collect())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Text(value.to_string())
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Ordered mapping from attribute names to values.
///
/// Setting an existing key replaces its value but keeps its position.
///
/// # Examples
///
/// ```
/// use tagsmith_core::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("href", "/a").unwrap();
/// attrs.set("title", "b").unwrap();
/// attrs.set("href", "/c").unwrap();
///
/// let names: Vec<&str> = attrs.names().collect();
/// assert_eq!(names, ["href", "title"]);
/// assert_eq!(attrs.get("href").unwrap().to_text(), "/c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<AttributeName, AttributeValue>);

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Builds a map from `(name, value)` pairs, validating every name.
	///
	/// Later pairs overwrite earlier ones with the same name.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyAttributeName`](crate::TagError::EmptyAttributeName)
	/// for the first blank name.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Attributes;
	///
	/// let attrs = Attributes::try_from_iter([("id", "page"), ("class", "wide")]).unwrap();
	/// assert_eq!(attrs.len(), 2);
	/// assert!(Attributes::try_from_iter([("", "x")]).is_err());
	/// ```
	pub fn try_from_iter<I, K, V>(pairs: I) -> TagResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		let mut attributes = Self::new();
		for (name, value) in pairs {
			attributes.set(name, value)?;
		}
		Ok(attributes)
	}

	/// Inserts or overwrites an attribute, validating the name.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyAttributeName`](crate::TagError::EmptyAttributeName)
	/// if `name` is blank.
	pub fn set(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> TagResult<&mut Self> {
		let name = AttributeName::new(name)?;
		self.insert(name, value);
		Ok(self)
	}

	/// Inserts or overwrites an attribute under an already validated name.
	///
	/// Returns the previous value, if any.
	pub fn insert(
		&mut self,
		name: AttributeName,
		value: impl Into<AttributeValue>,
	) -> Option<AttributeValue> {
		self.0.insert(name, value.into())
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.0.get(name)
	}

	/// Returns `true` if `name` is present, whatever its value.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Removes `name`, keeping the order of the remaining attributes.
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		self.0.shift_remove(name)
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> Iter<'_, AttributeName, AttributeValue> {
		self.0.iter()
	}

	/// Iterates over attribute names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(AttributeName::as_str)
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Removes every attribute.
	pub fn clear(&mut self) {
		self.0.clear();
	}
}

impl Extend<(AttributeName, AttributeValue)> for Attributes {
	fn extend<T: IntoIterator<Item = (AttributeName, AttributeValue)>>(&mut self, iter: T) {
		self.0.extend(iter);
	}
}

impl FromIterator<(AttributeName, AttributeValue)> for Attributes {
	fn from_iter<T: IntoIterator<Item = (AttributeName, AttributeValue)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Attributes {
	type Item = (AttributeName, AttributeValue);
	type IntoIter = IntoIter<AttributeName, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a AttributeName, &'a AttributeValue);
	type IntoIter = Iter<'a, AttributeName, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
