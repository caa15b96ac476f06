//! Element content.

use crate::element::Element;

/// Content stored inside an element.
///
/// An element without a value (`None`) renders as a void element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Text content, escaped at render time when the element's escape flag
	/// is on.
	Text(String),
	/// A single nested element.
	Element(Box<Element>),
	/// Text and elements rendered one after another.
	Sequence(Vec<Node>),
}

/// One entry of a [`Value::Sequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Text(String),
	Element(Element),
}

impl Value {
	/// Returns the text if this is a [`Value::Text`].
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the nested element if this is a [`Value::Element`].
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// Returns the nodes if this is a [`Value::Sequence`].
	pub fn as_sequence(&self) -> Option<&[Node]> {
		match self {
			Self::Sequence(nodes) => Some(nodes),
			_ => None,
		}
	}

	pub(crate) fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
		match self {
			Self::Text(_) => {}
			Self::Element(element) => f(element.as_mut()),
			Self::Sequence(nodes) => {
				for node in nodes {
					if let Node::Element(element) = node {
						f(element);
					}
				}
			}
		}
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&String> for Value {
	fn from(text: &String) -> Self {
		Self::Text(text.clone())
	}
}

impl From<Element> for Value {
	fn from(element: Element) -> Self {
		Self::Element(Box::new(element))
	}
}

impl<T: Into<Node>> From<Vec<T>> for Value {
	fn from(nodes: Vec<T>) -> Self {
		Self::Sequence(nodes.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Value {
	fn from(nodes: [T; N]) -> Self {
		Self::Sequence(nodes.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Node>> FromIterator<T> for Value {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::Sequence(iter.into_iter().map(Into::into).collect())
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}
