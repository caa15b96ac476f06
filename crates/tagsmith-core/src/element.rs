//! The markup element and its renderer.

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::sync::Arc;

use tagsmith_escape::{Escaper, default_escaper};

use crate::attributes::{AttributeValue, Attributes};
use crate::error::{TagError, TagResult};
use crate::name::{AttributeName, TagName};
use crate::value::{Node, Value};

const HTML_CLOSING_BRACKET: &str = ">";
const XHTML_CLOSING_BRACKET: &str = " />";

/// A single HTML element.
///
/// An element owns its name, optional value, ordered attributes and the
/// flags that control rendering. Elements without a value render as void
/// elements (`<br>`, or `<br />` in XHTML mode).
///
/// # Examples
///
/// ```
/// use tagsmith_core::{Attributes, Element};
///
/// let attrs = Attributes::try_from_iter([
/// 	("href", "http://phower.com"),
/// 	("title", "Phower Website"),
/// ])
/// .unwrap();
/// let link = Element::create("a", Some("Phower".into()), attrs, true, None).unwrap();
///
/// assert_eq!(
/// 	link.render(),
/// 	r#"<a href="http&#x3A;&#x2F;&#x2F;phower.com" title="Phower&#x20;Website">Phower</a>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Element {
	name: TagName,
	value: Option<Value>,
	attributes: Attributes,
	escape: bool,
	xhtml: bool,
	escaper: OnceCell<Arc<dyn Escaper>>,
	closing_bracket: Cell<Option<&'static str>>,
}

impl Element {
	/// Creates a void element with no attributes.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyName`] if `name` is blank.
	pub fn new(name: impl Into<String>) -> TagResult<Self> {
		Self::create(name, None, Attributes::new(), true, None)
	}

	/// Creates an element holding `value`.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyName`] if `name` is blank.
	pub fn with_value(name: impl Into<String>, value: impl Into<Value>) -> TagResult<Self> {
		Self::create(name, Some(value.into()), Attributes::new(), true, None)
	}

	/// Creates an element from every construction argument.
	///
	/// When `escaper` is `None` the process-wide default escaper is used the
	/// first time one is needed.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyName`] if `name` is blank.
	pub fn create(
		name: impl Into<String>,
		value: Option<Value>,
		attributes: Attributes,
		escape: bool,
		escaper: Option<Arc<dyn Escaper>>,
	) -> TagResult<Self> {
		let name = TagName::new(name)?;
		let mut element = Self::from_parts(name, value, attributes);
		element.escape = escape;
		if let Some(escaper) = escaper {
			element.escaper = OnceCell::from(escaper);
		}
		Ok(element)
	}

	/// Creates an element from already validated parts.
	pub fn from_parts(name: TagName, value: Option<Value>, attributes: Attributes) -> Self {
		Self {
			name,
			value,
			attributes,
			escape: true,
			xhtml: false,
			escaper: OnceCell::new(),
			closing_bracket: Cell::new(None),
		}
	}

	/// Tag name as given at construction.
	pub fn name(&self) -> &str {
		self.name.as_str()
	}

	/// Validated tag name.
	pub fn tag_name(&self) -> &TagName {
		&self.name
	}

	// Value

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	pub fn value_mut(&mut self) -> Option<&mut Value> {
		self.value.as_mut()
	}

	/// Replaces the stored value.
	pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	/// Removes the stored value, turning the element back into a void
	/// element.
	pub fn clear_value(&mut self) -> Option<Value> {
		self.value.take()
	}

	/// Returns `true` if the element has no value.
	pub fn is_void(&self) -> bool {
		self.value.is_none()
	}

	// Attributes

	/// Replaces every attribute.
	pub fn set_attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes = attributes;
		self
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns `true` if `name` exists, even when its value is empty.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains(name)
	}

	/// Adds a new attribute.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyAttributeName`] for a blank name and
	/// [`TagError::DuplicateAttribute`] if the attribute already exists.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::{Element, TagError};
	///
	/// let mut link = Element::new("a").unwrap();
	/// link.add_attribute("id", "my-id").unwrap();
	/// assert_eq!(
	/// 	link.add_attribute("id", "other-id").unwrap_err(),
	/// 	TagError::DuplicateAttribute("id".to_string())
	/// );
	/// ```
	pub fn add_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> TagResult<&mut Self> {
		let name = AttributeName::new(name)?;
		self.insert_new_attribute(name, value.into())?;
		Ok(self)
	}

	/// Adds every attribute of `attributes` in order.
	///
	/// Stops at the first name that already exists. Attributes added before
	/// the failure are kept.
	///
	/// # Errors
	///
	/// Returns [`TagError::DuplicateAttribute`] for the first existing name.
	pub fn add_attributes(&mut self, attributes: Attributes) -> TagResult<&mut Self> {
		for (name, value) in attributes {
			self.insert_new_attribute(name, value)?;
		}
		Ok(self)
	}

	fn insert_new_attribute(&mut self, name: AttributeName, value: AttributeValue) -> TagResult<()> {
		if self.attributes.contains(&name) {
			tracing::debug!(tag = %self.name, attribute = %name, "attribute already exists");
			return Err(TagError::DuplicateAttribute(name.to_string()));
		}
		self.attributes.insert(name, value);
		Ok(())
	}

	/// Returns the value of an existing attribute.
	///
	/// # Errors
	///
	/// Returns [`TagError::MissingAttribute`] if `name` is not set.
	pub fn attribute(&self, name: &str) -> TagResult<&AttributeValue> {
		self.attributes.get(name).ok_or_else(|| {
			tracing::debug!(tag = %self.name, attribute = name, "attribute does not exist");
			TagError::MissingAttribute(name.to_string())
		})
	}

	/// Adds or overwrites an attribute. Overwriting keeps the attribute's
	/// position.
	///
	/// # Errors
	///
	/// Returns [`TagError::EmptyAttributeName`] for a blank name.
	pub fn set_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> TagResult<&mut Self> {
		self.attributes.set(name, value)?;
		Ok(self)
	}

	/// Consuming form of [`set_attribute`](Self::set_attribute).
	pub fn with_attribute(
		mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> TagResult<Self> {
		self.set_attribute(name, value)?;
		Ok(self)
	}

	pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
		self.attributes.remove(name)
	}

	// Flags

	/// Whether text content is escaped at render time.
	pub fn escape(&self) -> bool {
		self.escape
	}

	pub fn set_escape(&mut self, escape: bool) -> &mut Self {
		self.escape = escape;
		self
	}

	pub fn with_escape(mut self, escape: bool) -> Self {
		self.escape = escape;
		self
	}

	/// Whether void elements render as `<name />`.
	pub fn is_xhtml(&self) -> bool {
		self.xhtml
	}

	pub fn set_xhtml(&mut self, xhtml: bool) -> &mut Self {
		self.xhtml = xhtml;
		self.closing_bracket.set(None);
		self
	}

	pub fn with_xhtml(mut self, xhtml: bool) -> Self {
		self.set_xhtml(xhtml);
		self
	}

	/// Closing bracket of a void element: `" />"` in XHTML mode, `">"`
	/// otherwise.
	pub fn closing_bracket(&self) -> &'static str {
		if let Some(bracket) = self.closing_bracket.get() {
			return bracket;
		}
		let bracket = if self.xhtml {
			XHTML_CLOSING_BRACKET
		} else {
			HTML_CLOSING_BRACKET
		};
		self.closing_bracket.set(Some(bracket));
		bracket
	}

	// Escaper

	/// Escaper used by this element, resolved to the default on first use.
	pub fn escaper(&self) -> &Arc<dyn Escaper> {
		self.escaper.get_or_init(default_escaper)
	}

	pub fn set_escaper(&mut self, escaper: Arc<dyn Escaper>) -> &mut Self {
		self.escaper = OnceCell::from(escaper);
		self
	}

	// Rendering

	/// Wraps `value` in double quotes, or in single quotes if it contains a
	/// double quote.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Element;
	///
	/// assert_eq!(Element::quote("that's ok!"), r#""that's ok!""#);
	/// assert_eq!(Element::quote(r#""that's ok!""#), r#"'"that's ok!"'"#);
	/// ```
	pub fn quote(value: &str) -> String {
		if value.contains('"') {
			format!("'{value}'")
		} else {
			format!("\"{value}\"")
		}
	}

	/// Opening tag with escaped attributes, e.g. `<a href="x">`.
	pub fn open_tag(&self) -> String {
		let mut out = String::new();
		self.push_open_tag_start(&mut out);
		out.push('>');
		out
	}

	/// Closing tag, e.g. `</a>`.
	pub fn close_tag(&self) -> String {
		format!("</{}>", self.name)
	}

	/// Renders the element and everything nested in it.
	///
	/// Nested elements use their own escape flag, XHTML flag and escaper.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out);
		out
	}

	fn render_into(&self, out: &mut String) {
		tracing::trace!(
			tag = %self.name,
			attributes = self.attributes.len(),
			void = self.value.is_none(),
			"rendering element"
		);

		self.push_open_tag_start(out);
		let Some(value) = &self.value else {
			out.push_str(self.closing_bracket());
			return;
		};
		out.push('>');

		match value {
			Value::Text(text) => self.push_text(text, out),
			Value::Element(element) => element.render_into(out),
			Value::Sequence(nodes) => {
				for node in nodes {
					match node {
						Node::Text(text) => self.push_text(text, out),
						Node::Element(element) => element.render_into(out),
					}
				}
			}
		}

		out.push_str("</");
		out.push_str(&self.name);
		out.push('>');
	}

	/// Writes `<name` and the attributes, without the closing bracket.
	fn push_open_tag_start(&self, out: &mut String) {
		let escaper = self.escaper();
		out.push('<');
		out.push_str(&self.name);
		for (name, value) in &self.attributes {
			let text = value.to_text();
			out.push(' ');
			out.push_str(&escaper.escape_html(name));
			out.push('=');
			out.push_str(&Self::quote(&escaper.escape_attribute(&text)));
		}
	}

	fn push_text(&self, text: &str, out: &mut String) {
		if self.escape {
			out.push_str(&self.escaper().escape_html(text));
		} else {
			out.push_str(text);
		}
	}

	// Tree

	/// Calls `f` on this element and every nested element, parents first.
	pub fn visit_mut<F: FnMut(&mut Element)>(&mut self, mut f: F) {
		self.visit_mut_with(&mut f);
	}

	fn visit_mut_with<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
		f(self);
		if let Some(value) = &mut self.value {
			value.for_each_element_mut(&mut |child: &mut Element| child.visit_mut_with(f));
		}
	}
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.value == other.value
			&& self.attributes == other.attributes
			&& self.escape == other.escape
			&& self.xhtml == other.xhtml
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
