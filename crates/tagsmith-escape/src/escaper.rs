//! The escaping capability consumed by element rendering.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::html::HtmlEscaper;

/// Converts unsafe characters into encoded forms for HTML contexts.
///
/// Implementations must be stateless or internally synchronized: a single
/// instance is shared by every element that was not given its own escaper.
pub trait Escaper: Send + Sync + fmt::Debug {
	/// Escapes text for HTML body or attribute-name position.
	fn escape_html<'a>(&self, text: &'a str) -> Cow<'a, str>;

	/// Escapes text for use inside a quoted attribute value.
	fn escape_attribute<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

static DEFAULT_ESCAPER: OnceLock<Arc<dyn Escaper>> = OnceLock::new();

/// Returns the process-wide default escaper.
///
/// The instance is created on first use and shared afterwards.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tagsmith_escape::default_escaper;
///
/// let first = default_escaper();
/// let second = default_escaper();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.escape_html("<b>"), "&lt;b&gt;");
/// ```
pub fn default_escaper() -> Arc<dyn Escaper> {
	DEFAULT_ESCAPER
		.get_or_init(|| Arc::new(HtmlEscaper))
		.clone()
}

impl<E: Escaper + ?Sized> Escaper for Arc<E> {
	fn escape_html<'a>(&self, text: &'a str) -> Cow<'a, str> {
		(**self).escape_html(text)
	}

	fn escape_attribute<'a>(&self, text: &'a str) -> Cow<'a, str> {
		(**self).escape_attribute(text)
	}
}
