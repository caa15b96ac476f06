//! # Tagsmith
//!
//! Build HTML elements in code and render them to strings, with text and
//! attribute values escaped on the way out.
//!
//! ## Crates
//!
//! - `tagsmith-escape` - the [`Escaper`] trait and the default [`HtmlEscaper`]
//! - `tagsmith-core` - [`Element`] and its building blocks
//! - `tagsmith-tags` - one constructor function per HTML tag, under [`tags`]
//!
//! ## Feature Flags
//!
//! - `tags` (default) - the [`tags`] module
//! - `settings` (default) - [`RenderSettings`], loadable from TOML
//!
//! ## Quick Example
//!
//! ```
//! use tagsmith::prelude::*;
//! use tagsmith::tags::{a, em};
//!
//! let link = a(em("Phower", Attributes::new()), Some("http://phower.com"), Attributes::new());
//! assert_eq!(
//! 	link.to_string(),
//! 	r#"<a href="http&#x3A;&#x2F;&#x2F;phower.com"><em>Phower</em></a>"#
//! );
//! ```
//!
//! Elements can also be built directly:
//!
//! ```
//! use tagsmith::Element;
//!
//! let mut img = Element::new("img").unwrap();
//! img.set_attribute("src", "picture.jpg").unwrap();
//! img.set_xhtml(true);
//! assert_eq!(img.render(), r#"<img src="picture.jpg" />"#);
//! ```

// Re-export the element model
pub use tagsmith_core::{
	AttributeName, AttributeValue, Attributes, Element, Node, TagError, TagName, TagResult, Value,
};

// Re-export escaping
pub use tagsmith_escape::{
	Escaper, HtmlEscaper, default_escaper, escape_attribute, escape_html,
};

#[cfg(feature = "settings")]
pub use tagsmith_core::{RenderSettings, SettingsError};

/// Constructor functions for the standard HTML tags.
#[cfg(feature = "tags")]
pub mod tags {
	pub use tagsmith_tags::*;
}

/// Commonly used types.
pub mod prelude {
	pub use crate::{Attributes, Element, Escaper, Node, TagError, TagResult, Value};

	#[cfg(feature = "settings")]
	pub use crate::RenderSettings;
}
