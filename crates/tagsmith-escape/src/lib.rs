//! # Tagsmith Escape
//!
//! Escaping collaborator used by `tagsmith-core` when rendering elements.
//!
//! ## Overview
//!
//! Rendering needs two escaping operations:
//!
//! - [`Escaper::escape_html`] for text content and attribute names
//! - [`Escaper::escape_attribute`] for attribute values
//!
//! [`HtmlEscaper`] is the stock implementation. Its output is byte-compatible
//! with the widely deployed contextual escaper that encodes every
//! non-alphanumeric attribute character as a numeric character reference.
//!
//! ## Example
//!
//! ```
//! use tagsmith_escape::{Escaper, HtmlEscaper};
//!
//! let escaper = HtmlEscaper;
//! assert_eq!(escaper.escape_html("a < b"), "a &lt; b");
//! assert_eq!(escaper.escape_attribute("http://x"), "http&#x3A;&#x2F;&#x2F;x");
//! ```

mod escaper;
mod html;

pub use escaper::{Escaper, default_escaper};
pub use html::{HtmlEscaper, escape_attribute, escape_html};
