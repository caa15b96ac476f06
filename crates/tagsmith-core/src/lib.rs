//! # Tagsmith Core
//!
//! Markup element model and HTML serialization.
//!
//! ## Overview
//!
//! [`Element`] is the single building block. It holds:
//!
//! - a validated [`TagName`]
//! - an optional [`Value`] (text, a nested element, or a sequence of both)
//! - ordered [`Attributes`]
//! - an escape flag and an XHTML flag
//!
//! and renders itself, and everything nested in it, to a string.
//! Text is escaped with the element's [`Escaper`], which defaults to the
//! shared [`HtmlEscaper`](tagsmith_escape::HtmlEscaper).
//!
//! ## Example
//!
//! ```
//! use tagsmith_core::Element;
//!
//! let title = Element::with_value("title", "Phower").unwrap();
//! let head = Element::with_value("head", title).unwrap();
//! let body = Element::with_value("body", vec!["Hello World!"]).unwrap();
//! let html = Element::with_value("html", vec![head, body]).unwrap();
//!
//! assert_eq!(
//! 	html.render(),
//! 	"<html><head><title>Phower</title></head><body>Hello World!</body></html>"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `settings`: [`RenderSettings`], loadable from TOML

mod attributes;
mod element;
mod error;
mod name;
#[cfg(feature = "settings")]
mod settings;
mod value;

pub use attributes::{AttributeValue, Attributes};
pub use element::Element;
pub use error::{TagError, TagResult};
pub use name::{AttributeName, TagName};
#[cfg(feature = "settings")]
pub use settings::{RenderSettings, SettingsError};
pub use value::{Node, Value};

pub use tagsmith_escape::Escaper;
