//! # Tagsmith Tags
//!
//! One constructor function per standard HTML tag.
//!
//! ## Overview
//!
//! Every function takes the tag's common attributes as named parameters and
//! a free-form [`Attributes`] map last. Unset named parameters are skipped,
//! and entries of the free-form map override named ones on collision:
//!
//! ```
//! use tagsmith_tags::{Attributes, img};
//!
//! let extra = Attributes::try_from_iter([("id", "logo"), ("alt", "Logo")]).unwrap();
//! let logo = img(Some("logo.png"), Some("logo"), Some(200), Some(50), extra);
//! assert_eq!(
//! 	logo.render(),
//! 	r#"<img src="logo.png" alt="Logo" width="200" height="50" id="logo">"#
//! );
//! ```
//!
//! The constructors are generated from a single table, also exposed at
//! runtime as [`CATALOG`].

#[macro_use]
mod macros;

mod catalog;
mod html;

pub use catalog::{TagDescriptor, descriptor, is_void};
pub use html::*;

pub use tagsmith_core::{Attributes, Element, Value};
