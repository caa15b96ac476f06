//! Descriptor table of the generated constructors.

use crate::html::CATALOG;

/// Static description of one constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDescriptor {
	/// Tag name as rendered.
	pub name: &'static str,
	/// `true` if the constructor never takes content.
	pub void: bool,
	/// Named attribute parameters, in emission order.
	pub attributes: &'static [&'static str],
}

/// Looks up a tag by name, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use tagsmith_tags::descriptor;
///
/// let img = descriptor("IMG").unwrap();
/// assert!(img.void);
/// assert_eq!(img.attributes, ["src", "alt", "width", "height"]);
/// assert!(descriptor("blink").is_none());
/// ```
pub fn descriptor(tag: &str) -> Option<&'static TagDescriptor> {
	CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(tag))
}

/// Returns `true` if `tag` is a void element of the catalog.
///
/// Unknown tags are not void.
pub fn is_void(tag: &str) -> bool {
	descriptor(tag).is_some_and(|entry| entry.void)
}
