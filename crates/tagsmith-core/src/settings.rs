//! Render settings.
//!
//! A [`RenderSettings`] value switches a whole element tree between HTML and
//! XHTML output, or between escaped and raw text, in one call:
//!
//! ```
//! use tagsmith_core::{Element, RenderSettings};
//!
//! let settings = RenderSettings::from_toml_str("xhtml = true").unwrap();
//! let mut p = Element::with_value("p", vec![Element::new("br").unwrap()]).unwrap();
//! settings.apply(&mut p);
//! assert_eq!(p.render(), "<p><br /></p>");
//! ```

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Errors raised while loading render settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to parse render settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Rendering flags applied to every element of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Render void elements as `<name />`.
	pub xhtml: bool,
	/// Escape text content.
	pub escape: bool,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			xhtml: false,
			escape: true,
		}
	}
}

impl RenderSettings {
	/// Parses settings from a TOML document. Missing keys keep their
	/// defaults.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Parse`] if the document is not valid TOML or
	/// a key has the wrong type.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		tracing::debug!(xhtml = settings.xhtml, escape = settings.escape, "loaded render settings");
		Ok(settings)
	}

	/// Sets both flags on `root` and every element nested in it.
	pub fn apply(&self, root: &mut Element) {
		tracing::debug!(
			tag = root.name(),
			xhtml = self.xhtml,
			escape = self.escape,
			"applying render settings"
		);
		root.visit_mut(|element| {
			element.set_xhtml(self.xhtml).set_escape(self.escape);
		});
	}
}
