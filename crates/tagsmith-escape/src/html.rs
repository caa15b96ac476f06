//! Default HTML escaper

use std::borrow::Cow;

use crate::escaper::Escaper;

/// Replacement for control characters that have no safe attribute form.
const REPLACEMENT_REFERENCE: &str = "&#xFFFD;";

/// Stateless escaper with byte-stable output.
///
/// Text escaping replaces `&`, `<`, `>`, `"` and `'`. Attribute escaping
/// encodes every character outside `[A-Za-z0-9,._-]` as a character
/// reference, so the value stays inert even if it ends up unquoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
	fn escape_html<'a>(&self, text: &'a str) -> Cow<'a, str> {
		escape_html(text)
	}

	fn escape_attribute<'a>(&self, text: &'a str) -> Cow<'a, str> {
		escape_attribute(text)
	}
}

/// Escape HTML special characters
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use tagsmith_escape::escape_html;
///
/// assert_eq!(escape_html("Hello, World!"), "Hello, World!");
/// assert_eq!(
///     escape_html("<script>alert('XSS')</script>"),
///     "&lt;script&gt;alert(&#039;XSS&#039;)&lt;/script&gt;"
/// );
/// assert_eq!(escape_html("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}

	let mut escaped = String::with_capacity(text.len() + 16);
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

/// Escape an attribute value
///
/// Empty values and values made only of ASCII digits are returned as is.
///
/// # Examples
///
/// ```
/// use tagsmith_escape::escape_attribute;
///
/// assert_eq!(escape_attribute("picture.jpg"), "picture.jpg");
/// assert_eq!(escape_attribute("Phower Website"), "Phower&#x20;Website");
/// assert_eq!(escape_attribute("a\"b"), "a&quot;b");
/// assert_eq!(escape_attribute("800"), "800");
/// ```
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
	if text.is_empty() || text.bytes().all(|b| b.is_ascii_digit()) {
		return Cow::Borrowed(text);
	}
	if text.chars().all(is_attribute_safe) {
		return Cow::Borrowed(text);
	}

	let mut escaped = String::with_capacity(text.len() * 2);
	for ch in text.chars() {
		if is_attribute_safe(ch) {
			escaped.push(ch);
		} else {
			push_attribute_reference(ch, &mut escaped);
		}
	}
	Cow::Owned(escaped)
}

fn is_attribute_safe(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, ',' | '.' | '-' | '_')
}

fn push_attribute_reference(ch: char, out: &mut String) {
	let code = u32::from(ch);
	if (code <= 0x1f && !matches!(ch, '\t' | '\n' | '\r')) || code == 0x7f {
		out.push_str(REPLACEMENT_REFERENCE);
		return;
	}

	match ch {
		'"' => out.push_str("&quot;"),
		'&' => out.push_str("&amp;"),
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		_ if code <= 0xff => out.push_str(&format!("&#x{code:02X};")),
		_ => {
			// Code points are written as their UTF-16BE code units.
			let mut units = [0u16; 2];
			let value = ch
				.encode_utf16(&mut units)
				.iter()
				.fold(0u32, |acc, unit| (acc << 16) | u32::from(*unit));
			out.push_str(&format!("&#x{value:04X};"));
		}
	}
}
