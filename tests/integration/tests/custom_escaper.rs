//! Custom escaper integration tests
//!
//! Elements use an injected escaper instead of the shared default.

use std::sync::Arc;

use rstest::rstest;
use tagsmith::prelude::*;
use tagsmith::{HtmlEscaper, default_escaper};
use tagsmith_integration_tests::ShoutingEscaper;

#[rstest]
fn test_injected_escaper_handles_text_and_attributes() {
	let attrs = Attributes::try_from_iter([("title", "say \"hi\"")]).unwrap();
	let element = Element::create(
		"abbr",
		Some("hello".into()),
		attrs,
		true,
		Some(Arc::new(ShoutingEscaper)),
	)
	.unwrap();

	assert_eq!(element.render(), "<abbr TITLE='say \"hi\"'>HELLO</abbr>");
}

#[rstest]
fn test_escaper_is_not_inherited_by_children() {
	let child = Element::with_value("b", "child").unwrap();
	let mut parent = Element::with_value("p", vec![Node::from("parent "), Node::from(child)]).unwrap();
	parent.set_escaper(Arc::new(ShoutingEscaper));

	assert_eq!(parent.render(), "<p>PARENT <b>child</b></p>");
}

#[rstest]
fn test_escaper_skipped_when_escape_is_off() {
	let mut element = Element::with_value("p", "quiet").unwrap();
	element.set_escaper(Arc::new(ShoutingEscaper)).set_escape(false);

	assert_eq!(element.render(), "<p>quiet</p>");
}

#[rstest]
fn test_default_escaper_matches_html_escaper() {
	let shared = default_escaper();
	let stock = HtmlEscaper;
	for sample in ["a < b", "it's", "http://x.y/?q=1", "日本"] {
		assert_eq!(shared.escape_html(sample), stock.escape_html(sample));
		assert_eq!(shared.escape_attribute(sample), stock.escape_attribute(sample));
	}
}
