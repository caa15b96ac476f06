//! Element tree property tests
//!
//! Property-based checks over randomly generated element trees.

use proptest::prelude::*;
use tagsmith::prelude::*;
use tagsmith::tags;

/// Generates trees of content and void elements with escaped text leaves.
fn element_tree() -> impl Strategy<Value = Element> {
	let leaf = prop_oneof![
		"[a-zA-Z0-9 <>&\"']{0,12}".prop_map(|text| tags::span(text, Attributes::new())),
		Just(tags::br(Attributes::new())),
		"[a-z./]{1,10}".prop_map(|src| tags::img(Some(src.as_str()), None, None, None, Attributes::new())),
	];

	leaf.prop_recursive(4, 32, 4, |inner| {
		prop::collection::vec(inner, 0..4)
			.prop_map(|children| tags::div(children, None, None, Attributes::new()))
	})
}

fn count_elements(element: &Element) -> usize {
	let mut copy = element.clone();
	let mut count = 0;
	copy.visit_mut(|_| count += 1);
	count
}

proptest! {
	/// Test: rendering the same tree twice gives the same markup
	///
	/// Category: Property
	#[test]
	fn prop_render_is_deterministic(tree in element_tree()) {
		prop_assert_eq!(tree.render(), tree.render());
		prop_assert_eq!(tree.clone().render(), tree.render());
	}

	/// Test: every element contributes exactly one opening tag
	///
	/// Category: Property
	/// Text leaves are escaped, so `<` only appears at tag boundaries.
	#[test]
	fn prop_one_open_tag_per_element(tree in element_tree()) {
		let rendered = tree.render();
		let opens = rendered.matches('<').count() - rendered.matches("</").count();
		prop_assert_eq!(opens, count_elements(&tree));
	}

	/// Test: XHTML mode only changes how void elements close
	///
	/// Category: Property
	#[test]
	fn prop_xhtml_only_changes_void_endings(tree in element_tree()) {
		let html = tree.render();
		let mut xhtml_tree = tree.clone();
		xhtml_tree.visit_mut(|element| {
			element.set_xhtml(true);
		});
		let xhtml = xhtml_tree.render();

		prop_assert_eq!(xhtml.replace(" />", ">"), html);
	}

	/// Test: applying settings and reverting them restores the output
	///
	/// Category: Property
	#[test]
	fn prop_settings_round_trip(tree in element_tree(), xhtml in any::<bool>(), escape in any::<bool>()) {
		let original = tree.render();
		let mut document = tree;

		RenderSettings { xhtml, escape }.apply(&mut document);
		RenderSettings::default().apply(&mut document);

		prop_assert_eq!(document.render(), original);
	}
}
