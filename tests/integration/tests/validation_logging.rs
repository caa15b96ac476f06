//! Validation logging integration tests
//!
//! Rejected input is reported through `tracing` at debug level.

use rstest::rstest;
use tagsmith::prelude::*;
use tagsmith_integration_tests::capture_logs;

#[rstest]
fn test_blank_tag_name_is_logged() {
	let logs = capture_logs(|| {
		assert_eq!(Element::new("  ").unwrap_err(), TagError::EmptyName);
	});

	assert!(
		logs.iter()
			.any(|log| log.contains("DEBUG") && log.contains("rejected blank tag name")),
		"Expected debug log for blank tag name, but got: {:?}",
		logs
	);
}

#[rstest]
fn test_duplicate_attribute_is_logged() {
	let logs = capture_logs(|| {
		let mut element = Element::new("a").unwrap();
		element.add_attribute("id", "first").unwrap();
		assert!(element.add_attribute("id", "second").is_err());
	});

	assert!(
		logs.iter().any(|log| log.contains("attribute already exists")),
		"Expected debug log for duplicate attribute, but got: {:?}",
		logs
	);
}

#[rstest]
fn test_render_is_traced_per_element() {
	let logs = capture_logs(|| {
		let inner = Element::with_value("em", "x").unwrap();
		let outer = Element::with_value("p", inner).unwrap();
		let _ = outer.render();
	});

	let renders = logs
		.iter()
		.filter(|log| log.contains("TRACE") && log.contains("rendering element"))
		.count();
	assert_eq!(renders, 2);
}

#[rstest]
fn test_settings_load_is_logged() {
	let logs = capture_logs(|| {
		let settings = RenderSettings::from_toml_str("xhtml = true").unwrap();
		let mut element = Element::new("br").unwrap();
		settings.apply(&mut element);
	});

	assert!(logs.iter().any(|log| log.contains("loaded render settings")));
	assert!(logs.iter().any(|log| log.contains("applying render settings")));
}
