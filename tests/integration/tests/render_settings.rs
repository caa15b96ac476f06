//! Render settings integration tests
//!
//! Loads settings from TOML and applies them to whole documents.

use rstest::rstest;
use tagsmith::prelude::*;
use tagsmith::SettingsError;
use tagsmith_integration_tests::sample_document;

#[rstest]
fn test_xhtml_settings_reach_every_void_element() {
	let settings = RenderSettings::from_toml_str("xhtml = true").unwrap();
	let mut document = sample_document();

	settings.apply(&mut document);
	let rendered = document.render();

	assert!(rendered.contains(r#"<meta charset="utf-8" />"#));
	assert!(rendered.contains(r#"<img src="logo.png" alt="Logo" width="64" />"#));
	assert!(rendered.contains("<title>Tagsmith &amp; friends</title>"));
}

#[rstest]
fn test_raw_text_settings() {
	let settings = RenderSettings::from_toml_str("escape = false").unwrap();
	let mut document = sample_document();

	settings.apply(&mut document);

	assert!(document.render().contains("<title>Tagsmith & friends</title>"));
}

#[rstest]
fn test_default_settings_do_not_change_output() {
	let mut document = sample_document();
	let before = document.render();

	RenderSettings::default().apply(&mut document);

	assert_eq!(document.render(), before);
}

#[rstest]
#[case("xhtml = 1")]
#[case("[xhtml")]
fn test_invalid_settings(#[case] source: &str) {
	let err = RenderSettings::from_toml_str(source).unwrap_err();
	assert!(matches!(err, SettingsError::Parse(_)));
	assert!(err.to_string().starts_with("Failed to parse render settings"));
}
