//! Integration test utilities for Tagsmith
//!
//! Shared fixtures for the integration tests: a sample document, a custom
//! escaper, and a log capture layer.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use tagsmith::Escaper;
use tagsmith::prelude::*;
use tagsmith::tags::{a, body, div, em, h1, head, html, img, li, meta, p, title, ul};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Builds a small but complete page exercising text, nesting, sequences,
/// void elements and list-valued attributes.
pub fn sample_document() -> Element {
	let mut classes = Attributes::new();
	classes
		.set("class", ["content", "wide"])
		.expect("valid attribute name");

	html(
		[
			head(
				[
					meta(None, None, Some("utf-8"), None, Attributes::new()),
					title("Tagsmith & friends", Attributes::new()),
				],
				Attributes::new(),
			),
			body(
				div(
					[
						Node::from(h1("Welcome", Attributes::new())),
						Node::from(p(
							vec![
								Node::from("Read the "),
								Node::from(a(
									em("docs", Attributes::new()),
									Some("/docs?page=1"),
									Attributes::new(),
								)),
								Node::from("."),
							],
							Attributes::new(),
						)),
						Node::from(img(Some("logo.png"), Some("Logo"), Some(64), None, Attributes::new())),
						Node::from(ul(
							[li("one", Attributes::new()), li("two", Attributes::new())],
							Attributes::new(),
						)),
					],
					None,
					None,
					classes,
				),
				Attributes::new(),
			),
		],
		Attributes::new(),
	)
}

/// Escaper that upper-cases text and leaves attribute values untouched.
#[derive(Debug, Default)]
pub struct ShoutingEscaper;

impl Escaper for ShoutingEscaper {
	fn escape_html<'a>(&self, text: &'a str) -> Cow<'a, str> {
		Cow::Owned(text.to_uppercase())
	}

	fn escape_attribute<'a>(&self, text: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(text)
	}
}

/// A tracing layer that captures log messages to a `Vec<String>`
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		if let Ok(mut logs) = self.logs.lock() {
			logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
		}
	}
}

/// Runs `f` with a thread-local subscriber and returns every event it logged
/// as `"[LEVEL] message"`.
pub fn capture_logs(f: impl FnOnce()) -> Vec<String> {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let capture = LogCapture { logs: logs.clone() };

	{
		let _guard = tracing_subscriber::registry().with(capture).set_default();
		f();
	}

	logs.lock().map(|logs| logs.clone()).unwrap_or_default()
}
