//! Rendering benchmarks
//!
//! Benchmarks for element construction and rendering:
//! - Escaping of text and attribute values
//! - Rendering of flat and nested documents

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tagsmith::prelude::*;
use tagsmith::tags::{div, li, p, ul};
use tagsmith::{escape_attribute, escape_html};

fn build_list(items: usize) -> Element {
	let children: Vec<Element> = (0..items)
		.map(|i| li(format!("Item {i} <{i}>"), Attributes::new()))
		.collect();
	ul(children, Attributes::new())
}

fn benchmark_escaping(c: &mut Criterion) {
	c.bench_function("escape_html_clean", |b| {
		b.iter(|| black_box(escape_html(black_box("Hello, World!"))));
	});

	c.bench_function("escape_html_dirty", |b| {
		b.iter(|| black_box(escape_html(black_box("<script>alert('x')</script>"))));
	});

	c.bench_function("escape_attribute_url", |b| {
		b.iter(|| black_box(escape_attribute(black_box("http://phower.com/docs?page=1"))));
	});
}

fn benchmark_rendering(c: &mut Criterion) {
	let paragraph = p("Phower is the power of PHP.", Attributes::new());
	c.bench_function("render_paragraph", |b| {
		b.iter(|| black_box(paragraph.render()));
	});

	let list = build_list(100);
	c.bench_function("render_list_100", |b| {
		b.iter(|| black_box(list.render()));
	});

	let nested = (0..20).fold(p("leaf", Attributes::new()), |inner, _| {
		div(inner, None, Some("wrapper"), Attributes::new())
	});
	c.bench_function("render_nested_20", |b| {
		b.iter(|| black_box(nested.render()));
	});

	c.bench_function("build_and_render_list_100", |b| {
		b.iter(|| black_box(build_list(black_box(100)).render()));
	});
}

criterion_group!(benches, benchmark_escaping, benchmark_rendering);
criterion_main!(benches);
