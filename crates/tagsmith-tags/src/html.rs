//! Constructor functions for the standard HTML tags.
//!
//! Content tags take the element content first. Void tags take no content
//! and always render as void elements. Every function ends with a free-form
//! [`Attributes`](tagsmith_core::Attributes) map that is merged after the
//! named attributes and wins on key collision.

html_tags! {
	/// Create an `<a>` element (hyperlink)
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_tags::{Attributes, a, em};
	///
	/// let link = a(em("Phower", Attributes::new()), Some("http://phower.com"), Attributes::new());
	/// assert_eq!(
	/// 	link.render(),
	/// 	r#"<a href="http&#x3A;&#x2F;&#x2F;phower.com"><em>Phower</em></a>"#
	/// );
	/// ```
	content a = "a" (href => "href": text);

	/// Create an `<abbr>` element
	content abbr = "abbr" (title => "title": text);

	/// Create an `<address>` element
	content address = "address" ();

	/// Create an `<area>` element (image map region)
	void area = "area" (shape => "shape": text, coords => "coords": text, href => "href": text, alt => "alt": text);

	/// Create an `<article>` element
	content article = "article" ();

	/// Create an `<aside>` element
	content aside = "aside" ();

	/// Create an `<audio>` element
	///
	/// `controls`, `loop_` and `muted` are boolean attributes and render as
	/// `controls="controls"` when set.
	content audio = "audio" (
		controls => "controls": flag,
		loop_ => "loop": flag,
		muted => "muted": flag,
		preload => "preload": text,
	);

	/// Create a `<b>` element
	content b = "b" ();

	/// Create a `<base>` element
	void base = "base" (href => "href": text, target => "target": text);

	/// Create a `<blockquote>` element
	content blockquote = "blockquote" (cite => "cite": text);

	/// Create a `<body>` element
	content body = "body" ();

	/// Create a `<br>` element
	void br = "br" ();

	/// Create a `<button>` element
	content button = "button" (type_ => "type": text, name => "name": text);

	/// Create a `<canvas>` element
	///
	/// Unlike most sized elements, `width` and `height` are emitted as given,
	/// zero and negative values included.
	content canvas = "canvas" (width => "width": number, height => "height": number);

	/// Create a `<caption>` element
	content caption = "caption" ();

	/// Create a `<cite>` element
	content cite = "cite" ();

	/// Create a `<code>` element
	content code = "code" ();

	/// Create a `<col>` element
	void col = "col" (span => "span": number);

	/// Create a `<colgroup>` element
	content colgroup = "colgroup" (span => "span": number);

	/// Create a `<dd>` element
	content dd = "dd" ();

	/// Create a `<del>` element
	content del = "del" (cite => "cite": text, datetime => "datetime": text);

	/// Create a `<dfn>` element
	content dfn = "dfn" ();

	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_tags::{Attributes, div};
	///
	/// let container = div("Content", Some("main"), Some("container"), Attributes::new());
	/// assert_eq!(container.render(), r#"<div id="main" class="container">Content</div>"#);
	/// ```
	content div = "div" (id => "id": text, class => "class": text);

	/// Create a `<dl>` element
	content dl = "dl" ();

	/// Create a `<dt>` element
	content dt = "dt" ();

	/// Create an `<em>` element
	content em = "em" ();

	/// Create an `<embed>` element
	void embed = "embed" (
		src => "src": text,
		type_ => "type": text,
		width => "width": positive,
		height => "height": positive,
	);

	/// Create a `<fieldset>` element
	content fieldset = "fieldset" (name => "name": text);

	/// Create a `<figcaption>` element
	content figcaption = "figcaption" ();

	/// Create a `<figure>` element
	content figure = "figure" ();

	/// Create a `<footer>` element
	content footer = "footer" ();

	/// Create a `<form>` element
	content form = "form" (
		action => "action": text,
		method => "method": text,
		enctype => "enctype": text,
		name => "name": text,
	);

	/// Create an `<h1>` element
	content h1 = "h1" ();

	/// Create an `<h2>` element
	content h2 = "h2" ();

	/// Create an `<h3>` element
	content h3 = "h3" ();

	/// Create an `<h4>` element
	content h4 = "h4" ();

	/// Create an `<h5>` element
	content h5 = "h5" ();

	/// Create an `<h6>` element
	content h6 = "h6" ();

	/// Create a `<head>` element
	content head = "head" ();

	/// Create a `<header>` element
	content header = "header" ();

	/// Create an `<hr>` element
	void hr = "hr" ();

	/// Create an `<html>` element
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_tags::{Attributes, body, head, html, title};
	///
	/// let page = html(
	/// 	[
	/// 		head(title("Phower", Attributes::new()), Attributes::new()),
	/// 		body(["Hello World!"], Attributes::new()),
	/// 	],
	/// 	Attributes::new(),
	/// );
	/// assert_eq!(
	/// 	page.render(),
	/// 	"<html><head><title>Phower</title></head><body>Hello World!</body></html>"
	/// );
	/// ```
	content html = "html" ();

	/// Create an `<i>` element
	content i = "i" ();

	/// Create an `<iframe>` element
	content iframe = "iframe" (src => "src": text, name => "name": text);

	/// Create an `<img>` element
	///
	/// `width` and `height` are omitted unless greater than zero.
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_tags::{Attributes, img};
	///
	/// let logo = img(Some("logo.png"), Some("logo"), Some(200), Some(0), Attributes::new());
	/// assert_eq!(logo.render(), r#"<img src="logo.png" alt="logo" width="200">"#);
	/// ```
	void img = "img" (
		src => "src": text,
		alt => "alt": text,
		width => "width": positive,
		height => "height": positive,
	);

	/// Create an `<input>` element
	void input = "input" (type_ => "type": text, name => "name": text, value => "value": text);

	/// Create an `<ins>` element
	content ins = "ins" ();

	/// Create a `<kbd>` element
	content kbd = "kbd" ();

	/// Create a `<label>` element
	content label = "label" (for_ => "for": text);

	/// Create a `<legend>` element
	content legend = "legend" ();

	/// Create an `<li>` element
	content li = "li" ();

	/// Create a `<link>` element
	void link = "link" (rel => "rel": text, type_ => "type": text, href => "href": text);

	/// Create a `<main>` element
	content main = "main" ();

	/// Create a `<map>` element
	content map = "map" (name => "name": text);

	/// Create a `<mark>` element
	content mark = "mark" ();

	/// Create a `<meta>` element
	void meta = "meta" (
		name => "name": text,
		content => "content": text,
		charset => "charset": text,
		http_equiv => "http-equiv": text,
	);

	/// Create a `<nav>` element
	content nav = "nav" ();

	/// Create a `<noscript>` element
	content noscript = "noscript" ();

	/// Create an `<object>` element
	content object = "object" (
		name => "name": text,
		type_ => "type": text,
		data => "data": text,
		width => "width": positive,
		height => "height": positive,
	);

	/// Create an `<ol>` element
	content ol = "ol" (type_ => "type": text, start => "start": number, reversed => "reversed": flag);

	/// Create an `<optgroup>` element
	content optgroup = "optgroup" (label => "label": text);

	/// Create an `<option>` element
	///
	/// The first argument is the option text, not its `value`.
	content option = "option" (value => "value": text, selected => "selected": flag);

	/// Create a `<p>` element (paragraph)
	content p = "p" ();

	/// Create a `<param>` element
	void param = "param" (name => "name": text, value => "value": text);

	/// Create a `<pre>` element
	content pre = "pre" ();

	/// Create a `<q>` element
	content q = "q" ();

	/// Create an `<s>` element
	content s = "s" ();

	/// Create a `<samp>` element
	content samp = "samp" ();

	/// Create a `<script>` element
	///
	/// Script bodies are text like any other content. Turn escaping off with
	/// [`Element::set_escape`](tagsmith_core::Element::set_escape) to emit
	/// code verbatim.
	content script = "script" (src => "src": text, type_ => "type": text);

	/// Create a `<section>` element
	content section = "section" ();

	/// Create a `<select>` element
	content select = "select" (name => "name": text, multiple => "multiple": flag, size => "size": positive);

	/// Create a `<small>` element
	content small = "small" ();

	/// Create a `<source>` element
	void source = "source" (src => "src": text, type_ => "type": text);

	/// Create a `<span>` element
	content span = "span" ();

	/// Create a `<strong>` element
	content strong = "strong" ();

	/// Create a `<style>` element
	content style = "style" (type_ => "type": text);

	/// Create a `<sub>` element
	content sub = "sub" ();

	/// Create a `<sup>` element
	content sup = "sup" ();

	/// Create a `<table>` element
	content table = "table" ();

	/// Create a `<tbody>` element
	content tbody = "tbody" ();

	/// Create a `<td>` element
	content td = "td" (colspan => "colspan": positive, rowspan => "rowspan": positive);

	/// Create a `<textarea>` element
	content textarea = "textarea" (name => "name": text, rows => "rows": positive, cols => "cols": positive);

	/// Create a `<tfoot>` element
	content tfoot = "tfoot" ();

	/// Create a `<th>` element
	content th = "th" (colspan => "colspan": positive, rowspan => "rowspan": positive);

	/// Create a `<thead>` element
	content thead = "thead" ();

	/// Create a `<time>` element
	content time = "time" (datetime => "datetime": text);

	/// Create a `<title>` element
	content title = "title" ();

	/// Create a `<tr>` element
	content tr = "tr" ();

	/// Create a `<track>` element
	void track = "track" (
		src => "src": text,
		kind => "kind": text,
		srclang => "srclang": text,
		label => "label": text,
		default_ => "default": flag,
	);

	/// Create a `<u>` element
	content u = "u" ();

	/// Create a `<ul>` element
	content ul = "ul" ();

	/// Create a `<video>` element
	content video = "video" (
		src => "src": text,
		poster => "poster": text,
		controls => "controls": flag,
		loop_ => "loop": flag,
		muted => "muted": flag,
		width => "width": positive,
		height => "height": positive,
	);

	/// Create a `<wbr>` element (line break opportunity)
	void wbr = "wbr" ();
}
