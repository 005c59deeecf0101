//! Tag-level markup builder
//!
//! [`MarkupBuilder`] turns a tag name, an [`AttributeSet`] and some content
//! into an HTML string. Content is escaped unless wrapped in [`Content::Raw`].

use crate::attrs::AttributeSet;
use crate::escape::escape_text;
use std::borrow::Cow;

/// Returns whether `tag` is a void element that never has a closing tag.
pub fn is_void_element(tag: &str) -> bool {
	matches!(
		tag,
		"area"
			| "base" | "br"
			| "col" | "embed"
			| "hr" | "img"
			| "input" | "link"
			| "meta" | "source"
			| "track" | "wbr"
	)
}

/// Inner content of a tag together with its escape policy
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content<'a> {
	/// No content at all
	#[default]
	None,
	/// Text that is HTML-escaped on output
	Encoded(Cow<'a, str>),
	/// Markup inserted verbatim
	Raw(Cow<'a, str>),
}

impl<'a> Content<'a> {
	/// Text content, escaped on output.
	pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
		Self::Encoded(text.into())
	}

	/// Raw markup, inserted verbatim.
	pub fn raw(markup: impl Into<Cow<'a, str>>) -> Self {
		Self::Raw(markup.into())
	}

	/// Picks [`Content::Encoded`] or [`Content::Raw`] from an `encode` flag.
	pub fn with_policy(content: impl Into<Cow<'a, str>>, encode: bool) -> Self {
		if encode {
			Self::text(content)
		} else {
			Self::raw(content)
		}
	}

	/// Whether the content renders to nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::None => true,
			Self::Encoded(s) | Self::Raw(s) => s.is_empty(),
		}
	}

	fn write_into(&self, out: &mut String) {
		match self {
			Self::None => {}
			Self::Encoded(s) => out.push_str(&escape_text(s)),
			Self::Raw(s) => out.push_str(s),
		}
	}
}

/// Stateless HTML tag builder
///
/// ## Example
///
/// ```
/// use trellis_markup::{AttributeSet, Content, MarkupBuilder};
///
/// let attrs = AttributeSet::new().with("id", "w0-button").with_class("btn");
/// assert_eq!(
///     MarkupBuilder::tag("button", &attrs, Content::text("Save & exit")),
///     r#"<button id="w0-button" class="btn">Save &amp; exit</button>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupBuilder;

impl MarkupBuilder {
	/// Renders a complete element.
	///
	/// Void elements without content render in self-closing form.
	pub fn tag(name: &str, attrs: &AttributeSet, content: Content<'_>) -> String {
		let mut out = String::new();
		Self::tag_into(&mut out, name, attrs, content);
		out
	}

	/// Appends a complete element to `out`.
	pub fn tag_into(out: &mut String, name: &str, attrs: &AttributeSet, content: Content<'_>) {
		if is_void_element(name) && content.is_empty() {
			Self::void_tag_into(out, name, attrs);
			return;
		}
		Self::begin_tag_into(out, name, attrs);
		content.write_into(out);
		Self::end_tag_into(out, name);
	}

	/// Renders a self-closing element such as `<img src="..."/>`.
	pub fn void_tag(name: &str, attrs: &AttributeSet) -> String {
		let mut out = String::new();
		Self::void_tag_into(&mut out, name, attrs);
		out
	}

	/// Appends a self-closing element to `out`.
	pub fn void_tag_into(out: &mut String, name: &str, attrs: &AttributeSet) {
		out.push('<');
		out.push_str(name);
		attrs.render_into(out);
		out.push_str("/>");
	}

	/// Renders an opening tag only.
	pub fn begin_tag(name: &str, attrs: &AttributeSet) -> String {
		let mut out = String::new();
		Self::begin_tag_into(&mut out, name, attrs);
		out
	}

	/// Appends an opening tag to `out`.
	pub fn begin_tag_into(out: &mut String, name: &str, attrs: &AttributeSet) {
		out.push('<');
		out.push_str(name);
		attrs.render_into(out);
		out.push('>');
	}

	/// Renders a closing tag.
	pub fn end_tag(name: &str) -> String {
		format!("</{}>", name)
	}

	/// Appends a closing tag to `out`.
	pub fn end_tag_into(out: &mut String, name: &str) {
		out.push_str("</");
		out.push_str(name);
		out.push('>');
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_void_element_detection() {
		assert!(is_void_element("br"));
		assert!(is_void_element("img"));
		assert!(is_void_element("input"));
		assert!(!is_void_element("div"));
		assert!(!is_void_element("button"));
	}

	#[rstest]
	fn test_tag_escapes_text() {
		let html = MarkupBuilder::tag("h5", &AttributeSet::new(), Content::text("<b>x</b>"));
		assert_eq!(html, "<h5>&lt;b&gt;x&lt;/b&gt;</h5>");
	}

	#[rstest]
	fn test_tag_passes_raw_through() {
		let html = MarkupBuilder::tag("div", &AttributeSet::new(), Content::raw("<b>x</b>"));
		assert_eq!(html, "<div><b>x</b></div>");
	}

	#[rstest]
	#[case("img", "<img src=\"a.png\"/>")]
	#[case("div", "<div src=\"a.png\"></div>")]
	fn test_empty_content(#[case] tag: &str, #[case] expected: &str) {
		let attrs = AttributeSet::new().with("src", "a.png");
		assert_eq!(MarkupBuilder::tag(tag, &attrs, Content::None), expected);
	}

	#[rstest]
	fn test_begin_and_end_tags() {
		let attrs = AttributeSet::new().with_class("card-body");
		assert_eq!(
			MarkupBuilder::begin_tag("div", &attrs),
			r#"<div class="card-body">"#
		);
		assert_eq!(MarkupBuilder::end_tag("div"), "</div>");
	}

	#[rstest]
	#[case(true, "<span>a&amp;b</span>")]
	#[case(false, "<span>a&b</span>")]
	fn test_with_policy(#[case] encode: bool, #[case] expected: &str) {
		let html = MarkupBuilder::tag(
			"span",
			&AttributeSet::new(),
			Content::with_policy("a&b", encode),
		);
		assert_eq!(html, expected);
	}
}
