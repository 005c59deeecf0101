//! Button widget

use crate::component::{Widget, resolve_element_id};
use crate::context::RenderContext;
use crate::error::Result;
use serde::Deserialize;
use trellis_markup::{AttributeSet, Fragment, IntoFragment};

/// Button renders a bootstrap button.
///
/// ## Example
///
/// ```
/// use trellis_widgets::{Button, RenderContext, Widget};
/// use trellis_markup::AttributeSet;
///
/// let ctx = RenderContext::isolated();
/// let html = Button::new()
///     .label("Action")
///     .options(AttributeSet::new().with_class("btn-lg"))
///     .render_in(&ctx)
///     .unwrap();
///
/// assert_eq!(html, r#"<button id="w0-button" class="btn btn-lg">Action</button>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Button {
	id: Option<String>,
	label: String,
	#[serde(alias = "tagName")]
	tag_name: String,
	options: AttributeSet,
	#[serde(alias = "encodeLabel")]
	encode_label: bool,
}

impl Default for Button {
	fn default() -> Self {
		Self {
			id: None,
			label: "Button".to_string(),
			tag_name: "button".to_string(),
			options: AttributeSet::new(),
			encode_label: true,
		}
	}
}

impl Button {
	/// Creates a button labelled `Button`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the button label.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Sets the tag used to render the button.
	pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
		self.tag_name = tag_name.into();
		self
	}

	/// Sets the HTML attributes of the button tag.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	/// Sets the widget id used to derive `{id}-button`.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Inserts the label without HTML encoding.
	pub fn without_encode_label(self) -> Self {
		self.encode_label(false)
	}

	/// Sets whether the label is HTML-encoded.
	pub fn encode_label(mut self, encode: bool) -> Self {
		self.encode_label = encode;
		self
	}

	/// Returns the label.
	pub fn get_label(&self) -> &str {
		&self.label
	}
}

impl Widget for Button {
	fn name(&self) -> &'static str {
		"Button"
	}

	fn build(&self, ctx: &RenderContext) -> Result<Fragment> {
		let mut attrs = AttributeSet::new();
		attrs.set(
			"id",
			resolve_element_id(ctx, &self.options, self.id.as_deref(), self.name(), "-button")?,
		);
		attrs.add_class("btn");
		attrs.merge(&self.options);

		Ok(Fragment::leaf(self.tag_name.clone(), attrs, self.label.clone())
			.encode(self.encode_label)
			.into_fragment())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_button() {
		let ctx = RenderContext::isolated();
		assert_eq!(
			Button::new().render_in(&ctx).unwrap(),
			r#"<button id="w0-button" class="btn">Button</button>"#
		);
	}

	#[rstest]
	fn test_label_is_encoded() {
		let ctx = RenderContext::isolated();
		let html = Button::new().label("<b>Go</b>").render_in(&ctx).unwrap();
		assert_eq!(
			html,
			r#"<button id="w0-button" class="btn">&lt;b&gt;Go&lt;/b&gt;</button>"#
		);
	}

	#[rstest]
	fn test_without_encode_label() {
		let ctx = RenderContext::isolated();
		let html = Button::new()
			.label("<b>Go</b>")
			.without_encode_label()
			.render_in(&ctx)
			.unwrap();
		assert_eq!(html, r#"<button id="w0-button" class="btn"><b>Go</b></button>"#);
	}

	#[rstest]
	fn test_explicit_option_id_skips_allocation() {
		let ctx = RenderContext::isolated();
		let html = Button::new()
			.options(AttributeSet::new().with_class("btn-primary").with("id", "save"))
			.render_in(&ctx)
			.unwrap();
		assert_eq!(html, r#"<button id="save" class="btn btn-primary">Button</button>"#);
		assert_eq!(ctx.ids().unwrap().peek(), 0);
	}

	#[rstest]
	fn test_widget_id() {
		let ctx = RenderContext::without_ids();
		let html = Button::new().id("submit").render_in(&ctx).unwrap();
		assert_eq!(html, r#"<button id="submit-button" class="btn">Button</button>"#);
	}

	#[rstest]
	fn test_tag_name_and_extra_attributes() {
		let ctx = RenderContext::isolated();
		let html = Button::new()
			.tag_name("a")
			.label("Link")
			.options(AttributeSet::new().with("href", "/home").with_class("btn-link"))
			.render_in(&ctx)
			.unwrap();
		assert_eq!(
			html,
			r#"<a id="w0-button" class="btn btn-link" href="/home">Link</a>"#
		);
	}

	#[rstest]
	fn test_void_tag_self_closes() {
		let ctx = RenderContext::isolated();
		let html = Button::new()
			.tag_name("input")
			.label("")
			.options(AttributeSet::new().with("type", "submit"))
			.render_in(&ctx)
			.unwrap();
		assert_eq!(html, r#"<input id="w0-button" class="btn" type="submit"/>"#);
	}

	#[rstest]
	fn test_setters_return_independent_values() {
		let base = Button::new().label("A");
		let other = base.clone().label("B");
		assert_eq!(base.get_label(), "A");
		assert_eq!(other.get_label(), "B");
	}

	#[rstest]
	fn test_missing_allocator_fails() {
		let ctx = RenderContext::without_ids();
		assert!(Button::new().render_in(&ctx).is_err());
	}

	#[rstest]
	fn test_deserialize() {
		let button: Button = serde_json::from_str(
			r#"{"label": "1", "tagName": "span", "options": {"class": ["btn-secondary"]}, "encodeLabel": false}"#,
		)
		.unwrap();
		let ctx = RenderContext::isolated();
		assert_eq!(
			button.render_in(&ctx).unwrap(),
			r#"<span id="w0-button" class="btn btn-secondary">1</span>"#
		);
	}
}
