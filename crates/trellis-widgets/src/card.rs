//! Card widget
//!
//! A card is a flexible content container with optional image, header, body,
//! list group and footer regions. Content regions are inserted as raw markup,
//! except the overlay title which is encoded unless disabled.

use crate::component::{Widget, resolve_element_id};
use crate::context::{PluginRequest, RenderContext};
use crate::error::Result;
use serde::Deserialize;
use trellis_markup::{AttributeSet, Fragment, Frame, IntoFragment, Slot};

/// Where the card image sits relative to the other regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLocation {
	/// Above the header, class `card-img-top`
	Top,
	/// After the footer, class `card-img-bottom`
	Bottom,
}

impl ImageLocation {
	/// Suffix used in the `card-img-{location}` class.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Bottom => "bottom",
		}
	}
}

/// Text laid over the card image
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageOverlay {
	title: Option<String>,
	#[serde(alias = "encodeTitle")]
	encode_title: bool,
	body: Option<String>,
	options: AttributeSet,
}

impl Default for ImageOverlay {
	fn default() -> Self {
		Self {
			title: None,
			encode_title: true,
			body: None,
			options: AttributeSet::new(),
		}
	}
}

impl ImageOverlay {
	/// Creates an empty overlay.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `h5.card-title` text, HTML encoded by default.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Inserts the title without HTML encoding.
	pub fn without_encode_title(mut self) -> Self {
		self.encode_title = false;
		self
	}

	/// Sets the `div.card-text` markup.
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	/// Sets attributes of the overlay container.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	fn build(&self) -> Fragment {
		let mut attrs = AttributeSet::new();
		attrs.add_class("card-img-overlay");
		attrs.merge(&self.options);

		let title = self
			.title
			.as_ref()
			.map(|title| {
				Fragment::leaf("h5", AttributeSet::new().with_class("card-title"), title.clone())
					.encode(self.encode_title)
			});
		let body = self
			.body
			.as_ref()
			.map(|body| Fragment::leaf("div", AttributeSet::new().with_class("card-text"), body.clone()).raw());

		Fragment::container("div", attrs)
			.child(title)
			.child(body)
			.into_fragment()
	}
}

/// Card image configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CardImage {
	src: Option<String>,
	location: Option<ImageLocation>,
	#[serde(alias = "imgOverlay")]
	overlay: Option<ImageOverlay>,
}

impl CardImage {
	/// Creates an image with no source and no location.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `src` attribute. An empty source is omitted.
	pub fn src(mut self, src: impl Into<String>) -> Self {
		self.src = Some(src.into());
		self
	}

	/// Places the image at the top or bottom of the card.
	pub fn location(mut self, location: ImageLocation) -> Self {
		self.location = Some(location);
		self
	}

	/// Lays text over the image.
	pub fn overlay(mut self, overlay: ImageOverlay) -> Self {
		self.overlay = Some(overlay);
		self
	}

	fn at_bottom(&self) -> bool {
		self.location == Some(ImageLocation::Bottom)
	}

	fn build(&self) -> Fragment {
		let mut attrs = AttributeSet::new();
		if let Some(src) = self.src.as_deref().filter(|src| !src.is_empty()) {
			attrs.set("src", src);
		}
		attrs.set("alt", "");
		match self.location {
			Some(location) => attrs.add_class(format!("card-img-{}", location.as_str())),
			None => attrs.add_class("card-img"),
		};

		let img = Fragment::leaf("img", attrs, "").into_fragment();
		match &self.overlay {
			Some(overlay) => Fragment::Sequence(vec![img, overlay.build()]),
			None => img,
		}
	}
}

/// Card renders a bootstrap card.
///
/// Region order is fixed: image (unless placed at the bottom), header, body,
/// list group, footer, bottom image. Regions without configuration are
/// omitted.
///
/// ## Example
///
/// ```
/// use trellis_widgets::{Card, RenderContext, Widget};
///
/// let ctx = RenderContext::isolated();
/// let html = Card::new().header("H").body("B").render_in(&ctx).unwrap();
///
/// assert_eq!(
///     html,
///     "<div id=\"w0\" class=\"card\">\n<div class=\"card-header\">H</div>\n<div class=\"card-body\">\n\nB</div>\n</div>"
/// );
/// ```
///
/// Content can also be streamed between the two halves of the card:
///
/// ```
/// use trellis_widgets::{Card, RenderContext};
///
/// let ctx = RenderContext::isolated();
/// let frame = Card::new().body("").frame(&ctx).unwrap();
/// let mut html = frame.begin();
/// html.push_str("<p>Hello</p>");
/// html.push_str(&frame.end());
///
/// assert_eq!(
///     html,
///     "<div id=\"w0\" class=\"card\">\n<div class=\"card-body\">\n<p>Hello</p>\n</div>\n</div>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Card {
	id: Option<String>,
	header: Option<String>,
	#[serde(alias = "headerOptions")]
	header_options: AttributeSet,
	#[serde(alias = "headerTag")]
	header_tag: Option<String>,
	body: Option<String>,
	#[serde(alias = "bodyOptions")]
	body_options: AttributeSet,
	footer: Option<String>,
	#[serde(alias = "footerOptions")]
	footer_options: AttributeSet,
	#[serde(alias = "img")]
	image: Option<CardImage>,
	list: Option<Vec<String>>,
	options: AttributeSet,
}

impl Card {
	/// Creates a card with no regions.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	pub fn header_options(mut self, options: AttributeSet) -> Self {
		self.header_options = options;
		self
	}

	/// Sets the header tag (`div` by default).
	pub fn header_tag(mut self, tag: impl Into<String>) -> Self {
		self.header_tag = Some(tag.into());
		self
	}

	/// Sets the text emitted at the end of the body, after streamed content.
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}

	pub fn body_options(mut self, options: AttributeSet) -> Self {
		self.body_options = options;
		self
	}

	pub fn footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = Some(footer.into());
		self
	}

	pub fn footer_options(mut self, options: AttributeSet) -> Self {
		self.footer_options = options;
		self
	}

	pub fn image(mut self, image: CardImage) -> Self {
		self.image = Some(image);
		self
	}

	/// Sets the list group items.
	pub fn list<I>(mut self, items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.list = Some(items.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the HTML attributes of the card container.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	/// Builds the card frame and registers the `card` plugin.
	pub fn frame(&self, ctx: &RenderContext) -> Result<Frame> {
		let id = resolve_element_id(ctx, &self.options, self.id.as_deref(), self.name(), "")?;

		let mut attrs = AttributeSet::new();
		attrs.set("id", id.as_str());
		attrs.add_class("card");
		attrs.merge(&self.options);

		let mut frame = Frame::new("div", attrs);
		if let Some(image) = self.image.as_ref().filter(|image| !image.at_bottom()) {
			frame = frame.head(image.build());
		}
		frame = frame.head(self.header_fragment());
		if let Some(body) = &self.body {
			let mut body_attrs = AttributeSet::new();
			body_attrs.add_class("card-body");
			body_attrs.merge(&self.body_options);
			frame = frame.slot(Slot::new("div", body_attrs).trailing(Fragment::raw(body.clone())));
		}
		frame = frame.tail(self.list_fragment()).tail(self.footer_fragment());
		if let Some(image) = self.image.as_ref().filter(|image| image.at_bottom()) {
			frame = frame.tail(image.build());
		}

		ctx.register_plugin(PluginRequest {
			name: "card",
			id,
			client_options: None,
		});
		Ok(frame)
	}

	/// Renders the card with `content` placed inside the body.
	pub fn render_with(&self, content: &str, ctx: &RenderContext) -> Result<String> {
		Ok(self.frame(ctx)?.wrap(Fragment::raw(content)).render_to_string())
	}

	fn header_fragment(&self) -> Fragment {
		let Some(header) = &self.header else {
			return Fragment::Empty;
		};
		let mut options = self.header_options.clone();
		let tag = self
			.header_tag
			.clone()
			.or_else(|| options.get_str("tag").map(str::to_string))
			.unwrap_or_else(|| "div".to_string());
		options.remove("tag");

		let mut attrs = AttributeSet::new();
		attrs.add_class("card-header");
		attrs.merge(&options);
		Fragment::leaf(tag, attrs, header.clone()).raw().into_fragment()
	}

	fn list_fragment(&self) -> Fragment {
		let Some(items) = &self.list else {
			return Fragment::Empty;
		};
		Fragment::container("ul", AttributeSet::new().with_class("list-group list-group-flush"))
			.children(items.iter().map(|item| {
				Fragment::leaf("li", AttributeSet::new().with_class("list-group-item"), item.clone()).raw()
			}))
			.into_fragment()
	}

	fn footer_fragment(&self) -> Fragment {
		let Some(footer) = &self.footer else {
			return Fragment::Empty;
		};
		let mut attrs = AttributeSet::new();
		attrs.add_class("card-footer");
		attrs.merge(&self.footer_options);
		Fragment::leaf("div", attrs, format!("\n{}\n", footer))
			.raw()
			.into_fragment()
	}
}

impl Widget for Card {
	fn name(&self) -> &'static str {
		"Card"
	}

	fn build(&self, ctx: &RenderContext) -> Result<Fragment> {
		Ok(self.frame(ctx)?.wrap(Fragment::Empty))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::PluginRegistry;
	use parking_lot::Mutex;
	use rstest::rstest;
	use std::sync::Arc;

	#[derive(Default)]
	struct Recorder(Mutex<Vec<PluginRequest>>);

	impl PluginRegistry for Recorder {
		fn register_plugin(&self, request: &PluginRequest) {
			self.0.lock().push(request.clone());
		}
	}

	#[rstest]
	fn test_header_and_body() {
		let ctx = RenderContext::isolated();
		let html = Card::new().header("H").body("B").render_in(&ctx).unwrap();
		assert_eq!(
			html,
			"<div id=\"w0\" class=\"card\">\n<div class=\"card-header\">H</div>\n<div class=\"card-body\">\n\nB</div>\n</div>"
		);
		assert!(!html.contains("card-img"));
		assert!(!html.contains("list-group"));
		assert!(!html.contains("card-footer"));
	}

	#[rstest]
	fn test_empty_card() {
		let ctx = RenderContext::isolated();
		assert_eq!(
			Card::new().render_in(&ctx).unwrap(),
			"<div id=\"w0\" class=\"card\">\n\n</div>"
		);
	}

	#[rstest]
	fn test_region_order_with_bottom_image() {
		let ctx = RenderContext::isolated();
		let card = Card::new()
			.header("H")
			.body("B")
			.list(["a", "b"])
			.footer("F")
			.image(CardImage::new().src("i.png").location(ImageLocation::Bottom));
		let frame = card.frame(&ctx).unwrap();
		assert_eq!(
			frame.begin(),
			"<div id=\"w0\" class=\"card\">\n<div class=\"card-header\">H</div>\n<div class=\"card-body\">\n"
		);
		assert_eq!(
			frame.end(),
			concat!(
				"\nB</div>\n",
				r#"<ul class="list-group list-group-flush"><li class="list-group-item">a</li><li class="list-group-item">b</li></ul>"#,
				"\n<div class=\"card-footer\">\nF\n</div>\n",
				r#"<img src="i.png" alt="" class="card-img-bottom"/>"#,
				"\n</div>"
			)
		);
	}

	#[rstest]
	fn test_top_image_precedes_header() {
		let ctx = RenderContext::isolated();
		let html = Card::new()
			.header("H")
			.image(CardImage::new().src("i.png").location(ImageLocation::Top))
			.render_in(&ctx)
			.unwrap();
		let image = html.find("card-img-top").unwrap();
		let header = html.find("card-header").unwrap();
		assert!(image < header);
	}

	#[rstest]
	fn test_image_without_location_or_src() {
		let ctx = RenderContext::isolated();
		let html = Card::new().image(CardImage::new()).render_in(&ctx).unwrap();
		assert_eq!(
			html,
			"<div id=\"w0\" class=\"card\">\n<img alt=\"\" class=\"card-img\"/>\n\n</div>"
		);
	}

	#[rstest]
	fn test_overlay() {
		let ctx = RenderContext::isolated();
		let html = Card::new()
			.image(
				CardImage::new()
					.src("i.png")
					.overlay(ImageOverlay::new().title("T").options(AttributeSet::new().with_class("text-white"))),
			)
			.render_in(&ctx)
			.unwrap();
		assert!(html.contains(concat!(
			r#"<img src="i.png" alt="" class="card-img"/>"#,
			r#"<div class="card-img-overlay text-white"><h5 class="card-title">T</h5></div>"#
		)));
		assert!(!html.contains("card-text"));
	}

	#[rstest]
	fn test_header_tag_from_options() {
		let ctx = RenderContext::isolated();
		let html = Card::new()
			.header("H")
			.header_options(AttributeSet::new().with("tag", "h4").with_class("bg-light"))
			.render_in(&ctx)
			.unwrap();
		assert!(html.contains(r#"<h4 class="card-header bg-light">H</h4>"#));
	}

	#[rstest]
	fn test_content_is_raw() {
		let ctx = RenderContext::isolated();
		let html = Card::new()
			.header("<b>H</b>")
			.render_in(&ctx)
			.unwrap();
		assert!(html.contains("<div class=\"card-header\"><b>H</b></div>"));
	}

	#[rstest]
	#[case("")]
	#[case("<p>streamed</p>")]
	fn test_streaming_matches_render_with(#[case] content: &str) {
		let card = Card::new().header("H").body("B").footer("F").list(["x"]);
		let streamed = {
			let ctx = RenderContext::isolated();
			let frame = card.frame(&ctx).unwrap();
			format!("{}{}{}", frame.begin(), content, frame.end())
		};
		let ctx = RenderContext::isolated();
		assert_eq!(card.render_with(content, &ctx).unwrap(), streamed);
	}

	#[rstest]
	fn test_registers_card_plugin() {
		let recorder = Arc::new(Recorder::default());
		let ctx = RenderContext::isolated().with_plugins(recorder.clone());
		Card::new().id("main").render_in(&ctx).unwrap();
		let requests = recorder.0.lock();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].name, "card");
		assert_eq!(requests[0].id, "main");
	}

	#[rstest]
	fn test_deserialize() {
		let card: Card = serde_json::from_str(
			r#"{
				"options": {"class": "text-center"},
				"img": {"src": "i.png", "location": "top", "imgOverlay": {"body": "X"}},
				"header": "H",
				"footer": "F"
			}"#,
		)
		.unwrap();
		let ctx = RenderContext::isolated();
		let html = card.render_in(&ctx).unwrap();
		assert!(html.starts_with("<div id=\"w0\" class=\"card text-center\">\n<img src=\"i.png\" alt=\"\" class=\"card-img-top\"/><div class=\"card-img-overlay\"><div class=\"card-text\">X</div></div>\n"));
		assert!(html.ends_with("<div class=\"card-footer\">\nF\n</div>\n</div>"));
	}

	#[rstest]
	fn test_overlay_title_encoding() {
		let encoded = ImageOverlay::new().title("<b>T</b>").body("<i>x</i>").build().render_to_string();
		assert_eq!(
			encoded,
			r#"<div class="card-img-overlay"><h5 class="card-title">&lt;b&gt;T&lt;/b&gt;</h5><div class="card-text"><i>x</i></div></div>"#
		);

		let raw = ImageOverlay::new().title("<b>T</b>").without_encode_title().build().render_to_string();
		assert!(raw.contains(r#"<h5 class="card-title"><b>T</b></h5>"#));

		let configured: ImageOverlay = serde_json::from_str(r#"{"title": "<b>T</b>", "encodeTitle": false}"#).unwrap();
		assert_eq!(configured, ImageOverlay::new().title("<b>T</b>").without_encode_title());
	}

	#[rstest]
	fn test_empty_src_is_omitted() {
		let ctx = RenderContext::isolated();
		let html = Card::new().image(CardImage::new().src("")).render_in(&ctx).unwrap();
		assert!(html.contains(r#"<img alt="" class="card-img"/>"#));
		assert!(!html.contains("src="));
	}
}
