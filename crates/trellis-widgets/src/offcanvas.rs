//! Offcanvas widget
//!
//! An offcanvas is a hidden sidebar that slides in from an edge of the
//! viewport. The toggle button, when configured, is rendered just before the
//! offcanvas container and targets it by id.

use crate::component::{Widget, resolve_element_id};
use crate::context::{PluginRequest, RenderContext};
use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use trellis_markup::{AttributeSet, Fragment, Frame, IntoFragment, Slot};

/// Edge of the viewport the offcanvas slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffcanvasLocation {
	#[default]
	Start,
	End,
	Top,
	Bottom,
}

impl OffcanvasLocation {
	/// Suffix used in the `offcanvas-{location}` class.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Start => "start",
			Self::End => "end",
			Self::Top => "top",
			Self::Bottom => "bottom",
		}
	}
}

/// Either an on/off switch or a full configuration.
#[derive(Deserialize)]
#[serde(untagged)]
enum Switch<T> {
	Flag(bool),
	Config(T),
}

/// Deserializes `false`/`null` as disabled, `true` as the default
/// configuration, and an object as an explicit configuration.
fn switch_or_config<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(match Option::<Switch<T>>::deserialize(deserializer)? {
		None | Some(Switch::Flag(false)) => None,
		Some(Switch::Flag(true)) => Some(T::default()),
		Some(Switch::Config(config)) => Some(config),
	})
}

/// Button that shows the offcanvas
///
/// In configuration files `tag`, `label` and `encodeLabel` are reserved. Every
/// other key is an HTML attribute of the button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToggleButton {
	tag: String,
	label: String,
	#[serde(alias = "encodeLabel")]
	encode_label: bool,
	#[serde(flatten)]
	options: AttributeSet,
}

impl Default for ToggleButton {
	fn default() -> Self {
		Self {
			tag: "button".to_string(),
			label: "Show".to_string(),
			encode_label: true,
			options: AttributeSet::new(),
		}
	}
}

impl ToggleButton {
	/// Creates a `<button>` labelled "Show".
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the element tag, e.g. `a` for a link toggle.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Inserts the label without HTML encoding.
	pub fn without_encode_label(mut self) -> Self {
		self.encode_label = false;
		self
	}

	/// Sets extra attributes. An `href` replaces the generated target and controls.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	fn build(&self, target: &str) -> Fragment {
		let mut attrs = AttributeSet::new();
		attrs.set("data-bs-toggle", "offcanvas");
		attrs.set("type", "button");
		attrs.merge(&self.options);
		// A link toggles through its href instead.
		if !attrs.contains("href") {
			if !attrs.contains("data-bs-target") {
				attrs.set("data-bs-target", format!("#{}", target));
			}
			if !attrs.contains("aria-controls") {
				attrs.set("aria-controls", target);
			}
		}
		Fragment::leaf(self.tag.clone(), attrs, self.label.clone())
			.encode(self.encode_label)
			.into_fragment()
	}
}

/// Button in the header that hides the offcanvas
///
/// In configuration files every key other than `tag` is an HTML attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CloseButton {
	tag: String,
	#[serde(flatten)]
	options: AttributeSet,
}

impl Default for CloseButton {
	fn default() -> Self {
		Self {
			tag: "button".to_string(),
			options: AttributeSet::new(),
		}
	}
}

impl CloseButton {
	/// Creates the default `<button class="btn-close text-reset">`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the element tag.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Sets extra attributes, merged over the generated ones.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	fn build(&self) -> Fragment {
		let mut attrs = AttributeSet::new();
		attrs.set("data-bs-dismiss", "offcanvas");
		attrs.add_class("btn-close text-reset");
		attrs.set("type", "button");
		attrs.set("aria-label", "Close");
		attrs.merge(&self.options);
		Fragment::leaf(self.tag.clone(), attrs, "").into_fragment()
	}
}

/// Offcanvas renders a bootstrap offcanvas panel.
///
/// ## Example
///
/// ```
/// use trellis_widgets::{Offcanvas, RenderContext, ToggleButton};
///
/// let ctx = RenderContext::isolated();
/// let html = Offcanvas::new()
///     .title("Menu")
///     .toggle_button(ToggleButton::new().label("Open"))
///     .render_with("<p>Links</p>", &ctx)
///     .unwrap();
///
/// assert!(html.starts_with(
///     r##"<button data-bs-toggle="offcanvas" type="button" data-bs-target="#w0" aria-controls="w0">Open</button>"##
/// ));
/// assert!(html.contains("<div class=\"offcanvas-body\">\n<p>Links</p>\n</div>"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Offcanvas {
	id: Option<String>,
	title: Option<String>,
	#[serde(alias = "titleOptions")]
	title_options: AttributeSet,
	#[serde(alias = "encodeTitle")]
	encode_title: bool,
	#[serde(alias = "headerOptions")]
	header_options: AttributeSet,
	#[serde(alias = "bodyOptions")]
	body_options: AttributeSet,
	location: OffcanvasLocation,
	#[serde(alias = "toggleButton", deserialize_with = "switch_or_config")]
	toggle_button: Option<ToggleButton>,
	#[serde(alias = "closeButton", deserialize_with = "switch_or_config")]
	close_button: Option<CloseButton>,
	#[serde(alias = "bodyScrolling")]
	body_scrolling: bool,
	backdrop: bool,
	#[serde(alias = "clientOptions", deserialize_with = "switch_or_config")]
	client_options: Option<Map<String, Value>>,
	options: AttributeSet,
}

impl Default for Offcanvas {
	fn default() -> Self {
		Self {
			id: None,
			title: None,
			title_options: AttributeSet::new(),
			encode_title: true,
			header_options: AttributeSet::new(),
			body_options: AttributeSet::new(),
			location: OffcanvasLocation::default(),
			toggle_button: None,
			close_button: Some(CloseButton::default()),
			body_scrolling: false,
			backdrop: false,
			client_options: Some(Map::new()),
			options: AttributeSet::new(),
		}
	}
}

impl Offcanvas {
	/// Creates an offcanvas with a close button and no toggle button.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn title_options(mut self, options: AttributeSet) -> Self {
		self.title_options = options;
		self
	}

	/// Inserts the title without HTML encoding.
	pub fn without_encode_title(mut self) -> Self {
		self.encode_title = false;
		self
	}

	pub fn header_options(mut self, options: AttributeSet) -> Self {
		self.header_options = options;
		self
	}

	pub fn body_options(mut self, options: AttributeSet) -> Self {
		self.body_options = options;
		self
	}

	pub fn location(mut self, location: OffcanvasLocation) -> Self {
		self.location = location;
		self
	}

	pub fn toggle_button(mut self, button: ToggleButton) -> Self {
		self.toggle_button = Some(button);
		self
	}

	pub fn close_button(mut self, button: CloseButton) -> Self {
		self.close_button = Some(button);
		self
	}

	pub fn without_close_button(mut self) -> Self {
		self.close_button = None;
		self
	}

	/// Adds `data-bs-scroll="true"` so the page stays scrollable.
	pub fn body_scrolling(mut self, enabled: bool) -> Self {
		self.body_scrolling = enabled;
		self
	}

	/// Adds `data-bs-backdrop="true"`.
	pub fn backdrop(mut self, enabled: bool) -> Self {
		self.backdrop = enabled;
		self
	}

	/// Sets options for the client-side plugin, merged over `{"show": false}`.
	pub fn client_options(mut self, options: Map<String, Value>) -> Self {
		self.client_options = Some(options);
		self
	}

	/// Registers the plugin without client options.
	pub fn without_client_options(mut self) -> Self {
		self.client_options = None;
		self
	}

	/// Builds the offcanvas frame and registers the `offcanvas` plugin.
	pub fn frame(&self, ctx: &RenderContext) -> Result<Frame> {
		let id = resolve_element_id(ctx, &self.options, self.id.as_deref(), self.name(), "")?;
		let title_id = self
			.title_options
			.get("id")
			.map(ToString::to_string)
			.unwrap_or_else(|| format!("{}-label", id));

		let mut attrs = AttributeSet::new();
		attrs.set("id", id.as_str());
		attrs.add_class("offcanvas");
		attrs.add_class(format!("offcanvas-{}", self.location.as_str()));
		attrs.set("tabindex", -1);
		if self.title.is_some() && !self.options.contains("aria-label") && !self.options.contains("aria-labelledby") {
			attrs.set("aria-labelledby", title_id.as_str());
		}
		if self.body_scrolling {
			attrs.set("data-bs-scroll", "true");
		}
		if self.backdrop {
			attrs.set("data-bs-backdrop", "true");
		}
		attrs.merge(&self.options);

		let mut body_attrs = AttributeSet::new();
		body_attrs.add_class("offcanvas-body");
		body_attrs.merge(&self.body_options);

		let frame = Frame::new("div", attrs)
			.lead(self.toggle_button.as_ref().map(|button| button.build(&id)))
			.head(self.header_fragment(&title_id))
			.slot(Slot::new("div", body_attrs));

		ctx.register_plugin(PluginRequest {
			name: "offcanvas",
			id,
			client_options: self.plugin_options(),
		});
		Ok(frame)
	}

	/// Renders the offcanvas with `content` placed inside the body.
	pub fn render_with(&self, content: &str, ctx: &RenderContext) -> Result<String> {
		Ok(self.frame(ctx)?.wrap(Fragment::raw(content)).render_to_string())
	}

	fn header_fragment(&self, title_id: &str) -> Fragment {
		let title = self.title.as_ref().map(|title| {
			let mut attrs = AttributeSet::new();
			attrs.set("id", title_id);
			attrs.add_class("offcanvas-title");
			attrs.merge(&self.title_options);
			Fragment::leaf("h5", attrs, title.clone())
				.encode(self.encode_title)
				.into_fragment()
		});
		let close = self.close_button.as_ref().map(CloseButton::build);

		let parts = Fragment::join(title.into_iter().chain(close), "\n");
		if parts.is_empty() {
			return Fragment::Empty;
		}

		let mut attrs = AttributeSet::new();
		attrs.add_class("offcanvas-header");
		attrs.merge(&self.header_options);
		Fragment::container("div", attrs)
			.child(Fragment::raw("\n"))
			.child(parts)
			.child(Fragment::raw("\n"))
			.into_fragment()
	}

	fn plugin_options(&self) -> Option<Map<String, Value>> {
		let overrides = self.client_options.as_ref()?;
		let mut options = Map::new();
		options.insert("show".to_string(), Value::Bool(false));
		options.extend(overrides.iter().map(|(key, value)| (key.clone(), value.clone())));
		Some(options)
	}
}

impl Widget for Offcanvas {
	fn name(&self) -> &'static str {
		"Offcanvas"
	}

	fn build(&self, ctx: &RenderContext) -> Result<Fragment> {
		Ok(self.frame(ctx)?.wrap(Fragment::Empty))
	}
}
