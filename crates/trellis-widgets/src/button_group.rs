//! ButtonGroup widget

use crate::button::Button;
use crate::component::{Widget, resolve_element_id};
use crate::context::RenderContext;
use crate::error::Result;
use serde::Deserialize;
use trellis_markup::{AttributeSet, Fragment, IntoFragment};

/// One entry of a button group
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ButtonEntry {
	/// Pre-rendered markup inserted verbatim
	Raw(String),
	/// A button configuration
	Button(Button),
	/// An entry of unrecognised shape; skipped when rendering
	Malformed(serde_json::Value),
}

impl From<Button> for ButtonEntry {
	fn from(button: Button) -> Self {
		Self::Button(button)
	}
}

impl From<&str> for ButtonEntry {
	fn from(markup: &str) -> Self {
		Self::Raw(markup.to_string())
	}
}

impl From<String> for ButtonEntry {
	fn from(markup: String) -> Self {
		Self::Raw(markup)
	}
}

/// ButtonGroup renders a set of buttons inside a `div.btn-group`.
///
/// ## Example
///
/// ```
/// use trellis_widgets::{Button, ButtonGroup, RenderContext, Widget};
///
/// let ctx = RenderContext::isolated();
/// let html = ButtonGroup::new()
///     .buttons([Button::new().label("1"), Button::new().label("2")])
///     .render_in(&ctx)
///     .unwrap();
///
/// assert_eq!(
///     html,
///     "<div id=\"w0-button-group\" class=\"btn-group\" role=\"group\">\
///      <button id=\"w1-button\" class=\"btn\">1</button>\n\
///      <button id=\"w2-button\" class=\"btn\">2</button></div>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonGroup {
	id: Option<String>,
	buttons: Option<Vec<ButtonEntry>>,
	options: AttributeSet,
	#[serde(alias = "encodeLabels")]
	encode_labels: bool,
}

impl Default for ButtonGroup {
	fn default() -> Self {
		Self {
			id: None,
			buttons: None,
			options: AttributeSet::new(),
			encode_labels: true,
		}
	}
}

impl ButtonGroup {
	/// Creates an empty group.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the buttons of the group.
	pub fn buttons<I>(mut self, buttons: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<ButtonEntry>,
	{
		self.buttons = Some(buttons.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the HTML attributes of the group container.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	/// Sets the widget id used to derive `{id}-button-group`.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Inserts every button label without HTML encoding.
	pub fn without_encode_labels(mut self) -> Self {
		self.encode_labels = false;
		self
	}

	/// Whether a `buttons` list was configured.
	pub fn has_buttons(&self) -> bool {
		self.buttons.is_some()
	}

	fn render_buttons(&self, ctx: &RenderContext) -> Result<Fragment> {
		let mut parts = Vec::new();
		for entry in self.buttons.iter().flatten() {
			match entry {
				ButtonEntry::Button(button) => {
					let button = if self.encode_labels {
						button.clone()
					} else {
						button.clone().without_encode_label()
					};
					parts.push(button.build(ctx)?);
				}
				ButtonEntry::Raw(markup) => parts.push(Fragment::raw(markup.clone())),
				ButtonEntry::Malformed(value) => {
					tracing::warn!(entry = %value, "skipping malformed button entry");
				}
			}
		}
		Ok(Fragment::join(parts, "\n"))
	}
}

impl Widget for ButtonGroup {
	fn name(&self) -> &'static str {
		"ButtonGroup"
	}

	fn build(&self, ctx: &RenderContext) -> Result<Fragment> {
		let mut attrs = AttributeSet::new();
		attrs.set(
			"id",
			resolve_element_id(ctx, &self.options, self.id.as_deref(), self.name(), "-button-group")?,
		);
		attrs.add_class("btn-group");
		attrs.set("role", "group");
		attrs.merge(&self.options);

		let buttons = self.render_buttons(ctx)?;
		Ok(Fragment::container("div", attrs).child(buttons).into_fragment())
	}
}
