//! ButtonToolbar widget

use crate::button_group::ButtonGroup;
use crate::component::{Widget, resolve_element_id};
use crate::context::RenderContext;
use crate::error::Result;
use serde::Deserialize;
use trellis_markup::{AttributeSet, Fragment, IntoFragment};

/// One entry of a button toolbar
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
	/// Pre-rendered markup inserted verbatim
	Raw(String),
	/// A button group; skipped when it has no `buttons`
	Group(ButtonGroup),
	/// An entry of unrecognised shape; skipped when rendering
	Malformed(serde_json::Value),
}

impl From<ButtonGroup> for GroupEntry {
	fn from(group: ButtonGroup) -> Self {
		Self::Group(group)
	}
}

impl From<&str> for GroupEntry {
	fn from(markup: &str) -> Self {
		Self::Raw(markup.to_string())
	}
}

impl From<String> for GroupEntry {
	fn from(markup: String) -> Self {
		Self::Raw(markup)
	}
}

/// ButtonToolbar combines sets of button groups into a toolbar.
///
/// ## Example
///
/// ```
/// use trellis_markup::AttributeSet;
/// use trellis_widgets::{Button, ButtonGroup, ButtonToolbar, RenderContext, Widget};
///
/// let ctx = RenderContext::isolated();
/// let html = ButtonToolbar::new()
///     .groups([ButtonGroup::new()
///         .buttons([Button::new().label("1")])
///         .options(AttributeSet::new().with_class("mr-2"))])
///     .render_in(&ctx)
///     .unwrap();
///
/// assert!(html.starts_with(r#"<div id="w0-button-toolbar" class="btn-toolbar" role="toolbar">"#));
/// assert!(html.contains(r#"<div id="w1-button-group" class="btn-group mr-2" role="group">"#));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ButtonToolbar {
	id: Option<String>,
	#[serde(alias = "buttonGroups")]
	groups: Vec<GroupEntry>,
	options: AttributeSet,
}

impl ButtonToolbar {
	/// Creates an empty toolbar.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the button groups.
	pub fn groups<I>(mut self, groups: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<GroupEntry>,
	{
		self.groups = groups.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the HTML attributes of the toolbar container.
	pub fn options(mut self, options: AttributeSet) -> Self {
		self.options = options;
		self
	}

	/// Sets the widget id used to derive `{id}-button-toolbar`.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	fn render_groups(&self, ctx: &RenderContext) -> Result<Fragment> {
		let mut parts = Vec::new();
		for entry in &self.groups {
			match entry {
				GroupEntry::Group(group) if group.has_buttons() => parts.push(group.build(ctx)?),
				GroupEntry::Group(_) => {
					tracing::debug!("skipping button group without buttons");
				}
				GroupEntry::Raw(markup) => parts.push(Fragment::raw(markup.clone())),
				GroupEntry::Malformed(value) => {
					tracing::warn!(entry = %value, "skipping malformed button group entry");
				}
			}
		}
		Ok(Fragment::join(parts, "\n"))
	}
}

impl Widget for ButtonToolbar {
	fn name(&self) -> &'static str {
		"ButtonToolbar"
	}

	fn build(&self, ctx: &RenderContext) -> Result<Fragment> {
		let mut attrs = AttributeSet::new();
		attrs.set(
			"id",
			resolve_element_id(ctx, &self.options, self.id.as_deref(), self.name(), "-button-toolbar")?,
		);
		attrs.add_class("btn-toolbar");
		attrs.set("role", "toolbar");
		attrs.merge(&self.options);

		let groups = self.render_groups(ctx)?;
		Ok(Fragment::container("div", attrs).child(groups).into_fragment())
	}
}
