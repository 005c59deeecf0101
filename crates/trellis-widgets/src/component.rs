//! Core widget trait

use crate::context::RenderContext;
use crate::error::Result;
use trellis_markup::Fragment;

/// Widget trait - base interface for all Bootstrap widgets
///
/// A widget is an immutable configuration value. Building turns it into a
/// [`Fragment`] tree, resolving ids through the given [`RenderContext`];
/// rendering serializes that tree.
pub trait Widget: Send + Sync {
	/// Returns the widget's name (for errors and logging)
	fn name(&self) -> &'static str;

	/// Builds the fragment tree for this widget
	fn build(&self, ctx: &RenderContext) -> Result<Fragment>;

	/// Renders the widget through an explicit context
	fn render_in(&self, ctx: &RenderContext) -> Result<String> {
		Ok(self.build(ctx)?.render_to_string())
	}

	/// Renders the widget through the process-wide context
	fn render(&self) -> Result<String> {
		self.render_in(RenderContext::global())
	}
}

/// Resolves the id of a widget's root element.
///
/// An `id` in the caller's options wins; otherwise the widget id (explicit or
/// allocated) is used, followed by `suffix`.
pub(crate) fn resolve_element_id(
	ctx: &RenderContext,
	options: &trellis_markup::AttributeSet,
	widget_id: Option<&str>,
	widget: &'static str,
	suffix: &str,
) -> Result<String> {
	if let Some(value) = options.get("id") {
		return Ok(value.to_string());
	}
	let id = ctx.widget_id(widget_id, widget)?;
	Ok(format!("{}{}", id, suffix))
}
