//! Render context shared by all widgets
//!
//! A [`RenderContext`] supplies the two things a widget needs from its host:
//! an id source for widgets without an explicit id, and a sink for
//! client-side plugin registrations.

use crate::error::{Result, WidgetError};
use crate::id::IdAllocator;
use crate::settings::WidgetSettings;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

static GLOBAL_CONTEXT: Lazy<RenderContext> = Lazy::new(|| RenderContext::new(IdAllocator::global()));

/// A request to enable client-side behaviour for a rendered widget
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRequest {
	/// Plugin name, e.g. `card` or `offcanvas`
	pub name: &'static str,
	/// Id of the rendered container
	pub id: String,
	/// Options passed to the client-side plugin, `None` when disabled
	pub client_options: Option<Map<String, Value>>,
}

/// Receives plugin registrations from rendered widgets.
///
/// Registration is fire-and-forget: widgets ignore what the registry does
/// with a request.
pub trait PluginRegistry: Send + Sync {
	/// Records that a widget with client-side behaviour was rendered.
	fn register_plugin(&self, request: &PluginRequest);
}

/// Registry that discards every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPluginRegistry;

impl PluginRegistry for NoopPluginRegistry {
	fn register_plugin(&self, _request: &PluginRequest) {}
}

/// Id source and plugin sink for a render pass
#[derive(Clone)]
pub struct RenderContext {
	ids: Option<Arc<IdAllocator>>,
	plugins: Arc<dyn PluginRegistry>,
	register_plugins: bool,
}

impl fmt::Debug for RenderContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderContext")
			.field("ids", &self.ids)
			.field("register_plugins", &self.register_plugins)
			.finish()
	}
}

impl RenderContext {
	/// Creates a context backed by `ids` with a no-op plugin registry.
	pub fn new(ids: Arc<IdAllocator>) -> Self {
		Self {
			ids: Some(ids),
			plugins: Arc::new(NoopPluginRegistry),
			register_plugins: true,
		}
	}

	/// Creates a context with a private allocator.
	pub fn isolated() -> Self {
		Self::new(Arc::new(IdAllocator::new()))
	}

	/// Creates a context that cannot generate ids.
	///
	/// Rendering a widget without an explicit id through this context fails
	/// with [`WidgetError::MissingIdAllocator`].
	pub fn without_ids() -> Self {
		Self {
			ids: None,
			plugins: Arc::new(NoopPluginRegistry),
			register_plugins: true,
		}
	}

	/// Creates a context from settings with a fresh allocator.
	pub fn from_settings(settings: &WidgetSettings) -> Self {
		let ids = IdAllocator::with_prefix(settings.id_prefix.clone()).starting_at(settings.id_start);
		Self {
			ids: Some(Arc::new(ids)),
			plugins: Arc::new(NoopPluginRegistry),
			register_plugins: settings.register_plugins,
		}
	}

	/// Returns the process-wide context (global allocator, no-op registry).
	pub fn global() -> &'static RenderContext {
		&GLOBAL_CONTEXT
	}

	/// Replaces the plugin registry.
	pub fn with_plugins(mut self, plugins: Arc<dyn PluginRegistry>) -> Self {
		self.plugins = plugins;
		self
	}

	/// Returns the id allocator, if any.
	pub fn ids(&self) -> Option<&Arc<IdAllocator>> {
		self.ids.as_ref()
	}

	/// Resolves a widget id: the explicit one when given, otherwise the next
	/// auto-generated id.
	pub fn widget_id(&self, explicit: Option<&str>, widget: &'static str) -> Result<String> {
		if let Some(id) = explicit {
			return Ok(id.to_string());
		}
		self.ids
			.as_ref()
			.ok_or(WidgetError::MissingIdAllocator { widget })?
			.next_id()
	}

	/// Forwards a plugin registration unless disabled by settings.
	pub fn register_plugin(&self, request: PluginRequest) {
		if !self.register_plugins {
			return;
		}
		tracing::debug!(plugin = request.name, id = %request.id, "registering client plugin");
		self.plugins.register_plugin(&request);
	}
}
