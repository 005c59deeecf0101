//! Asset registry
//!
//! Collects the bundles a page needs and renders the corresponding
//! `<link>`/`<script>` tags in dependency order. The registry doubles as the
//! [`PluginRegistry`] of a render context: every widget with client-side
//! behaviour pulls in the Bootstrap plugin bundle.

use crate::bundle::{AssetBundle, BOOTSTRAP5_PLUGIN_ASSET};
use crate::error::{AssetError, Result};
use crate::settings::AssetSettings;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use trellis_markup::{AttributeSet, Content, MarkupBuilder};
use trellis_widgets::{PluginRegistry, PluginRequest};

#[derive(Debug, Default)]
struct RegistryState {
	bundles: HashMap<String, AssetBundle>,
	registered: Vec<String>,
	plugins: Vec<PluginRequest>,
}

/// Thread-safe set of declared and registered asset bundles
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use trellis_assets::AssetRegistry;
/// use trellis_widgets::{Offcanvas, RenderContext, Widget};
///
/// let assets = Arc::new(AssetRegistry::default());
/// let ctx = RenderContext::isolated().with_plugins(assets.clone());
///
/// Offcanvas::new().title("Menu").render_in(&ctx).unwrap();
///
/// assert_eq!(
///     assets.render_tags().unwrap(),
///     "<link href=\"/static/bootstrap/dist/css/bootstrap.min.css\" rel=\"stylesheet\"/>\n\
///      <script src=\"/static/bootstrap/dist/js/bootstrap.bundle.min.js\"></script>"
/// );
/// ```
#[derive(Debug)]
pub struct AssetRegistry {
	settings: AssetSettings,
	plugin_bundle: String,
	state: Mutex<RegistryState>,
}

impl Default for AssetRegistry {
	fn default() -> Self {
		Self::with_bootstrap(AssetSettings::default())
	}
}

impl AssetRegistry {
	/// Creates a registry with no declared bundles.
	pub fn new(settings: AssetSettings) -> Self {
		Self {
			settings,
			plugin_bundle: BOOTSTRAP5_PLUGIN_ASSET.to_string(),
			state: Mutex::new(RegistryState::default()),
		}
	}

	/// Creates a registry with the built-in Bootstrap bundles declared.
	pub fn with_bootstrap(settings: AssetSettings) -> Self {
		let registry = Self::new(settings);
		for bundle in AssetBundle::builtin() {
			registry.declare(bundle);
		}
		registry
	}

	/// Sets the bundle registered for widgets with client-side plugins.
	pub fn with_plugin_bundle(mut self, name: impl Into<String>) -> Self {
		self.plugin_bundle = name.into();
		self
	}

	/// Returns the URL settings.
	pub fn settings(&self) -> &AssetSettings {
		&self.settings
	}

	/// Declares a bundle, replacing any bundle of the same name.
	pub fn declare(&self, bundle: AssetBundle) {
		let mut state = self.state.lock();
		if state.bundles.insert(bundle.name.clone(), bundle).is_some() {
			tracing::debug!("replaced asset bundle declaration");
		}
	}

	/// Whether a bundle with this name is declared.
	pub fn is_declared(&self, name: &str) -> bool {
		self.state.lock().bundles.contains_key(name)
	}

	/// Marks a declared bundle as needed by the page.
	///
	/// Registering the same bundle twice has no effect.
	pub fn register(&self, name: &str) -> Result<()> {
		let mut state = self.state.lock();
		if !state.bundles.contains_key(name) {
			return Err(AssetError::UnknownBundle {
				name: name.to_string(),
			});
		}
		if !state.registered.iter().any(|n| n == name) {
			tracing::debug!(bundle = name, "registered asset bundle");
			state.registered.push(name.to_string());
		}
		Ok(())
	}

	/// Names of the registered bundles, in registration order.
	pub fn registered(&self) -> Vec<String> {
		self.state.lock().registered.clone()
	}

	/// Plugin requests received from rendered widgets.
	pub fn plugin_requests(&self) -> Vec<PluginRequest> {
		self.state.lock().plugins.clone()
	}

	/// Forgets registered bundles and plugin requests; declarations stay.
	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.registered.clear();
		state.plugins.clear();
	}

	/// Registered bundles and their dependencies, dependencies first.
	///
	/// # Errors
	///
	/// Fails on a dependency that was never declared, or on a dependency cycle.
	pub fn resolved(&self) -> Result<Vec<AssetBundle>> {
		let state = self.state.lock();
		let mut done = HashSet::new();
		let mut stack = Vec::new();
		let mut order = Vec::new();
		for name in &state.registered {
			visit(&state.bundles, name, &mut done, &mut stack, &mut order)?;
		}
		Ok(order)
	}

	/// Stylesheet URLs of the resolved bundles.
	pub fn css_urls(&self) -> Result<Vec<String>> {
		Ok(self
			.resolved()?
			.iter()
			.flat_map(|bundle| bundle.css_paths().collect::<Vec<_>>())
			.map(|path| self.settings.url(&path))
			.collect())
	}

	/// Script URLs of the resolved bundles.
	pub fn js_urls(&self) -> Result<Vec<String>> {
		Ok(self
			.resolved()?
			.iter()
			.flat_map(|bundle| bundle.js_paths().collect::<Vec<_>>())
			.map(|path| self.settings.url(&path))
			.collect())
	}

	/// Renders one `<link rel="stylesheet">` per stylesheet.
	pub fn render_css_tags(&self) -> Result<String> {
		let tags: Vec<String> = self
			.css_urls()?
			.into_iter()
			.map(|url| {
				let attrs = AttributeSet::new().with("href", url).with("rel", "stylesheet");
				MarkupBuilder::void_tag("link", &attrs)
			})
			.collect();
		Ok(tags.join("\n"))
	}

	/// Renders one `<script src>` per script.
	pub fn render_js_tags(&self) -> Result<String> {
		let tags: Vec<String> = self
			.js_urls()?
			.into_iter()
			.map(|url| {
				let attrs = AttributeSet::new().with("src", url);
				MarkupBuilder::tag("script", &attrs, Content::None)
			})
			.collect();
		Ok(tags.join("\n"))
	}

	/// Renders stylesheets followed by scripts.
	pub fn render_tags(&self) -> Result<String> {
		let css = self.render_css_tags()?;
		let js = self.render_js_tags()?;
		Ok([css, js]
			.into_iter()
			.filter(|part| !part.is_empty())
			.collect::<Vec<_>>()
			.join("\n"))
	}
}

impl PluginRegistry for AssetRegistry {
	fn register_plugin(&self, request: &PluginRequest) {
		self.state.lock().plugins.push(request.clone());
		if let Err(err) = self.register(&self.plugin_bundle) {
			tracing::warn!(plugin = request.name, error = %err, "failed to register plugin bundle");
		}
	}
}

/// Depth-first post-order walk; `stack` holds the current dependency path.
fn visit(
	bundles: &HashMap<String, AssetBundle>,
	name: &str,
	done: &mut HashSet<String>,
	stack: &mut Vec<String>,
	order: &mut Vec<AssetBundle>,
) -> Result<()> {
	if done.contains(name) {
		return Ok(());
	}
	if let Some(start) = stack.iter().position(|n| n == name) {
		let mut path = stack[start..].to_vec();
		path.push(name.to_string());
		return Err(AssetError::DependencyCycle { path });
	}

	let bundle = bundles.get(name).ok_or_else(|| AssetError::UnknownBundle {
		name: name.to_string(),
	})?;

	stack.push(name.to_string());
	for dependency in &bundle.depends {
		visit(bundles, dependency, done, stack, order)?;
	}
	stack.pop();

	done.insert(name.to_string());
	order.push(bundle.clone());
	Ok(())
}
