//! Asset bundle declarations

use serde::{Deserialize, Serialize};

/// Bootstrap 5 stylesheet bundle
pub const BOOTSTRAP5_ASSET: &str = "Bootstrap5Asset";
/// Bootstrap 5 JavaScript bundle (includes Popper)
pub const BOOTSTRAP5_PLUGIN_ASSET: &str = "Bootstrap5PluginAsset";
/// Legacy name of [`BOOTSTRAP5_ASSET`]
pub const BOOTSTRAP_ASSET: &str = "BootstrapAsset";
/// Legacy name of [`BOOTSTRAP5_PLUGIN_ASSET`]
pub const BOOTSTRAP_PLUGIN_ASSET: &str = "BootstrapPluginAsset";

/// Directory of the Bootstrap distribution, relative to the static root
pub const BOOTSTRAP_SOURCE_PATH: &str = "bootstrap/dist";

const BOOTSTRAP_CSS: &str = "css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "js/bootstrap.bundle.min.js";

/// A named group of stylesheets and scripts with dependencies on other bundles
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBundle {
	/// Unique bundle name
	pub name: String,
	/// Directory of the files, relative to the static root
	pub source_path: String,
	/// Stylesheets, relative to `source_path`
	pub css: Vec<String>,
	/// Scripts, relative to `source_path`
	pub js: Vec<String>,
	/// Bundles that must be loaded first
	pub depends: Vec<String>,
}

impl AssetBundle {
	/// Creates an empty bundle.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn source_path(mut self, path: impl Into<String>) -> Self {
		self.source_path = path.into();
		self
	}

	pub fn css(mut self, file: impl Into<String>) -> Self {
		self.css.push(file.into());
		self
	}

	pub fn js(mut self, file: impl Into<String>) -> Self {
		self.js.push(file.into());
		self
	}

	pub fn depends_on(mut self, bundle: impl Into<String>) -> Self {
		self.depends.push(bundle.into());
		self
	}

	/// Bootstrap 5 stylesheet.
	pub fn bootstrap5() -> Self {
		Self::new(BOOTSTRAP5_ASSET)
			.source_path(BOOTSTRAP_SOURCE_PATH)
			.css(BOOTSTRAP_CSS)
	}

	/// Bootstrap 5 scripts, depending on the stylesheet.
	pub fn bootstrap5_plugin() -> Self {
		Self::new(BOOTSTRAP5_PLUGIN_ASSET)
			.source_path(BOOTSTRAP_SOURCE_PATH)
			.js(BOOTSTRAP_JS)
			.depends_on(BOOTSTRAP5_ASSET)
	}

	pub fn bootstrap() -> Self {
		Self::new(BOOTSTRAP_ASSET)
			.source_path(BOOTSTRAP_SOURCE_PATH)
			.css(BOOTSTRAP_CSS)
	}

	pub fn bootstrap_plugin() -> Self {
		Self::new(BOOTSTRAP_PLUGIN_ASSET)
			.source_path(BOOTSTRAP_SOURCE_PATH)
			.js(BOOTSTRAP_JS)
			.depends_on(BOOTSTRAP_ASSET)
	}

	/// All built-in Bootstrap bundles.
	pub fn builtin() -> Vec<Self> {
		vec![
			Self::bootstrap5(),
			Self::bootstrap5_plugin(),
			Self::bootstrap(),
			Self::bootstrap_plugin(),
		]
	}

	/// Stylesheet paths relative to the static root.
	pub fn css_paths(&self) -> impl Iterator<Item = String> + '_ {
		self.css.iter().map(move |file| self.join(file))
	}

	/// Script paths relative to the static root.
	pub fn js_paths(&self) -> impl Iterator<Item = String> + '_ {
		self.js.iter().map(move |file| self.join(file))
	}

	fn join(&self, file: &str) -> String {
		let base = self.source_path.trim_end_matches('/');
		let file = file.trim_start_matches('/');
		if base.is_empty() {
			file.to_string()
		} else {
			format!("{}/{}", base, file)
		}
	}
}
