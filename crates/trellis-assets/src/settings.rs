//! Static URL settings
//!
//! Resolves bundle files to URLs under `static_url`, optionally through a
//! manifest of hashed file names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use trellis_widgets::SettingsError;

/// Settings for asset URL generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
	/// Base URL for static files (e.g., "/static/")
	pub static_url: String,
	/// Manifest mapping original paths to hashed paths
	pub manifest: HashMap<String, String>,
}

impl Default for AssetSettings {
	fn default() -> Self {
		Self {
			static_url: "/static/".to_string(),
			manifest: HashMap::new(),
		}
	}
}

impl AssetSettings {
	/// Creates settings with the given static URL and no manifest.
	///
	/// # Examples
	///
	/// ```rust
	/// use trellis_assets::AssetSettings;
	///
	/// let settings = AssetSettings::new("https://cdn.example.com/");
	/// assert_eq!(settings.url("css/site.css"), "https://cdn.example.com/css/site.css");
	/// ```
	pub fn new(static_url: impl Into<String>) -> Self {
		Self {
			static_url: static_url.into(),
			manifest: HashMap::new(),
		}
	}

	/// Sets the manifest of hashed file names.
	pub fn with_manifest(mut self, manifest: HashMap<String, String>) -> Self {
		self.manifest = manifest;
		self
	}

	/// Loads a JSON manifest (`{"original": "hashed"}`) from disk.
	pub fn load_manifest(mut self, path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;
		self.manifest = serde_json::from_str(&contents)
			.map_err(|e| SettingsError::ParseError(format!("Manifest parse error: {}", e)))?;
		Ok(self)
	}

	/// Validates the settings.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.static_url.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"static_url must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Loads settings from environment variables.
	///
	/// Reads `TRELLIS_STATIC_URL`, and `TRELLIS_MANIFEST` as the path of a
	/// JSON manifest file.
	pub fn from_env() -> Result<Self, SettingsError> {
		let mut settings = Self::default();

		if let Ok(url) = std::env::var("TRELLIS_STATIC_URL") {
			settings.static_url = url;
		}

		if let Ok(manifest) = std::env::var("TRELLIS_MANIFEST") {
			settings = settings.load_manifest(manifest)?;
		}

		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings: AssetSettings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		settings.validate()?;
		Ok(settings)
	}

	/// Resolves a path relative to the static root to a URL.
	///
	/// A query string or fragment is kept after the (possibly hashed) path.
	pub fn url(&self, name: &str) -> String {
		let (path, suffix) = match name.find(['?', '#']) {
			Some(idx) => name.split_at(idx),
			None => (name, ""),
		};

		let resolved = self.manifest.get(path).map(String::as_str).unwrap_or(path);

		let base = self.static_url.trim_end_matches('/');
		format!("{}/{}{}", base, resolved.trim_start_matches('/'), suffix)
	}
}
