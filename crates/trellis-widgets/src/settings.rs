//! Widget settings
//!
//! Settings can be built in code, read from a `.toml`/`.json` file, or taken
//! from `TRELLIS_*` environment variables.

use crate::error::SettingsError;
use crate::id::DEFAULT_ID_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings that control how widgets render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
	/// Prefix for auto-generated ids
	pub id_prefix: String,
	/// First counter value for auto-generated ids
	pub id_start: u64,
	/// Whether widgets report client-side plugins to the registry
	pub register_plugins: bool,
}

impl Default for WidgetSettings {
	fn default() -> Self {
		Self {
			id_prefix: DEFAULT_ID_PREFIX.to_string(),
			id_start: 0,
			register_plugins: true,
		}
	}
}

impl WidgetSettings {
	/// Validates the settings.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.id_prefix.is_empty() {
			return Err(SettingsError::ValidationError(
				"id_prefix must not be empty".to_string(),
			));
		}
		if self
			.id_prefix
			.chars()
			.any(|c| c.is_whitespace() || c == '"' || c == '#')
		{
			return Err(SettingsError::ValidationError(format!(
				"id_prefix `{}` is not usable inside an HTML id",
				self.id_prefix
			)));
		}
		Ok(())
	}

	/// Loads settings from environment variables.
	///
	/// Reads `TRELLIS_ID_PREFIX`, `TRELLIS_ID_START` and
	/// `TRELLIS_REGISTER_PLUGINS`; unset variables keep their defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		let mut settings = Self::default();

		if let Ok(prefix) = std::env::var("TRELLIS_ID_PREFIX") {
			settings.id_prefix = prefix;
		}

		if let Ok(start) = std::env::var("TRELLIS_ID_START") {
			settings.id_start = start.trim().parse().map_err(|e| {
				SettingsError::ParseError(format!("TRELLIS_ID_START: {}", e))
			})?;
		}

		if let Ok(flag) = std::env::var("TRELLIS_REGISTER_PLUGINS") {
			settings.register_plugins = flag.to_lowercase() == "true" || flag == "1";
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

		let settings: WidgetSettings = match path.extension().and_then(|s| s.to_str()) {
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
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::env;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = WidgetSettings::default();
		assert_eq!(settings.id_prefix, "w");
		assert_eq!(settings.id_start, 0);
		assert!(settings.register_plugins);
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("a b")]
	#[case("#w")]
	fn test_invalid_prefix(#[case] prefix: &str) {
		let settings = WidgetSettings {
			id_prefix: prefix.to_string(),
			..Default::default()
		};
		assert!(matches!(
			settings.validate(),
			Err(SettingsError::ValidationError(_))
		));
	}

	#[rstest]
	fn test_from_toml_file() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "id_prefix = \"nav\"\nid_start = 10").unwrap();

		let settings = WidgetSettings::from_file(file.path()).unwrap();
		assert_eq!(settings.id_prefix, "nav");
		assert_eq!(settings.id_start, 10);
		assert!(settings.register_plugins);
	}

	#[rstest]
	fn test_from_json_file() {
		let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
		write!(file, r#"{{"register_plugins": false}}"#).unwrap();

		let settings = WidgetSettings::from_file(file.path()).unwrap();
		assert_eq!(settings.id_prefix, "w");
		assert!(!settings.register_plugins);
	}

	#[rstest]
	fn test_unsupported_format() {
		let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
		assert!(matches!(
			WidgetSettings::from_file(file.path()),
			Err(SettingsError::UnsupportedFormat(_))
		));
	}

	#[rstest]
	fn test_missing_file() {
		assert!(matches!(
			WidgetSettings::from_file("/nonexistent/trellis.toml"),
			Err(SettingsError::FileError(_))
		));
	}

	#[rstest]
	fn test_parse_error() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "id_start = \"soon\"").unwrap();
		assert!(matches!(
			WidgetSettings::from_file(file.path()),
			Err(SettingsError::ParseError(_))
		));
	}

	#[rstest]
	#[serial(trellis_env)]
	fn test_from_env() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TRELLIS_ID_PREFIX", "env");
			env::set_var("TRELLIS_ID_START", "3");
			env::set_var("TRELLIS_REGISTER_PLUGINS", "false");
		}

		let settings = WidgetSettings::from_env();

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("TRELLIS_ID_PREFIX");
			env::remove_var("TRELLIS_ID_START");
			env::remove_var("TRELLIS_REGISTER_PLUGINS");
		}

		let settings = settings.unwrap();
		assert_eq!(settings.id_prefix, "env");
		assert_eq!(settings.id_start, 3);
		assert!(!settings.register_plugins);
	}

	#[rstest]
	#[serial(trellis_env)]
	fn test_from_env_rejects_bad_start() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("TRELLIS_ID_START", "first");
		}

		let result = WidgetSettings::from_env();

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("TRELLIS_ID_START");
		}

		assert!(matches!(result, Err(SettingsError::ParseError(_))));
	}
}
