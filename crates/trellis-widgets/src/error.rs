//! Error types for trellis-widgets

use thiserror::Error;

/// Error type for widget rendering
///
/// Missing or malformed configuration never produces an error; the affected
/// region is omitted instead. Only a broken id source is fatal, since
/// rendering on would silently produce duplicate or dangling ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
	/// An auto-generated id was needed but the render context has no allocator
	#[error("Widget `{widget}` needs an auto-generated id but no id allocator is available")]
	MissingIdAllocator {
		/// Name of the widget requesting the id
		widget: &'static str,
	},

	/// The id counter cannot advance without wrapping around
	#[error("Id space exhausted for prefix `{prefix}`")]
	IdSpaceExhausted {
		/// Prefix of the exhausted allocator
		prefix: String,
	},
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Error type for loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_messages() {
		let err = WidgetError::MissingIdAllocator { widget: "Card" };
		assert_eq!(
			err.to_string(),
			"Widget `Card` needs an auto-generated id but no id allocator is available"
		);
		let err = WidgetError::IdSpaceExhausted {
			prefix: "w".to_string(),
		};
		assert_eq!(err.to_string(), "Id space exhausted for prefix `w`");
	}
}
