//! Error types for trellis-assets

use thiserror::Error;

/// Error type for bundle registration and resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
	/// A bundle was registered or depended on without being declared
	#[error("Unknown asset bundle: {name}")]
	UnknownBundle {
		/// Name of the missing bundle
		name: String,
	},

	/// Bundle dependencies form a cycle
	#[error("Circular bundle dependency: {}", path.join(" -> "))]
	DependencyCycle {
		/// Bundles on the cycle, starting and ending with the same name
		path: Vec<String>,
	},
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_messages() {
		let err = AssetError::UnknownBundle {
			name: "App".to_string(),
		};
		assert_eq!(err.to_string(), "Unknown asset bundle: App");

		let err = AssetError::DependencyCycle {
			path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
		};
		assert_eq!(err.to_string(), "Circular bundle dependency: A -> B -> A");
	}
}
