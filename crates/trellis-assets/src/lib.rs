//! # Trellis Assets
//!
//! Bootstrap 5 asset bundles for Trellis widgets.
//!
//! ## Features
//!
//! - **Bundles**: [`AssetBundle`] declarations for the Bootstrap stylesheet
//!   and plugin scripts, plus the legacy `BootstrapAsset` names
//! - **Registry**: [`AssetRegistry`] resolves bundle dependencies and renders
//!   `<link>`/`<script>` tags; it also receives widget plugin registrations
//! - **Settings**: [`AssetSettings`] for the static URL and a hashed-name
//!   manifest

pub mod bundle;
pub mod error;
pub mod registry;
pub mod settings;

pub use bundle::{
	AssetBundle, BOOTSTRAP_ASSET, BOOTSTRAP_PLUGIN_ASSET, BOOTSTRAP_SOURCE_PATH, BOOTSTRAP5_ASSET,
	BOOTSTRAP5_PLUGIN_ASSET,
};
pub use error::{AssetError, Result};
pub use registry::AssetRegistry;
pub use settings::AssetSettings;
