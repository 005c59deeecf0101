//! # Trellis
//!
//! Server-rendered Bootstrap 5 widgets for Rust.
//!
//! Trellis turns typed widget configurations into Bootstrap 5 markup:
//! buttons, button groups and toolbars, cards, and offcanvas panels. Every
//! widget is an immutable value that can be built in code or deserialized
//! from JSON/TOML, and rendered either in one call or streamed around
//! caller-supplied content.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `widgets` - The widget set ([`widgets`])
//! - `assets` - Bootstrap asset bundles and tag rendering ([`assets`])
//!
//! The markup layer ([`markup`]) is always available.
//!
//! ## Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let ctx = RenderContext::isolated();
//! let html = Button::new()
//!     .label("Action")
//!     .options(AttributeSet::new().with_class("btn-lg"))
//!     .render_in(&ctx)
//!     .unwrap();
//!
//! assert_eq!(html, r#"<button id="w0-button" class="btn btn-lg">Action</button>"#);
//! ```

pub use trellis_markup as markup;

#[cfg(feature = "widgets")]
pub use trellis_widgets as widgets;

#[cfg(feature = "assets")]
pub use trellis_assets as assets;

pub use trellis_markup::{AttributeSet, Fragment, Frame};

#[cfg(feature = "widgets")]
pub use trellis_widgets::{
	Button, ButtonGroup, ButtonToolbar, Card, IdAllocator, Offcanvas, RenderContext, Widget,
	WidgetError, WidgetSettings,
};

#[cfg(feature = "assets")]
pub use trellis_assets::{AssetBundle, AssetRegistry, AssetSettings};

/// Re-export commonly used types
pub mod prelude {
	pub use trellis_markup::{AttributeSet, Fragment, Frame, IntoFragment, attrs};

	#[cfg(feature = "widgets")]
	pub use trellis_widgets::{
		Button, ButtonEntry, ButtonGroup, ButtonToolbar, Card, CardImage, CloseButton, GroupEntry,
		IdAllocator, ImageLocation, ImageOverlay, Offcanvas, OffcanvasLocation, PluginRegistry,
		PluginRequest, RenderContext, ToggleButton, Widget, WidgetError, WidgetSettings,
	};

	#[cfg(feature = "assets")]
	pub use trellis_assets::{AssetBundle, AssetError, AssetRegistry, AssetSettings};
}
