//! # Trellis Widgets
//!
//! Server-rendered Bootstrap 5 widgets.
//!
//! ## Features
//!
//! - **Buttons**: [`Button`], [`ButtonGroup`] and [`ButtonToolbar`]
//! - **Containers**: [`Card`] and [`Offcanvas`], renderable in one call or
//!   streamed around caller content through a [`Frame`](trellis_markup::Frame)
//! - **Id allocation**: [`IdAllocator`] hands out `w0`, `w1`, ... to widgets
//!   without an explicit id
//! - **Plugin registration**: widgets with client-side behaviour report to a
//!   [`PluginRegistry`]
//!
//! Every widget is an immutable configuration value. Builder methods take
//! `self` and return the updated value, and every widget deserializes from
//! JSON or TOML.
//!
//! ## Example
//!
//! ```
//! use trellis_markup::AttributeSet;
//! use trellis_widgets::{Button, RenderContext, Widget};
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

pub mod button;
pub mod button_group;
pub mod button_toolbar;
pub mod card;
pub mod component;
pub mod context;
pub mod error;
pub mod id;
pub mod offcanvas;
pub mod settings;

pub use button::Button;
pub use button_group::{ButtonEntry, ButtonGroup};
pub use button_toolbar::{ButtonToolbar, GroupEntry};
pub use card::{Card, CardImage, ImageLocation, ImageOverlay};
pub use component::Widget;
pub use context::{NoopPluginRegistry, PluginRegistry, PluginRequest, RenderContext};
pub use error::{Result, SettingsError, WidgetError};
pub use id::IdAllocator;
pub use offcanvas::{CloseButton, Offcanvas, OffcanvasLocation, ToggleButton};
pub use settings::WidgetSettings;
