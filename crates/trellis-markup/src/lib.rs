//! # Trellis Markup
//!
//! Markup primitives shared by every Trellis widget.
//!
//! ## Modules
//!
//! - [`attrs`]: ordered [`AttributeSet`] with duplicate-safe class handling
//! - [`builder`]: [`MarkupBuilder`] for single tags and open/close pairs
//! - [`fragment`]: [`Fragment`] trees and the [`FragmentRenderer`]
//! - [`frame`]: [`Frame`] for containers emitted around streamed content
//! - [`escape`]: HTML escaping helpers
//!
//! ## Example
//!
//! ```
//! use trellis_markup::{AttributeSet, Fragment, IntoFragment};
//!
//! let toolbar = Fragment::container("div", AttributeSet::new().with_class("btn-toolbar"))
//!     .child(Fragment::leaf("button", AttributeSet::new().with_class("btn"), "1"))
//!     .into_fragment();
//!
//! assert_eq!(
//!     toolbar.render_to_string(),
//!     r#"<div class="btn-toolbar"><button class="btn">1</button></div>"#
//! );
//! ```

pub mod attrs;
pub mod builder;
pub mod escape;
pub mod fragment;
pub mod frame;

pub use attrs::{AttrValue, AttributeSet};
pub use builder::{Content, MarkupBuilder, is_void_element};
pub use fragment::{Container, Fragment, FragmentRenderer, IntoFragment, Leaf};
pub use frame::{Frame, Slot};
