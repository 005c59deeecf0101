//! Two-phase container rendering.
//!
//! A [`Frame`] describes a container that wraps caller-supplied content:
//! regions before the content, an optional body element that holds it, and
//! regions after it. The frame can be emitted in two halves
//! ([`Frame::begin`] / [`Frame::end`]) with the content streamed in between,
//! or folded into a single fragment with [`Frame::wrap`].
//!
//! Both paths produce identical bytes:
//!
//! ```
//! use trellis_markup::{AttributeSet, Fragment, Frame, Slot};
//!
//! let frame = Frame::new("div", AttributeSet::new().with_class("card"))
//!     .head(Fragment::raw("<div class=\"card-header\">H</div>"))
//!     .slot(Slot::new("div", AttributeSet::new().with_class("card-body")));
//!
//! let streamed = format!("{}Hello{}", frame.begin(), frame.end());
//! assert_eq!(streamed, frame.wrap(Fragment::raw("Hello")).render_to_string());
//! ```

use crate::attrs::AttributeSet;
use crate::builder::MarkupBuilder;
use crate::fragment::{Container, Fragment, FragmentRenderer, IntoFragment};
use std::borrow::Cow;

const SEPARATOR: &str = "\n";

/// The element that directly wraps streamed content.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
	tag: Cow<'static, str>,
	attrs: AttributeSet,
	trailing: Fragment,
}

impl Slot {
	/// Creates a slot element.
	pub fn new(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet) -> Self {
		Self {
			tag: tag.into(),
			attrs,
			trailing: Fragment::Empty,
		}
	}

	/// Sets a fragment emitted after the content, inside the slot element.
	pub fn trailing(mut self, fragment: impl IntoFragment) -> Self {
		self.trailing = fragment.into_fragment();
		self
	}

	/// Returns the slot attributes.
	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}
}

/// A container split around caller content.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
	lead: Fragment,
	tag: Cow<'static, str>,
	attrs: AttributeSet,
	head: Vec<Fragment>,
	slot: Option<Slot>,
	tail: Vec<Fragment>,
}

impl Frame {
	/// Creates a frame around an outer element.
	pub fn new(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet) -> Self {
		Self {
			lead: Fragment::Empty,
			tag: tag.into(),
			attrs,
			head: Vec::new(),
			slot: None,
			tail: Vec::new(),
		}
	}

	/// Sets a fragment emitted before the outer element.
	pub fn lead(mut self, fragment: impl IntoFragment) -> Self {
		self.lead = fragment.into_fragment();
		self
	}

	/// Adds a region before the content. Empty regions are ignored.
	pub fn head(mut self, fragment: impl IntoFragment) -> Self {
		let fragment = fragment.into_fragment();
		if !fragment.is_empty() {
			self.head.push(fragment);
		}
		self
	}

	/// Sets the element that wraps the content.
	pub fn slot(mut self, slot: Slot) -> Self {
		self.slot = Some(slot);
		self
	}

	/// Adds a region after the content. Empty regions are ignored.
	pub fn tail(mut self, fragment: impl IntoFragment) -> Self {
		let fragment = fragment.into_fragment();
		if !fragment.is_empty() {
			self.tail.push(fragment);
		}
		self
	}

	/// Returns the outer element's attributes.
	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}

	/// Returns the outer element's id, if any.
	pub fn id(&self) -> Option<&str> {
		self.attrs.get_str("id")
	}

	/// Emits everything up to the point where content goes.
	pub fn begin(&self) -> String {
		let renderer = FragmentRenderer;
		let mut out = String::new();
		if !self.lead.is_empty() {
			renderer.render_into(&self.lead, &mut out);
			out.push_str(SEPARATOR);
		}
		MarkupBuilder::begin_tag_into(&mut out, &self.tag, &self.attrs);
		out.push_str(SEPARATOR);
		for region in &self.head {
			renderer.render_into(region, &mut out);
			out.push_str(SEPARATOR);
		}
		if let Some(slot) = &self.slot {
			MarkupBuilder::begin_tag_into(&mut out, &slot.tag, &slot.attrs);
			out.push_str(SEPARATOR);
		}
		out
	}

	/// Emits everything after the content.
	pub fn end(&self) -> String {
		let renderer = FragmentRenderer;
		let mut out = String::new();
		if let Some(slot) = &self.slot {
			out.push_str(SEPARATOR);
			renderer.render_into(&slot.trailing, &mut out);
			MarkupBuilder::end_tag_into(&mut out, &slot.tag);
		}
		for region in &self.tail {
			out.push_str(SEPARATOR);
			renderer.render_into(region, &mut out);
		}
		out.push_str(SEPARATOR);
		MarkupBuilder::end_tag_into(&mut out, &self.tag);
		out
	}

	/// Folds the frame and `content` into a single fragment tree.
	pub fn wrap(&self, content: impl IntoFragment) -> Fragment {
		let content = content.into_fragment();
		let mut children = vec![Fragment::raw(SEPARATOR)];
		for region in &self.head {
			children.push(region.clone());
			children.push(Fragment::raw(SEPARATOR));
		}
		match &self.slot {
			Some(slot) => children.push(
				Container::new(slot.tag.clone(), slot.attrs.clone())
					.child(Fragment::raw(SEPARATOR))
					.child(content)
					.child(Fragment::raw(SEPARATOR))
					.child(slot.trailing.clone())
					.into_fragment(),
			),
			None => children.push(content),
		}
		for region in &self.tail {
			children.push(Fragment::raw(SEPARATOR));
			children.push(region.clone());
		}
		children.push(Fragment::raw(SEPARATOR));

		let outer = Container::new(self.tag.clone(), self.attrs.clone())
			.children(children)
			.into_fragment();
		if self.lead.is_empty() {
			outer
		} else {
			Fragment::Sequence(vec![self.lead.clone(), Fragment::raw(SEPARATOR), outer])
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sample() -> Frame {
		Frame::new("div", AttributeSet::new().with("id", "w0"))
			.lead(Fragment::raw("<button>Show</button>"))
			.head(Fragment::raw("<h5>T</h5>"))
			.head(Fragment::Empty)
			.slot(Slot::new("div", AttributeSet::new().with_class("body")).trailing(Fragment::raw("B")))
			.tail(Fragment::raw("<ul></ul>"))
	}

	#[rstest]
	fn test_begin() {
		assert_eq!(
			sample().begin(),
			"<button>Show</button>\n<div id=\"w0\">\n<h5>T</h5>\n<div class=\"body\">\n"
		);
	}

	#[rstest]
	fn test_end() {
		assert_eq!(sample().end(), "\nB</div>\n<ul></ul>\n</div>");
	}

	#[rstest]
	#[case("")]
	#[case("content")]
	#[case("<p>nested</p>")]
	fn test_wrap_matches_streaming(#[case] content: &str) {
		let frame = sample();
		let streamed = format!("{}{}{}", frame.begin(), content, frame.end());
		assert_eq!(frame.wrap(Fragment::raw(content)).render_to_string(), streamed);
	}

	#[rstest]
	fn test_frame_without_slot() {
		let frame = Frame::new("div", AttributeSet::new());
		assert_eq!(frame.begin(), "<div>\n");
		assert_eq!(frame.end(), "\n</div>");
		assert_eq!(frame.wrap(Fragment::raw("x")).render_to_string(), "<div>\nx\n</div>");
	}

	#[rstest]
	fn test_id() {
		assert_eq!(sample().id(), Some("w0"));
	}
}
