//! Fragment trees and their renderer.
//!
//! A [`Fragment`] is an in-memory description of markup prior to
//! serialization. Composers build fragment trees; [`FragmentRenderer`]
//! walks them and emits the final string.

use crate::attrs::AttributeSet;
use crate::builder::{Content, MarkupBuilder, is_void_element};
use crate::escape::escape_text;
use std::borrow::Cow;

/// A unified representation of renderable markup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fragment {
	/// An element whose content is a single string.
	Leaf(Leaf),
	/// An element with ordered child fragments.
	Container(Container),
	/// A text node, escaped on output.
	Text(String),
	/// Pre-rendered markup, inserted verbatim.
	Raw(String),
	/// Sibling fragments with no wrapper element.
	Sequence(Vec<Fragment>),
	/// Renders nothing.
	#[default]
	Empty,
}

/// An element with string content.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
	tag: Cow<'static, str>,
	attrs: AttributeSet,
	content: String,
	encode: bool,
	self_closing: bool,
}

impl Leaf {
	/// Creates a leaf whose content is escaped on output.
	pub fn new(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet, content: impl Into<String>) -> Self {
		let tag = tag.into();
		let content = content.into();
		let self_closing = is_void_element(&tag) && content.is_empty();
		Self {
			tag,
			attrs,
			content,
			encode: true,
			self_closing,
		}
	}

	/// Sets whether the content is escaped.
	pub fn encode(mut self, encode: bool) -> Self {
		self.encode = encode;
		self
	}

	/// Inserts the content verbatim.
	pub fn raw(self) -> Self {
		self.encode(false)
	}

	/// Forces or disables the self-closing form.
	pub fn self_closing(mut self, self_closing: bool) -> Self {
		self.self_closing = self_closing;
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}

	/// Returns the content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns whether the content is escaped.
	pub fn is_encoded(&self) -> bool {
		self.encode
	}

	/// Returns whether the leaf renders as a self-closing tag.
	pub fn is_self_closing(&self) -> bool {
		self.self_closing
	}
}

/// An element with child fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
	tag: Cow<'static, str>,
	attrs: AttributeSet,
	children: Vec<Fragment>,
}

impl Container {
	/// Creates an empty container.
	pub fn new(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet) -> Self {
		Self {
			tag: tag.into(),
			attrs,
			children: Vec::new(),
		}
	}

	/// Adds a child fragment.
	pub fn child(mut self, child: impl IntoFragment) -> Self {
		self.children.push(child.into_fragment());
		self
	}

	/// Adds multiple child fragments.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoFragment>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoFragment::into_fragment));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &AttributeSet {
		&self.attrs
	}

	/// Returns the child fragments.
	pub fn child_fragments(&self) -> &[Fragment] {
		&self.children
	}
}

impl Fragment {
	/// Creates a leaf element with escaped content.
	pub fn leaf(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet, content: impl Into<String>) -> Leaf {
		Leaf::new(tag, attrs, content)
	}

	/// Creates a container element.
	pub fn container(tag: impl Into<Cow<'static, str>>, attrs: AttributeSet) -> Container {
		Container::new(tag, attrs)
	}

	/// Creates an escaped text node.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a verbatim markup node.
	pub fn raw(markup: impl Into<String>) -> Self {
		Self::Raw(markup.into())
	}

	/// Creates a sequence of sibling fragments.
	pub fn sequence(items: impl IntoIterator<Item = impl IntoFragment>) -> Self {
		Self::Sequence(items.into_iter().map(IntoFragment::into_fragment).collect())
	}

	/// Joins fragments with a raw separator, dropping empty ones.
	///
	/// ```
	/// use trellis_markup::Fragment;
	///
	/// let joined = Fragment::join(["a", "b"].map(Fragment::raw), "\n");
	/// assert_eq!(joined.render_to_string(), "a\nb");
	/// ```
	pub fn join(items: impl IntoIterator<Item = Fragment>, separator: &str) -> Self {
		let mut parts = Vec::new();
		for item in items.into_iter().filter(|f| !f.is_empty()) {
			if !parts.is_empty() {
				parts.push(Fragment::raw(separator));
			}
			parts.push(item);
		}
		Self::Sequence(parts)
	}

	/// Whether this fragment renders to an empty string.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Text(s) | Self::Raw(s) => s.is_empty(),
			Self::Sequence(items) => items.iter().all(Fragment::is_empty),
			Self::Leaf(_) | Self::Container(_) => false,
		}
	}

	/// Renders the fragment to an HTML string.
	pub fn render_to_string(&self) -> String {
		FragmentRenderer.render(self)
	}
}

/// Walks a fragment tree and emits markup.
///
/// Rendering is pure: the same fragment always yields the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentRenderer;

impl FragmentRenderer {
	/// Renders a fragment to a new string.
	pub fn render(&self, fragment: &Fragment) -> String {
		let mut out = String::new();
		self.render_into(fragment, &mut out);
		out
	}

	/// Appends a rendered fragment to `out`.
	pub fn render_into(&self, fragment: &Fragment, out: &mut String) {
		match fragment {
			Fragment::Leaf(leaf) => {
				if leaf.self_closing {
					MarkupBuilder::void_tag_into(out, &leaf.tag, &leaf.attrs);
				} else {
					MarkupBuilder::begin_tag_into(out, &leaf.tag, &leaf.attrs);
					let content = Content::with_policy(leaf.content.as_str(), leaf.encode);
					match content {
						Content::Encoded(s) => out.push_str(&escape_text(&s)),
						Content::Raw(s) => out.push_str(&s),
						Content::None => {}
					}
					MarkupBuilder::end_tag_into(out, &leaf.tag);
				}
			}
			Fragment::Container(container) => {
				MarkupBuilder::begin_tag_into(out, &container.tag, &container.attrs);
				for child in &container.children {
					self.render_into(child, out);
				}
				MarkupBuilder::end_tag_into(out, &container.tag);
			}
			Fragment::Text(text) => out.push_str(&escape_text(text)),
			Fragment::Raw(markup) => out.push_str(markup),
			Fragment::Sequence(items) => {
				for item in items {
					self.render_into(item, out);
				}
			}
			Fragment::Empty => {}
		}
	}
}

/// Types that can be converted into a [`Fragment`].
pub trait IntoFragment {
	/// Converts self into a fragment.
	fn into_fragment(self) -> Fragment;
}

impl IntoFragment for Fragment {
	fn into_fragment(self) -> Fragment {
		self
	}
}

impl IntoFragment for Leaf {
	fn into_fragment(self) -> Fragment {
		Fragment::Leaf(self)
	}
}

impl IntoFragment for Container {
	fn into_fragment(self) -> Fragment {
		Fragment::Container(self)
	}
}

impl IntoFragment for String {
	fn into_fragment(self) -> Fragment {
		Fragment::Text(self)
	}
}

impl IntoFragment for &str {
	fn into_fragment(self) -> Fragment {
		Fragment::Text(self.to_string())
	}
}

impl<T: IntoFragment> IntoFragment for Option<T> {
	fn into_fragment(self) -> Fragment {
		match self {
			Some(f) => f.into_fragment(),
			None => Fragment::Empty,
		}
	}
}

impl<T: IntoFragment> IntoFragment for Vec<T> {
	fn into_fragment(self) -> Fragment {
		Fragment::sequence(self)
	}
}

impl IntoFragment for () {
	fn into_fragment(self) -> Fragment {
		Fragment::Empty
	}
}

impl From<Leaf> for Fragment {
	fn from(leaf: Leaf) -> Self {
		Fragment::Leaf(leaf)
	}
}

impl From<Container> for Fragment {
	fn from(container: Container) -> Self {
		Fragment::Container(container)
	}
}
