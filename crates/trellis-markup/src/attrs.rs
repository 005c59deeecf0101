//! Ordered HTML attribute sets
//!
//! [`AttributeSet`] keeps attributes in insertion order and stores `class`
//! as an ordered set of tokens, so merging option sets never duplicates a
//! class.
//!
//! ```
//! use trellis_markup::AttributeSet;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.set("id", "w0-button");
//! attrs.add_class("btn");
//! attrs.merge(&AttributeSet::new().with_class("btn btn-lg").with("disabled", true));
//!
//! assert_eq!(attrs.render(), r#" id="w0-button" class="btn btn-lg" disabled"#);
//! ```

use crate::escape::escape_attr;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

const CLASS: &str = "class";

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// String value, rendered escaped inside quotes
	Str(String),
	/// Boolean value; `true` renders the bare name, `false` omits the attribute
	Bool(bool),
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
}

impl AttrValue {
	/// Returns the string payload if this is a [`AttrValue::Str`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Whether the value omits its attribute when rendered.
	pub fn is_omitted(&self) -> bool {
		matches!(self, Self::Bool(false))
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Bool(b) => write!(f, "{}", b),
			Self::Int(i) => write!(f, "{}", i),
			Self::Float(x) => write!(f, "{}", x),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for AttrValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

#[derive(Debug, Clone, PartialEq)]
enum Entry {
	/// Position marker for the class attribute
	Class,
	Attr { name: String, value: AttrValue },
}

/// Ordered mapping of attribute names to values with a duplicate-safe `class` slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
	entries: Vec<Entry>,
	classes: Vec<String>,
}

impl AttributeSet {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, overwriting any previous value in place.
	///
	/// Setting `class` replaces the whole token list.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
		let name = name.into();
		let value = value.into();

		if name == CLASS {
			self.classes.clear();
			match &value {
				AttrValue::Str(tokens) => {
					self.add_class(tokens);
				}
				AttrValue::Bool(_) => {}
				other => {
					self.add_class(other.to_string());
				}
			}
			return self;
		}

		let existing = self
			.entries
			.iter()
			.position(|e| matches!(e, Entry::Attr { name: n, .. } if *n == name));
		match existing {
			Some(idx) => {
				if let Entry::Attr { value: slot, .. } = &mut self.entries[idx] {
					*slot = value;
				}
			}
			None => self.entries.push(Entry::Attr { name, value }),
		}
		self
	}

	/// Appends class tokens, skipping duplicates.
	///
	/// Whitespace inside `tokens` separates multiple classes.
	pub fn add_class(&mut self, tokens: impl AsRef<str>) -> &mut Self {
		self.add_classes(tokens.as_ref().split_whitespace())
	}

	/// Appends each class token from a sequence, skipping duplicates.
	pub fn add_classes<I>(&mut self, tokens: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		for token in tokens {
			for part in token.as_ref().split_whitespace() {
				if !self.classes.iter().any(|c| c == part) {
					self.classes.push(part.to_string());
				}
			}
		}
		if !self.classes.is_empty() && !self.entries.contains(&Entry::Class) {
			self.entries.push(Entry::Class);
		}
		self
	}

	/// Merges `other` into `self`.
	///
	/// Non-class keys from `other` overwrite existing values; class tokens are unioned.
	pub fn merge(&mut self, other: &AttributeSet) -> &mut Self {
		for entry in &other.entries {
			match entry {
				Entry::Class => {
					self.add_classes(&other.classes);
				}
				Entry::Attr { name, value } => {
					self.set(name.clone(), value.clone());
				}
			}
		}
		self
	}

	/// Removes an attribute, returning whether it was present.
	pub fn remove(&mut self, name: &str) -> bool {
		if name == CLASS {
			let had = !self.classes.is_empty();
			self.classes.clear();
			self.entries.retain(|e| *e != Entry::Class);
			return had;
		}
		let before = self.entries.len();
		self.entries
			.retain(|e| !matches!(e, Entry::Attr { name: n, .. } if n == name));
		before != self.entries.len()
	}

	/// Returns the value of a non-class attribute.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.iter().find_map(|entry| match entry {
			Entry::Attr { name: n, value } if n == name => Some(value),
			_ => None,
		})
	}

	/// Returns the string value of a non-class attribute.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(AttrValue::as_str)
	}

	/// Whether an attribute is present. `class` counts only when it has tokens.
	pub fn contains(&self, name: &str) -> bool {
		if name == CLASS {
			return !self.classes.is_empty();
		}
		self.get(name).is_some()
	}

	/// Whether the given class token is present.
	pub fn has_class(&self, token: &str) -> bool {
		self.classes.iter().any(|c| c == token)
	}

	/// Class tokens in first-added order.
	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	/// Whether nothing would be rendered.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
			&& self.entries.iter().all(|e| match e {
				Entry::Class => true,
				Entry::Attr { value, .. } => value.is_omitted(),
			})
	}

	/// Attribute names in render order, including `class` when non-empty.
	pub fn names(&self) -> Vec<&str> {
		self.entries
			.iter()
			.filter_map(|e| match e {
				Entry::Class if !self.classes.is_empty() => Some(CLASS),
				Entry::Class => None,
				Entry::Attr { name, .. } => Some(name.as_str()),
			})
			.collect()
	}

	/// Builder form of [`AttributeSet::set`].
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Builder form of [`AttributeSet::add_class`].
	pub fn with_class(mut self, tokens: impl AsRef<str>) -> Self {
		self.add_class(tokens);
		self
	}

	/// Builder form of [`AttributeSet::merge`].
	pub fn merged(mut self, other: &AttributeSet) -> Self {
		self.merge(other);
		self
	}

	/// Renders the set as ` key="value"` pairs in insertion order.
	///
	/// The output starts with a space when non-empty so it can be spliced
	/// directly after a tag name.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out);
		out
	}

	/// Appends the rendered attributes to `out`.
	pub fn render_into(&self, out: &mut String) {
		for entry in &self.entries {
			match entry {
				Entry::Class => {
					if self.classes.is_empty() {
						continue;
					}
					out.push_str(" class=\"");
					out.push_str(&escape_attr(&self.classes.join(" ")));
					out.push('"');
				}
				Entry::Attr { name, value } => match value {
					AttrValue::Bool(false) => {}
					AttrValue::Bool(true) => {
						out.push(' ');
						out.push_str(name);
					}
					other => {
						out.push(' ');
						out.push_str(name);
						out.push_str("=\"");
						out.push_str(&escape_attr(&other.to_string()));
						out.push('"');
					}
				},
			}
		}
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut attrs = AttributeSet::new();
		for (k, v) in iter {
			attrs.set(k, v);
		}
		attrs
	}
}

/// Untagged input shape accepted for a single attribute when deserializing.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum AttrInput {
	Null(()),
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	List(Vec<String>),
}

struct AttributeSetVisitor;

impl<'de> Visitor<'de> for AttributeSetVisitor {
	type Value = AttributeSet;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a map of HTML attributes")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut attrs = AttributeSet::new();
		while let Some((name, input)) = map.next_entry::<String, AttrInput>()? {
			let is_class = name == CLASS;
			match (is_class, input) {
				(_, AttrInput::Null(())) => {}
				(true, AttrInput::Str(tokens)) => {
					attrs.add_class(tokens);
				}
				(true, AttrInput::List(tokens)) => {
					attrs.add_classes(tokens);
				}
				(_, AttrInput::List(_)) => {
					return Err(de::Error::custom(format!(
						"attribute `{}` must be a scalar value",
						name
					)));
				}
				(_, AttrInput::Bool(b)) => {
					attrs.set(name, b);
				}
				(_, AttrInput::Int(i)) => {
					attrs.set(name, i);
				}
				(_, AttrInput::Float(x)) => {
					attrs.set(name, x);
				}
				(_, AttrInput::Str(s)) => {
					attrs.set(name, s);
				}
			}
		}
		Ok(attrs)
	}
}

impl<'de> Deserialize<'de> for AttributeSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(AttributeSetVisitor)
	}
}

/// Builds an [`AttributeSet`] from `name => value` pairs.
///
/// ```
/// use trellis_markup::attrs;
///
/// let set = attrs! { "class" => "mr-2", "role" => "group" };
/// assert_eq!(set.render(), r#" class="mr-2" role="group""#);
/// ```
#[macro_export]
macro_rules! attrs {
	() => { $crate::AttributeSet::new() };
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut set = $crate::AttributeSet::new();
		$( set.set($name, $value); )+
		set
	}};
}
