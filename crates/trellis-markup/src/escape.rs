//! HTML escaping helpers

use std::borrow::Cow;

/// Escapes text content placed between tags.
///
/// Quotes are escaped as well so that encoded labels can be reused inside
/// attribute values without a second pass.
///
/// # Examples
///
/// ```
/// use trellis_markup::escape::escape_text;
///
/// assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(text)
}

/// Escapes an attribute value rendered inside double quotes.
///
/// # Examples
///
/// ```
/// use trellis_markup::escape::escape_attr;
///
/// assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_attr(value: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(value)
}
