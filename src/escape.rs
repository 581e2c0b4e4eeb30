//! Escaping for strings interpolated into markup.
//!
//! Every user-supplied string that ends up in an `innerHTML` assignment goes through one of these.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>` and `"` for HTML body context.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
	escape_with(text, |c| match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		_ => None,
	})
}

/// Escapes `"` only, for values placed inside double-quoted attributes.
#[must_use]
pub fn escape_attr(text: &str) -> Cow<'_, str> {
	escape_with(text, |c| if c == '"' { Some("&quot;") } else { None })
}

fn escape_with(text: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
	let first = match text.char_indices().find(|&(_, c)| replacement(c).is_some()) {
		Some((i, _)) => i,
		None => return Cow::Borrowed(text),
	};

	let mut escaped = String::with_capacity(text.len() + 16);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		match replacement(c) {
			Some(entity) => escaped.push_str(entity),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
