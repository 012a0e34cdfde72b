//! Escaping helpers shared by the serializers and the mini-parser.
//!
//! Body text and attribute values are escaped differently:
//! - text: `&`, `<`, `>`
//! - attribute values: `&`, `<`, `>`, `"`, `'`
//!
//! Both return a borrowed reference when nothing needs escaping.

use std::borrow::Cow;

/// Escapes a string for use as element body text.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	html_escape::encode_text(s)
}

/// Escapes a string for use inside a quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
	html_escape::encode_quoted_attribute(s)
}

/// Decodes HTML character references (`&amp;`, `&#x27;`, ...).
pub fn unescape(s: &str) -> Cow<'_, str> {
	html_escape::decode_html_entities(s)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_text_no_special_chars() {
		assert_eq!(escape_text("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("say \"hi\"", "say \"hi\"")]
	fn test_escape_text(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_text(input), expected);
	}

	#[rstest]
	#[case("a & b", "a &amp; b")]
	#[case("<b>", "&lt;b&gt;")]
	#[case("\"x\"", "&quot;x&quot;")]
	fn test_escape_attr(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_attr(input), expected);
	}

	#[rstest]
	fn test_escape_attr_single_quote() {
		let escaped = escape_attr("it's");
		assert!(!escaped.contains('\''));
		assert_eq!(unescape(&escaped), "it's");
	}

	#[rstest]
	fn test_unescape_reverses_attr_escaping() {
		let raw = "<a href=\"x\">it's & more</a>";
		assert_eq!(unescape(&escape_attr(raw)), raw);
	}
}
