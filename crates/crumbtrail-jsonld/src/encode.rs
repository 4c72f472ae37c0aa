//! URI and HTML embedding helpers.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that may not appear literally in a URI.
///
/// Reserved characters and `%` are left alone so existing escapes survive.
/// Non-ASCII bytes are always encoded.
const URI_ILLEGAL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encode a URL as US-ASCII.
///
/// Non-ASCII characters are UTF-8 percent-encoded along with characters that
/// are illegal in a URI. Already-encoded sequences are not encoded again.
#[must_use]
pub fn encode_uri(url: &str) -> Cow<'_, str> {
    utf8_percent_encode(url, URI_ILLEGAL).into()
}

/// Wrap JSON-LD in a `<script>` element for an HTML or XHTML head.
///
/// `<`, `>` and `&` are written as JSON unicode escapes. They can only occur
/// inside JSON strings, so the data is unchanged while the markup cannot
/// close the element early.
#[must_use]
pub fn script_tag(json: &str) -> String {
    let mut html = String::with_capacity(json.len() + 48);
    html.push_str("<script type=\"application/ld+json\">\n");
    for c in json.chars() {
        match c {
            '<' => html.push_str("\\u003c"),
            '>' => html.push_str("\\u003e"),
            '&' => html.push_str("\\u0026"),
            _ => html.push(c),
        }
    }
    html.push_str("\n</script>");
    html
}
