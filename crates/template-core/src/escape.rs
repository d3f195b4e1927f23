//! Escapers applied to substituted values, one per output format.
//!
//! Each escaper borrows its input when nothing needs to change.

use std::borrow::Cow;

/// Leaves the value untouched. Used where the output format places text
/// literally (PDF content streams).
pub fn identity(value: &str) -> Cow<'_, str> {
    Cow::Borrowed(value)
}

/// Escapes the five HTML-significant characters.
///
/// `&` becomes `&amp;` and is never applied to the entities produced for the
/// other characters, so values are not double-escaped.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Reverses [`escape_html`].
pub fn unescape_html(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    // `&amp;` last, so "&amp;lt;" decodes to "&lt;" rather than "<".
    Cow::Owned(
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&"),
    )
}

/// RFC 4180 quoting: values containing a comma, double quote, CR or LF are
/// wrapped in double quotes with embedded quotes doubled.
pub fn escape_csv(value: &str) -> Cow<'_, str> {
    if !value.contains([',', '"', '\n', '\r']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
}
