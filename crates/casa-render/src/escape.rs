#![forbid(unsafe_code)]

//! HTML escaping.
//!
//! # Performance
//!
//! - **Fast path**: scan for the special bytes with memchr. Menu and
//!   translation text rarely contains any, so the input is returned
//!   borrowed with no allocation.
//! - **Slow path**: allocate once and substitute entities. Linear in
//!   input size.
//!
//! ```
//! use casa_render::escape::escape_text;
//! use std::borrow::Cow;
//!
//! assert!(matches!(escape_text("פיקאניה"), Cow::Borrowed(_)));
//! assert_eq!(escape_text("salt & pepper"), "salt &amp; pepper");
//! ```

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Escape text content (`&`, `<`, `>`).
#[inline]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if memchr3(b'&', b'<', b'>', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(escape_slow(input, false))
}

/// Escape a double-quoted attribute value (`&`, `<`, `>`, `"`).
#[inline]
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    if memchr3(b'&', b'<', b'>', bytes).is_none() && memchr(b'"', bytes).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(escape_slow(input, true))
}

fn escape_slow(input: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_text("Casa do Brasil"), Cow::Borrowed(_)));
        assert!(matches!(escape_attr("/menu"), Cow::Borrowed(_)));
    }

    #[test]
    fn text_keeps_quotes() {
        assert_eq!(escape_text(r#"המבורגר "קאזה""#), r#"המבורגר "קאזה""#);
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"a "b" <c>"#), "a &quot;b&quot; &lt;c&gt;");
    }

    #[test]
    fn ampersand_in_url() {
        assert_eq!(
            escape_attr("create-reservation?step=search&orgId=1"),
            "create-reservation?step=search&amp;orgId=1"
        );
    }
}
