//! Serializer properties over arbitrary text.

use casa_render::{Node, el, escape_attr, escape_text, render};
use proptest::prelude::*;

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escaped_text_has_no_markup(s in ".*") {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn escaped_attr_never_closes_the_quote(s in ".*") {
        let escaped = escape_attr(&s);
        prop_assert!(!escaped.contains('"'));
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn text_node_renders_inside_its_element(s in "[^<>&]*") {
        let tree: Node = el("p").text(s.clone()).into();
        prop_assert_eq!(render(&tree), format!("<p>{s}</p>"));
    }
}
