#![forbid(unsafe_code)]

//! Inline SVG markup for the site's icon set.

use casa_content::Icon;
use casa_render::{Element, Node, el};

/// How an icon's shapes are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Stroke,
    Fill,
}

fn glyph(icon: Icon) -> (Paint, &'static str) {
    match icon {
        Icon::Flame => (
            Paint::Stroke,
            r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14-.22-4.05 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
        ),
        Icon::Beef => (
            Paint::Stroke,
            r#"<circle cx="12.5" cy="8.5" r="2.5"/><path d="M12.5 2a6.5 6.5 0 0 0-6.22 4.6c-1.1 3.13-.78 3.9-3.18 6.08A3 3 0 0 0 5 18c4 0 8.4-1.8 11.4-4.3A6.5 6.5 0 0 0 12.5 2Z"/><path d="m18.5 6 2.19 4.5a6.48 6.48 0 0 1 .31 2 6.49 6.49 0 0 1-2.6 5.2C15.4 20.2 11 22 7 22a3 3 0 0 1-2.68-1.66L2.4 16.5"/>"#,
        ),
        Icon::Salad => (
            Paint::Stroke,
            r#"<path d="M7 21h10"/><path d="M12 21a9 9 0 0 0 9-9H3a9 9 0 0 0 9 9Z"/><path d="M11.38 12a2.4 2.4 0 0 1-.4-4.77 2.4 2.4 0 0 1 3.2-2.77 2.4 2.4 0 0 1 3.47-.63 2.4 2.4 0 0 1 3.37 3.37 2.4 2.4 0 0 1-1.1 3.7 2.51 2.51 0 0 1 .03 1.1"/><path d="m13 12 4-4"/>"#,
        ),
        Icon::Wine => (
            Paint::Stroke,
            r#"<path d="M8 22h8"/><path d="M7 10h10"/><path d="M12 15v7"/><path d="M12 15a5 5 0 0 0 5-5c0-2-.5-4-2-8H9c-1.5 4-2 6-2 8a5 5 0 0 0 5 5Z"/>"#,
        ),
        Icon::Instagram => (
            Paint::Stroke,
            r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
        ),
        Icon::Facebook => (
            Paint::Stroke,
            r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
        ),
        Icon::Twitter => (
            Paint::Stroke,
            r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
        ),
        Icon::TikTok => (
            Paint::Fill,
            r#"<path d="M19.59 6.69a4.83 4.83 0 0 1-3.77-4.25V2h-3.45v13.67a2.89 2.89 0 0 1-5.2 1.74 2.89 2.89 0 0 1 2.31-4.64 2.93 2.93 0 0 1 .88.13V9.4a6.84 6.84 0 0 0-1-.05A6.33 6.33 0 0 0 5 20.1a6.34 6.34 0 0 0 10.86-4.43v-7a8.16 8.16 0 0 0 4.77 1.52v-3.4a4.85 4.85 0 0 1-1-.1z"/>"#,
        ),
        Icon::Phone => (
            Paint::Stroke,
            r#"<path d="M3 5a2 2 0 012-2h3.28a1 1 0 01.95.68l1.5 4.5a1 1 0 01-.5 1.2l-2.26 1.13a11.04 11.04 0 005.52 5.52l1.13-2.26a1 1 0 011.21-.5l4.49 1.5a1 1 0 01.68.95V19a2 2 0 01-2 2h-1C9.72 21 3 14.28 3 6V5z"/>"#,
        ),
        Icon::Calendar => (
            Paint::Stroke,
            r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
        ),
        Icon::Quote => (
            Paint::Stroke,
            r#"<path d="M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1z"/><path d="M15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"/>"#,
        ),
        Icon::Star => (
            Paint::Stroke,
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        ),
        Icon::Menu => (Paint::Stroke, r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#),
        Icon::ArrowDown => (Paint::Stroke, r#"<path d="M19 14l-7 7m0 0l-7-7m7 7V3"/>"#),
        Icon::ArrowRight => (Paint::Stroke, r#"<path d="M17 8l4 4m0 0l-4 4m4-4H3"/>"#),
    }
}

/// Decorative inline SVG for `icon`, hidden from assistive technology.
#[must_use]
pub fn svg(icon: Icon) -> Element {
    let (paint, shapes) = glyph(icon);
    let base = el("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 24 24")
        .attr("aria-hidden", "true")
        .class("icon")
        .class(&format!("icon-{}", icon.name().to_ascii_lowercase()));
    let painted = match paint {
        Paint::Fill => base.attr("fill", "currentColor"),
        Paint::Stroke => base
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "1.5")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round"),
    };
    painted.child(Node::raw(shapes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_render::render;

    #[test]
    fn every_icon_has_shapes() {
        for icon in Icon::ALL {
            let html = render(&svg(icon).into());
            assert!(html.starts_with("<svg"), "{icon:?}");
            assert!(html.contains("viewBox=\"0 0 24 24\""), "{icon:?}");
            assert!(html.contains("<path") || html.contains("<polygon") || html.contains("<rect"));
        }
    }

    #[test]
    fn tiktok_is_filled() {
        let node: Node = svg(Icon::TikTok).into();
        let element = node.as_element().unwrap();
        assert_eq!(element.get_attr("fill"), Some("currentColor"));
        assert!(element.has_class("icon-tiktok"));
    }
}
