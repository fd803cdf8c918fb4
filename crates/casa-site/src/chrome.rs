#![forbid(unsafe_code)]

//! Pieces shared by several sections and pages: links, the language
//! switcher and action wiring.
//!
//! Interactive elements carry `data-action` (and optionally `data-value`)
//! attributes; the host turns a click on such an element into an action
//! event. Only `navigate` actions suppress the browser's default link
//! behavior.

use casa_content::{NavKey, NavLink};
use casa_i18n::{Language, NavTranslations};
use casa_render::{Element, el};

use crate::context::ViewCtx;

pub const ACTION_LANG: &str = "lang";
pub const ACTION_SELECT: &str = "select";
pub const ACTION_MENU_TOGGLE: &str = "menu-toggle";
pub const ACTION_MENU_CLOSE: &str = "menu-close";
pub const ACTION_FAQ: &str = "faq";
pub const ACTION_NAVIGATE: &str = "navigate";

/// Wire `element` to an action.
#[must_use]
pub fn action(element: Element, name: &str, value: Option<&str>) -> Element {
    element
        .attr("data-action", name)
        .attr_opt("data-value", value)
}

/// Where a configured link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Another site; opens in a new tab.
    External,
    /// A section of the current page (`#about`).
    Anchor,
    /// An in-app route (`/menu`).
    Route,
}

impl LinkKind {
    #[must_use]
    pub fn classify(href: &str) -> Self {
        if href.starts_with("http://") || href.starts_with("https://") {
            Self::External
        } else if href.starts_with('#') {
            Self::Anchor
        } else {
            Self::Route
        }
    }
}

#[must_use]
pub fn nav_label(nav: &NavTranslations, key: NavKey) -> &str {
    match key {
        NavKey::About => &nav.about,
        NavKey::Menu => &nav.menu,
        NavKey::Reservations => &nav.reservations,
        NavKey::Contact => &nav.contact,
    }
}

/// A link in a new tab.
#[must_use]
pub fn external_link(href: &str) -> Element {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

/// An in-app route link: a real `href` under the base path plus a
/// `navigate` action so the host can switch routes without reloading.
#[must_use]
pub fn route_link(ctx: &ViewCtx<'_>, route_path: &str) -> Element {
    action(
        el("a").attr("href", ctx.site.route_href(route_path)),
        ACTION_NAVIGATE,
        Some(route_path),
    )
}

/// A configured navigation link labelled from the bundle.
///
/// Links inside the mobile menu (`closes_menu`) also close it when they
/// do not change the route.
#[must_use]
pub fn nav_link(ctx: &ViewCtx<'_>, link: &NavLink, closes_menu: bool) -> Element {
    let label = nav_label(&ctx.t.nav, link.key);
    let anchor = match LinkKind::classify(&link.href) {
        LinkKind::External => external_link(&link.href),
        LinkKind::Anchor => el("a").attr("href", link.href.as_str()),
        LinkKind::Route => return route_link(ctx, &link.href).text(label),
    };
    let anchor = if closes_menu {
        action(anchor, ACTION_MENU_CLOSE, None)
    } else {
        anchor
    };
    anchor.text(label)
}

/// The he / en toggle. Portuguese has no button.
#[must_use]
pub fn lang_switcher(ctx: &ViewCtx<'_>) -> Element {
    el("div")
        .class("lang-switcher")
        .attr("role", "group")
        .children(Language::SELECTABLE.into_iter().map(|lang| {
            let active = lang == ctx.lang;
            action(
                el("button")
                    .attr("type", "button")
                    .class("lang-btn")
                    .class_if("active", active)
                    .attr("aria-pressed", if active { "true" } else { "false" })
                    .attr("lang", lang.code()),
                ACTION_LANG,
                Some(lang.code()),
            )
            .text(lang.switcher_label())
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_kinds() {
        assert_eq!(LinkKind::classify("https://tabit.example"), LinkKind::External);
        assert_eq!(LinkKind::classify("#contact"), LinkKind::Anchor);
        assert_eq!(LinkKind::classify("/menu"), LinkKind::Route);
    }

    #[test]
    fn action_attributes() {
        let button = action(el("button"), ACTION_FAQ, Some("kosher"));
        assert_eq!(button.get_attr("data-action"), Some("faq"));
        assert_eq!(button.get_attr("data-value"), Some("kosher"));
        let bare = action(el("button"), ACTION_MENU_TOGGLE, None);
        assert_eq!(bare.get_attr("data-value"), None);
    }
}
