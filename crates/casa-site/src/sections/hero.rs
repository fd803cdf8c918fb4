#![forbid(unsafe_code)]

//! Full-height opening section with the fixed navigation bar.
//!
//! While the section scrolls away its content drifts down (`yPercent`
//! 0 → 20 between `"top top"` and `"bottom top"`) and the background
//! word fades out over the first 30% of the section.

use casa_content::Icon;
use casa_render::{Element, Node, el};
use casa_runtime::Stage;
use casa_runtime::geometry::ScrollPos;
use casa_runtime::motion::{ParallaxTrack, ScalarProp, ScopeId};

use crate::chrome::{
    ACTION_MENU_TOGGLE, action, external_link, lang_switcher, nav_link, route_link,
};
use crate::context::ViewCtx;
use crate::icons::svg;

pub const SECTION_ID: &str = "hero";
pub const CONTENT_ID: &str = "hero-content";
pub const OVERLAY_ID: &str = "hero-overlay";
pub const NAV_ID: &str = "site-nav";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

/// Added to the navigation bar once the page has scrolled.
pub const SCROLLED_CLASS: &str = "is-scrolled";
/// Added to the mobile menu while it is open.
pub const OPEN_CLASS: &str = "is-open";

const TOP_TOP: ScrollPos = ScrollPos::new(0.0, 0.0);
const BOTTOM_TOP: ScrollPos = ScrollPos::new(1.0, 0.0);
const OVERLAY_END: ScrollPos = ScrollPos::new(0.3, 0.0);

const DRIFT_PERCENT: f64 = 20.0;

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    let hero = &ctx.site.hero;
    hero.background_text.is_empty() && hero.image.is_empty() && hero.nav_links.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let site = ctx.site;
    let hero = &site.hero;
    let t = &ctx.t.hero;

    let backdrop = el("div").class("hero-backdrop").child_opt(
        (!hero.image.is_empty()).then(|| {
            el("img")
                .attr("src", site.asset_path(&hero.image))
                .attr("alt", t.image_alt.as_str())
                .class("hero-image")
        }),
    );

    let overlay = (!hero.background_text.is_empty()).then(|| {
        el("div")
            .id(OVERLAY_ID)
            .class("hero-background-text")
            .attr("aria-hidden", "true")
            .text(hero.background_text.as_str())
    });

    let ctas = el("div")
        .class("hero-ctas")
        .child(
            external_link(&site.booking_url)
                .class("cta-button")
                .child(svg(Icon::Calendar))
                .text(t.cta.as_str()),
        )
        .child(
            el("a")
                .attr("href", site.tel_uri())
                .class("hero-phone")
                .attr("aria-label", ctx.t.phone.as_str())
                .child(svg(Icon::Phone))
                .text(site.phone.as_str()),
        );

    let content = el("div")
        .id(CONTENT_ID)
        .class("hero-content")
        .child(
            el("img")
                .attr("src", site.asset_path(&hero.logo))
                .attr("alt", hero.brand_name.as_str())
                .class("hero-logo"),
        )
        .child(el("p").class("hero-subtitle").text(t.subtitle.as_str()))
        .child(ctas);

    Some(
        el("section")
            .id(SECTION_ID)
            .class("hero")
            .child(backdrop)
            .child_opt(overlay)
            .child(content)
            .child(navigation(ctx))
            .child(
                el("div")
                    .class("scroll-indicator")
                    .child(svg(Icon::ArrowDown)),
            )
            .into(),
    )
}

fn navigation(ctx: &ViewCtx<'_>) -> Element {
    let site = ctx.site;
    let open = ctx.ui.mobile_menu_open;

    let brand = route_link(ctx, "/").class("nav-brand").child(
        el("img")
            .attr("src", site.asset_path(&site.hero.logo))
            .attr("alt", site.hero.brand_name.as_str()),
    );

    let desktop_links = el("div")
        .class("nav-links")
        .children(site.hero.nav_links.iter().map(|link| nav_link(ctx, link, false)));

    let toggle = action(
        el("button")
            .id(MENU_TOGGLE_ID)
            .attr("type", "button")
            .class("menu-toggle")
            .attr("aria-controls", MOBILE_MENU_ID)
            .attr("aria-expanded", if open { "true" } else { "false" })
            .attr("aria-label", ctx.t.nav.menu.as_str()),
        ACTION_MENU_TOGGLE,
        None,
    )
    .child(svg(Icon::Menu));

    let mobile = el("div")
        .id(MOBILE_MENU_ID)
        .class("mobile-menu")
        .class_if(OPEN_CLASS, open)
        .flag("hidden", !open)
        .children(site.hero.nav_links.iter().map(|link| nav_link(ctx, link, true)))
        .child(lang_switcher(ctx));

    el("nav")
        .id(NAV_ID)
        .class("site-nav")
        .class_if(SCROLLED_CLASS, ctx.ui.nav_scrolled)
        .child(brand)
        .child(desktop_links)
        .child(
            el("div")
                .class("nav-actions")
                .child(lang_switcher(ctx))
                .child(toggle),
        )
        .child(mobile)
}

pub fn mount(ctx: &ViewCtx<'_>, stage: &mut Stage, scope: ScopeId) {
    stage.track(
        scope,
        ParallaxTrack::through_viewport(
            CONTENT_ID,
            SECTION_ID,
            ScalarProp::YPercent,
            0.0,
            DRIFT_PERCENT,
        )
        .with_range(TOP_TOP, BOTTOM_TOP),
    );
    if !ctx.site.hero.background_text.is_empty() {
        stage.track(
            scope,
            ParallaxTrack::through_viewport(OVERLAY_ID, SECTION_ID, ScalarProp::Opacity, 1.0, 0.0)
                .with_range(TOP_TOP, OVERLAY_END),
        );
    }
}
