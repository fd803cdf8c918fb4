#![forbid(unsafe_code)]

//! Footer: oversized wordmark, contact details, navigation and socials.

use casa_content::Icon;
use casa_render::{Node, el};
use casa_runtime::Stage;
use casa_runtime::geometry::ScrollPos;
use casa_runtime::motion::{RevealSpec, ScopeId, StyleFrame, Tween};

use crate::chrome::{external_link, nav_link};
use crate::context::ViewCtx;
use crate::icons::svg;
use crate::sections::fade_up;

pub const SECTION_ID: &str = "contact";
pub const LOGO_ID: &str = "footer-logo";
pub const CONTENT_ID: &str = "footer-content";

/// `"top 88%"`
const START: ScrollPos = ScrollPos::new(0.0, 0.88);
const LOGO_DURATION: f64 = 1.2;
const CONTENT_DELAY: f64 = 0.3;

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    let footer = &ctx.site.footer;
    footer.logo_text.is_empty() && ctx.site.email.is_empty() && footer.nav_links.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let site = ctx.site;
    let footer = &site.footer;
    let t = ctx.t;

    let logo = (!footer.logo_text.is_empty()).then(|| {
        el("div").id(LOGO_ID).class("footer-logo").child(
            el("svg")
                .attr("viewBox", "0 0 1000 100")
                .attr("preserveAspectRatio", "xMidYMid meet")
                .attr("role", "img")
                .attr("aria-label", footer.logo_text.as_str())
                .child(
                    el("text")
                        .attr("x", "50%")
                        .attr("y", "50%")
                        .attr("dominant-baseline", "middle")
                        .attr("text-anchor", "middle")
                        .attr("textLength", "900")
                        .attr("lengthAdjust", "spacingAndGlyphs")
                        .text(footer.logo_text.as_str()),
                ),
        )
    });

    let contact = el("div")
        .class("footer-contact")
        .child(el("p").class("eyebrow").text(t.contact.title.as_str()))
        .child_opt((!site.email.is_empty()).then(|| {
            el("a")
                .attr("href", site.mailto_uri())
                .class("footer-email")
                .text(site.email.as_str())
        }))
        .child(el("p").class("footer-address").text(t.contact.address.as_str()))
        .child(el("p").class("footer-hours").text(t.contact.hours.as_str()))
        .child(
            el("a")
                .attr("href", site.tel_uri())
                .class("footer-phone")
                .child(svg(Icon::Phone))
                .text(site.phone.as_str()),
        );

    let navigation = (!footer.nav_links.is_empty()).then(|| {
        el("div")
            .class("footer-nav")
            .child(el("p").class("eyebrow").text(t.footer.navigation_label.as_str()))
            .child(
                el("nav").children(
                    footer
                        .nav_links
                        .iter()
                        .map(|link| nav_link(ctx, link, false).class("block")),
                ),
            )
    });

    let social = el("div")
        .class("footer-social")
        .child(el("p").class("eyebrow").text(t.footer.social_label.as_str()))
        .child_opt((!footer.social_links.is_empty()).then(|| {
            el("div")
                .class("social-links")
                .attr("dir", "ltr")
                .children(footer.social_links.iter().map(|social| {
                    external_link(&social.href)
                        .attr("aria-label", social.label.as_str())
                        .class("social-link")
                        .child(svg(social.icon()))
                }))
        }))
        .child(el("p").class("footer-tagline").text(t.footer.tagline.as_str()));

    let content = el("div")
        .id(CONTENT_ID)
        .class("footer-content")
        .child(
            el("div")
                .class("footer-columns")
                .child(contact)
                .child_opt(navigation)
                .child(social),
        )
        .child(
            el("div")
                .class("footer-bottom")
                .child(el("p").text(t.footer.copyright.as_str()))
                .child(
                    el("a")
                        .attr("href", "#")
                        .text(t.footer.accessibility_statement.as_str()),
                ),
        );

    Some(
        el("footer")
            .id(SECTION_ID)
            .class("site-footer")
            .child_opt(logo)
            .child(content)
            .into(),
    )
}

pub fn mount(ctx: &ViewCtx<'_>, stage: &mut Stage, scope: ScopeId) {
    if !ctx.site.footer.logo_text.is_empty() {
        let logo = Tween::new(
            LOGO_ID,
            StyleFrame::new().y(80.0).opacity(0.0).scale(0.9),
            StyleFrame::new().y(0.0).opacity(1.0).scale(1.0),
        )
        .duration_secs(LOGO_DURATION);
        stage.reveal(scope, RevealSpec::animate(LOGO_ID, START, vec![logo]));
    }
    stage.reveal(
        scope,
        RevealSpec::animate(
            CONTENT_ID,
            START,
            vec![fade_up(CONTENT_ID, 40.0).delay_secs(CONTENT_DELAY)],
        ),
    );
}
