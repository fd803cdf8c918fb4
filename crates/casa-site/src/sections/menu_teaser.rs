#![forbid(unsafe_code)]

//! Menu teaser: heading column plus service cards, all linking to the
//! full menu. Icons sit on the side opposite the text direction.

use casa_content::{Icon, IconContext};
use casa_render::{Node, el};

use crate::chrome::route_link;
use crate::context::ViewCtx;
use crate::icons::svg;
use crate::route::Route;

pub const SECTION_ID: &str = "menu";

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    ctx.t.menu.title_line1.is_empty() && ctx.t.menu.services.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let menu = &ctx.t.menu;
    let text_dir = ctx.dir();
    let icon_dir = text_dir.flipped();
    let menu_path = Route::Menu.path();

    let heading = el("div")
        .class("menu-heading")
        .attr("dir", text_dir.as_str())
        .child(el("p").class("eyebrow").text(menu.title.as_str()))
        .child(
            el("h2")
                .text(menu.title_line1.as_str())
                .child(el("br"))
                .child(el("span").class("italic").text(menu.title_line2_italic.as_str())),
        )
        .child(el("p").class("menu-description").text(menu.description.as_str()))
        .child(
            route_link(ctx, menu_path)
                .class("cta-button")
                .text(menu.view_full_menu.as_str()),
        );

    let cards = el("div")
        .class("service-grid")
        .children(menu.services.iter().map(|service| {
            route_link(ctx, menu_path)
                .class("service-card")
                .attr("dir", text_dir.as_str())
                .child(
                    el("div")
                        .class("service-icon")
                        .attr("dir", icon_dir.as_str())
                        .child(svg(Icon::lookup(&service.icon_name, IconContext::Service))),
                )
                .child(
                    el("div")
                        .child(el("h3").text(service.title.as_str()))
                        .child(el("p").text(service.description.as_str())),
                )
        }));

    Some(
        el("section")
            .id(SECTION_ID)
            .class("menu-teaser")
            .attr("dir", text_dir.as_str())
            .attr("data-rtl", if ctx.is_rtl() { "true" } else { "false" })
            .child(heading)
            .child(cards)
            .into(),
    )
}
