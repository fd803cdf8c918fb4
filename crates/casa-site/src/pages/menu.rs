#![forbid(unsafe_code)]

//! Full-menu page: category tabs and the selected category's contents.
//!
//! A category lists either flat items or named sub-sections. A
//! sub-section flagged `grid` with exactly two items is shown as a
//! side-by-side comparison joined by an "or" badge, with a per-diner
//! suffix on the prices; every other sub-section is a plain list.

use casa_content::{CategoryBody, MenuCategory, MenuItem, MenuSubSection, PriceLabel};
use casa_i18n::FullMenuTranslations;
use casa_render::{Element, Node, el};

use crate::chrome::{ACTION_SELECT, action, external_link, lang_switcher, route_link};
use crate::context::ViewCtx;

pub const PAGE_ID: &str = "menu-page";
pub const TABLIST_ID: &str = "menu-categories";
pub const PANEL_ID: &str = "menu-panel";

#[must_use]
pub fn tab_id(category_id: &str) -> String {
    format!("tab-{category_id}")
}

/// Display text for an item's price; the sentinels are translated.
#[must_use]
pub fn price_text<'a>(item: &'a MenuItem, labels: &'a FullMenuTranslations) -> &'a str {
    match item.price_label() {
        PriceLabel::PerItem => &labels.price_per_item,
        PriceLabel::PerWeight => &labels.price_per_weight,
        PriceLabel::Amount(amount) => amount,
    }
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Node {
    let selected = ctx.menu.select(&ctx.ui.selected_category);
    let labels = &ctx.t.full_menu;

    let panel = el("div")
        .id(PANEL_ID)
        .class("menu-panel")
        .attr("role", "tabpanel")
        .attr("aria-labelledby", tab_id(&selected.id))
        .child(el("h2").class("menu-section-title").text(labels.section_title.as_str()))
        .child(el("h3").class("menu-category-name").text(selected.name(ctx.lang)))
        .child(category_body(ctx, selected));

    el("div")
        .id(PAGE_ID)
        .class("menu-page")
        .attr("dir", ctx.dir().as_str())
        .child(header(ctx))
        .child(
            el("div")
                .class("menu-body")
                .child(tabs(ctx, selected))
                .child(panel),
        )
        .child(
            el("div")
                .class("menu-note")
                .child(el("p").text(labels.meat_note.as_str())),
        )
        .into()
}

fn header(ctx: &ViewCtx<'_>) -> Element {
    let labels = &ctx.t.full_menu;
    el("header")
        .class("menu-header")
        .child(
            route_link(ctx, "/")
                .class("menu-brand")
                .child(el("span").text(ctx.site.footer.logo_text.as_str())),
        )
        .child(
            el("div")
                .class("menu-header-actions")
                .child(
                    external_link(&ctx.site.booking_url)
                        .class("book-button")
                        .text(labels.book_table.as_str()),
                )
                .child(
                    route_link(ctx, "/")
                        .class("back-link")
                        .text(labels.back.as_str()),
                )
                .child(lang_switcher(ctx)),
        )
}

fn tabs(ctx: &ViewCtx<'_>, selected: &MenuCategory) -> Element {
    el("div")
        .id(TABLIST_ID)
        .class("category-tabs")
        .attr("role", "tablist")
        .attr("aria-label", ctx.t.full_menu.categories_label.as_str())
        .children(ctx.menu.categories().iter().map(|category| {
            let is_selected = category.id == selected.id;
            let name = category.name(ctx.lang);
            action(
                el("button")
                    .id(tab_id(&category.id))
                    .attr("type", "button")
                    .attr("role", "tab")
                    .attr("aria-selected", if is_selected { "true" } else { "false" })
                    .attr("aria-controls", PANEL_ID)
                    .attr("aria-label", name)
                    .class("category-tab")
                    .class_if("selected", is_selected),
                ACTION_SELECT,
                Some(category.id.as_str()),
            )
            .child(
                el("img")
                    .attr("src", ctx.site.asset_path(&category.image))
                    .attr("alt", name),
            )
            .child(el("span").class("category-tab-label").text(name))
        }))
}

fn category_body(ctx: &ViewCtx<'_>, category: &MenuCategory) -> Element {
    match &category.body {
        CategoryBody::Items(items) => el("div")
            .class("menu-items")
            .children(items.iter().map(|item| list_item(ctx, item, "h4"))),
        CategoryBody::SubSections(sections) => el("div")
            .class("menu-subsections")
            .children(sections.iter().map(|section| sub_section(ctx, section))),
    }
}

fn sub_section(ctx: &ViewCtx<'_>, section: &MenuSubSection) -> Element {
    let lang = ctx.lang;
    let body = match section.items.as_slice() {
        [left, right] if section.is_comparison() => comparison(ctx, left, right),
        items => el("div")
            .class("menu-items")
            .children(items.iter().map(|item| list_item(ctx, item, "h5"))),
    };
    el("div")
        .class("menu-subsection")
        .child(el("h4").text(section.title(lang)))
        .child_opt(
            section
                .description(lang)
                .map(|text| el("p").class("subsection-description").text(text)),
        )
        .child_opt(
            section
                .cta_text(lang)
                .map(|text| el("p").class("subsection-cta").text(text)),
        )
        .child(body)
}

fn comparison(ctx: &ViewCtx<'_>, left: &MenuItem, right: &MenuItem) -> Element {
    el("div")
        .class("menu-comparison")
        .child(comparison_card(ctx, left))
        .child(
            el("div")
                .class("comparison-or")
                .child(el("span").text(ctx.t.full_menu.or.as_str())),
        )
        .child(comparison_card(ctx, right))
}

fn comparison_card(ctx: &ViewCtx<'_>, item: &MenuItem) -> Element {
    let lang = ctx.lang;
    let labels = &ctx.t.full_menu;
    let details = item.details(lang);
    el("div")
        .class("comparison-card")
        .child(el("h5").text(item.name(lang)))
        .child_opt(item.subtitle(lang).map(|text| el("p").class("item-subtitle").text(text)))
        .child(
            el("p")
                .class("item-price")
                .text(format!("{} {}", price_text(item, labels), labels.per_diner)),
        )
        .child_opt((!details.is_empty()).then(|| {
            el("ul")
                .class("item-details")
                .children(details.iter().map(|d| el("li").text(d.as_str())))
        }))
}

fn list_item(ctx: &ViewCtx<'_>, item: &MenuItem, heading: &'static str) -> Element {
    let lang = ctx.lang;
    el("div")
        .class("menu-item")
        .child(
            el("div")
                .class("item-text")
                .child(el(heading).class("item-name").text(item.name(lang)))
                .child_opt(
                    item.description(lang)
                        .map(|text| el("p").class("item-description").text(text)),
                ),
        )
        .child(
            el("span")
                .class("item-price")
                .text(price_text(item, &ctx.t.full_menu)),
        )
}
