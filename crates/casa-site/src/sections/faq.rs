#![forbid(unsafe_code)]

//! Frequently asked questions: a single-open accordion and a booking CTA.

use casa_content::Icon;
use casa_render::{Node, el};
use casa_runtime::motion::{RevealSpec, ScopeId};
use casa_runtime::{Effect, Stage};
use casa_runtime::geometry::ScrollPos;

use crate::chrome::{ACTION_FAQ, action};
use crate::context::ViewCtx;
use crate::icons::svg;
use crate::sections::fade_up;

pub const SECTION_ID: &str = "faq";
pub const HEADER_ID: &str = "faq-header";
pub const LIST_ID: &str = "faq-list";
pub const CTA_ID: &str = "faq-cta";

/// Added to an expanded accordion item.
pub const OPEN_CLASS: &str = "is-open";

/// `"top 85%"`
const HEADER_START: ScrollPos = ScrollPos::new(0.0, 0.85);
/// `"top 80%"`
const LIST_START: ScrollPos = ScrollPos::new(0.0, 0.80);
/// `"top 90%"`
const CTA_START: ScrollPos = ScrollPos::new(0.0, 0.90);

const ITEM_DURATION: f64 = 0.7;
const ITEM_STAGGER: f64 = 0.08;
const CTA_DURATION: f64 = 0.8;

#[must_use]
pub fn item_id(id: &str) -> String {
    format!("faq-item-{id}")
}

#[must_use]
pub fn trigger_id(id: &str) -> String {
    format!("faq-item-{id}-trigger")
}

#[must_use]
pub fn panel_id(id: &str) -> String {
    format!("faq-item-{id}-panel")
}

/// Next open item after a click on `clicked`: the clicked item opens and
/// any other closes; clicking the open item collapses it.
#[must_use]
pub fn toggled(open: Option<&str>, clicked: &str) -> Option<String> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked.to_owned())
    }
}

/// DOM updates that show or hide one item without a re-render.
#[must_use]
pub fn item_effects(id: &str, open: bool) -> [Effect; 3] {
    [
        Effect::Class {
            target: item_id(id),
            class: OPEN_CLASS.to_owned(),
            on: open,
        },
        Effect::Attr {
            target: trigger_id(id),
            name: "aria-expanded".to_owned(),
            value: Some(if open { "true" } else { "false" }.to_owned()),
        },
        Effect::Attr {
            target: panel_id(id),
            name: "hidden".to_owned(),
            value: (!open).then(String::new),
        },
    ]
}

fn has_cta(ctx: &ViewCtx<'_>) -> bool {
    !ctx.t.faq.cta_text.is_empty() || !ctx.t.faq.cta_button_text.is_empty()
}

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    ctx.t.faq.title_regular.is_empty() && ctx.t.faq.faqs.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let faq = &ctx.t.faq;
    let dir = ctx.dir().as_str();
    let open = ctx.ui.open_faq.as_deref();

    let header = el("div")
        .id(HEADER_ID)
        .class("section-header")
        .child_opt(
            (!faq.subtitle.is_empty())
                .then(|| el("p").class("eyebrow").text(faq.subtitle.as_str())),
        )
        .child(
            el("h2")
                .text(faq.title_regular.as_str())
                .text(" ")
                .child(el("span").class("italic").text(faq.title_italic.as_str())),
        );

    let items = faq.faqs.iter().map(|item| {
        let expanded = open == Some(item.id.as_str());
        el("div")
            .id(item_id(&item.id))
            .class("faq-item")
            .class_if(OPEN_CLASS, expanded)
            .attr("data-faq-item", "")
            .child(
                el("h3").child(
                    action(
                        el("button")
                            .id(trigger_id(&item.id))
                            .attr("type", "button")
                            .class("faq-trigger")
                            .attr("aria-expanded", if expanded { "true" } else { "false" })
                            .attr("aria-controls", panel_id(&item.id)),
                        ACTION_FAQ,
                        Some(item.id.as_str()),
                    )
                    .child(el("span").text(item.question.as_str())),
                ),
            )
            .child(
                el("div")
                    .id(panel_id(&item.id))
                    .class("faq-panel")
                    .attr("role", "region")
                    .attr("aria-labelledby", trigger_id(&item.id))
                    .flag("hidden", !expanded)
                    .child(el("p").attr("dir", dir).text(item.answer.as_str())),
            )
    });

    let cta = has_cta(ctx).then(|| {
        el("div")
            .id(CTA_ID)
            .class("faq-cta")
            .child_opt((!faq.cta_text.is_empty()).then(|| el("p").text(faq.cta_text.as_str())))
            .child_opt((!faq.cta_button_text.is_empty()).then(|| {
                el("a")
                    .attr("href", ctx.site.booking_url.as_str())
                    .class("cta-pill")
                    .text(faq.cta_button_text.as_str())
                    .child(svg(Icon::ArrowRight))
            }))
    });

    Some(
        el("section")
            .id(SECTION_ID)
            .class("faq")
            .child(header)
            .child(
                el("div")
                    .id(LIST_ID)
                    .class("accordion")
                    .attr("data-accordion", "single")
                    .children(items),
            )
            .child_opt(cta)
            .into(),
    )
}

pub fn mount(ctx: &ViewCtx<'_>, stage: &mut Stage, scope: ScopeId) {
    stage.reveal(
        scope,
        RevealSpec::animate(HEADER_ID, HEADER_START, vec![fade_up(HEADER_ID, 60.0)]),
    );

    let faqs = &ctx.t.faq.faqs;
    if !faqs.is_empty() {
        let tweens = faqs
            .iter()
            .enumerate()
            .map(|(i, item)| {
                fade_up(&item_id(&item.id), 40.0)
                    .duration_secs(ITEM_DURATION)
                    .delay_secs(i as f64 * ITEM_STAGGER)
            })
            .collect();
        stage.reveal(scope, RevealSpec::animate(LIST_ID, LIST_START, tweens));
    }

    if has_cta(ctx) {
        stage.reveal(
            scope,
            RevealSpec::animate(
                CTA_ID,
                CTA_START,
                vec![fade_up(CTA_ID, 30.0).duration_secs(CTA_DURATION)],
            ),
        );
    }
}
