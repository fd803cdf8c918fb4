#![forbid(unsafe_code)]

//! Guest testimonials in a looping carousel.
//!
//! The carousel itself is enhanced by the host; the markup carries the
//! item list three times so the loop never runs out of slides. Because a
//! language change alters card widths, the model asks the host to re-lay
//! the carousel out after switching.

use casa_content::Icon;
use casa_render::{Element, Node, el};
use casa_runtime::Stage;
use casa_runtime::geometry::ScrollPos;
use casa_runtime::motion::{RevealSpec, ScopeId};

use crate::context::ViewCtx;
use crate::icons::svg;
use crate::sections::fade_up;

pub const SECTION_ID: &str = "testimonials";
pub const HEADER_ID: &str = "testimonials-header";
pub const CAROUSEL_ID: &str = "testimonials-carousel";

/// How many times the item list is repeated in the carousel track.
pub const LOOP_COPIES: usize = 3;
const AUTOPLAY_MS: u32 = 4500;

/// `"top 85%"`
const START: ScrollPos = ScrollPos::new(0.0, 0.85);
const CAROUSEL_DELAY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

impl StarFill {
    const fn class(self) -> &'static str {
        match self {
            Self::Full => "star-full",
            Self::Half => "star-half",
            Self::Empty => "star-empty",
        }
    }
}

/// Fill of each of the five stars for `rating`.
#[must_use]
pub fn star_fills(rating: f32) -> [StarFill; 5] {
    std::array::from_fn(|i| {
        let position = (i + 1) as f32;
        if position <= rating {
            StarFill::Full
        } else if position - 1.0 < rating {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    })
}

fn star_rating(rating: f32) -> Element {
    el("div")
        .class("star-rating")
        .attr("role", "img")
        .attr("aria-label", format!("{rating}/5"))
        .children(star_fills(rating).into_iter().map(|fill| {
            el("span").class("star").class(fill.class()).child(svg(Icon::Star))
        }))
}

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    ctx.t.testimonials.title_regular.is_empty() && ctx.t.testimonials.items.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let section = &ctx.t.testimonials;
    let dir = ctx.dir().as_str();

    let header = el("div")
        .id(HEADER_ID)
        .class("section-header")
        .child_opt(
            (!section.subtitle.is_empty())
                .then(|| el("p").class("eyebrow").text(section.subtitle.as_str())),
        )
        .child(
            el("h2")
                .text(section.title_regular.as_str())
                .text(" ")
                .child(el("span").class("italic").text(section.title_italic.as_str())),
        );

    let slides = std::iter::repeat_n(&section.items, LOOP_COPIES)
        .flatten()
        .enumerate()
        .map(|(idx, item)| {
            el("li")
                .class("carousel-slide")
                .attr("data-key", format!("{}-{idx}", item.id))
                .child(
                    el("figure")
                        .class("testimonial-card")
                        .attr("data-testimonial-card", "")
                        .attr("dir", dir)
                        .child(svg(Icon::Quote))
                        .child(
                            el("blockquote").child(
                                el("p")
                                    .attr("dir", dir)
                                    .text(format!("\u{201c}{}\u{201d}", item.quote)),
                            ),
                        )
                        .child(
                            el("figcaption")
                                .class("testimonial-author")
                                .child(star_rating(item.rating))
                                .child(
                                    el("div")
                                        .child(
                                            el("p").class("author-name").text(item.name.as_str()),
                                        )
                                        .child(
                                            el("p").class("author-role").text(item.role.as_str()),
                                        ),
                                ),
                        ),
                )
        });

    let carousel = el("div")
        .id(CAROUSEL_ID)
        .class("carousel")
        .attr("data-carousel", "loop")
        .attr("data-autoplay-ms", AUTOPLAY_MS.to_string())
        .child(el("ul").class("carousel-track").children(slides));

    Some(
        el("section")
            .id(SECTION_ID)
            .class("testimonials")
            .child(header)
            .child(carousel)
            .into(),
    )
}

pub fn mount(_ctx: &ViewCtx<'_>, stage: &mut Stage, scope: ScopeId) {
    stage.reveal(
        scope,
        RevealSpec::animate(HEADER_ID, START, vec![fade_up(HEADER_ID, 60.0)]),
    );
    stage.reveal(
        scope,
        RevealSpec::animate(
            CAROUSEL_ID,
            START,
            vec![fade_up(CAROUSEL_ID, 40.0).delay_secs(CAROUSEL_DELAY)],
        ),
    );
}
