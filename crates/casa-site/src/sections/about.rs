#![forbid(unsafe_code)]

//! About section: description, stat counters and the image grid.
//!
//! Each grid image has its own entrance: a directional clip reveal of the
//! tile, a Ken Burns zoom-out and rotation of the image, and a parallax
//! depth while the tile crosses the viewport. The stats block does not
//! animate itself; reaching it raises the counter gate.

use casa_render::{Node, el};
use casa_runtime::Stage;
use casa_runtime::geometry::ScrollPos;
use casa_runtime::motion::{
    Ease, Inset, ParallaxTrack, RevealSpec, ScalarProp, ScopeId, StyleFrame, Tween,
};

use crate::context::ViewCtx;
use crate::sections::fade_up;

pub const SECTION_ID: &str = "about";
pub const DESCRIPTION_ID: &str = "about-description";
pub const STATS_ID: &str = "about-stats";
pub const GRID_ID: &str = "about-grid";

/// Signal raised when the stats block comes into view.
pub const STATS_SIGNAL: &str = "stats";

/// `"top 85%"`
const DESCRIPTION_START: ScrollPos = ScrollPos::new(0.0, 0.85);
/// `"top 80%"`
const STATS_START: ScrollPos = ScrollPos::new(0.0, 0.80);
/// `"top 90%"`
const GRID_START: ScrollPos = ScrollPos::new(0.0, 0.90);

const DESCRIPTION_DELAY: f64 = 0.35;
const CLIP_DURATION: f64 = 1.3;
const ZOOM_DURATION: f64 = 1.8;
const ZOOM_FROM: f64 = 1.45;
const ZOOM_TO: f64 = 1.12;

/// Entrance parameters of one grid tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridReveal {
    /// Clip the tile starts from; the uncovered edge is where it enters.
    pub clip_from: Inset,
    /// Starting rotation of the image, in degrees.
    pub rotation: f64,
    /// Parallax travel, `-depth..depth` percent of the image height.
    pub depth: f64,
    /// Stagger delay in seconds.
    pub delay: f64,
}

/// One entry per tile position; images past the end do not animate.
pub const GRID_REVEALS: [GridReveal; 6] = [
    // from the left
    GridReveal {
        clip_from: Inset::new(0.0, 100.0, 0.0, 0.0),
        rotation: -2.0,
        depth: 6.0,
        delay: 0.0,
    },
    // from above
    GridReveal {
        clip_from: Inset::new(0.0, 0.0, 100.0, 0.0),
        rotation: 1.5,
        depth: 3.0,
        delay: 0.12,
    },
    // from the right
    GridReveal {
        clip_from: Inset::new(0.0, 0.0, 0.0, 100.0),
        rotation: -1.2,
        depth: 5.0,
        delay: 0.08,
    },
    // from below
    GridReveal {
        clip_from: Inset::new(100.0, 0.0, 0.0, 0.0),
        rotation: 1.0,
        depth: 4.0,
        delay: 0.22,
    },
    // from the right
    GridReveal {
        clip_from: Inset::new(0.0, 0.0, 0.0, 100.0),
        rotation: -1.5,
        depth: 7.0,
        delay: 0.18,
    },
    // from the left
    GridReveal {
        clip_from: Inset::new(0.0, 100.0, 0.0, 0.0),
        rotation: 1.2,
        depth: 4.0,
        delay: 0.14,
    },
];

#[must_use]
pub fn grid_item_id(index: usize) -> String {
    format!("about-grid-{index}")
}

#[must_use]
pub fn grid_image_id(index: usize) -> String {
    format!("about-grid-{index}-img")
}

/// Element whose text shows the counter at `index`.
#[must_use]
pub fn stat_value_id(index: usize) -> String {
    format!("stat-{index}")
}

#[must_use]
pub fn format_stat(value: u64, suffix: &str) -> String {
    format!("{value}{suffix}")
}

#[must_use]
pub fn is_empty(ctx: &ViewCtx<'_>) -> bool {
    ctx.t.about.title1.is_empty()
        && ctx.t.about.title2.is_empty()
        && ctx.site.about.portfolio_images.is_empty()
}

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Option<Node> {
    if is_empty(ctx) {
        return None;
    }
    let about = &ctx.t.about;
    let config = &ctx.site.about;

    let intro = el("div")
        .class("about-intro")
        .child(
            el("h2")
                .class("about-title")
                .child(el("span").text(about.title2.as_str())),
        )
        .child(
            el("p")
                .id(DESCRIPTION_ID)
                .class("about-description")
                .text(about.description.as_str()),
        );

    let stats = (!config.stats.is_empty()).then(|| {
        el("div")
            .id(STATS_ID)
            .class("about-stats")
            .children(config.stats.iter().enumerate().map(|(i, stat)| {
                let shown = ctx.ui.stat_values.get(i).copied().unwrap_or(0);
                el("div")
                    .class("stat")
                    .child(
                        el("p")
                            .id(stat_value_id(i))
                            .class("stat-value")
                            .text(format_stat(shown, &stat.suffix)),
                    )
                    .child(el("p").class("stat-label").text(ctx.t.stats.label_at(i)))
            }))
    });

    let grid = el("div")
        .id(GRID_ID)
        .class("about-grid")
        .children(config.portfolio_images.iter().enumerate().map(|(i, image)| {
            let alt = about.portfolio_alts.get(i).map_or("", String::as_str);
            el("div")
                .id(grid_item_id(i))
                .class("grid-item")
                .class_if("grid-item-tall", i == 0 || i == 3)
                .child(
                    el("img")
                        .id(grid_image_id(i))
                        .attr("src", ctx.site.asset_path(image))
                        .attr("alt", alt)
                        .attr("loading", "lazy"),
                )
        }));

    Some(
        el("section")
            .id(SECTION_ID)
            .class("about")
            .child(intro)
            .child_opt(stats)
            .child(grid)
            .into(),
    )
}

pub fn mount(ctx: &ViewCtx<'_>, stage: &mut Stage, scope: ScopeId) {
    stage.reveal(
        scope,
        RevealSpec::animate(
            DESCRIPTION_ID,
            DESCRIPTION_START,
            vec![fade_up(DESCRIPTION_ID, 30.0).delay_secs(DESCRIPTION_DELAY)],
        ),
    );

    if !ctx.site.about.stats.is_empty() {
        stage.reveal(scope, RevealSpec::signal(STATS_ID, STATS_START, STATS_SIGNAL));
    }

    let images = ctx.site.about.portfolio_images.len();
    for (i, cfg) in GRID_REVEALS.iter().enumerate().take(images) {
        let item = grid_item_id(i);
        let image = grid_image_id(i);
        let clip = Tween::new(
            item.as_str(),
            StyleFrame::new().clip(cfg.clip_from),
            StyleFrame::new().clip(Inset::NONE),
        )
        .duration_secs(CLIP_DURATION)
        .delay_secs(cfg.delay)
        .ease(Ease::Power4InOut);
        let zoom = Tween::new(
            image.as_str(),
            StyleFrame::new().scale(ZOOM_FROM).rotate(cfg.rotation),
            StyleFrame::new().scale(ZOOM_TO).rotate(0.0),
        )
        .duration_secs(ZOOM_DURATION)
        .delay_secs(cfg.delay);
        stage.reveal(scope, RevealSpec::animate(item.as_str(), GRID_START, vec![clip, zoom]));
        stage.track(
            scope,
            ParallaxTrack::through_viewport(
                image,
                item,
                ScalarProp::YPercent,
                -cfg.depth,
                cfg.depth,
            ),
        );
    }
}
