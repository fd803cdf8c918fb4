#![forbid(unsafe_code)]

//! Home-page sections.
//!
//! Each section module exposes three functions:
//!
//! - `is_empty(ctx)`: the section has no backing content and is skipped;
//! - `render(ctx)`: the section's markup, `None` when empty;
//! - `mount(ctx, stage, scope)`: registers the section's reveal targets
//!   and scroll tracks in a scope opened for it.
//!
//! Element ids used as reveal triggers and targets are declared as
//! constants next to the markup that carries them.

pub mod about;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod menu_teaser;
pub mod testimonials;

use casa_render::Node;
use casa_runtime::Stage;
use casa_runtime::motion::{ScopeId, StyleFrame, Tween};
use tracing::debug;

use crate::context::ViewCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    MenuTeaser,
    Testimonials,
    Faq,
    Footer,
}

impl SectionId {
    /// Home-page order.
    pub const HOME: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::MenuTeaser,
        Self::Testimonials,
        Self::Faq,
        Self::Footer,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::MenuTeaser => "menu-teaser",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::Footer => "footer",
        }
    }

    #[must_use]
    pub fn is_empty(self, ctx: &ViewCtx<'_>) -> bool {
        match self {
            Self::Hero => hero::is_empty(ctx),
            Self::About => about::is_empty(ctx),
            Self::MenuTeaser => menu_teaser::is_empty(ctx),
            Self::Testimonials => testimonials::is_empty(ctx),
            Self::Faq => faq::is_empty(ctx),
            Self::Footer => footer::is_empty(ctx),
        }
    }

    #[must_use]
    pub fn render(self, ctx: &ViewCtx<'_>) -> Option<Node> {
        match self {
            Self::Hero => hero::render(ctx),
            Self::About => about::render(ctx),
            Self::MenuTeaser => menu_teaser::render(ctx),
            Self::Testimonials => testimonials::render(ctx),
            Self::Faq => faq::render(ctx),
            Self::Footer => footer::render(ctx),
        }
    }

    /// Open a scope for the section and register its motion. Empty
    /// sections get no scope.
    pub fn mount(self, ctx: &ViewCtx<'_>, stage: &mut Stage) -> Option<ScopeId> {
        if self.is_empty(ctx) {
            debug!(section = self.name(), "empty section not mounted");
            return None;
        }
        let scope = stage.open_scope(self.name());
        match self {
            Self::Hero => hero::mount(ctx, stage, scope),
            Self::About => about::mount(ctx, stage, scope),
            Self::MenuTeaser => {}
            Self::Testimonials => testimonials::mount(ctx, stage, scope),
            Self::Faq => faq::mount(ctx, stage, scope),
            Self::Footer => footer::mount(ctx, stage, scope),
        }
        Some(scope)
    }
}

/// Slide up by `y` pixels while fading in, over one second.
pub(crate) fn fade_up(target: &str, y: f64) -> Tween {
    Tween::new(
        target,
        StyleFrame::new().y(y).opacity(0.0),
        StyleFrame::new().y(0.0).opacity(1.0),
    )
}
