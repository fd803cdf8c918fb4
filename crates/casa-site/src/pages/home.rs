#![forbid(unsafe_code)]

//! Home page: the six sections in fixed order.

use casa_render::{Node, el};
use casa_runtime::Stage;
use casa_runtime::motion::ScopeId;

use crate::context::ViewCtx;
use crate::sections::SectionId;

pub const PAGE_ID: &str = "home";

#[must_use]
pub fn render(ctx: &ViewCtx<'_>) -> Node {
    el("main")
        .id(PAGE_ID)
        .class("home")
        .attr("dir", ctx.dir().as_str())
        .children(SectionId::HOME.into_iter().filter_map(|section| section.render(ctx)))
        .into()
}

/// Mount every non-empty section, returning the scopes opened.
pub fn mount(ctx: &ViewCtx<'_>, stage: &mut Stage) -> Vec<ScopeId> {
    SectionId::HOME
        .into_iter()
        .filter_map(|section| section.mount(ctx, stage))
        .collect()
}
