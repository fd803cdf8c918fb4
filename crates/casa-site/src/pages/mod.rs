#![forbid(unsafe_code)]

//! Route-level pages.

pub mod home;
pub mod menu;

use casa_render::Node;
use casa_runtime::Stage;
use casa_runtime::motion::ScopeId;

use crate::context::ViewCtx;
use crate::route::Route;

#[must_use]
pub fn render(route: Route, ctx: &ViewCtx<'_>) -> Node {
    match route {
        Route::Home => home::render(ctx),
        Route::Menu => menu::render(ctx),
    }
}

/// Register the route's motion. The menu page has none.
pub fn mount(route: Route, ctx: &ViewCtx<'_>, stage: &mut Stage) -> Vec<ScopeId> {
    match route {
        Route::Home => home::mount(ctx, stage),
        Route::Menu => Vec::new(),
    }
}
