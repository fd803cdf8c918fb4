#![forbid(unsafe_code)]

//! Page composer for the Casa do Brasil site.
//!
//! [`SiteModel`] is the page model the runtime drives: it owns the current
//! language, the selected menu category and the small bits of UI state
//! (navigation bar, mobile menu, FAQ accordion, stat counters), and it
//! composes the home and menu pages out of [`sections`] and [`pages`].
//!
//! The same view functions back the static export binary, which renders
//! any route in any language to a standalone HTML document.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod context;
pub mod document;
pub mod icons;
pub mod pages;
pub mod route;
pub mod sections;

pub use app::{SiteModel, SiteMsg};
pub use context::{UiState, ViewCtx};
pub use document::{export_page, metadata_effect};
pub use route::{Route, RouteParseError};
