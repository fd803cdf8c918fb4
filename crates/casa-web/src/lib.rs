#![forbid(unsafe_code)]

//! Browser runner for the Casa do Brasil site.
//!
//! This crate provides [`SiteRunner`], a `wasm-bindgen`-exported struct
//! that wraps `casa_runtime::StepRunner<SiteModel>` and exposes it to
//! the page script for host-driven execution. Host events arrive as JSON
//! ([`input_parser`]); effects leave as JSON.

pub mod input_parser;
pub mod runner_core;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::SiteRunner;

pub use runner_core::RunnerCore;
