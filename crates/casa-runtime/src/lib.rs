#![forbid(unsafe_code)]

//! Host-driven runtime for the Casa do Brasil site.
//!
//! The JavaScript host measures elements, forwards scroll, resize and
//! click events and applies [`Effect`]s; this crate owns everything else:
//! shared state ([`reactive`]), scroll geometry ([`geometry`]), reveal
//! choreography, parallax and counters ([`motion`]), and the
//! [`StepRunner`] that drives a page [`Model`].

pub mod config;
pub mod effect;
pub mod geometry;
pub mod motion;
pub mod program;
pub mod reactive;
pub mod stage;
pub mod step_runner;

pub use config::MotionConfig;
pub use effect::Effect;
pub use geometry::{ElementBox, LayoutMap, PositionError, ScrollPos, Viewport};
pub use program::{Cmd, Event, Model};
pub use reactive::{Setter, State, Subscription, state};
pub use stage::Stage;
pub use step_runner::{StepResult, StepRunner};
