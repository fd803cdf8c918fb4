#![forbid(unsafe_code)]

//! Motion: reveal scheduling, tweens, scroll-linked tracks and counters.
//!
//! Everything here is driven by explicit timestamps and scroll
//! observations handed in by the host; nothing reads a clock or blocks.

pub mod counter;
pub mod easing;
pub mod parallax;
pub mod reveal;
pub mod style;

pub use counter::{Counter, OnceFlag};
pub use easing::Ease;
pub use parallax::{ParallaxTrack, track_progress};
pub use reveal::{
    ObserveOutcome, ObserverId, RevealAction, RevealScheduler, RevealSpec, ScopeId, Tween,
};
pub use style::{Inset, ScalarProp, StyleBook, StyleFrame};
