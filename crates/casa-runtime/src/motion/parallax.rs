#![forbid(unsafe_code)]

//! Scroll-linked tracks: a property mapped linearly from scroll offset.

use crate::geometry::{ElementBox, ScrollPos, Viewport};
use crate::motion::style::{ScalarProp, lerp};

/// Maps scroll between `start` and `end` (both measured against the
/// `trigger` element) onto `from..to` for one property of `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxTrack {
    pub target: String,
    pub trigger: String,
    pub start: ScrollPos,
    pub end: ScrollPos,
    pub prop: ScalarProp,
    pub from: f64,
    pub to: f64,
}

/// Linear progress of `scroll` through `[start, end]`, clamped to `[0, 1]`.
///
/// A degenerate range behaves as a step at `end`.
#[must_use]
pub fn track_progress(scroll: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if scroll >= end { 1.0 } else { 0.0 };
    }
    ((scroll - start) / (end - start)).clamp(0.0, 1.0)
}

impl ParallaxTrack {
    /// Element parallax from `"top bottom"` to `"bottom top"`: the whole
    /// time any part of the trigger is on screen.
    #[must_use]
    pub fn through_viewport(
        target: impl Into<String>,
        trigger: impl Into<String>,
        prop: ScalarProp,
        from: f64,
        to: f64,
    ) -> Self {
        Self {
            target: target.into(),
            trigger: trigger.into(),
            start: ScrollPos::new(0.0, 1.0),
            end: ScrollPos::new(1.0, 0.0),
            prop,
            from,
            to,
        }
    }

    #[must_use]
    pub fn with_range(mut self, start: ScrollPos, end: ScrollPos) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    #[must_use]
    pub fn progress(&self, bx: ElementBox, viewport: &Viewport) -> f64 {
        track_progress(
            viewport.scroll_y,
            self.start.scroll_for(bx, viewport.height),
            self.end.scroll_for(bx, viewport.height),
        )
    }

    #[must_use]
    pub fn value_at(&self, bx: ElementBox, viewport: &Viewport) -> f64 {
        lerp(self.from, self.to, self.progress(bx, viewport))
    }
}
