#![forbid(unsafe_code)]

//! Runtime tuning.

use std::time::Duration;

use crate::geometry::ScrollPos;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Time for a stat counter to reach its target.
    pub counter_duration: Duration,
    /// Scroll offset beyond which the navigation bar is "scrolled".
    pub scrolled_threshold: f64,
    /// Start position for reveals that do not name one.
    pub default_start: ScrollPos,
    /// Interval between ticks while counters run.
    pub frame_interval: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration: Duration::from_secs(2),
            scrolled_threshold: 30.0,
            default_start: ScrollPos::new(0.0, 0.85),
            frame_interval: Duration::from_millis(16),
        }
    }
}
