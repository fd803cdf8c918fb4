#![forbid(unsafe_code)]

//! Eased 0 → target numeric counter, started by a one-shot gate.
//!
//! `value = floor((1 - (1 - p)^3) * target)` with `p = elapsed / duration`
//! clamped to 1. Once `elapsed >= duration` the value snaps to `target`
//! and the counter is finished for good.

use std::time::Duration;

/// A flag that can be raised once and never lowered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnceFlag(bool);

impl OnceFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self(false)
    }

    /// Raise the flag. Returns `true` only on the first call.
    pub fn raise(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }

    #[must_use]
    pub const fn is_raised(self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u64,
    duration: Duration,
    started_at: Option<Duration>,
    value: u64,
    finished: bool,
}

impl Counter {
    #[must_use]
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
            value: 0,
            finished: false,
        }
    }

    /// Start counting at `now`. Ignored once started; returns whether it started.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Advance to `now`. Returns the new value only when it changed.
    pub fn tick(&mut self, now: Duration) -> Option<u64> {
        let started = self.started_at?;
        if self.finished {
            return None;
        }
        let elapsed = now.saturating_sub(started);
        let next = if elapsed >= self.duration {
            self.finished = true;
            self.target
        } else {
            let p = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            let eased = 1.0 - (1.0 - p).powi(3);
            // `eased < 1` here, so the product stays below `target`.
            (eased * self.target as f64).floor() as u64
        };
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }

    /// Jump a running counter to its target. Returns whether it was running.
    pub fn finish(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.value = self.target;
        self.finished = true;
        true
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.finished
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
