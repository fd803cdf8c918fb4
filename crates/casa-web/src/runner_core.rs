#![forbid(unsafe_code)]

//! Platform-independent runner core wrapping `StepRunner<SiteModel>`.
//!
//! This module contains the logic shared between the wasm-bindgen exports
//! and native tests. No JS/WASM types here.

use core::time::Duration;

use casa_content::{ContentError, ContentStore};
use casa_runtime::{Effect, Event, MotionConfig, StepResult, StepRunner, Viewport};
use casa_site::SiteModel;
use tracing::{debug, warn};
use web_time::Instant;

use crate::input_parser::parse_encoded_input_to_event;

/// Site runner driven by a host clock.
pub struct RunnerCore {
    inner: StepRunner<SiteModel>,
    /// Host time of the current frame.
    clock: Duration,
    /// Origin for [`sync_clock`](Self::sync_clock).
    started: Instant,
    cached_logs: Vec<String>,
}

fn millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

impl RunnerCore {
    /// Create a runner for a viewport of `width` x `height` CSS pixels,
    /// starting on the route for `location`.
    pub fn new(width: f64, height: f64, location: &str) -> Result<Self, ContentError> {
        let store = ContentStore::try_global()?;
        let model = SiteModel::new(store).at_location(location);
        let viewport = Viewport {
            width,
            height,
            scroll_y: 0.0,
        };
        Ok(Self {
            inner: StepRunner::new(model, MotionConfig::default(), viewport),
            clock: Duration::ZERO,
            started: Instant::now(),
            cached_logs: Vec::new(),
        })
    }

    /// Initialize the model. The first [`take_effects`](Self::take_effects)
    /// after this carries the initial render.
    pub fn init(&mut self) {
        self.inner.init();
    }

    /// Advance the clock by `dt_ms` milliseconds.
    pub fn advance_time_ms(&mut self, dt_ms: f64) {
        self.clock += millis(dt_ms);
    }

    /// Set the clock to an absolute host timestamp in milliseconds, such as
    /// the `requestAnimationFrame` argument. Earlier timestamps are ignored.
    pub fn set_time_ms(&mut self, ts_ms: f64) {
        self.clock = self.clock.max(millis(ts_ms));
    }

    /// Set the clock to the wall time elapsed since the runner was created.
    pub fn sync_clock(&mut self) {
        self.clock = self.clock.max(self.started.elapsed());
    }

    /// Parse a JSON-encoded host event and queue it.
    ///
    /// Returns `true` if the event was accepted, `false` if it was
    /// unsupported, malformed, or had no `Event` mapping.
    pub fn push_encoded_input(&mut self, json: &str) -> bool {
        match parse_encoded_input_to_event(json) {
            Ok(Some(event)) => {
                self.inner.push_event(event);
                true
            }
            Ok(None) => false,
            Err(err) => {
                debug!(%err, "host input rejected");
                false
            }
        }
    }

    /// Queue a viewport resize, processed on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.push_event(Event::Resize { width, height });
    }

    /// Process queued events and advance motion to the current clock.
    pub fn step(&mut self) -> StepResult {
        self.inner.step(self.clock)
    }

    /// Drain effects in apply order, rendering first if the view is dirty.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        let effects = self.inner.take_effects();
        self.cached_logs.extend(self.inner.drain_logs());
        effects
    }

    /// [`take_effects`](Self::take_effects) as a JSON array.
    pub fn take_effects_json(&mut self) -> String {
        let effects = self.take_effects();
        serde_json::to_string(&effects).unwrap_or_else(|err| {
            warn!(%err, count = effects.len(), "effects failed to serialize");
            "[]".to_owned()
        })
    }

    /// Take accumulated log lines.
    pub fn take_logs(&mut self) -> Vec<String> {
        self.cached_logs.extend(self.inner.drain_logs());
        std::mem::take(&mut self.cached_logs)
    }

    /// Number of renders so far.
    pub fn frame_idx(&self) -> u64 {
        self.inner.frame_idx()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    /// Current language code.
    pub fn language(&self) -> &'static str {
        self.inner.model().language().code()
    }

    /// Current route name.
    pub fn route(&self) -> &'static str {
        self.inner.model().route().name()
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }
}
