#![forbid(unsafe_code)]

//! Step-based runner for host-driven pages.
//!
//! [`StepRunner`] drives a [`Model`] without threads or clocks. The host
//! delivers events with [`push_event`](StepRunner::push_event) and calls
//! [`step`](StepRunner::step) and [`take_effects`](StepRunner::take_effects)
//! from its own animation frame:
//!
//! ```text
//! scroll / resize / click / layout
//!   → push_event(Event)
//! requestAnimationFrame(now)
//!   → step(now)          // drain events, fire reveals, tick, advance tweens
//!   → take_effects()     // re-render if dirty, then queued effects and styles
//!   → apply to the DOM
//! ```
//!
//! All inputs carry host timestamps, so replaying the same event stream
//! yields the same effects.

use std::collections::VecDeque;
use std::time::Duration;

use casa_render::render;
use tracing::{debug, debug_span, info};

use crate::config::MotionConfig;
use crate::effect::Effect;
use crate::geometry::Viewport;
use crate::program::{Cmd, Event, Model};
use crate::stage::Stage;

/// Outcome of a single [`StepRunner::step`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Queued events processed in this step.
    pub events_processed: u32,
    /// Reveals that fired in this step.
    pub reveals_fired: u32,
    /// Whether a tick was delivered to the model.
    pub tick_fired: bool,
    /// Whether the view must be re-rendered.
    pub dirty: bool,
    /// Whether the host should keep scheduling frames.
    pub animating: bool,
}

pub struct StepRunner<M: Model> {
    model: M,
    stage: Stage,
    initialized: bool,
    tick_rate: Option<Duration>,
    last_tick_at: Duration,
    event_queue: VecDeque<Event>,
    logs: Vec<String>,
    frame_idx: u64,
}

impl<M: Model> StepRunner<M> {
    /// The model is not initialized until [`init`](Self::init) is called.
    #[must_use]
    pub fn new(model: M, config: MotionConfig, viewport: Viewport) -> Self {
        Self {
            model,
            stage: Stage::new(config, viewport),
            initialized: false,
            tick_rate: None,
            last_tick_at: Duration::ZERO,
            event_queue: VecDeque::new(),
            logs: Vec::new(),
            frame_idx: 0,
        }
    }

    /// Call once before stepping. Repeated calls are ignored.
    pub fn init(&mut self) -> StepResult {
        if self.initialized {
            return self.summary(StepResult::default());
        }
        let _span = debug_span!("runner_init").entered();
        let cmd = self.model.init(&mut self.stage);
        self.initialized = true;
        self.stage.invalidate();
        self.execute_cmd(cmd);
        info!("runner initialized");
        self.summary(StepResult::default())
    }

    pub fn push_event(&mut self, event: Event) {
        self.event_queue.push_back(event);
    }

    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.event_queue.extend(events);
    }

    /// Process queued events, fire reached reveals, deliver a due tick and
    /// advance tweens to `now` (a monotonic host timestamp).
    pub fn step(&mut self, now: Duration) -> StepResult {
        if !self.initialized {
            return StepResult::default();
        }
        self.stage.set_now(now);
        let mut result = StepResult::default();

        while let Some(event) = self.event_queue.pop_front() {
            self.handle_event(event);
            result.events_processed += 1;
        }

        let outcome = self.stage.observe();
        result.reveals_fired = u32::try_from(outcome.fired).unwrap_or(u32::MAX);
        for signal in outcome.signals {
            debug!(signal = %signal, "signal delivered");
            self.dispatch(Event::Signal(signal));
        }

        if let Some(rate) = self.tick_rate
            && now.saturating_sub(self.last_tick_at) >= rate
        {
            self.last_tick_at = now;
            result.tick_fired = true;
            self.dispatch(Event::Tick);
        }

        self.stage.advance();
        self.summary(result)
    }

    /// Process a single event at `now` without queueing.
    pub fn step_event(&mut self, event: Event, now: Duration) -> StepResult {
        self.push_event(event);
        self.step(now)
    }

    /// Render if dirty and drain every pending effect, in apply order.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        let rendered = self.render();
        self.stage.drain(rendered)
    }

    /// Markup for the current view if it is dirty.
    pub fn render(&mut self) -> Option<String> {
        if !self.stage.needs_render() {
            return None;
        }
        Some(self.force_render())
    }

    /// Markup for the current view, unconditionally.
    pub fn force_render(&mut self) -> String {
        let _span = debug_span!("render", frame = self.frame_idx).entered();
        let html = render(&self.model.view());
        self.frame_idx += 1;
        debug!(bytes = html.len(), "view rendered");
        html
    }

    // -- Accessors ----------------------------------------------------------

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    #[must_use]
    pub fn tick_rate(&self) -> Option<Duration> {
        self.tick_rate
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn drain_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }

    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    // -- Internal -----------------------------------------------------------

    fn summary(&self, mut result: StepResult) -> StepResult {
        result.dirty = self.stage.needs_render();
        result.animating = self.tick_rate.is_some() || self.stage.scheduler().is_animating();
        result
    }

    fn handle_event(&mut self, event: Event) {
        match &event {
            Event::Scroll { y } => self.stage.set_scroll(*y),
            Event::Resize { width, height } => self.stage.set_size(*width, *height),
            Event::Layout(boxes) => self.stage.update_layout(boxes.iter().cloned()),
            Event::Action { .. } | Event::Navigate { .. } | Event::Signal(_) | Event::Tick => {}
        }
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: Event) {
        let msg = M::Message::from(event);
        let cmd = self.model.update(msg, &mut self.stage);
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Msg(m) => {
                let cmd = self.model.update(m, &mut self.stage);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Tick(interval) => {
                if self.tick_rate.is_none() {
                    self.last_tick_at = self.stage.now();
                }
                self.tick_rate = Some(interval);
            }
            Cmd::StopTick => self.tick_rate = None,
            Cmd::Log(text) => {
                info!(target: "casa_runtime::log", "{text}");
                self.logs.push(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ElementBox;
    use crate::motion::{Counter, RevealSpec};
    use casa_render::{Node, el};

    // -- Test model ---------------------------------------------------------

    struct Stats {
        counter: Counter,
        clicks: u32,
    }

    #[derive(Debug)]
    enum Msg {
        Event(Event),
        Log,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            Msg::Event(event)
        }
    }

    impl Model for Stats {
        type Message = Msg;

        fn init(&mut self, stage: &mut Stage) -> Cmd<Msg> {
            let scope = stage.open_scope("stats");
            stage.reveal(
                scope,
                RevealSpec::signal("stats", "top 80%".parse().unwrap(), "stats"),
            );
            Cmd::none()
        }

        fn update(&mut self, msg: Msg, stage: &mut Stage) -> Cmd<Msg> {
            match msg {
                Msg::Event(Event::Signal(_)) => {
                    self.counter.start(stage.now());
                    Cmd::tick(Duration::from_millis(16))
                }
                Msg::Event(Event::Tick) => {
                    if let Some(v) = self.counter.tick(stage.now()) {
                        stage.emit(Effect::Text {
                            target: "stat-0".into(),
                            text: v.to_string(),
                        });
                    }
                    if self.counter.is_finished() {
                        Cmd::StopTick
                    } else {
                        Cmd::none()
                    }
                }
                Msg::Event(Event::Action { .. }) => {
                    self.clicks += 1;
                    stage.invalidate();
                    Cmd::msg(Msg::Log)
                }
                Msg::Event(_) => Cmd::none(),
                Msg::Log => Cmd::log(format!("clicks={}", self.clicks)),
            }
        }

        fn view(&self) -> Node {
            el("p").id("stat-0").text(self.counter.value().to_string()).into()
        }
    }

    fn runner() -> StepRunner<Stats> {
        let mut r = StepRunner::new(
            Stats {
                counter: Counter::new(2001, Duration::from_secs(2)),
                clicks: 0,
            },
            MotionConfig::default(),
            Viewport {
                width: 1280.0,
                height: 1000.0,
                scroll_y: 0.0,
            },
        );
        r.init();
        r
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_drain_renders() {
        let mut r = runner();
        let effects = r.take_effects();
        assert!(matches!(&effects[0], Effect::Render { html } if html == "<p id=\"stat-0\">0</p>"));
        assert!(r.take_effects().is_empty());
    }

    #[test]
    fn step_before_init_is_inert() {
        let mut r = StepRunner::new(
            Stats {
                counter: Counter::new(1, Duration::from_secs(1)),
                clicks: 0,
            },
            MotionConfig::default(),
            Viewport::default(),
        );
        r.push_event(Event::Tick);
        assert_eq!(r.step(ms(0)), StepResult::default());
        assert_eq!(r.pending_events(), 1);
    }

    #[test]
    fn signal_starts_counter_and_ticks_to_target() {
        let mut r = runner();
        let _ = r.take_effects();
        r.push_event(Event::Layout(vec![(
            "stats".into(),
            ElementBox {
                top: 1500.0,
                height: 200.0,
            },
        )]));
        // Start scroll = 1500 - 800 = 700.
        let res = r.step_event(Event::Scroll { y: 700.0 }, ms(1000));
        assert_eq!(res.reveals_fired, 1);
        assert!(res.animating);
        assert_eq!(r.tick_rate(), Some(ms(16)));

        let mut last = None;
        let mut t = 1000;
        while r.tick_rate().is_some() && t < 5000 {
            t += 16;
            r.step(ms(t));
            for e in r.take_effects() {
                if let Effect::Text { text, .. } = e {
                    last = Some(text);
                }
            }
        }
        assert_eq!(last.as_deref(), Some("2001"));
        assert!(!r.step(ms(t + 16)).animating);

        // The gate never re-arms.
        let res = r.step_event(Event::Scroll { y: 0.0 }, ms(t + 32));
        assert_eq!(res.reveals_fired, 0);
        let res = r.step_event(Event::Scroll { y: 900.0 }, ms(t + 48));
        assert_eq!(res.reveals_fired, 0);
    }

    #[test]
    fn actions_invalidate_and_log() {
        let mut r = runner();
        let _ = r.take_effects();
        let res = r.step_event(
            Event::Action {
                name: "noop".into(),
                value: None,
            },
            ms(5),
        );
        assert!(res.dirty);
        assert_eq!(r.drain_logs(), vec!["clicks=1".to_string()]);
        assert!(matches!(r.take_effects()[0], Effect::Render { .. }));
        assert_eq!(r.frame_idx(), 2);
    }
}
