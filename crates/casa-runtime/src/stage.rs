#![forbid(unsafe_code)]

//! The runtime surface a model mutates: viewport, layout, reveal
//! scheduler, composed styles and the outgoing effect queue.

use std::time::Duration;

use tracing::trace;

use crate::config::MotionConfig;
use crate::effect::Effect;
use crate::geometry::{ElementBox, LayoutMap, Viewport};
use crate::motion::{
    ObserveOutcome, ObserverId, ParallaxTrack, RevealScheduler, RevealSpec, ScopeId, StyleBook,
};

#[derive(Debug)]
pub struct Stage {
    config: MotionConfig,
    viewport: Viewport,
    layout: LayoutMap,
    scheduler: RevealScheduler,
    styles: StyleBook,
    effects: Vec<Effect>,
    needs_render: bool,
    now: Duration,
}

impl Stage {
    #[must_use]
    pub fn new(config: MotionConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            layout: LayoutMap::new(),
            scheduler: RevealScheduler::new(),
            styles: StyleBook::new(),
            effects: Vec::new(),
            needs_render: true,
            now: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutMap {
        &self.layout
    }

    /// Host timestamp of the current step.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    pub(crate) fn set_now(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.viewport.scroll_y = y.max(0.0);
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn update_layout(&mut self, boxes: impl IntoIterator<Item = (String, ElementBox)>) {
        self.layout.extend(boxes);
    }

    // -- Reveals ------------------------------------------------------------

    pub fn open_scope(&mut self, name: impl Into<String>) -> ScopeId {
        self.scheduler.open_scope(name)
    }

    pub fn reveal(&mut self, scope: ScopeId, spec: RevealSpec) -> Option<ObserverId> {
        self.scheduler.register(scope, spec, &mut self.styles)
    }

    pub fn track(&mut self, scope: ScopeId, track: ParallaxTrack) -> bool {
        self.scheduler.add_track(scope, track)
    }

    pub fn dispose_scope(&mut self, scope: ScopeId) -> bool {
        self.scheduler.dispose_scope(scope, &mut self.styles)
    }

    #[must_use]
    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn styles(&self) -> &StyleBook {
        &self.styles
    }

    /// Check observers and scroll tracks against the current viewport.
    pub fn observe(&mut self) -> ObserveOutcome {
        let outcome = self.scheduler.observe(self.now, &self.viewport, &self.layout);
        self.scheduler
            .scroll_tracks(&self.viewport, &self.layout, &mut self.styles);
        outcome
    }

    /// Advance running tweens to the current time.
    pub fn advance(&mut self) {
        self.scheduler.advance(self.now, &mut self.styles);
    }

    // -- Effects ------------------------------------------------------------

    pub fn emit(&mut self, effect: Effect) {
        trace!(kind = effect.kind(), "effect queued");
        self.effects.push(effect);
    }

    /// Ask for the view to be rebuilt and sent to the host.
    pub fn invalidate(&mut self) {
        self.needs_render = true;
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    #[must_use]
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain queued effects. When `rendered` carries fresh markup it leads
    /// the batch, followed by a layout request and a replay of every
    /// composed style (the host's DOM was replaced).
    pub fn drain(&mut self, rendered: Option<String>) -> Vec<Effect> {
        let mut out = Vec::with_capacity(self.effects.len() + 4);
        if let Some(html) = rendered {
            self.needs_render = false;
            self.layout.clear();
            self.styles.mark_all_dirty();
            out.push(Effect::Render { html });
            out.push(Effect::MeasureLayout);
        }
        out.append(&mut self.effects);
        out.extend(
            self.styles
                .take_dirty()
                .into_iter()
                .map(|(target, frame)| Effect::Style {
                    target,
                    declarations: frame.declarations(),
                }),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{StyleFrame, Tween};

    fn stage() -> Stage {
        Stage::new(
            MotionConfig::default(),
            Viewport {
                width: 1280.0,
                height: 800.0,
                scroll_y: 0.0,
            },
        )
    }

    #[test]
    fn render_leads_the_batch() {
        let mut st = stage();
        let scope = st.open_scope("hero");
        st.reveal(
            scope,
            RevealSpec::animate(
                "title",
                st.config().default_start,
                vec![Tween::new(
                    "title",
                    StyleFrame::new().opacity(0.0),
                    StyleFrame::new().opacity(1.0),
                )],
            ),
        );
        st.emit(Effect::Relayout { target: "carousel".into() });
        let kinds: Vec<&str> = st
            .drain(Some("<main></main>".into()))
            .iter()
            .map(Effect::kind)
            .collect();
        assert_eq!(kinds, vec!["render", "measureLayout", "relayout", "style"]);
        assert!(!st.needs_render());
        assert!(st.drain(None).is_empty());
    }

    #[test]
    fn negative_scroll_clamps_to_zero() {
        let mut st = stage();
        st.set_scroll(-40.0);
        assert_eq!(st.viewport().scroll_y, 0.0);
    }

    #[test]
    fn disposed_scope_emits_nothing() {
        let mut st = stage();
        let scope = st.open_scope("about");
        st.track(
            scope,
            ParallaxTrack::through_viewport(
                "img",
                "grid",
                crate::motion::ScalarProp::YPercent,
                -6.0,
                6.0,
            ),
        );
        st.update_layout([("grid".to_string(), ElementBox { top: 900.0, height: 300.0 })]);
        st.observe();
        assert_eq!(st.drain(None).len(), 1);
        st.dispose_scope(scope);
        st.set_scroll(500.0);
        st.observe();
        st.advance();
        assert!(st.drain(None).is_empty());
    }
}
