#![forbid(unsafe_code)]

//! Scroll-triggered, fire-once reveals grouped into disposable scopes.
//!
//! A section opens a scope when it mounts and registers its reveal
//! targets and parallax tracks in it. Every scroll observation checks the
//! pending observers; an observer fires the first time its trigger
//! element's start position is reached (scrolling in either direction)
//! and is removed at once. Disposing the scope removes everything the
//! section registered.
//!
//! # Invariants
//!
//! 1. **Fire once**: an observer fires at most one time.
//! 2. **Dispose is final**: after [`RevealScheduler::dispose_scope`], no
//!    observer, tween or track of that scope produces output again, and
//!    registering into it is refused.
//! 3. **Dispose is idempotent**: disposing twice is a no-op.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unmeasured trigger | Host has not reported a box | Observer stays pending |
//! | Unknown scope | Id from another scheduler | Registration refused |
//! | Late tween tick | Host frame arrives after end | Snaps to the final frame |

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use tracing::{debug, trace};

use crate::geometry::{LayoutMap, ScrollPos, Viewport};
use crate::motion::easing::Ease;
use crate::motion::parallax::ParallaxTrack;
use crate::motion::style::{StyleBook, StyleFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// A timed interpolation of one element's style.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: StyleFrame,
    pub to: StyleFrame,
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl Tween {
    /// One-second power3-out tween with no delay.
    #[must_use]
    pub fn new(target: impl Into<String>, from: StyleFrame, to: StyleFrame) -> Self {
        Self {
            target: target.into(),
            from,
            to,
            duration: Duration::from_secs(1),
            delay: Duration::ZERO,
            ease: Ease::Power3Out,
        }
    }

    #[must_use]
    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration = Duration::from_secs_f64(secs.max(0.0));
        self
    }

    #[must_use]
    pub fn delay_secs(mut self, secs: f64) -> Self {
        self.delay = Duration::from_secs_f64(secs.max(0.0));
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Frame at `elapsed` since the tween was started (delay included).
    /// Returns the frame and whether the tween is complete.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> (StyleFrame, bool) {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return (self.from, false);
        };
        if self.duration.is_zero() || active >= self.duration {
            return (self.to, true);
        }
        let t = active.as_secs_f64() / self.duration.as_secs_f64();
        (
            StyleFrame::interpolate(&self.from, &self.to, self.ease.apply(t)),
            false,
        )
    }
}

/// What happens when a reveal fires.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealAction {
    /// Start these tweens.
    Animate(Vec<Tween>),
    /// Report a named signal to the model (e.g. a counter gate).
    Signal(String),
}

/// A trigger element, its start position and the action to run.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSpec {
    pub trigger: String,
    pub start: ScrollPos,
    pub action: RevealAction,
}

impl RevealSpec {
    #[must_use]
    pub fn animate(trigger: impl Into<String>, start: ScrollPos, tweens: Vec<Tween>) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            action: RevealAction::Animate(tweens),
        }
    }

    #[must_use]
    pub fn signal(trigger: impl Into<String>, start: ScrollPos, name: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            action: RevealAction::Signal(name.into()),
        }
    }
}

#[derive(Debug)]
struct Observer {
    id: ObserverId,
    scope: ScopeId,
    spec: RevealSpec,
}

#[derive(Debug)]
struct ActiveTween {
    scope: ScopeId,
    tween: Tween,
    started_at: Duration,
}

#[derive(Debug)]
struct ScopeEntry {
    name: String,
    /// Style targets touched by this scope, forgotten on dispose.
    targets: BTreeSet<String>,
}

/// Counts from a single [`RevealScheduler::observe`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObserveOutcome {
    /// Observers that fired.
    pub fired: usize,
    /// Signals raised by fired observers, in registration order.
    pub signals: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RevealScheduler {
    next_id: u64,
    scopes: HashMap<ScopeId, ScopeEntry>,
    observers: Vec<Observer>,
    tweens: Vec<ActiveTween>,
    tracks: Vec<(ScopeId, ParallaxTrack)>,
}

impl RevealScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn open_scope(&mut self, name: impl Into<String>) -> ScopeId {
        let id = ScopeId(self.next());
        let name = name.into();
        debug!(scope = %name, "reveal scope opened");
        self.scopes.insert(
            id,
            ScopeEntry {
                name,
                targets: BTreeSet::new(),
            },
        );
        id
    }

    #[must_use]
    pub fn is_live(&self, scope: ScopeId) -> bool {
        self.scopes.contains_key(&scope)
    }

    /// Register a reveal. The `from` frame of each tween is applied at
    /// once so the element stays hidden until it fires.
    pub fn register(
        &mut self,
        scope: ScopeId,
        spec: RevealSpec,
        styles: &mut StyleBook,
    ) -> Option<ObserverId> {
        let id = ObserverId(self.next());
        let entry = self.scopes.get_mut(&scope)?;
        if let RevealAction::Animate(tweens) = &spec.action {
            for tween in tweens {
                entry.targets.insert(tween.target.clone());
                styles.apply(&tween.target, &tween.from);
            }
        }
        trace!(trigger = %spec.trigger, "reveal registered");
        self.observers.push(Observer { id, scope, spec });
        Some(id)
    }

    /// Add a scroll-linked track. Returns `false` if the scope is gone.
    pub fn add_track(&mut self, scope: ScopeId, track: ParallaxTrack) -> bool {
        let Some(entry) = self.scopes.get_mut(&scope) else {
            return false;
        };
        entry.targets.insert(track.target.clone());
        self.tracks.push((scope, track));
        true
    }

    /// Fire every pending observer whose start position is reached.
    pub fn observe(
        &mut self,
        now: Duration,
        viewport: &Viewport,
        layout: &LayoutMap,
    ) -> ObserveOutcome {
        let mut outcome = ObserveOutcome::default();
        let mut fired = Vec::new();
        self.observers.retain_mut(|obs| {
            let reached = layout
                .get(&obs.spec.trigger)
                .is_some_and(|bx| obs.spec.start.reached(bx, viewport));
            if reached {
                let action =
                    std::mem::replace(&mut obs.spec.action, RevealAction::Animate(Vec::new()));
                fired.push((obs.scope, action, obs.spec.trigger.clone()));
            }
            !reached
        });
        for (scope, action, trigger) in fired {
            outcome.fired += 1;
            debug!(trigger = %trigger, "reveal fired");
            match action {
                RevealAction::Animate(tweens) => {
                    self.tweens.extend(tweens.into_iter().map(|tween| ActiveTween {
                        scope,
                        tween,
                        started_at: now,
                    }));
                }
                RevealAction::Signal(name) => outcome.signals.push(name),
            }
        }
        outcome
    }

    /// Advance running tweens to `now`, writing their frames into `styles`.
    pub fn advance(&mut self, now: Duration, styles: &mut StyleBook) {
        self.tweens.retain(|active| {
            let elapsed = now.saturating_sub(active.started_at);
            let (frame, done) = active.tween.sample(elapsed);
            styles.apply(&active.tween.target, &frame);
            !done
        });
    }

    /// Evaluate every track against the current scroll position.
    pub fn scroll_tracks(&self, viewport: &Viewport, layout: &LayoutMap, styles: &mut StyleBook) {
        for (_, track) in &self.tracks {
            if let Some(bx) = layout.get(&track.trigger) {
                let mut patch = StyleFrame::new();
                patch.set_scalar(track.prop, track.value_at(bx, viewport));
                styles.apply(&track.target, &patch);
            }
        }
    }

    /// Tear down a scope. Returns `false` if it was already disposed or unknown.
    pub fn dispose_scope(&mut self, scope: ScopeId, styles: &mut StyleBook) -> bool {
        let Some(entry) = self.scopes.remove(&scope) else {
            return false;
        };
        for target in entry.targets {
            styles.remove(&target);
        }
        debug!(scope = %entry.name, "reveal scope disposed");
        self.observers.retain(|o| o.scope != scope);
        self.tweens.retain(|t| t.scope != scope);
        self.tracks.retain(|(s, _)| *s != scope);
        true
    }

    /// Drop a pending observer before it fires. Returns `false` if it
    /// already fired or its scope was disposed.
    pub fn cancel(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| o.id != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn pending_observers(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn pending_in(&self, scope: ScopeId) -> usize {
        self.observers.iter().filter(|o| o.scope == scope).count()
    }

    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Whether anything still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ElementBox;
    use pretty_assertions::assert_eq;

    fn vp(scroll_y: f64) -> Viewport {
        Viewport {
            width: 1280.0,
            height: 1000.0,
            scroll_y,
        }
    }

    fn layout() -> LayoutMap {
        let mut map = LayoutMap::new();
        map.insert("text", ElementBox { top: 1850.0, height: 100.0 });
        map.insert("stats", ElementBox { top: 2300.0, height: 200.0 });
        map
    }

    fn fade(target: &str) -> Tween {
        Tween::new(
            target,
            StyleFrame::new().y(30.0).opacity(0.0),
            StyleFrame::new().y(0.0).opacity(1.0),
        )
    }

    const T0: Duration = Duration::ZERO;

    #[test]
    fn fires_once_down_up_down() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("about");
        rs.register(
            scope,
            RevealSpec::animate("text", "top 85%".parse().unwrap(), vec![fade("text")]),
            &mut styles,
        );
        // Start scroll = 1850 - 850 = 1000.
        assert_eq!(rs.observe(T0, &vp(999.0), &layout()).fired, 0);
        assert_eq!(rs.observe(T0, &vp(1000.0), &layout()).fired, 1);
        assert_eq!(rs.observe(T0, &vp(0.0), &layout()).fired, 0);
        assert_eq!(rs.observe(T0, &vp(1500.0), &layout()).fired, 0);
        assert_eq!(rs.pending_observers(), 0);
        assert_eq!(rs.active_tweens(), 1);
    }

    #[test]
    fn fires_when_landing_past_the_line_from_below() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("about");
        rs.register(
            scope,
            RevealSpec::signal("stats", "top 80%".parse().unwrap(), "stats"),
            &mut styles,
        );
        // Page restored deep below the element, then scrolled up.
        let out = rs.observe(T0, &vp(5000.0), &layout());
        assert_eq!(out.signals, vec!["stats".to_string()]);
    }

    #[test]
    fn unmeasured_trigger_stays_pending() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("faq");
        rs.register(
            scope,
            RevealSpec::signal("missing", "top 80%".parse().unwrap(), "x"),
            &mut styles,
        );
        assert_eq!(rs.observe(T0, &vp(1e9), &layout()).fired, 0);
        assert_eq!(rs.pending_observers(), 1);
    }

    #[test]
    fn register_applies_initial_frame() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("about");
        rs.register(
            scope,
            RevealSpec::animate("text", "top 85%".parse().unwrap(), vec![fade("text")]),
            &mut styles,
        );
        assert_eq!(styles.get("text").and_then(|f| f.opacity), Some(0.0));
    }

    #[test]
    fn tween_respects_delay_and_snaps_to_end() {
        let tween = fade("text").delay_secs(0.35);
        let (frame, done) = tween.sample(Duration::from_millis(200));
        assert_eq!(frame.opacity, Some(0.0));
        assert!(!done);
        let (frame, done) = tween.sample(Duration::from_millis(5000));
        assert_eq!(frame, StyleFrame::new().y(0.0).opacity(1.0));
        assert!(done);
    }

    #[test]
    fn advance_finishes_tweens() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("about");
        rs.register(
            scope,
            RevealSpec::animate("text", "top 85%".parse().unwrap(), vec![fade("text")]),
            &mut styles,
        );
        rs.observe(Duration::from_secs(10), &vp(1000.0), &layout());
        rs.advance(Duration::from_millis(10_500), &mut styles);
        assert!(rs.is_animating());
        rs.advance(Duration::from_secs(11), &mut styles);
        assert!(!rs.is_animating());
        assert_eq!(styles.get("text").and_then(|f| f.opacity), Some(1.0));
    }

    #[test]
    fn dispose_is_final_and_idempotent() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("footer");
        let other = rs.open_scope("faq");
        rs.register(
            scope,
            RevealSpec::animate("text", "top 88%".parse().unwrap(), vec![fade("text")]),
            &mut styles,
        );
        rs.register(
            other,
            RevealSpec::signal("stats", "top 80%".parse().unwrap(), "faq"),
            &mut styles,
        );
        assert!(rs.dispose_scope(scope, &mut styles));
        assert!(!rs.dispose_scope(scope, &mut styles));
        assert!(styles.get("text").is_none());
        assert!(!rs.is_live(scope));
        let late = RevealSpec::signal("text", ScrollPos::new(0.0, 1.0), "late");
        assert!(rs.register(scope, late, &mut styles).is_none());
        let out = rs.observe(T0, &vp(1e9), &layout());
        assert_eq!(out.signals, vec!["faq".to_string()]);
        assert_eq!(rs.pending_in(scope), 0);
    }

    #[test]
    fn disposed_scopes_are_forgotten() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        for _ in 0..10 {
            let scopes: Vec<_> = (0..6).map(|i| rs.open_scope(format!("s{i}"))).collect();
            for scope in scopes {
                assert!(rs.dispose_scope(scope, &mut styles));
            }
        }
        assert_eq!(rs.scope_count(), 0);
    }

    #[test]
    fn cancel_drops_only_that_observer() {
        let mut styles = StyleBook::new();
        let mut rs = RevealScheduler::new();
        let scope = rs.open_scope("faq");
        let at = ScrollPos::new(0.0, 1.0);
        let first = rs
            .register(scope, RevealSpec::signal("text", at, "a"), &mut styles)
            .unwrap();
        rs.register(scope, RevealSpec::signal("stats", at, "b"), &mut styles);
        assert!(rs.cancel(first));
        assert!(!rs.cancel(first));
        let out = rs.observe(T0, &vp(1e9), &layout());
        assert_eq!(out.signals, vec!["b".to_string()]);
    }
}
