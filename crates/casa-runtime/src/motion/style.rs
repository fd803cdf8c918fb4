#![forbid(unsafe_code)]

//! Animatable style state per element.
//!
//! Several animations may drive one element at once (a reveal tween
//! scaling an image while a parallax track moves it), so each writes
//! only its own properties into the element's [`StyleFrame`], and the
//! composed frame is what the host receives.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// `clip-path: inset(top right bottom left)` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Inset {
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            top: lerp(self.top, to.top, t),
            right: lerp(self.right, to.right, t),
            bottom: lerp(self.bottom, to.bottom, t),
            left: lerp(self.left, to.left, t),
        }
    }
}

/// A single numeric style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarProp {
    /// Vertical offset in pixels.
    Y,
    /// Vertical offset as a percentage of the element's own height.
    YPercent,
    Opacity,
    Scale,
    /// Rotation in degrees.
    Rotate,
}

/// Partial style: only the properties that are `Some` are set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleFrame {
    pub y: Option<f64>,
    pub y_percent: Option<f64>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotate: Option<f64>,
    pub clip: Option<Inset>,
}

/// Linear interpolation, exact at both endpoints.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

impl StyleFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(px);
        self
    }

    #[must_use]
    pub fn y_percent(mut self, pct: f64) -> Self {
        self.y_percent = Some(pct);
        self
    }

    #[must_use]
    pub fn opacity(mut self, o: f64) -> Self {
        self.opacity = Some(o);
        self
    }

    #[must_use]
    pub fn scale(mut self, s: f64) -> Self {
        self.scale = Some(s);
        self
    }

    #[must_use]
    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = Some(deg);
        self
    }

    #[must_use]
    pub fn clip(mut self, inset: Inset) -> Self {
        self.clip = Some(inset);
        self
    }

    pub fn set_scalar(&mut self, prop: ScalarProp, value: f64) {
        let slot = match prop {
            ScalarProp::Y => &mut self.y,
            ScalarProp::YPercent => &mut self.y_percent,
            ScalarProp::Opacity => &mut self.opacity,
            ScalarProp::Scale => &mut self.scale,
            ScalarProp::Rotate => &mut self.rotate,
        };
        *slot = Some(value);
    }

    #[must_use]
    pub fn scalar(&self, prop: ScalarProp) -> Option<f64> {
        match prop {
            ScalarProp::Y => self.y,
            ScalarProp::YPercent => self.y_percent,
            ScalarProp::Opacity => self.opacity,
            ScalarProp::Scale => self.scale,
            ScalarProp::Rotate => self.rotate,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every property set in `other` over `self`.
    pub fn merge(&mut self, other: &Self) {
        fn over<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }
        over(&mut self.y, other.y);
        over(&mut self.y_percent, other.y_percent);
        over(&mut self.opacity, other.opacity);
        over(&mut self.scale, other.scale);
        over(&mut self.rotate, other.rotate);
        over(&mut self.clip, other.clip);
    }

    /// Interpolate toward `to`. Properties missing from `from` jump to
    /// their `to` value.
    #[must_use]
    pub fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        fn mix(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(lerp(a, b, t)),
                (_, b) => b,
            }
        }
        Self {
            y: mix(from.y, to.y, t),
            y_percent: mix(from.y_percent, to.y_percent, t),
            opacity: mix(from.opacity, to.opacity, t),
            scale: mix(from.scale, to.scale, t),
            rotate: mix(from.rotate, to.rotate, t),
            clip: match (from.clip, to.clip) {
                (Some(a), Some(b)) => Some(a.lerp(b, t)),
                (_, b) => b,
            },
        }
    }

    /// CSS declarations for the set properties, transforms combined.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(3);
        let mut transform = String::new();
        if let Some(y) = self.y {
            let _ = write!(transform, "translateY({}px) ", fmt_num(y));
        }
        if let Some(p) = self.y_percent {
            let _ = write!(transform, "translateY({}%) ", fmt_num(p));
        }
        if let Some(s) = self.scale {
            let _ = write!(transform, "scale({}) ", fmt_num(s));
        }
        if let Some(r) = self.rotate {
            let _ = write!(transform, "rotate({}deg) ", fmt_num(r));
        }
        if !transform.is_empty() {
            transform.pop();
            out.push(("transform", transform));
        }
        if let Some(o) = self.opacity {
            out.push(("opacity", fmt_num(o)));
        }
        if let Some(c) = self.clip {
            out.push((
                "clip-path",
                format!(
                    "inset({}% {}% {}% {}%)",
                    fmt_num(c.top),
                    fmt_num(c.right),
                    fmt_num(c.bottom),
                    fmt_num(c.left)
                ),
            ));
        }
        out
    }
}

/// Up to four decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

/// Composed style per element id, with change tracking.
#[derive(Debug, Clone, Default)]
pub struct StyleBook {
    frames: BTreeMap<String, StyleFrame>,
    dirty: BTreeSet<String>,
}

impl StyleBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `patch` into the element's frame; marks it dirty if anything changed.
    pub fn apply(&mut self, target: &str, patch: &StyleFrame) {
        let frame = self.frames.entry(target.to_owned()).or_default();
        let before = *frame;
        frame.merge(patch);
        if *frame != before {
            self.dirty.insert(target.to_owned());
        }
    }

    #[must_use]
    pub fn get(&self, target: &str) -> Option<&StyleFrame> {
        self.frames.get(target)
    }

    /// Forget elements; no further output is produced for them.
    pub fn remove(&mut self, target: &str) {
        self.frames.remove(target);
        self.dirty.remove(target);
    }

    /// Mark every element dirty, e.g. after the host replaced the DOM.
    pub fn mark_all_dirty(&mut self) {
        self.dirty = self.frames.keys().cloned().collect();
    }

    /// Drain dirty elements with their composed frames, in id order.
    pub fn take_dirty(&mut self) -> Vec<(String, StyleFrame)> {
        let dirty = std::mem::take(&mut self.dirty);
        dirty
            .into_iter()
            .filter_map(|id| self.frames.get(&id).map(|f| (id, *f)))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
