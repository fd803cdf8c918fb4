#![forbid(unsafe_code)]

//! Easing curves over normalized progress `t ∈ [0, 1]`.
//!
//! Names follow the power-curve convention used by web animation
//! libraries: `power1` is quadratic, `power2` cubic, `power3` quartic,
//! `power4` quintic.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ease {
    /// No easing; used by scroll-linked tracks.
    #[default]
    Linear,
    /// `1 - (1 - t)^3`; the counter curve.
    CubicOut,
    Power3Out,
    Power4InOut,
}

impl Ease {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "none",
            Self::CubicOut => "power2.out",
            Self::Power3Out => "power3.out",
            Self::Power4InOut => "power4.inOut",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "linear" => Ok(Self::Linear),
            "power2.out" | "cubic.out" => Ok(Self::CubicOut),
            "power3.out" => Ok(Self::Power3Out),
            "power4.inOut" => Ok(Self::Power4InOut),
            other => Err(format!("unknown ease: {other}")),
        }
    }
}
