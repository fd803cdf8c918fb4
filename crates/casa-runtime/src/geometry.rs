#![forbid(unsafe_code)]

//! Viewport and element geometry in document coordinates.
//!
//! Scroll positions follow the `"<element edge> <viewport line>"` form:
//! `"top 85%"` is the scroll offset at which the element's top edge meets
//! the line 85% down the viewport.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visible window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

/// Measured element box; `top` is relative to the document, not the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Element boxes keyed by element id, as last reported by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutMap {
    boxes: HashMap<String, ElementBox>,
}

impl LayoutMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, bx: ElementBox) {
        self.boxes.insert(id.into(), bx);
    }

    /// Merge a batch of measurements over the existing ones.
    pub fn extend(&mut self, boxes: impl IntoIterator<Item = (String, ElementBox)>) {
        self.boxes.extend(boxes);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<ElementBox> {
        self.boxes.get(id).copied()
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Failure to parse a scroll position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Not exactly two whitespace-separated parts.
    Arity(String),
    /// A part that is neither a keyword nor a percentage.
    BadAnchor(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(s) => write!(f, "expected \"<element> <viewport>\", got {s:?}"),
            Self::BadAnchor(s) => write!(f, "invalid position anchor: {s:?}"),
        }
    }
}

impl std::error::Error for PositionError {}

/// A pairing of an element anchor and a viewport line, both as fractions
/// of their own height (`top` = 0, `center` = 0.5, `bottom` = 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPos {
    pub element: f64,
    pub viewport: f64,
}

impl ScrollPos {
    #[must_use]
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// The scroll offset at which this position is reached for `bx`.
    #[must_use]
    pub fn scroll_for(&self, bx: ElementBox, viewport_height: f64) -> f64 {
        bx.top + self.element * bx.height - self.viewport * viewport_height
    }

    /// Whether the position is reached at `viewport.scroll_y`.
    #[must_use]
    pub fn reached(&self, bx: ElementBox, viewport: &Viewport) -> bool {
        viewport.scroll_y >= self.scroll_for(bx, viewport.height)
    }
}

fn parse_anchor(token: &str) -> Result<f64, PositionError> {
    match token {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => token
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .map(|n| n / 100.0)
            .ok_or_else(|| PositionError::BadAnchor(token.to_owned())),
    }
}

impl FromStr for ScrollPos {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Self::new(parse_anchor(el)?, parse_anchor(vp)?)),
            _ => Err(PositionError::Arity(s.to_owned())),
        }
    }
}

impl fmt::Display for ScrollPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.element * 100.0, self.viewport * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_and_percentages() {
        assert_eq!("top 85%".parse(), Ok(ScrollPos::new(0.0, 0.85)));
        assert_eq!("bottom top".parse(), Ok(ScrollPos::new(1.0, 0.0)));
        assert_eq!("30% top".parse(), Ok(ScrollPos::new(0.3, 0.0)));
        assert_eq!("center  center".parse(), Ok(ScrollPos::new(0.5, 0.5)));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!(
            "top".parse::<ScrollPos>(),
            Err(PositionError::Arity("top".into()))
        );
        assert_eq!(
            "top 85".parse::<ScrollPos>(),
            Err(PositionError::BadAnchor("85".into()))
        );
        assert!("top 1% 2%".parse::<ScrollPos>().is_err());
    }

    #[test]
    fn scroll_for_top_85() {
        let pos: ScrollPos = "top 85%".parse().unwrap();
        let bx = ElementBox {
            top: 1000.0,
            height: 200.0,
        };
        assert_eq!(pos.scroll_for(bx, 800.0), 1000.0 - 680.0);
        let vp = |y| Viewport {
            width: 1280.0,
            height: 800.0,
            scroll_y: y,
        };
        assert!(!pos.reached(bx, &vp(319.0)));
        assert!(pos.reached(bx, &vp(320.0)));
    }

    #[test]
    fn layout_map_merges() {
        let mut map = LayoutMap::new();
        map.insert("a", ElementBox { top: 1.0, height: 2.0 });
        map.extend([("a".to_string(), ElementBox { top: 5.0, height: 2.0 })]);
        assert_eq!(map.get("a").map(|b| b.top), Some(5.0));
        assert_eq!(map.len(), 1);
    }
}
