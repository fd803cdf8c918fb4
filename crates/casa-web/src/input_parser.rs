#![forbid(unsafe_code)]

//! JSON input parser for host events.
//!
//! The page script serializes what it observes (scroll, resize, element
//! measurements, clicks on `data-action` elements, history changes) as
//! small JSON objects tagged by `kind`:
//!
//! ```text
//! {"kind":"scroll","y":412.5}
//! {"kind":"resize","width":390,"height":844}
//! {"kind":"layout","boxes":[{"id":"about-stats","top":1500,"height":220}]}
//! {"kind":"action","name":"lang","value":"en"}
//! {"kind":"navigate","path":"/casa-do-brazil-website/menu"}
//! ```
//!
//! Kinds without an [`Event`] mapping (focus, keyboard, anything newer
//! than this parser) return `Ok(None)`.

use casa_runtime::{ElementBox, Event};
use serde::Deserialize;

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// A field held a value no event can carry.
    InvalidValue(&'static str),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidValue(field) => write!(f, "invalid value for field: {field}"),
        }
    }
}

impl std::error::Error for InputParseError {}

#[derive(Debug, Deserialize)]
struct RawBox {
    id: String,
    top: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    boxes: Option<Vec<RawBox>>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

/// Parse one JSON-encoded host event into an [`Event`].
///
/// Returns `Ok(None)` for kinds that have no `Event` equivalent and
/// `Err` for malformed JSON or missing required fields.
pub fn parse_encoded_input_to_event(json: &str) -> Result<Option<Event>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    match raw.kind.as_str() {
        "scroll" => parse_scroll(&raw).map(Some),
        "resize" => parse_resize(&raw).map(Some),
        "layout" => parse_layout(raw).map(Some),
        "action" => parse_action(raw),
        "navigate" => raw
            .path
            .map(|path| Some(Event::Navigate { path }))
            .ok_or(InputParseError::MissingField("path")),
        _ => Ok(None),
    }
}

fn parse_scroll(raw: &RawInput) -> Result<Event, InputParseError> {
    let y = raw.y.ok_or(InputParseError::MissingField("y"))?;
    // Overscroll bounce reports small negative offsets.
    Ok(Event::Scroll { y: y.max(0.0) })
}

fn parse_resize(raw: &RawInput) -> Result<Event, InputParseError> {
    let width = raw.width.ok_or(InputParseError::MissingField("width"))?;
    let height = raw.height.ok_or(InputParseError::MissingField("height"))?;
    if width < 0.0 {
        return Err(InputParseError::InvalidValue("width"));
    }
    if height < 0.0 {
        return Err(InputParseError::InvalidValue("height"));
    }
    Ok(Event::Resize { width, height })
}

fn parse_layout(raw: RawInput) -> Result<Event, InputParseError> {
    let boxes = raw.boxes.ok_or(InputParseError::MissingField("boxes"))?;
    let boxes = boxes
        .into_iter()
        .map(|b| {
            if b.height < 0.0 {
                return Err(InputParseError::InvalidValue("height"));
            }
            Ok((
                b.id,
                ElementBox {
                    top: b.top,
                    height: b.height,
                },
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Event::Layout(boxes))
}

fn parse_action(raw: RawInput) -> Result<Option<Event>, InputParseError> {
    let name = raw.name.ok_or(InputParseError::MissingField("name"))?;
    if name.is_empty() {
        return Ok(None);
    }
    Ok(Some(Event::Action {
        name,
        value: raw.value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Option<Event> {
        parse_encoded_input_to_event(json).unwrap()
    }

    #[test]
    fn scroll() {
        assert_eq!(
            parse(r#"{"kind":"scroll","y":412.5}"#),
            Some(Event::Scroll { y: 412.5 })
        );
    }

    #[test]
    fn overscroll_clamps_to_top() {
        assert_eq!(
            parse(r#"{"kind":"scroll","y":-12}"#),
            Some(Event::Scroll { y: 0.0 })
        );
    }

    #[test]
    fn resize() {
        assert_eq!(
            parse(r#"{"kind":"resize","width":390,"height":844}"#),
            Some(Event::Resize {
                width: 390.0,
                height: 844.0
            })
        );
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(
            parse_encoded_input_to_event(r#"{"kind":"resize","width":-1,"height":844}"#),
            Err(InputParseError::InvalidValue("width"))
        );
    }

    #[test]
    fn layout_boxes() {
        assert_eq!(
            parse(r#"{"kind":"layout","boxes":[{"id":"hero","top":0,"height":900}]}"#),
            Some(Event::Layout(vec![(
                "hero".into(),
                ElementBox {
                    top: 0.0,
                    height: 900.0
                }
            )]))
        );
    }

    #[test]
    fn action_with_and_without_value() {
        assert_eq!(
            parse(r#"{"kind":"action","name":"lang","value":"en"}"#),
            Some(Event::Action {
                name: "lang".into(),
                value: Some("en".into())
            })
        );
        assert_eq!(
            parse(r#"{"kind":"action","name":"menu-toggle"}"#),
            Some(Event::Action {
                name: "menu-toggle".into(),
                value: None
            })
        );
        assert_eq!(parse(r#"{"kind":"action","name":""}"#), None);
    }

    #[test]
    fn navigate() {
        assert_eq!(
            parse(r#"{"kind":"navigate","path":"/menu"}"#),
            Some(Event::Navigate {
                path: "/menu".into()
            })
        );
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            parse_encoded_input_to_event(r#"{"kind":"scroll"}"#),
            Err(InputParseError::MissingField("y"))
        );
        assert_eq!(
            parse_encoded_input_to_event(r#"{"kind":"navigate"}"#),
            Err(InputParseError::MissingField("path"))
        );
        assert_eq!(
            parse_encoded_input_to_event(r#"{"kind":"layout"}"#),
            Err(InputParseError::MissingField("boxes"))
        );
    }

    #[test]
    fn unknown_kind_has_no_event() {
        assert_eq!(parse(r#"{"kind":"focus","focused":true}"#), None);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_encoded_input_to_event("not json"),
            Err(InputParseError::Json(_))
        ));
    }
}
