#![forbid(unsafe_code)]

//! Instructions for the host, serialized as JSON objects tagged by `kind`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    /// Replace the page body with this markup.
    Render { html: String },
    /// Measure every element with an `id` and report a layout event.
    MeasureLayout,
    /// Set inline style properties on an element.
    Style {
        target: String,
        declarations: Vec<(&'static str, String)>,
    },
    /// Replace an element's text content.
    Text { target: String, text: String },
    /// Add or remove a class.
    Class {
        target: String,
        class: String,
        on: bool,
    },
    /// Set (`Some`) or remove (`None`) an attribute.
    Attr {
        target: String,
        name: String,
        value: Option<String>,
    },
    /// Document title, meta description and root `lang`/`dir`.
    Document {
        title: String,
        description: String,
        lang: String,
        dir: String,
    },
    /// Re-measure a widget whose content width changed.
    Relayout { target: String },
    /// Push a history entry for an in-app route change.
    Navigate { path: String },
}

impl Effect {
    /// Short tag for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Render { .. } => "render",
            Self::MeasureLayout => "measureLayout",
            Self::Style { .. } => "style",
            Self::Text { .. } => "text",
            Self::Class { .. } => "class",
            Self::Attr { .. } => "attr",
            Self::Document { .. } => "document",
            Self::Relayout { .. } => "relayout",
            Self::Navigate { .. } => "navigate",
        }
    }
}
