#![forbid(unsafe_code)]

//! View tree for the Casa do Brasil site.
//!
//! Pages are composed as a tree of [`Node`]s, serialized to HTML by
//! [`html`]. All text and attribute values are escaped on output; the
//! only unescaped content is [`Node::Raw`], reserved for trusted markup
//! such as inline SVG icons.

pub mod escape;
pub mod html;
pub mod node;

pub use escape::{escape_attr, escape_text};
pub use html::{Document, render, render_document};
pub use node::{Element, Node, el};
