#![forbid(unsafe_code)]

//! HTML serialization.

use std::fmt::{self, Write};

use crate::escape::{escape_attr, escape_text};
use crate::node::{Element, Node};

/// Serialize a node tree.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::with_capacity(4096);
    // Writing to a String cannot fail.
    let _ = write_node(&mut out, node);
    out
}

/// A full page: metadata plus body tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub lang: &'a str,
    pub dir: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Extra `<head>` children such as stylesheets.
    pub head: Vec<Node>,
    pub body: Node,
}

#[must_use]
pub fn render_document(doc: &Document<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = write_document(&mut out, doc);
    out
}

fn write_document(out: &mut impl Write, doc: &Document<'_>) -> fmt::Result {
    out.write_str("<!DOCTYPE html>\n")?;
    write!(
        out,
        "<html lang=\"{}\" dir=\"{}\"><head><meta charset=\"utf-8\">",
        escape_attr(doc.lang),
        escape_attr(doc.dir)
    )?;
    out.write_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    write!(out, "<title>{}</title>", escape_text(doc.title))?;
    write!(
        out,
        "<meta name=\"description\" content=\"{}\">",
        escape_attr(doc.description)
    )?;
    for node in &doc.head {
        write_node(out, node)?;
    }
    out.write_str("</head><body>")?;
    write_node(out, &doc.body)?;
    out.write_str("</body></html>\n")
}

pub fn write_node(out: &mut impl Write, node: &Node) -> fmt::Result {
    match node {
        Node::Text(text) => out.write_str(&escape_text(text)),
        Node::Raw(markup) => out.write_str(markup),
        Node::Fragment(children) => children.iter().try_for_each(|c| write_node(out, c)),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut impl Write, element: &Element) -> fmt::Result {
    write!(out, "<{}", element.tag())?;
    for (name, value) in element.attrs() {
        write!(out, " {name}=\"{}\"", escape_attr(value))?;
    }
    out.write_char('>')?;
    if element.is_void() {
        return Ok(());
    }
    for child in element.child_nodes() {
        write_node(out, child)?;
    }
    write!(out, "</{}>", element.tag())
}
