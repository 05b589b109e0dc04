// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! FreeMind `.mm` documents.
//!
//! ```text
//! <map version="1.0.1">
//!   <node ID="…" TEXT="…" COLOR="#rrggbb" FOLDED="true">
//!     <node TEXT="…" POSITION="right"/>
//!   </node>
//! </map>
//! ```

use std::fmt;

use super::xml::{escape_xml, XmlElement};
use super::{import_timestamp, Imported};
use crate::model::{generate_node_id, MindmapData, MindmapNode};

const MAP_VERSION: &str = "1.0.1";
const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeMindImportError {
    InvalidXml { reason: String },
    MissingMap,
    MissingRootNode,
}

impl fmt::Display for FreeMindImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidXml { reason } => write!(f, "FreeMind parse error: {reason}"),
            Self::MissingMap => f.write_str("No <map> element found"),
            Self::MissingRootNode => f.write_str("No root <node> element found"),
        }
    }
}

impl std::error::Error for FreeMindImportError {}

fn non_empty_attribute<'e, E: XmlElement>(element: &'e E, name: &str) -> Option<&'e str> {
    element.attribute(name).filter(|value| !value.is_empty())
}

/// Convert one `<node>` element; only its direct `<node>` children recurse.
fn node_from_element<E: XmlElement>(element: &E) -> MindmapNode {
    let id = non_empty_attribute(element, "ID")
        .map(str::to_owned)
        .unwrap_or_else(generate_node_id);
    let text = non_empty_attribute(element, "TEXT").unwrap_or(UNTITLED);

    let mut node = MindmapNode::new(id, text);
    node.set_color(non_empty_attribute(element, "COLOR"));
    if element.attribute("FOLDED") == Some("true") {
        node.set_collapsed(Some(true));
    }

    let children = element
        .children_named("node")
        .iter()
        .map(node_from_element)
        .collect::<Vec<_>>();
    if !children.is_empty() {
        node.set_children(Some(children));
    }
    node
}

/// Import a FreeMind map.
///
/// The root is the first `<node>` inside the first `<map>`. `TEXT`, `COLOR`, `ID` and `FOLDED`
/// are read; other attributes and child elements (icons, rich content, edges) are ignored.
pub fn import_freemind(content: &str) -> Result<Imported, FreeMindImportError> {
    let doc = roxmltree::Document::parse(content)
        .map_err(|err| FreeMindImportError::InvalidXml { reason: err.to_string() })?;

    let map = doc
        .descendants()
        .find(|node| node.is_element() && node.has_tag_name("map"))
        .ok_or(FreeMindImportError::MissingMap)?;
    let root_element = map
        .descendants()
        .find(|node| node.is_element() && node.has_tag_name("node"))
        .ok_or(FreeMindImportError::MissingRootNode)?;

    let root = node_from_element(&root_element);
    let mut mindmap = MindmapData::new(root.text().to_owned(), root);
    mindmap.set_updated_at(Some(import_timestamp()));
    Ok(Imported::new(mindmap))
}

fn push_node_xml(
    node: &MindmapNode,
    position: Option<&str>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(depth + 1);
    let mut open = format!("{indent}<node");
    if !node.id().is_empty() {
        open.push_str(&format!(" ID=\"{}\"", escape_xml(node.id())));
    }
    open.push_str(&format!(" TEXT=\"{}\"", escape_xml(node.text())));
    if let Some(position) = position {
        open.push_str(&format!(" POSITION=\"{position}\""));
    }
    if let Some(color) = node.color() {
        open.push_str(&format!(" COLOR=\"{}\"", escape_xml(color)));
    }
    if node.collapsed() == Some(true) {
        open.push_str(" FOLDED=\"true\"");
    }

    let children = node.children();
    if children.is_empty() {
        open.push_str("/>");
        lines.push(open);
        return;
    }

    open.push('>');
    lines.push(open);
    for (index, child) in children.iter().enumerate() {
        // Only the root's direct children are placed; FreeMind inherits the side below that.
        let child_position = if depth == 0 {
            Some(if index % 2 == 0 { "right" } else { "left" })
        } else {
            None
        };
        push_node_xml(child, child_position, depth + 1, lines);
    }
    lines.push(format!("{indent}</node>"));
}

/// Export as a FreeMind map. All attribute values are XML-escaped.
pub fn export_freemind(data: &MindmapData) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_owned(),
        format!(r#"<map version="{MAP_VERSION}">"#),
    ];
    push_node_xml(data.root(), None, 0, &mut lines);
    lines.push("</map>".to_owned());
    lines.join("\n")
}
