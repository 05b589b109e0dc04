// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::{import_timestamp, parse_json, Imported, JsonParseError, MAX_JSON_NESTING};
use crate::model::{ensure_node_ids, generate_node_id, MindmapData, MindmapNode};

const DEFAULT_TITLE: &str = "Imported Mindmap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonImportError {
    InvalidJson { reason: String },
    TooDeep { limit: usize },
    MissingRootOrTitle,
}

impl fmt::Display for JsonImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { reason } => write!(f, "Invalid JSON: {reason}"),
            Self::TooDeep { limit } => {
                write!(f, "Invalid JSON: nesting deeper than {limit} levels")
            }
            Self::MissingRootOrTitle => f.write_str("JSON must contain root or title property"),
        }
    }
}

impl std::error::Error for JsonImportError {}

impl From<serde_json::Error> for JsonImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson { reason: err.to_string() }
    }
}

impl From<JsonParseError> for JsonImportError {
    fn from(err: JsonParseError) -> Self {
        match err {
            JsonParseError::TooDeep => Self::TooDeep { limit: MAX_JSON_NESTING },
            JsonParseError::Syntax(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonExportError {
    Serialize { reason: String },
}

impl fmt::Display for JsonExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { reason } => write!(f, "failed to serialize mind map: {reason}"),
        }
    }
}

impl std::error::Error for JsonExportError {}

/// The full `{title?, topic?, root?, createdAt?}` document shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    root: Option<MindmapNode>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug)]
enum JsonShape {
    Document(JsonDocument),
    BareNode(MindmapNode),
}

fn non_empty_str(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
}

/// Try the accepted shapes in order: full document, then bare node.
fn classify(value: Value) -> Result<JsonShape, JsonImportError> {
    let Value::Object(map) = &value else {
        return Err(JsonImportError::MissingRootOrTitle);
    };

    let has_title = non_empty_str(map.get("title"));
    let has_root = map.get("root").is_some_and(|root| !root.is_null());
    if has_title || has_root {
        return Ok(JsonShape::Document(serde_json::from_value(value)?));
    }

    if non_empty_str(map.get("text")) {
        return Ok(JsonShape::BareNode(serde_json::from_value(value)?));
    }

    Err(JsonImportError::MissingRootOrTitle)
}

fn document_into_mindmap(doc: JsonDocument) -> MindmapData {
    let JsonDocument { title, topic, root, created_at } = doc;

    let title = title
        .filter(|title| !title.is_empty())
        .or_else(|| root.as_ref().map(|root| root.text().to_owned()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let root = root.unwrap_or_else(|| MindmapNode::new(generate_node_id(), title.clone()));

    let mut mindmap = MindmapData::new(title, root);
    mindmap.set_topic(topic);
    mindmap.set_created_at(created_at);
    mindmap
}

/// Import a mind map from JSON.
///
/// Accepts either the exported document shape or a bare root node (`{text, children?}`), in
/// which case the node text doubles as the title. Missing node ids are back-filled. Nesting is
/// bounded by [`MAX_JSON_NESTING`].
pub fn import_json(content: &str) -> Result<Imported, JsonImportError> {
    let value = parse_json(content)?;

    let mut mindmap = match classify(value)? {
        JsonShape::Document(doc) => document_into_mindmap(doc),
        JsonShape::BareNode(node) => MindmapData::new(node.text().to_owned(), node),
    };

    ensure_node_ids(mindmap.root_mut());
    mindmap.set_updated_at(Some(import_timestamp()));
    Ok(Imported::new(mindmap))
}

/// Export as pretty-printed JSON (2-space indent).
///
/// Without metadata, `createdAt`/`updatedAt` are left out.
pub fn export_json(data: &MindmapData, include_metadata: bool) -> Result<String, JsonExportError> {
    let result = if include_metadata {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string_pretty(&data.without_timestamps())
    };
    result.map_err(|err| JsonExportError::Serialize { reason: err.to_string() })
}
