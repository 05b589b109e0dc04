// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! XMind JSON (the `content.json` sheet list, not the zipped `.xmind` archive).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{import_timestamp, parse_json, Imported, JsonParseError, MAX_JSON_NESTING};
use crate::model::{generate_node_id, generate_sheet_id, MindmapData, MindmapNode};

const UNTITLED: &str = "Untitled";
const FILL_PROPERTY: &str = "svg:fill";
const FOLDED_BRANCH: &str = "folded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XMindImportError {
    ArchiveNotSupported,
    InvalidJson { reason: String },
    TooDeep { limit: usize },
    NoSheets,
    MissingRootTopic,
}

impl fmt::Display for XMindImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArchiveNotSupported => f.write_str(
                "XMind archive format not yet supported. Use XMind JSON export.",
            ),
            Self::InvalidJson { reason } => write!(f, "XMind parse error: {reason}"),
            Self::TooDeep { limit } => {
                write!(f, "XMind parse error: nesting deeper than {limit} levels")
            }
            Self::NoSheets => f.write_str("XMind parse error: no sheets found"),
            Self::MissingRootTopic => f.write_str("Invalid XMind JSON: missing rootTopic"),
        }
    }
}

impl std::error::Error for XMindImportError {}

impl From<serde_json::Error> for XMindImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson { reason: err.to_string() }
    }
}

impl From<JsonParseError> for XMindImportError {
    fn from(err: JsonParseError) -> Self {
        match err {
            JsonParseError::TooDeep => Self::TooDeep { limit: MAX_JSON_NESTING },
            JsonParseError::Syntax(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XMindExportError {
    Serialize { reason: String },
}

impl fmt::Display for XMindExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { reason } => write!(f, "failed to serialize XMind sheet: {reason}"),
        }
    }
}

impl std::error::Error for XMindExportError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XMindSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    root_topic: XMindTopic,
    #[serde(default)]
    extensions: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct XMindTopic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<XMindChildren>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<XMindStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct XMindChildren {
    #[serde(default)]
    attached: Vec<XMindTopic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct XMindStyle {
    #[serde(default)]
    properties: BTreeMap<String, Value>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl XMindTopic {
    fn into_node(self) -> MindmapNode {
        let XMindTopic { id, title, children, style, branch } = self;

        let mut node = MindmapNode::new(
            non_empty(id).unwrap_or_else(generate_node_id),
            non_empty(title).unwrap_or_else(|| UNTITLED.to_owned()),
        );

        let color = style
            .and_then(|mut style| style.properties.remove(FILL_PROPERTY))
            .and_then(|fill| fill.as_str().map(str::to_owned));
        node.set_color(color);
        if branch.as_deref() == Some(FOLDED_BRANCH) {
            node.set_collapsed(Some(true));
        }

        let children = children
            .map(|children| children.attached)
            .unwrap_or_default()
            .into_iter()
            .map(XMindTopic::into_node)
            .collect::<Vec<_>>();
        if !children.is_empty() {
            node.set_children(Some(children));
        }
        node
    }

    fn from_node(node: &MindmapNode) -> Self {
        let id = if node.id().is_empty() { generate_node_id() } else { node.id().to_owned() };
        let children = node.child_list().map(|children| XMindChildren {
            attached: children.iter().map(XMindTopic::from_node).collect(),
        });
        let style = node.color().map(|color| XMindStyle {
            properties: BTreeMap::from([(FILL_PROPERTY.to_owned(), Value::from(color))]),
        });
        let branch = (node.collapsed() == Some(true)).then(|| FOLDED_BRANCH.to_owned());

        Self { id: Some(id), title: Some(node.text().to_owned()), children, style, branch }
    }
}

/// Pick the first sheet of a sheet list, or the value itself for a single sheet object.
fn first_sheet(value: Value) -> Result<Value, XMindImportError> {
    let sheet = match value {
        Value::Array(sheets) => sheets.into_iter().next().ok_or(XMindImportError::NoSheets)?,
        other => other,
    };
    let has_root_topic = sheet.get("rootTopic").is_some_and(|topic| !topic.is_null());
    if !has_root_topic {
        return Err(XMindImportError::MissingRootTopic);
    }
    Ok(sheet)
}

/// Import XMind JSON: a sheet array (first sheet wins) or a single sheet object.
///
/// Topic ids are kept when present. `style.properties["svg:fill"]` maps to the node color and
/// `branch: "folded"` to the collapsed hint.
pub fn import_xmind(content: &str) -> Result<Imported, XMindImportError> {
    let value = parse_json(content)?;
    let sheet: XMindSheet = serde_json::from_value(first_sheet(value)?)?;

    let sheet_title = non_empty(sheet.title);
    let root = sheet.root_topic.into_node();
    let title = sheet_title.unwrap_or_else(|| root.text().to_owned());

    let mut mindmap = MindmapData::new(title, root);
    mindmap.set_updated_at(Some(import_timestamp()));
    Ok(Imported::new(mindmap))
}

/// Export as an XMind JSON sheet list with a single sheet.
pub fn export_xmind(data: &MindmapData) -> Result<String, XMindExportError> {
    let sheet = XMindSheet {
        id: Some(generate_sheet_id()),
        title: Some(data.title().to_owned()),
        root_topic: XMindTopic::from_node(data.root()),
        extensions: Vec::new(),
    };
    serde_json::to_string_pretty(&[sheet])
        .map_err(|err| XMindExportError::Serialize { reason: err.to_string() })
}

#[cfg(test)]
mod tests {
    use super::{export_xmind, import_xmind, XMindImportError};
    use crate::format::MAX_JSON_NESTING;
    use crate::model::fixtures::{mindmap_chain, mindmap_small};
    use crate::model::{MindmapData, MindmapNode};

    const SHEETS: &str = r#"[
        {
            "id": "sheet-1",
            "title": "Sheet 1",
            "rootTopic": {
                "id": "topic-1",
                "title": "Central Topic",
                "children": {
                    "attached": [
                        {"id": "topic-2", "title": "Branch 1"},
                        {"title": "Branch 2", "children": {"attached": [{"title": ""}]}}
                    ]
                }
            }
        },
        {"title": "Ignored", "rootTopic": {"title": "Other"}}
    ]"#;

    #[test]
    fn imports_first_sheet() {
        let imported = import_xmind(SHEETS).unwrap();
        let root = imported.mindmap.root();

        assert_eq!(imported.mindmap.title(), "Sheet 1");
        assert_eq!(root.text(), "Central Topic");
        assert_eq!(root.id(), "topic-1");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].id(), "topic-2");
        assert!(root.children()[1].id().starts_with("node_"));
        assert_eq!(root.children()[1].children()[0].text(), "Untitled");
        assert!(root.children()[0].child_list().is_none());
    }

    #[test]
    fn accepts_single_sheet_object_and_falls_back_to_root_title() {
        let imported = import_xmind(r#"{"rootTopic": {"title": "Solo"}}"#).unwrap();
        assert_eq!(imported.mindmap.title(), "Solo");
    }

    #[test]
    fn reads_fill_color_and_folded_branch() {
        let json = r##"{"rootTopic": {
            "title": "R",
            "branch": "folded",
            "style": {"properties": {"svg:fill": "#abcdef", "fo:font-size": "12pt"}}
        }}"##;
        let root = import_xmind(json).unwrap().mindmap.into_root();
        assert_eq!(root.color(), Some("#abcdef"));
        assert_eq!(root.collapsed(), Some(true));
    }

    #[test]
    fn reports_distinct_errors() {
        let err = import_xmind(r#"{"invalid": "structure"}"#).unwrap_err();
        assert_eq!(err, XMindImportError::MissingRootTopic);
        assert!(err.to_string().contains("missing rootTopic"));

        assert_eq!(import_xmind("[]").unwrap_err(), XMindImportError::NoSheets);

        let err = import_xmind("{nope").unwrap_err();
        assert!(err.to_string().starts_with("XMind parse error: "));

        let err = import_xmind(r#"{"rootTopic": {"title": 5}}"#).unwrap_err();
        assert!(matches!(err, XMindImportError::InvalidJson { .. }));
    }

    #[test]
    fn archive_error_names_the_json_alternative() {
        assert_eq!(
            XMindImportError::ArchiveNotSupported.to_string(),
            "XMind archive format not yet supported. Use XMind JSON export."
        );
    }

    #[test]
    fn exports_single_sheet_with_attached_children() {
        let out = export_xmind(&mindmap_small()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        let sheets = parsed.as_array().expect("sheet list");
        assert_eq!(sheets.len(), 1);
        assert!(sheets[0]["id"].as_str().is_some_and(|id| id.starts_with("id_")));
        assert_eq!(sheets[0]["title"], "Test Mindmap");
        assert_eq!(sheets[0]["extensions"], serde_json::json!([]));

        let root = &sheets[0]["rootTopic"];
        assert_eq!(root["id"], "root-1");
        assert_eq!(root["title"], "Root Node");
        assert_eq!(root["style"]["properties"]["svg:fill"], "#123456");
        assert_eq!(root["children"]["attached"].as_array().map(Vec::len), Some(2));

        let child_2 = &root["children"]["attached"][1];
        assert_eq!(child_2["children"]["attached"], serde_json::json!([]));
        let grandchild = &root["children"]["attached"][0]["children"]["attached"][0];
        assert!(grandchild.get("children").is_none());
        assert!(grandchild.get("style").is_none());
    }

    #[test]
    fn export_synthesizes_missing_topic_ids() {
        let data = MindmapData::new("T", MindmapNode::new("", "R"));
        let parsed: serde_json::Value =
            serde_json::from_str(&export_xmind(&data).unwrap()).unwrap();
        assert!(parsed[0]["rootTopic"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[test]
    fn round_trip_keeps_ids_texts_colors_and_folding() {
        let mut data = mindmap_small();
        data.root_mut().children_mut()[0].set_collapsed(Some(true));

        let imported = import_xmind(&export_xmind(&data).unwrap()).unwrap();
        let root = imported.mindmap.root();

        assert_eq!(imported.mindmap.title(), "Test Mindmap");
        assert_eq!(root.id(), "root-1");
        assert_eq!(root.color(), Some("#123456"));
        assert_eq!(root.children()[0].collapsed(), Some(true));
        assert_eq!(root.children()[0].children()[0].text(), "Grandchild 1");
    }

    #[test]
    fn deep_chains_round_trip() {
        let data = mindmap_chain(150);
        let imported = import_xmind(&export_xmind(&data).unwrap()).expect("deep import");

        let mut node = imported.mindmap.root();
        for level in 0..150 {
            assert_eq!(node.text(), format!("Level {level}"));
            node = &node.children()[0];
        }
        assert_eq!(node.id(), "n150");
    }

    #[test]
    fn nesting_past_the_bound_is_reported() {
        let depth = MAX_JSON_NESTING + 1;
        let json = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let err = import_xmind(&json).unwrap_err();
        assert_eq!(err, XMindImportError::TooDeep { limit: MAX_JSON_NESTING });
    }
}
