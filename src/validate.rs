// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural checks for mind maps.
//!
//! Validation accumulates every finding instead of stopping at the first one. Node paths use
//! `root`, `root.children[0]`, `root.children[0].children[2]` and so on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{MindmapData, MindmapNode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }
}

fn check_title(title: &str, errors: &mut Vec<String>) {
    if title.is_empty() {
        errors.push("Missing title".to_owned());
    }
}

fn check_root(root: &MindmapNode, errors: &mut Vec<String>) {
    if root.text().is_empty() {
        errors.push("Root node missing text".to_owned());
    }
    check_node(root, "root", errors);
}

fn check_node(node: &MindmapNode, path: &str, errors: &mut Vec<String>) {
    if node.id().is_empty() {
        errors.push(format!("Node at {path} missing id"));
    }
    if node.text().is_empty() {
        errors.push(format!("Node at {path} missing text"));
    }
    for (index, child) in node.children().iter().enumerate() {
        check_node(child, &format!("{path}.children[{index}]"), errors);
    }
}

pub fn validate_mindmap(data: &MindmapData) -> ValidationReport {
    let mut errors = Vec::new();
    check_title(data.title(), &mut errors);
    check_root(data.root(), &mut errors);
    ValidationReport::from_errors(errors)
}

/// Validate an untyped document, e.g. one loaded from storage, where `root` may be absent or
/// not shaped like a node at all.
pub fn validate_mindmap_value(value: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    check_title(value.get("title").and_then(Value::as_str).unwrap_or_default(), &mut errors);

    match value.get("root").filter(|root| root.is_object()) {
        None => errors.push("Missing root node".to_owned()),
        Some(root) => match MindmapNode::deserialize(root) {
            Ok(root) => check_root(&root, &mut errors),
            Err(err) => errors.push(format!("Malformed root node: {err}")),
        },
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{validate_mindmap, validate_mindmap_value};
    use crate::model::fixtures::{mindmap_chain, mindmap_small};
    use crate::model::{MindmapData, MindmapNode};

    #[test]
    fn well_formed_tree_is_valid() {
        let report = validate_mindmap(&mindmap_small());
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(validate_mindmap(&mindmap_chain(20)).valid);
    }

    #[test]
    fn reports_missing_title() {
        let report = validate_mindmap(&MindmapData::new("", MindmapNode::new("r", "Root")));
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Missing title".to_owned()]);
    }

    #[test]
    fn empty_root_text_is_reported_twice() {
        let report = validate_mindmap(&MindmapData::new("T", MindmapNode::new("r", "")));
        assert_eq!(
            report.errors,
            vec!["Root node missing text".to_owned(), "Node at root missing text".to_owned()]
        );
    }

    #[test]
    fn reports_nested_paths_and_accumulates() {
        let root = MindmapNode::new("r", "Root").with_children(vec![
            MindmapNode::new("a", "A"),
            MindmapNode::new("b", "B").with_children(vec![
                MindmapNode::new("", "ok text"),
                MindmapNode::new("c", ""),
            ]),
        ]);
        let report = validate_mindmap(&MindmapData::new("", root));

        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Missing title".to_owned(),
                "Node at root.children[1].children[0] missing id".to_owned(),
                "Node at root.children[1].children[1] missing text".to_owned(),
            ]
        );
    }

    #[test]
    fn untyped_document_without_root() {
        let report = validate_mindmap_value(&json!({"title": "T"}));
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Missing root node".to_owned()]);

        let report = validate_mindmap_value(&json!({"root": "not a node"}));
        assert_eq!(report.errors, vec!["Missing title".to_owned(), "Missing root node".to_owned()]);
    }

    #[test]
    fn untyped_document_with_malformed_root() {
        let report = validate_mindmap_value(&json!({"title": "T", "root": {"text": 7}}));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Malformed root node: "), "{:?}", report.errors);
    }

    #[test]
    fn untyped_document_runs_the_node_walk() {
        let report = validate_mindmap_value(&json!({
            "title": "T",
            "root": {"id": "r", "text": "R", "children": [{"text": "no id"}]}
        }));
        assert_eq!(report.errors, vec!["Node at root.children[0] missing id".to_owned()]);

        let report = validate_mindmap_value(&serde_json::to_value(mindmap_small()).unwrap());
        assert!(report.valid);
    }

    #[test]
    fn report_serializes_as_valid_and_errors() {
        let report = validate_mindmap(&MindmapData::new("", MindmapNode::new("r", "R")));
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"valid": false, "errors": ["Missing title"]})
        );
    }
}
