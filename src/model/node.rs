// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single labeled node of a mind map.
///
/// Children are owned and ordered. `children: None` and `children: Some(vec![])` are both valid
/// leaves; JSON export keeps the distinction.
///
/// `id` and `text` default to the empty string when absent on input. An empty value means
/// "missing" and is reported by validation rather than rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MindmapNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<MindmapNode>>,
}

impl MindmapNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: None,
            collapsed: None,
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<MindmapNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color<T: Into<String>>(&mut self, color: Option<T>) {
        self.color = color.map(Into::into);
    }

    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: Option<bool>) {
        self.collapsed = collapsed;
    }

    /// Children in order; empty for leaves regardless of how the leaf is represented.
    pub fn children(&self) -> &[MindmapNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn children_mut(&mut self) -> &mut [MindmapNode] {
        self.children.as_deref_mut().unwrap_or(&mut [])
    }

    /// The raw children list, `None` when the node carries no list at all.
    pub fn child_list(&self) -> Option<&[MindmapNode]> {
        self.children.as_deref()
    }

    pub fn set_children(&mut self, children: Option<Vec<MindmapNode>>) {
        self.children = children;
    }

    pub fn push_child(&mut self, child: MindmapNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(MindmapNode::node_count).sum::<usize>()
    }
}
