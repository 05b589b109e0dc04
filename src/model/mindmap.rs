// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::node::MindmapNode;

/// The importable/exportable unit: a titled tree plus optional metadata.
///
/// `title` is independent of `root.text`. Timestamps are ISO-8601 strings and are carried
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MindmapData {
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    root: MindmapNode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl MindmapData {
    pub fn new(title: impl Into<String>, root: MindmapNode) -> Self {
        Self {
            title: title.into(),
            topic: None,
            root,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn set_topic<T: Into<String>>(&mut self, topic: Option<T>) {
        self.topic = topic.map(Into::into);
    }

    pub fn root(&self) -> &MindmapNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut MindmapNode {
        &mut self.root
    }

    pub fn into_root(self) -> MindmapNode {
        self.root
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn set_created_at<T: Into<String>>(&mut self, created_at: Option<T>) {
        self.created_at = created_at.map(Into::into);
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    pub fn set_updated_at<T: Into<String>>(&mut self, updated_at: Option<T>) {
        self.updated_at = updated_at.map(Into::into);
    }

    /// A copy with `createdAt`/`updatedAt` cleared, used when exporting without metadata.
    pub fn without_timestamps(&self) -> Self {
        Self {
            created_at: None,
            updated_at: None,
            ..self.clone()
        }
    }
}
