// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::outline::DepthStack;
use super::{import_timestamp, Imported};
use crate::model::{generate_node_id, MindmapData, MindmapNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextImportError {
    EmptyContent,
}

impl fmt::Display for TextImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => f.write_str("Empty content"),
        }
    }
}

impl std::error::Error for TextImportError {}

fn strip_list_marker(trimmed: &str) -> &str {
    trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('*'))
        .map(str::trim_start)
        .unwrap_or(trimmed)
        .trim()
}

/// Import an indentation outline.
///
/// The first non-blank line is the title and root. Every later line nests by its count of
/// leading whitespace characters; one leading `-`/`*` marker is dropped from its text.
pub fn import_text(content: &str) -> Result<Imported, TextImportError> {
    if content.trim().is_empty() {
        return Err(TextImportError::EmptyContent);
    }

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let title = lines.next().map(str::trim).unwrap_or_default().to_owned();

    let mut stack = DepthStack::new(MindmapNode::new(generate_node_id(), title.clone()));
    for line in lines {
        let rest = line.trim_start();
        let indent = line[..line.len() - rest.len()].chars().count();
        let text = strip_list_marker(rest);
        if text.is_empty() {
            continue;
        }

        let depth = isize::try_from(indent).unwrap_or(isize::MAX);
        stack.push(MindmapNode::new(generate_node_id(), text), depth);
    }

    let mut mindmap = MindmapData::new(title, stack.finish());
    mindmap.set_updated_at(Some(import_timestamp()));
    Ok(Imported::new(mindmap))
}
