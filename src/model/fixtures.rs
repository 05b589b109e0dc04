// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::mindmap::MindmapData;
use super::node::MindmapNode;

/// Title + topic + three levels, with colors and one empty children list.
pub(crate) fn mindmap_small() -> MindmapData {
    let root = MindmapNode::new("root-1", "Root Node")
        .with_color("#123456")
        .with_children(vec![
            MindmapNode::new("child-1", "Child 1")
                .with_color("#ff0000")
                .with_children(vec![MindmapNode::new("grandchild-1", "Grandchild 1")]),
            MindmapNode::new("child-2", "Child 2").with_children(Vec::new()),
        ]);

    let mut data = MindmapData::new("Test Mindmap", root);
    data.set_topic(Some("Testing"));
    data.set_created_at(Some("2025-01-15T10:00:00Z"));
    data.set_updated_at(Some("2025-01-16T08:30:00Z"));
    data
}

/// A single chain `Level 0 -> Level 1 -> ... -> Level <depth>`.
pub(crate) fn mindmap_chain(depth: usize) -> MindmapData {
    let mut node = MindmapNode::new(format!("n{depth}"), format!("Level {depth}"));
    for level in (0..depth).rev() {
        node = MindmapNode::new(format!("n{level}"), format!("Level {level}"))
            .with_children(vec![node]);
    }
    MindmapData::new("Deep", node)
}
