// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::MindmapNode;

/// Ancestor path used to rebuild a tree from flat, depth-annotated lines.
///
/// Nodes are owned by the stack while they can still receive children. A node is attached to
/// its parent when it is popped, which happens in document order, so sibling order is kept.
/// The root (depth -1) is never popped by [`DepthStack::push`].
#[derive(Debug)]
pub(super) struct DepthStack {
    entries: Vec<(MindmapNode, isize)>,
}

impl DepthStack {
    pub(super) fn new(root: MindmapNode) -> Self {
        Self { entries: vec![(root, -1)] }
    }

    /// Pop every entry whose depth is >= `depth`, then make `node` the new top.
    pub(super) fn push(&mut self, node: MindmapNode, depth: isize) {
        while self.entries.len() > 1 && self.entries.last().is_some_and(|(_, d)| *d >= depth) {
            self.pop_into_parent();
        }
        self.entries.push((node, depth));
    }

    pub(super) fn finish(mut self) -> MindmapNode {
        while self.entries.len() > 1 {
            self.pop_into_parent();
        }
        // The root entry is never popped, so the stack is non-empty here.
        self.entries.pop().map(|(root, _)| root).unwrap_or_default()
    }

    fn pop_into_parent(&mut self) {
        if let Some((node, _)) = self.entries.pop() {
            if let Some((parent, _)) = self.entries.last_mut() {
                parent.push_child(node);
            }
        }
    }
}
