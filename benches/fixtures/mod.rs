// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic mind map trees for the benchmarks (no RNG, fixed ids and timestamps).

use mindweave::model::{MindmapData, MindmapNode};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 3 levels, fan-out 3.
    Small,
    /// 4 levels, fan-out 6.
    MediumWide,
    /// 8 levels, fan-out 2, long node texts.
    DeepLongText,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumWide => "medium_wide",
            Self::DeepLongText => "deep_long_text",
        }
    }

    fn shape(self) -> (usize, usize, usize) {
        // (depth, fan-out, text length)
        match self {
            Self::Small => (3, 3, 12),
            Self::MediumWide => (4, 6, 24),
            Self::DeepLongText => (8, 2, 160),
        }
    }
}

/// `Topic <path> ` padded with `x` up to `len` bytes.
fn node_text(path: &str, len: usize) -> String {
    let mut text = format!("Topic {path} ");
    let padding = len.saturating_sub(text.len());
    text.extend(std::iter::repeat('x').take(padding));
    text
}

fn build_node(path: &str, depth: usize, fan_out: usize, text_len: usize) -> MindmapNode {
    let text = node_text(path, text_len);
    let mut node = MindmapNode::new(format!("n{path}"), text);
    if depth == 0 {
        return node;
    }

    let children = (0..fan_out)
        .map(|idx| build_node(&format!("{path}.{idx}"), depth - 1, fan_out, text_len))
        .collect::<Vec<_>>();
    node.set_children(Some(children));
    if depth % 3 == 0 {
        node.set_color(Some("#336699"));
    }
    node
}

pub fn fixture(case: Case) -> MindmapData {
    let (depth, fan_out, text_len) = case.shape();
    let root = build_node("0", depth, fan_out, text_len);
    let mut data = MindmapData::new(format!("Bench {}", case.id()), root);
    data.set_topic(Some("Benchmarks"));
    data.set_created_at(Some("2025-01-15T10:00:00Z"));
    data
}

pub fn checksum_mindmap(data: &MindmapData) -> u64 {
    fn walk(node: &MindmapNode, acc: &mut u64) {
        *acc = acc.wrapping_mul(131).wrapping_add(node.id().len() as u64);
        *acc = acc.wrapping_mul(131).wrapping_add(node.text().len() as u64);
        if let Some(color) = node.color() {
            *acc = acc.wrapping_mul(131).wrapping_add(color.len() as u64);
        }
        for child in node.children() {
            walk(child, acc);
        }
    }

    let mut acc = data.title().len() as u64;
    walk(data.root(), &mut acc);
    acc
}
