// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Synthetic identifiers for nodes that arrive without one.
//!
//! Ids are `<prefix>_<unix-millis>_<suffix>` where the suffix is random base-36. They are unique
//! enough within one tree but are *not* stable across re-imports.

use chrono::Utc;
use rand::Rng;

use super::node::MindmapNode;

const SUFFIX_LEN: usize = 7;

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| std::char::from_digit(rng.gen_range(0..36), 36).unwrap_or('0'))
        .collect()
}

fn generate_id(prefix: &str, suffix_len: usize) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{prefix}_{millis}_{}", random_suffix(suffix_len))
}

/// A fresh node id, e.g. `node_1736935200000_k3f9x0a`.
pub fn generate_node_id() -> String {
    generate_id("node", SUFFIX_LEN)
}

/// A fresh id for exported container objects (XMind sheets).
pub fn generate_sheet_id() -> String {
    generate_id("id", 8)
}

/// Fill every empty `id` in the subtree rooted at `node`.
///
/// Existing ids are never touched, so running this twice is a no-op the second time.
pub fn ensure_node_ids(node: &mut MindmapNode) {
    if node.id().is_empty() {
        node.set_id(generate_node_id());
    }
    for child in node.children_mut() {
        ensure_node_ids(child);
    }
}
