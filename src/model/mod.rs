// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A mind map is a titled, single-rooted tree of owned nodes. There are no back-pointers, so
//! trees are acyclic by construction.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod mindmap;
pub mod node;
pub mod schema;

pub use ids::{ensure_node_ids, generate_node_id, generate_sheet_id};
pub use mindmap::MindmapData;
pub use node::MindmapNode;
pub use schema::mindmap_json_schema;
