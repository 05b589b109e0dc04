// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::{schema_for, Schema};

use super::mindmap::MindmapData;

/// JSON Schema for [`MindmapData`], for producers that build trees programmatically.
pub fn mindmap_json_schema() -> Schema {
    schema_for!(MindmapData)
}
