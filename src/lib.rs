// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mindweave: mind map import, export and validation.
//!
//! A mind map is a titled tree of text nodes ([`model::MindmapData`]). It can be read from JSON,
//! Markdown outlines, FreeMind `.mm`, XMind JSON and indented plain text, and written back as
//! JSON, Markdown, FreeMind or XMind JSON.

pub mod export;
pub mod format;
pub mod import;
pub mod model;
pub mod validate;

pub use export::{
    export_mindmap, export_mindmap_as, sanitize_filename, ExportError, ExportOptions, ExportResult,
};
pub use format::{detect_format, ExportFormat, ImportFormat, Imported, ParseFormatError};
pub use import::{
    import_mindmap, import_mindmap_bytes, import_mindmap_from_file, ImportError, ImportOptions,
    ImportReport,
};
pub use model::{mindmap_json_schema, MindmapData, MindmapNode};
pub use validate::{validate_mindmap, validate_mindmap_value, ValidationReport};
