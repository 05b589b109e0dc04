// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mind-map format parsing/export.
//!
//! One module per on-disk grammar. Importers never panic on malformed input; each returns a
//! format-specific error whose `Display` is the user-facing message.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::model::MindmapData;

pub mod detect;
pub mod freemind;
pub mod json;
pub mod markdown;
mod outline;
pub mod text;
pub mod xmind;
pub mod xml;

pub use detect::{detect_format, detect_format_bytes};
pub use freemind::{export_freemind, import_freemind, FreeMindImportError};
pub use json::{export_json, import_json, JsonExportError, JsonImportError};
pub use markdown::{export_markdown, import_markdown};
pub use text::{import_text, TextImportError};
pub use xmind::{export_xmind, import_xmind, XMindExportError, XMindImportError};

/// Grammars accepted by the importers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportFormat {
    Json,
    Markdown,
    FreeMind,
    XMind,
    Text,
}

impl ImportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::FreeMind => "freemind",
            Self::XMind => "xmind",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" => Ok(Self::Markdown),
            "freemind" => Ok(Self::FreeMind),
            "xmind" => Ok(Self::XMind),
            "text" => Ok(Self::Text),
            _ => Err(ParseFormatError::UnsupportedImport { name: s.to_owned() }),
        }
    }
}

/// Formats the exporter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Markdown,
    FreeMind,
    XMind,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::FreeMind => "freemind",
            Self::XMind => "xmind",
        }
    }

    /// Canonical file extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Markdown => ".md",
            Self::FreeMind => ".mm",
            Self::XMind => ".xmind.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json | Self::XMind => "application/json",
            Self::Markdown => "text/markdown",
            Self::FreeMind => "application/x-freemind",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" => Ok(Self::Markdown),
            "freemind" => Ok(Self::FreeMind),
            "xmind" => Ok(Self::XMind),
            _ => Err(ParseFormatError::UnsupportedExport { name: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFormatError {
    UnsupportedImport { name: String },
    UnsupportedExport { name: String },
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedImport { name } => write!(f, "Unsupported format: {name}"),
            Self::UnsupportedExport { name } => write!(f, "Unsupported export format: {name}"),
        }
    }
}

impl std::error::Error for ParseFormatError {}

/// A successfully imported mind map plus non-fatal findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    pub mindmap: MindmapData,
    pub warnings: Vec<String>,
}

impl Imported {
    pub fn new(mindmap: MindmapData) -> Self {
        Self { mindmap, warnings: Vec::new() }
    }
}

/// Deepest `{`/`[` nesting the JSON-based importers parse.
///
/// A JSON document spends two levels per node generation and an XMind sheet list three, so this
/// admits trees roughly 250 levels deep as JSON and 170 as XMind.
pub const MAX_JSON_NESTING: usize = 512;

#[derive(Debug)]
pub(crate) enum JsonParseError {
    TooDeep,
    Syntax(serde_json::Error),
}

impl From<serde_json::Error> for JsonParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax(err)
    }
}

/// Bracket nesting check that skips over string literals.
fn exceeds_nesting(content: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in content.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Parse JSON bounded by [`MAX_JSON_NESTING`] instead of serde_json's fixed recursion limit,
/// which deep but valid trees outgrow.
pub(crate) fn parse_json(content: &str) -> Result<Value, JsonParseError> {
    if exceeds_nesting(content, MAX_JSON_NESTING) {
        return Err(JsonParseError::TooDeep);
    }

    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// `updatedAt` stamp applied to freshly imported trees.
pub(crate) fn import_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
