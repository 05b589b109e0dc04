// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Format-dispatching import entry points.
//!
//! The facade picks a grammar (explicit or detected), runs the matching importer and maps its
//! error into [`ImportError`], whose `Display` is the message shown to users.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::format::detect::ZIP_MAGIC;
use crate::format::{
    detect_format, detect_format_bytes, import_freemind, import_json, import_markdown,
    import_text, import_xmind, FreeMindImportError, ImportFormat, Imported, JsonImportError,
    ParseFormatError, TextImportError, XMindImportError,
};
use crate::model::MindmapData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Grammar to use; detected from the filename and content when `None`.
    pub format: Option<ImportFormat>,
}

impl ImportOptions {
    pub fn with_format(format: ImportFormat) -> Self {
        Self { format: Some(format) }
    }
}

#[derive(Debug)]
pub enum ImportError {
    UnsupportedFormat(ParseFormatError),
    InvalidEncoding { reason: String },
    Json(JsonImportError),
    FreeMind(FreeMindImportError),
    XMind(XMindImportError),
    Text(TextImportError),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(err) => write!(f, "{err}"),
            Self::InvalidEncoding { reason } => write!(f, "Invalid UTF-8 content: {reason}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::FreeMind(err) => write!(f, "{err}"),
            Self::XMind(err) => write!(f, "{err}"),
            Self::Text(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedFormat(err) => Some(err),
            Self::InvalidEncoding { .. } => None,
            Self::Json(err) => Some(err),
            Self::FreeMind(err) => Some(err),
            Self::XMind(err) => Some(err),
            Self::Text(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ParseFormatError> for ImportError {
    fn from(value: ParseFormatError) -> Self {
        Self::UnsupportedFormat(value)
    }
}

impl From<JsonImportError> for ImportError {
    fn from(value: JsonImportError) -> Self {
        Self::Json(value)
    }
}

impl From<FreeMindImportError> for ImportError {
    fn from(value: FreeMindImportError) -> Self {
        Self::FreeMind(value)
    }
}

impl From<XMindImportError> for ImportError {
    fn from(value: XMindImportError) -> Self {
        Self::XMind(value)
    }
}

impl From<TextImportError> for ImportError {
    fn from(value: TextImportError) -> Self {
        Self::Text(value)
    }
}

fn import_with_format(content: &str, format: ImportFormat) -> Result<Imported, ImportError> {
    match format {
        ImportFormat::Json => Ok(import_json(content)?),
        ImportFormat::Markdown => Ok(import_markdown(content)),
        ImportFormat::FreeMind => Ok(import_freemind(content)?),
        ImportFormat::XMind => Ok(import_xmind(content)?),
        ImportFormat::Text => Ok(import_text(content)?),
    }
}

fn log_outcome(result: &Result<Imported, ImportError>, format: ImportFormat) {
    match result {
        Ok(imported) => tracing::debug!(
            %format,
            nodes = imported.mindmap.root().node_count(),
            warnings = imported.warnings.len(),
            "mind map imported"
        ),
        Err(err) => tracing::warn!(%format, error = %err, "mind map import failed"),
    }
}

/// Import text content, detecting the format from `filename` and `content` unless
/// `options.format` pins it.
pub fn import_mindmap(
    content: &str,
    filename: &str,
    options: &ImportOptions,
) -> Result<Imported, ImportError> {
    let format = match options.format {
        Some(format) => format,
        None => {
            let detected = detect_format(filename, content);
            tracing::debug!(filename, format = %detected, "detected import format");
            detected
        }
    };
    tracing::info!(%format, filename, "importing mind map");

    let result = import_with_format(content, format);
    log_outcome(&result, format);
    result
}

/// Import raw file bytes.
///
/// XMind input that is a zip archive (or not text at all) is rejected, since only XMind's JSON
/// export is understood. Everything else must be valid UTF-8 and is handed to
/// [`import_mindmap`], which may still sniff the decoded text.
pub fn import_mindmap_bytes(
    bytes: &[u8],
    filename: &str,
    options: &ImportOptions,
) -> Result<Imported, ImportError> {
    let format = options.format.unwrap_or_else(|| detect_format_bytes(filename, bytes));
    let decoded = std::str::from_utf8(bytes);

    if format == ImportFormat::XMind && (bytes.starts_with(ZIP_MAGIC) || decoded.is_err()) {
        tracing::info!(%format, filename, "importing mind map");
        let err = ImportError::XMind(XMindImportError::ArchiveNotSupported);
        tracing::warn!(%format, error = %err, "mind map import failed");
        return Err(err);
    }

    let content = decoded.map_err(|err| ImportError::InvalidEncoding { reason: err.to_string() })?;
    import_mindmap(content, filename, options)
}

/// Read `path` and import its bytes, using the file name for detection.
pub async fn import_mindmap_from_file(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<Imported, ImportError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::Io { path: path.to_path_buf(), source })?;

    let filename = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
    import_mindmap_bytes(&bytes, filename, options)
}

/// Serializable `{success, mindmap?, error?, warnings?}` outcome for callers that speak JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mindmap: Option<MindmapData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl From<Result<Imported, ImportError>> for ImportReport {
    fn from(value: Result<Imported, ImportError>) -> Self {
        match value {
            Ok(Imported { mindmap, warnings }) => Self {
                success: true,
                mindmap: Some(mindmap),
                error: None,
                warnings: (!warnings.is_empty()).then_some(warnings),
            },
            Err(err) => Self {
                success: false,
                mindmap: None,
                error: Some(err.to_string()),
                warnings: None,
            },
        }
    }
}
