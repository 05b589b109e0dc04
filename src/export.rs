// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::format::{
    export_freemind, export_json, export_markdown, export_xmind, ExportFormat, JsonExportError,
    ParseFormatError, XMindExportError,
};
use crate::model::MindmapData;

const DEFAULT_FILENAME: &str = "mindmap";
const MAX_FILENAME_CHARS: usize = 100;
const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Base name for the output file; the mind map title is used when unset or empty.
    pub filename: Option<String>,
    /// Keep `createdAt`/`updatedAt` in JSON output.
    pub include_metadata: bool,
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self { format, filename: None, include_metadata: true }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub blob: String,
    pub filename: String,
    pub mime_type: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    UnsupportedFormat(ParseFormatError),
    Json(JsonExportError),
    XMind(XMindExportError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::XMind(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedFormat(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::XMind(err) => Some(err),
        }
    }
}

impl From<ParseFormatError> for ExportError {
    fn from(value: ParseFormatError) -> Self {
        Self::UnsupportedFormat(value)
    }
}

impl From<JsonExportError> for ExportError {
    fn from(value: JsonExportError) -> Self {
        Self::Json(value)
    }
}

impl From<XMindExportError> for ExportError {
    fn from(value: XMindExportError) -> Self {
        Self::XMind(value)
    }
}

/// Make `name` safe to use as a file name on every common platform.
///
/// Drops `< > : " / \ | ? *`, turns whitespace runs into `_` and keeps at most 100 characters.
/// Falls back to `mindmap` when nothing is left.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars().filter(|ch| !FORBIDDEN_FILENAME_CHARS.contains(ch)) {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }

    let out = out.chars().take(MAX_FILENAME_CHARS).collect::<String>();
    if out.is_empty() {
        DEFAULT_FILENAME.to_owned()
    } else {
        out
    }
}

fn output_filename(data: &MindmapData, options: &ExportOptions) -> String {
    let base = options
        .filename
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(data.title());
    format!("{}{}", sanitize_filename(base), options.format.extension())
}

/// Serialize `data` in the requested format and name the resulting file.
pub fn export_mindmap(
    data: &MindmapData,
    options: &ExportOptions,
) -> Result<ExportResult, ExportError> {
    let format = options.format;
    let filename = output_filename(data, options);
    tracing::info!(%format, filename = %filename, "exporting mind map");

    let blob = match format {
        ExportFormat::Json => export_json(data, options.include_metadata)?,
        ExportFormat::Markdown => export_markdown(data),
        ExportFormat::FreeMind => export_freemind(data),
        ExportFormat::XMind => export_xmind(data)?,
    };

    Ok(ExportResult { blob, filename, mime_type: format.mime_type() })
}

/// [`export_mindmap`] for a format given by name, e.g. from a command line or tool call.
pub fn export_mindmap_as(
    data: &MindmapData,
    format: &str,
    filename: Option<&str>,
) -> Result<ExportResult, ExportError> {
    let mut options = ExportOptions::new(format.parse::<ExportFormat>()?);
    options.filename = filename.map(str::to_owned);
    export_mindmap(data, &options)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{export_mindmap, export_mindmap_as, sanitize_filename, ExportError, ExportOptions};
    use crate::format::{ExportFormat, ParseFormatError};
    use crate::model::fixtures::mindmap_small;
    use crate::model::{MindmapData, MindmapNode};

    #[fixture]
    fn small() -> MindmapData {
        mindmap_small()
    }

    #[rstest]
    #[case(ExportFormat::Json, "Test_Mindmap.json", "application/json")]
    #[case(ExportFormat::Markdown, "Test_Mindmap.md", "text/markdown")]
    #[case(ExportFormat::FreeMind, "Test_Mindmap.mm", "application/x-freemind")]
    #[case(ExportFormat::XMind, "Test_Mindmap.xmind.json", "application/json")]
    fn names_and_types_every_format(
        small: MindmapData,
        #[case] format: ExportFormat,
        #[case] filename: &str,
        #[case] mime_type: &str,
    ) {
        let result = export_mindmap(&small, &ExportOptions::new(format)).expect("export");
        assert_eq!(result.filename, filename);
        assert_eq!(result.mime_type, mime_type);
        assert!(!result.blob.is_empty());
    }

    #[rstest]
    #[case("File/Name:With*Special?Chars", "FileNameWithSpecialChars")]
    #[case("My  Great\tMap", "My_Great_Map")]
    #[case("<>:\"/\\|?*", "mindmap")]
    #[case("", "mindmap")]
    #[case("a < b", "a_b")]
    fn sanitizes_filenames(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_filename(input), expected);
    }

    #[test]
    fn truncates_long_names_to_100_characters() {
        let long = "ä".repeat(150);
        assert_eq!(sanitize_filename(&long).chars().count(), 100);
    }

    #[test]
    fn special_characters_in_title_are_removed() {
        let data = MindmapData::new("File/Name:With*Special?Chars", MindmapNode::new("r", "R"));
        let result = export_mindmap(&data, &ExportOptions::new(ExportFormat::Json)).unwrap();
        assert_eq!(result.filename, "FileNameWithSpecialChars.json");
    }

    #[test]
    fn empty_title_falls_back_to_default_name() {
        let data = MindmapData::new("", MindmapNode::new("r", "R"));
        let result = export_mindmap(&data, &ExportOptions::new(ExportFormat::Json)).unwrap();
        assert_eq!(result.filename, "mindmap.json");
    }

    #[rstest]
    fn custom_filename_wins_unless_empty(small: MindmapData) {
        let options = ExportOptions::new(ExportFormat::Markdown).with_filename("my export");
        assert_eq!(export_mindmap(&small, &options).unwrap().filename, "my_export.md");

        let options = ExportOptions::new(ExportFormat::Markdown).with_filename("");
        assert_eq!(export_mindmap(&small, &options).unwrap().filename, "Test_Mindmap.md");
    }

    #[rstest]
    fn metadata_flag_reaches_json_export(small: MindmapData) {
        let options = ExportOptions::new(ExportFormat::Json).with_metadata(false);
        let blob = export_mindmap(&small, &options).unwrap().blob;
        assert!(!blob.contains("createdAt"));
        assert!(blob.contains("\"topic\": \"Testing\""));
    }

    #[test]
    fn rendering_formats_are_rejected_by_name() {
        let data = mindmap_small();
        for name in ["svg", "png", "pdf"] {
            let err = export_mindmap_as(&data, name, None).unwrap_err();
            assert_eq!(
                err,
                ExportError::UnsupportedFormat(ParseFormatError::UnsupportedExport {
                    name: name.to_owned()
                })
            );
            assert_eq!(err.to_string(), format!("Unsupported export format: {name}"));
        }
    }

    #[test]
    fn export_by_name_accepts_known_formats() {
        let result = export_mindmap_as(&mindmap_small(), "FreeMind", Some("brain")).unwrap();
        assert_eq!(result.filename, "brain.mm");
    }

    #[test]
    fn freemind_export_escapes_script_text() {
        let data = MindmapData::new(
            "XSS",
            MindmapNode::new("r", "<script>alert('x')</script>"),
        );
        let blob = export_mindmap(&data, &ExportOptions::new(ExportFormat::FreeMind))
            .unwrap()
            .blob;
        assert!(!blob.contains("<script>"));
        assert!(blob.contains("&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;"));
    }
}
