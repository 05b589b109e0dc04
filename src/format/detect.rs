// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ImportFormat;

/// Local file header signature that opens every zip archive, `.xmind` files included.
pub const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

fn format_from_extension(filename: &str) -> Option<ImportFormat> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "json" => Some(ImportFormat::Json),
        "md" | "markdown" => Some(ImportFormat::Markdown),
        "mm" => Some(ImportFormat::FreeMind),
        "xmind" => Some(ImportFormat::XMind),
        "txt" => Some(ImportFormat::Text),
        _ => None,
    }
}

fn sniff_content(content: &str) -> ImportFormat {
    let trimmed = content.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return ImportFormat::Json;
    }
    if content.contains("<?xml") && content.contains("<map") {
        return ImportFormat::FreeMind;
    }
    if content.starts_with('#') || content.lines().any(|line| line.starts_with("- ")) {
        return ImportFormat::Markdown;
    }
    ImportFormat::Text
}

/// Infer the import grammar: the filename extension wins, content sniffing is the fallback.
///
/// Sniffing order: JSON (`{`/`[`), FreeMind (`<?xml` + `<map`), Markdown (leading `#` or a
/// `- ` bullet line), otherwise plain text.
pub fn detect_format(filename: &str, content: &str) -> ImportFormat {
    format_from_extension(filename).unwrap_or_else(|| sniff_content(content))
}

/// Like [`detect_format`] for raw bytes.
///
/// A zip signature means an XMind archive whatever the extension says. Otherwise the extension
/// decides, and unknown extensions report `Text` until the bytes are decoded and sniffed.
pub fn detect_format_bytes(filename: &str, content: &[u8]) -> ImportFormat {
    if content.starts_with(ZIP_MAGIC) {
        return ImportFormat::XMind;
    }
    format_from_extension(filename).unwrap_or(ImportFormat::Text)
}
