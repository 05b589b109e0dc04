// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;

use super::outline::DepthStack;
use super::{import_timestamp, Imported};
use crate::model::{generate_node_id, MindmapData, MindmapNode};

const DEFAULT_TITLE: &str = "Imported Mindmap";
pub const NO_CHILDREN_WARNING: &str = "No child nodes found in markdown";

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{2,6})\s+(.+)").expect("valid heading regex"))
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s*)[-*]\s+(.+)").expect("valid bullet regex"))
}

/// One content line, classified. Depth 0 is a direct child of the synthetic root.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OutlineLine<'a> {
    Heading { depth: usize, text: &'a str },
    Bullet { depth: usize, text: &'a str },
}

impl<'a> OutlineLine<'a> {
    fn depth(&self) -> usize {
        match self {
            Self::Heading { depth, .. } | Self::Bullet { depth, .. } => *depth,
        }
    }

    fn text(&self) -> &'a str {
        match self {
            Self::Heading { text, .. } | Self::Bullet { text, .. } => text,
        }
    }
}

/// `##`..`######` headings sit at `level - 2`; bullets at half their indentation.
fn classify_line(line: &str) -> Option<OutlineLine<'_>> {
    if let Some(caps) = heading_re().captures(line) {
        let level = caps.get(1)?.as_str().len();
        let text = caps.get(2)?.as_str().trim();
        return Some(OutlineLine::Heading { depth: level - 2, text });
    }
    if let Some(caps) = bullet_re().captures(line) {
        let indent = caps.get(1)?.as_str().chars().count();
        let text = caps.get(2)?.as_str().trim();
        return Some(OutlineLine::Bullet { depth: indent / 2, text });
    }
    None
}

/// Import a Markdown outline.
///
/// The first `# ` line supplies the title and the text of a synthetic root; everything above
/// it is ignored. Headings and bullets share one depth scale, so `## A` followed by `- B`
/// makes `A` and `B` siblings. Blockquotes and other prose are skipped.
///
/// Never fails. A document without outline lines yields a root-only tree and a warning.
pub fn import_markdown(content: &str) -> Imported {
    let lines = content.lines().collect::<Vec<_>>();

    let mut title = DEFAULT_TITLE.to_owned();
    let mut start = 0usize;
    for (idx, line) in lines.iter().enumerate() {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            title = rest.trim().to_owned();
            start = idx + 1;
            break;
        }
    }

    let mut stack = DepthStack::new(MindmapNode::new(generate_node_id(), title.clone()));
    for line in &lines[start..] {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('>') {
            continue;
        }
        let Some(outline) = classify_line(line) else {
            continue;
        };
        if outline.text().is_empty() {
            continue;
        }

        let depth = isize::try_from(outline.depth()).unwrap_or(isize::MAX);
        stack.push(MindmapNode::new(generate_node_id(), outline.text()), depth);
    }
    let root = stack.finish();

    let mut warnings = Vec::new();
    if root.children().is_empty() {
        warnings.push(NO_CHILDREN_WARNING.to_owned());
    }

    let mut mindmap = MindmapData::new(title, root);
    mindmap.set_updated_at(Some(import_timestamp()));
    Imported { mindmap, warnings }
}

fn push_node_lines(node: &MindmapNode, depth: usize, lines: &mut Vec<String>) {
    let prefix = if depth == 0 {
        "## ".to_owned()
    } else {
        format!("{}- ", "  ".repeat(depth - 1))
    };
    lines.push(format!("{prefix}{}", node.text()));

    for child in node.children() {
        push_node_lines(child, depth + 1, lines);
    }
}

fn format_created_at(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(parsed) => parsed.format("%d/%m/%Y, %H:%M:%S").to_string(),
        Err(_) => created_at.to_owned(),
    }
}

/// Export as a Markdown outline.
///
/// ```text
/// # <title>
///
/// > <topic>
///
/// ## <root>
/// - <child>
///   - <grandchild>
/// ```
pub fn export_markdown(data: &MindmapData) -> String {
    let mut lines = Vec::<String>::new();

    lines.push(format!("# {}", data.title()));
    lines.push(String::new());

    if let Some(topic) = data.topic().filter(|topic| !topic.is_empty()) {
        lines.push(format!("> {topic}"));
        lines.push(String::new());
    }

    push_node_lines(data.root(), 0, &mut lines);

    if let Some(created_at) = data.created_at().filter(|created_at| !created_at.is_empty()) {
        lines.push(String::new());
        lines.push("---".to_owned());
        lines.push(format!("*Created: {}*", format_created_at(created_at)));
    }

    lines.join("\n")
}
