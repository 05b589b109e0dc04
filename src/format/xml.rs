// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal XML plumbing shared by the XML-based formats.
//!
//! Tree walks go through [`XmlElement`] so they do not depend on a particular parser library.

/// Read-only access to one element of a parsed XML document.
pub trait XmlElement: Sized {
    /// Local tag name (namespace prefix stripped).
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct element children in document order. Text, comments and processing instructions are
    /// skipped.
    fn element_children(&self) -> Vec<Self>;

    /// Direct element children with the given tag name.
    fn children_named(&self, name: &str) -> Vec<Self> {
        self.element_children().into_iter().filter(|child| child.tag_name() == name).collect()
    }
}

impl<'a, 'input> XmlElement for roxmltree::Node<'a, 'input> {
    fn tag_name(&self) -> &str {
        roxmltree::Node::tag_name(self).name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter(roxmltree::Node::is_element).collect()
    }
}

/// Escape a string for use inside a double- or single-quoted attribute value or text content.
///
/// Tabs and line breaks become character references so attribute-value normalization on the
/// reading side cannot fold them into spaces.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(ch),
        }
    }
    out
}
