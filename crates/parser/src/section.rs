//! Section tracking over the document walk
//!
//! Field entries only count when they appear directly under the
//! "Argument Reference" or "Attribute(s) Reference" sections. Any other
//! heading after the title opens a subsection whose items are skipped until
//! the next reference heading; nested blocks are not extracted.

use crate::document::{DocNode, NodeKind};
use regex::Regex;
use std::sync::LazyLock;
use terrawrap_common::EntryRole;
use tracing::debug;

static ARGUMENT_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)arguments?-+reference").expect("argument section regex is valid")
});

static ATTRIBUTE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)attributes?-+reference").expect("attribute section regex is valid")
});

/// Section the walk is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    /// Title heading not seen yet
    None,
    /// Past the title but outside any reference section
    Other,
    Arguments,
    Attributes,
}

/// What to do with the node just visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Skip,
    /// Extract an entry from the node's text into the given collection
    Extract(EntryRole),
}

/// Classify a heading identifier as a reference section
pub fn classify_heading_id(id: &str) -> Option<SectionTag> {
    if ARGUMENT_REFERENCE.is_match(id) {
        Some(SectionTag::Arguments)
    } else if ATTRIBUTE_REFERENCE.is_match(id) {
        Some(SectionTag::Attributes)
    } else {
        None
    }
}

/// Tracks section state across one traversal; feed it nodes in entering order
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    title_seen: bool,
    section: SectionTag,
    subsection: Option<String>,
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionClassifier {
    pub fn new() -> Self {
        Self {
            title_seen: false,
            section: SectionTag::None,
            subsection: None,
        }
    }

    pub fn section(&self) -> SectionTag {
        self.section
    }

    pub fn subsection(&self) -> Option<&str> {
        self.subsection.as_deref()
    }

    /// Update state for `node` and decide whether it yields an entry
    pub fn visit(&mut self, node: &DocNode, parent: Option<NodeKind>) -> Visit {
        if let NodeKind::Heading { level } = node.kind {
            self.enter_heading(level, node.id.as_deref().unwrap_or_default());
            return Visit::Skip;
        }

        if !self.title_seen || self.subsection.is_some() {
            return Visit::Skip;
        }

        if node.kind != NodeKind::ListItem || parent != Some(NodeKind::List) {
            return Visit::Skip;
        }

        match self.section {
            SectionTag::Arguments => Visit::Extract(EntryRole::Argument),
            SectionTag::Attributes => Visit::Extract(EntryRole::Attribute),
            SectionTag::None | SectionTag::Other => Visit::Skip,
        }
    }

    fn enter_heading(&mut self, level: u8, id: &str) {
        let is_title = !self.title_seen;
        if is_title {
            if level != 1 {
                return;
            }
            self.title_seen = true;
            self.section = SectionTag::Other;
        }

        match classify_heading_id(id) {
            Some(section) => {
                debug!(heading = id, ?section, "entering reference section");
                self.section = section;
                self.subsection = None;
            }
            None if !is_title => {
                debug!(heading = id, "entering subsection");
                self.subsection = Some(id.to_string());
            }
            None => {}
        }
    }
}
