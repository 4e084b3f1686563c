//! Markdown document tree
//!
//! Parses markdown with comrak and keeps only the block structure the
//! extraction walk needs: headings (with auto-generated ids), lists, list
//! items, and paragraphs, each carrying its flattened inline text.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use std::collections::HashMap;

/// Block kinds the extraction walk distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading { level: u8 },
    List,
    ListItem,
    Paragraph,
    Other,
}

/// A block node with its flattened text and block children in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    pub kind: NodeKind,
    /// Heading identifier slug (headings only)
    pub id: Option<String>,
    /// Inline text with markup removed; for list items, nested lists are excluded
    pub text: String,
    pub children: Vec<DocNode>,
}

impl DocNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            id: None,
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn heading(level: u8, id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::new(NodeKind::Heading { level })
        }
    }

    pub fn list(items: Vec<DocNode>) -> Self {
        Self {
            children: items,
            ..Self::new(NodeKind::List)
        }
    }

    pub fn list_item(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::new(NodeKind::ListItem)
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, NodeKind::Heading { .. })
    }
}

/// Parse markdown source into a block tree rooted at a `Document` node
pub fn parse_markdown(source: &str) -> DocNode {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut slugs = SlugRegistry::default();
    convert_node(root, &mut slugs)
}

fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

fn convert_node<'a>(node: &'a AstNode<'a>, slugs: &mut SlugRegistry) -> DocNode {
    let kind = match &node.data.borrow().value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Heading(heading) => NodeKind::Heading {
            level: heading.level,
        },
        NodeValue::List(_) => NodeKind::List,
        NodeValue::Item(_) => NodeKind::ListItem,
        NodeValue::Paragraph => NodeKind::Paragraph,
        _ => NodeKind::Other,
    };

    let mut doc_node = DocNode::new(kind);

    match kind {
        NodeKind::Heading { .. } => {
            doc_node.text = inline_text(node);
            doc_node.id = Some(slugs.register(&doc_node.text));
        }
        NodeKind::Paragraph => doc_node.text = inline_text(node),
        NodeKind::ListItem => doc_node.text = item_text(node),
        _ => {}
    }

    doc_node.children = node
        .children()
        .filter(|child| child.data.borrow().value.block())
        .map(|child| convert_node(child, slugs))
        .collect();

    doc_node
}

/// Text of a list item's own content, skipping nested lists
fn item_text<'a>(node: &'a AstNode<'a>) -> String {
    node.children()
        .filter(|child| !matches!(child.data.borrow().value, NodeValue::List(_)))
        .map(inline_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_inline_text(node, &mut out);
    out.trim().to_string()
}

fn collect_inline_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        NodeValue::HtmlInline(_) => {}
        _ => {
            for child in node.children() {
                collect_inline_text(child, out);
            }
        }
    }
}

/// Generates heading ids, disambiguating repeats with numeric suffixes
#[derive(Debug, Default)]
struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    fn register(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        slug
    }
}

/// Heading text to identifier: lowercase alphanumerics, whitespace as `-`,
/// `-` and `_` kept, everything else dropped
pub fn slugify(text: &str) -> String {
    let slug: String = text
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c.to_lowercase().next().unwrap_or(c))
            } else if c.is_whitespace() {
                Some('-')
            } else if c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    if slug.is_empty() {
        "heading".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Argument Reference"), "argument-reference");
        assert_eq!(slugify("Attributes Reference"), "attributes-reference");
        assert_eq!(slugify("Resource: aws_s3_bucket"), "resource-aws_s3_bucket");
        assert_eq!(slugify("  !!  "), "heading");
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let doc = parse_markdown("# Title\n\n## Example\n\n## Example\n");
        let ids: Vec<_> = doc
            .children
            .iter()
            .filter_map(|n| n.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["title", "example", "example-1"]);
    }

    #[test]
    fn test_headings_and_lists() {
        let source = "# Resource: aws_s3_bucket\n\n## Argument Reference\n\n* `bucket` - (Optional) Name of the bucket.\n* `acl` - (Optional) The [canned ACL](https://example.com) to apply.\n";
        let doc = parse_markdown(source);
        assert_eq!(doc.kind, NodeKind::Document);

        let kinds: Vec<_> = doc.children.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Heading { level: 1 },
                NodeKind::Heading { level: 2 },
                NodeKind::List
            ]
        );

        let list = &doc.children[2];
        let texts: Vec<_> = list.children.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "bucket - (Optional) Name of the bucket.",
                "acl - (Optional) The canned ACL to apply."
            ]
        );
    }

    #[test]
    fn test_item_text_excludes_nested_list() {
        let source = "* `rule` - (Optional) A rule.\n  with a continuation\n    * `days` - (Required) Days.\n";
        let doc = parse_markdown(source);
        let item = &doc.children[0].children[0];
        assert_eq!(item.kind, NodeKind::ListItem);
        assert_eq!(item.text, "rule - (Optional) A rule. with a continuation");

        let nested = item
            .children
            .iter()
            .find(|n| n.kind == NodeKind::List)
            .expect("nested list");
        assert_eq!(nested.children[0].text, "days - (Required) Days.");
    }

    #[test]
    fn test_front_matter_is_not_content() {
        let source = "---\nsubcategory: \"Secrets Manager\"\n---\n\n# Resource: aws_secretsmanager_secret\n";
        let doc = parse_markdown(source);
        let first_heading = doc.children.iter().find(|n| n.is_heading()).unwrap();
        assert_eq!(
            first_heading.id.as_deref(),
            Some("resource-aws_secretsmanager_secret")
        );
    }
}
