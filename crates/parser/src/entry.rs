//! Field entries extracted from documentation list items
//!
//! Provider docs describe each field with a single list item following the
//! idiom `name - (Optional|Required[, DEPRECATED]) Description`.

use regex::Regex;
use std::sync::LazyLock;

static ENTRY_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<name>[-_A-Za-z0-9]+) - \(?(?P<modifier>Optional|Required)?(?:[, ]+)?(?P<deprecated>DEPRECATED)?\)?(?:[ ]*)(?P<description>.*$)",
    )
    .expect("entry format regex is valid")
});

/// A field as documented, before schema reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub optional: bool,
    pub deprecated: bool,
    pub description: String,
}

/// Extract a field entry from the flattened text of one list item.
///
/// Returns `None` when the text does not follow the field idiom; such items
/// are ordinary prose and are skipped.
pub fn extract_entry(text: &str) -> Option<RawEntry> {
    let caps = ENTRY_FORMAT.captures(text)?;
    let name = caps.name("name")?.as_str();
    if name.is_empty() {
        return None;
    }

    Some(RawEntry {
        name: name.to_string(),
        optional: caps.name("modifier").map(|m| m.as_str()) == Some("Optional"),
        deprecated: caps.name("deprecated").is_some(),
        description: caps
            .name("description")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_entry() {
        let entry = extract_entry("name - (Required) The name of the secret.").unwrap();
        assert_eq!(
            entry,
            RawEntry {
                name: "name".to_string(),
                optional: false,
                deprecated: false,
                description: "The name of the secret.".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_deprecated_entry() {
        let entry = extract_entry("tags - (Optional, DEPRECATED) A map of tags.").unwrap();
        assert_eq!(entry.name, "tags");
        assert!(entry.optional);
        assert!(entry.deprecated);
        assert_eq!(entry.description, "A map of tags.");
    }

    #[test]
    fn test_deprecated_without_modifier() {
        let entry = extract_entry("policy - (DEPRECATED) Use the policy resource.").unwrap();
        assert!(!entry.optional);
        assert!(entry.deprecated);
        assert_eq!(entry.description, "Use the policy resource.");
    }

    #[test]
    fn test_attribute_without_modifier() {
        let entry = extract_entry("arn - ARN of the secret.").unwrap();
        assert_eq!(entry.name, "arn");
        assert!(!entry.optional);
        assert!(!entry.deprecated);
        assert_eq!(entry.description, "ARN of the secret.");
    }

    #[test]
    fn test_hyphenated_name() {
        let entry = extract_entry("kms-key_id - (Optional) Key.").unwrap();
        assert_eq!(entry.name, "kms-key_id");
    }

    #[test]
    fn test_empty_description() {
        let entry = extract_entry("id - ").unwrap();
        assert_eq!(entry.name, "id");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_prose_is_skipped() {
        assert!(extract_entry("This resource supports the following arguments:").is_none());
        assert!(extract_entry("").is_none());
    }
}
