//! Resource model accumulated from one documentation page

use crate::SemanticType;
use serde::Serialize;
use std::collections::HashSet;

/// Which collection an entry belongs to, and therefore which prefix names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRole {
    /// Input supplied by the module user (a variable)
    #[default]
    Argument,
    /// Value computed by the provider (an output)
    Attribute,
}

/// A documented field reconciled against the provider schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub name: String,
    pub optional: bool,
    pub deprecated: bool,
    pub description: String,
    /// `None` when the schema has no usable type for this field
    pub resolved_type: Option<SemanticType>,
    /// Rendered HCL literal, already quoted for string fields
    pub default_value: Option<String>,
    pub owner_prefix: String,
}

impl ResolvedEntry {
    /// Variable or output name: `<prefix>_<name>`, or the bare name without a prefix
    pub fn prefixed_name(&self) -> String {
        if self.owner_prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.owner_prefix, self.name)
        }
    }

    /// Type expression used in declarations; unresolved fields fall back to `string`
    pub fn value_type(&self) -> SemanticType {
        self.resolved_type.clone().unwrap_or(SemanticType::String)
    }
}

/// Append-only, insertion-ordered collection keyed by entry name
///
/// The first entry recorded under a name wins; later entries with the same
/// name are dropped.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EntryCollection {
    #[serde(skip)]
    role: EntryRole,
    entries: Vec<ResolvedEntry>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl EntryCollection {
    pub fn new(role: EntryRole) -> Self {
        Self {
            role,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn role(&self) -> EntryRole {
        self.role
    }

    /// Append an entry unless its name is already present.
    ///
    /// Returns `true` if the entry was recorded.
    pub fn append(&mut self, entry: ResolvedEntry) -> bool {
        if self.seen.contains(&entry.name) {
            return false;
        }
        self.seen.insert(entry.name.clone());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Length of the longest name, 0 when empty
    pub fn max_name_length(&self) -> usize {
        self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a ResolvedEntry;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Naming parameters for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceParams {
    pub resource_type: String,
    pub resource_name: String,
    pub variable_prefix: String,
    pub attribute_prefix: String,
}

impl ResourceParams {
    /// Parameters with the default `<resource_type>_<resource_name>` prefixes
    pub fn new(resource_type: &str, resource_name: &str) -> Self {
        let prefix = format!("{}_{}", resource_type, resource_name);
        Self {
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            variable_prefix: prefix.clone(),
            attribute_prefix: prefix,
        }
    }

    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = prefix.into();
        self
    }
}

/// Everything extracted for one resource type
#[derive(Debug, Clone, Serialize)]
pub struct ResourceModel {
    pub resource_type: String,
    pub resource_name: String,
    pub variable_prefix: String,
    pub attribute_prefix: String,
    pub arguments: EntryCollection,
    pub attributes: EntryCollection,
}

impl ResourceModel {
    pub fn new(params: ResourceParams) -> Self {
        Self {
            resource_type: params.resource_type,
            resource_name: params.resource_name,
            variable_prefix: params.variable_prefix,
            attribute_prefix: params.attribute_prefix,
            arguments: EntryCollection::new(EntryRole::Argument),
            attributes: EntryCollection::new(EntryRole::Attribute),
        }
    }

    /// Naming prefix applied to entries of the given role
    pub fn prefix_for(&self, role: EntryRole) -> &str {
        match role {
            EntryRole::Argument => &self.variable_prefix,
            EntryRole::Attribute => &self.attribute_prefix,
        }
    }

    pub fn collection_mut(&mut self, role: EntryRole) -> &mut EntryCollection {
        match role {
            EntryRole::Argument => &mut self.arguments,
            EntryRole::Attribute => &mut self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: &str) -> ResolvedEntry {
        ResolvedEntry {
            name: name.to_string(),
            optional: false,
            deprecated: false,
            description: description.to_string(),
            resolved_type: None,
            default_value: None,
            owner_prefix: "aws_s3_bucket_default".to_string(),
        }
    }

    #[test]
    fn test_first_write_wins() {
        let mut args = EntryCollection::new(EntryRole::Argument);
        assert!(args.append(entry("bucket", "first")));
        assert_eq!(args.len(), 1);
        assert!(!args.append(entry("bucket", "second")));
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("bucket").unwrap().description, "first");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = EntryCollection::new(EntryRole::Attribute);
        for name in ["id", "arn", "bucket_domain_name", "arn"] {
            attrs.append(entry(name, ""));
        }
        let names: Vec<&str> = attrs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["id", "arn", "bucket_domain_name"]);
    }

    #[test]
    fn test_max_name_length() {
        let mut args = EntryCollection::new(EntryRole::Argument);
        assert_eq!(args.max_name_length(), 0);
        args.append(entry("acl", ""));
        args.append(entry("force_destroy", ""));
        args.append(entry("tags", ""));
        assert_eq!(args.max_name_length(), 13);
    }

    #[test]
    fn test_prefixed_name() {
        let mut e = entry("name", "");
        assert_eq!(e.prefixed_name(), "aws_s3_bucket_default_name");
        e.owner_prefix.clear();
        assert_eq!(e.prefixed_name(), "name");
    }

    #[test]
    fn test_unresolved_value_type_is_string() {
        assert_eq!(entry("id", "").value_type(), SemanticType::String);
    }

    #[test]
    fn test_default_params() {
        let params = ResourceParams::new("aws_secretsmanager_secret", "default");
        assert_eq!(params.variable_prefix, "aws_secretsmanager_secret_default");
        assert_eq!(params.attribute_prefix, "aws_secretsmanager_secret_default");

        let model = ResourceModel::new(params.with_attribute_prefix(""));
        assert_eq!(model.prefix_for(EntryRole::Argument), "aws_secretsmanager_secret_default");
        assert_eq!(model.prefix_for(EntryRole::Attribute), "");
        assert_eq!(model.arguments.role(), EntryRole::Argument);
        assert_eq!(model.attributes.role(), EntryRole::Attribute);
    }
}
