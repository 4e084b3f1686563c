//! Provider schema: authoritative type and default metadata for resource fields

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Underlying value kind of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
    #[serde(other)]
    Unknown,
}

/// Element of a collection field
///
/// Either another schema field (`list(string)`) or a nested block, which is
/// a resource in its own right and is not resolved further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaElem {
    Field(Box<SchemaField>),
    Block {
        block: BTreeMap<String, SchemaField>,
    },
}

/// Type and default metadata for one resource field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(rename = "type")]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<SchemaElem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl SchemaField {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            elem: None,
            default: None,
        }
    }

    pub fn with_elem(mut self, elem: SchemaField) -> Self {
        self.elem = Some(SchemaElem::Field(Box::new(elem)));
        self
    }

    pub fn with_block(mut self, block: BTreeMap<String, SchemaField>) -> Self {
        self.elem = Some(SchemaElem::Block { block });
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    /// The element field, if the element is a plain schema field
    pub fn elem_field(&self) -> Option<&SchemaField> {
        match &self.elem {
            Some(SchemaElem::Field(field)) => Some(field),
            _ => None,
        }
    }
}

/// Field schemas of a single resource type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSchema {
    fields: BTreeMap<String, SchemaField>,
}

impl ResourceSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, field: SchemaField) {
        self.fields.insert(name.into(), field);
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, SchemaField)> for ResourceSchema {
    fn from_iter<I: IntoIterator<Item = (String, SchemaField)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Resource schemas for every resource type a provider exposes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceSchema>,
}

impl ProviderSchema {
    /// Parse a provider schema from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GeneratorError::Schema(format!("Failed to parse provider schema: {}", e)))
    }

    /// Look up a resource type; absence is fatal for a generation run
    pub fn resource(&self, resource_type: &str) -> Result<&ResourceSchema> {
        self.resources
            .get(resource_type)
            .ok_or_else(|| GeneratorError::ResourceNotFound {
                resource_type: resource_type.to_string(),
            })
    }
}
