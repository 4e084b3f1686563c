//! Reconcile documented fields against the provider schema

use crate::entry::RawEntry;
use terrawrap_common::{
    EntryRole, ResolvedEntry, ResourceSchema, SchemaField, SchemaKind, SemanticType,
};
use tracing::warn;

/// Identifier every resource exposes without declaring it in its schema
pub const IMPLICIT_ID_FIELD: &str = "id";

/// Map a schema field to its Terraform type constraint.
///
/// Collections whose element is a plain schema field are resolved
/// recursively; nested blocks become `list(any)` / `map(any)`.
pub fn resolve_type(field: &SchemaField) -> Option<SemanticType> {
    match field.kind {
        SchemaKind::Bool => Some(SemanticType::Bool),
        SchemaKind::Int | SchemaKind::Float => Some(SemanticType::Number),
        SchemaKind::String => Some(SemanticType::String),
        SchemaKind::List | SchemaKind::Set => Some(SemanticType::list_of(resolve_elem(field))),
        SchemaKind::Map => Some(SemanticType::map_of(resolve_elem(field))),
        SchemaKind::Unknown => None,
    }
}

fn resolve_elem(field: &SchemaField) -> SemanticType {
    field
        .elem_field()
        .and_then(resolve_type)
        .unwrap_or(SemanticType::Any)
}

/// Render a field's default as an HCL literal; string fields are quoted
pub fn render_default(field: &SchemaField) -> Option<String> {
    let value = field.default.as_ref().filter(|v| !v.is_null())?;
    let bare = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    if field.kind == SchemaKind::String {
        Some(format!("\"{}\"", bare))
    } else {
        Some(bare)
    }
}

/// Outcome of looking a documented field up in the schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a SchemaField),
    /// The implicit `id` field; absent from schemas by convention
    ImplicitId,
    Missing,
}

/// Resolves documented entries for one resource type
pub struct SchemaReconciler<'a> {
    resource_type: &'a str,
    schema: &'a ResourceSchema,
}

impl<'a> SchemaReconciler<'a> {
    pub fn new(resource_type: &'a str, schema: &'a ResourceSchema) -> Self {
        Self {
            resource_type,
            schema,
        }
    }

    pub fn lookup(&self, name: &str) -> Lookup<'a> {
        match self.schema.field(name) {
            Some(field) => Lookup::Found(field),
            None if name == IMPLICIT_ID_FIELD => Lookup::ImplicitId,
            None => Lookup::Missing,
        }
    }

    /// Attach schema type and default to a raw entry.
    ///
    /// Fields missing from the schema are kept untyped and reported as a
    /// warning, except for the implicit `id`.
    pub fn resolve(&self, raw: RawEntry, role: EntryRole, owner_prefix: &str) -> ResolvedEntry {
        let (resolved_type, default_value) = match self.lookup(&raw.name) {
            Lookup::Found(field) => (resolve_type(field), render_default(field)),
            Lookup::ImplicitId => (None, None),
            Lookup::Missing => {
                warn!(
                    resource_type = self.resource_type,
                    section = ?role,
                    field = %raw.name,
                    "failed to discover schema for field, typing it as string; it may be a nested block"
                );
                (None, None)
            }
        };

        ResolvedEntry {
            name: raw.name,
            optional: raw.optional,
            deprecated: raw.deprecated,
            description: raw.description,
            resolved_type,
            default_value,
            owner_prefix: owner_prefix.to_string(),
        }
    }
}
