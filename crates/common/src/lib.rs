//! Common types and utilities for Terrawrap
//!
//! This crate contains the intermediate representation shared by the parser,
//! generator, and CLI: provider schema types, the resource model built from
//! documentation, and the error taxonomy.

mod model;
mod provider;
mod schema;
mod types;

pub use model::{EntryCollection, EntryRole, ResolvedEntry, ResourceModel, ResourceParams};
pub use provider::{docerize_resource_type, provider_name_from_resource_type, ProviderInfo};
pub use schema::{ProviderSchema, ResourceSchema, SchemaElem, SchemaField, SchemaKind};
pub use types::SemanticType;

use thiserror::Error;

/// Errors that can occur during module generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("failed to discover resource of type {resource_type} in provider schema")]
    ResourceNotFound { resource_type: String },

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
