//! Provider schema lookup

use std::fs;
use std::path::Path;
use terrawrap_common::{GeneratorError, ProviderSchema, ResourceSchema, Result};

/// Supplies the schema of a resource type
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    /// Field schemas for `resource_type`; an unknown type is an error
    fn resource_schema(&self, resource_type: &str) -> Result<ResourceSchema>;
}

impl SchemaSource for ProviderSchema {
    fn resource_schema(&self, resource_type: &str) -> Result<ResourceSchema> {
        self.resource(resource_type).cloned()
    }
}

/// Load a provider schema JSON file
pub fn load_provider_schema<P: AsRef<Path>>(path: P) -> Result<ProviderSchema> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        GeneratorError::Schema(format!(
            "Failed to read provider schema {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    ProviderSchema::from_json(&content)
}
