//! Built-in registry of providers whose documentation Terrawrap understands

use crate::{GeneratorError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Location and version of a provider's documentation bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    /// Provider identifier (e.g., "aws")
    pub name: &'static str,
    /// Pinned release tag (e.g., "v4.29.0")
    pub version: &'static str,
    pub repository_base: &'static str,
    pub repository_name: &'static str,
    /// Documentation directory inside the repository archive
    pub docs_base_path: &'static str,
}

const PROVIDERS: &[ProviderInfo] = &[ProviderInfo {
    name: "aws",
    version: "v4.29.0",
    repository_base: "https://github.com/hashicorp",
    repository_name: "terraform-provider-aws",
    docs_base_path: "website/docs",
}];

impl ProviderInfo {
    /// Find a supported provider by name
    pub fn lookup(name: &str) -> Result<&'static ProviderInfo> {
        PROVIDERS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                GeneratorError::Provider(format!("failed to locate support for provider {}", name))
            })
    }

    /// Identify the provider owning a resource type (e.g. `aws_s3_bucket` -> aws)
    pub fn for_resource_type(resource_type: &str) -> Result<&'static ProviderInfo> {
        let name = provider_name_from_resource_type(resource_type).ok_or_else(|| {
            GeneratorError::Provider(format!(
                "failed to identify provider from resource type {}; ensure the resource type \
                 matches the provider format (e.g. aws_secretsmanager_secret)",
                resource_type
            ))
        })?;
        Self::lookup(name)
    }

    /// Release version without its leading `v`
    pub fn bare_version(&self) -> &str {
        self.version.strip_prefix('v').unwrap_or(self.version)
    }

    /// URL of the release archive containing the docs
    pub fn archive_url(&self) -> String {
        format!(
            "{}/{}/archive/refs/tags/{}.zip",
            self.repository_base, self.repository_name, self.version
        )
    }

    /// Path of the markdown page documenting `resource_type`, relative to an
    /// extracted archive root such as `provider_docs/aws/v4.29.0`
    pub fn resource_doc_path(&self, docs_root: &Path, resource_type: &str) -> PathBuf {
        docs_root
            .join(format!("{}-{}", self.repository_name, self.bare_version()))
            .join(self.docs_base_path)
            .join("r")
            .join(format!(
                "{}.html.markdown",
                docerize_resource_type(resource_type)
            ))
    }
}

/// Leading provider segment of a resource type, if it has one
pub fn provider_name_from_resource_type(resource_type: &str) -> Option<&str> {
    let (provider, _) = resource_type.split_once('_')?;
    if provider.is_empty() || !provider.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(provider)
}

/// Strip the provider prefix to match documentation file names
/// (`aws_secretsmanager_secret` -> `secretsmanager_secret`)
pub fn docerize_resource_type(resource_type: &str) -> &str {
    match provider_name_from_resource_type(resource_type) {
        Some(provider) => &resource_type[provider.len() + 1..],
        None => resource_type,
    }
}
