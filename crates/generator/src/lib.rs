//! Terraform module generation from resource models
//!
//! This crate renders a `ResourceModel` into the three files of a Terraform
//! module:
//! - main.tf (the resource block wiring every argument to a variable)
//! - variables.tf (one variable per argument)
//! - outputs.tf (one output per attribute)

mod format;
mod header;
mod templates;
mod writer;

pub use format::{tf_string, LINE_LIMIT};
pub use header::{License, ModuleHeader};
pub use writer::{write_artifact, WriteOutcome, APPEND_SEPARATOR};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use terrawrap_common::{GeneratorError, ResolvedEntry, ResourceModel, Result};
use tera::Tera;

/// The generated files of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Resource,
    Variables,
    Outputs,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Resource,
        ArtifactKind::Variables,
        ArtifactKind::Outputs,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Resource => "main.tf",
            ArtifactKind::Variables => "variables.tf",
            ArtifactKind::Outputs => "outputs.tf",
        }
    }

    fn template_name(&self) -> &'static str {
        self.file_name()
    }
}

/// How the caller should place an artifact on disk.
///
/// Artifacts are never overwritten: a module directory accumulates one
/// rendering per generated resource, so create-or-append is the only
/// placement. [`write_artifact`] implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, or append to it if it already exists
    CreateOrAppend,
}

/// One rendered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub file_name: &'static str,
    pub contents: String,
    pub mode: WriteMode,
}

/// Template view of a resolved entry
#[derive(Debug, Serialize)]
struct EntryView<'a> {
    name: &'a str,
    prefixed_name: String,
    value_type: String,
    default_value: Option<&'a str>,
    description: &'a str,
    deprecated: bool,
    /// Spaces aligning `=` across the resource block
    padding: String,
}

impl<'a> EntryView<'a> {
    fn new(entry: &'a ResolvedEntry, max_name_len: usize) -> Self {
        Self {
            name: &entry.name,
            prefixed_name: entry.prefixed_name(),
            value_type: entry.value_type().to_string(),
            default_value: entry.default_value.as_deref(),
            description: &entry.description,
            deprecated: entry.deprecated,
            padding: " ".repeat(max_name_len.saturating_sub(entry.name.len())),
        }
    }
}

/// Module generator
///
/// Renders a ResourceModel into main.tf, variables.tf, and outputs.tf, each
/// starting with the same header block.
pub struct ModuleGenerator {
    header: ModuleHeader,
    tera: Tera,
}

impl ModuleGenerator {
    /// Create a new module generator with the header shared by all files
    pub fn new(header: ModuleHeader) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { header, tera })
    }

    /// Render all three artifacts
    pub fn render(&self, model: &ResourceModel) -> Result<Vec<RenderedArtifact>> {
        ArtifactKind::ALL
            .iter()
            .map(|kind| self.render_artifact(model, *kind))
            .collect()
    }

    /// Render a single artifact
    pub fn render_artifact(
        &self,
        model: &ResourceModel,
        kind: ArtifactKind,
    ) -> Result<RenderedArtifact> {
        let context = self.create_context(model);
        let contents = self
            .tera
            .render(kind.template_name(), &context)
            .map_err(|e| {
                GeneratorError::Template(format!(
                    "Failed to execute {} template: {:?}",
                    kind.template_name(),
                    e
                ))
            })?;

        Ok(RenderedArtifact {
            kind,
            file_name: kind.file_name(),
            contents,
            mode: WriteMode::CreateOrAppend,
        })
    }

    /// Render and write each artifact to `output_dir`.
    ///
    /// Files are written one at a time; a failure stops the run but leaves
    /// files already written in place.
    pub fn generate_to_directory(
        &self,
        model: &ResourceModel,
        output_dir: &Path,
    ) -> Result<Vec<(PathBuf, WriteOutcome)>> {
        fs::create_dir_all(output_dir).map_err(|e| {
            GeneratorError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        let mut written = Vec::new();
        for kind in ArtifactKind::ALL {
            let artifact = self.render_artifact(model, kind)?;
            let outcome = write_artifact(output_dir, &artifact)?;
            written.push((output_dir.join(artifact.file_name), outcome));
        }

        Ok(written)
    }

    /// Create template context from ResourceModel
    fn create_context(&self, model: &ResourceModel) -> tera::Context {
        let max_argument_len = model.arguments.max_name_length();
        let max_attribute_len = model.attributes.max_name_length();

        let arguments: Vec<EntryView> = model
            .arguments
            .iter()
            .map(|e| EntryView::new(e, max_argument_len))
            .collect();
        let attributes: Vec<EntryView> = model
            .attributes
            .iter()
            .map(|e| EntryView::new(e, max_attribute_len))
            .collect();

        let mut context = tera::Context::new();
        context.insert("header", &self.header);
        context.insert("resource_type", &model.resource_type);
        context.insert("resource_name", &model.resource_name);
        context.insert("arguments", &arguments);
        context.insert("attributes", &attributes);
        context
    }
}

/// Generate module files (convenience function)
pub fn generate_module(
    model: &ResourceModel,
    header: ModuleHeader,
    output_path: &str,
) -> Result<Vec<(PathBuf, WriteOutcome)>> {
    let generator = ModuleGenerator::new(header)?;
    generator.generate_to_directory(model, Path::new(output_path))
}
