//! Documentation parsing for Terraform provider resources
//!
//! Turns a provider's hand-written resource page into a `ResourceModel`.
//!
//! ## Extraction Strategy
//!
//! The markdown is parsed into a block tree and walked once in document order:
//! - headings drive a section state machine (Argument Reference, Attribute(s)
//!   Reference, or a skipped subsection)
//! - list items inside a reference section are matched against the
//!   `name - (Optional|Required[, DEPRECATED]) description` idiom
//! - each matched entry is typed from the provider schema and appended to a
//!   first-write-wins collection

pub mod document;
mod entry;
mod reconcile;
mod resource;
mod schema_source;
mod section;

pub use document::{parse_markdown, DocNode, NodeKind};
pub use entry::{extract_entry, RawEntry};
pub use reconcile::{render_default, resolve_type, Lookup, SchemaReconciler, IMPLICIT_ID_FIELD};
pub use resource::{build_model, ResourceDocParser};
pub use schema_source::{load_provider_schema, SchemaSource};
pub use section::{classify_heading_id, SectionClassifier, SectionTag, Visit};

use terrawrap_common::{ResourceModel, ResourceParams, Result};

/// Parse resource documentation against a schema source
///
/// # Arguments
/// * `markdown` - Contents of the resource documentation page
/// * `params` - Resource type, instance name, and naming prefixes
/// * `schemas` - Provider schema lookup
pub fn parse_resource(
    markdown: &str,
    params: ResourceParams,
    schemas: &dyn SchemaSource,
) -> Result<ResourceModel> {
    ResourceDocParser::from_markdown(markdown, params).parse(schemas)
}
