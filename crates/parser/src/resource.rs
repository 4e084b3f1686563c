//! Build a resource model from one resource documentation page

use crate::document::{parse_markdown, DocNode, NodeKind};
use crate::entry::extract_entry;
use crate::reconcile::SchemaReconciler;
use crate::section::{SectionClassifier, Visit};
use crate::schema_source::SchemaSource;
use std::fs;
use std::path::Path;
use terrawrap_common::{GeneratorError, ResourceModel, ResourceParams, ResourceSchema, Result};
use tracing::debug;

/// Resource documentation parser
///
/// Holds the parsed document tree of a provider's resource page, e.g.
/// `website/docs/r/secretsmanager_secret.html.markdown`.
pub struct ResourceDocParser {
    document: DocNode,
    params: ResourceParams,
}

impl ResourceDocParser {
    /// Load resource documentation from a markdown file
    pub fn from_file<P: AsRef<Path>>(path: P, params: ResourceParams) -> Result<Self> {
        let content = fs::read(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read doc file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_bytes(&content, params)
    }

    /// Parse raw markdown bytes
    pub fn from_bytes(source: &[u8], params: ResourceParams) -> Result<Self> {
        let markdown = std::str::from_utf8(source)
            .map_err(|e| GeneratorError::Parse(format!("Documentation is not UTF-8: {}", e)))?;
        Ok(Self::from_markdown(markdown, params))
    }

    pub fn from_markdown(markdown: &str, params: ResourceParams) -> Self {
        Self::from_document(parse_markdown(markdown), params)
    }

    /// Use an already-built document tree
    pub fn from_document(document: DocNode, params: ResourceParams) -> Self {
        Self { document, params }
    }

    pub fn document(&self) -> &DocNode {
        &self.document
    }

    /// Walk the document and reconcile every entry against the schema.
    ///
    /// Fails only if the resource type is unknown to `schemas`.
    pub fn parse(&self, schemas: &dyn SchemaSource) -> Result<ResourceModel> {
        let schema = schemas.resource_schema(&self.params.resource_type)?;
        Ok(build_model(&self.document, self.params.clone(), &schema))
    }
}

/// Extract and reconcile every entry in `document` into a new model
pub fn build_model(
    document: &DocNode,
    params: ResourceParams,
    schema: &ResourceSchema,
) -> ResourceModel {
    let mut model = ResourceModel::new(params);
    let resource_type = model.resource_type.clone();
    let mut walk = ModelWalk {
        classifier: SectionClassifier::new(),
        reconciler: SchemaReconciler::new(&resource_type, schema),
        model: &mut model,
    };
    walk.visit(document, None);
    model
}

struct ModelWalk<'a> {
    classifier: SectionClassifier,
    reconciler: SchemaReconciler<'a>,
    model: &'a mut ResourceModel,
}

impl ModelWalk<'_> {
    fn visit(&mut self, node: &DocNode, parent: Option<NodeKind>) {
        if let Visit::Extract(role) = self.classifier.visit(node, parent) {
            match extract_entry(&node.text) {
                Some(raw) => {
                    let prefix = self.model.prefix_for(role).to_string();
                    let entry = self.reconciler.resolve(raw, role, &prefix);
                    if !self.model.collection_mut(role).append(entry) {
                        debug!(text = %node.text, "dropping duplicate entry");
                    }
                }
                None => debug!(text = %node.text, "list item is not a field entry"),
            }
        }

        for child in &node.children {
            self.visit(child, Some(node.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema_source::MockSchemaSource;
    use terrawrap_common::{SchemaField, SchemaKind, SemanticType};

    const SECRET_DOC: &str = r#"---
subcategory: "Secrets Manager"
layout: "aws"
page_title: "AWS: aws_secretsmanager_secret"
---

# Resource: aws_secretsmanager_secret

Provides a resource to manage AWS Secrets Manager secret metadata.

* `example` - not a field, this list sits before any reference section.

## Argument Reference

The following arguments are supported:

* `name` - (Optional) Friendly name of the new secret.
* `description` - (Optional) Description of the secret.
* `recovery_window_in_days` - (Optional) Number of days that AWS Secrets Manager waits before it can delete the secret.
* `tags` - (Optional, DEPRECATED) A map of tags.
* `name` - (Required) A second description of name that must be ignored.

### replica

* `region` - (Required) Region for replicating the secret.

## Attributes Reference

In addition to all arguments above, the following attributes are exported:

* `id` - ARN of the secret.
* `arn` - ARN of the secret.
* `id` - Duplicate id.

## Import

* `secret` - not a field either.
"#;

    fn secret_schema() -> ResourceSchema {
        let mut schema = ResourceSchema::new();
        schema.insert("name", SchemaField::new(SchemaKind::String));
        schema.insert("description", SchemaField::new(SchemaKind::String));
        schema.insert(
            "recovery_window_in_days",
            SchemaField::new(SchemaKind::Int).with_default(serde_json::json!(30)),
        );
        schema.insert(
            "tags",
            SchemaField::new(SchemaKind::Map).with_elem(SchemaField::new(SchemaKind::String)),
        );
        schema.insert("arn", SchemaField::new(SchemaKind::String));
        schema
    }

    fn params() -> ResourceParams {
        ResourceParams::new("aws_secretsmanager_secret", "default")
    }

    #[test]
    fn test_build_model_from_doc() {
        let parser = ResourceDocParser::from_markdown(SECRET_DOC, params());
        let model = build_model(parser.document(), params(), &secret_schema());

        let args: Vec<&str> = model.arguments.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            args,
            vec!["name", "description", "recovery_window_in_days", "tags"]
        );

        let name = model.arguments.get("name").unwrap();
        assert!(name.optional);
        assert_eq!(name.description, "Friendly name of the new secret.");
        assert_eq!(name.prefixed_name(), "aws_secretsmanager_secret_default_name");

        let tags = model.arguments.get("tags").unwrap();
        assert!(tags.deprecated);
        assert_eq!(tags.resolved_type, Some(SemanticType::map_of(SemanticType::String)));

        let window = model.arguments.get("recovery_window_in_days").unwrap();
        assert_eq!(window.default_value.as_deref(), Some("30"));

        let attrs: Vec<&str> = model.attributes.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(attrs, vec!["id", "arn"]);
        let id = model.attributes.get("id").unwrap();
        assert_eq!(id.resolved_type, None);
        assert_eq!(id.description, "ARN of the secret.");
    }

    #[test]
    fn test_parse_with_schema_source() {
        let mut source = MockSchemaSource::new();
        source
            .expect_resource_schema()
            .withf(|resource_type| resource_type.to_string() == "aws_secretsmanager_secret")
            .times(1)
            .returning(|_| Ok(secret_schema()));

        let parser = ResourceDocParser::from_markdown(SECRET_DOC, params());
        let model = parser.parse(&source).unwrap();
        assert_eq!(model.arguments.len(), 4);
        assert_eq!(model.attributes.len(), 2);
    }

    #[test]
    fn test_unknown_resource_is_fatal() {
        let mut source = MockSchemaSource::new();
        source.expect_resource_schema().returning(|resource_type| {
            Err(GeneratorError::ResourceNotFound {
                resource_type: resource_type.to_string(),
            })
        });

        let parser = ResourceDocParser::from_markdown(SECRET_DOC, params());
        let err = parser.parse(&source).unwrap_err();
        assert!(matches!(err, GeneratorError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_doc_without_sections_is_empty() {
        let parser = ResourceDocParser::from_markdown(
            "# Resource: aws_thing\n\n* `name` - (Required) Name.\n",
            params(),
        );
        let model = build_model(parser.document(), params(), &secret_schema());
        assert!(model.arguments.is_empty());
        assert!(model.attributes.is_empty());
    }

    #[test]
    fn test_non_utf8_source() {
        assert!(ResourceDocParser::from_bytes(&[0xff, 0xfe], params()).is_err());
    }
}
