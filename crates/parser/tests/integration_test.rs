//! Integration tests for resource documentation parsing

use std::path::PathBuf;
use terrawrap_common::{GeneratorError, ResourceParams, SemanticType};
use terrawrap_parser::{load_provider_schema, parse_resource, ResourceDocParser};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn secret_params() -> ResourceParams {
    ResourceParams::new("aws_secretsmanager_secret", "default")
}

#[test]
fn test_parse_secretsmanager_secret() {
    let schema = load_provider_schema(fixture("aws_schema.json")).unwrap();
    let parser = ResourceDocParser::from_file(
        fixture("secretsmanager_secret.html.markdown"),
        secret_params(),
    )
    .unwrap();

    let model = parser.parse(&schema).unwrap();
    assert_eq!(model.resource_type, "aws_secretsmanager_secret");
    assert_eq!(model.resource_name, "default");

    let arguments: Vec<&str> = model.arguments.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        arguments,
        vec![
            "description",
            "kms_key_id",
            "name_prefix",
            "name",
            "policy",
            "recovery_window_in_days",
            "replica",
            "force_overwrite_replica_secret",
            "rotation_lambda_arn",
            "tags",
        ]
    );

    // The replica subsection must not override the top-level kms_key_id
    let kms = model.arguments.get("kms_key_id").unwrap();
    assert!(kms.description.starts_with("ARN or Id of the AWS KMS key"));

    let replica = model.arguments.get("replica").unwrap();
    assert_eq!(replica.resolved_type, Some(SemanticType::list_of(SemanticType::Any)));

    let overwrite = model.arguments.get("force_overwrite_replica_secret").unwrap();
    assert_eq!(overwrite.resolved_type, Some(SemanticType::Bool));
    assert_eq!(overwrite.default_value.as_deref(), Some("false"));

    let rotation = model.arguments.get("rotation_lambda_arn").unwrap();
    assert!(rotation.optional);
    assert!(rotation.deprecated);

    let attributes: Vec<&str> = model.attributes.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(attributes, vec!["id", "arn", "replica", "tags_all"]);
    assert_eq!(model.attributes.get("id").unwrap().resolved_type, None);
    assert_eq!(
        model.attributes.get("arn").unwrap().prefixed_name(),
        "aws_secretsmanager_secret_default_arn"
    );
}

#[test]
fn test_required_string_argument() {
    let schema = load_provider_schema(fixture("aws_schema.json")).unwrap();
    let markdown = "# Resource: aws_secretsmanager_secret\n\n## Argument Reference\n\n* `name` - (Required) The name of the secret.\n";

    let model = parse_resource(markdown, secret_params(), &schema).unwrap();
    let name = model.arguments.get("name").unwrap();
    assert!(!name.optional);
    assert!(!name.deprecated);
    assert_eq!(name.resolved_type, Some(SemanticType::String));
    assert_eq!(name.description, "The name of the secret.");
}

#[test]
fn test_plural_argument_heading() {
    let schema = load_provider_schema(fixture("aws_schema.json")).unwrap();
    let singular = "# Resource\n\n## Argument Reference\n\n* `name` - (Required) Name.\n";
    let plural = "# Resource\n\n## Arguments Reference\n\n* `name` - (Required) Name.\n";

    let a = parse_resource(singular, secret_params(), &schema).unwrap();
    let b = parse_resource(plural, secret_params(), &schema).unwrap();
    assert_eq!(a.arguments.len(), 1);
    assert_eq!(
        a.arguments.get("name").unwrap(),
        b.arguments.get("name").unwrap()
    );
}

#[test]
fn test_repeated_id_attribute() {
    let schema = load_provider_schema(fixture("aws_schema.json")).unwrap();
    let markdown = "# Resource\n\n## Attributes Reference\n\n* `id` - The ARN.\n\n## Attribute Reference\n\n* `id` - Again.\n";

    let model = parse_resource(markdown, secret_params(), &schema).unwrap();
    assert_eq!(model.attributes.len(), 1);
    let id = model.attributes.get("id").unwrap();
    assert_eq!(id.description, "The ARN.");
    assert_eq!(id.resolved_type, None);
    assert_eq!(id.value_type(), SemanticType::String);
    assert_eq!(id.default_value, None);
}

#[test]
fn test_unknown_resource_type() {
    let schema = load_provider_schema(fixture("aws_schema.json")).unwrap();
    let params = ResourceParams::new("aws_s3_bucket", "default");
    let err = parse_resource("# Resource: aws_s3_bucket\n", params, &schema).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::ResourceNotFound { resource_type } if resource_type == "aws_s3_bucket"
    ));
}

#[test]
fn test_missing_schema_file() {
    assert!(load_provider_schema(fixture("does_not_exist.json")).is_err());
}
