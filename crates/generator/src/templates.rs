//! Template loading and management

use crate::format::tf_string;
use std::collections::HashMap;
use terrawrap_common::{GeneratorError, Result};
use tera::{Tera, Value};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("tf_string", tf_string_filter);

    tera.add_raw_templates(vec![
        ("header.tf", include_str!("../templates/header.tf.tera")),
        ("main.tf", include_str!("../templates/main.tf.tera")),
        ("variables.tf", include_str!("../templates/variables.tf.tera")),
        ("outputs.tf", include_str!("../templates/outputs.tf.tera")),
    ])
    .map_err(|e| GeneratorError::Template(format!("Failed to load templates: {}", e)))?;

    Ok(tera)
}

/// Filter to render a description as an HCL string expression
fn tf_string_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("tf_string filter expects a string"))?;

    Ok(Value::String(tf_string(s)))
}
