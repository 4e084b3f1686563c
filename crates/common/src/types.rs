//! Terraform type expressions resolved from provider schema

use serde::{Serialize, Serializer};
use std::fmt;

/// A Terraform variable type constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    Bool,
    Number,
    String,
    Any,
    List(Box<SemanticType>),
    Map(Box<SemanticType>),
}

impl SemanticType {
    pub fn list_of(elem: SemanticType) -> Self {
        SemanticType::List(Box::new(elem))
    }

    pub fn map_of(elem: SemanticType) -> Self {
        SemanticType::Map(Box::new(elem))
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Bool => write!(f, "bool"),
            SemanticType::Number => write!(f, "number"),
            SemanticType::String => write!(f, "string"),
            SemanticType::Any => write!(f, "any"),
            SemanticType::List(elem) => write!(f, "list({})", elem),
            SemanticType::Map(elem) => write!(f, "map({})", elem),
        }
    }
}

impl Serialize for SemanticType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
