//! JSON Schema gate for create requests.

use jsonschema::JSONSchema;
use serde_json::Value;
use thiserror::Error;

const CREATE_BEER_SCHEMA: &str = include_str!("../schemas/create_beer.json");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid create beer schema: {0}")]
    Schema(String),
    /// The payload violates the schema; holds the first violation.
    #[error("{0}")]
    Invalid(String),
}

/// Compiled create-beer schema.
pub struct BeerValidator {
    compiled: JSONSchema,
}

impl BeerValidator {
    /// Compiles the embedded schema.
    pub fn new() -> Result<Self, ValidationError> {
        let schema: Value = serde_json::from_str(CREATE_BEER_SCHEMA)
            .map_err(|e| ValidationError::Schema(e.to_string()))?;
        let compiled =
            JSONSchema::compile(&schema).map_err(|e| ValidationError::Schema(e.to_string()))?;

        Ok(Self { compiled })
    }

    /// Checks a create payload, reporting only the first violation.
    pub fn validate(&self, payload: &Value) -> Result<(), ValidationError> {
        self.compiled.validate(payload).map_err(|mut errors| {
            let first = errors
                .next()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "payload does not match schema".to_string());
            ValidationError::Invalid(first)
        })
    }
}
