//! Declarative output schemas.
//!
//! Every endpoint declares the JSON shape it expects back from the model as a
//! `static` [`Schema`]. The same value is serialized into the Gemini
//! `responseSchema` field and used to check the parsed response before it is
//! relayed to the client.

pub mod catalog;

pub use catalog::{EVALUATION_SCHEMA, MCQ_SCHEMA, OUTPUT_SCHEMA, SUMMARY_SCHEMA};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Field types understood by the Gemini schema subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    fn as_str(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }
}

/// Immutable description of an expected JSON value.
#[derive(Debug)]
pub struct Schema {
    pub kind: SchemaType,
    pub description: Option<&'static str>,
    pub nullable: bool,
    pub properties: &'static [Property],
    pub items: Option<&'static Schema>,
    pub required: &'static [&'static str],
}

/// A named object field.
#[derive(Debug)]
pub struct Property {
    pub name: &'static str,
    pub schema: Schema,
}

impl Schema {
    const fn scalar(kind: SchemaType, description: &'static str) -> Self {
        Self {
            kind,
            description: Some(description),
            nullable: false,
            properties: &[],
            items: None,
            required: &[],
        }
    }

    pub const fn string(description: &'static str) -> Self {
        Self::scalar(SchemaType::String, description)
    }

    pub const fn integer(description: &'static str) -> Self {
        Self::scalar(SchemaType::Integer, description)
    }

    pub const fn array(description: &'static str, items: &'static Schema) -> Self {
        Self {
            items: Some(items),
            ..Self::scalar(SchemaType::Array, description)
        }
    }

    pub const fn object(
        description: &'static str,
        properties: &'static [Property],
        required: &'static [&'static str],
    ) -> Self {
        Self {
            properties,
            required,
            ..Self::scalar(SchemaType::Object, description)
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Verify that `value` has the declared shape.
    ///
    /// Required fields must be present, types must match, and `null` is only
    /// accepted where the schema is nullable. Unknown object keys are allowed.
    pub fn check(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.check_at(value, "$")
    }

    fn check_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        if value.is_null() {
            return if self.nullable {
                Ok(())
            } else {
                Err(self.mismatch(value, path))
            };
        }

        match self.kind {
            SchemaType::String if value.is_string() => Ok(()),
            SchemaType::Boolean if value.is_boolean() => Ok(()),
            SchemaType::Number if value.is_number() => Ok(()),
            SchemaType::Integer if is_integral(value) => Ok(()),
            SchemaType::Array => {
                let elements = value.as_array().ok_or_else(|| self.mismatch(value, path))?;
                if let Some(items) = self.items {
                    for (index, element) in elements.iter().enumerate() {
                        items.check_at(element, &format!("{}[{}]", path, index))?;
                    }
                }
                Ok(())
            }
            SchemaType::Object => {
                let fields = value.as_object().ok_or_else(|| self.mismatch(value, path))?;
                let missing = self.required.iter().find(|name| !fields.contains_key(**name));
                if let Some(missing) = missing {
                    return Err(SchemaViolation::MissingField {
                        path: path.to_string(),
                        field: missing.to_string(),
                    });
                }
                for property in self.properties {
                    if let Some(field) = fields.get(property.name) {
                        property
                            .schema
                            .check_at(field, &format!("{}.{}", path, property.name))?;
                    }
                }
                Ok(())
            }
            _ => Err(self.mismatch(value, path)),
        }
    }

    fn mismatch(&self, value: &Value, path: &str) -> SchemaViolation {
        SchemaViolation::TypeMismatch {
            path: path.to_string(),
            expected: self.kind.as_str(),
            found: json_type(value),
        }
    }
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        _ => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a generated payload does not match its schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: missing required field '{field}'")]
    MissingField { path: String, field: String },
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind)?;
        if let Some(description) = self.description {
            map.serialize_entry("description", description)?;
        }
        if self.nullable {
            map.serialize_entry("nullable", &true)?;
        }
        if !self.properties.is_empty() {
            map.serialize_entry("properties", &Properties(self.properties))?;
        }
        if let Some(items) = self.items {
            map.serialize_entry("items", items)?;
        }
        if !self.required.is_empty() {
            map.serialize_entry("required", self.required)?;
        }
        map.end()
    }
}

struct Properties(&'static [Property]);

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in self.0 {
            map.serialize_entry(property.name, &property.schema)?;
        }
        map.end()
    }
}
