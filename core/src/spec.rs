//! Specification types.
//!
//! A [`TestSpecification`] is what the spec source hands to the matrix
//! builder: header metadata, the input fields under test and the optional
//! business conditions. Field names and wire keys follow the camelCase JSON
//! emitted by the generative service.

use crate::{TestGenError, TestGenResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Declared type of an input field.
///
/// Only the numeric range matters to the builder; the type is carried through
/// to reports unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    Int,
    Double,
    String,
    Bool,
    Other,
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => FieldType::Int,
            "double" | "float" => FieldType::Double,
            "string" => FieldType::String,
            "bool" | "boolean" => FieldType::Bool,
            _ => FieldType::Other,
        }
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.as_str().to_string()
    }
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Double => "double",
            FieldType::String => "string",
            FieldType::Bool => "bool",
            FieldType::Other => "other",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input parameter under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    pub min: i32,
    pub max: i32,
}

impl Field {
    /// Create an `int` field.
    pub fn int(name: impl Into<String>, min: i32, max: i32) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Int,
            min,
            max,
        }
    }

    /// Check `min <= max`.
    pub fn validate(&self) -> TestGenResult<()> {
        if self.min > self.max {
            return Err(TestGenError::InvalidRange {
                field: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Whether `value` lies inside `[min, max]`.
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Whether `value` sits exactly on `min` or `max`.
    pub fn is_boundary(&self, value: i64) -> bool {
        value == i64::from(self.min) || value == i64::from(self.max)
    }

    /// Width of the range, `max - min`, without overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }
}

/// Everything the builder needs to lay out one matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestSpecification {
    pub function_code: String,
    pub function_name: String,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_of_code: Option<String>,
    pub test_requirement: String,
    pub fields: Vec<Field>,
    pub return_conditions: Vec<String>,
    pub log_messages: Vec<String>,
}

impl TestSpecification {
    pub fn new(function_code: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            function_code: function_code.into(),
            function_name: function_name.into(),
            ..Self::default()
        }
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.test_requirement = requirement.into();
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_return_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_log_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.log_messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Validate every field range and require unique field names. Fails on
    /// the first bad field.
    pub fn validate(&self) -> TestGenResult<()> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            field.validate()?;
            if !seen.insert(field.name.as_str()) {
                return Err(TestGenError::DuplicateField {
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }
}
