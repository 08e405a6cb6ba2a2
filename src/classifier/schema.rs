//! Attribute schema for tabular classification.
//!
//! A [`Schema`] is an ordered list of per-column [`AttributeType`] tags. It is
//! either supplied by the caller or inferred from the first training instance
//! with [`Schema::infer`], persisted on the classifier, and validated against
//! every subsequent instance — so a value that cannot be reconciled with its
//! column type surfaces as an explicit error instead of silently corrupting
//! the statistics.
//!
//! # Examples
//!
//! ```
//! use xyston::classifier::schema::{AttributeType, AttributeValue, Schema};
//!
//! let schema = Schema::infer(&["6.2", "overcast"]);
//! assert_eq!(
//!     schema.attributes(),
//!     &[AttributeType::Numeric, AttributeType::Categorical]
//! );
//!
//! let instance = schema.convert(&["7.1", "sunny"]).unwrap();
//! assert_eq!(instance[0], AttributeValue::Numeric(7.1));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};

/// The type of a single attribute column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    /// Values parse as real numbers and are modeled with a Gaussian density.
    Numeric,
    /// Values are opaque tokens compared by equality and modeled by frequency.
    Categorical,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Numeric => write!(f, "numeric"),
            AttributeType::Categorical => write!(f, "categorical"),
        }
    }
}

/// A single attribute value after schema conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A parsed numeric value.
    Numeric(f64),
    /// An opaque categorical value.
    Categorical(String),
}

/// An ordered, fixed-width list of attribute types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<AttributeType>,
}

impl Schema {
    /// Create a schema from an explicit list of attribute types.
    pub fn new(attributes: Vec<AttributeType>) -> Self {
        Schema { attributes }
    }

    /// Infer a schema from a single instance.
    ///
    /// A column whose value parses as `f64` is tagged numeric, anything else
    /// categorical. Numeric-looking values in a categorical column cannot be
    /// told apart from categories, so inference sees them as numeric; supply
    /// the schema explicitly when that is not what the data means.
    pub fn infer<S: AsRef<str>>(values: &[S]) -> Self {
        let attributes = values
            .iter()
            .map(|value| {
                if value.as_ref().trim().parse::<f64>().is_ok() {
                    AttributeType::Numeric
                } else {
                    AttributeType::Categorical
                }
            })
            .collect();
        Schema { attributes }
    }

    /// Get the attribute types in column order.
    pub fn attributes(&self) -> &[AttributeType] {
        &self.attributes
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the schema has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Validate an instance against this schema and convert its values.
    ///
    /// Width mismatches and numeric columns that fail to parse are reported
    /// as errors; categorical columns accept any value.
    pub fn convert<S: AsRef<str>>(&self, values: &[S]) -> Result<Vec<AttributeValue>> {
        if values.len() != self.attributes.len() {
            return Err(XystonError::schema(format!(
                "instance has {} attributes, schema expects {}",
                values.len(),
                self.attributes.len()
            )));
        }

        self.attributes
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (attribute_type, value))| {
                let value = value.as_ref();
                match attribute_type {
                    AttributeType::Numeric => match value.trim().parse::<f64>() {
                        Ok(number) => Ok(AttributeValue::Numeric(number)),
                        Err(_) => Err(XystonError::TypeMismatch {
                            index,
                            expected: AttributeType::Numeric,
                            value: value.to_string(),
                        }),
                    },
                    AttributeType::Categorical => {
                        Ok(AttributeValue::Categorical(value.to_string()))
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_mixed_columns() {
        let schema = Schema::infer(&["85", "sunny", "-3.5"]);
        assert_eq!(
            schema.attributes(),
            &[
                AttributeType::Numeric,
                AttributeType::Categorical,
                AttributeType::Numeric
            ]
        );
    }

    #[test]
    fn test_convert_valid_instance() {
        let schema = Schema::infer(&["85", "sunny"]);
        let instance = schema.convert(&["64", "rainy"]).unwrap();
        assert_eq!(
            instance,
            vec![
                AttributeValue::Numeric(64.0),
                AttributeValue::Categorical("rainy".to_string())
            ]
        );
    }

    #[test]
    fn test_convert_rejects_width_mismatch() {
        let schema = Schema::infer(&["85", "sunny"]);
        let error = schema.convert(&["64"]).unwrap_err();
        assert!(matches!(error, XystonError::Schema(_)));
    }

    #[test]
    fn test_convert_rejects_type_mismatch() {
        let schema = Schema::infer(&["85", "sunny"]);
        let error = schema.convert(&["hot", "rainy"]).unwrap_err();
        match error {
            XystonError::TypeMismatch {
                index,
                expected,
                value,
            } => {
                assert_eq!(index, 0);
                assert_eq!(expected, AttributeType::Numeric);
                assert_eq!(value, "hot");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_categorical_column_accepts_numbers() {
        let schema = Schema::new(vec![AttributeType::Categorical]);
        let instance = schema.convert(&["42"]).unwrap();
        assert_eq!(instance, vec![AttributeValue::Categorical("42".to_string())]);
    }
}
