//! Run-parameter lookup.
//!
//! The parameter parser proper (reading the run's YAML-style file) is
//! an external collaborator; this module is the typed key→value store
//! its output lands in. Keys keep their section-qualified form
//! (`"SPH:resolution_eta"`). Insertion order is preserved so reports
//! list parameters the way the run file does.

use indexmap::IndexMap;

use crate::error::ParameterError;

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    /// Floating-point parameter.
    Float(f64),
    /// Integer parameter.
    Int(i64),
    /// String parameter.
    Str(String),
}

/// Ordered key→typed-value parameter store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterFile {
    values: IndexMap<String, ParameterValue>,
}

impl ParameterFile {
    /// An empty parameter file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a floating-point parameter.
    pub fn set_f64(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), ParameterValue::Float(value));
    }

    /// Insert or replace an integer parameter.
    pub fn set_i64(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), ParameterValue::Int(value));
    }

    /// Insert or replace a string parameter.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), ParameterValue::Str(value.to_string()));
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Required floating-point parameter. Integer values widen.
    pub fn get_f64(&self, key: &str) -> Result<f64, ParameterError> {
        match self.values.get(key) {
            Some(ParameterValue::Float(v)) => Ok(*v),
            Some(ParameterValue::Int(v)) => Ok(*v as f64),
            Some(_) => Err(ParameterError::WrongType {
                key: key.to_string(),
                expected: "float",
            }),
            None => Err(ParameterError::Missing {
                key: key.to_string(),
            }),
        }
    }

    /// Required integer parameter.
    pub fn get_i64(&self, key: &str) -> Result<i64, ParameterError> {
        match self.values.get(key) {
            Some(ParameterValue::Int(v)) => Ok(*v),
            Some(_) => Err(ParameterError::WrongType {
                key: key.to_string(),
                expected: "int",
            }),
            None => Err(ParameterError::Missing {
                key: key.to_string(),
            }),
        }
    }

    /// Optional floating-point parameter with a default.
    ///
    /// Absence is not an error; a present value of the wrong type is.
    pub fn get_opt_f64(&self, key: &str, default: f64) -> Result<f64, ParameterError> {
        if self.contains(key) {
            self.get_f64(key)
        } else {
            Ok(default)
        }
    }

    /// Optional integer parameter with a default.
    pub fn get_opt_i64(&self, key: &str, default: i64) -> Result<i64, ParameterError> {
        if self.contains(key) {
            self.get_i64(key)
        } else {
            Ok(default)
        }
    }
}
