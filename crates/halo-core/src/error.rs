//! Error types for the Halo snapshot layer.
//!
//! One module collects every error enum in the workspace. All failures
//! here are fatal and deterministic: a missing configuration key aborts
//! before any particle processing, a malformed input source aborts the
//! load. There is nothing transient to retry.

use std::error::Error;
use std::fmt;

/// Errors from parameter-file lookups and the derivations built on them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// A required configuration key is absent. Required keys have no
    /// silent defaults.
    Missing {
        /// The absent key.
        key: String,
    },
    /// A key is present but holds a value of the wrong type.
    WrongType {
        /// The offending key.
        key: String,
        /// The type the caller asked for.
        expected: &'static str,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "missing required parameter '{key}'"),
            Self::WrongType { key, expected } => {
                write!(f, "parameter '{key}' is not of type {expected}")
            }
        }
    }
}

impl Error for ParameterError {}

/// Errors from loading a snapshot source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// A compulsory input field is absent from the source.
    MissingCompulsoryField {
        /// External name of the absent field.
        name: String,
    },
    /// A source column holds a different element datatype than the
    /// descriptor declares.
    DatatypeMismatch {
        /// External name of the field.
        name: String,
        /// Datatype the descriptor declares.
        expected: &'static str,
        /// Datatype found in the source.
        actual: &'static str,
    },
    /// A source column's element count disagrees with the descriptor's
    /// multiplicity times the particle count.
    CountMismatch {
        /// External name of the field.
        name: String,
        /// Element count the descriptor implies.
        expected: usize,
        /// Element count found in the source.
        actual: usize,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCompulsoryField { name } => {
                write!(f, "compulsory field '{name}' absent from snapshot source")
            }
            Self::DatatypeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "field '{name}' holds {actual} elements, descriptor declares {expected}"
            ),
            Self::CountMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "field '{name}' holds {actual} elements, expected {expected}"
            ),
        }
    }
}

impl Error for SnapshotError {}
