//! Error types for measurement parsing and frame calculation

use thiserror::Error;

use crate::types::{FieldName, Measurement};

/// Failure to read a measurement string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No value supplied. Please use format: '1/2' or '1 1/2'")]
    Empty,

    #[error("Invalid input. Please use format: '1/2' or '1 1/2'")]
    InvalidFormat { input: String },

    #[error("Invalid input '{input}': denominator must not be zero")]
    ZeroDenominator { input: String },
}

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid {field}: {source}")]
    Parse {
        field: FieldName,
        #[source]
        source: ParseError,
    },

    #[error("Missing measurements: {}", join_fields(.0))]
    MissingFields(Vec<FieldName>),

    #[error("Outside dimensions {width} x {length} must be greater than zero")]
    NonPositiveOutside {
        width: Measurement,
        length: Measurement,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
