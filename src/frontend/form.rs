//! Form submission adapter
//!
//! All four fields arrive together and all four are required.

use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::error::{FrameError, Result};
use crate::parser::parse_measurement;
use crate::types::{FieldName, FrameDimensions, FrameInputs};

/// Raw field values as submitted
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub art_width: String,
    pub art_length: String,
    pub rabbet_depth: String,
    pub frame_width: String,
}

/// Reply to a submission, serialized with a `status` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormResponse {
    Success { dimensions: FrameDimensions },
    Error { message: String },
}

impl FormSubmission {
    pub fn new(
        art_width: impl Into<String>,
        art_length: impl Into<String>,
        rabbet_depth: impl Into<String>,
        frame_width: impl Into<String>,
    ) -> Self {
        Self {
            art_width: art_width.into(),
            art_length: art_length.into(),
            rabbet_depth: rabbet_depth.into(),
            frame_width: frame_width.into(),
        }
    }

    pub fn raw(&self, field: FieldName) -> &str {
        match field {
            FieldName::ArtWidth => &self.art_width,
            FieldName::ArtLength => &self.art_length,
            FieldName::RabbetDepth => &self.rabbet_depth,
            FieldName::FrameWidth => &self.frame_width,
        }
    }

    /// Parse every field, failing on the first one that is empty or invalid
    pub fn parse(&self) -> Result<FrameInputs> {
        let parse_field = |field: FieldName| {
            parse_measurement(self.raw(field)).map_err(|source| FrameError::Parse { field, source })
        };

        Ok(FrameInputs {
            art_width: parse_field(FieldName::ArtWidth)?,
            art_length: parse_field(FieldName::ArtLength)?,
            rabbet_depth: parse_field(FieldName::RabbetDepth)?,
            frame_width: parse_field(FieldName::FrameWidth)?,
        })
    }

    /// Parse and calculate, never showing partial results
    pub fn submit(&self, calculator: &Calculator) -> FormResponse {
        match self.parse().and_then(|inputs| calculator.calculate(&inputs)) {
            Ok(dimensions) => FormResponse::Success { dimensions },
            Err(e) => {
                tracing::warn!(error = %e, "form submission rejected");
                FormResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}
