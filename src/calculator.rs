//! Frame dimension arithmetic
//!
//! All results are exact. Nothing here rounds, and nothing here fails unless
//! the caller asked for non-positive outside sizes to be rejected.

use crate::config::CalculationSettings;
use crate::error::{FrameError, Result};
use crate::types::{FrameDimensions, FrameInputs, Measurement, MeasurementFields, Size};

/// Clearance between the art and the opening on each side, 1/16 inch
pub fn wiggle_room() -> Measurement {
    Measurement::from_ratio(num_rational::BigRational::new(1.into(), 16.into()))
}

/// Derive opening and outside sizes from the art size and frame profile
///
/// ```
/// use frame_calc::FrameInputs;
/// use frame_calc::calculator::{compute_dimensions, wiggle_room};
///
/// let inputs = FrameInputs {
///     art_width: "8 1/2".parse().unwrap(),
///     art_length: "11".parse().unwrap(),
///     rabbet_depth: "1/4".parse().unwrap(),
///     frame_width: "2".parse().unwrap(),
/// };
/// let dims = compute_dimensions(&inputs, &wiggle_room());
/// assert_eq!(dims.opening.to_string(), "8 5/8 x 11 1/8");
/// assert_eq!(dims.outside.to_string(), "12 1/8 x 14 5/8");
/// ```
pub fn compute_dimensions(inputs: &FrameInputs, wiggle: &Measurement) -> FrameDimensions {
    let clearance = wiggle.scale(2);
    let opening_width = &inputs.art_width + &clearance;
    let opening_length = &inputs.art_length + &clearance;

    // Rabbet hides art on both sides, moulding adds on both sides
    let adjustment = &inputs.frame_width.scale(2) - &inputs.rabbet_depth.scale(2);
    let outside_width = &opening_width + &adjustment;
    let outside_length = &opening_length + &adjustment;

    FrameDimensions {
        art: Size {
            width: inputs.art_width.clone(),
            length: inputs.art_length.clone(),
        },
        opening: Size {
            width: opening_width,
            length: opening_length,
        },
        outside: Size {
            width: outside_width,
            length: outside_length,
        },
    }
}

/// `compute_dimensions` with the standard 1/16 inch wiggle room
pub fn calculate(inputs: &FrameInputs) -> FrameDimensions {
    compute_dimensions(inputs, &wiggle_room())
}

/// Calculator bound to a set of settings, shared by both front ends
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    settings: CalculationSettings,
}

impl Calculator {
    pub fn new(settings: CalculationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalculationSettings {
        &self.settings
    }

    pub fn calculate(&self, inputs: &FrameInputs) -> Result<FrameDimensions> {
        let dimensions = compute_dimensions(inputs, &self.settings.wiggle_room);
        tracing::debug!(
            opening = %dimensions.opening,
            outside = %dimensions.outside,
            "computed frame dimensions"
        );

        let outside = &dimensions.outside;
        if !outside.width.is_positive() || !outside.length.is_positive() {
            if self.settings.reject_non_positive {
                return Err(FrameError::NonPositiveOutside {
                    width: outside.width.clone(),
                    length: outside.length.clone(),
                });
            }
            tracing::warn!(outside = %outside, "outside dimension is not positive");
        }

        Ok(dimensions)
    }

    /// Calculate from partially collected fields
    ///
    /// Skips the arithmetic entirely when any field is missing.
    pub fn calculate_fields(&self, fields: &MeasurementFields) -> Result<FrameDimensions> {
        let inputs = fields.require()?;
        self.calculate(&inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Measurement {
        s.parse().unwrap()
    }

    fn inputs(aw: &str, al: &str, rd: &str, fw: &str) -> FrameInputs {
        FrameInputs {
            art_width: m(aw),
            art_length: m(al),
            rabbet_depth: m(rd),
            frame_width: m(fw),
        }
    }

    #[test]
    fn test_opening_adds_two_wiggles() {
        let dims = calculate(&inputs("5", "7", "0", "0"));
        assert_eq!(dims.opening.width, m("5 1/8"));
        assert_eq!(dims.opening.length, m("7 1/8"));
        assert_eq!(dims.outside, dims.opening);
    }

    #[test]
    fn test_custom_wiggle_room() {
        let dims = compute_dimensions(&inputs("5", "7", "1/4", "1"), &m("1/8"));
        assert_eq!(dims.opening.to_string(), "5 1/4 x 7 1/4");
        assert_eq!(dims.outside.to_string(), "6 3/4 x 8 3/4");
    }

    #[test]
    fn test_negative_outside_is_reported_by_default() {
        let calculator = Calculator::default();
        let dims = calculator.calculate(&inputs("1", "1", "3", "0")).unwrap();
        assert_eq!(dims.outside.width, m("-4 7/8"));
    }

    #[test]
    fn test_negative_outside_rejected_when_configured() {
        let calculator = Calculator::new(CalculationSettings {
            reject_non_positive: true,
            ..Default::default()
        });
        let err = calculator.calculate(&inputs("1", "1", "3", "0")).unwrap_err();
        assert!(matches!(err, FrameError::NonPositiveOutside { .. }));
    }

    #[test]
    fn test_missing_fields_skip_calculation() {
        let mut fields = MeasurementFields::default();
        fields.art_width = Some(m("8"));
        fields.rabbet_depth = Some(m("1/4"));

        let err = Calculator::default().calculate_fields(&fields).unwrap_err();
        match err {
            FrameError::MissingFields(missing) => {
                assert_eq!(
                    missing,
                    vec![crate::types::FieldName::ArtLength, crate::types::FieldName::FrameWidth]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
