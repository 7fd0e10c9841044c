//! Type definitions for frame measurements
//!
//! This module defines the exact measurement type and the records that flow
//! between the parser, the calculator and the front ends.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FrameError, ParseError};
use crate::formatter::format_measurement;
use crate::parser::parse_measurement;

/// An exact length in inches
///
/// The value is always kept in lowest terms with a positive denominator,
/// which `BigRational` guarantees on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Measurement(BigRational);

impl Measurement {
    /// Build a measurement from a numerator and denominator
    ///
    /// Returns `None` when the denominator is zero.
    ///
    /// # Examples
    /// ```
    /// use frame_calc::Measurement;
    ///
    /// let half = Measurement::new(2, 4).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// assert!(Measurement::new(1, 0).is_none());
    /// ```
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Option<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return None;
        }
        Some(Self(BigRational::new(numer.into(), denom)))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    pub fn from_ratio(value: BigRational) -> Self {
        Self(value)
    }

    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Multiply by a whole number, e.g. to account for both sides of a frame
    pub fn scale(&self, factor: i64) -> Self {
        Self(&self.0 * BigRational::from_integer(BigInt::from(factor)))
    }
}

impl Add for &Measurement {
    type Output = Measurement;

    fn add(self, rhs: &Measurement) -> Measurement {
        Measurement(&self.0 + &rhs.0)
    }
}

impl Sub for &Measurement {
    type Output = Measurement;

    fn sub(self, rhs: &Measurement) -> Measurement {
        Measurement(&self.0 - &rhs.0)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_measurement(self))
    }
}

impl FromStr for Measurement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_measurement(s)
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_measurement(self))
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The four measurements a user supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Width of the art piece
    ArtWidth,
    /// Length of the art piece
    ArtLength,
    /// Depth of the recess that holds the art
    RabbetDepth,
    /// Width of the frame moulding
    FrameWidth,
}

impl FieldName {
    /// Fields in the order they are asked for
    pub const ALL: [FieldName; 4] = [
        FieldName::ArtWidth,
        FieldName::ArtLength,
        FieldName::RabbetDepth,
        FieldName::FrameWidth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::ArtWidth => "art width",
            FieldName::ArtLength => "art length",
            FieldName::RabbetDepth => "rabbet depth",
            FieldName::FrameWidth => "frame width",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            FieldName::ArtWidth => "Enter art piece width (inches): ",
            FieldName::ArtLength => "Enter art piece length (inches): ",
            FieldName::RabbetDepth => "Enter rabbet depth (inches): ",
            FieldName::FrameWidth => "Enter frame width (inches): ",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measurements collected so far, any of which may still be absent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeasurementFields {
    pub art_width: Option<Measurement>,
    pub art_length: Option<Measurement>,
    pub rabbet_depth: Option<Measurement>,
    pub frame_width: Option<Measurement>,
}

impl MeasurementFields {
    pub fn get(&self, field: FieldName) -> Option<&Measurement> {
        match field {
            FieldName::ArtWidth => self.art_width.as_ref(),
            FieldName::ArtLength => self.art_length.as_ref(),
            FieldName::RabbetDepth => self.rabbet_depth.as_ref(),
            FieldName::FrameWidth => self.frame_width.as_ref(),
        }
    }

    pub fn set(&mut self, field: FieldName, value: Option<Measurement>) {
        let slot = match field {
            FieldName::ArtWidth => &mut self.art_width,
            FieldName::ArtLength => &mut self.art_length,
            FieldName::RabbetDepth => &mut self.rabbet_depth,
            FieldName::FrameWidth => &mut self.frame_width,
        };
        *slot = value;
    }

    /// Fields that have no value yet, in prompt order
    pub fn missing(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Turn the collected values into calculator inputs
    ///
    /// Fails with `FrameError::MissingFields` unless all four are present.
    pub fn require(&self) -> Result<FrameInputs, FrameError> {
        match (
            &self.art_width,
            &self.art_length,
            &self.rabbet_depth,
            &self.frame_width,
        ) {
            (Some(art_width), Some(art_length), Some(rabbet_depth), Some(frame_width)) => {
                Ok(FrameInputs {
                    art_width: art_width.clone(),
                    art_length: art_length.clone(),
                    rabbet_depth: rabbet_depth.clone(),
                    frame_width: frame_width.clone(),
                })
            }
            _ => Err(FrameError::MissingFields(self.missing())),
        }
    }
}

/// A complete set of calculator inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameInputs {
    pub art_width: Measurement,
    pub art_length: Measurement,
    pub rabbet_depth: Measurement,
    pub frame_width: Measurement,
}

/// A width by length pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: Measurement,
    pub length: Measurement,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.length)
    }
}

/// Everything the calculator derives for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameDimensions {
    /// The art piece as entered
    pub art: Size,
    /// Interior cutout, art plus wiggle room
    pub opening: Size,
    /// Exterior size of the finished frame
    pub outside: Size,
}
