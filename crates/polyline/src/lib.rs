use std::{error, fmt};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod decode;
pub mod encode;
pub mod path;

pub use decode::{decode, decode_with_precision, Decoder};
pub use encode::{encode, encode_with_precision};
pub use path::{Bounds, Path};

/// Number of decimal places Google's encoding keeps for each coordinate.
pub const DEFAULT_PRECISION: u32 = 5;

/// `10^precision`. Precisions past `i32::MAX` give infinity rather than a
/// wrapped, negative exponent.
pub(crate) fn scale_factor(precision: u32) -> f64 {
    10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX))
}

/// A point on a decoded path, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite, with latitude in `-90..=90` and longitude in `-180..=180`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

/// Failure to decode an encoded polyline.
///
/// Providers are trusted to send well formed strings, so any of these means
/// the input was cut short or is not a polyline at all. Decoding stops at the
/// first error; no partial coordinate is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended inside a delta, or after a latitude without its longitude.
    Truncated { position: usize },
    /// Byte outside of the `?`..=`~` alphabet produced by the encoder.
    InvalidCharacter { position: usize, byte: u8 },
    /// A delta (or the running total) does not fit into 64 bits.
    Overflow { position: usize },
}

impl DecodeError {
    pub fn position(&self) -> usize {
        match self {
            Self::Truncated { position }
            | Self::InvalidCharacter { position, .. }
            | Self::Overflow { position } => *position,
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Truncated { position } => {
                write!(f, "polyline truncated at byte {}", position)
            }
            DecodeError::InvalidCharacter { position, byte } => write!(
                f,
                "invalid polyline byte 0x{:02x} at position {}",
                byte, position
            ),
            DecodeError::Overflow { position } => {
                write!(f, "polyline value overflows at byte {}", position)
            }
        }
    }
}

/// Failure to encode a list of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Coordinate at `index` is not finite or lies outside the valid
    /// latitude/longitude range.
    InvalidCoordinate { index: usize },
    /// Coordinate at `index` does not fit into the integer range at the
    /// requested precision.
    Overflow { index: usize },
}

impl error::Error for EncodeError {}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::InvalidCoordinate { index } => {
                write!(f, "coordinate {} is not a valid position", index)
            }
            EncodeError::Overflow { index } => {
                write!(f, "coordinate {} overflows at this precision", index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_precision_does_not_wrap() {
        assert_eq!(scale_factor(6), 1e6);
        assert!(scale_factor(u32::MAX).is_infinite());
        assert!(scale_factor(u32::MAX) > 0.0);
    }

    #[test]
    fn coordinate_ranges() {
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }
}
