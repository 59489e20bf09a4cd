use crate::{
    decode::{CHUNK_MASK, CHUNK_OFFSET, CONTINUATION_BIT},
    scale_factor, Coordinate, EncodeError, DEFAULT_PRECISION,
};

/// Largest scaled magnitude accepted. Keeps every delta, and its zig-zag
/// form, inside 64 bits.
const MAX_SCALED: f64 = (1i64 << 61) as f64;

pub fn encode(coordinates: &[Coordinate]) -> Result<String, EncodeError> {
    encode_with_precision(coordinates, DEFAULT_PRECISION)
}

/// Encodes coordinates rounded to `precision` decimals, each point stored as
/// the difference to its predecessor.
///
/// Every coordinate must be a valid position (see [`Coordinate::is_valid`]).
pub fn encode_with_precision(
    coordinates: &[Coordinate],
    precision: u32,
) -> Result<String, EncodeError> {
    let factor = scale_factor(precision);
    let mut encoded = String::with_capacity(coordinates.len() * 8);
    let mut previous = (0i64, 0i64);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if !coordinate.is_valid() {
            return Err(EncodeError::InvalidCoordinate { index });
        }
        let overflow = EncodeError::Overflow { index };
        let latitude = scale(coordinate.latitude, factor).ok_or(overflow)?;
        let longitude = scale(coordinate.longitude, factor).ok_or(overflow)?;
        write_delta(&mut encoded, latitude.checked_sub(previous.0).ok_or(overflow)?);
        write_delta(&mut encoded, longitude.checked_sub(previous.1).ok_or(overflow)?);
        previous = (latitude, longitude);
    }
    Ok(encoded)
}

fn scale(value: f64, factor: f64) -> Option<i64> {
    let scaled = (value * factor).round();
    // NaN fails the comparison as well
    if scaled.abs() <= MAX_SCALED {
        Some(scaled as i64)
    } else {
        None
    }
}

fn write_delta(encoded: &mut String, delta: i64) {
    // zig-zag: sign moves into the lowest bit
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
    while value >= CONTINUATION_BIT {
        encoded.push((((CONTINUATION_BIT | (value & CHUNK_MASK)) as u8) + CHUNK_OFFSET) as char);
        value >>= 5;
    }
    encoded.push(((value as u8) + CHUNK_OFFSET) as char);
}
