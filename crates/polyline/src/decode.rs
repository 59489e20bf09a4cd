use crate::{scale_factor, Coordinate, DecodeError, Path, DEFAULT_PRECISION};

/// Offset added to every 5-bit chunk to make it printable.
pub(crate) const CHUNK_OFFSET: u8 = 63;
/// Set on every chunk of a value except the last one.
pub(crate) const CONTINUATION_BIT: u64 = 0x20;
pub(crate) const CHUNK_MASK: u64 = 0x1f;

/// Largest byte the encoder can emit: a full chunk with continuation bit.
const MAX_BYTE: u8 = CHUNK_OFFSET + (CONTINUATION_BIT | CHUNK_MASK) as u8;

/// Decodes a polyline with Google's default precision of five decimals.
pub fn decode(encoded: &str) -> Result<Path, DecodeError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decodes a polyline whose values were scaled by `10^precision` before
/// encoding (6 for OSRM/Valhalla style "polyline6").
pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<Path, DecodeError> {
    Decoder::with_precision(encoded, precision).collect()
}

/// Lazily decodes an encoded polyline one coordinate at a time.
///
/// After the first error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    position: usize,
    factor: f64,
    latitude: i64,
    longitude: i64,
    failed: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Self::with_precision(encoded, DEFAULT_PRECISION)
    }

    pub fn with_precision(encoded: &'a str, precision: u32) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            position: 0,
            factor: scale_factor(precision),
            latitude: 0,
            longitude: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread chunk.
    pub fn position(&self) -> usize {
        self.position
    }

    fn next_coordinate(&mut self) -> Result<Coordinate, DecodeError> {
        let delta = self.read_delta()?;
        self.latitude = self
            .latitude
            .checked_add(delta)
            .ok_or(DecodeError::Overflow {
                position: self.position,
            })?;

        let delta = self.read_delta()?;
        self.longitude = self
            .longitude
            .checked_add(delta)
            .ok_or(DecodeError::Overflow {
                position: self.position,
            })?;

        // dividing by an exactly representable power of ten keeps results
        // like 38.5 exact, multiplying by 1e-5 would not
        Ok(Coordinate::new(
            self.latitude as f64 / self.factor,
            self.longitude as f64 / self.factor,
        ))
    }

    /// Reads one zig-zag encoded delta, checking bounds before every chunk.
    fn read_delta(&mut self) -> Result<i64, DecodeError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let position = self.position;
            let byte = *self
                .bytes
                .get(position)
                .ok_or(DecodeError::Truncated { position })?;
            if !(CHUNK_OFFSET..=MAX_BYTE).contains(&byte) {
                return Err(DecodeError::InvalidCharacter { position, byte });
            }
            self.position += 1;

            let chunk = (byte - CHUNK_OFFSET) as u64;
            let bits = chunk & CHUNK_MASK;
            if shift >= u64::BITS || (bits << shift) >> shift != bits {
                return Err(DecodeError::Overflow { position });
            }
            value |= bits << shift;
            shift += 5;

            if chunk & CONTINUATION_BIT == 0 {
                break;
            }
        }

        let magnitude = (value >> 1) as i64;
        Ok(if value & 1 == 1 { !magnitude } else { magnitude })
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Coordinate, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.bytes.len() {
            return None;
        }
        let result = self.next_coordinate();
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // every coordinate needs at least one byte per axis
        let remaining = self.bytes.len().saturating_sub(self.position);
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(remaining / 2 + remaining % 2))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_single_chunk_deltas() {
        // '?' is zero, '@' is -1 (zig-zag 1), 'A' is 1 (zig-zag 2)
        let path = decode("?@A?").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], Coordinate::new(0.0, -0.00001));
        assert_eq!(path[1], Coordinate::new(0.00001, -0.00001));
    }

    #[test]
    fn missing_longitude_is_truncated() {
        assert_eq!(
            decode("_p~iF").unwrap_err(),
            DecodeError::Truncated { position: 5 }
        );
    }

    #[test]
    fn continuation_on_last_byte_is_truncated() {
        // '_' carries the continuation bit
        assert_eq!(
            decode("_p~iF~ps|U_").unwrap_err(),
            DecodeError::Truncated { position: 11 }
        );
    }

    #[test]
    fn rejects_bytes_outside_alphabet() {
        assert_eq!(
            decode("_p~iF ps|U").unwrap_err(),
            DecodeError::InvalidCharacter {
                position: 5,
                byte: b' '
            }
        );
        assert!(matches!(
            decode("ä?").unwrap_err(),
            DecodeError::InvalidCharacter { position: 0, .. }
        ));
    }

    #[test]
    fn endless_continuation_overflows() {
        let encoded = "~".repeat(20);
        assert!(matches!(
            decode(&encoded).unwrap_err(),
            DecodeError::Overflow { .. }
        ));
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut decoder = Decoder::new("??_");
        assert_eq!(decoder.next(), Some(Ok(Coordinate::new(0.0, 0.0))));
        assert_eq!(
            decoder.next(),
            Some(Err(DecodeError::Truncated { position: 3 }))
        );
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn absurd_precision_scales_towards_zero() {
        let path = decode_with_precision("_p~iF~ps|U", u32::MAX).unwrap();
        assert_eq!(path.len(), 1);
        assert!(path[0].latitude.abs() < 1.0);
        assert!(path[0].longitude.abs() < 1.0);
    }

    #[test]
    fn precision_six() {
        let path = decode_with_precision("_izlhA~rlgdF", 6).unwrap();
        assert_eq!(path.len(), 1);
        assert!((path[0].latitude - 38.5).abs() < 1e-9);
        assert!((path[0].longitude - -120.2).abs() < 1e-9);
    }
}
