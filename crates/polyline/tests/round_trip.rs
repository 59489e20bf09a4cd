//! Round trip laws over random paths.

use polyline::{decode_with_precision, encode_with_precision, Coordinate};
use proptest::prelude::*;

fn anywhere() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(Coordinate::from)
}

/// Poles, antimeridian and the origin, so consecutive points can be a full
/// hemisphere apart and deltas need many chunks.
fn extreme() -> impl Strategy<Value = Coordinate> {
    (
        prop::sample::select(vec![-90.0, 0.0, 90.0]),
        prop::sample::select(vec![-180.0, 0.0, 180.0]),
    )
        .prop_map(Coordinate::from)
}

fn path() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(prop_oneof![3 => anywhere(), 1 => extreme()], 0..300)
}

proptest! {
    #[test]
    fn decode_reverses_encode(path in path(), precision in prop::sample::select(vec![5u32, 6])) {
        let encoded = encode_with_precision(&path, precision).unwrap();
        let decoded = decode_with_precision(&encoded, precision).unwrap();

        prop_assert_eq!(decoded.len(), path.len());
        // at least one byte per axis
        prop_assert!(decoded.len() * 2 <= encoded.len());

        let tolerance = 10f64.powi(-(precision as i32));
        for (decoded, original) in decoded.iter().zip(&path) {
            prop_assert!(
                (decoded.latitude - original.latitude).abs() <= tolerance,
                "latitude {} became {}", original.latitude, decoded.latitude
            );
            prop_assert!(
                (decoded.longitude - original.longitude).abs() <= tolerance,
                "longitude {} became {}", original.longitude, decoded.longitude
            );
        }
    }

    #[test]
    fn decoded_paths_encode_to_the_same_text(path in path(), precision in prop::sample::select(vec![5u32, 6])) {
        let encoded = encode_with_precision(&path, precision).unwrap();
        let decoded = decode_with_precision(&encoded, precision).unwrap();
        prop_assert_eq!(encode_with_precision(&decoded, precision).unwrap(), encoded);
    }
}

#[test]
fn hemisphere_jumps_round_trip() {
    let path = [(-90.0, -180.0), (90.0, 180.0), (-90.0, 180.0), (90.0, -180.0)]
        .map(Coordinate::from);
    for precision in [5, 6] {
        let encoded = encode_with_precision(&path, precision).unwrap();
        let decoded = decode_with_precision(&encoded, precision).unwrap();
        assert_eq!(&decoded[..], &path[..]);
    }
}
