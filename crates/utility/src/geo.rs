use polyline::{Bounds, Coordinate};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough length of one degree of latitude, also used for longitude when
/// padding search areas.
pub const KM_PER_DEGREE: f64 = 111.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Box spanning both ends of a trip, padded by `proximity_km` on every side.
///
/// The padding is converted with a flat 111 km per degree on both axes, so
/// the box gets narrower in kilometres towards the poles.
pub fn trip_bounding_box(
    source: Coordinate,
    destination: Coordinate,
    proximity_km: f64,
) -> Bounds {
    let padding = proximity_km / KM_PER_DEGREE;
    let bounds = Bounds::point(source).extend(destination);
    Bounds {
        south_west: Coordinate::new(
            bounds.south_west.latitude - padding,
            bounds.south_west.longitude - padding,
        ),
        north_east: Coordinate::new(
            bounds.north_east.latitude + padding,
            bounds.north_east.longitude + padding,
        ),
    }
}

pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of a path in kilometres, summed over consecutive points.
pub fn path_length(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| {
            haversine_distance(
                pair[0].latitude,
                pair[0].longitude,
                pair[1].latitude,
                pair[1].longitude,
            )
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINNEAPOLIS: Coordinate = Coordinate {
        latitude: 44.977753,
        longitude: -93.265011,
    };
    const DULUTH: Coordinate = Coordinate {
        latitude: 46.786671,
        longitude: -92.100487,
    };

    #[test]
    fn trip_box_is_padded_by_proximity() {
        let bounds = trip_bounding_box(DULUTH, MINNEAPOLIS, 11.1);
        assert!((bounds.south_west.latitude - (44.977753 - 0.1)).abs() < 1e-9);
        assert!((bounds.south_west.longitude - (-93.265011 - 0.1)).abs() < 1e-9);
        assert!((bounds.north_east.latitude - (46.786671 + 0.1)).abs() < 1e-9);
        assert!((bounds.north_east.longitude - (-92.100487 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn haversine_minneapolis_duluth() {
        let distance = haversine_distance(
            MINNEAPOLIS.latitude,
            MINNEAPOLIS.longitude,
            DULUTH.latitude,
            DULUTH.longitude,
        );
        assert!((distance - 220.4).abs() < 0.5, "{distance}");
    }

    #[test]
    fn path_length_of_single_point_is_zero() {
        assert_eq!(path_length(&[MINNEAPOLIS]), 0.0);
        assert!(path_length(&[MINNEAPOLIS, DULUTH]) > 200.0);
    }
}
