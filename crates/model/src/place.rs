use polyline::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::ExampleData;

/// A named location as returned by the geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Place {
    #[serde(default)]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn distance_km_to(&self, other: &Place) -> f64 {
        geo::haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl ExampleData for Place {
    fn example_data() -> Self {
        Place::new("Minneapolis", 44.977753, -93.265011)
    }
}

/// A bare position, used where the provider sends no name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl From<Location> for Coordinate {
    fn from(location: Location) -> Self {
        Coordinate::new(location.lat, location.lon)
    }
}
