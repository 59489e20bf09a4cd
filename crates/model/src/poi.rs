use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{place::Location, ExampleData};

pub const UNKNOWN_NAME: &str = "Unknown POI";
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PointOfInterest {
    pub name: String,
    pub category: String,
    pub location: Location,
}

impl PointOfInterest {
    pub fn heat_point(&self) -> HeatPoint {
        HeatPoint(self.location.lat, self.location.lon)
    }
}

impl ExampleData for PointOfInterest {
    fn example_data() -> Self {
        PointOfInterest {
            name: "Gooseberry Falls State Park".to_owned(),
            category: "park".to_owned(),
            location: Location {
                lat: 47.1399,
                lon: -91.4690,
            },
        }
    }
}

/// An unweighted `[lat, lon]` pair fed to a heat map layer. Dense areas show
/// up through repeated points, not through a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeatPoint(pub f64, pub f64);

pub fn heat_points(pois: &[PointOfInterest]) -> Vec<HeatPoint> {
    pois.iter().map(PointOfInterest::heat_point).collect()
}

/// Distinct POI names in the order they were found.
pub fn unique_names(pois: &[PointOfInterest]) -> Vec<String> {
    pois.iter()
        .map(|poi| poi.name.clone())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(name: &str, lat: f64, lon: f64) -> PointOfInterest {
        PointOfInterest {
            name: name.to_owned(),
            category: "restaurant".to_owned(),
            location: Location { lat, lon },
        }
    }

    #[test]
    fn heat_points_serialize_as_pairs() {
        let points = heat_points(&[poi("Betty's Pies", 47.0, -91.6)]);
        assert_eq!(serde_json::to_string(&points).unwrap(), "[[47.0,-91.6]]");
    }

    #[test]
    fn every_poi_is_one_point() {
        let same_spot = [poi("Betty's Pies", 47.0, -91.6), poi("Pie Shop", 47.0, -91.6)];
        let points = heat_points(&same_spot);
        assert_eq!(points, vec![HeatPoint(47.0, -91.6); 2]);
        assert_eq!(
            serde_json::to_value(points[0]).unwrap(),
            serde_json::json!([47.0, -91.6])
        );
    }

    #[test]
    fn unique_names_keep_first_occurrence() {
        let pois = [
            poi("Betty's Pies", 47.0, -91.6),
            poi(UNKNOWN_NAME, 46.0, -92.0),
            poi("Betty's Pies", 47.1, -91.5),
            poi(UNKNOWN_NAME, 45.0, -93.0),
        ];
        assert_eq!(unique_names(&pois), vec!["Betty's Pies", UNKNOWN_NAME]);
    }
}
