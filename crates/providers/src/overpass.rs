use std::collections::HashMap;

use model::{
    place::{Location, Place},
    poi::{PointOfInterest, UNKNOWN_CATEGORY, UNKNOWN_NAME},
};
use polyline::Bounds;
use serde::Deserialize;
use utility::geo;

use crate::{ApiError, ProviderClient};

/// Tags searched for, as `(key, value)` pairs.
pub const POI_TAGS: &[(&str, &str)] = &[
    ("tourism", "hotel"),
    ("tourism", "motel"),
    ("leisure", "park"),
    ("amenity", "restaurant"),
];

/// Tag keys checked in order when picking a category.
const CATEGORY_KEYS: &[&str] = &["tourism", "leisure", "amenity"];

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Element {
    /// Only nodes carry a position of their own; ways and relations are
    /// skipped.
    pub fn to_poi(&self) -> Option<PointOfInterest> {
        let location = Location {
            lat: self.lat?,
            lon: self.lon?,
        };
        let name = self
            .tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| UNKNOWN_NAME.to_owned());
        let category = CATEGORY_KEYS
            .iter()
            .filter_map(|key| self.tags.get(*key))
            .find(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_owned());
        Some(PointOfInterest {
            name,
            category,
            location,
        })
    }
}

/// Overpass QL selecting all [`POI_TAGS`] inside `bounds`.
pub fn build_query(bounds: &Bounds) -> String {
    let bbox = format!(
        "{},{},{},{}",
        bounds.south_west.latitude,
        bounds.south_west.longitude,
        bounds.north_east.latitude,
        bounds.north_east.longitude
    );
    let selectors = POI_TAGS
        .iter()
        .map(|(key, value)| format!("  nwr[\"{key}\"=\"{value}\"]({bbox});\n"))
        .collect::<String>();
    format!("[out:json][timeout:25];\n(\n{selectors});\nout geom;\n")
}

pub fn to_pois(response: OverpassResponse) -> Vec<PointOfInterest> {
    response.elements.iter().filter_map(Element::to_poi).collect()
}

impl ProviderClient {
    /// POIs around the straight line between two places. Provider failures
    /// are logged and give an empty list.
    pub async fn fetch_pois(
        &self,
        source: &Place,
        destination: &Place,
        proximity_km: f64,
    ) -> Vec<PointOfInterest> {
        match self.try_fetch_pois(source, destination, proximity_km).await {
            Ok(pois) => pois,
            Err(why) => {
                log::error!("Error fetching POIs from Overpass API: {}", why);
                vec![]
            }
        }
    }

    pub async fn try_fetch_pois(
        &self,
        source: &Place,
        destination: &Place,
        proximity_km: f64,
    ) -> Result<Vec<PointOfInterest>, ApiError> {
        let bounds = geo::trip_bounding_box(
            source.coordinate(),
            destination.coordinate(),
            proximity_km,
        );
        let url = self.config().overpass_url.clone();
        let request = self
            .http()
            .post(&url)
            .form(&[("data", build_query(&bounds))]);
        let response: OverpassResponse = self.send(request, &url).await?;
        let pois = to_pois(response);
        log::info!("found {} POIs", pois.len());
        Ok(pois)
    }
}

#[cfg(test)]
mod tests {
    use polyline::Coordinate;

    use super::*;

    #[test]
    fn query_lists_every_tag_inside_box() {
        let bounds = Bounds {
            south_west: Coordinate::new(44.5, -93.5),
            north_east: Coordinate::new(47.0, -92.0),
        };
        let query = build_query(&bounds);
        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.contains("nwr[\"tourism\"=\"hotel\"](44.5,-93.5,47,-92);"));
        assert!(query.contains("nwr[\"amenity\"=\"restaurant\"](44.5,-93.5,47,-92);"));
        assert_eq!(query.matches("nwr[").count(), POI_TAGS.len());
        assert!(query.trim_end().ends_with("out geom;"));
    }

    #[test]
    fn elements_map_to_pois() {
        let response: OverpassResponse = serde_json::from_str(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 47.0, "lon": -91.6,
                 "tags": {"name": "Betty's Pies", "amenity": "restaurant"}},
                {"type": "node", "id": 2, "lat": 46.9, "lon": -91.7,
                 "tags": {"leisure": "park", "amenity": "restaurant"}},
                {"type": "way", "id": 3, "bounds": {}, "geometry": [],
                 "tags": {"name": "Big Park", "leisure": "park"}},
                {"type": "node", "id": 4, "lat": 46.8, "lon": -91.8}
            ]}"#,
        )
        .unwrap();
        let pois = to_pois(response);
        assert_eq!(pois.len(), 3);
        assert_eq!(pois[0].name, "Betty's Pies");
        assert_eq!(pois[0].category, "restaurant");
        assert_eq!(pois[1].name, UNKNOWN_NAME);
        assert_eq!(pois[1].category, "park");
        assert_eq!(pois[2].category, UNKNOWN_CATEGORY);
        assert_eq!(pois[2].location, Location { lat: 46.8, lon: -91.8 });
    }

    #[test]
    fn empty_response_has_no_pois() {
        let response: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(to_pois(response).is_empty());
    }
}
