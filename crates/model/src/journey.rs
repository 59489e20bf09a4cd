use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    place::Place,
    poi::{HeatPoint, PointOfInterest},
    route::DecodedRoute,
    ExampleData,
};

pub const DEFAULT_MOOD: &str = "adventurous";
pub const DEFAULT_PROXIMITY_KM: f64 = 10.0;

pub fn default_mood() -> String {
    DEFAULT_MOOD.to_owned()
}

pub fn default_preferred_stops() -> Vec<String> {
    ["restaurants", "motels", "parks"]
        .map(str::to_owned)
        .to_vec()
}

pub fn default_proximity_km() -> f64 {
    DEFAULT_PROXIMITY_KM
}

/// Two geocoded places plus the traveller's preferences.
///
/// Field names are accepted in snake case as well, which is what the browser
/// client sends.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRequest {
    pub source: Place,
    pub destination: Place,
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_preferred_stops", alias = "preferred_stops")]
    pub preferred_stops: Vec<String>,
}

impl ExampleData for JourneyRequest {
    fn example_data() -> Self {
        JourneyRequest {
            source: Place::new("Minneapolis", 44.977753, -93.265011),
            destination: Place::new("Duluth", 46.786671, -92.100487),
            mood: default_mood(),
            preferred_stops: default_preferred_stops(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoiRequest {
    pub source: Place,
    pub destination: Place,
    #[serde(default = "default_proximity_km", alias = "proximity_km")]
    pub proximity_km: f64,
}

/// Journey given by place names only; geocoding happens server side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPlanRequest {
    pub source: String,
    pub destination: String,
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_preferred_stops", alias = "preferred_stops")]
    pub preferred_stops: Vec<String>,
    #[serde(default = "default_proximity_km", alias = "proximity_km")]
    pub proximity_km: f64,
}

impl ExampleData for JourneyPlanRequest {
    fn example_data() -> Self {
        JourneyPlanRequest {
            source: "Minneapolis".to_owned(),
            destination: "Duluth".to_owned(),
            mood: default_mood(),
            preferred_stops: default_preferred_stops(),
            proximity_km: DEFAULT_PROXIMITY_KM,
        }
    }
}

/// Everything a map client needs to show one journey.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPlan {
    pub source: Place,
    pub destination: Place,
    pub straight_line_km: f64,
    pub routes: Vec<DecodedRoute>,
    pub pois: Vec<PointOfInterest>,
    pub heat_points: Vec<HeatPoint>,
    pub story: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_payload_is_accepted() {
        let request: JourneyRequest = serde_json::from_str(
            r#"{
                "source": {"name": "Minneapolis", "lat": 44.97, "lon": -93.26},
                "destination": {"name": "Duluth", "lat": 46.78, "lon": -92.1},
                "mood": "relaxed",
                "preferred_stops": ["parks"]
            }"#,
        )
        .unwrap();
        assert_eq!(request.mood, "relaxed");
        assert_eq!(request.preferred_stops, vec!["parks"]);
    }

    #[test]
    fn preferences_have_defaults() {
        let request: PoiRequest = serde_json::from_str(
            r#"{
                "source": {"lat": 44.97, "lon": -93.26},
                "destination": {"lat": 46.78, "lon": -92.1}
            }"#,
        )
        .unwrap();
        assert_eq!(request.proximity_km, 10.0);
        assert_eq!(request.source.name, "");

        let plan: JourneyPlanRequest =
            serde_json::from_str(r#"{"source": "A", "destination": "B"}"#).unwrap();
        assert_eq!(plan.mood, DEFAULT_MOOD);
        assert_eq!(plan.preferred_stops, default_preferred_stops());
    }
}
