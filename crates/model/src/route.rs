use polyline::{Bounds, DecodeError, Path};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ExampleData;

/// Status the directions provider reports for a successful request.
pub const STATUS_OK: &str = "OK";

/// Body of a directions provider response.
///
/// Only the fields needed to draw a route are typed; everything else on a
/// route or leg is kept in `extra` and passed through untouched.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    pub error_message: Option<String>,
}

impl DirectionsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<Leg>,
    pub overview_polyline: OverviewPolyline,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Route {
    /// Decodes the overview polyline into coordinates.
    pub fn path(&self) -> Result<Path, DecodeError> {
        polyline::decode(&self.overview_polyline.points)
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.legs.first().map(|leg| leg.distance.value / 1000.0)
    }

    pub fn distance_text(&self) -> Option<&str> {
        self.legs.first().map(|leg| leg.distance.text.as_str())
    }

    pub fn duration_text(&self) -> Option<&str> {
        self.legs.first().map(|leg| leg.duration.text.as_str())
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Human readable text next to the raw value (metres or seconds).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverviewPolyline {
    pub points: String,
}

/// A route with its overview polyline decoded, ready to be drawn.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecodedRoute {
    pub summary: String,
    pub distance: Option<String>,
    pub distance_km: Option<f64>,
    pub duration: Option<String>,
    pub encoded_polyline: String,
    pub path: Path,
    pub bounds: Option<Bounds>,
    pub legs: Vec<Leg>,
}

impl DecodedRoute {
    pub fn decode(route: Route) -> Result<Self, DecodeError> {
        let path = route.path()?;
        Ok(Self {
            distance: route.distance_text().map(str::to_owned),
            distance_km: route.distance_km(),
            duration: route.duration_text().map(str::to_owned),
            bounds: path.bounds(),
            path,
            summary: route.summary,
            encoded_polyline: route.overview_polyline.points,
            legs: route.legs,
        })
    }

    pub fn decode_all(routes: Vec<Route>) -> Result<Vec<Self>, DecodeError> {
        routes.into_iter().map(Self::decode).collect()
    }
}

impl ExampleData for DecodedRoute {
    fn example_data() -> Self {
        let encoded_polyline = "_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_owned();
        let path = polyline::decode(&encoded_polyline).unwrap_or_default();
        DecodedRoute {
            summary: "I-5 N".to_owned(),
            distance: Some("589 km".to_owned()),
            distance_km: Some(589.0),
            duration: Some("5 hours 40 mins".to_owned()),
            bounds: path.bounds(),
            path,
            encoded_polyline,
            legs: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "geocoded_waypoints": [],
        "routes": [{
            "bounds": {},
            "copyrights": "Map data ©2024",
            "legs": [{
                "distance": { "text": "251 km", "value": 251234 },
                "duration": { "text": "2 hours 35 mins", "value": 9300 },
                "start_address": "Minneapolis, MN, USA",
                "end_address": "Duluth, MN, USA",
                "steps": []
            }],
            "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
            "summary": "I-35 N",
            "warnings": []
        }],
        "status": "OK"
    }"#;

    #[test]
    fn parses_and_decodes_directions() {
        let response: DirectionsResponse = serde_json::from_str(RESPONSE).unwrap();
        assert!(response.is_ok());
        let route = response.routes.into_iter().next().unwrap();
        assert_eq!(route.distance_km(), Some(251.234));
        assert!(route.extra.contains_key("copyrights"));

        let decoded = DecodedRoute::decode(route).unwrap();
        assert_eq!(decoded.summary, "I-35 N");
        assert_eq!(decoded.distance.as_deref(), Some("251 km"));
        assert_eq!(decoded.duration.as_deref(), Some("2 hours 35 mins"));
        assert_eq!(decoded.path.len(), 3);
        let bounds = decoded.bounds.unwrap();
        assert_eq!(bounds.north_east.latitude, 43.252);
        assert!(decoded.legs[0].extra.contains_key("steps"));
    }

    #[test]
    fn failed_status_has_no_routes() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "routes": []}"#).unwrap();
        assert!(!response.is_ok());
        assert!(response.routes.is_empty());
    }

    #[test]
    fn broken_polyline_fails_route() {
        let mut route = serde_json::from_str::<DirectionsResponse>(RESPONSE)
            .unwrap()
            .routes
            .remove(0);
        route.overview_polyline.points = "_p~iF".to_owned();
        assert!(DecodedRoute::decode(route).is_err());
    }

    #[test]
    fn example_route_is_decoded() {
        assert_eq!(DecodedRoute::example_data().path.len(), 3);
    }
}
