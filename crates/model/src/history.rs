use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    journey::{default_proximity_km, DEFAULT_PROXIMITY_KM},
    place::{Location, Place},
    poi::{self, HeatPoint, PointOfInterest},
    route::DecodedRoute,
    ExampleData,
};

/// Journey to keep, both places already geocoded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveJourneyRequest {
    pub source: Place,
    pub destination: Place,
    #[serde(default = "default_proximity_km", alias = "proximity_km")]
    pub proximity_km: f64,
}

impl ExampleData for SaveJourneyRequest {
    fn example_data() -> Self {
        SaveJourneyRequest {
            source: Place::new("Minneapolis", 44.977753, -93.265011),
            destination: Place::new("Duluth", 46.786671, -92.100487),
            proximity_km: DEFAULT_PROXIMITY_KM,
        }
    }
}

/// A journey about to be stored, with the POIs found along it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJourney {
    pub source: Place,
    pub destination: Place,
    pub distance_km: Option<f64>,
    pub pois: Vec<PointOfInterest>,
}

impl NewJourney {
    /// The journey distance is the one of the first (preferred) route.
    pub fn new(
        source: Place,
        destination: Place,
        routes: &[DecodedRoute],
        pois: Vec<PointOfInterest>,
    ) -> Self {
        Self {
            source,
            destination,
            distance_km: routes.first().and_then(|route| route.distance_km),
            pois,
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedJourney {
    pub id: i32,
    pub source: Place,
    pub destination: Place,
    pub distance_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl ExampleData for SavedJourney {
    fn example_data() -> Self {
        SavedJourney {
            id: 1,
            source: Place::new("Minneapolis", 44.977753, -93.265011),
            destination: Place::new("Duluth", 46.786671, -92.100487),
            distance_km: Some(251.234),
            created_at: DateTime::from_timestamp(1_729_252_800, 0).unwrap_or_default(),
        }
    }
}

/// POIs stored with a journey, ready for a heat map layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyHeatmap {
    pub journey_id: i32,
    pub pois: Vec<PointOfInterest>,
    pub heat_points: Vec<HeatPoint>,
}

impl JourneyHeatmap {
    pub fn new(journey_id: i32, pois: Vec<PointOfInterest>) -> Self {
        Self {
            journey_id,
            heat_points: poi::heat_points(&pois),
            pois,
        }
    }
}

impl ExampleData for JourneyHeatmap {
    fn example_data() -> Self {
        JourneyHeatmap::new(
            1,
            vec![
                PointOfInterest::example_data(),
                PointOfInterest {
                    name: "Split Rock Lodge".to_owned(),
                    category: "hotel".to_owned(),
                    location: Location {
                        lat: 47.1836,
                        lon: -91.3924,
                    },
                },
            ],
        )
    }
}
