use chrono::{DateTime, Utc};
use model::{history::SavedJourney, place::Place};
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct JourneyRow {
    pub id: i32,
    pub source_name: String,
    pub source_lat: f64,
    pub source_lon: f64,
    pub destination_name: String,
    pub destination_lat: f64,
    pub destination_lon: f64,
    pub distance_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl JourneyRow {
    pub fn to_model(self) -> SavedJourney {
        SavedJourney {
            id: self.id,
            source: Place::new(self.source_name, self.source_lat, self.source_lon),
            destination: Place::new(
                self.destination_name,
                self.destination_lat,
                self.destination_lon,
            ),
            distance_km: self.distance_km,
            created_at: self.created_at,
        }
    }
}
