use model::{place::Location, poi::PointOfInterest};
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PoiRow {
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
}

impl PoiRow {
    pub fn to_model(self) -> PointOfInterest {
        PointOfInterest {
            name: self.name,
            category: self.category,
            location: Location {
                lat: self.lat,
                lon: self.lon,
            },
        }
    }
}
