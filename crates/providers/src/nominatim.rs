use model::place::Place;
use serde::Deserialize;
use utility::serde::f64_from_str_or_number;

use crate::{ApiError, ProviderClient};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(with = "f64_from_str_or_number")]
    pub lat: f64,
    #[serde(with = "f64_from_str_or_number")]
    pub lon: f64,
    pub display_name: Option<String>,
}

/// Picks the best (first) hit; the place keeps the name that was searched for.
pub fn first_place(name: &str, results: Vec<SearchResult>) -> Result<Place, ApiError> {
    results
        .into_iter()
        .next()
        .map(|result| Place::new(name, result.lat, result.lon))
        .ok_or_else(|| ApiError::LocationNotFound(name.to_owned()))
}

impl ProviderClient {
    /// Looks up the coordinates of a free text place name.
    pub async fn geocode(&self, name: &str) -> Result<Place, ApiError> {
        let url = format!("{}/search", self.config().nominatim_url);
        let request = self
            .http()
            .get(&url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")]);
        let results: Vec<SearchResult> = self.send(request, &url).await?;
        let place = first_place(name, results)?;
        log::info!("geocoded '{}' to {}, {}", name, place.lat, place.lon);
        Ok(place)
    }
}
