use model::{
    place::Place,
    route::{DecodedRoute, DirectionsResponse},
};

use crate::{ApiError, ProviderClient};

/// Rejects responses whose status is anything but `OK`.
pub fn check_status(response: DirectionsResponse) -> Result<DirectionsResponse, ApiError> {
    if response.is_ok() {
        Ok(response)
    } else {
        let mut status = response.status;
        if let Some(message) = response.error_message {
            status = format!("{status} ({message})");
        }
        Err(ApiError::RouteNotFound(status))
    }
}

impl ProviderClient {
    /// Requests driving routes, alternatives included, between two places.
    pub async fn fetch_routes(
        &self,
        source: &Place,
        destination: &Place,
    ) -> Result<DirectionsResponse, ApiError> {
        let key = self.config().directions_api_key()?;
        let url = self.config().directions_url.clone();
        let origin = format!("{},{}", source.lat, source.lon);
        let target = format!("{},{}", destination.lat, destination.lon);

        log::info!("Fetching directions from {origin} to {target}");
        let request = self.http().get(&url).query(&[
            ("origin", origin.as_str()),
            ("destination", target.as_str()),
            ("alternatives", "true"),
            ("key", key),
        ]);
        check_status(self.send(request, &url).await?)
    }

    /// Same as [`ProviderClient::fetch_routes`], with every overview polyline
    /// decoded.
    pub async fn fetch_decoded_routes(
        &self,
        source: &Place,
        destination: &Place,
    ) -> Result<Vec<DecodedRoute>, ApiError> {
        let response = self.fetch_routes(source, destination).await?;
        Ok(DecodedRoute::decode_all(response.routes)?)
    }
}
