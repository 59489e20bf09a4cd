use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json,
};
use model::{
    journey::PoiRequest,
    poi::{self, HeatPoint, PointOfInterest},
};
use providers::{ApiError, ProviderClient};
use schemars::JsonSchema;
use serde::Serialize;

use super::provider_error;
use crate::common::JsonResult;

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PoisDto {
    pois: Vec<PointOfInterest>,
    heat_points: Vec<HeatPoint>,
}

/// Overpass failures are logged by the provider and end up as an empty
/// result, which is answered with 400 like any other trip without POIs.
pub(crate) async fn fetch_pois(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    Json(request): Json<PoiRequest>,
) -> JsonResult<PoisDto> {
    let pois = providers
        .fetch_pois(&request.source, &request.destination, request.proximity_km)
        .await;
    if pois.is_empty() {
        return Err(provider_error(
            ApiError::NoPointsOfInterest,
            &Method::POST,
            original_uri.path(),
            "No POIs found",
        ));
    }

    Ok(Json(PoisDto {
        heat_points: poi::heat_points(&pois),
        pois,
    }))
}
