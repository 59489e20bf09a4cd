use axum::{
    extract::{OriginalUri, Query, State},
    http::Method,
    Json,
};
use model::place::Place;
use providers::ProviderClient;
use serde::Deserialize;

use super::provider_error;
use crate::common::JsonResult;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeParams {
    q: String,
}

pub(crate) async fn geocode(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    Query(params): Query<GeocodeParams>,
) -> JsonResult<Place> {
    let place = providers.geocode(&params.q).await.map_err(|why| {
        provider_error(
            why,
            &Method::GET,
            original_uri.path(),
            "Could not geocode location.",
        )
    })?;

    Ok(Json(place))
}
