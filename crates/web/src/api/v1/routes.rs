use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json,
};
use model::{journey::JourneyRequest, route::DecodedRoute};
use providers::ProviderClient;
use schemars::JsonSchema;
use serde::Serialize;

use super::provider_error;
use crate::common::JsonResult;

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoutesDto {
    /// Distance of the first route, as shown to the user.
    distance: Option<String>,
    routes: Vec<DecodedRoute>,
}

pub(crate) async fn fetch_routes(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    Json(request): Json<JourneyRequest>,
) -> JsonResult<RoutesDto> {
    let routes = providers
        .fetch_decoded_routes(&request.source, &request.destination)
        .await
        .map_err(|why| {
            provider_error(
                why,
                &Method::POST,
                original_uri.path(),
                "Could not fetch routes.",
            )
        })?;

    Ok(Json(RoutesDto {
        distance: routes.first().and_then(|route| route.distance.clone()),
        routes,
    }))
}
