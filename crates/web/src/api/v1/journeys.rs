use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    Json,
};
use database::PgDatabase;
use model::{
    history::{JourneyHeatmap, NewJourney, SaveJourneyRequest, SavedJourney},
    route::DecodedRoute,
};
use providers::ProviderClient;
use schemars::JsonSchema;
use serde::Serialize;

use super::{database_error, history, provider_error};
use crate::common::{JsonResult, RouteResult};

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavedJourneyDto {
    message: String,
    journey: SavedJourney,
    /// Distance of the first route, as shown to the user.
    distance: Option<String>,
    routes: Vec<DecodedRoute>,
    poi_count: usize,
}

pub(crate) async fn save_journey(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    State(database): State<Option<PgDatabase>>,
    Json(request): Json<SaveJourneyRequest>,
) -> RouteResult<(StatusCode, Json<SavedJourneyDto>)> {
    let database = history(database, &Method::POST, original_uri.path())?;

    let routes = providers
        .fetch_decoded_routes(&request.source, &request.destination)
        .await
        .map_err(|why| {
            provider_error(
                why,
                &Method::POST,
                original_uri.path(),
                "Failed to calculate route.",
            )
        })?;
    let pois = providers
        .fetch_pois(&request.source, &request.destination, request.proximity_km)
        .await;

    let journey = NewJourney::new(request.source, request.destination, &routes, pois);
    let saved = database.save_journey(&journey).await.map_err(|why| {
        database_error(
            why,
            &Method::POST,
            original_uri.path(),
            "Could not save this journey.",
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SavedJourneyDto {
            message: "Journey saved successfully!".to_owned(),
            journey: saved,
            distance: routes.first().and_then(|route| route.distance.clone()),
            routes,
            poi_count: journey.pois.len(),
        }),
    ))
}

pub(crate) async fn list_journeys(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Option<PgDatabase>>,
) -> JsonResult<Vec<SavedJourney>> {
    let journeys = history(database, &Method::GET, original_uri.path())?
        .journeys()
        .await
        .map_err(|why| {
            database_error(
                why,
                &Method::GET,
                original_uri.path(),
                "Could not load journeys.",
            )
        })?;

    Ok(Json(journeys))
}

pub(crate) async fn get_journey(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Option<PgDatabase>>,
    Path(id): Path<i32>,
) -> JsonResult<SavedJourney> {
    let journey = history(database, &Method::GET, original_uri.path())?
        .journey(id)
        .await
        .map_err(|why| {
            database_error(
                why,
                &Method::GET,
                original_uri.path(),
                "Could not load this journey.",
            )
        })?;

    Ok(Json(journey))
}

pub(crate) async fn journey_heatmap(
    OriginalUri(original_uri): OriginalUri,
    State(database): State<Option<PgDatabase>>,
    Path(id): Path<i32>,
) -> JsonResult<JourneyHeatmap> {
    let heatmap = history(database, &Method::GET, original_uri.path())?
        .heatmap(id)
        .await
        .map_err(|why| {
            database_error(
                why,
                &Method::GET,
                original_uri.path(),
                "Could not load heat map data.",
            )
        })?;

    Ok(Json(heatmap))
}
