use axum::{
    http::{Method, StatusCode},
    routing::{get, on, post},
    Router,
};
use database::{DatabaseError, PgDatabase};
use model::{
    history::{JourneyHeatmap, SaveJourneyRequest, SavedJourney},
    journey::{JourneyPlanRequest, JourneyRequest},
    place::Place,
    poi::PointOfInterest,
    route::DecodedRoute,
    story::Story,
};
use providers::ApiError;

use crate::{
    common::{route_not_found, schema, RouteErrorResponse, METHOD_FILTER_ALL},
    WebState,
};

mod geocode;
mod journey;
mod journeys;
mod pois;
mod polylines;
mod routes;
mod story;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/geocode", get(geocode::geocode))
        .route("/geocode/schema", get(schema::<Place>))
        .route("/routes", post(routes::fetch_routes))
        .route("/routes/schema", get(schema::<DecodedRoute>))
        .route("/pois", post(pois::fetch_pois))
        .route("/pois/schema", get(schema::<PointOfInterest>))
        .route("/story", post(story::generate_story))
        .route("/story/schema", get(schema::<Story>))
        .route("/journey", post(journey::plan_journey))
        .route("/journey/schema", get(schema::<JourneyPlanRequest>))
        .route("/journey/request/schema", get(schema::<JourneyRequest>))
        .route(
            "/journeys",
            get(journeys::list_journeys).post(journeys::save_journey),
        )
        .route("/journeys/schema", get(schema::<SavedJourney>))
        .route("/journeys/request/schema", get(schema::<SaveJourneyRequest>))
        .route("/journeys/heatmap/schema", get(schema::<JourneyHeatmap>))
        .route("/journeys/:id", get(journeys::get_journey))
        .route("/journeys/:id/heatmap", get(journeys::journey_heatmap))
        .route("/polyline/decode", get(polylines::decode))
        .route("/polyline/encode", post(polylines::encode))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

/// Attaches request details to a provider failure and logs it.
pub(crate) fn provider_error(
    why: ApiError,
    method: &Method,
    uri: &str,
    message: &str,
) -> RouteErrorResponse {
    log::error!("{} {}: {}", method, uri, why);
    let detail = why.to_string();
    RouteErrorResponse::from(why)
        .with_method(method)
        .with_uri(uri)
        .with_message(message)
        .with_detailed_information(detail)
}

/// Attaches request details to a database failure and logs it.
pub(crate) fn database_error(
    why: DatabaseError,
    method: &Method,
    uri: &str,
    message: &str,
) -> RouteErrorResponse {
    log::error!("{} {}: {}", method, uri, why);
    let detail = why.to_string();
    RouteErrorResponse::from(why)
        .with_method(method)
        .with_uri(uri)
        .with_message(message)
        .with_detailed_information(detail)
}

/// The journey history, or 503 when no database is configured.
pub(crate) fn history(
    database: Option<PgDatabase>,
    method: &Method,
    uri: &str,
) -> Result<PgDatabase, RouteErrorResponse> {
    database.ok_or_else(|| {
        RouteErrorResponse::new(StatusCode::SERVICE_UNAVAILABLE)
            .with_method(method)
            .with_uri(uri)
            .with_message("Journey history is not available, no database is configured.")
    })
}
