use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json,
};
use model::{
    journey::{JourneyRequest, DEFAULT_PROXIMITY_KM},
    story::Story,
};
use providers::ProviderClient;

use super::provider_error;
use crate::common::JsonResult;

pub(crate) async fn generate_story(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    Json(request): Json<JourneyRequest>,
) -> JsonResult<Story> {
    let story = providers
        .story_for(&request, DEFAULT_PROXIMITY_KM)
        .await
        .map_err(|why| {
            provider_error(
                why,
                &Method::POST,
                original_uri.path(),
                "Could not generate a story for this journey.",
            )
        })?;

    Ok(Json(story))
}
