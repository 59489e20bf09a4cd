use axum::{
    extract::{OriginalUri, State},
    http::Method,
    Json,
};
use model::journey::{JourneyPlan, JourneyPlanRequest};
use providers::ProviderClient;

use super::provider_error;
use crate::common::JsonResult;

pub(crate) async fn plan_journey(
    OriginalUri(original_uri): OriginalUri,
    State(providers): State<ProviderClient>,
    Json(request): Json<JourneyPlanRequest>,
) -> JsonResult<JourneyPlan> {
    log::info!(
        "Planning journey from {} to {}",
        request.source,
        request.destination
    );
    let plan = providers.plan_journey(request).await.map_err(|why| {
        provider_error(
            why,
            &Method::POST,
            original_uri.path(),
            "Could not plan this journey.",
        )
    })?;

    Ok(Json(plan))
}
