use axum::{extract::Query, Json};
use polyline::{Bounds, Coordinate, Path, DEFAULT_PRECISION};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::common::{JsonResult, RouteErrorResponse};

/// Larger precisions overflow the integer accumulators for real coordinates.
const MAX_PRECISION: u32 = 10;

#[derive(Debug, Deserialize)]
pub(crate) struct DecodeQuery {
    points: String,
    precision: Option<u32>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DecodedPathDto {
    path: Path,
    bounds: Option<Bounds>,
    length_km: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EncodeRequest {
    coordinates: Vec<Coordinate>,
    precision: Option<u32>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub(crate) struct EncodedPathDto {
    points: String,
}

fn checked_precision(precision: Option<u32>) -> Result<u32, RouteErrorResponse> {
    match precision.unwrap_or(DEFAULT_PRECISION) {
        precision if precision <= MAX_PRECISION => Ok(precision),
        precision => Err(RouteErrorResponse::new(axum::http::StatusCode::BAD_REQUEST)
            .with_message(format!(
                "precision {precision} is out of range, at most {MAX_PRECISION} is supported."
            ))),
    }
}

pub(crate) async fn decode(Query(params): Query<DecodeQuery>) -> JsonResult<DecodedPathDto> {
    let precision = checked_precision(params.precision)?;
    let path = polyline::decode_with_precision(&params.points, precision)?;
    Ok(Json(DecodedPathDto {
        bounds: path.bounds(),
        length_km: geo::path_length(&path),
        path,
    }))
}

pub(crate) async fn encode(Json(request): Json<EncodeRequest>) -> JsonResult<EncodedPathDto> {
    let precision = checked_precision(request.precision)?;
    Ok(Json(EncodedPathDto {
        points: polyline::encode_with_precision(&request.coordinates, precision)?,
    }))
}
