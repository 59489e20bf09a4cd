use model::history::{NewJourney, SavedJourney};
use sqlx::{Executor, Postgres};

use crate::{data_model::journey::JourneyRow, Result};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, journey: &NewJourney) -> Result<SavedJourney>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO journeys(
            source_name,
            source_lat,
            source_lon,
            destination_name,
            destination_lat,
            destination_lon,
            distance_km
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING
            id,
            source_name,
            source_lat,
            source_lon,
            destination_name,
            destination_lat,
            destination_lon,
            distance_km,
            created_at;
        ",
    )
    .bind(journey.source.name.as_str())
    .bind(journey.source.lat)
    .bind(journey.source.lon)
    .bind(journey.destination.name.as_str())
    .bind(journey.destination.lat)
    .bind(journey.destination.lon)
    .bind(journey.distance_km)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: JourneyRow| row.to_model())
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<SavedJourney>>
where
    E: Executor<'c, Database = Postgres>,
{
    let rows: Vec<JourneyRow> = sqlx::query_as(
        "
        SELECT
            id,
            source_name,
            source_lat,
            source_lon,
            destination_name,
            destination_lat,
            destination_lon,
            distance_km,
            created_at
        FROM
            journeys
        ORDER BY
            created_at DESC, id DESC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?;
    Ok(rows.into_iter().map(JourneyRow::to_model).collect())
}

pub async fn get<'c, E>(executor: E, id: i32) -> Result<SavedJourney>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id,
            source_name,
            source_lat,
            source_lon,
            destination_name,
            destination_lat,
            destination_lon,
            distance_km,
            created_at
        FROM
            journeys
        WHERE
            id = $1;
        ",
    )
    .bind(id)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: JourneyRow| row.to_model())
}
