use model::poi::PointOfInterest;
use sqlx::{Executor, PgConnection, Postgres, QueryBuilder};

use crate::{data_model::poi::PoiRow, Result};

use super::convert_error;

/// Rows per statement; five binds each stays far below Postgres' bind limit.
const MAX_CHUNK_SIZE: usize = 1000;

fn insert_statement<'a>(
    journey_id: i32,
    pois: &'a [PointOfInterest],
) -> QueryBuilder<'a, Postgres> {
    let mut builder =
        QueryBuilder::new("INSERT INTO pois (journey_id, name, category, lat, lon) ");
    builder.push_values(pois, |mut row, poi| {
        row.push_bind(journey_id)
            .push_bind(poi.name.as_str())
            .push_bind(poi.category.as_str())
            .push_bind(poi.location.lat)
            .push_bind(poi.location.lon);
    });
    builder
}

/// Stores the POIs of a journey, returns the number of rows written.
pub async fn insert_all(
    connection: &mut PgConnection,
    journey_id: i32,
    pois: &[PointOfInterest],
) -> Result<u64> {
    let mut stored = 0;
    for chunk in pois.chunks(MAX_CHUNK_SIZE) {
        let mut statement = insert_statement(journey_id, chunk);
        stored += statement
            .build()
            .execute(&mut *connection)
            .await
            .map_err(convert_error)?
            .rows_affected();
    }
    Ok(stored)
}

pub async fn get_for_journey<'c, E>(
    executor: E,
    journey_id: i32,
) -> Result<Vec<PointOfInterest>>
where
    E: Executor<'c, Database = Postgres>,
{
    let rows: Vec<PoiRow> = sqlx::query_as(
        "
        SELECT
            name,
            category,
            lat,
            lon
        FROM
            pois
        WHERE
            journey_id = $1
        ORDER BY
            id ASC;
        ",
    )
    .bind(journey_id)
    .fetch_all(executor)
    .await
    .map_err(convert_error)?;
    Ok(rows.into_iter().map(PoiRow::to_model).collect())
}

#[cfg(test)]
mod tests {
    use model::ExampleData;

    use super::*;

    #[test]
    fn one_placeholder_group_per_poi() {
        let pois = vec![PointOfInterest::example_data(); 2];
        let statement = insert_statement(7, &pois);
        assert_eq!(
            statement.sql(),
            "INSERT INTO pois (journey_id, name, category, lat, lon) \
             VALUES ($1, $2, $3, $4, $5), ($6, $7, $8, $9, $10)"
        );
    }
}
