use std::collections::HashMap;

use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection, ResultSet,
};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};
use sql_middleware::{SqlMiddlewareDbError, SqliteParamsQuery, convert_sql_params};

use crate::model::course::{Course, CourseLayout};
use crate::model::types::{Player, Profile, Scorecard, ScorecardPlayer};

pub fn get_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i64 {
    row.get(field).and_then(|v| v.as_int()).map_or(0, |&v| v)
}

pub fn get_string(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

/// # Errors
///
/// Will return `Err` if the column is missing or does not hold valid json
pub fn parse_json_field<T>(
    row: &sql_middleware::middleware::CustomDbRow,
    field_name: &str,
) -> Result<T, SqlMiddlewareDbError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let json_text = row
        .get(field_name)
        .and_then(|v| v.as_text())
        .unwrap_or_default();

    serde_json::from_str(json_text).map_err(|e| {
        SqlMiddlewareDbError::Other(format!("Failed to parse {field_name} field: {e}"))
    })
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_query(
    conn: &MiddlewarePoolConnection,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<ResultSet, SqlMiddlewareDbError> {
    let query_and_params = QueryAndParams2 {
        query: query.to_string(),
        params,
    };

    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            let result = sqlite_conn
                .interact(move |db_conn| {
                    let converted_params = convert_sql_params::<SqliteParamsQuery>(
                        &query_and_params.params,
                        ConversionMode::Query,
                    )?;
                    let tx = db_conn.transaction()?;

                    let result_set = {
                        let mut stmt = tx.prepare(&query_and_params.query)?;

                        sql_middleware::sqlite_build_result_set(&mut stmt, &converted_params.0)?
                    };
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(result_set)
                })
                .await??;

            Ok(result)
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_profile(
    config_and_pool: &ConfigAndPool,
    profile_id: &str,
) -> Result<Option<Profile>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query = include_str!("../sql/functions/sqlite/01_get_profile.sql");
    let query_result = execute_query(
        &conn,
        query,
        vec![RowValues2::Text(profile_id.to_string())],
    )
    .await?;

    Ok(query_result.results.iter().next_back().map(|row| Profile {
        profile_id: get_string(row, "profile_id"),
        name: get_string(row, "name"),
    }))
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_players_for_user(
    config_and_pool: &ConfigAndPool,
    user_id: &str,
) -> Result<Vec<Player>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query = include_str!("../sql/functions/sqlite/02_get_players.sql");
    let query_result =
        execute_query(&conn, query, vec![RowValues2::Text(user_id.to_string())]).await?;

    let players = query_result
        .results
        .iter()
        .map(|row| Player {
            player_id: get_string(row, "player_id"),
            name: get_string(row, "name"),
        })
        .collect();

    Ok(players)
}

/// # Errors
///
/// Will return `Err` if the database query fails or a holes column holds
/// invalid json
pub async fn get_courses_for_user(
    config_and_pool: &ConfigAndPool,
    user_id: &str,
) -> Result<Vec<Course>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query = include_str!("../sql/functions/sqlite/03_get_courses.sql");
    let query_result =
        execute_query(&conn, query, vec![RowValues2::Text(user_id.to_string())]).await?;

    query_result
        .results
        .iter()
        .map(|row| {
            Ok(Course {
                course_id: get_string(row, "course_id"),
                name: get_string(row, "name"),
                layout: CourseLayout::from_hole_count(get_int(row, "layout")),
                holes: parse_json_field(row, "holes")?,
            })
        })
        .collect()
}

/// History read: scorecard headers joined to their course, children joined
/// to their player, grouped by scorecard id.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_scorecards_for_user(
    config_and_pool: &ConfigAndPool,
    user_id: &str,
) -> Result<Vec<Scorecard>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let header_query = include_str!("../sql/functions/sqlite/04_get_scorecards.sql");
    let headers =
        execute_query(&conn, header_query, vec![RowValues2::Text(user_id.to_string())]).await?;

    let child_query = include_str!("../sql/functions/sqlite/05_get_scorecard_players.sql");
    let children =
        execute_query(&conn, child_query, vec![RowValues2::Text(user_id.to_string())]).await?;

    let mut rows_by_scorecard: HashMap<String, Vec<ScorecardPlayer>> = HashMap::new();
    for row in &children.results {
        let scorecard_id = get_string(row, "scorecard_id");
        rows_by_scorecard
            .entry(scorecard_id)
            .or_default()
            .push(ScorecardPlayer {
                player_id: get_string(row, "player_id"),
                player_name: get_string(row, "player_name"),
                scores: parse_json_field(row, "scores")?,
                total_score: get_int(row, "total_score") as i32,
                relative_to_par: get_int(row, "relative_to_par") as i32,
            });
    }

    let scorecards = headers
        .results
        .iter()
        .map(|row| {
            let scorecard_id = get_string(row, "scorecard_id");
            let players = rows_by_scorecard.remove(&scorecard_id).unwrap_or_default();
            Scorecard {
                scorecard_id,
                user_id: get_string(row, "user_id"),
                course_id: get_string(row, "course_id"),
                course_name: get_string(row, "course_name"),
                date: row
                    .get("date")
                    .and_then(|v| v.as_timestamp())
                    .unwrap_or_else(|| chrono::Utc::now().naive_utc()),
                total_score: get_int(row, "total_score") as i32,
                relative_to_par: get_int(row, "relative_to_par") as i32,
                players,
            }
        })
        .collect();

    Ok(scorecards)
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn count_scorecard_players(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
) -> Result<i64, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;

    let query = "SELECT count(*) AS cnt FROM scorecard_players WHERE scorecard_id = ?1;";
    let query_result = execute_query(
        &conn,
        query,
        vec![RowValues2::Text(scorecard_id.to_string())],
    )
    .await?;

    Ok(query_result
        .results
        .first()
        .map_or(0, |row| get_int(row, "cnt")))
}
