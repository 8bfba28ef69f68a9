use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection,
};
use sql_middleware::middleware::{QueryAndParams as QueryAndParams2, RowValues as RowValues2};
use sql_middleware::{SqlMiddlewareDbError, SqliteParamsExecute, convert_sql_params};

use crate::model::course::Course;
use crate::model::database::count_scorecard_players;
use crate::model::types::{Player, Profile, RosterEntry};

pub const TABLES_AND_DDL: &[(&str, &str)] = &[
    (
        "profiles",
        include_str!("../sql/schema/sqlite/00_profiles.sql"),
    ),
    ("players", include_str!("../sql/schema/sqlite/01_players.sql")),
    ("courses", include_str!("../sql/schema/sqlite/02_courses.sql")),
    (
        "scorecards",
        include_str!("../sql/schema/sqlite/03_scorecards.sql"),
    ),
    (
        "scorecard_players",
        include_str!("../sql/schema/sqlite/04_scorecard_players.sql"),
    ),
];

/// Idempotent schema bootstrap, run once at startup.
///
/// # Errors
///
/// Will return `Err` if the ddl fails
pub async fn create_tables(config_and_pool: &ConfigAndPool) -> Result<(), SqlMiddlewareDbError> {
    let schema = TABLES_AND_DDL
        .iter()
        .map(|(_, ddl)| *ddl)
        .collect::<Vec<_>>()
        .join("\n");
    execute_batch_sql(config_and_pool, &schema).await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_batch_sql(
    config_and_pool: &ConfigAndPool,
    query: &str,
) -> Result<(), SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let script = query.to_string();

    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            sqlite_conn
                .interact(move |db_conn| {
                    let tx = db_conn.transaction()?;
                    tx.execute_batch(&script)?;
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await??;
            Ok(())
        }
        MiddlewarePoolConnection::Postgres(mut pg_conn) => {
            let tx = pg_conn.transaction().await?;
            tx.batch_execute(&script).await?;
            tx.commit().await?;
            Ok(())
        }
    }
}

/// Runs one parameterized statement in its own transaction.
async fn execute_write(
    config_and_pool: &ConfigAndPool,
    query: &str,
    params: Vec<RowValues2>,
) -> Result<(), SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let query_and_params = QueryAndParams2 {
        query: query.to_string(),
        params,
    };

    match &conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            sqlite_conn
                .interact(move |db_conn| {
                    let converted_params = convert_sql_params::<SqliteParamsExecute>(
                        &query_and_params.params,
                        ConversionMode::Execute,
                    )?;
                    let tx = db_conn.transaction()?;
                    {
                        let mut stmt = tx.prepare(&query_and_params.query)?;
                        let _rs = stmt.execute(converted_params.0)?;
                    }
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await??;
            Ok(())
        }
        _ => Err(SqlMiddlewareDbError::Other(
            "Database type not supported for this operation".to_string(),
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn upsert_profile(
    config_and_pool: &ConfigAndPool,
    profile: &Profile,
) -> Result<(), SqlMiddlewareDbError> {
    let query = include_str!("../sql/functions/sqlite/06_upsert_profile.sql");
    execute_write(
        config_and_pool,
        query,
        vec![
            RowValues2::Text(profile.profile_id.clone()),
            RowValues2::Text(profile.name.clone()),
        ],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the holes cannot be serialized or the query fails
pub async fn upsert_course(
    config_and_pool: &ConfigAndPool,
    user_id: &str,
    course: &Course,
) -> Result<(), SqlMiddlewareDbError> {
    let holes_json = serde_json::to_string(&course.holes)
        .map_err(|e| SqlMiddlewareDbError::Other(format!("Failed to serialize holes: {e}")))?;

    let query = include_str!("../sql/functions/sqlite/07_upsert_course.sql");
    execute_write(
        config_and_pool,
        query,
        vec![
            RowValues2::Text(course.course_id.clone()),
            RowValues2::Text(user_id.to_string()),
            RowValues2::Text(course.name.clone()),
            RowValues2::Int(course.layout.hole_count() as i64),
            RowValues2::Text(holes_json),
        ],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn delete_course(
    config_and_pool: &ConfigAndPool,
    course_id: &str,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        config_and_pool,
        "DELETE FROM courses WHERE course_id = ?1;",
        vec![RowValues2::Text(course_id.to_string())],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn upsert_player(
    config_and_pool: &ConfigAndPool,
    user_id: &str,
    player: &Player,
) -> Result<(), SqlMiddlewareDbError> {
    let query = include_str!("../sql/functions/sqlite/08_upsert_player.sql");
    execute_write(
        config_and_pool,
        query,
        vec![
            RowValues2::Text(player.player_id.clone()),
            RowValues2::Text(user_id.to_string()),
            RowValues2::Text(player.name.clone()),
        ],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn update_player_name(
    config_and_pool: &ConfigAndPool,
    player_id: &str,
    name: &str,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        config_and_pool,
        "UPDATE players SET name = ?2 WHERE player_id = ?1;",
        vec![
            RowValues2::Text(player_id.to_string()),
            RowValues2::Text(name.to_string()),
        ],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn delete_player(
    config_and_pool: &ConfigAndPool,
    player_id: &str,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        config_and_pool,
        "DELETE FROM players WHERE player_id = ?1;",
        vec![RowValues2::Text(player_id.to_string())],
    )
    .await
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn insert_scorecard(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
    user_id: &str,
    course_id: &str,
    total_score: i32,
    relative_to_par: i32,
) -> Result<(), SqlMiddlewareDbError> {
    let query = include_str!("../sql/functions/sqlite/09_insert_scorecard.sql");
    execute_write(
        config_and_pool,
        query,
        vec![
            RowValues2::Text(scorecard_id.to_string()),
            RowValues2::Text(user_id.to_string()),
            RowValues2::Text(course_id.to_string()),
            RowValues2::Int(i64::from(total_score)),
            RowValues2::Int(i64::from(relative_to_par)),
        ],
    )
    .await
}

/// One row per roster entry, carrying the final score array as json.
///
/// # Errors
///
/// Will return `Err` if a score array cannot be serialized or the query fails
pub async fn insert_scorecard_players(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
    roster: &[RosterEntry],
) -> Result<(), SqlMiddlewareDbError> {
    fn build_insert_stmts(
        scorecard_id: &str,
        roster: &[RosterEntry],
    ) -> Result<Vec<QueryAndParams2>, SqlMiddlewareDbError> {
        let mut queries = vec![];
        for entry in roster {
            let insert_stmt =
                include_str!("../sql/functions/sqlite/10_insert_scorecard_player.sql");

            let scores_json = serde_json::to_string(entry.scores.as_slice()).map_err(|e| {
                SqlMiddlewareDbError::Other(format!("Failed to serialize scores: {e}"))
            })?;

            let param = vec![
                RowValues2::Text(crate::model::utils::new_record_id()),
                RowValues2::Text(scorecard_id.to_string()),
                RowValues2::Text(entry.player_id.clone()),
                RowValues2::Text(scores_json),
                RowValues2::Int(i64::from(entry.total)),
                RowValues2::Int(i64::from(entry.relative_to_par)),
            ];
            queries.push(QueryAndParams2 {
                query: insert_stmt.to_string(),
                params: param,
            });
        }
        Ok(queries)
    }

    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let queries = build_insert_stmts(scorecard_id, roster)?;

    if !queries.is_empty() {
        match &conn {
            MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
                sqlite_conn
                    .interact(move |db_conn| {
                        let tx = db_conn.transaction()?;
                        {
                            let mut stmt = tx.prepare(&queries[0].query)?;

                            for query in queries {
                                let converted_params = convert_sql_params::<SqliteParamsExecute>(
                                    &query.params,
                                    ConversionMode::Execute,
                                )?;

                                let _rs = stmt.execute(converted_params.0)?;
                            }
                        }
                        tx.commit()?;
                        Ok::<_, SqlMiddlewareDbError>(())
                    })
                    .await??;
            }
            _ => {
                return Err(SqlMiddlewareDbError::Other(
                    "Database type not supported for this operation".to_string(),
                ));
            }
        }
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn delete_scorecard_players(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
) -> Result<(), SqlMiddlewareDbError> {
    execute_write(
        config_and_pool,
        "DELETE FROM scorecard_players WHERE scorecard_id = ?1;",
        vec![RowValues2::Text(scorecard_id.to_string())],
    )
    .await
}

/// Deletes the scorecard header only. Refuses while child rows still
/// reference it, matching foreign-key enforcement.
///
/// # Errors
///
/// Will return `Err` if child rows remain or the database query fails
pub async fn delete_scorecard_row(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
) -> Result<(), SqlMiddlewareDbError> {
    let remaining = count_scorecard_players(config_and_pool, scorecard_id).await?;
    if remaining > 0 {
        return Err(SqlMiddlewareDbError::Other(format!(
            "foreign key constraint: {remaining} scorecard_players rows still reference scorecard {scorecard_id}"
        )));
    }

    execute_write(
        config_and_pool,
        "DELETE FROM scorecards WHERE scorecard_id = ?1;",
        vec![RowValues2::Text(scorecard_id.to_string())],
    )
    .await
}

/// Referential cleanup order is on the caller side: children first, then
/// the scorecard row.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn delete_scorecard(
    config_and_pool: &ConfigAndPool,
    scorecard_id: &str,
) -> Result<(), SqlMiddlewareDbError> {
    delete_scorecard_players(config_and_pool, scorecard_id).await?;
    delete_scorecard_row(config_and_pool, scorecard_id).await
}
