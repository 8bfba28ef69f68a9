use serde_json::Value;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::ConfigAndPool;

use crate::model::course::{Course, CourseLayout};
use crate::model::database::{get_courses_for_user, get_players_for_user};
use crate::model::database_write::{upsert_course, upsert_player, upsert_profile};
use crate::model::types::{Player, Profile};
use crate::model::utils::new_record_id;

/// Seeds profiles, players, and courses from a startup json file. Rows that
/// already exist by name are left alone, so re-running with the same file is
/// harmless.
///
/// format we have is this:
/// [{ "profile": "<owner id>", "name": "Display Name"
/// , "players": ["Player One", "Player Two", ...]
/// , "courses": [{"name": "Course Name", "layout": <9 or 18>}, ...]
/// }]
///
/// # Errors
///
/// Will return `Err` if a database write fails
pub async fn db_prefill(
    json: &Value,
    config_and_pool: &ConfigAndPool,
) -> Result<(), SqlMiddlewareDbError> {
    let Some(entries) = json.as_array() else {
        return Ok(());
    };

    for entry in entries {
        let Some(profile_id) = entry["profile"].as_str() else {
            continue;
        };
        let name = entry["name"].as_str().unwrap_or(profile_id);

        upsert_profile(
            config_and_pool,
            &Profile {
                profile_id: profile_id.to_string(),
                name: name.to_string(),
            },
        )
        .await?;

        let existing_players = get_players_for_user(config_and_pool, profile_id).await?;
        if let Some(players) = entry["players"].as_array() {
            for player_name in players.iter().filter_map(Value::as_str) {
                if existing_players.iter().any(|p| p.name == player_name) {
                    continue;
                }
                upsert_player(
                    config_and_pool,
                    profile_id,
                    &Player {
                        player_id: new_record_id(),
                        name: player_name.to_string(),
                    },
                )
                .await?;
            }
        }

        let existing_courses = get_courses_for_user(config_and_pool, profile_id).await?;
        if let Some(courses) = entry["courses"].as_array() {
            for course in courses {
                let Some(course_name) = course["name"].as_str() else {
                    continue;
                };
                if existing_courses.iter().any(|c| c.name == course_name) {
                    continue;
                }
                let layout = CourseLayout::from_hole_count(course["layout"].as_i64().unwrap_or(18));
                let course = Course::new(new_record_id(), course_name.to_string(), layout);
                upsert_course(config_and_pool, profile_id, &course).await?;
            }
        }
    }

    Ok(())
}
