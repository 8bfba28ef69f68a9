use sql_middleware::middleware::ConfigAndPool;

use crate::error::AppError;
use crate::model::database::get_profile;
use crate::model::database_write::{
    insert_scorecard, insert_scorecard_players, upsert_course, upsert_player,
};
use crate::model::types::Player;
use crate::model::utils::new_record_id;
use crate::round::RoundState;
use crate::sync::{ChangeFeed, RemoteEvent, StoreChange};

/// Writes a completed round out as a scorecard. The sequence is fixed:
/// profile check, course snapshot upsert, scorecard header insert, player
/// upserts, then one scorecard_player row per roster entry. No transaction
/// spans the steps; the first failure stops the sequence and leaves the
/// earlier writes in place.
///
/// # Errors
///
/// Will return `Err` if the round has no course or players, the profile is
/// missing, or any write fails
pub async fn save_round_scorecard(
    config_and_pool: &ConfigAndPool,
    feed: &ChangeFeed,
    owner: &str,
    round: &RoundState,
) -> Result<String, AppError> {
    let course = round
        .course
        .as_ref()
        .ok_or_else(|| AppError::Other("no course selected for this round".into()))?;
    if round.roster.is_empty() {
        return Err(AppError::Other("no players in this round".into()));
    }

    get_profile(config_and_pool, owner)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("profile {owner}")))?;

    upsert_course(config_and_pool, owner, course).await?;
    feed.publish(StoreChange::Courses {
        owner: owner.to_string(),
        event: RemoteEvent::Updated(course.clone()),
    });

    let total_score: i32 = round.roster.iter().map(|p| p.total).sum();
    let relative_to_par: i32 = round.roster.iter().map(|p| p.relative_to_par).sum();
    let scorecard_id = new_record_id();
    insert_scorecard(
        config_and_pool,
        &scorecard_id,
        owner,
        &course.course_id,
        total_score,
        relative_to_par,
    )
    .await?;

    for entry in &round.roster {
        let player = Player {
            player_id: entry.player_id.clone(),
            name: entry.name.clone(),
        };
        upsert_player(config_and_pool, owner, &player).await?;
        feed.publish(StoreChange::Players {
            owner: owner.to_string(),
            event: RemoteEvent::Updated(player),
        });
    }

    insert_scorecard_players(config_and_pool, &scorecard_id, &round.roster).await?;

    Ok(scorecard_id)
}
