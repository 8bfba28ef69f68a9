mod common;

use cardmate::controller::scorecard::save_round_scorecard;
use cardmate::model::database::{
    count_scorecard_players, get_courses_for_user, get_players_for_user, get_scorecards_for_user,
};
use cardmate::model::database_write::{
    delete_scorecard, delete_scorecard_row, upsert_profile,
};
use cardmate::model::types::{Player, Profile};
use cardmate::round::RoundState;
use cardmate::sync::ChangeFeed;

fn player(id: &str, name: &str) -> Player {
    Player {
        player_id: id.to_string(),
        name: name.to_string(),
    }
}

async fn seeded_round(
    ctx: &common::TestContext,
    owner: &str,
) -> Result<RoundState, Box<dyn std::error::Error>> {
    upsert_profile(
        &ctx.config_and_pool,
        &Profile {
            profile_id: owner.to_string(),
            name: owner.to_string(),
        },
    )
    .await?;

    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));
    round.add_player(&player("p2", "Blake"));

    round.set_score("p1", 1, 4);
    round.set_score("p1", 2, 3);
    round.set_score("p2", 1, 2);
    Ok(round)
}

#[tokio::test]
async fn test4_save_writes_the_full_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = common::setup_test_context().await?;
    let owner = "user-1";
    let round = seeded_round(&ctx, owner).await?;
    let feed = ChangeFeed::new();

    let scorecard_id =
        save_round_scorecard(&ctx.config_and_pool, &feed, owner, &round).await?;

    // Course snapshot was upserted.
    let courses = get_courses_for_user(&ctx.config_and_pool, owner).await?;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_id, "c1");
    assert_eq!(courses[0].holes.len(), 9);

    // Players were upserted.
    let players = get_players_for_user(&ctx.config_and_pool, owner).await?;
    assert_eq!(players.len(), 2);

    // Header totals are the sums across the roster: Avery 29/+1, Blake 27/-1.
    let scorecards = get_scorecards_for_user(&ctx.config_and_pool, owner).await?;
    assert_eq!(scorecards.len(), 1);
    let scorecard = &scorecards[0];
    assert_eq!(scorecard.scorecard_id, scorecard_id);
    assert_eq!(scorecard.course_name, "Cedar Hills");
    assert_eq!(scorecard.total_score, 56);
    assert_eq!(scorecard.relative_to_par, 0);

    // Child rows carry each player's final score array.
    assert_eq!(scorecard.players.len(), 2);
    let avery = scorecard
        .players
        .iter()
        .find(|p| p.player_name == "Avery")
        .expect("Avery row missing");
    assert_eq!(avery.scores, vec![Some(4), Some(3)]);
    assert_eq!(avery.total_score, 29);
    assert_eq!(avery.relative_to_par, 1);

    let blake = scorecard
        .players
        .iter()
        .find(|p| p.player_name == "Blake")
        .expect("Blake row missing");
    assert_eq!(blake.scores, vec![Some(2)]);
    assert_eq!(blake.total_score, 27);
    assert_eq!(blake.relative_to_par, -1);

    Ok(())
}

#[tokio::test]
async fn test4_save_requires_profile_and_roster() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = common::setup_test_context().await?;
    let feed = ChangeFeed::new();

    // Missing profile stops the sequence before anything is written.
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));
    let result = save_round_scorecard(&ctx.config_and_pool, &feed, "ghost", &round).await;
    assert!(result.is_err());
    assert!(
        get_scorecards_for_user(&ctx.config_and_pool, "ghost")
            .await?
            .is_empty()
    );

    // An empty roster is refused outright.
    upsert_profile(
        &ctx.config_and_pool,
        &Profile {
            profile_id: "user-1".to_string(),
            name: "user-1".to_string(),
        },
    )
    .await?;
    let mut empty = RoundState::new();
    empty.select_course(common::nine_hole_course("c1"));
    let result = save_round_scorecard(&ctx.config_and_pool, &feed, "user-1", &empty).await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test4_delete_enforces_child_order() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = common::setup_test_context().await?;
    let owner = "user-1";
    let round = seeded_round(&ctx, owner).await?;
    let feed = ChangeFeed::new();

    let scorecard_id =
        save_round_scorecard(&ctx.config_and_pool, &feed, owner, &round).await?;
    assert_eq!(
        count_scorecard_players(&ctx.config_and_pool, &scorecard_id).await?,
        2
    );

    // Dropping the header while children remain is rejected, and nothing
    // is lost.
    let out_of_order = delete_scorecard_row(&ctx.config_and_pool, &scorecard_id).await;
    assert!(out_of_order.is_err());
    assert_eq!(
        count_scorecard_players(&ctx.config_and_pool, &scorecard_id).await?,
        2
    );
    assert_eq!(
        get_scorecards_for_user(&ctx.config_and_pool, owner).await?.len(),
        1
    );

    // The ordered delete removes children first, then the header; no
    // orphans remain.
    delete_scorecard(&ctx.config_and_pool, &scorecard_id).await?;
    assert_eq!(
        count_scorecard_players(&ctx.config_and_pool, &scorecard_id).await?,
        0
    );
    assert!(
        get_scorecards_for_user(&ctx.config_and_pool, owner)
            .await?
            .is_empty()
    );

    Ok(())
}
