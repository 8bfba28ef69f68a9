mod common;

use std::time::Duration;

use cardmate::model::database_write::{upsert_player, upsert_profile};
use cardmate::model::types::{Player, Profile};
use cardmate::sync::{
    ChangeFeed, RemoteEvent, StoreChange, SyncOutcome, SyncSession, apply_remote_event,
};

fn player(id: &str, name: &str) -> Player {
    Player {
        player_id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test3_reducer_insert_and_update_merge_by_id() {
    let mut rows = vec![player("p1", "Avery")];

    let outcome = apply_remote_event(&mut rows, RemoteEvent::Inserted(player("p2", "Blake")));
    assert_eq!(outcome, SyncOutcome::Applied);
    assert_eq!(rows.len(), 2);

    let outcome = apply_remote_event(&mut rows, RemoteEvent::Updated(player("p1", "Avery Jr")));
    assert_eq!(outcome, SyncOutcome::Applied);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Avery Jr");

    // An update for a row the mirror never saw still merges by id.
    let outcome = apply_remote_event(&mut rows, RemoteEvent::Updated(player("p3", "Casey")));
    assert_eq!(outcome, SyncOutcome::Applied);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test3_reducer_delete_removes_by_id() {
    let mut rows = vec![player("p1", "Avery"), player("p2", "Blake")];

    let outcome = apply_remote_event(
        &mut rows,
        RemoteEvent::Deleted {
            id: "p1".to_string(),
        },
    );
    assert_eq!(outcome, SyncOutcome::Applied);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_id, "p2");

    // Deleting an id that is not mirrored changes nothing.
    let outcome = apply_remote_event(
        &mut rows,
        RemoteEvent::Deleted {
            id: "p9".to_string(),
        },
    );
    assert_eq!(outcome, SyncOutcome::Applied);
    assert_eq!(rows.len(), 1);
}

#[test]
fn test3_reducer_unknown_demands_refetch() {
    let mut rows = vec![player("p1", "Avery")];

    let outcome = apply_remote_event(&mut rows, RemoteEvent::<Player>::Unknown);
    assert_eq!(outcome, SyncOutcome::RefetchRequired);
    // The mirror is left alone until the refetch lands.
    assert_eq!(rows.len(), 1);
}

async fn wait_for_player_count(session: &SyncSession, expected: usize) {
    for _ in 0..200 {
        if session.players.read().await.len() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let actual = session.players.read().await.len();
    panic!("player mirror never reached {expected} rows (stuck at {actual})");
}

#[tokio::test]
async fn test3_session_mirrors_feed_events() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = common::setup_test_context().await?;
    let owner = "user-1";

    upsert_profile(
        &ctx.config_and_pool,
        &Profile {
            profile_id: owner.to_string(),
            name: owner.to_string(),
        },
    )
    .await?;
    upsert_player(&ctx.config_and_pool, owner, &player("p1", "Avery")).await?;

    let feed = ChangeFeed::new();
    let session =
        SyncSession::start(owner.to_string(), ctx.config_and_pool.clone(), &feed).await?;

    // The snapshot fetch sees the pre-existing row.
    assert_eq!(session.players.read().await.len(), 1);
    assert!(session.courses.read().await.is_empty());

    // An insert event lands in the mirror without a refetch.
    feed.publish(StoreChange::Players {
        owner: owner.to_string(),
        event: RemoteEvent::Inserted(player("p2", "Blake")),
    });
    wait_for_player_count(&session, 2).await;

    // Another identity's events are filtered out.
    feed.publish(StoreChange::Players {
        owner: "someone-else".to_string(),
        event: RemoteEvent::Inserted(player("p3", "Casey")),
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(session.players.read().await.len(), 2);

    // Unknown falls back to a full refetch, which drops the phantom row
    // that was never persisted.
    feed.publish(StoreChange::Players {
        owner: owner.to_string(),
        event: RemoteEvent::Unknown,
    });
    wait_for_player_count(&session, 1).await;

    // Deletes remove by id.
    upsert_player(&ctx.config_and_pool, owner, &player("p4", "Drew")).await?;
    feed.publish(StoreChange::Players {
        owner: owner.to_string(),
        event: RemoteEvent::Inserted(player("p4", "Drew")),
    });
    wait_for_player_count(&session, 2).await;
    feed.publish(StoreChange::Players {
        owner: owner.to_string(),
        event: RemoteEvent::Deleted {
            id: "p1".to_string(),
        },
    });
    wait_for_player_count(&session, 1).await;

    Ok(())
}

#[tokio::test]
async fn test3_signout_clears_mirrors() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = common::setup_test_context().await?;
    let owner = "user-1";

    upsert_profile(
        &ctx.config_and_pool,
        &Profile {
            profile_id: owner.to_string(),
            name: owner.to_string(),
        },
    )
    .await?;
    upsert_player(&ctx.config_and_pool, owner, &player("p1", "Avery")).await?;

    let feed = ChangeFeed::new();
    let session =
        SyncSession::start(owner.to_string(), ctx.config_and_pool.clone(), &feed).await?;
    assert_eq!(session.players.read().await.len(), 1);

    let players = std::sync::Arc::clone(&session.players);
    let courses = std::sync::Arc::clone(&session.courses);
    session.shutdown().await;

    assert!(players.read().await.is_empty());
    assert!(courses.read().await.is_empty());
    Ok(())
}
