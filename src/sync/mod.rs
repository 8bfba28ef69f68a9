pub mod feed;

pub use feed::{ChangeFeed, RemoteEvent, StoreChange};

use std::sync::Arc;

use sql_middleware::middleware::ConfigAndPool;
use tokio::sync::RwLock;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::model::course::Course;
use crate::model::database::{get_courses_for_user, get_players_for_user};
use crate::model::types::Player;

/// Rows that can be reconciled by id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.course_id
    }
}

impl Keyed for Player {
    fn key(&self) -> &str {
        &self.player_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    /// The event could not be applied in place; the caller must refetch the
    /// whole collection.
    RefetchRequired,
}

/// The reducer at the heart of the mirror: folds one feed event into the
/// local row set. Inserts and updates merge by id, deletes remove by id,
/// and `Unknown` demands a full refetch.
pub fn apply_remote_event<T: Keyed>(rows: &mut Vec<T>, event: RemoteEvent<T>) -> SyncOutcome {
    match event {
        RemoteEvent::Deleted { id } => {
            rows.retain(|r| r.key() != id);
            SyncOutcome::Applied
        }
        RemoteEvent::Inserted(row) | RemoteEvent::Updated(row) => {
            match rows.iter_mut().find(|r| r.key() == row.key()) {
                Some(existing) => *existing = row,
                None => rows.push(row),
            }
            SyncOutcome::Applied
        }
        RemoteEvent::Unknown => SyncOutcome::RefetchRequired,
    }
}

pub type Mirror<T> = Arc<RwLock<Vec<T>>>;

/// Local mirrors of the signed-in identity's `courses` and `players`
/// collections. Construction fetches both snapshots and attaches one drain
/// task per collection; shutdown detaches the tasks and empties the
/// mirrors. Consistency is last-writer-wins in event arrival order.
pub struct SyncSession {
    pub owner: String,
    pub courses: Mirror<Course>,
    pub players: Mirror<Player>,
    tasks: Vec<JoinHandle<()>>,
}

impl SyncSession {
    /// # Errors
    ///
    /// Will return `Err` if either snapshot fetch fails
    pub async fn start(
        owner: String,
        config_and_pool: ConfigAndPool,
        feed: &ChangeFeed,
    ) -> Result<Self, AppError> {
        let (course_rows, player_rows) = futures::try_join!(
            get_courses_for_user(&config_and_pool, &owner),
            get_players_for_user(&config_and_pool, &owner),
        )?;

        let courses: Mirror<Course> = Arc::new(RwLock::new(course_rows));
        let players: Mirror<Player> = Arc::new(RwLock::new(player_rows));

        let tasks = vec![
            tokio::spawn(drain_course_events(
                owner.clone(),
                config_and_pool.clone(),
                feed.subscribe(),
                Arc::clone(&courses),
            )),
            tokio::spawn(drain_player_events(
                owner.clone(),
                config_and_pool,
                feed.subscribe(),
                Arc::clone(&players),
            )),
        ];

        Ok(Self {
            owner,
            courses,
            players,
            tasks,
        })
    }

    /// Sign-out teardown: subscriptions die and both mirrors clear.
    pub async fn shutdown(self) {
        for task in &self.tasks {
            task.abort();
        }
        self.courses.write().await.clear();
        self.players.write().await.clear();
    }
}

async fn drain_course_events(
    owner: String,
    config_and_pool: ConfigAndPool,
    mut rx: broadcast::Receiver<StoreChange>,
    mirror: Mirror<Course>,
) {
    loop {
        match rx.recv().await {
            Ok(StoreChange::Courses { owner: o, event }) if o == owner => {
                let outcome = {
                    let mut rows = mirror.write().await;
                    apply_remote_event(&mut rows, event)
                };
                if outcome == SyncOutcome::RefetchRequired {
                    refetch_courses(&config_and_pool, &owner, &mirror).await;
                }
            }
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(_)) => {
                // Dropped events mean the mirror may have missed rows.
                refetch_courses(&config_and_pool, &owner, &mirror).await;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn drain_player_events(
    owner: String,
    config_and_pool: ConfigAndPool,
    mut rx: broadcast::Receiver<StoreChange>,
    mirror: Mirror<Player>,
) {
    loop {
        match rx.recv().await {
            Ok(StoreChange::Players { owner: o, event }) if o == owner => {
                let outcome = {
                    let mut rows = mirror.write().await;
                    apply_remote_event(&mut rows, event)
                };
                if outcome == SyncOutcome::RefetchRequired {
                    refetch_players(&config_and_pool, &owner, &mirror).await;
                }
            }
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(_)) => {
                refetch_players(&config_and_pool, &owner, &mirror).await;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn refetch_courses(config_and_pool: &ConfigAndPool, owner: &str, mirror: &Mirror<Course>) {
    match get_courses_for_user(config_and_pool, owner).await {
        Ok(rows) => *mirror.write().await = rows,
        Err(e) => eprintln!("course mirror refetch failed: {e}"),
    }
}

async fn refetch_players(config_and_pool: &ConfigAndPool, owner: &str, mirror: &Mirror<Player>) {
    match get_players_for_user(config_and_pool, owner).await {
        Ok(rows) => *mirror.write().await = rows,
        Err(e) => eprintln!("player mirror refetch failed: {e}"),
    }
}
