use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A saved player record, as mirrored from the store. Per-hole scores live
/// on the round roster, not here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub player_id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub profile_id: String,
    pub name: String,
}

/// One player's slot in the round in progress. `scores` is sparse: `None`
/// means the hole has not been scored and displays as that hole's par.
/// `total` and `relative_to_par` are projections of the score array and are
/// recomputed from scratch on every mutation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub player_id: String,
    pub name: String,
    pub scores: Vec<Option<i32>>,
    pub total: i32,
    pub relative_to_par: i32,
}

/// A persisted, completed round. Immutable once written, short of deleting
/// the whole record.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Scorecard {
    pub scorecard_id: String,
    pub user_id: String,
    pub course_id: String,
    pub course_name: String,
    pub date: NaiveDateTime,
    pub total_score: i32,
    pub relative_to_par: i32,
    pub players: Vec<ScorecardPlayer>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScorecardPlayer {
    pub player_id: String,
    pub player_name: String,
    pub scores: Vec<Option<i32>>,
    pub total_score: i32,
    pub relative_to_par: i32,
}
