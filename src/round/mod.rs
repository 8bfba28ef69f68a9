use crate::model::course::Course;
use crate::model::score::round_totals;
use crate::model::types::{Player, RosterEntry};

/// The round in progress: selected course, active roster, and the current
/// hole pointer (1-indexed, held inside the layout's bounds). Nothing here
/// is persisted until the round completes.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub course: Option<Course>,
    pub roster: Vec<RosterEntry>,
    pub current_hole: usize,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            course: None,
            roster: Vec::new(),
            current_hole: 1,
        }
    }
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn hole_count(&self) -> usize {
        self.course
            .as_ref()
            .map_or(1, |c| c.layout.hole_count())
    }

    /// Selecting a course mid-round wipes the roster's score arrays and
    /// recomputes totals against the new pars, so stale indices never read
    /// against the wrong holes. The hole pointer is re-clamped.
    pub fn select_course(&mut self, course: Course) {
        let total = course.total_par();
        for entry in &mut self.roster {
            entry.scores.clear();
            entry.total = total;
            entry.relative_to_par = 0;
        }
        self.course = Some(course);
        self.current_hole = self.current_hole.clamp(1, self.hole_count());
    }

    /// Records a stroke count for one player and hole. The value is clamped
    /// at zero; zero itself clears the entry back to unset. Unknown players
    /// and out-of-range holes are silent no-ops. Totals are recomputed from
    /// the full score array, never adjusted incrementally.
    pub fn set_score(&mut self, player_id: &str, hole: usize, value: i32) {
        let Some(course) = &self.course else {
            return;
        };
        if hole == 0 || hole > course.layout.hole_count() {
            return;
        }
        let Some(entry) = self.roster.iter_mut().find(|p| p.player_id == player_id) else {
            return;
        };

        if entry.scores.len() < hole {
            entry.scores.resize(hole, None);
        }
        let value = value.max(0);
        entry.scores[hole - 1] = if value == 0 { None } else { Some(value) };

        let (total, relative_to_par) = round_totals(&entry.scores, &course.holes);
        entry.total = total;
        entry.relative_to_par = relative_to_par;
    }

    /// Adds a player with no scores yet. They start "on pace": total equal
    /// to the course's par total, relative-to-par zero. Players already on
    /// the roster are not added twice.
    pub fn add_player(&mut self, player: &Player) {
        if self.roster.iter().any(|p| p.player_id == player.player_id) {
            return;
        }
        let total = self.course.as_ref().map_or(0, Course::total_par);
        self.roster.push(RosterEntry {
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            scores: Vec::new(),
            total,
            relative_to_par: 0,
        });
    }

    /// Clears the roster and moves back to hole 1. Persisted scorecards are
    /// untouched.
    pub fn reset_round(&mut self) {
        self.roster.clear();
        self.current_hole = 1;
    }

    pub fn advance_hole(&mut self) {
        self.current_hole = (self.current_hole + 1).min(self.hole_count());
    }

    pub fn retreat_hole(&mut self) {
        self.current_hole = self.current_hole.saturating_sub(1).max(1);
    }

    /// The round can be reviewed and saved once the pointer sits on the
    /// final hole.
    #[must_use]
    pub fn on_final_hole(&self) -> bool {
        self.course.is_some() && self.current_hole == self.hole_count()
    }
}
