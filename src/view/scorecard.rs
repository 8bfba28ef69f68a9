use maud::{Markup, html};

use crate::model::course::Course;
use crate::model::score::{ScoreLabel, format_relative};
use crate::model::types::RosterEntry;

/// Full-round table: one column per hole, one row per player, score cells
/// colored by their label. Unset holes display as par.
/// Review page for the round in progress: the full table plus the save
/// action.
#[must_use]
pub fn render_review(course: &Course, roster: &[RosterEntry]) -> Markup {
    html! {
        div class="round-actions" {
            a href="/history" { "History" }
            a href="/round/complete" class="complete-link" { "Save Scorecard" }
        }
        (render_scorecard(course, roster))
    }
}

#[must_use]
pub fn render_scorecard(course: &Course, roster: &[RosterEntry]) -> Markup {
    let total_par = course.total_par();

    html! {
        h2 { (course.name) }
        table class="styled-table" {
            thead {
                tr {
                    th { "Player" }
                    @for hole in &course.holes {
                        th {
                            div { (hole.number) }
                            div class="hole-par" { "Par " (hole.par) }
                        }
                    }
                    th {
                        div { "Total" }
                        div class="hole-par" { "Par " (total_par) }
                    }
                }
            }
            tbody {
                @for entry in roster {
                    tr {
                        td { (entry.name) }
                        @for hole in &course.holes {
                            @let score = entry
                                .scores
                                .get(hole.number as usize - 1)
                                .copied()
                                .flatten()
                                .unwrap_or(hole.par);
                            @let label = ScoreLabel::classify(score, hole.par);
                            td class=(label.css_class()) { (score) }
                        }
                        td {
                            (format_relative(entry.relative_to_par)) " (" (entry.total) ")"
                        }
                    }
                }
            }
        }
    }
}
