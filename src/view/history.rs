use maud::{Markup, html};

use crate::model::score::format_relative;
use crate::model::types::Scorecard;
use crate::model::utils::format_time_ago;

#[must_use]
pub fn render_history(scorecards: &[Scorecard]) -> Markup {
    let now = chrono::Utc::now().naive_utc();

    html! {
        h1 { "Scorecard History" }
        @if scorecards.is_empty() {
            div class="empty-state" {
                p { "No scorecards found" }
                a href="/round" { "Play a round" }
            }
        }
        @for scorecard in scorecards {
            div class="history-card" {
                div class="history-header" {
                    span class="history-course" { (scorecard.course_name) }
                    span class="history-date" {
                        (scorecard.date.format("%Y-%m-%d"))
                        " · "
                        (format_time_ago(now - scorecard.date))
                    }
                    span class="history-total" {
                        (format_relative(scorecard.relative_to_par)) " (" (scorecard.total_score) ")"
                    }
                    a href={ "/history/delete?scorecard=" (scorecard.scorecard_id) } { "Delete" }
                }
                table class="styled-table" {
                    tbody {
                        @for row in &scorecard.players {
                            tr {
                                td { (row.player_name) }
                                td {
                                    (format_relative(row.relative_to_par)) " (" (row.total_score) ")"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
