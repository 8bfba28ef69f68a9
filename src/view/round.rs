use maud::{Markup, html};

use crate::model::course::Course;
use crate::model::score::{ScoreLabel, format_relative};
use crate::model::types::Player;
use crate::round::RoundState;

/// The live scoring page: course pick, current hole card, roster rows.
#[must_use]
pub fn render_round(round: &RoundState, courses: &[Course], players: &[Player]) -> Markup {
    html! {
        @if courses.is_empty() && round.course.is_none() {
            div class="empty-state" {
                p { "No courses available" }
                a href="/manage" { "Add a Course" }
            }
        } @else {
            (course_header(round, courses))
            (roster_section(round, players))
        }
    }
}

fn course_header(round: &RoundState, courses: &[Course]) -> Markup {
    html! {
        div class="course-card" {
            @if let Some(course) = &round.course {
                h2 { (course.name) }
                @if let Some(hole) = course.hole(round.current_hole) {
                    div class="hole-facts" {
                        span { "Par " (hole.par) }
                        span { (hole.distance) "ft" }
                        @if !hole.notes.is_empty() {
                            span class="hole-notes" { (hole.notes) }
                        }
                    }
                }
                div class="hole-controls" {
                    a href="/round/hole/prev" { "Previous" }
                    span class="hole-number" { "Hole " (round.current_hole) }
                    a href="/round/hole/next" { "Next" }
                }
            }
            form action="/round/course" method="get" {
                select name="course" {
                    @for course in courses {
                        option value=(course.course_id) { (course.name) }
                    }
                }
                button type="submit" { "Select" }
            }
        }
    }
}

fn roster_section(round: &RoundState, players: &[Player]) -> Markup {
    let available: Vec<&Player> = players
        .iter()
        .filter(|p| !round.roster.iter().any(|r| r.player_id == p.player_id))
        .collect();

    html! {
        @if round.roster.is_empty() {
            div class="empty-state" {
                p { "No players added to this round" }
            }
        }
        @for entry in &round.roster {
            @let par = round
                .course
                .as_ref()
                .and_then(|c| c.hole(round.current_hole))
                .map_or(3, |h| h.par);
            @let current = entry
                .scores
                .get(round.current_hole - 1)
                .copied()
                .flatten()
                .unwrap_or(par);
            @let label = ScoreLabel::classify(current, par);
            div class="player-card" {
                span class="player-name" { (entry.name) }
                span class="player-relative" { (format_relative(entry.relative_to_par)) }
                div class="score-entry" {
                    a href={ "/round/score?player=" (entry.player_id) "&value=" ((current - 1).max(0)) } { "-" }
                    span class={ "score-pill " (label.css_class()) } { (current) }
                    a href={ "/round/score?player=" (entry.player_id) "&value=" (current + 1) } { "+" }
                }
            }
        }
        div class="round-actions" {
            a href="/round/reset" { "New Round" }
            @for player in &available {
                a href={ "/round/player/add?player=" (player.player_id) } { "Add " (player.name) }
            }
            @if round.on_final_hole() && !round.roster.is_empty() {
                a href="/scorecard" class="complete-link" { "Review" }
            }
        }
    }
}
