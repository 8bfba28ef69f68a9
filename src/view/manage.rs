use maud::{Markup, html};

use crate::controller::lookup::LookupCourse;
use crate::model::course::{Course, CourseLayout};
use crate::model::types::Player;

#[must_use]
pub fn render_manage(
    players: &[Player],
    courses: &[Course],
    lookup_results: &[LookupCourse],
) -> Markup {
    html! {
        (players_section(players))
        (courses_section(courses))
        (lookup_section(lookup_results))
    }
}

fn players_section(players: &[Player]) -> Markup {
    html! {
        section class="manage-card" {
            h2 { "Players" }
            form action="/manage/player/add" method="get" {
                input type="text" name="name" placeholder="Player name";
                button type="submit" { "Add" }
            }
            @for player in players {
                div class="manage-row" {
                    span { (player.name) }
                    form action="/manage/player/rename" method="get" {
                        input type="hidden" name="player" value=(player.player_id);
                        input type="text" name="name" value=(player.name);
                        button type="submit" { "Rename" }
                    }
                    a href={ "/manage/player/delete?player=" (player.player_id) } { "Delete" }
                }
            }
        }
    }
}

fn courses_section(courses: &[Course]) -> Markup {
    html! {
        section class="manage-card" {
            h2 { "Courses" }
            a href="/manage/course/add" { "Add Empty Course" }
            @for course in courses {
                div class="manage-row" {
                    span { (course.name) " (" (course.layout.hole_count()) " holes)" }
                    form action="/manage/course/update" method="get" {
                        input type="hidden" name="course" value=(course.course_id);
                        input type="text" name="name" value=(course.name);
                        select name="layout" {
                            option value="9" selected[course.layout == CourseLayout::Nine] {
                                "9 Holes"
                            }
                            option value="18" selected[course.layout == CourseLayout::Eighteen] {
                                "18 Holes"
                            }
                        }
                        button type="submit" { "Save" }
                    }
                    a href={ "/manage/course/delete?course=" (course.course_id) } { "Delete" }
                }
            }
        }
    }
}

fn lookup_section(results: &[LookupCourse]) -> Markup {
    html! {
        section class="manage-card" {
            h2 { "Course Search" }
            form action="/lookup/search" method="get" {
                input type="text" name="keyword" placeholder="Search for a course...";
                button type="submit" { "Search" }
            }
            @for course in results {
                div class="manage-row" {
                    span { (course.name) }
                    span class="lookup-facts" {
                        (course.holes) " holes · Rating: " (course.rating) " · " (course.location)
                    }
                    a href={ "/lookup/import?course_id=" (course.course_id) } { "Import" }
                }
            }
        }
    }
}
