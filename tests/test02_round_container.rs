mod common;

use cardmate::model::course::{Course, CourseLayout, DEFAULT_DISTANCE, DEFAULT_PAR};
use cardmate::model::types::Player;
use cardmate::round::RoundState;

fn player(id: &str, name: &str) -> Player {
    Player {
        player_id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test2_add_player_starts_on_pace() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));

    let entry = &round.roster[0];
    // Eight par 3s and one par 4.
    assert_eq!(entry.total, 28);
    assert_eq!(entry.relative_to_par, 0);
    assert!(entry.scores.is_empty());

    // Adding the same player again is a no-op.
    round.add_player(&player("p1", "Avery"));
    assert_eq!(round.roster.len(), 1);
}

#[test]
fn test2_set_score_recomputes_totals() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));

    round.set_score("p1", 1, 4);
    assert_eq!(round.roster[0].total, 29);
    assert_eq!(round.roster[0].relative_to_par, 1);

    round.set_score("p1", 3, 3);
    assert_eq!(round.roster[0].total, 28);
    assert_eq!(round.roster[0].relative_to_par, 0);

    // Overwriting a hole replaces, never accumulates.
    round.set_score("p1", 1, 3);
    assert_eq!(round.roster[0].total, 27);
    assert_eq!(round.roster[0].relative_to_par, -1);
}

#[test]
fn test2_set_score_silent_no_ops() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));
    let before = round.roster[0].clone();

    // Unknown player.
    round.set_score("nobody", 1, 4);
    // Holes outside the layout.
    round.set_score("p1", 0, 4);
    round.set_score("p1", 10, 4);
    assert_eq!(round.roster[0], before);
}

#[test]
fn test2_set_score_clamps_at_zero() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));

    round.set_score("p1", 2, 5);
    assert_eq!(round.roster[0].scores[1], Some(5));

    // Negative input clamps to the unset sentinel.
    round.set_score("p1", 2, -3);
    assert_eq!(round.roster[0].scores[1], None);
    assert_eq!(round.roster[0].total, 28);
    assert_eq!(round.roster[0].relative_to_par, 0);
}

#[test]
fn test2_hole_pointer_stays_in_bounds() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));

    for _ in 0..20 {
        round.advance_hole();
    }
    assert_eq!(round.current_hole, 9);
    assert!(round.on_final_hole());

    for _ in 0..20 {
        round.retreat_hole();
    }
    assert_eq!(round.current_hole, 1);
}

#[test]
fn test2_reset_round_clears_roster_and_pointer() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));
    round.set_score("p1", 1, 4);
    round.advance_hole();

    round.reset_round();
    assert!(round.roster.is_empty());
    assert_eq!(round.current_hole, 1);
    // The selected course survives a reset.
    assert!(round.course.is_some());
}

#[test]
fn test2_course_switch_clears_scores() {
    let mut round = RoundState::new();
    round.select_course(common::nine_hole_course("c1"));
    round.add_player(&player("p1", "Avery"));
    round.set_score("p1", 1, 5);
    assert_eq!(round.roster[0].relative_to_par, 2);

    let other = Course::new("c2".to_string(), "Westside".to_string(), CourseLayout::Eighteen);
    round.select_course(other);

    // Old per-hole entries never read against the new course's holes.
    assert!(round.roster[0].scores.is_empty());
    assert_eq!(round.roster[0].total, 54);
    assert_eq!(round.roster[0].relative_to_par, 0);
}

#[test]
fn test2_course_switch_reclamps_pointer() {
    let mut round = RoundState::new();
    round.select_course(Course::new(
        "c1".to_string(),
        "Westside".to_string(),
        CourseLayout::Eighteen,
    ));
    for _ in 0..16 {
        round.advance_hole();
    }
    assert_eq!(round.current_hole, 17);

    round.select_course(common::nine_hole_course("c2"));
    assert_eq!(round.current_hole, 9);
}

#[test]
fn test2_layout_change_truncates_and_extends() {
    let mut course = Course::new(
        "c1".to_string(),
        "Westside".to_string(),
        CourseLayout::Eighteen,
    );
    for (i, hole) in course.holes.iter_mut().enumerate() {
        hole.par = 3 + (i as i32 % 2);
        hole.distance = 200 + i as i32;
    }
    let front_nine = course.holes[..9].to_vec();

    course.set_layout(CourseLayout::Nine);
    assert_eq!(course.holes.len(), 9);
    assert_eq!(course.holes, front_nine);

    course.set_layout(CourseLayout::Eighteen);
    assert_eq!(course.holes.len(), 18);
    assert_eq!(course.holes[..9], front_nine[..]);
    for (i, hole) in course.holes[9..].iter().enumerate() {
        assert_eq!(hole.number, 10 + i as i32);
        assert_eq!(hole.par, DEFAULT_PAR);
        assert_eq!(hole.distance, DEFAULT_DISTANCE);
        assert!(hole.notes.is_empty());
    }
}
