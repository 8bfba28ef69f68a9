use cardmate::controller::lookup::{LookupCourse, course_from_lookup};
use cardmate::model::course::{CourseLayout, DEFAULT_DISTANCE, DEFAULT_PAR};

fn parse(json: &str) -> LookupCourse {
    serde_json::from_str(json).expect("lookup payload should parse")
}

#[test]
fn test5_decode_search_payload() {
    let json = r#"[
        {"course_id": "123", "name": "Cedar Hills", "holes": 18,
         "rating": "4.5", "location": "Portland, OR"},
        {"course_id": "456", "name": "Westside", "holes": 9,
         "rating": "3.9", "location": "Eugene, OR"}
    ]"#;
    let results: Vec<LookupCourse> = serde_json::from_str(json).expect("payload should parse");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Cedar Hills");
    assert_eq!(results[1].holes, 9);
    assert!(results[0].holes_data.is_none());
}

#[test]
fn test5_details_map_per_hole_data() {
    let details = parse(
        r#"{"course_id": "456", "name": "Westside", "holes": 9,
            "rating": "3.9", "location": "Eugene, OR",
            "holes_data": [
                {"hole_num": 1, "length": 251.7, "par": 3},
                {"hole_num": 2, "length": 302.4, "par": 3},
                {"hole_num": 3, "length": 419.5, "par": 4},
                {"hole_num": 4, "length": 300.0, "par": 3},
                {"hole_num": 5, "length": 300.0, "par": 3},
                {"hole_num": 6, "length": 300.0, "par": 3},
                {"hole_num": 7, "length": 300.0, "par": 3},
                {"hole_num": 8, "length": 300.0, "par": 3},
                {"hole_num": 9, "length": 640.2, "par": 5}
            ]}"#,
    );

    let course = course_from_lookup(&details);
    assert_eq!(course.name, "Westside");
    assert_eq!(course.layout, CourseLayout::Nine);
    assert_eq!(course.holes.len(), 9);
    // Distances round to whole feet.
    assert_eq!(course.holes[0].distance, 252);
    assert_eq!(course.holes[1].distance, 302);
    assert_eq!(course.holes[2].par, 4);
    assert_eq!(course.holes[8].par, 5);
    assert_eq!(course.holes[8].distance, 640);
}

#[test]
fn test5_details_without_hole_data_synthesize_defaults() {
    let details = parse(
        r#"{"course_id": "123", "name": "Cedar Hills", "holes": 18,
            "rating": "4.5", "location": "Portland, OR"}"#,
    );

    let course = course_from_lookup(&details);
    assert_eq!(course.layout, CourseLayout::Eighteen);
    assert_eq!(course.holes.len(), 18);
    for (i, hole) in course.holes.iter().enumerate() {
        assert_eq!(hole.number, i as i32 + 1);
        assert_eq!(hole.par, DEFAULT_PAR);
        assert_eq!(hole.distance, DEFAULT_DISTANCE);
    }
}

#[test]
fn test5_odd_hole_counts_settle_on_a_layout() {
    let details = parse(
        r#"{"course_id": "789", "name": "Quarry", "holes": 12,
            "rating": "4.1", "location": "Bend, OR"}"#,
    );

    let course = course_from_lookup(&details);
    assert_eq!(course.layout, CourseLayout::Eighteen);
    assert_eq!(course.holes.len(), 18);
    assert_eq!(course.holes[17].number, 18);
}
