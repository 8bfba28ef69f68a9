pub mod client;

pub use client::*;

use crate::model::course::{Course, CourseLayout, Hole};
use crate::model::utils::new_record_id;

/// Shapes a course-database record into a local course. Per-hole detail is
/// used when present (par, rounded distance); otherwise uniform default
/// holes matching the reported count stand in. The holes array is then
/// normalized to the layout's count.
#[must_use]
pub fn course_from_lookup(details: &LookupCourse) -> Course {
    let layout = CourseLayout::from_hole_count(details.holes);

    let holes: Vec<Hole> = match &details.holes_data {
        Some(data) if !data.is_empty() => data
            .iter()
            .map(|h| Hole {
                number: h.hole_num as i32,
                par: h.par as i32,
                distance: h.length.round() as i32,
                notes: String::new(),
            })
            .collect(),
        _ => (1..=details.holes.max(1))
            .map(|n| Hole::default_at(n as i32))
            .collect(),
    };

    let mut course = Course {
        course_id: new_record_id(),
        name: details.name.clone(),
        layout,
        holes,
    };
    // Odd reported counts (neither 9 nor 18) settle onto the layout size.
    course.set_layout(layout);
    course
}
