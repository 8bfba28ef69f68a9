use serde::{Deserialize, Serialize};

pub const DEFAULT_PAR: i32 = 3;
pub const DEFAULT_DISTANCE: i32 = 300;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseLayout {
    Nine,
    Eighteen,
}

impl CourseLayout {
    #[must_use]
    pub fn hole_count(self) -> usize {
        match self {
            CourseLayout::Nine => 9,
            CourseLayout::Eighteen => 18,
        }
    }

    /// Nine only on an exact nine-hole report; everything else plays as
    /// an eighteen-hole layout.
    #[must_use]
    pub fn from_hole_count(holes: i64) -> Self {
        if holes == 9 {
            CourseLayout::Nine
        } else {
            CourseLayout::Eighteen
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub number: i32,
    pub par: i32,
    pub distance: i32,
    #[serde(default)]
    pub notes: String,
}

impl Hole {
    #[must_use]
    pub fn default_at(number: i32) -> Self {
        Self {
            number,
            par: DEFAULT_PAR,
            distance: DEFAULT_DISTANCE,
            notes: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    pub layout: CourseLayout,
    pub holes: Vec<Hole>,
}

impl Course {
    /// A fresh course with default holes for the layout.
    #[must_use]
    pub fn new(course_id: String, name: String, layout: CourseLayout) -> Self {
        let holes = (1..=layout.hole_count())
            .map(|n| Hole::default_at(n as i32))
            .collect();
        Self {
            course_id,
            name,
            layout,
            holes,
        }
    }

    /// Resize the holes array to the new layout. Existing hole data is kept
    /// by index; new slots get default holes with correct 1-based numbers.
    pub fn set_layout(&mut self, layout: CourseLayout) {
        self.layout = layout;
        let count = layout.hole_count();
        self.holes.truncate(count);
        while self.holes.len() < count {
            let number = self.holes.len() as i32 + 1;
            self.holes.push(Hole::default_at(number));
        }
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Hole record for a 1-indexed hole number.
    #[must_use]
    pub fn hole(&self, number: usize) -> Option<&Hole> {
        if number == 0 {
            return None;
        }
        self.holes.get(number - 1)
    }
}
