use serde::{Deserialize, Serialize};

use crate::model::course::Hole;

/// How a single hole's stroke count reads against par. An ace wins the label
/// outright no matter what the hole's par is.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreLabel {
    Ace,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyPlus,
}

impl ScoreLabel {
    /// Total over all integer inputs, including scores below 1.
    #[must_use]
    pub fn classify(score: i32, par: i32) -> Self {
        if score == 1 {
            return ScoreLabel::Ace;
        }
        match score - par {
            d if d <= -2 => ScoreLabel::Eagle,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            2 => ScoreLabel::DoubleBogey,
            _ => ScoreLabel::TripleBogeyPlus,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreLabel::Ace => "score-ace",
            ScoreLabel::Eagle => "score-eagle",
            ScoreLabel::Birdie => "score-birdie",
            ScoreLabel::Par => "score-par",
            ScoreLabel::Bogey => "score-bogey",
            ScoreLabel::DoubleBogey => "score-double-bogey",
            ScoreLabel::TripleBogeyPlus => "score-triple-bogey-plus",
        }
    }
}

/// Total strokes and relative-to-par over the given holes. An unset score
/// counts as that hole's par, so it contributes 0 to relative-to-par.
#[must_use]
pub fn round_totals(scores: &[Option<i32>], holes: &[Hole]) -> (i32, i32) {
    let mut total = 0;
    let mut relative_to_par = 0;
    for (i, hole) in holes.iter().enumerate() {
        let score = scores.get(i).copied().flatten().unwrap_or(hole.par);
        total += score;
        relative_to_par += score - hole.par;
    }
    (total, relative_to_par)
}

/// "E" at even, otherwise signed ("+2", "-1").
#[must_use]
pub fn format_relative(relative_to_par: i32) -> String {
    if relative_to_par == 0 {
        "E".to_string()
    } else if relative_to_par > 0 {
        format!("+{relative_to_par}")
    } else {
        relative_to_par.to_string()
    }
}
