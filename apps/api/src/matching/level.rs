use serde::Serialize;

/// Badge colour the dashboard renders next to a match level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchColor {
    Green,
    Blue,
    Yellow,
    Orange,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchLevel {
    pub label: &'static str,
    pub color: MatchColor,
}

/// Maps a 0–100 score to its tier. Lower bounds are inclusive.
pub fn match_level(score: u32) -> MatchLevel {
    let (label, color) = if score >= 80 {
        ("Excellent Match", MatchColor::Green)
    } else if score >= 60 {
        ("Good Match", MatchColor::Blue)
    } else if score >= 40 {
        ("Fair Match", MatchColor::Yellow)
    } else if score > 0 {
        ("Partial Match", MatchColor::Orange)
    } else {
        ("No Match", MatchColor::Gray)
    };
    MatchLevel { label, color }
}
