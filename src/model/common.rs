use serde::Serialize;

/// One of the two sides of a ranked match, named by its on-screen color.
///
/// Upstream labels both the score nodes and the roster rows with the
/// *other* side's color class. The inversion is encoded here and nowhere else.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Purple,
    Orange,
}

impl TeamColor {
    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            TeamColor::Purple => TeamColor::Orange,
            TeamColor::Orange => TeamColor::Purple,
        }
    }

    /// Selector of the summary node that holds this side's score.
    pub fn score_class(self) -> &'static str {
        match self {
            TeamColor::Purple => ".score-orange",
            TeamColor::Orange => ".score-purple",
        }
    }

    /// Selector of the detail-panel table rows that belong to this side.
    pub fn row_class(self) -> &'static str {
        match self {
            TeamColor::Purple => "tr.orange-row",
            TeamColor::Orange => "tr.purple-row",
        }
    }
}
