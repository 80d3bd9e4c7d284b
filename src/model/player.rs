use serde::Serialize;

use crate::model::MatchInfo;

/// A snapshot of one player's public profile.
///
/// `Default` is the zero-valued record handed out for blank or invalid keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub cup: String,
    pub master_rank: u32,
    /// Sorted by `count`, descending. Ties keep page order.
    pub recent_teammates: Vec<TeammateCount>,
    /// Most recent first, as listed upstream.
    pub recent_ranked_matches: Vec<MatchInfo>,
}

/// How often a partner was recently paired with the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateCount {
    pub name: String,
    pub count: u32,
}
