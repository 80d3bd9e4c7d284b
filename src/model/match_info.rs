use chrono::{DateTime, Utc};
use serde::Serialize;

/// One completed ranked match, seen from the profile owner's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub time: DateTime<Utc>,
    /// Result label exactly as upstream shows it.
    pub result: String,
    pub ally_score: u32,
    pub opponent_score: u32,
    pub team_ally: Vec<TeammateInfo>,
    pub team_opponent: Vec<TeammateInfo>,
}

/// A roster entry within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeammateInfo {
    pub level: u32,
    pub name: String,
    /// Identifier taken from the icon path, not the display label.
    pub pokemon: String,
    pub score: i32,
    pub kill: u32,
    pub assist: u32,
    pub interrupt: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub recovery: u32,
}
