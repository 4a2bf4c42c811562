use chrono::NaiveDate;
use serde::Serialize;

use crate::stats::{FeedSummary, PlayerStats, RoundStats};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub player_id: i64,
    pub name: String,
    pub window: String,
    pub stats: PlayerStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatsResponse {
    pub round_id: i64,
    pub player_id: i64,
    pub course: String,
    pub date_played: NaiveDate,
    pub stats: RoundStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub round_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub date_played: NaiveDate,
    pub total_score: u32,
    pub summary: FeedSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub entries: Vec<FeedEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleEditResponse {
    pub round_id: i64,
    pub hole_number: u32,
    /// Round total re-derived from the hole scores after the edit.
    pub total_score: u32,
}
