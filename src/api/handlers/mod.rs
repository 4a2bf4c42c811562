use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::database::DbPool;

pub mod feed;
pub mod players;
pub mod rounds;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub window: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedParams {
    pub viewer_id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleEditRequest {
    pub score: Option<u32>,
    pub putts: Option<u32>,
    pub fairway_hit: Option<bool>,
    pub green_in_regulation: Option<bool>,
}
