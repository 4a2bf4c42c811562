use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    feed::get_feed,
    players::get_player_stats,
    rounds::{edit_hole_score, get_round_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/player/:id/stats", get(get_player_stats))
        .route("/api/round/:id/stats", get(get_round_stats))
        .route("/api/round/:id/hole/:hole", post(edit_hole_score))
        .route("/api/feed", get(get_feed))
        .with_state(state)
}
