use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, StatsParams};
use crate::api::models::PlayerStatsResponse;
use crate::database;
use crate::domain::ShotRecord;
use crate::stats::{aggregate_player, StatsWindow};

pub async fn get_player_stats(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let window_param = params.window.unwrap_or_else(|| "all".to_string());
    let window = match parse_window(&state, &window_param) {
        Some(window) => window,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Unsupported stats window: {window_param}"),
            )
                .into_response()
        }
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let player = match database::players::get_player(&mut conn, player_id) {
        Ok(Some(player)) => player,
        Ok(None) => return (StatusCode::NOT_FOUND, "Player not found").into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let rounds = match database::rounds::list_full_for_player(&mut conn, player_id) {
        Ok(rounds) => rounds,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let shot_pool: Vec<ShotRecord> = match database::shots::list_for_player(&mut conn, player_id) {
        Ok(rows) => rows.into_iter().map(|r| r.into_record()).collect(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let stats = aggregate_player(&rounds, window, &shot_pool, &state.config.stats);

    Json(PlayerStatsResponse {
        player_id,
        name: player.name,
        window: window_param,
        stats,
    })
    .into_response()
}

fn parse_window(state: &AppState, value: &str) -> Option<StatsWindow> {
    match StatsWindow::parse(value)? {
        StatsWindow::All => Some(StatsWindow::All),
        StatsWindow::LastN(n) if state.config.stats.window_allowed(n) => {
            Some(StatsWindow::LastN(n))
        }
        _ => None,
    }
}
