use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, HoleEditRequest};
use crate::api::models::{HoleEditResponse, RoundStatsResponse};
use crate::database::{self, hole_scores::HoleScoreEdit, DbConn};
use crate::stats::{aggregate_round, recompute_total_score};

pub async fn get_round_stats(
    State(state): State<Arc<AppState>>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let round = match database::rounds::get_full_round(&mut conn, round_id) {
        Ok(Some(round)) => round,
        Ok(None) => return (StatusCode::NOT_FOUND, "Round not found").into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    let course = match database::courses::get_course(&mut conn, round.course_id) {
        Ok(Some(course)) => course.name,
        Ok(None) => "Unknown course".to_string(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    };

    Json(RoundStatsResponse {
        round_id: round.id,
        player_id: round.player_id,
        course,
        date_played: round.date_played,
        stats: aggregate_round(&round.holes),
    })
    .into_response()
}

/// Inline hole-score correction from the feed. Applies the partial edit,
/// then re-derives and stores the round total so the invariant
/// `total_score == sum(hole scores)` holds without a re-fetch.
pub async fn edit_hole_score(
    State(state): State<Arc<AppState>>,
    Path((round_id, hole_number)): Path<(i64, u32)>,
    Json(body): Json<HoleEditRequest>,
) -> impl IntoResponse {
    if body.score == Some(0) {
        return (StatusCode::BAD_REQUEST, "Score must be positive").into_response();
    }

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    let edit = HoleScoreEdit {
        score: body.score,
        putts: body.putts,
        fairway_hit: body.fairway_hit,
        green_in_regulation: body.green_in_regulation,
    };

    match database::hole_scores::update_hole_score(&mut conn, round_id, hole_number, &edit) {
        Ok(true) => {}
        Ok(false) => return (StatusCode::NOT_FOUND, "Hole not found").into_response(),
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response()
        }
    }

    match store_recomputed_total(&mut conn, round_id) {
        Ok(total_score) => Json(HoleEditResponse {
            round_id,
            hole_number,
            total_score,
        })
        .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
            .into_response(),
    }
}

fn store_recomputed_total(conn: &mut DbConn, round_id: i64) -> anyhow::Result<u32> {
    let holes: Vec<_> = database::hole_scores::list_for_round(conn, round_id)?
        .into_iter()
        .map(|h| h.into_record())
        .collect();

    let total_score = recompute_total_score(&holes);
    database::rounds::update_total_score(conn, round_id, total_score)?;
    Ok(total_score)
}
