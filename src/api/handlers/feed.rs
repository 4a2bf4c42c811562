use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::collections::HashMap;
use std::sync::Arc;

use super::{AppState, FeedParams};
use crate::api::models::{FeedEntry, FeedResponse};
use crate::database::{self, DbConn};
use crate::domain::{FollowEdge, Round};
use crate::stats::{aggregate_feed_entry, is_visible};

/// Activity feed for a viewing player: every round they are allowed to
/// see, newest first, each carrying its feed summary.
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> impl IntoResponse {
    let Some(viewer_id) = params.viewer_id else {
        return (StatusCode::BAD_REQUEST, "viewerId is required").into_response();
    };

    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response()
        }
    };

    match build_feed(&mut conn, viewer_id) {
        Ok(entries) => Json(FeedResponse { entries }).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
            .into_response(),
    }
}

fn build_feed(conn: &mut DbConn, viewer_id: i64) -> anyhow::Result<Vec<FeedEntry>> {
    let edges: Vec<FollowEdge> = database::follows::list_all(conn)?
        .into_iter()
        .map(|r| r.into_edge())
        .collect();

    // list_all is already newest first; visibility is checked before the
    // hole records are loaded
    let rows = database::rounds::list_all(conn)?;
    let mut player_names: HashMap<i64, String> = HashMap::new();
    let mut entries = Vec::new();

    for row in rows {
        let round: Round = row.into_domain(vec![]);
        if !is_visible(&round, viewer_id, &edges) {
            continue;
        }

        let holes: Vec<_> = database::hole_scores::list_for_round(conn, round.id)?
            .into_iter()
            .map(|h| h.into_record())
            .collect();

        let player_name = match player_names.get(&round.player_id) {
            Some(name) => name.clone(),
            None => {
                let name = database::players::get_player(conn, round.player_id)?
                    .map(|p| p.name)
                    .unwrap_or_else(|| "Unknown player".to_string());
                player_names.insert(round.player_id, name.clone());
                name
            }
        };

        entries.push(FeedEntry {
            round_id: round.id,
            player_id: round.player_id,
            player_name,
            date_played: round.date_played,
            total_score: round.total_score,
            summary: aggregate_feed_entry(&holes),
        });
    }

    Ok(entries)
}
