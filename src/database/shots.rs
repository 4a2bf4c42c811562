use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::ShotRow;

pub fn insert_shot(
    conn: &mut DbConn,
    player_id: i64,
    round_id: Option<i64>,
    hole_number: Option<u32>,
    club: &str,
    distance_yards: u32,
) -> Result<()> {
    let sql = "INSERT INTO shots (player_id, round_id, hole_number, club, distance_yards) VALUES (?1, ?2, ?3, ?4, ?5)";

    conn.execute(
        sql,
        params![player_id, round_id, hole_number, club, distance_yards],
    )
    .context("Failed to insert shot")
    .map(|_| ())
}

/// The player's pooled shot history for club-distance statistics; not
/// scoped to any round.
pub fn list_for_player(conn: &mut DbConn, player_id: i64) -> Result<Vec<ShotRow>> {
    let sql = "SELECT player_id, club, distance_yards FROM shots WHERE player_id = ?1 ORDER BY id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_shot_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_shot_row(row: &rusqlite::Row) -> rusqlite::Result<ShotRow> {
    Ok(ShotRow {
        player_id: row.get(0)?,
        club: row.get(1)?,
        distance_yards: row.get(2)?,
    })
}
