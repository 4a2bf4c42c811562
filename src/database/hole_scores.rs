use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::HoleScoreRow;
use crate::domain::{HoleRecord, ModeDetail};

pub fn insert_hole_score(conn: &mut DbConn, round_id: i64, hole: &HoleRecord) -> Result<()> {
    let sql = "INSERT INTO hole_scores (round_id, hole_number, par, score, putts, fairway_hit, fairway_miss, green_in_regulation, penalties, wedge_and_in, mode_detail) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

    conn.execute(
        sql,
        params![
            round_id,
            hole.hole_number,
            hole.par,
            hole.score,
            hole.putts,
            hole.fairway_hit,
            hole.fairway_miss.map(|m| m.as_str().to_string()),
            hole.green_in_regulation,
            hole.penalties,
            hole.wedge_and_in,
            serialize_mode_detail(&hole.mode_detail)?,
        ],
    )
    .context("Failed to insert hole score")
    .map(|_| ())
}

fn serialize_mode_detail(detail: &ModeDetail) -> Result<Option<String>> {
    if *detail == ModeDetail::None {
        return Ok(None);
    }
    let json = serde_json::to_string(detail).context("Failed to serialize mode detail")?;
    Ok(Some(json))
}

pub fn list_for_round(conn: &mut DbConn, round_id: i64) -> Result<Vec<HoleScoreRow>> {
    let sql = "SELECT round_id, hole_number, par, score, putts, fairway_hit, fairway_miss, green_in_regulation, penalties, wedge_and_in, mode_detail FROM hole_scores WHERE round_id = ?1 ORDER BY hole_number ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![round_id], parse_hole_score_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Partial inline edit from the feed; absent fields keep their stored
/// value. Returns whether the hole existed.
pub struct HoleScoreEdit {
    pub score: Option<u32>,
    pub putts: Option<u32>,
    pub fairway_hit: Option<bool>,
    pub green_in_regulation: Option<bool>,
}

pub fn update_hole_score(
    conn: &mut DbConn,
    round_id: i64,
    hole_number: u32,
    edit: &HoleScoreEdit,
) -> Result<bool> {
    let sql = "UPDATE hole_scores SET score = COALESCE(?1, score), putts = COALESCE(?2, putts), fairway_hit = COALESCE(?3, fairway_hit), green_in_regulation = COALESCE(?4, green_in_regulation) WHERE round_id = ?5 AND hole_number = ?6";

    let updated = conn
        .execute(
            sql,
            params![
                edit.score,
                edit.putts,
                edit.fairway_hit,
                edit.green_in_regulation,
                round_id,
                hole_number
            ],
        )
        .context("Failed to update hole score")?;

    Ok(updated > 0)
}

fn parse_hole_score_row(row: &rusqlite::Row) -> rusqlite::Result<HoleScoreRow> {
    Ok(HoleScoreRow {
        round_id: row.get(0)?,
        hole_number: row.get(1)?,
        par: row.get(2)?,
        score: row.get(3)?,
        putts: row.get(4)?,
        fairway_hit: row.get(5)?,
        fairway_miss: row.get(6)?,
        green_in_regulation: row.get(7)?,
        penalties: row.get(8)?,
        wedge_and_in: row.get(9)?,
        mode_detail: row.get(10)?,
    })
}
