use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::RoundRow;
use super::hole_scores;
use crate::domain::Round;

const ROUND_COLUMNS: &str =
    "id, player_id, course_id, date_played, total_score, visibility, wedge_tracking";

pub fn insert_round(
    conn: &mut DbConn,
    player_id: i64,
    course_id: i64,
    date_played: NaiveDate,
    total_score: u32,
    visibility: &str,
    wedge_tracking: bool,
) -> Result<RoundRow> {
    let sql = format!(
        "INSERT INTO rounds (player_id, course_id, date_played, total_score, visibility, wedge_tracking) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {ROUND_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            player_id,
            course_id,
            date_played,
            total_score,
            visibility,
            wedge_tracking
        ],
        parse_round_row,
    )
    .context("Failed to insert round")
}

pub fn get_round(conn: &mut DbConn, round_id: i64) -> Result<Option<RoundRow>> {
    let sql = format!("SELECT {ROUND_COLUMNS} FROM rounds WHERE id = ?1");

    conn.query_row(&sql, params![round_id], parse_round_row)
        .optional()
        .context("Failed to load round")
}

pub fn list_for_player(conn: &mut DbConn, player_id: i64) -> Result<Vec<RoundRow>> {
    let sql = format!(
        "SELECT {ROUND_COLUMNS} FROM rounds WHERE player_id = ?1 ORDER BY date_played ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_round_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<RoundRow>> {
    let sql = format!("SELECT {ROUND_COLUMNS} FROM rounds ORDER BY date_played DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_round_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_total_score(conn: &mut DbConn, round_id: i64, total_score: u32) -> Result<()> {
    conn.execute(
        "UPDATE rounds SET total_score = ?1 WHERE id = ?2",
        params![total_score, round_id],
    )
    .context("Failed to update round total")
    .map(|_| ())
}

pub fn delete_round(conn: &mut DbConn, round_id: i64) -> Result<bool> {
    // hole_scores and shots cascade
    let deleted = conn
        .execute("DELETE FROM rounds WHERE id = ?1", params![round_id])
        .context("Failed to delete round")?;
    Ok(deleted > 0)
}

/// Loads one round together with its hole records, in card order.
pub fn get_full_round(conn: &mut DbConn, round_id: i64) -> Result<Option<Round>> {
    let Some(row) = get_round(conn, round_id)? else {
        return Ok(None);
    };
    Ok(Some(attach_holes(conn, row)?))
}

/// Loads a player's full history as domain rounds, date ascending.
pub fn list_full_for_player(conn: &mut DbConn, player_id: i64) -> Result<Vec<Round>> {
    let rows = list_for_player(conn, player_id)?;
    rows.into_iter().map(|row| attach_holes(conn, row)).collect()
}

fn attach_holes(conn: &mut DbConn, row: RoundRow) -> Result<Round> {
    let holes = hole_scores::list_for_round(conn, row.id)?
        .into_iter()
        .map(|h| h.into_record())
        .collect();
    Ok(row.into_domain(holes))
}

fn parse_round_row(row: &rusqlite::Row) -> rusqlite::Result<RoundRow> {
    Ok(RoundRow {
        id: row.get(0)?,
        player_id: row.get(1)?,
        course_id: row.get(2)?,
        date_played: row.get(3)?,
        total_score: row.get(4)?,
        visibility: row.get(5)?,
        wedge_tracking: row.get(6)?,
    })
}
