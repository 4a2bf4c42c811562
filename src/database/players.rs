use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::PlayerRow;

pub fn upsert_player(conn: &mut DbConn, name: &str) -> Result<PlayerRow> {
    let sql = "INSERT INTO players (name) VALUES (?1) ON CONFLICT(name) DO UPDATE SET name = excluded.name RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to upsert player")
}

pub fn get_player(conn: &mut DbConn, player_id: i64) -> Result<Option<PlayerRow>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![player_id], parse_player_row)
        .optional()
        .context("Failed to load player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<PlayerRow> {
    Ok(PlayerRow {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}
