use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::FollowRow;

pub fn upsert_follow(
    conn: &mut DbConn,
    follower_id: i64,
    followed_id: i64,
    status: &str,
) -> Result<()> {
    let sql = "INSERT INTO follows (follower_id, followed_id, status) VALUES (?1, ?2, ?3) ON CONFLICT(follower_id, followed_id) DO UPDATE SET status = excluded.status";

    conn.execute(sql, params![follower_id, followed_id, status])
        .context("Failed to upsert follow")
        .map(|_| ())
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<FollowRow>> {
    let sql = "SELECT follower_id, followed_id, status FROM follows";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_follow_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_follow_row(row: &rusqlite::Row) -> rusqlite::Result<FollowRow> {
    Ok(FollowRow {
        follower_id: row.get(0)?,
        followed_id: row.get(1)?,
        status: row.get(2)?,
    })
}
