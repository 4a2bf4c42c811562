use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::CourseRow;

pub fn upsert_course(conn: &mut DbConn, name: &str) -> Result<CourseRow> {
    let sql = "INSERT INTO courses (name) VALUES (?1) ON CONFLICT(name) DO UPDATE SET name = excluded.name RETURNING id, name";

    conn.query_row(sql, params![name], parse_course_row)
        .context("Failed to upsert course")
}

pub fn get_course(conn: &mut DbConn, course_id: i64) -> Result<Option<CourseRow>> {
    let sql = "SELECT id, name FROM courses WHERE id = ?1";

    conn.query_row(sql, params![course_id], parse_course_row)
        .optional()
        .context("Failed to load course")
}

fn parse_course_row(row: &rusqlite::Row) -> rusqlite::Result<CourseRow> {
    Ok(CourseRow {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
