//! Daily attendance.
//!
//! One record per child per day; the `UNIQUE (child_id, date)` constraint
//! makes a second [`AttendanceBook::add`] for the same day fail with
//! `DbError::ConstraintViolation`. [`AttendanceBook::mark`] is the upsert used
//! when taking the register.

use crate::db::changes::ChangeSet;
use crate::db::error::Result;
use crate::libs::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, AttendanceUpdate};
use crate::libs::formatter::full_name;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_RECORD: &str = "INSERT INTO attendance (child_id, date, status, notes) VALUES (?1, ?2, ?3, ?4)";
const UPSERT_RECORD: &str = "INSERT INTO attendance (child_id, date, status, notes) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT (child_id, date) DO UPDATE SET
        status = excluded.status,
        notes = COALESCE(excluded.notes, attendance.notes),
        updated_at = CURRENT_TIMESTAMP";
const SELECT_RECORDS: &str = "
    SELECT a.id, a.child_id, a.date, a.status, a.notes, a.created_at, a.updated_at,
           c.last_name, c.first_name, c.middle_name
    FROM attendance a
    JOIN children c ON c.id = a.child_id";
const SELECT_ID_BY_DAY: &str = "SELECT id FROM attendance WHERE child_id = ?1 AND date = ?2";
const SUMMARY_FOR_CHILD: &str = "
    SELECT
        COALESCE(SUM(CASE WHEN status = 'present' THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN status = 'absent' THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN status = 'sick' THEN 1 ELSE 0 END), 0)
    FROM attendance
    WHERE child_id = ?1 AND date BETWEEN ?2 AND ?3";
const DELETE_RECORD: &str = "DELETE FROM attendance WHERE id = ?1";

pub struct AttendanceBook<'a> {
    conn: &'a Connection,
}

impl<'a> AttendanceBook<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn add(&self, record: &AttendanceRecord) -> Result<i64> {
        self.conn.execute(
            INSERT_RECORD,
            params![record.child_id, record.date, record.status, record.notes],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(attendance_id = id, child_id = record.child_id, %record.date, "attendance added");
        Ok(id)
    }

    /// Sets the status of a child for a day, creating the record if needed.
    /// Existing notes are kept when `notes` is `None`. Returns the record id.
    pub fn mark(&self, child_id: i64, date: NaiveDate, status: AttendanceStatus, notes: Option<&str>) -> Result<i64> {
        self.conn.execute(UPSERT_RECORD, params![child_id, date, status, notes])?;
        let id = self.conn.query_row(SELECT_ID_BY_DAY, params![child_id, date], |row| row.get(0))?;
        debug!(attendance_id = id, child_id, %date, %status, "attendance marked");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let record = self
            .conn
            .query_row(&format!("{} WHERE a.id = ?1", SELECT_RECORDS), params![id], map_record)
            .optional()?;
        Ok(record)
    }

    pub fn update(&self, id: i64, update: &AttendanceUpdate) -> Result<bool> {
        let mut changes = ChangeSet::new("attendance");
        changes
            .set("status", update.status)
            .set("notes", update.notes.as_deref())
            .touch("updated_at");
        let written = changes.execute(self.conn, id)?;
        debug!(attendance_id = id, written, "attendance updated");
        Ok(written > 0)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_RECORD, params![id])?;
        debug!(attendance_id = id, "attendance deleted");
        Ok(())
    }

    /// The register of one day, ordered by child name.
    pub fn get_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.query(
            &format!("{} WHERE a.date = ?1 ORDER BY c.last_name, c.first_name, c.id", SELECT_RECORDS),
            params![date],
        )
    }

    /// Records of one child between `from` and `to` inclusive, oldest first.
    pub fn get_by_child(&self, child_id: i64, from: NaiveDate, to: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        self.query(
            &format!("{} WHERE a.child_id = ?1 AND a.date BETWEEN ?2 AND ?3 ORDER BY a.date", SELECT_RECORDS),
            params![child_id, from, to],
        )
    }

    pub fn summary_for_child(&self, child_id: i64, from: NaiveDate, to: NaiveDate) -> Result<AttendanceSummary> {
        let summary = self.conn.query_row(SUMMARY_FOR_CHILD, params![child_id, from, to], |row| {
            Ok(AttendanceSummary {
                present: row.get(0)?,
                absent: row.get(1)?,
                sick: row.get(2)?,
            })
        })?;
        Ok(summary)
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let records = stmt.query_map(params, map_record)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}

fn map_record(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let last_name: String = row.get(7)?;
    let first_name: String = row.get(8)?;
    let middle_name: Option<String> = row.get(9)?;

    Ok(AttendanceRecord {
        id: row.get(0)?,
        child_id: row.get(1)?,
        date: row.get(2)?,
        status: row.get(3)?,
        notes: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        child_name: Some(full_name(&last_name, &first_name, middle_name.as_deref())),
    })
}
