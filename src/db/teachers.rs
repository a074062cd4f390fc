//! Teacher roster.
//!
//! Teachers are ordered by last name, then first name. A teacher still
//! assigned to a group cannot be deleted; the group has to be given another
//! teacher (or none) first.

use crate::db::changes::ChangeSet;
use crate::db::error::{DbError, Result};
use crate::libs::teacher::{Teacher, TeacherUpdate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_TEACHER: &str = "INSERT INTO teachers (last_name, first_name, middle_name, phone, email) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TEACHERS: &str = "SELECT id, last_name, first_name, middle_name, phone, email, created_at FROM teachers";
const ORDER_BY_NAME: &str = "ORDER BY last_name, first_name, id";
const SEARCH_CONDITION: &str = "WHERE instr(unicode_lower(last_name), ?1) > 0
    OR instr(unicode_lower(first_name), ?1) > 0
    OR instr(unicode_lower(middle_name), ?1) > 0
    OR instr(unicode_lower(phone), ?1) > 0
    OR instr(unicode_lower(email), ?1) > 0";
const SELECT_ASSIGNED_GROUPS: &str = "SELECT name FROM kinder_groups WHERE teacher_id = ?1 ORDER BY name";
const DELETE_TEACHER: &str = "DELETE FROM teachers WHERE id = ?1";

pub struct Teachers<'a> {
    conn: &'a Connection,
}

impl<'a> Teachers<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a teacher and returns the new id.
    pub fn add(&self, teacher: &Teacher) -> Result<i64> {
        self.conn.execute(
            INSERT_TEACHER,
            params![teacher.last_name, teacher.first_name, teacher.middle_name, teacher.phone, teacher.email],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(teacher_id = id, "teacher added");
        Ok(id)
    }

    pub fn get_all(&self) -> Result<Vec<Teacher>> {
        self.query(&format!("{} {}", SELECT_TEACHERS, ORDER_BY_NAME), params![])
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let teacher = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TEACHERS), params![id], map_teacher)
            .optional()?;
        Ok(teacher)
    }

    /// Overwrites the fields set in `update`. Returns false when nothing was
    /// written, either because `update` is empty or the id does not exist.
    pub fn update(&self, id: i64, update: &TeacherUpdate) -> Result<bool> {
        let mut changes = ChangeSet::new("teachers");
        changes
            .set("last_name", update.last_name.as_deref())
            .set("first_name", update.first_name.as_deref())
            .set("middle_name", update.middle_name.as_deref())
            .set("phone", update.phone.as_deref())
            .set("email", update.email.as_deref());
        let written = changes.execute(self.conn, id)?;
        debug!(teacher_id = id, written, "teacher updated");
        Ok(written > 0)
    }

    /// Deletes a teacher. Fails with `TeacherInUse` while any group still
    /// references them.
    pub fn delete(&self, id: i64) -> Result<()> {
        let groups = self.assigned_groups(id)?;
        if !groups.is_empty() {
            return Err(DbError::TeacherInUse { teacher_id: id, groups });
        }
        self.conn.execute(DELETE_TEACHER, params![id])?;
        debug!(teacher_id = id, "teacher deleted");
        Ok(())
    }

    /// Names of the groups the teacher is assigned to.
    pub fn assigned_groups(&self, id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_ASSIGNED_GROUPS)?;
        let names = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    /// Case-insensitive substring search over name parts, phone and email.
    /// A blank term returns every teacher.
    pub fn search(&self, term: &str) -> Result<Vec<Teacher>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_all();
        }
        self.query(&format!("{} {} {}", SELECT_TEACHERS, SEARCH_CONDITION, ORDER_BY_NAME), params![needle])
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Teacher>> {
        let mut stmt = self.conn.prepare(sql)?;
        let teachers = stmt.query_map(params, map_teacher)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teachers)
    }
}

fn map_teacher(row: &Row) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        last_name: row.get(1)?,
        first_name: row.get(2)?,
        middle_name: row.get(3)?,
        phone: row.get(4)?,
        email: row.get(5)?,
        created_at: row.get(6)?,
    })
}
