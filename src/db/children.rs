//! Children roster.
//!
//! Every read joins the child's group so `group_name` and `age_category` come
//! back with the child. Group membership changes only through
//! [`Children::update`], [`Children::assign_to_group`] and
//! [`Children::transfer_group`].

use crate::db::changes::ChangeSet;
use crate::db::error::Result;
use crate::libs::age::age_on;
use crate::libs::child::{Child, ChildUpdate, ChildWithAge};
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_CHILD: &str = "INSERT INTO children (last_name, first_name, middle_name, birth_date, gender, group_id, enrollment_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
pub(crate) const CHILD_COLUMNS: &str = "c.id, c.last_name, c.first_name, c.middle_name, c.birth_date, c.gender,
    c.group_id, c.enrollment_date, c.created_at, g.name, g.age_category";
pub(crate) const CHILD_FROM: &str = "FROM children c LEFT JOIN kinder_groups g ON g.id = c.group_id";
const ORDER_BY_NAME: &str = "ORDER BY c.last_name, c.first_name, c.id";
const ORDER_BY_BIRTH_DESC: &str = "ORDER BY c.birth_date DESC, c.last_name, c.first_name";
const SEARCH_CONDITION: &str = "WHERE instr(unicode_lower(c.last_name), ?1) > 0 OR instr(unicode_lower(c.first_name), ?1) > 0";
const ASSIGN_GROUP: &str = "UPDATE children SET group_id = ?2 WHERE id = ?1";
const TRANSFER_GROUP: &str = "UPDATE children SET group_id = ?2 WHERE group_id = ?1";
const DELETE_LINKS: &str = "DELETE FROM parent_child WHERE child_id = ?1";
const DELETE_ATTENDANCE: &str = "DELETE FROM attendance WHERE child_id = ?1";
const DELETE_CHILD: &str = "DELETE FROM children WHERE id = ?1";

pub struct Children<'a> {
    conn: &'a Connection,
}

impl<'a> Children<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn add(&self, child: &Child) -> Result<i64> {
        self.conn.execute(
            INSERT_CHILD,
            params![
                child.last_name,
                child.first_name,
                child.middle_name,
                child.birth_date,
                child.gender,
                child.group_id,
                child.enrollment_date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(child_id = id, "child added");
        Ok(id)
    }

    pub fn get_all(&self) -> Result<Vec<Child>> {
        self.query(&format!("SELECT {} {} {}", CHILD_COLUMNS, CHILD_FROM, ORDER_BY_NAME), params![])
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Child>> {
        let child = self
            .conn
            .query_row(
                &format!("SELECT {} {} WHERE c.id = ?1", CHILD_COLUMNS, CHILD_FROM),
                params![id],
                |row| map_child(row, 0),
            )
            .optional()?;
        Ok(child)
    }

    pub fn get_by_group(&self, group_id: i64) -> Result<Vec<Child>> {
        self.query(
            &format!("SELECT {} {} WHERE c.group_id = ?1 {}", CHILD_COLUMNS, CHILD_FROM, ORDER_BY_NAME),
            params![group_id],
        )
    }

    /// Children not assigned to any group.
    pub fn get_unassigned(&self) -> Result<Vec<Child>> {
        self.query(&format!("SELECT {} {} WHERE c.group_id IS NULL {}", CHILD_COLUMNS, CHILD_FROM, ORDER_BY_NAME), params![])
    }

    /// Case-insensitive substring search on last and first name.
    pub fn search(&self, term: &str) -> Result<Vec<Child>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_all();
        }
        self.query(
            &format!("SELECT {} {} {} {}", CHILD_COLUMNS, CHILD_FROM, SEARCH_CONDITION, ORDER_BY_NAME),
            params![needle],
        )
    }

    pub fn update(&self, id: i64, update: &ChildUpdate) -> Result<bool> {
        let mut changes = ChangeSet::new("children");
        changes
            .set("last_name", update.last_name.as_deref())
            .set("first_name", update.first_name.as_deref())
            .set("middle_name", update.middle_name.as_deref())
            .set("birth_date", update.birth_date)
            .set("gender", update.gender)
            .set("group_id", update.group_id)
            .set("enrollment_date", update.enrollment_date);
        let written = changes.execute(self.conn, id)?;
        debug!(child_id = id, written, "child updated");
        Ok(written > 0)
    }

    /// Puts a child into a group, or takes them out of any group with `None`.
    pub fn assign_to_group(&self, child_id: i64, group_id: Option<i64>) -> Result<bool> {
        let written = self.conn.execute(ASSIGN_GROUP, params![child_id, group_id])?;
        debug!(child_id, ?group_id, "child assigned");
        Ok(written > 0)
    }

    /// Moves every child of `from_group` to `to_group` (or out of any group)
    /// in one statement. Returns the number of children moved.
    pub fn transfer_group(&self, from_group: i64, to_group: Option<i64>) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let moved = tx.execute(TRANSFER_GROUP, params![from_group, to_group])?;
        tx.commit()?;
        debug!(from_group, ?to_group, moved, "children transferred");
        Ok(moved)
    }

    /// Deletes a child with their parent links and attendance history.
    pub fn delete(&self, id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(DELETE_LINKS, params![id])?;
        tx.execute(DELETE_ATTENDANCE, params![id])?;
        tx.execute(DELETE_CHILD, params![id])?;
        tx.commit()?;
        debug!(child_id = id, "child deleted");
        Ok(())
    }

    /// Children aged `min_age..=max_age` full years today, youngest first.
    pub fn get_by_age(&self, min_age: i32, max_age: i32) -> Result<Vec<ChildWithAge>> {
        self.get_by_age_on(min_age, max_age, Local::now().date_naive())
    }

    /// Same as [`Children::get_by_age`] with ages computed as of `today`.
    pub fn get_by_age_on(&self, min_age: i32, max_age: i32, today: NaiveDate) -> Result<Vec<ChildWithAge>> {
        let children = self.query(&format!("SELECT {} {} {}", CHILD_COLUMNS, CHILD_FROM, ORDER_BY_BIRTH_DESC), params![])?;
        Ok(children
            .into_iter()
            .map(|child| {
                let age = age_on(child.birth_date, today);
                ChildWithAge { child, age }
            })
            .filter(|c| c.age >= min_age && c.age <= max_age)
            .collect())
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Child>> {
        let mut stmt = self.conn.prepare(sql)?;
        let children = stmt
            .query_map(params, |row| map_child(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(children)
    }
}

/// Maps [`CHILD_COLUMNS`] starting at column `offset`.
pub(crate) fn map_child(row: &Row, offset: usize) -> rusqlite::Result<Child> {
    Ok(Child {
        id: row.get(offset)?,
        last_name: row.get(offset + 1)?,
        first_name: row.get(offset + 2)?,
        middle_name: row.get(offset + 3)?,
        birth_date: row.get(offset + 4)?,
        gender: row.get(offset + 5)?,
        group_id: row.get(offset + 6)?,
        enrollment_date: row.get(offset + 7)?,
        created_at: row.get(offset + 8)?,
        group_name: row.get(offset + 9)?,
        age_category: row.get(offset + 10)?,
    })
}
