use crate::db::changes::ChangeSet;
use crate::db::error::Result;
use crate::libs::parent::{Parent, ParentUpdate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_PARENT: &str =
    "INSERT INTO parents (last_name, first_name, middle_name, phone, email, address) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
pub(crate) const PARENT_COLUMNS: &str = "p.id, p.last_name, p.first_name, p.middle_name, p.phone, p.email, p.address, p.created_at";
const ORDER_BY_NAME: &str = "ORDER BY p.last_name, p.first_name, p.id";
const SEARCH_CONDITION: &str = "WHERE instr(unicode_lower(p.last_name), ?1) > 0
    OR instr(unicode_lower(p.first_name), ?1) > 0
    OR instr(unicode_lower(p.middle_name), ?1) > 0
    OR instr(unicode_lower(p.phone), ?1) > 0
    OR instr(unicode_lower(p.email), ?1) > 0
    OR instr(unicode_lower(p.address), ?1) > 0";
const DELETE_LINKS: &str = "DELETE FROM parent_child WHERE parent_id = ?1";
const DELETE_PARENT: &str = "DELETE FROM parents WHERE id = ?1";

pub struct Parents<'a> {
    conn: &'a Connection,
}

impl<'a> Parents<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn add(&self, parent: &Parent) -> Result<i64> {
        self.conn.execute(
            INSERT_PARENT,
            params![
                parent.last_name,
                parent.first_name,
                parent.middle_name,
                parent.phone,
                parent.email,
                parent.address
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(parent_id = id, "parent added");
        Ok(id)
    }

    pub fn get_all(&self) -> Result<Vec<Parent>> {
        self.query(&format!("SELECT {} FROM parents p {}", PARENT_COLUMNS, ORDER_BY_NAME), params![])
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Parent>> {
        let parent = self
            .conn
            .query_row(&format!("SELECT {} FROM parents p WHERE p.id = ?1", PARENT_COLUMNS), params![id], |row| {
                map_parent(row, 0)
            })
            .optional()?;
        Ok(parent)
    }

    pub fn update(&self, id: i64, update: &ParentUpdate) -> Result<bool> {
        let mut changes = ChangeSet::new("parents");
        changes
            .set("last_name", update.last_name.as_deref())
            .set("first_name", update.first_name.as_deref())
            .set("middle_name", update.middle_name.as_deref())
            .set("phone", update.phone.as_deref())
            .set("email", update.email.as_deref())
            .set("address", update.address.as_deref());
        let written = changes.execute(self.conn, id)?;
        debug!(parent_id = id, written, "parent updated");
        Ok(written > 0)
    }

    /// Deletes a parent together with their links to children.
    pub fn delete(&self, id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let links = tx.execute(DELETE_LINKS, params![id])?;
        tx.execute(DELETE_PARENT, params![id])?;
        tx.commit()?;
        debug!(parent_id = id, links, "parent deleted");
        Ok(())
    }

    /// Case-insensitive substring search over name parts, phone, email and
    /// address.
    pub fn search(&self, term: &str) -> Result<Vec<Parent>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_all();
        }
        self.query(
            &format!("SELECT {} FROM parents p {} {}", PARENT_COLUMNS, SEARCH_CONDITION, ORDER_BY_NAME),
            params![needle],
        )
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Parent>> {
        let mut stmt = self.conn.prepare(sql)?;
        let parents = stmt
            .query_map(params, |row| map_parent(row, 0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(parents)
    }
}

/// Maps [`PARENT_COLUMNS`] starting at column `offset`.
pub(crate) fn map_parent(row: &Row, offset: usize) -> rusqlite::Result<Parent> {
    Ok(Parent {
        id: row.get(offset)?,
        last_name: row.get(offset + 1)?,
        first_name: row.get(offset + 2)?,
        middle_name: row.get(offset + 3)?,
        phone: row.get(offset + 4)?,
        email: row.get(offset + 5)?,
        address: row.get(offset + 6)?,
        created_at: row.get(offset + 7)?,
    })
}
