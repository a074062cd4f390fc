use crate::db::changes::ChangeSet;
use crate::db::error::Result;
use crate::libs::formatter::full_name;
use crate::libs::group::{Group, GroupUpdate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const INSERT_GROUP: &str = "INSERT INTO kinder_groups (name, age_category, teacher_id) VALUES (?1, ?2, ?3)";
const SELECT_GROUPS: &str = "
    SELECT g.id, g.name, g.age_category, g.teacher_id, g.created_at,
           t.last_name, t.first_name, t.middle_name,
           (SELECT COUNT(*) FROM children c WHERE c.group_id = g.id) AS children_count
    FROM kinder_groups g
    LEFT JOIN teachers t ON t.id = g.teacher_id";
const ORDER_BY_NAME: &str = "ORDER BY g.name, g.id";
const DETACH_CHILDREN: &str = "UPDATE children SET group_id = NULL WHERE group_id = ?1";
const DELETE_GROUP: &str = "DELETE FROM kinder_groups WHERE id = ?1";

pub struct Groups<'a> {
    conn: &'a Connection,
}

impl<'a> Groups<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn add(&self, group: &Group) -> Result<i64> {
        self.conn.execute(INSERT_GROUP, params![group.name, group.age_category, group.teacher_id])?;
        let id = self.conn.last_insert_rowid();
        debug!(group_id = id, "group added");
        Ok(id)
    }

    /// All groups ordered by name, with teacher name and head count.
    pub fn get_all(&self) -> Result<Vec<Group>> {
        self.query(&format!("{} {}", SELECT_GROUPS, ORDER_BY_NAME), params![])
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Group>> {
        let group = self
            .conn
            .query_row(&format!("{} WHERE g.id = ?1", SELECT_GROUPS), params![id], map_group)
            .optional()?;
        Ok(group)
    }

    pub fn get_by_teacher(&self, teacher_id: i64) -> Result<Vec<Group>> {
        self.query(&format!("{} WHERE g.teacher_id = ?1 {}", SELECT_GROUPS, ORDER_BY_NAME), params![teacher_id])
    }

    pub fn update(&self, id: i64, update: &GroupUpdate) -> Result<bool> {
        let mut changes = ChangeSet::new("kinder_groups");
        changes
            .set("name", update.name.as_deref())
            .set("age_category", update.age_category)
            .set("teacher_id", update.teacher_id);
        let written = changes.execute(self.conn, id)?;
        debug!(group_id = id, written, "group updated");
        Ok(written > 0)
    }

    /// Deletes a group. Its children stay enrolled without a group.
    pub fn delete(&self, id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let detached = tx.execute(DETACH_CHILDREN, params![id])?;
        tx.execute(DELETE_GROUP, params![id])?;
        tx.commit()?;
        debug!(group_id = id, detached, "group deleted");
        Ok(())
    }

    /// Case-insensitive substring search on the group name.
    pub fn search(&self, term: &str) -> Result<Vec<Group>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_all();
        }
        self.query(
            &format!("{} WHERE instr(unicode_lower(g.name), ?1) > 0 {}", SELECT_GROUPS, ORDER_BY_NAME),
            params![needle],
        )
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Group>> {
        let mut stmt = self.conn.prepare(sql)?;
        let groups = stmt.query_map(params, map_group)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(groups)
    }
}

fn map_group(row: &Row) -> rusqlite::Result<Group> {
    let teacher_last: Option<String> = row.get(5)?;
    let teacher_first: Option<String> = row.get(6)?;
    let teacher_middle: Option<String> = row.get(7)?;
    let teacher_name = match (teacher_last, teacher_first) {
        (Some(last), Some(first)) => Some(full_name(&last, &first, teacher_middle.as_deref())),
        _ => None,
    };

    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        age_category: row.get(2)?,
        teacher_id: row.get(3)?,
        created_at: row.get(4)?,
        teacher_name,
        children_count: row.get(8)?,
    })
}
