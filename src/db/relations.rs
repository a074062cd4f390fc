//! Parent/child links.
//!
//! A link is identified by its (parent, child) pair and carries a free-text
//! relationship label. Adding a link for a pair that already exists replaces
//! the label.

use crate::db::children::{map_child, CHILD_COLUMNS};
use crate::db::error::{require, Result};
use crate::db::parents::{map_parent, PARENT_COLUMNS};
use crate::libs::child::RelatedChild;
use crate::libs::parent::RelatedParent;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

const UPSERT_LINK: &str = "INSERT INTO parent_child (parent_id, child_id, relationship) VALUES (?1, ?2, ?3)
    ON CONFLICT (parent_id, child_id) DO UPDATE SET relationship = excluded.relationship";
const DELETE_LINK: &str = "DELETE FROM parent_child WHERE parent_id = ?1 AND child_id = ?2";
const DELETE_CHILD_LINKS: &str = "DELETE FROM parent_child WHERE child_id = ?1";
const SELECT_LINK: &str = "SELECT relationship FROM parent_child WHERE parent_id = ?1 AND child_id = ?2";
const COUNT_LINKS: &str = "SELECT COUNT(*) FROM parent_child WHERE parent_id = ?1 AND child_id = ?2";

pub struct Relations<'a> {
    conn: &'a Connection,
}

impl<'a> Relations<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Links a parent to a child, replacing the label of an existing link.
    pub fn add(&self, parent_id: i64, child_id: i64, relationship: &str) -> Result<()> {
        require("relationship", relationship)?;
        self.conn.execute(UPSERT_LINK, params![parent_id, child_id, relationship.trim()])?;
        debug!(parent_id, child_id, relationship, "relation saved");
        Ok(())
    }

    /// Removes a link. Removing a link that does not exist is not an error.
    pub fn remove(&self, parent_id: i64, child_id: i64) -> Result<bool> {
        let removed = self.conn.execute(DELETE_LINK, params![parent_id, child_id])?;
        debug!(parent_id, child_id, removed, "relation removed");
        Ok(removed > 0)
    }

    /// The relationship label for a pair, if linked.
    pub fn get(&self, parent_id: i64, child_id: i64) -> Result<Option<String>> {
        let relationship = self
            .conn
            .query_row(SELECT_LINK, params![parent_id, child_id], |row| row.get(0))
            .optional()?;
        Ok(relationship)
    }

    pub fn count(&self, parent_id: i64, child_id: i64) -> Result<i64> {
        Ok(self.conn.query_row(COUNT_LINKS, params![parent_id, child_id], |row| row.get(0))?)
    }

    pub fn get_children_by_parent(&self, parent_id: i64) -> Result<Vec<RelatedChild>> {
        let sql = format!(
            "SELECT {}, pc.relationship
             FROM parent_child pc
             JOIN children c ON c.id = pc.child_id
             LEFT JOIN kinder_groups g ON g.id = c.group_id
             WHERE pc.parent_id = ?1
             ORDER BY c.last_name, c.first_name, c.id",
            CHILD_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let children = stmt
            .query_map(params![parent_id], |row| {
                Ok(RelatedChild {
                    child: map_child(row, 0)?,
                    relationship: row.get(11)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(children)
    }

    pub fn get_parents_by_child(&self, child_id: i64) -> Result<Vec<RelatedParent>> {
        let sql = format!(
            "SELECT {}, pc.relationship
             FROM parent_child pc
             JOIN parents p ON p.id = pc.parent_id
             WHERE pc.child_id = ?1
             ORDER BY p.last_name, p.first_name, p.id",
            PARENT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let parents = stmt
            .query_map(params![child_id], |row| {
                Ok(RelatedParent {
                    parent: map_parent(row, 0)?,
                    relationship: row.get(8)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(parents)
    }

    /// Replaces all of a child's parent links with `links` as one
    /// transaction: either every new link is in place or the old ones are.
    pub fn set_parents_for_child(&self, child_id: i64, links: &[(i64, String)]) -> Result<()> {
        for (_, relationship) in links {
            require("relationship", relationship)?;
        }

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(DELETE_CHILD_LINKS, params![child_id])?;
        for (parent_id, relationship) in links {
            tx.execute(UPSERT_LINK, params![parent_id, child_id, relationship.trim()])?;
        }
        tx.commit()?;

        debug!(child_id, links = links.len(), "child relations replaced");
        Ok(())
    }
}
