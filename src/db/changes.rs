//! Partial `UPDATE` statements built from optional fields.

use crate::db::error::Result;
use rusqlite::{params_from_iter, types::ToSql, Connection};

/// Collects `column = ?` assignments for the fields a caller actually set.
///
/// ```ignore
/// let mut changes = ChangeSet::new("teachers");
/// changes.set("phone", update.phone.as_deref());
/// let written = changes.execute(conn, id)?;
/// ```
pub(crate) struct ChangeSet<'a> {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<Box<dyn ToSql + 'a>>,
    touch: Option<&'static str>,
}

impl<'a> ChangeSet<'a> {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
            touch: None,
        }
    }

    /// Adds an assignment when `value` is `Some`.
    pub fn set<T: ToSql + 'a>(&mut self, column: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.columns.push(column);
            self.values.push(Box::new(value));
        }
        self
    }

    /// Timestamp column refreshed whenever at least one field changes.
    pub fn touch(&mut self, column: &'static str) -> &mut Self {
        self.touch = Some(column);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Runs the update for row `id`. Returns the number of rows written,
    /// which is 0 without touching the database when nothing was set.
    pub fn execute(mut self, conn: &Connection, id: i64) -> Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }

        let mut assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();
        if let Some(column) = self.touch {
            assignments.push(format!("{} = CURRENT_TIMESTAMP", column));
        }

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            self.table,
            assignments.join(", "),
            self.values.len() + 1
        );
        self.values.push(Box::new(id));

        Ok(conn.execute(&sql, params_from_iter(self.values.iter()))?)
    }
}
