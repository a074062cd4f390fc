use crate::db::error::Result;
use crate::db::migrations::init_with_migrations;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "kindergarten.db";

/// Owner of the single SQLite connection.
///
/// Opening enables foreign keys and brings the schema up to date, so every
/// component that borrows the connection sees the same tables.
pub struct Db {
    pub conn: Connection,
    path: Option<PathBuf>,
}

impl Db {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut conn = Self::connect(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory database with the full schema.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn, path: None })
    }

    /// Opens an existing file read-only without touching the schema. Used by
    /// the migration commands to inspect a database as it is; a missing file
    /// is an error and is not created.
    pub fn new_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::configure(&conn)?;
        Ok(conn)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }

    fn connect(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(conn)
    }

    /// Enables foreign keys and registers `unicode_lower`, which the search
    /// queries use because SQLite's own `lower()` only folds ASCII.
    fn configure(conn: &Connection) -> Result<()> {
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.create_scalar_function(
            "unicode_lower",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value: Option<String> = ctx.get(0)?;
                Ok(value.map(|v| v.to_lowercase()))
            },
        )?;
        Ok(())
    }
}
