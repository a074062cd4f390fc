//! Versioned schema migrations.
//!
//! Each migration is a numbered function applied inside one transaction
//! together with every other pending migration; the `migrations` table records
//! what has been applied. All statements use `IF NOT EXISTS`, so a database
//! created by hand with the same tables migrates cleanly.
//!
//! ## Usage
//!
//! ```rust
//! use kindergarten::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory().unwrap();
//! init_with_migrations(&mut conn).unwrap();
//! assert!(get_db_version(&conn).unwrap() > 0);
//! ```

use crate::db::error::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::{debug, error, info};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of every schema change, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: staff, groups and the children roster
        self.add_migration(1, "create_roster_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS teachers (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    last_name TEXT NOT NULL,
                    first_name TEXT NOT NULL,
                    middle_name TEXT,
                    phone TEXT,
                    email TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS kinder_groups (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    age_category TEXT NOT NULL
                        CHECK (age_category IN ('nursery', 'junior', 'middle', 'senior', 'preschool')),
                    teacher_id INTEGER REFERENCES teachers(id),
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS children (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    last_name TEXT NOT NULL,
                    first_name TEXT NOT NULL,
                    middle_name TEXT,
                    birth_date DATE NOT NULL,
                    gender TEXT NOT NULL CHECK (gender IN ('M', 'F')),
                    group_id INTEGER REFERENCES kinder_groups(id) ON DELETE SET NULL,
                    enrollment_date DATE NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            // Name search and ordering
            tx.execute("CREATE INDEX IF NOT EXISTS idx_children_name ON children(last_name, first_name)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_children_group ON children(group_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_groups_teacher ON kinder_groups(teacher_id)", [])?;
            Ok(())
        });

        // Version 2: parents and the parent/child link table
        self.add_migration(2, "add_parents", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS parents (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    last_name TEXT NOT NULL,
                    first_name TEXT NOT NULL,
                    middle_name TEXT,
                    phone TEXT,
                    email TEXT,
                    address TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS parent_child (
                    parent_id INTEGER NOT NULL,
                    child_id INTEGER NOT NULL,
                    relationship TEXT NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    PRIMARY KEY (parent_id, child_id),
                    FOREIGN KEY (parent_id) REFERENCES parents(id) ON DELETE CASCADE,
                    FOREIGN KEY (child_id) REFERENCES children(id) ON DELETE CASCADE
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_parent_child_child ON parent_child(child_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_parents_name ON parents(last_name, first_name)", [])?;
            Ok(())
        });

        // Version 3: daily attendance, one record per child and day
        self.add_migration(3, "add_attendance", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS attendance (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    child_id INTEGER NOT NULL REFERENCES children(id) ON DELETE CASCADE,
                    date DATE NOT NULL,
                    status TEXT NOT NULL CHECK (status IN ('present', 'absent', 'sick')),
                    notes TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    UNIQUE (child_id, date)
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version, all within one
    /// transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            debug!("database schema is up to date (v{})", current_version);
            return Ok(());
        }

        info!("found {} pending migration(s)", pending.len());

        let tx = conn.transaction()?;

        for migration in pending {
            info!("running migration v{}: {}", migration.version, migration.name);

            if let Err(e) = (migration.up)(&tx) {
                error!("migration v{} failed: {}", migration.version, e);
                return Err(e.into());
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        info!("all migrations completed");

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !migrations_table_exists(conn)? {
            return Ok(false);
        }
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    /// Empty for a database that was never migrated.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !migrations_table_exists(conn)? {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(history)
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Highest applied version; 0 for a database that was never migrated.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    if !migrations_table_exists(conn)? {
        return Ok(0);
    }
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(get_db_version(conn)? < manager.latest_version())
}

fn migrations_table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
