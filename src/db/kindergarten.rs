//! The persistence façade.
//!
//! [`KindergartenDb`] owns the [`Db`] handle and hands out one repository per
//! entity group. Repositories borrow the connection, so they are cheap to
//! create per call:
//!
//! ```no_run
//! use kindergarten::db::kindergarten::KindergartenDb;
//! use kindergarten::libs::teacher::Teacher;
//!
//! let db = KindergartenDb::open("kindergarten.db")?;
//! let id = db.teachers().add(&Teacher::new("Ivanova", "Anna"))?;
//! assert!(db.teachers().get_by_id(id)?.is_some());
//! db.close()?;
//! # Ok::<(), kindergarten::db::error::DbError>(())
//! ```

use crate::db::attendance::AttendanceBook;
use crate::db::children::Children;
use crate::db::db::Db;
use crate::db::error::Result;
use crate::db::groups::Groups;
use crate::db::parents::Parents;
use crate::db::relations::Relations;
use crate::db::statistics::Statistics;
use crate::db::teachers::Teachers;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

pub struct KindergartenDb {
    db: Db,
}

impl KindergartenDb {
    /// Opens the database file at `path`, creating it and applying pending
    /// migrations as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Db::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "database opened");
        Ok(Self { db })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self { db: Db::open_in_memory()? })
    }

    pub fn teachers(&self) -> Teachers<'_> {
        Teachers::new(&self.db.conn)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.db.conn)
    }

    pub fn parents(&self) -> Parents<'_> {
        Parents::new(&self.db.conn)
    }

    pub fn children(&self) -> Children<'_> {
        Children::new(&self.db.conn)
    }

    pub fn relations(&self) -> Relations<'_> {
        Relations::new(&self.db.conn)
    }

    pub fn attendance(&self) -> AttendanceBook<'_> {
        AttendanceBook::new(&self.db.conn)
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(&self.db.conn)
    }

    /// Raw connection, for statements no repository covers.
    pub fn conn(&self) -> &Connection {
        &self.db.conn
    }

    pub fn path(&self) -> Option<&Path> {
        self.db.path()
    }

    pub fn close(self) -> Result<()> {
        self.db.close()?;
        info!("database closed");
        Ok(())
    }
}
