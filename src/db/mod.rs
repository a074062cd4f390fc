//! Database layer for the kindergarten records store.
//!
//! Everything lives in one SQLite file. [`db::Db`] owns the connection and
//! applies [`migrations`] on open; [`kindergarten::KindergartenDb`] wraps it
//! and exposes one repository per entity group.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kindergarten::db::kindergarten::KindergartenDb;
//! use kindergarten::libs::group::{AgeCategory, Group};
//!
//! let db = KindergartenDb::open("kindergarten.db")?;
//! let group_id = db.groups().add(&Group::new("Sunflowers", AgeCategory::Preschool, None))?;
//! for child in db.children().get_by_group(group_id)? {
//!     println!("{}", child.full_name());
//! }
//! # Ok::<(), kindergarten::db::error::DbError>(())
//! ```
//!
//! ## Referential rules
//!
//! - Deleting a group detaches its children.
//! - Deleting a parent or child removes its links (and a child's attendance).
//! - A teacher assigned to a group cannot be deleted.
//!
//! Each of these runs inside one transaction.

/// Connection ownership and setup.
pub mod db;

/// Store errors.
pub mod error;

/// Versioned schema changes.
pub mod migrations;

pub(crate) mod changes;

pub mod teachers;

pub mod groups;

pub mod parents;

/// Children roster, group membership and age queries.
pub mod children;

/// Parent/child links with relationship labels.
pub mod relations;

pub mod attendance;

pub mod statistics;

/// Single entry point over all repositories.
pub mod kindergarten;
