//! # Kindergarten
//!
//! Records keeping for a kindergarten office: teachers, groups, parents,
//! children, who is whose parent, and daily attendance, all in one SQLite file.
//!
//! The persistence façade is [`db::kindergarten::KindergartenDb`]; the
//! `kindergarten` binary is a terminal front end over it.
//!
//! ```rust,no_run
//! use kindergarten::db::kindergarten::KindergartenDb;
//! use kindergarten::libs::group::{AgeCategory, Group};
//! use kindergarten::libs::teacher::Teacher;
//!
//! let db = KindergartenDb::open("kindergarten.db")?;
//! let teacher_id = db.teachers().add(&Teacher::new("Ivanova", "Anna"))?;
//! db.groups().add(&Group::new("Sunflowers", AgeCategory::Preschool, Some(teacher_id)))?;
//! println!("{:?}", db.statistics().get_statistics()?);
//! db.close()?;
//! # Ok::<(), kindergarten::db::error::DbError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
