//! Command-line front end.
//!
//! Every subcommand except `init` and `migrations` works through a
//! [`Session`]: the loaded [`Config`] plus an open [`KindergartenDb`]. Store
//! failures bubble up as `anyhow` errors and are reworded once, in
//! [`Cli::menu`], so constraint failures reach the user as readable messages.

pub mod attendance;
pub mod child;
pub mod group;
pub mod init;
pub mod migrations;
pub mod parent;
pub mod stats;
pub mod teacher;

use crate::db::error::DbError;
use crate::db::kindergarten::KindergartenDb;
use crate::libs::config::Config;
use crate::libs::formatter::parse_date;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage teachers")]
    Teacher(teacher::TeacherArgs),
    #[command(about = "Manage groups")]
    Group(group::GroupArgs),
    #[command(about = "Manage parents and their links to children")]
    Parent(parent::ParentArgs),
    #[command(about = "Manage children")]
    Child(child::ChildArgs),
    #[command(about = "Take and review attendance")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Show kindergarten statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file, overriding KINDERGARTEN_DB and the configuration
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        cli.run().map_err(friendly_error)
    }

    fn run(self) -> Result<()> {
        let db_flag = self.db.as_deref();
        match self.command {
            Commands::Init(args) => init::cmd(args, db_flag),
            Commands::Migrations(args) => migrations::cmd(args, db_flag),
            Commands::Teacher(args) => Session::run(db_flag, |s| teacher::cmd(args, s)),
            Commands::Group(args) => Session::run(db_flag, |s| group::cmd(args, s)),
            Commands::Parent(args) => Session::run(db_flag, |s| parent::cmd(args, s)),
            Commands::Child(args) => Session::run(db_flag, |s| child::cmd(args, s)),
            Commands::Attendance(args) => Session::run(db_flag, |s| attendance::cmd(args, s)),
            Commands::Stats(args) => Session::run(db_flag, |s| stats::cmd(args, s)),
        }
    }
}

/// Configuration and open database shared by the record commands.
pub struct Session {
    pub config: Config,
    pub db: KindergartenDb,
}

impl Session {
    pub fn open(db_flag: Option<&Path>) -> Result<Self> {
        let config = Config::read()?;
        let path = config.resolve_db_path(db_flag)?;
        msg_debug!(Message::DatabasePath(path.display().to_string()));
        let db = KindergartenDb::open(&path)?;
        Ok(Self { config, db })
    }

    /// Opens a session, runs `f` and closes the database afterwards, also
    /// when `f` fails.
    pub fn run(db_flag: Option<&Path>, f: impl FnOnce(&Session) -> Result<()>) -> Result<()> {
        let session = Self::open(db_flag)?;
        let result = f(&session);
        session.db.close()?;
        result
    }

    pub fn date_format(&self) -> &str {
        &self.config.date_format
    }
}

/// Rewords store errors for the terminal; other errors pass through.
fn friendly_error(err: anyhow::Error) -> anyhow::Error {
    match err.downcast::<DbError>() {
        Ok(DbError::ConstraintViolation(detail)) => msg_error_anyhow!(Message::ConstraintViolation(detail)),
        Ok(DbError::Validation(detail)) => msg_error_anyhow!(Message::InvalidInput(detail)),
        Ok(DbError::TeacherInUse { teacher_id, groups }) => {
            msg_error_anyhow!(Message::TeacherInUse(format!("#{}", teacher_id), groups))
        }
        Ok(other) => msg_error_anyhow!(Message::DatabaseError(other.to_string())),
        Err(err) => err,
    }
}

/// clap parser for dates typed as `YYYY-MM-DD` or `DD.MM.YYYY`.
pub(crate) fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Asks for confirmation unless `assume_yes` is set.
pub(crate) fn confirm(prompt: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Treats a blank string as "not given".
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
