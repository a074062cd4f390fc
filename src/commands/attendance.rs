use super::{non_blank, parse_date_arg, print_json, Session};
use crate::{
    db::error::DbError,
    libs::{
        attendance::{AttendanceRecord, AttendanceStatus, AttendanceUpdate},
        formatter::format_date,
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Subcommand};

/// Default look-back of `attendance child` when `--from` is omitted.
const DEFAULT_HISTORY_DAYS: i64 = 30;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    #[command(subcommand)]
    command: AttendanceCommand,
}

#[derive(Debug, Subcommand)]
enum AttendanceCommand {
    /// Set a child's status for a day, creating or overwriting the record
    Mark {
        child_id: i64,
        /// present, absent or sick
        status: AttendanceStatus,
        /// Defaults to today
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Add a record; fails if the child already has one for that day
    Add {
        child_id: i64,
        status: AttendanceStatus,
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show the register of one day
    Day {
        #[arg(value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Show one child's records and totals over a date range
    Child {
        child_id: i64,
        /// Defaults to 30 days before --to
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,
        /// Defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Change the status or notes of a record
    Update {
        id: i64,
        #[arg(short, long)]
        status: Option<AttendanceStatus>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a record
    Delete { id: i64 },
}

pub fn cmd(args: AttendanceArgs, session: &Session) -> Result<()> {
    let today = Local::now().date_naive();

    match args.command {
        AttendanceCommand::Mark {
            child_id,
            status,
            date,
            notes,
        } => {
            let Some(child) = session.db.children().get_by_id(child_id)? else {
                msg_error!(Message::ChildNotFound(child_id));
                return Ok(());
            };
            let date = date.unwrap_or(today);
            let notes = non_blank(notes);
            session.db.attendance().mark(child_id, date, status, notes.as_deref())?;
            msg_success!(Message::AttendanceMarked(
                child.full_name(),
                format_date(&date, session.date_format()),
                status.to_string()
            ));
            Ok(())
        }
        AttendanceCommand::Add {
            child_id,
            status,
            date,
            notes,
        } => {
            let Some(child) = session.db.children().get_by_id(child_id)? else {
                msg_error!(Message::ChildNotFound(child_id));
                return Ok(());
            };
            let record = AttendanceRecord {
                notes: non_blank(notes),
                ..AttendanceRecord::new(child_id, date.unwrap_or(today), status)
            };
            match session.db.attendance().add(&record) {
                Ok(id) => msg_success!(Message::AttendanceAdded(id)),
                Err(DbError::ConstraintViolation(_)) => msg_error!(Message::AttendanceDuplicate(
                    child.full_name(),
                    format_date(&record.date, session.date_format())
                )),
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        AttendanceCommand::Day { date, json } => {
            let date = date.unwrap_or(today);
            let records = session.db.attendance().get_by_date(date)?;
            if json {
                return print_json(&records);
            }
            let shown = format_date(&date, session.date_format());
            if records.is_empty() {
                msg_info!(Message::AttendanceNotFoundForDate(shown));
                return Ok(());
            }
            msg_print!(Message::AttendanceHeader(shown), true);
            View::attendance(&records, session.date_format())
        }
        AttendanceCommand::Child {
            child_id,
            from,
            to,
            json,
        } => {
            let Some(child) = session.db.children().get_by_id(child_id)? else {
                msg_error!(Message::ChildNotFound(child_id));
                return Ok(());
            };
            let to = to.unwrap_or(today);
            let from = from.unwrap_or(to - Duration::days(DEFAULT_HISTORY_DAYS));
            let records = session.db.attendance().get_by_child(child_id, from, to)?;
            let summary = session.db.attendance().summary_for_child(child_id, from, to)?;

            if json {
                return print_json(&serde_json::json!({ "records": records, "summary": summary }));
            }
            if !records.is_empty() {
                View::attendance(&records, session.date_format())?;
            }
            msg_print!(Message::AttendanceSummary(
                child.full_name(),
                summary.present,
                summary.absent,
                summary.sick
            ));
            Ok(())
        }
        AttendanceCommand::Update { id, status, notes } => {
            let update = AttendanceUpdate { status, notes };
            if update.is_empty() {
                msg_info!(Message::NoChangesProvided);
                return Ok(());
            }
            if session.db.attendance().update(id, &update)? {
                msg_success!(Message::AttendanceUpdated(id));
            } else {
                msg_error!(Message::AttendanceNotFound(id));
            }
            Ok(())
        }
        AttendanceCommand::Delete { id } => {
            if session.db.attendance().get_by_id(id)?.is_none() {
                msg_error!(Message::AttendanceNotFound(id));
                return Ok(());
            }
            session.db.attendance().delete(id)?;
            msg_success!(Message::AttendanceDeleted(id));
            Ok(())
        }
    }
}
