use super::{confirm, non_blank, print_json, Session};
use crate::{
    db::error::DbError,
    libs::{
        messages::Message,
        teacher::{Teacher, TeacherUpdate},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TeacherArgs {
    #[command(subcommand)]
    command: TeacherCommand,
}

#[derive(Debug, Subcommand)]
enum TeacherCommand {
    /// Add a teacher
    Add {
        last_name: String,
        first_name: String,
        #[arg(short, long)]
        middle_name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all teachers
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one teacher with their groups
    Show { id: i64 },
    /// Change some fields of a teacher
    Update {
        id: i64,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        middle_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a teacher who has no groups
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Find teachers by name, phone or email
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
}

pub fn cmd(args: TeacherArgs, session: &Session) -> Result<()> {
    match args.command {
        TeacherCommand::Add {
            last_name,
            first_name,
            middle_name,
            phone,
            email,
        } => {
            let teacher = Teacher {
                middle_name: non_blank(middle_name),
                phone: non_blank(phone),
                email: non_blank(email),
                ..Teacher::new(last_name.trim(), first_name.trim())
            };
            teacher.validate()?;
            let id = session.db.teachers().add(&teacher)?;
            msg_success!(Message::TeacherCreated(id));
            Ok(())
        }
        TeacherCommand::List { json } => print_teachers(session.db.teachers().get_all()?, json),
        TeacherCommand::Search { term, json } => print_teachers(session.db.teachers().search(&term)?, json),
        TeacherCommand::Show { id } => handle_show(session, id),
        TeacherCommand::Update {
            id,
            last_name,
            first_name,
            middle_name,
            phone,
            email,
        } => {
            let update = TeacherUpdate {
                last_name,
                first_name,
                middle_name,
                phone,
                email,
            };
            if update.is_empty() {
                msg_info!(Message::NoChangesProvided);
                return Ok(());
            }
            update.validate()?;
            if session.db.teachers().update(id, &update)? {
                msg_success!(Message::TeacherUpdated(id));
            } else {
                msg_error!(Message::TeacherNotFound(id));
            }
            Ok(())
        }
        TeacherCommand::Delete { id, yes } => handle_delete(session, id, yes),
    }
}

fn print_teachers(teachers: Vec<Teacher>, json: bool) -> Result<()> {
    if json {
        return print_json(&teachers);
    }
    if teachers.is_empty() {
        msg_info!(Message::TeachersNotFound);
        return Ok(());
    }
    msg_print!(Message::TeachersHeader, true);
    View::teachers(&teachers)
}

fn handle_show(session: &Session, id: i64) -> Result<()> {
    let Some(teacher) = session.db.teachers().get_by_id(id)? else {
        msg_error!(Message::TeacherNotFound(id));
        return Ok(());
    };
    View::teachers(std::slice::from_ref(&teacher))?;

    let groups = session.db.groups().get_by_teacher(id)?;
    if !groups.is_empty() {
        msg_print!(Message::GroupsHeader, true);
        View::groups(&groups)?;
    }
    Ok(())
}

fn handle_delete(session: &Session, id: i64, yes: bool) -> Result<()> {
    let Some(teacher) = session.db.teachers().get_by_id(id)? else {
        msg_error!(Message::TeacherNotFound(id));
        return Ok(());
    };

    if !confirm(Message::ConfirmDeleteTeacher(teacher.full_name()), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    match session.db.teachers().delete(id) {
        Ok(()) => {
            msg_success!(Message::TeacherDeleted(teacher.full_name()));
            Ok(())
        }
        Err(DbError::TeacherInUse { groups, .. }) => {
            msg_error!(Message::TeacherInUse(teacher.full_name(), groups));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
