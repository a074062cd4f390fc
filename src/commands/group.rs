use super::{confirm, print_json, Session};
use crate::{
    libs::{
        group::{AgeCategory, Group, GroupUpdate},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    command: GroupCommand,
}

#[derive(Debug, Subcommand)]
enum GroupCommand {
    /// Create a group
    Add {
        name: String,
        /// nursery, junior, middle, senior or preschool; defaults to the configured category
        #[arg(short, long)]
        category: Option<AgeCategory>,
        /// ID of the teacher in charge
        #[arg(short, long)]
        teacher: Option<i64>,
    },
    /// List all groups with teacher and head count
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show a group and its children
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Change some fields of a group
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<AgeCategory>,
        #[arg(long, conflicts_with = "no_teacher")]
        teacher: Option<i64>,
        /// Leave the group without a teacher
        #[arg(long)]
        no_teacher: bool,
    },
    /// Delete a group; its children stay enrolled without a group
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Find groups by name
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
}

pub fn cmd(args: GroupArgs, session: &Session) -> Result<()> {
    match args.command {
        GroupCommand::Add { name, category, teacher } => {
            let category = category.unwrap_or(session.config.default_age_category);
            let group = Group::new(name.trim(), category, teacher);
            group.validate()?;
            let id = session.db.groups().add(&group)?;
            msg_success!(Message::GroupCreated(id));
            Ok(())
        }
        GroupCommand::List { json } => print_groups(session.db.groups().get_all()?, json),
        GroupCommand::Search { term, json } => print_groups(session.db.groups().search(&term)?, json),
        GroupCommand::Show { id, json } => handle_show(session, id, json),
        GroupCommand::Update {
            id,
            name,
            category,
            teacher,
            no_teacher,
        } => {
            let update = GroupUpdate {
                name,
                age_category: category,
                teacher_id: if no_teacher { Some(None) } else { teacher.map(Some) },
            };
            if update.is_empty() {
                msg_info!(Message::NoChangesProvided);
                return Ok(());
            }
            update.validate()?;
            if session.db.groups().update(id, &update)? {
                msg_success!(Message::GroupUpdated(id));
            } else {
                msg_error!(Message::GroupNotFound(id));
            }
            Ok(())
        }
        GroupCommand::Delete { id, yes } => {
            let Some(group) = session.db.groups().get_by_id(id)? else {
                msg_error!(Message::GroupNotFound(id));
                return Ok(());
            };
            if !confirm(Message::ConfirmDeleteGroup(group.name.clone(), group.children_count), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            session.db.groups().delete(id)?;
            msg_success!(Message::GroupDeleted(group.name, group.children_count));
            Ok(())
        }
    }
}

fn print_groups(groups: Vec<Group>, json: bool) -> Result<()> {
    if json {
        return print_json(&groups);
    }
    if groups.is_empty() {
        msg_info!(Message::GroupsNotFound);
        return Ok(());
    }
    msg_print!(Message::GroupsHeader, true);
    View::groups(&groups)
}

fn handle_show(session: &Session, id: i64, json: bool) -> Result<()> {
    let Some(group) = session.db.groups().get_by_id(id)? else {
        msg_error!(Message::GroupNotFound(id));
        return Ok(());
    };
    let children = session.db.children().get_by_group(id)?;

    if json {
        return print_json(&serde_json::json!({ "group": group, "children": children }));
    }

    View::groups(std::slice::from_ref(&group))?;
    if !children.is_empty() {
        msg_print!(Message::ChildrenOfGroupHeader(group.name.clone()), true);
        View::children(&children, session.date_format())?;
    }
    Ok(())
}
