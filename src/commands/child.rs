use super::{confirm, non_blank, parse_date_arg, print_json, Session};
use crate::{
    libs::{
        child::{Child, ChildUpdate, Gender},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ChildArgs {
    #[command(subcommand)]
    command: ChildCommand,
}

#[derive(Debug, Subcommand)]
enum ChildCommand {
    /// Enroll a child
    Add {
        last_name: String,
        first_name: String,
        /// YYYY-MM-DD or DD.MM.YYYY
        #[arg(short, long, value_parser = parse_date_arg)]
        birth_date: NaiveDate,
        /// M or F
        #[arg(short = 's', long)]
        gender: Gender,
        #[arg(short, long)]
        middle_name: Option<String>,
        #[arg(short, long)]
        group: Option<i64>,
        /// Defaults to today
        #[arg(short, long, value_parser = parse_date_arg)]
        enrolled: Option<NaiveDate>,
    },
    /// List children
    List {
        /// Only children of this group
        #[arg(short, long, conflicts_with = "unassigned")]
        group: Option<i64>,
        /// Only children without a group
        #[arg(short, long)]
        unassigned: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show a child with their parents
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Change some fields of a child
    Update {
        id: i64,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        middle_name: Option<String>,
        #[arg(long, value_parser = parse_date_arg)]
        birth_date: Option<NaiveDate>,
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long, value_parser = parse_date_arg)]
        enrolled: Option<NaiveDate>,
    },
    /// Delete a child with their parent links and attendance
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Find children by last or first name
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
    /// Put a child into a group; without a group ID the child leaves their group
    Assign { id: i64, group: Option<i64> },
    /// Move every child of one group into another, or out of any group
    Transfer {
        from: i64,
        #[arg(long)]
        to: Option<i64>,
    },
    /// Children whose age in full years is within a range
    Age {
        min: i32,
        max: i32,
        #[arg(long)]
        json: bool,
    },
    /// Show a child's parents, or replace them with --link
    Parents {
        id: i64,
        /// PARENT_ID=RELATIONSHIP, repeatable; replaces all existing links
        #[arg(long = "link", value_parser = parse_link)]
        links: Vec<(i64, String)>,
        /// Remove every parent link of the child
        #[arg(long, conflicts_with = "links")]
        clear: bool,
    },
}

pub fn cmd(args: ChildArgs, session: &Session) -> Result<()> {
    match args.command {
        ChildCommand::Add {
            last_name,
            first_name,
            birth_date,
            gender,
            middle_name,
            group,
            enrolled,
        } => {
            let enrollment_date = enrolled.unwrap_or_else(|| Local::now().date_naive());
            let child = Child {
                middle_name: non_blank(middle_name),
                group_id: group,
                ..Child::new(last_name.trim(), first_name.trim(), birth_date, gender, enrollment_date)
            };
            child.validate()?;
            let id = session.db.children().add(&child)?;
            msg_success!(Message::ChildCreated(id));
            Ok(())
        }
        ChildCommand::List { group, unassigned, json } => {
            let children = match group {
                Some(group_id) => session.db.children().get_by_group(group_id)?,
                None if unassigned => session.db.children().get_unassigned()?,
                None => session.db.children().get_all()?,
            };
            print_children(session, children, json)
        }
        ChildCommand::Search { term, json } => print_children(session, session.db.children().search(&term)?, json),
        ChildCommand::Show { id, json } => handle_show(session, id, json),
        ChildCommand::Update {
            id,
            last_name,
            first_name,
            middle_name,
            birth_date,
            gender,
            enrolled,
        } => {
            let update = ChildUpdate {
                last_name,
                first_name,
                middle_name,
                birth_date,
                gender,
                group_id: None,
                enrollment_date: enrolled,
            };
            if update.is_empty() {
                msg_info!(Message::NoChangesProvided);
                return Ok(());
            }
            let Some(current) = session.db.children().get_by_id(id)? else {
                msg_error!(Message::ChildNotFound(id));
                return Ok(());
            };
            current.apply(&update).validate()?;
            session.db.children().update(id, &update)?;
            msg_success!(Message::ChildUpdated(id));
            Ok(())
        }
        ChildCommand::Delete { id, yes } => {
            let Some(child) = session.db.children().get_by_id(id)? else {
                msg_error!(Message::ChildNotFound(id));
                return Ok(());
            };
            if !confirm(Message::ConfirmDeleteChild(child.full_name()), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            session.db.children().delete(id)?;
            msg_success!(Message::ChildDeleted(child.full_name()));
            Ok(())
        }
        ChildCommand::Assign { id, group } => handle_assign(session, id, group),
        ChildCommand::Transfer { from, to } => {
            let moved = session.db.children().transfer_group(from, to)?;
            msg_success!(Message::ChildrenTransferred(moved));
            Ok(())
        }
        ChildCommand::Age { min, max, json } => {
            let children = session.db.children().get_by_age(min, max)?;
            if json {
                return print_json(&children);
            }
            if children.is_empty() {
                msg_info!(Message::ChildrenNotFound);
                return Ok(());
            }
            msg_print!(Message::ChildrenByAgeHeader(min, max), true);
            View::children_with_age(&children, session.date_format())
        }
        ChildCommand::Parents { id, links, clear } => handle_parents(session, id, links, clear),
    }
}

fn print_children(session: &Session, children: Vec<Child>, json: bool) -> Result<()> {
    if json {
        return print_json(&children);
    }
    if children.is_empty() {
        msg_info!(Message::ChildrenNotFound);
        return Ok(());
    }
    msg_print!(Message::ChildrenHeader, true);
    View::children(&children, session.date_format())
}

fn handle_show(session: &Session, id: i64, json: bool) -> Result<()> {
    let Some(child) = session.db.children().get_by_id(id)? else {
        msg_error!(Message::ChildNotFound(id));
        return Ok(());
    };
    let parents = session.db.relations().get_parents_by_child(id)?;

    if json {
        return print_json(&serde_json::json!({ "child": child, "parents": parents }));
    }

    View::children(std::slice::from_ref(&child), session.date_format())?;
    if !parents.is_empty() {
        msg_print!(Message::ParentsOfChildHeader(child.full_name()), true);
        View::related_parents(&parents)?;
    }
    Ok(())
}

fn handle_assign(session: &Session, id: i64, group_id: Option<i64>) -> Result<()> {
    let Some(child) = session.db.children().get_by_id(id)? else {
        msg_error!(Message::ChildNotFound(id));
        return Ok(());
    };

    let group = match group_id {
        Some(group_id) => match session.db.groups().get_by_id(group_id)? {
            Some(group) => Some(group),
            None => {
                msg_error!(Message::GroupNotFound(group_id));
                return Ok(());
            }
        },
        None => None,
    };

    session.db.children().assign_to_group(id, group_id)?;
    match group {
        Some(group) => msg_success!(Message::ChildAssigned(child.full_name(), group.name)),
        None => msg_success!(Message::ChildUnassigned(child.full_name())),
    }
    Ok(())
}

fn handle_parents(session: &Session, id: i64, links: Vec<(i64, String)>, clear: bool) -> Result<()> {
    let Some(child) = session.db.children().get_by_id(id)? else {
        msg_error!(Message::ChildNotFound(id));
        return Ok(());
    };

    if clear || !links.is_empty() {
        session.db.relations().set_parents_for_child(id, &links)?;
        msg_success!(Message::RelationsReplaced(child.full_name(), links.len()));
        return Ok(());
    }

    let parents = session.db.relations().get_parents_by_child(id)?;
    if parents.is_empty() {
        msg_info!(Message::ParentsNotFound);
        return Ok(());
    }
    msg_print!(Message::ParentsOfChildHeader(child.full_name()), true);
    View::related_parents(&parents)
}

/// Parses `PARENT_ID=RELATIONSHIP`.
fn parse_link(value: &str) -> std::result::Result<(i64, String), String> {
    let (id, relationship) = value
        .split_once('=')
        .ok_or_else(|| format!("'{}' should look like PARENT_ID=RELATIONSHIP", value))?;
    let id = id.trim().parse::<i64>().map_err(|e| format!("invalid parent ID '{}': {}", id.trim(), e))?;
    let relationship = relationship.trim();
    if relationship.is_empty() {
        return Err("relationship is required".to_string());
    }
    Ok((id, relationship.to_string()))
}
