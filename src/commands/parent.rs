use super::{confirm, non_blank, print_json, Session};
use crate::{
    libs::{
        messages::Message,
        parent::{Parent, ParentUpdate},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ParentArgs {
    #[command(subcommand)]
    command: ParentCommand,
}

#[derive(Debug, Subcommand)]
enum ParentCommand {
    /// Add a parent
    Add {
        last_name: String,
        first_name: String,
        #[arg(short, long)]
        middle_name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
    },
    /// List all parents
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show a parent with their children
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Change some fields of a parent
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
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a parent and their links to children
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Find parents by name, phone, email or address
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
    /// Link a parent to a child, or change the relationship of an existing link
    Link {
        parent_id: i64,
        child_id: i64,
        /// e.g. mother, father, grandmother
        relationship: String,
    },
    /// Remove the link between a parent and a child
    Unlink { parent_id: i64, child_id: i64 },
}

pub fn cmd(args: ParentArgs, session: &Session) -> Result<()> {
    match args.command {
        ParentCommand::Add {
            last_name,
            first_name,
            middle_name,
            phone,
            email,
            address,
        } => {
            let parent = Parent {
                middle_name: non_blank(middle_name),
                phone: non_blank(phone),
                email: non_blank(email),
                address: non_blank(address),
                ..Parent::new(last_name.trim(), first_name.trim())
            };
            parent.validate()?;
            let id = session.db.parents().add(&parent)?;
            msg_success!(Message::ParentCreated(id));
            Ok(())
        }
        ParentCommand::List { json } => print_parents(session.db.parents().get_all()?, json),
        ParentCommand::Search { term, json } => print_parents(session.db.parents().search(&term)?, json),
        ParentCommand::Show { id, json } => handle_show(session, id, json),
        ParentCommand::Update {
            id,
            last_name,
            first_name,
            middle_name,
            phone,
            email,
            address,
        } => {
            let update = ParentUpdate {
                last_name,
                first_name,
                middle_name,
                phone,
                email,
                address,
            };
            if update.is_empty() {
                msg_info!(Message::NoChangesProvided);
                return Ok(());
            }
            update.validate()?;
            if session.db.parents().update(id, &update)? {
                msg_success!(Message::ParentUpdated(id));
            } else {
                msg_error!(Message::ParentNotFound(id));
            }
            Ok(())
        }
        ParentCommand::Delete { id, yes } => {
            let Some(parent) = session.db.parents().get_by_id(id)? else {
                msg_error!(Message::ParentNotFound(id));
                return Ok(());
            };
            if !confirm(Message::ConfirmDeleteParent(parent.full_name()), yes)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            session.db.parents().delete(id)?;
            msg_success!(Message::ParentDeleted(parent.full_name()));
            Ok(())
        }
        ParentCommand::Link {
            parent_id,
            child_id,
            relationship,
        } => handle_link(session, parent_id, child_id, &relationship),
        ParentCommand::Unlink { parent_id, child_id } => {
            if session.db.relations().remove(parent_id, child_id)? {
                msg_success!(Message::RelationRemoved);
            } else {
                msg_info!(Message::RelationNotFound);
            }
            Ok(())
        }
    }
}

fn print_parents(parents: Vec<Parent>, json: bool) -> Result<()> {
    if json {
        return print_json(&parents);
    }
    if parents.is_empty() {
        msg_info!(Message::ParentsNotFound);
        return Ok(());
    }
    msg_print!(Message::ParentsHeader, true);
    View::parents(&parents)
}

fn handle_show(session: &Session, id: i64, json: bool) -> Result<()> {
    let Some(parent) = session.db.parents().get_by_id(id)? else {
        msg_error!(Message::ParentNotFound(id));
        return Ok(());
    };
    let children = session.db.relations().get_children_by_parent(id)?;

    if json {
        return print_json(&serde_json::json!({ "parent": parent, "children": children }));
    }

    View::parents(std::slice::from_ref(&parent))?;
    if !children.is_empty() {
        msg_print!(Message::ChildrenOfParentHeader(parent.full_name()), true);
        View::related_children(&children)?;
    }
    Ok(())
}

fn handle_link(session: &Session, parent_id: i64, child_id: i64, relationship: &str) -> Result<()> {
    let Some(parent) = session.db.parents().get_by_id(parent_id)? else {
        msg_error!(Message::ParentNotFound(parent_id));
        return Ok(());
    };
    let Some(child) = session.db.children().get_by_id(child_id)? else {
        msg_error!(Message::ChildNotFound(child_id));
        return Ok(());
    };

    session.db.relations().add(parent_id, child_id, relationship)?;
    msg_success!(Message::RelationSaved(
        parent.full_name(),
        child.full_name(),
        relationship.trim().to_string()
    ));
    Ok(())
}
