use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the schema version of the database file
    Status,
    /// List applied migrations
    History,
}

/// Inspects the database without applying pending migrations.
pub fn cmd(args: MigrationsArgs, db_flag: Option<&Path>) -> Result<()> {
    let path = Config::read()?.resolve_db_path(db_flag)?;
    if !path.is_file() {
        msg_warning!(Message::DatabaseMissing(path.display().to_string()));
        return Ok(());
    }
    let conn = Db::new_without_migrations(&path)?;
    let manager = MigrationManager::new();

    msg_print!(Message::DatabasePath(path.display().to_string()));
    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            msg_print!(Message::DatabaseVersion(version));
            msg_print!(Message::LatestVersion(manager.latest_version()));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::MigrationHistoryEmpty);
                return Ok(());
            }
            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
