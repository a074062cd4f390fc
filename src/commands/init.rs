use crate::{
    db::kindergarten::KindergartenDb,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Only create the database file with the current configuration
    #[arg(long)]
    skip_wizard: bool,
}

/// Runs the configuration wizard and creates the database file.
pub fn cmd(args: InitArgs, db_flag: Option<&Path>) -> Result<()> {
    let config = if args.skip_wizard {
        Config::read()?
    } else {
        let config = Config::init()?;
        config.save()?;
        msg_success!(Message::ConfigSaved);
        config
    };

    let path = config.resolve_db_path(db_flag)?;
    KindergartenDb::open(&path)?.close()?;
    msg_info!(Message::DatabasePath(path.display().to_string()));
    Ok(())
}
