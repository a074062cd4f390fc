use super::{print_json, Session};
use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs, session: &Session) -> Result<()> {
    let statistics = session.db.statistics();
    let summary = statistics.get_statistics()?;
    let groups = statistics.get_group_statistics()?;

    if args.json {
        return print_json(&serde_json::json!({ "summary": summary, "groups": groups }));
    }

    msg_print!(format!("{}: {}", session.config.app_title, Message::StatisticsHeader), true);
    View::summary(&summary)?;
    if !groups.is_empty() {
        msg_print!(Message::GroupStatisticsHeader, true);
        View::group_statistics(&groups)?;
    }
    Ok(())
}
