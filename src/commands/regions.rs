/// Region commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::RegionDisplay;
use crate::error::Result;
use crate::services::RegionService;

#[derive(Debug, Subcommand)]
pub enum RegionCommand {
    /// List datacenter regions
    #[command(visible_alias = "ls")]
    List,
}

pub async fn run(ctx: &CmdContext, command: RegionCommand) -> Result<()> {
    match command {
        RegionCommand::List => {
            let regions = RegionService::new(ctx.client.clone()).list().await?;
            ctx.display(&RegionDisplay { regions })
        }
    }
}
