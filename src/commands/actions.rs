/// Action commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::ActionDisplay;
use crate::error::Result;
use crate::services::ActionService;

#[derive(Debug, Subcommand)]
pub enum ActionCommand {
    /// List recent actions
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one action
    #[command(visible_alias = "g")]
    Get { id: i64 },
    /// Block until an action reaches a terminal status
    Wait {
        id: i64,
        /// Give up after this many seconds
        #[arg(long, default_value_t = 300)]
        timeout: u64,
    },
}

pub async fn run(ctx: &CmdContext, command: ActionCommand) -> Result<()> {
    let actions = ActionService::new(ctx.client.clone());
    match command {
        ActionCommand::List => {
            let list = actions.list().await?;
            ctx.display(&ActionDisplay { actions: list })
        }
        ActionCommand::Get { id } => {
            let action = actions.get(id).await?;
            ctx.display(&ActionDisplay {
                actions: vec![action],
            })
        }
        ActionCommand::Wait { id, timeout } => {
            let action = actions.wait(id, timeout).await?;
            ctx.display(&ActionDisplay {
                actions: vec![action],
            })
        }
    }
}
