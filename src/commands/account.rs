/// Account commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::{AccountDisplay, BalanceDisplay};
use crate::error::Result;
use crate::services::{AccountService, BalanceService};

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show details for the authenticated account
    Get,
    /// Show the account balance
    Balance,
}

pub async fn run(ctx: &CmdContext, command: AccountCommand) -> Result<()> {
    match command {
        AccountCommand::Get => {
            let account = AccountService::new(ctx.client.clone()).get().await?;
            ctx.display(&AccountDisplay { account })
        }
        AccountCommand::Balance => {
            let balance = BalanceService::new(ctx.client.clone()).get().await?;
            ctx.display(&BalanceDisplay { balance })
        }
    }
}
