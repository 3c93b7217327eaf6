/// Floating IP commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::FloatingIpDisplay;
use crate::error::Result;
use crate::services::floating_ips::FloatingIpCreateRequest;
use crate::services::FloatingIpService;

#[derive(Debug, Subcommand)]
pub enum FloatingIpCommand {
    /// List floating IPs
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one floating IP
    #[command(visible_alias = "g")]
    Get { ip: String },
    /// Create a floating IP, optionally assigning it to a server
    Create {
        /// Region slug, e.g. syd
        #[arg(long)]
        region: String,
        /// Assign the new IP to this server
        #[arg(long)]
        server_id: Option<i64>,
    },
    /// Release a floating IP
    #[command(visible_alias = "rm")]
    Delete { ip: String },
}

pub async fn run(ctx: &CmdContext, command: FloatingIpCommand) -> Result<()> {
    let fips = FloatingIpService::new(ctx.client.clone());
    match command {
        FloatingIpCommand::List => {
            let list = fips.list().await?;
            ctx.display(&FloatingIpDisplay { floating_ips: list })
        }
        FloatingIpCommand::Get { ip } => {
            let fip = fips.get(&ip).await?;
            ctx.display(&FloatingIpDisplay {
                floating_ips: vec![fip],
            })
        }
        FloatingIpCommand::Create { region, server_id } => {
            let fip = fips
                .create(&FloatingIpCreateRequest {
                    region_slug: region,
                    server_id,
                })
                .await?;
            ctx.display(&FloatingIpDisplay {
                floating_ips: vec![fip],
            })
        }
        FloatingIpCommand::Delete { ip } => fips.delete(&ip).await,
    }
}
