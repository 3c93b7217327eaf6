/// Server commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::{ActionDisplay, ServerDisplay};
use crate::error::Result;
use crate::services::servers::ServerCreateRequest;
use crate::services::ServerService;

#[derive(Debug, Subcommand)]
pub enum ServerCommand {
    /// List servers
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one server
    #[command(visible_alias = "g")]
    Get { id: i64 },
    /// Create a server
    Create {
        name: String,
        /// Region slug, e.g. syd
        #[arg(long)]
        region: String,
        /// Size slug, e.g. std-2vcpu
        #[arg(long)]
        size: String,
        /// Image slug or id
        #[arg(long)]
        image: String,
        /// SSH key ids to install
        #[arg(long)]
        ssh_keys: Vec<i64>,
        /// Enable automated backups
        #[arg(long)]
        backups: bool,
        /// Cloud-init user data
        #[arg(long)]
        user_data: Option<String>,
        /// Place the server in this VPC
        #[arg(long)]
        vpc_id: Option<i64>,
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Permanently destroy a server
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
    /// Reboot a server
    Reboot { id: i64 },
    /// Power a server off
    PowerOff { id: i64 },
    /// Power a server on
    PowerOn { id: i64 },
}

pub async fn run(ctx: &CmdContext, command: ServerCommand) -> Result<()> {
    let servers = ServerService::new(ctx.client.clone());
    match command {
        ServerCommand::List => {
            let list = servers.list().await?;
            ctx.display(&ServerDisplay { servers: list })
        }
        ServerCommand::Get { id } => {
            let server = servers.get(id).await?;
            ctx.display(&ServerDisplay {
                servers: vec![server],
            })
        }
        ServerCommand::Create {
            name,
            region,
            size,
            image,
            ssh_keys,
            backups,
            user_data,
            vpc_id,
            tag,
        } => {
            let request = ServerCreateRequest {
                name,
                region,
                size,
                image,
                ssh_keys: (!ssh_keys.is_empty()).then_some(ssh_keys),
                backups: backups.then_some(true),
                user_data,
                vpc_id,
                tags: (!tag.is_empty()).then_some(tag),
            };
            let server = servers.create(&request).await?;
            ctx.display(&ServerDisplay {
                servers: vec![server],
            })
        }
        ServerCommand::Delete { id } => servers.delete(id).await,
        ServerCommand::Reboot { id } => {
            let action = servers.reboot(id).await?;
            ctx.display(&ActionDisplay {
                actions: vec![action],
            })
        }
        ServerCommand::PowerOff { id } => {
            let action = servers.power_off(id).await?;
            ctx.display(&ActionDisplay {
                actions: vec![action],
            })
        }
        ServerCommand::PowerOn { id } => {
            let action = servers.power_on(id).await?;
            ctx.display(&ActionDisplay {
                actions: vec![action],
            })
        }
    }
}
