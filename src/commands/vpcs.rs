/// VPC commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::VpcDisplay;
use crate::error::Result;
use crate::services::vpcs::{VpcCreateRequest, VpcPatch, VpcUpdateRequest};
use crate::services::VpcService;

#[derive(Debug, Subcommand)]
pub enum VpcCommand {
    /// List VPCs
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one VPC
    #[command(visible_alias = "g")]
    Get { id: i64 },
    /// Create a VPC
    Create {
        #[arg(long)]
        name: String,
        /// Region slug, e.g. syd
        #[arg(long)]
        region: String,
        #[arg(long)]
        description: Option<String>,
        /// CIDR range, e.g. 10.240.0.0/16
        #[arg(long)]
        ip_range: Option<String>,
    },
    /// Replace a VPC's mutable configuration
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Make this VPC the region default
        #[arg(long)]
        default: bool,
    },
    /// Patch individual fields, leaving the rest untouched
    Set {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Make this VPC the region default
        #[arg(long)]
        default: bool,
    },
    /// Permanently delete a VPC
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
}

pub async fn run(ctx: &CmdContext, command: VpcCommand) -> Result<()> {
    let vpcs = VpcService::new(ctx.client.clone());
    match command {
        VpcCommand::List => {
            let list = vpcs.list().await?;
            ctx.display(&VpcDisplay { vpcs: list })
        }
        VpcCommand::Get { id } => {
            let vpc = vpcs.get(id).await?;
            ctx.display(&VpcDisplay { vpcs: vec![vpc] })
        }
        VpcCommand::Create {
            name,
            region,
            description,
            ip_range,
        } => {
            let vpc = vpcs
                .create(&VpcCreateRequest {
                    name,
                    region_slug: region,
                    description,
                    ip_range,
                })
                .await?;
            ctx.display(&VpcDisplay { vpcs: vec![vpc] })
        }
        VpcCommand::Update {
            id,
            name,
            description,
            default,
        } => {
            let vpc = vpcs
                .update(
                    id,
                    &VpcUpdateRequest {
                        name,
                        description,
                        default: default.then_some(true),
                    },
                )
                .await?;
            ctx.display(&VpcDisplay { vpcs: vec![vpc] })
        }
        VpcCommand::Set {
            id,
            name,
            description,
            default,
        } => {
            let mut patch = VpcPatch::new();
            if let Some(name) = name {
                patch = patch.name(name);
            }
            if let Some(description) = description {
                patch = patch.description(description);
            }
            if default {
                patch = patch.default_vpc();
            }
            let vpc = vpcs.set(id, &patch).await?;
            ctx.display(&VpcDisplay { vpcs: vec![vpc] })
        }
        VpcCommand::Delete { id } => vpcs.delete(id).await,
    }
}
