/// Domain and DNS record commands
use clap::Subcommand;

use crate::commands::CmdContext;
use crate::display::{DomainDisplay, DomainRecordDisplay};
use crate::error::Result;
use crate::services::domains::{DomainCreateRequest, DomainRecordPatch};
use crate::services::DomainService;

#[derive(Debug, Subcommand)]
pub enum DomainCommand {
    /// List domains
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one domain
    #[command(visible_alias = "g")]
    Get { domain: String },
    /// Add a domain to the account
    Create {
        domain: String,
        /// Create an initial A record pointing at this address
        #[arg(long)]
        ip_address: Option<String>,
    },
    /// Permanently delete a domain and all of its records
    #[command(visible_alias = "rm")]
    Delete { domain: String },
    /// Manage DNS records within a domain
    #[command(subcommand)]
    Records(RecordCommand),
}

#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// List the records of a domain
    #[command(visible_alias = "ls")]
    List { domain: String },
    /// Retrieve one record
    #[command(visible_alias = "g")]
    Get { domain: String, id: i64 },
    /// Create a record
    Create {
        domain: String,
        #[command(flatten)]
        fields: RecordFields,
    },
    /// Update fields of an existing record; unset flags are left untouched
    Update {
        domain: String,
        id: i64,
        #[command(flatten)]
        fields: RecordFields,
    },
    /// Delete a record
    #[command(visible_alias = "rm")]
    Delete { domain: String, id: i64 },
}

/// Sparse record fields shared by create and update.
#[derive(Debug, clap::Args)]
pub struct RecordFields {
    /// Record type (A, AAAA, CNAME, MX, SRV, TXT, ...)
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub data: Option<String>,
    #[arg(long)]
    pub priority: Option<i64>,
    /// SRV port; 0 is a valid value and is sent explicitly
    #[arg(long)]
    pub port: Option<i64>,
    #[arg(long)]
    pub ttl: Option<i64>,
    #[arg(long)]
    pub weight: Option<i64>,
    #[arg(long)]
    pub flags: Option<i64>,
    #[arg(long)]
    pub tag: Option<String>,
}

impl From<RecordFields> for DomainRecordPatch {
    fn from(fields: RecordFields) -> Self {
        DomainRecordPatch {
            kind: fields.kind,
            name: fields.name,
            data: fields.data,
            priority: fields.priority,
            port: fields.port,
            ttl: fields.ttl,
            weight: fields.weight,
            flags: fields.flags,
            tag: fields.tag,
        }
    }
}

pub async fn run(ctx: &CmdContext, command: DomainCommand) -> Result<()> {
    let domains = DomainService::new(ctx.client.clone());
    match command {
        DomainCommand::List => {
            let list = domains.list().await?;
            ctx.display(&DomainDisplay { domains: list })
        }
        DomainCommand::Get { domain } => {
            let d = domains.get(&domain).await?;
            ctx.display(&DomainDisplay { domains: vec![d] })
        }
        DomainCommand::Create { domain, ip_address } => {
            let d = domains
                .create(&DomainCreateRequest {
                    name: domain,
                    ip_address,
                })
                .await?;
            ctx.display(&DomainDisplay { domains: vec![d] })
        }
        DomainCommand::Delete { domain } => domains.delete(&domain).await,
        DomainCommand::Records(record_command) => run_records(ctx, &domains, record_command).await,
    }
}

async fn run_records(
    ctx: &CmdContext,
    domains: &DomainService,
    command: RecordCommand,
) -> Result<()> {
    match command {
        RecordCommand::List { domain } => {
            let records = domains.records(&domain).await?;
            ctx.display(&DomainRecordDisplay { records })
        }
        RecordCommand::Get { domain, id } => {
            let record = domains.record(&domain, id).await?;
            ctx.display(&DomainRecordDisplay {
                records: vec![record],
            })
        }
        RecordCommand::Create { domain, fields } => {
            let record = domains.create_record(&domain, &fields.into()).await?;
            ctx.display(&DomainRecordDisplay {
                records: vec![record],
            })
        }
        RecordCommand::Update { domain, id, fields } => {
            let record = domains.edit_record(&domain, id, &fields.into()).await?;
            ctx.display(&DomainRecordDisplay {
                records: vec![record],
            })
        }
        RecordCommand::Delete { domain, id } => domains.delete_record(&domain, id).await,
    }
}
