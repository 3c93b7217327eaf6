/// Load balancer commands
use clap::Subcommand;

use crate::api::models::ForwardingRule;
use crate::commands::CmdContext;
use crate::display::LoadBalancerDisplay;
use crate::error::{Error, Result};
use crate::services::load_balancers::LoadBalancerRequest;
use crate::services::LoadBalancerService;

#[derive(Debug, Subcommand)]
pub enum LoadBalancerCommand {
    /// List load balancers
    #[command(visible_alias = "ls")]
    List,
    /// Retrieve one load balancer
    #[command(visible_alias = "g")]
    Get { id: i64 },
    /// Create a load balancer
    Create {
        #[arg(long)]
        name: String,
        /// Region slug, e.g. syd
        #[arg(long)]
        region: String,
        /// Forwarding rule as entry_protocol:entry_port:target_protocol:target_port
        #[arg(long = "forwarding-rule", required = true)]
        forwarding_rules: Vec<String>,
        #[arg(long)]
        algorithm: Option<String>,
        /// Backend server ids
        #[arg(long)]
        server_ids: Vec<i64>,
        #[arg(long)]
        redirect_http_to_https: bool,
        #[arg(long)]
        vpc_id: Option<i64>,
    },
    /// Replace a load balancer's configuration
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long = "forwarding-rule", required = true)]
        forwarding_rules: Vec<String>,
        #[arg(long)]
        algorithm: Option<String>,
        #[arg(long)]
        server_ids: Vec<i64>,
        #[arg(long)]
        redirect_http_to_https: bool,
    },
    /// Permanently delete a load balancer
    #[command(visible_alias = "rm")]
    Delete { id: i64 },
    /// Attach backend servers
    AddServers {
        id: i64,
        #[arg(required = true)]
        server_ids: Vec<i64>,
    },
    /// Detach backend servers
    RemoveServers {
        id: i64,
        #[arg(required = true)]
        server_ids: Vec<i64>,
    },
    /// Add forwarding rules
    AddForwardingRules {
        id: i64,
        #[arg(required = true)]
        rules: Vec<String>,
    },
    /// Remove forwarding rules
    RemoveForwardingRules {
        id: i64,
        #[arg(required = true)]
        rules: Vec<String>,
    },
}

/// Parse `entry_protocol:entry_port:target_protocol:target_port` into a
/// forwarding rule.
fn parse_rule(spec: &str) -> Result<ForwardingRule> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        return Err(Error::InvalidArgument(format!(
            "forwarding rule must be entry_protocol:entry_port:target_protocol:target_port, got {:?}",
            spec
        )));
    }
    let entry_port = parts[1]
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("invalid entry port {:?}", parts[1])))?;
    let target_port = parts[3]
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("invalid target port {:?}", parts[3])))?;
    Ok(ForwardingRule {
        entry_protocol: parts[0].to_string(),
        entry_port,
        target_protocol: parts[2].to_string(),
        target_port,
        certificate_id: None,
        tls_passthrough: false,
    })
}

fn parse_rules(specs: &[String]) -> Result<Vec<ForwardingRule>> {
    specs.iter().map(|s| parse_rule(s)).collect()
}

pub async fn run(ctx: &CmdContext, command: LoadBalancerCommand) -> Result<()> {
    let lbs = LoadBalancerService::new(ctx.client.clone());
    match command {
        LoadBalancerCommand::List => {
            let list = lbs.list().await?;
            ctx.display(&LoadBalancerDisplay {
                load_balancers: list,
            })
        }
        LoadBalancerCommand::Get { id } => {
            let lb = lbs.get(id).await?;
            ctx.display(&LoadBalancerDisplay {
                load_balancers: vec![lb],
            })
        }
        LoadBalancerCommand::Create {
            name,
            region,
            forwarding_rules,
            algorithm,
            server_ids,
            redirect_http_to_https,
            vpc_id,
        } => {
            let request = LoadBalancerRequest {
                name,
                region_slug: Some(region),
                algorithm,
                forwarding_rules: parse_rules(&forwarding_rules)?,
                health_check: None,
                sticky_sessions: None,
                server_ids: (!server_ids.is_empty()).then_some(server_ids),
                redirect_http_to_https: redirect_http_to_https.then_some(true),
                vpc_id,
            };
            let lb = lbs.create(&request).await?;
            ctx.display(&LoadBalancerDisplay {
                load_balancers: vec![lb],
            })
        }
        LoadBalancerCommand::Update {
            id,
            name,
            forwarding_rules,
            algorithm,
            server_ids,
            redirect_http_to_https,
        } => {
            let request = LoadBalancerRequest {
                name,
                region_slug: None,
                algorithm,
                forwarding_rules: parse_rules(&forwarding_rules)?,
                health_check: None,
                sticky_sessions: None,
                server_ids: (!server_ids.is_empty()).then_some(server_ids),
                redirect_http_to_https: redirect_http_to_https.then_some(true),
                vpc_id: None,
            };
            let lb = lbs.update(id, &request).await?;
            ctx.display(&LoadBalancerDisplay {
                load_balancers: vec![lb],
            })
        }
        LoadBalancerCommand::Delete { id } => lbs.delete(id).await,
        LoadBalancerCommand::AddServers { id, server_ids } => {
            lbs.add_servers(id, &server_ids).await
        }
        LoadBalancerCommand::RemoveServers { id, server_ids } => {
            lbs.remove_servers(id, &server_ids).await
        }
        LoadBalancerCommand::AddForwardingRules { id, rules } => {
            lbs.add_forwarding_rules(id, &parse_rules(&rules)?).await
        }
        LoadBalancerCommand::RemoveForwardingRules { id, rules } => {
            lbs.remove_forwarding_rules(id, &parse_rules(&rules)?).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule() {
        let rule = parse_rule("https:443:http:80").unwrap();
        assert_eq!(rule.entry_protocol, "https");
        assert_eq!(rule.entry_port, 443);
        assert_eq!(rule.target_protocol, "http");
        assert_eq!(rule.target_port, 80);
    }

    #[test]
    fn test_parse_rule_rejects_malformed() {
        assert!(matches!(
            parse_rule("https:443"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_rule("https:four:http:80"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
