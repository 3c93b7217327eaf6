/// Firewall commands
use clap::Subcommand;

use crate::api::models::{Destinations, InboundRule, OutboundRule, Sources};
use crate::commands::CmdContext;
use crate::display::FirewallDisplay;
use crate::error::{Error, Result};
use crate::services::firewalls::{FirewallRequest, FirewallRulesRequest};
use crate::services::FirewallService;

#[derive(Debug, Subcommand)]
pub enum FirewallCommand {
    /// List firewalls
    #[command(visible_alias = "ls")]
    List,
    /// List the firewalls applied to a server
    ListByServer { server_id: i64 },
    /// Retrieve one firewall
    #[command(visible_alias = "g")]
    Get { id: String },
    /// Create a firewall
    Create {
        #[arg(long)]
        name: String,
        /// Inbound rule as protocol:ports:address (address may repeat comma-separated)
        #[arg(long = "inbound-rule")]
        inbound_rules: Vec<String>,
        /// Outbound rule as protocol:ports:address
        #[arg(long = "outbound-rule")]
        outbound_rules: Vec<String>,
        /// Apply to these servers
        #[arg(long)]
        server_ids: Vec<i64>,
        /// Apply to servers carrying these tags
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Replace a firewall's configuration
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long = "inbound-rule")]
        inbound_rules: Vec<String>,
        #[arg(long = "outbound-rule")]
        outbound_rules: Vec<String>,
        #[arg(long)]
        server_ids: Vec<i64>,
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Permanently delete a firewall
    #[command(visible_alias = "rm")]
    Delete { id: String },
    /// Apply the firewall to servers
    AddServers {
        id: String,
        #[arg(required = true)]
        server_ids: Vec<i64>,
    },
    /// Remove the firewall from servers
    RemoveServers {
        id: String,
        #[arg(required = true)]
        server_ids: Vec<i64>,
    },
    /// Apply the firewall to servers carrying tags
    AddTags {
        id: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Stop applying the firewall to servers carrying tags
    RemoveTags {
        id: String,
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Add rules to a firewall
    AddRules {
        id: String,
        #[arg(long = "inbound-rule")]
        inbound_rules: Vec<String>,
        #[arg(long = "outbound-rule")]
        outbound_rules: Vec<String>,
    },
    /// Remove rules from a firewall
    RemoveRules {
        id: String,
        #[arg(long = "inbound-rule")]
        inbound_rules: Vec<String>,
        #[arg(long = "outbound-rule")]
        outbound_rules: Vec<String>,
    },
}

/// Parse `protocol:ports:addresses` into rule parts. Addresses are
/// comma-separated; ports may be a single port or a range like 8000-9000.
fn parse_rule_spec(spec: &str) -> Result<(String, Option<String>, Vec<String>)> {
    let parts: Vec<&str> = spec.splitn(3, ':').collect();
    if parts.is_empty() || parts[0].is_empty() {
        return Err(Error::InvalidArgument(format!(
            "firewall rule must be protocol:ports:addresses, got {:?}",
            spec
        )));
    }
    let protocol = parts[0].to_string();
    let ports = parts
        .get(1)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string());
    let addresses = parts
        .get(2)
        .map(|a| a.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    Ok((protocol, ports, addresses))
}

fn parse_inbound(specs: &[String]) -> Result<Vec<InboundRule>> {
    specs
        .iter()
        .map(|spec| {
            let (protocol, port_range, addresses) = parse_rule_spec(spec)?;
            Ok(InboundRule {
                protocol,
                port_range,
                sources: (!addresses.is_empty()).then_some(Sources {
                    addresses,
                    ..Default::default()
                }),
            })
        })
        .collect()
}

fn parse_outbound(specs: &[String]) -> Result<Vec<OutboundRule>> {
    specs
        .iter()
        .map(|spec| {
            let (protocol, port_range, addresses) = parse_rule_spec(spec)?;
            Ok(OutboundRule {
                protocol,
                port_range,
                destinations: (!addresses.is_empty()).then_some(Destinations {
                    addresses,
                    ..Default::default()
                }),
            })
        })
        .collect()
}

pub async fn run(ctx: &CmdContext, command: FirewallCommand) -> Result<()> {
    let firewalls = FirewallService::new(ctx.client.clone());
    match command {
        FirewallCommand::List => {
            let list = firewalls.list().await?;
            ctx.display(&FirewallDisplay { firewalls: list })
        }
        FirewallCommand::ListByServer { server_id } => {
            let list = firewalls.list_by_server(server_id).await?;
            ctx.display(&FirewallDisplay { firewalls: list })
        }
        FirewallCommand::Get { id } => {
            let fw = firewalls.get(&id).await?;
            ctx.display(&FirewallDisplay {
                firewalls: vec![fw],
            })
        }
        FirewallCommand::Create {
            name,
            inbound_rules,
            outbound_rules,
            server_ids,
            tag,
        } => {
            let request = FirewallRequest {
                name,
                inbound_rules: parse_inbound(&inbound_rules)?,
                outbound_rules: parse_outbound(&outbound_rules)?,
                server_ids,
                tags: tag,
            };
            let fw = firewalls.create(&request).await?;
            ctx.display(&FirewallDisplay {
                firewalls: vec![fw],
            })
        }
        FirewallCommand::Update {
            id,
            name,
            inbound_rules,
            outbound_rules,
            server_ids,
            tag,
        } => {
            let request = FirewallRequest {
                name,
                inbound_rules: parse_inbound(&inbound_rules)?,
                outbound_rules: parse_outbound(&outbound_rules)?,
                server_ids,
                tags: tag,
            };
            let fw = firewalls.update(&id, &request).await?;
            ctx.display(&FirewallDisplay {
                firewalls: vec![fw],
            })
        }
        FirewallCommand::Delete { id } => firewalls.delete(&id).await,
        FirewallCommand::AddServers { id, server_ids } => {
            firewalls.add_servers(&id, &server_ids).await
        }
        FirewallCommand::RemoveServers { id, server_ids } => {
            firewalls.remove_servers(&id, &server_ids).await
        }
        FirewallCommand::AddTags { id, tags } => firewalls.add_tags(&id, &tags).await,
        FirewallCommand::RemoveTags { id, tags } => firewalls.remove_tags(&id, &tags).await,
        FirewallCommand::AddRules {
            id,
            inbound_rules,
            outbound_rules,
        } => {
            let rules = FirewallRulesRequest {
                inbound_rules: parse_inbound(&inbound_rules)?,
                outbound_rules: parse_outbound(&outbound_rules)?,
            };
            firewalls.add_rules(&id, &rules).await
        }
        FirewallCommand::RemoveRules {
            id,
            inbound_rules,
            outbound_rules,
        } => {
            let rules = FirewallRulesRequest {
                inbound_rules: parse_inbound(&inbound_rules)?,
                outbound_rules: parse_outbound(&outbound_rules)?,
            };
            firewalls.remove_rules(&id, &rules).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inbound_rule() {
        let rules = parse_inbound(&["tcp:22:203.0.113.0/24,198.51.100.1".to_string()]).unwrap();
        assert_eq!(rules[0].protocol, "tcp");
        assert_eq!(rules[0].port_range.as_deref(), Some("22"));
        let sources = rules[0].sources.as_ref().unwrap();
        assert_eq!(sources.addresses.len(), 2);
    }

    #[test]
    fn test_parse_rule_without_addresses() {
        let rules = parse_outbound(&["icmp".to_string()]).unwrap();
        assert_eq!(rules[0].protocol, "icmp");
        assert!(rules[0].port_range.is_none());
        assert!(rules[0].destinations.is_none());
    }
}
