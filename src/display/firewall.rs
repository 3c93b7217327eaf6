use std::collections::HashMap;

use crate::api::models::{Firewall, InboundRule, OutboundRule};
use crate::display::Displayable;
use crate::error::Result;

pub struct FirewallDisplay {
    pub firewalls: Vec<Firewall>,
}

fn inbound_summary(rules: &[InboundRule]) -> String {
    rules
        .iter()
        .map(|r| match &r.port_range {
            Some(ports) => format!("{}:{}", r.protocol, ports),
            None => r.protocol.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn outbound_summary(rules: &[OutboundRule]) -> String {
    rules
        .iter()
        .map(|r| match &r.port_range {
            Some(ports) => format!("{}:{}", r.protocol, ports),
            None => r.protocol.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Displayable for FirewallDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Status",
            "Created",
            "InboundRules",
            "OutboundRules",
            "ServerIDs",
            "Tags",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("Status", "Status"),
            ("Created", "Created At"),
            ("InboundRules", "Inbound Rules"),
            ("OutboundRules", "Outbound Rules"),
            ("ServerIDs", "Server IDs"),
            ("Tags", "Tags"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.firewalls
            .iter()
            .map(|fw| {
                let server_ids = fw
                    .server_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                HashMap::from([
                    ("ID", fw.id.clone()),
                    ("Name", fw.name.clone()),
                    ("Status", fw.status.clone()),
                    ("Created", fw.created_at.to_rfc3339()),
                    ("InboundRules", inbound_summary(&fw.inbound_rules)),
                    ("OutboundRules", outbound_summary(&fw.outbound_rules)),
                    ("ServerIDs", server_ids),
                    ("Tags", fw.tags.join(",")),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.firewalls)?)
    }
}
