use std::collections::HashMap;

use crate::api::models::FloatingIp;
use crate::display::Displayable;
use crate::error::Result;

pub struct FloatingIpDisplay {
    pub floating_ips: Vec<FloatingIp>,
}

impl Displayable for FloatingIpDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &["IP", "Region", "ServerID", "ServerName"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("IP", "IP"),
            ("Region", "Region"),
            ("ServerID", "Server ID"),
            ("ServerName", "Server Name"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.floating_ips
            .iter()
            .map(|f| {
                // An unassigned floating IP has no server; render empty cells.
                let (server_id, server_name) = match &f.server {
                    Some(s) => (s.id.to_string(), s.name.clone()),
                    None => (String::new(), String::new()),
                };
                HashMap::from([
                    ("IP", f.ip.clone()),
                    ("Region", f.region.slug.clone()),
                    ("ServerID", server_id),
                    ("ServerName", server_name),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.floating_ips)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Region;

    #[test]
    fn test_unassigned_ip_renders_empty_server_cells() {
        let display = FloatingIpDisplay {
            floating_ips: vec![FloatingIp {
                ip: "203.0.113.9".into(),
                region: Region {
                    name: "Sydney".into(),
                    slug: "syd".into(),
                    sizes: vec![],
                    available: true,
                    features: vec![],
                },
                server: None,
            }],
        };
        let rows = display.kv();
        assert_eq!(rows[0]["ServerID"], "");
        assert_eq!(rows[0]["ServerName"], "");
        assert_eq!(rows[0]["IP"], "203.0.113.9");
    }
}
