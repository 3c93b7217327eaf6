use std::collections::HashMap;

use crate::api::models::Server;
use crate::display::Displayable;
use crate::error::Result;

pub struct ServerDisplay {
    pub servers: Vec<Server>,
}

impl ServerDisplay {
    fn public_ip(server: &Server) -> String {
        server
            .networks
            .v4
            .iter()
            .find(|n| n.kind == "public")
            .map(|n| n.ip_address.clone())
            .unwrap_or_default()
    }

    fn private_ip(server: &Server) -> String {
        server
            .networks
            .v4
            .iter()
            .find(|n| n.kind == "private")
            .map(|n| n.ip_address.clone())
            .unwrap_or_default()
    }
}

impl Displayable for ServerDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "PublicIPv4",
            "PrivateIPv4",
            "Memory",
            "VCPUs",
            "Disk",
            "Region",
            "Image",
            "Status",
            "Tags",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("PublicIPv4", "Public IPv4"),
            ("PrivateIPv4", "Private IPv4"),
            ("Memory", "Memory"),
            ("VCPUs", "VCPUs"),
            ("Disk", "Disk"),
            ("Region", "Region"),
            ("Image", "Image"),
            ("Status", "Status"),
            ("Tags", "Tags"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.servers
            .iter()
            .map(|s| {
                let image = s
                    .image
                    .as_ref()
                    .map(|i| {
                        if i.distribution.is_empty() {
                            i.name.clone()
                        } else {
                            format!("{} {}", i.distribution, i.name)
                        }
                    })
                    .unwrap_or_default();
                HashMap::from([
                    ("ID", s.id.to_string()),
                    ("Name", s.name.clone()),
                    ("PublicIPv4", Self::public_ip(s)),
                    ("PrivateIPv4", Self::private_ip(s)),
                    ("Memory", s.memory.to_string()),
                    ("VCPUs", s.vcpus.to_string()),
                    ("Disk", s.disk.to_string()),
                    ("Region", s.region.slug.clone()),
                    ("Image", image),
                    ("Status", s.status.clone()),
                    ("Tags", s.tags.join(",")),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.servers)?)
    }
}
