use std::collections::HashMap;

use crate::api::models::LoadBalancer;
use crate::display::Displayable;
use crate::error::Result;

pub struct LoadBalancerDisplay {
    pub load_balancers: Vec<LoadBalancer>,
}

impl Displayable for LoadBalancerDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID",
            "IP",
            "Name",
            "Status",
            "Created",
            "Region",
            "ServerIDs",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("IP", "IP"),
            ("Name", "Name"),
            ("Status", "Status"),
            ("Created", "Created At"),
            ("Region", "Region"),
            ("ServerIDs", "Server IDs"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.load_balancers
            .iter()
            .map(|lb| {
                let region = lb
                    .region
                    .as_ref()
                    .map(|r| r.slug.clone())
                    .unwrap_or_default();
                let server_ids = lb
                    .server_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                HashMap::from([
                    ("ID", lb.id.to_string()),
                    ("IP", lb.ip.clone()),
                    ("Name", lb.name.clone()),
                    ("Status", lb.status.clone()),
                    ("Created", lb.created_at.to_rfc3339()),
                    ("Region", region),
                    ("ServerIDs", server_ids),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.load_balancers)?)
    }
}
