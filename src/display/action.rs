use std::collections::HashMap;

use crate::api::models::Action;
use crate::display::{opt_string, Displayable};
use crate::error::Result;

pub struct ActionDisplay {
    pub actions: Vec<Action>,
}

impl Displayable for ActionDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID",
            "Status",
            "Type",
            "StartedAt",
            "CompletedAt",
            "ResourceID",
            "ResourceType",
            "Region",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Status", "Status"),
            ("Type", "Type"),
            ("StartedAt", "Started At"),
            ("CompletedAt", "Completed At"),
            ("ResourceID", "Resource ID"),
            ("ResourceType", "Resource Type"),
            ("Region", "Region"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.actions
            .iter()
            .map(|a| {
                HashMap::from([
                    ("ID", a.id.to_string()),
                    ("Status", a.status.clone()),
                    ("Type", a.kind.clone()),
                    (
                        "StartedAt",
                        a.started_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                    ),
                    (
                        "CompletedAt",
                        a.completed_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                    ),
                    ("ResourceID", opt_string(&a.resource_id)),
                    ("ResourceType", opt_string(&a.resource_type)),
                    ("Region", opt_string(&a.region_slug)),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.actions)?)
    }
}
