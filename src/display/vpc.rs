use std::collections::HashMap;

use crate::api::models::Vpc;
use crate::display::Displayable;
use crate::error::Result;

pub struct VpcDisplay {
    pub vpcs: Vec<Vpc>,
}

impl Displayable for VpcDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Description",
            "IPRange",
            "Region",
            "Created",
            "Default",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Name", "Name"),
            ("Description", "Description"),
            ("IPRange", "IP Range"),
            ("Region", "Region"),
            ("Created", "Created At"),
            ("Default", "Default"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.vpcs
            .iter()
            .map(|v| {
                HashMap::from([
                    ("ID", v.id.to_string()),
                    ("Name", v.name.clone()),
                    ("Description", v.description.clone()),
                    ("IPRange", v.ip_range.clone()),
                    ("Region", v.region_slug.clone()),
                    ("Created", v.created_at.to_rfc3339()),
                    ("Default", v.default.to_string()),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.vpcs)?)
    }
}
