use std::collections::HashMap;

use crate::api::models::Region;
use crate::display::Displayable;
use crate::error::Result;

pub struct RegionDisplay {
    pub regions: Vec<Region>,
}

impl Displayable for RegionDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &["Slug", "Name", "Available"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("Slug", "Slug"),
            ("Name", "Name"),
            ("Available", "Available"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.regions
            .iter()
            .map(|r| {
                HashMap::from([
                    ("Slug", r.slug.clone()),
                    ("Name", r.name.clone()),
                    ("Available", r.available.to_string()),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.regions)?)
    }
}
