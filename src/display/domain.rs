use std::collections::HashMap;

use crate::api::models::{Domain, DomainRecord};
use crate::display::{opt_string, Displayable};
use crate::error::Result;

pub struct DomainDisplay {
    pub domains: Vec<Domain>,
}

impl Displayable for DomainDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &["Domain", "TTL"]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([("Domain", "Domain"), ("TTL", "TTL")])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.domains
            .iter()
            .map(|d| {
                HashMap::from([
                    ("Domain", d.name.clone()),
                    ("TTL", opt_string(&d.ttl)),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.domains)?)
    }
}

pub struct DomainRecordDisplay {
    pub records: Vec<DomainRecord>,
}

impl Displayable for DomainRecordDisplay {
    fn cols(&self) -> &'static [&'static str] {
        &[
            "ID", "Type", "Name", "Data", "Priority", "Port", "TTL", "Weight",
        ]
    }

    fn col_map(&self) -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("ID", "ID"),
            ("Type", "Type"),
            ("Name", "Name"),
            ("Data", "Data"),
            ("Priority", "Priority"),
            ("Port", "Port"),
            ("TTL", "TTL"),
            ("Weight", "Weight"),
        ])
    }

    fn kv(&self) -> Vec<HashMap<&'static str, String>> {
        self.records
            .iter()
            .map(|r| {
                HashMap::from([
                    ("ID", r.id.to_string()),
                    ("Type", r.kind.clone()),
                    ("Name", r.name.clone()),
                    ("Data", r.data.clone()),
                    ("Priority", opt_string(&r.priority)),
                    ("Port", opt_string(&r.port)),
                    ("TTL", opt_string(&r.ttl)),
                    ("Weight", opt_string(&r.weight)),
                ])
            })
            .collect()
    }

    fn json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
