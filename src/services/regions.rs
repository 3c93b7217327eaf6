/// Region service
use serde::Deserialize;

use crate::api::models::{Links, Meta, Region};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::Result;

#[derive(Deserialize)]
struct RegionsRoot {
    regions: Vec<Region>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Read-only access to datacenter regions.
pub struct RegionService {
    client: ApiClient,
}

impl RegionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all regions across every page.
    pub async fn list(&self) -> Result<Vec<Region>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: RegionsRoot = self.client.get_query("regions", &opts).await?;
            Ok(Page {
                items: root.regions,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }
}
