/// VPC service
use serde::{Deserialize, Serialize};

use crate::api::models::{Links, Meta, Vpc};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct VpcRoot {
    vpc: Vpc,
}

#[derive(Deserialize)]
struct VpcsRoot {
    vpcs: Vec<Vpc>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Request payload for creating a VPC.
#[derive(Debug, Clone, Serialize)]
pub struct VpcCreateRequest {
    pub name: String,
    #[serde(rename = "region")]
    pub region_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
}

/// Full-replacement update payload for a VPC.
#[derive(Debug, Clone, Serialize)]
pub struct VpcUpdateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Sparse field patch for [`VpcService::set`]. Only the fields supplied by
/// the caller appear in the serialized payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VpcPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<bool>,
}

impl VpcPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this VPC as the default one for its region.
    pub fn default_vpc(mut self) -> Self {
        self.default = Some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.default.is_none()
    }
}

/// Access to Virtual Private Cloud configurations.
pub struct VpcService {
    client: ApiClient,
}

impl VpcService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all VPCs across every page.
    pub async fn list(&self) -> Result<Vec<Vpc>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: VpcsRoot = self.client.get_query("vpcs", &opts).await?;
            Ok(Page {
                items: root.vpcs,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one VPC by id.
    pub async fn get(&self, id: i64) -> Result<Vpc> {
        Error::check_id("vpc id", id)?;
        let root: VpcRoot = self.client.get(&format!("vpcs/{}", id)).await?;
        Ok(root.vpc)
    }

    /// Create a VPC.
    pub async fn create(&self, request: &VpcCreateRequest) -> Result<Vpc> {
        Error::check_name("vpc name", &request.name)?;
        let root: VpcRoot = self.client.post("vpcs", request).await?;
        Ok(root.vpc)
    }

    /// Replace a VPC's mutable configuration.
    pub async fn update(&self, id: i64, request: &VpcUpdateRequest) -> Result<Vpc> {
        Error::check_id("vpc id", id)?;
        Error::check_name("vpc name", &request.name)?;
        let root: VpcRoot = self.client.put(&format!("vpcs/{}", id), request).await?;
        Ok(root.vpc)
    }

    /// Patch individual VPC fields, leaving the rest untouched.
    pub async fn set(&self, id: i64, patch: &VpcPatch) -> Result<Vpc> {
        Error::check_id("vpc id", id)?;
        if patch.is_empty() {
            return Err(Error::InvalidArgument(
                "vpc patch must set at least one field".into(),
            ));
        }
        let root: VpcRoot = self.client.patch(&format!("vpcs/{}", id), patch).await?;
        Ok(root.vpc)
    }

    /// Delete a VPC.
    pub async fn delete(&self, id: i64) -> Result<()> {
        Error::check_id("vpc id", id)?;
        self.client.delete(&format!("vpcs/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_supplied_fields() {
        let patch = VpcPatch::new().name("internal");
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["name"], "internal");

        let patch = VpcPatch::new().description("").default_vpc();
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        // An explicit empty description is still sent.
        assert_eq!(obj["description"], "");
        assert_eq!(obj["default"], true);
        assert!(!obj.contains_key("name"));
    }

    #[tokio::test]
    async fn test_validation_before_network() {
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let vpcs = VpcService::new(client);

        assert!(matches!(vpcs.get(0).await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            vpcs.delete(-1).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            vpcs.set(3, &VpcPatch::new()).await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
