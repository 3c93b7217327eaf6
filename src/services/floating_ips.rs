/// Floating IP service
use serde::{Deserialize, Serialize};

use crate::api::models::{FloatingIp, Links, Meta};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct FloatingIpRoot {
    floating_ip: FloatingIp,
}

#[derive(Deserialize)]
struct FloatingIpsRoot {
    floating_ips: Vec<FloatingIp>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Request payload for creating a floating IP. When `server_id` is set the
/// new IP is assigned to that server immediately.
#[derive(Debug, Clone, Serialize)]
pub struct FloatingIpCreateRequest {
    #[serde(rename = "region")]
    pub region_slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<i64>,
}

/// Access to floating IP addresses.
pub struct FloatingIpService {
    client: ApiClient,
}

impl FloatingIpService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all floating IPs across every page.
    pub async fn list(&self) -> Result<Vec<FloatingIp>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: FloatingIpsRoot = self.client.get_query("floating_ips", &opts).await?;
            Ok(Page {
                items: root.floating_ips,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one floating IP by address.
    pub async fn get(&self, ip: &str) -> Result<FloatingIp> {
        Error::check_name("floating ip", ip)?;
        let root: FloatingIpRoot = self.client.get(&format!("floating_ips/{}", ip)).await?;
        Ok(root.floating_ip)
    }

    /// Create (and optionally assign) a floating IP.
    pub async fn create(&self, request: &FloatingIpCreateRequest) -> Result<FloatingIp> {
        Error::check_name("region", &request.region_slug)?;
        if let Some(server_id) = request.server_id {
            Error::check_id("server id", server_id)?;
        }
        let root: FloatingIpRoot = self.client.post("floating_ips", request).await?;
        Ok(root.floating_ip)
    }

    /// Release a floating IP.
    pub async fn delete(&self, ip: &str) -> Result<()> {
        Error::check_name("floating ip", ip)?;
        self.client.delete(&format!("floating_ips/{}", ip)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_before_network() {
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let fips = FloatingIpService::new(client);

        assert!(matches!(fips.get("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            fips.delete("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            fips.create(&FloatingIpCreateRequest {
                region_slug: "syd".into(),
                server_id: Some(0),
            })
            .await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_create_request_omits_unset_server() {
        let request = FloatingIpCreateRequest {
            region_slug: "syd".into(),
            server_id: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["region"], "syd");
    }
}
