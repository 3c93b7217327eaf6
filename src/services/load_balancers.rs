/// Load balancer service
use serde::{Deserialize, Serialize};

use crate::api::models::{
    ForwardingRule, HealthCheck, Links, LoadBalancer, Meta, StickySessions,
};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct LoadBalancerRoot {
    load_balancer: LoadBalancer,
}

#[derive(Deserialize)]
struct LoadBalancersRoot {
    load_balancers: Vec<LoadBalancer>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Create/update payload for a load balancer.
#[derive(Debug, Clone, Serialize)]
pub struct LoadBalancerRequest {
    pub name: String,
    #[serde(rename = "region", skip_serializing_if = "Option::is_none")]
    pub region_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    pub forwarding_rules: Vec<ForwardingRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky_sessions: Option<StickySessions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_http_to_https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<i64>,
}

#[derive(Serialize)]
struct ServerIdsBody {
    server_ids: Vec<i64>,
}

#[derive(Serialize)]
struct ForwardingRulesBody {
    forwarding_rules: Vec<ForwardingRule>,
}

/// Access to load balancers, their backends, and forwarding rules.
pub struct LoadBalancerService {
    client: ApiClient,
}

impl LoadBalancerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all load balancers across every page.
    pub async fn list(&self) -> Result<Vec<LoadBalancer>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: LoadBalancersRoot = self.client.get_query("load_balancers", &opts).await?;
            Ok(Page {
                items: root.load_balancers,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one load balancer by id.
    pub async fn get(&self, id: i64) -> Result<LoadBalancer> {
        Error::check_id("load balancer id", id)?;
        let root: LoadBalancerRoot = self.client.get(&format!("load_balancers/{}", id)).await?;
        Ok(root.load_balancer)
    }

    /// Create a load balancer.
    pub async fn create(&self, request: &LoadBalancerRequest) -> Result<LoadBalancer> {
        Error::check_name("load balancer name", &request.name)?;
        let root: LoadBalancerRoot = self.client.post("load_balancers", request).await?;
        Ok(root.load_balancer)
    }

    /// Replace a load balancer's configuration.
    pub async fn update(&self, id: i64, request: &LoadBalancerRequest) -> Result<LoadBalancer> {
        Error::check_id("load balancer id", id)?;
        Error::check_name("load balancer name", &request.name)?;
        let root: LoadBalancerRoot = self
            .client
            .put(&format!("load_balancers/{}", id), request)
            .await?;
        Ok(root.load_balancer)
    }

    /// Delete a load balancer.
    pub async fn delete(&self, id: i64) -> Result<()> {
        Error::check_id("load balancer id", id)?;
        self.client.delete(&format!("load_balancers/{}", id)).await
    }

    /// Attach backend servers.
    pub async fn add_servers(&self, id: i64, server_ids: &[i64]) -> Result<()> {
        Error::check_id("load balancer id", id)?;
        Self::check_server_ids(server_ids)?;
        self.client
            .post_empty(
                &format!("load_balancers/{}/servers", id),
                &ServerIdsBody {
                    server_ids: server_ids.to_vec(),
                },
            )
            .await
    }

    /// Detach backend servers.
    pub async fn remove_servers(&self, id: i64, server_ids: &[i64]) -> Result<()> {
        Error::check_id("load balancer id", id)?;
        Self::check_server_ids(server_ids)?;
        self.client
            .delete_json(
                &format!("load_balancers/{}/servers", id),
                &ServerIdsBody {
                    server_ids: server_ids.to_vec(),
                },
            )
            .await
    }

    /// Add forwarding rules.
    pub async fn add_forwarding_rules(&self, id: i64, rules: &[ForwardingRule]) -> Result<()> {
        Error::check_id("load balancer id", id)?;
        Self::check_rules(rules)?;
        self.client
            .post_empty(
                &format!("load_balancers/{}/forwarding_rules", id),
                &ForwardingRulesBody {
                    forwarding_rules: rules.to_vec(),
                },
            )
            .await
    }

    /// Remove forwarding rules.
    pub async fn remove_forwarding_rules(&self, id: i64, rules: &[ForwardingRule]) -> Result<()> {
        Error::check_id("load balancer id", id)?;
        Self::check_rules(rules)?;
        self.client
            .delete_json(
                &format!("load_balancers/{}/forwarding_rules", id),
                &ForwardingRulesBody {
                    forwarding_rules: rules.to_vec(),
                },
            )
            .await
    }

    fn check_server_ids(server_ids: &[i64]) -> Result<()> {
        if server_ids.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one server id is required".into(),
            ));
        }
        for &id in server_ids {
            Error::check_id("server id", id)?;
        }
        Ok(())
    }

    fn check_rules(rules: &[ForwardingRule]) -> Result<()> {
        if rules.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one forwarding rule is required".into(),
            ));
        }
        Ok(())
    }
}
