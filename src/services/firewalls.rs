/// Firewall service
use serde::{Deserialize, Serialize};

use crate::api::models::{Firewall, InboundRule, Links, Meta, OutboundRule};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct FirewallRoot {
    firewall: Firewall,
}

#[derive(Deserialize)]
struct FirewallsRoot {
    firewalls: Vec<Firewall>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Create/update payload for a firewall.
#[derive(Debug, Clone, Serialize)]
pub struct FirewallRequest {
    pub name: String,
    pub inbound_rules: Vec<InboundRule>,
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub server_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Rules payload for incremental rule changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FirewallRulesRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outbound_rules: Vec<OutboundRule>,
}

impl FirewallRulesRequest {
    pub fn is_empty(&self) -> bool {
        self.inbound_rules.is_empty() && self.outbound_rules.is_empty()
    }
}

#[derive(Serialize)]
struct ServerIdsBody {
    server_ids: Vec<i64>,
}

#[derive(Serialize)]
struct TagsBody {
    tags: Vec<String>,
}

/// Access to firewalls and their membership/rule sub-operations.
pub struct FirewallService {
    client: ApiClient,
}

impl FirewallService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all firewalls across every page.
    pub async fn list(&self) -> Result<Vec<Firewall>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: FirewallsRoot = self.client.get_query("firewalls", &opts).await?;
            Ok(Page {
                items: root.firewalls,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// List the firewalls applied to one server.
    pub async fn list_by_server(&self, server_id: i64) -> Result<Vec<Firewall>> {
        Error::check_id("server id", server_id)?;
        let path = format!("servers/{}/firewalls", server_id);
        pagination::fetch_all_pages(|opts| {
            let path = path.clone();
            async move {
                let root: FirewallsRoot = self.client.get_query(&path, &opts).await?;
                Ok(Page {
                    items: root.firewalls,
                    links: root.links,
                    meta: root.meta,
                })
            }
        })
        .await
    }

    /// Fetch one firewall by its string id.
    pub async fn get(&self, id: &str) -> Result<Firewall> {
        Error::check_name("firewall id", id)?;
        let root: FirewallRoot = self.client.get(&format!("firewalls/{}", id)).await?;
        Ok(root.firewall)
    }

    /// Create a firewall.
    pub async fn create(&self, request: &FirewallRequest) -> Result<Firewall> {
        Error::check_name("firewall name", &request.name)?;
        let root: FirewallRoot = self.client.post("firewalls", request).await?;
        Ok(root.firewall)
    }

    /// Replace a firewall's configuration.
    pub async fn update(&self, id: &str, request: &FirewallRequest) -> Result<Firewall> {
        Error::check_name("firewall id", id)?;
        Error::check_name("firewall name", &request.name)?;
        let root: FirewallRoot = self
            .client
            .put(&format!("firewalls/{}", id), request)
            .await?;
        Ok(root.firewall)
    }

    /// Delete a firewall.
    pub async fn delete(&self, id: &str) -> Result<()> {
        Error::check_name("firewall id", id)?;
        self.client.delete(&format!("firewalls/{}", id)).await
    }

    /// Apply the firewall to servers.
    pub async fn add_servers(&self, id: &str, server_ids: &[i64]) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_server_ids(server_ids)?;
        self.client
            .post_empty(
                &format!("firewalls/{}/servers", id),
                &ServerIdsBody {
                    server_ids: server_ids.to_vec(),
                },
            )
            .await
    }

    /// Remove the firewall from servers.
    pub async fn remove_servers(&self, id: &str, server_ids: &[i64]) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_server_ids(server_ids)?;
        self.client
            .delete_json(
                &format!("firewalls/{}/servers", id),
                &ServerIdsBody {
                    server_ids: server_ids.to_vec(),
                },
            )
            .await
    }

    /// Apply the firewall to all servers carrying the given tags.
    pub async fn add_tags(&self, id: &str, tags: &[String]) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_tags(tags)?;
        self.client
            .post_empty(
                &format!("firewalls/{}/tags", id),
                &TagsBody {
                    tags: tags.to_vec(),
                },
            )
            .await
    }

    /// Stop applying the firewall to servers carrying the given tags.
    pub async fn remove_tags(&self, id: &str, tags: &[String]) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_tags(tags)?;
        self.client
            .delete_json(
                &format!("firewalls/{}/tags", id),
                &TagsBody {
                    tags: tags.to_vec(),
                },
            )
            .await
    }

    /// Add rules to an existing firewall.
    pub async fn add_rules(&self, id: &str, rules: &FirewallRulesRequest) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_rules(rules)?;
        self.client
            .post_empty(&format!("firewalls/{}/rules", id), rules)
            .await
    }

    /// Remove rules from an existing firewall.
    pub async fn remove_rules(&self, id: &str, rules: &FirewallRulesRequest) -> Result<()> {
        Error::check_name("firewall id", id)?;
        Self::check_rules(rules)?;
        self.client
            .delete_json(&format!("firewalls/{}/rules", id), rules)
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

    fn check_tags(tags: &[String]) -> Result<()> {
        if tags.is_empty() {
            return Err(Error::InvalidArgument("at least one tag is required".into()));
        }
        for tag in tags {
            Error::check_name("tag", tag)?;
        }
        Ok(())
    }

    fn check_rules(rules: &FirewallRulesRequest) -> Result<()> {
        if rules.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one inbound or outbound rule is required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_before_network() {
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let firewalls = FirewallService::new(client);

        assert!(matches!(
            firewalls.get("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            firewalls.list_by_server(0).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            firewalls.add_rules("fw-1", &FirewallRulesRequest::default()).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            firewalls.add_tags("fw-1", &[]).await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
