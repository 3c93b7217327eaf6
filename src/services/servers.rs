/// Server service
use serde::{Deserialize, Serialize};

use crate::api::models::{Action, Links, Meta, Server};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct ServerRoot {
    server: Server,
}

#[derive(Deserialize)]
struct ServersRoot {
    servers: Vec<Server>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Deserialize)]
struct ActionRoot {
    action: Action,
}

/// Request payload for creating a server.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCreateRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ServerActionBody {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Access to servers and their lifecycle actions.
pub struct ServerService {
    client: ApiClient,
}

impl ServerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all servers across every page.
    pub async fn list(&self) -> Result<Vec<Server>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: ServersRoot = self.client.get_query("servers", &opts).await?;
            Ok(Page {
                items: root.servers,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one server by id.
    pub async fn get(&self, id: i64) -> Result<Server> {
        Error::check_id("server id", id)?;
        let root: ServerRoot = self.client.get(&format!("servers/{}", id)).await?;
        Ok(root.server)
    }

    /// Create a server.
    pub async fn create(&self, request: &ServerCreateRequest) -> Result<Server> {
        Error::check_name("server name", &request.name)?;
        Error::check_name("region", &request.region)?;
        Error::check_name("size", &request.size)?;
        Error::check_name("image", &request.image)?;
        let root: ServerRoot = self.client.post("servers", request).await?;
        Ok(root.server)
    }

    /// Destroy a server.
    pub async fn delete(&self, id: i64) -> Result<()> {
        Error::check_id("server id", id)?;
        self.client.delete(&format!("servers/{}", id)).await
    }

    /// Reboot a server. Returns the provider-side action tracking it.
    pub async fn reboot(&self, id: i64) -> Result<Action> {
        self.action(id, "reboot").await
    }

    /// Power a server off.
    pub async fn power_off(&self, id: i64) -> Result<Action> {
        self.action(id, "power_off").await
    }

    /// Power a server on.
    pub async fn power_on(&self, id: i64) -> Result<Action> {
        self.action(id, "power_on").await
    }

    async fn action(&self, id: i64, kind: &'static str) -> Result<Action> {
        Error::check_id("server id", id)?;
        let root: ActionRoot = self
            .client
            .post(
                &format!("servers/{}/actions", id),
                &ServerActionBody { kind },
            )
            .await?;
        Ok(root.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_before_network() {
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let servers = ServerService::new(client);

        assert!(matches!(
            servers.get(0).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            servers.reboot(-5).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            servers
                .create(&ServerCreateRequest {
                    name: "".into(),
                    region: "syd".into(),
                    size: "std-2vcpu".into(),
                    image: "ubuntu-24-04".into(),
                    ssh_keys: None,
                    backups: None,
                    user_data: None,
                    vpc_id: None,
                    tags: None,
                })
                .await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = ServerCreateRequest {
            name: "web-01".into(),
            region: "syd".into(),
            size: "std-2vcpu".into(),
            image: "ubuntu-24-04".into(),
            ssh_keys: None,
            backups: None,
            user_data: None,
            vpc_id: None,
            tags: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("backups"));
    }
}
