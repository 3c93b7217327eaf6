/// Action service
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;

use crate::api::models::{Action, Links, Meta};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct ActionRoot {
    action: Action,
}

#[derive(Deserialize)]
struct ActionsRoot {
    actions: Vec<Action>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Access to provider-side asynchronous actions.
pub struct ActionService {
    client: ApiClient,
}

impl ActionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all actions across every page.
    pub async fn list(&self) -> Result<Vec<Action>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: ActionsRoot = self.client.get_query("actions", &opts).await?;
            Ok(Page {
                items: root.actions,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one action by id.
    pub async fn get(&self, id: i64) -> Result<Action> {
        Error::check_id("action id", id)?;
        let root: ActionRoot = self.client.get(&format!("actions/{}", id)).await?;
        Ok(root.action)
    }

    /// Poll an action until it reaches a terminal status.
    ///
    /// Returns the completed action, or an API error if the action itself
    /// failed. Gives up with [`Error::WaitTimeout`] after `timeout_secs`.
    pub async fn wait(&self, id: i64, timeout_secs: u64) -> Result<Action> {
        Error::check_id("action id", id)?;
        let start = Instant::now();

        loop {
            let action = self.get(id).await?;
            match action.status.as_str() {
                "completed" => return Ok(action),
                "errored" => return Err(Error::ActionFailed(action.id, action.kind)),
                status => {
                    if start.elapsed() > Duration::from_secs(timeout_secs) {
                        return Err(Error::WaitTimeout(timeout_secs, id));
                    }
                    debug!("action {} still {}", id, status);
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_rejects_bad_id_without_network() {
        // Unroutable base URL: a network attempt would surface as Transport.
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let actions = ActionService::new(client);
        assert!(matches!(
            actions.get(0).await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
