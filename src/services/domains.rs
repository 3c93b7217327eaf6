/// Domain and DNS record service
use serde::{Deserialize, Serialize};

use crate::api::models::{Domain, DomainRecord, Links, Meta};
use crate::api::pagination::{self, Page};
use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct DomainRoot {
    domain: Domain,
}

#[derive(Deserialize)]
struct DomainsRoot {
    domains: Vec<Domain>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Deserialize)]
struct DomainRecordRoot {
    domain_record: DomainRecord,
}

#[derive(Deserialize)]
struct DomainRecordsRoot {
    domain_records: Vec<DomainRecord>,
    #[serde(default)]
    links: Option<Links>,
    #[serde(default)]
    meta: Option<Meta>,
}

/// Request payload for creating a domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// Sparse create/edit payload for a DNS record.
///
/// Every field is optional and omitted from the wire payload when unset.
/// `port` in particular must distinguish "not set" (key absent) from an
/// explicit 0 (`"port":0`), since 0 is a legitimate SRV port value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainRecordPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Access to domains and their DNS records.
pub struct DomainService {
    client: ApiClient,
}

impl DomainService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all domains across every page.
    pub async fn list(&self) -> Result<Vec<Domain>> {
        pagination::fetch_all_pages(|opts| async move {
            let root: DomainsRoot = self.client.get_query("domains", &opts).await?;
            Ok(Page {
                items: root.domains,
                links: root.links,
                meta: root.meta,
            })
        })
        .await
    }

    /// Fetch one domain by name.
    pub async fn get(&self, name: &str) -> Result<Domain> {
        Error::check_name("domain", name)?;
        let root: DomainRoot = self.client.get(&format!("domains/{}", name)).await?;
        Ok(root.domain)
    }

    /// Create a domain.
    pub async fn create(&self, request: &DomainCreateRequest) -> Result<Domain> {
        Error::check_name("domain", &request.name)?;
        let root: DomainRoot = self.client.post("domains", request).await?;
        Ok(root.domain)
    }

    /// Delete a domain and all of its records.
    pub async fn delete(&self, name: &str) -> Result<()> {
        Error::check_name("domain", name)?;
        self.client.delete(&format!("domains/{}", name)).await
    }

    /// List all DNS records of a domain across every page.
    pub async fn records(&self, domain: &str) -> Result<Vec<DomainRecord>> {
        Error::check_name("domain", domain)?;
        let path = format!("domains/{}/records", domain);
        pagination::fetch_all_pages(|opts| {
            let path = path.clone();
            async move {
                let root: DomainRecordsRoot = self.client.get_query(&path, &opts).await?;
                Ok(Page {
                    items: root.domain_records,
                    links: root.links,
                    meta: root.meta,
                })
            }
        })
        .await
    }

    /// Fetch one DNS record by (domain, record id).
    pub async fn record(&self, domain: &str, id: i64) -> Result<DomainRecord> {
        Error::check_name("domain", domain)?;
        Error::check_id("record id", id)?;
        let root: DomainRecordRoot = self
            .client
            .get(&format!("domains/{}/records/{}", domain, id))
            .await?;
        Ok(root.domain_record)
    }

    /// Create a DNS record from a sparse payload.
    pub async fn create_record(
        &self,
        domain: &str,
        patch: &DomainRecordPatch,
    ) -> Result<DomainRecord> {
        Error::check_name("domain", domain)?;
        let root: DomainRecordRoot = self
            .client
            .post(&format!("domains/{}/records", domain), patch)
            .await?;
        Ok(root.domain_record)
    }

    /// Edit a DNS record. Only the fields present in the patch are sent.
    pub async fn edit_record(
        &self,
        domain: &str,
        id: i64,
        patch: &DomainRecordPatch,
    ) -> Result<DomainRecord> {
        Error::check_name("domain", domain)?;
        Error::check_id("record id", id)?;
        let root: DomainRecordRoot = self
            .client
            .put(&format!("domains/{}/records/{}", domain, id), patch)
            .await?;
        Ok(root.domain_record)
    }

    /// Delete a DNS record.
    pub async fn delete_record(&self, domain: &str, id: i64) -> Result<()> {
        Error::check_name("domain", domain)?;
        Error::check_id("record id", id)?;
        self.client
            .delete(&format!("domains/{}/records/{}", domain, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_omits_unset_port() {
        let patch = DomainRecordPatch {
            kind: Some("A".into()),
            name: Some("www".into()),
            data: Some("203.0.113.7".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("port"));
        assert!(!obj.contains_key("priority"));
        assert_eq!(obj["type"], "A");
        assert_eq!(obj["name"], "www");
    }

    #[test]
    fn test_patch_sends_explicit_zero_port() {
        let patch = DomainRecordPatch {
            port: Some(0),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value.as_object().unwrap()["port"], 0);
    }

    #[test]
    fn test_patch_with_only_name_serializes_one_key() {
        let patch = DomainRecordPatch {
            name: Some("x".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["name"], "x");
    }

    #[tokio::test]
    async fn test_record_validation_before_network() {
        let client = ApiClient::with_base_url("t", "http://192.0.2.1").unwrap();
        let domains = DomainService::new(client);

        assert!(matches!(
            domains.get("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            domains.record("example.com", 0).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            domains.record("", 7).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            domains.delete_record("example.com", -1).await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
