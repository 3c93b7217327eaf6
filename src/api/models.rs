/// Strato Cloud API data models
///
/// Field names match the provider's snake_case wire schema so that JSON
/// output is a direct serialization of what the API returned.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Account details for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub uuid: String,
    pub status: String,
    pub server_limit: i64,
    pub floating_ip_limit: i64,
    pub email_verified: bool,
    #[serde(default)]
    pub status_message: Option<String>,
}

/// Account balance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub month_to_date_balance: String,
    pub account_balance: String,
    pub month_to_date_usage: String,
    pub generated_at: DateTime<Utc>,
}

/// Datacenter region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A server (virtual machine) resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: i64,
    pub name: String,
    pub memory: i64,
    pub vcpus: i64,
    pub disk: i64,
    pub status: String,
    pub region: Region,
    pub size_slug: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub vpc_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Operating system image attached to a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Server network addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    pub netmask: i64,
    pub gateway: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A DNS domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default)]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub zone_file: Option<String>,
}

/// A DNS record within a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub data: String,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub port: Option<i64>,
    #[serde(default)]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub flags: Option<i64>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// A Virtual Private Cloud network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vpc {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ip_range: String,
    #[serde(rename = "region")]
    pub region_slug: String,
    #[serde(default)]
    pub default: bool,
    pub created_at: DateTime<Utc>,
}

/// A load balancer resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ip: String,
    pub status: String,
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRule>,
    #[serde(default)]
    pub health_check: Option<HealthCheck>,
    #[serde(default)]
    pub sticky_sessions: Option<StickySessions>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub server_ids: Vec<i64>,
    #[serde(default)]
    pub redirect_http_to_https: bool,
    pub created_at: DateTime<Utc>,
}

/// One load balancer forwarding rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub entry_protocol: String,
    pub entry_port: i64,
    pub target_protocol: String,
    pub target_port: i64,
    #[serde(default)]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub tls_passthrough: bool,
}

/// Load balancer backend health check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub protocol: String,
    pub port: i64,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub check_interval_seconds: Option<i64>,
    #[serde(default)]
    pub response_timeout_seconds: Option<i64>,
    #[serde(default)]
    pub healthy_threshold: Option<i64>,
    #[serde(default)]
    pub unhealthy_threshold: Option<i64>,
}

/// Load balancer sticky-session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickySessions {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub cookie_name: Option<String>,
    #[serde(default)]
    pub cookie_ttl_seconds: Option<i64>,
}

/// A firewall resource. Firewall identifiers are strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firewall {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub inbound_rules: Vec<InboundRule>,
    #[serde(default)]
    pub outbound_rules: Vec<OutboundRule>,
    #[serde(default)]
    pub server_ids: Vec<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub pending_changes: Vec<PendingChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRule {
    pub protocol: String,
    #[serde(rename = "ports", default)]
    pub port_range: Option<String>,
    #[serde(default)]
    pub sources: Option<Sources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundRule {
    pub protocol: String,
    #[serde(rename = "ports", default)]
    pub port_range: Option<String>,
    #[serde(default)]
    pub destinations: Option<Destinations>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destinations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_balancer_ids: Vec<i64>,
}

/// Pending firewall change for a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingChange {
    pub server_id: i64,
    pub removing: bool,
    pub status: String,
}

/// A floating IP address, optionally assigned to a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingIp {
    pub ip: String,
    pub region: Region,
    #[serde(default)]
    pub server: Option<Server>,
}

/// An asynchronous provider-side action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: i64,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource_id: Option<i64>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub region_slug: Option<String>,
}

/// Pagination links returned on list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Option<Pages>,
}

/// Page URLs within a links block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Collection metadata returned on list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: Option<i64>,
}

impl Links {
    /// Page number of the "next" link, if one is present.
    ///
    /// The link is an absolute URL; the page number is carried in its
    /// `page` query parameter. A link that is present but cannot be parsed
    /// into a page number is [`Error::MalformedPageLink`], never "no next
    /// page": treating it as terminal would silently truncate the walk.
    pub fn next_page(&self) -> Result<Option<u64>> {
        let next = match self.pages.as_ref().and_then(|p| p.next.as_deref()) {
            Some(next) => next,
            None => return Ok(None),
        };
        let url =
            url::Url::parse(next).map_err(|_| Error::MalformedPageLink(next.to_string()))?;
        let page = url
            .query_pairs()
            .find(|(k, _)| k == "page")
            .ok_or_else(|| Error::MalformedPageLink(next.to_string()))?
            .1
            .parse()
            .map_err(|_| Error::MalformedPageLink(next.to_string()))?;
        Ok(Some(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_parsed_from_link() {
        let links = Links {
            pages: Some(Pages {
                next: Some("https://api.stratocloud.dev/v2/servers?page=3&per_page=25".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(links.next_page().unwrap(), Some(3));
    }

    #[test]
    fn test_next_page_absent_on_terminal_page() {
        assert_eq!(Links::default().next_page().unwrap(), None);

        let links = Links {
            pages: Some(Pages {
                prev: Some("https://api.stratocloud.dev/v2/servers?page=1".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(links.next_page().unwrap(), None);
    }

    #[test]
    fn test_unparsable_next_link_is_an_error() {
        let with_next = |next: &str| Links {
            pages: Some(Pages {
                next: Some(next.to_string()),
                ..Default::default()
            }),
        };

        // Not a URL at all, a URL with no page parameter, and a URL with a
        // non-numeric page: each must surface, not read as terminal.
        for next in [
            "::not a url::",
            "https://api.stratocloud.dev/v2/servers?per_page=25",
            "https://api.stratocloud.dev/v2/servers?page=last",
        ] {
            assert!(matches!(
                with_next(next).next_page(),
                Err(Error::MalformedPageLink(_))
            ));
        }
    }

    #[test]
    fn test_server_deserializes_wire_shape() {
        let body = serde_json::json!({
            "id": 42,
            "name": "web-01",
            "memory": 2048,
            "vcpus": 2,
            "disk": 50,
            "status": "active",
            "region": {"name": "Sydney", "slug": "syd", "available": true},
            "size_slug": "std-2vcpu",
            "networks": {"v4": [{"ip_address": "203.0.113.7", "netmask": "255.255.255.0", "gateway": "203.0.113.1", "type": "public"}]},
            "created_at": "2024-06-01T10:00:00Z"
        });
        let server: Server = serde_json::from_value(body).unwrap();
        assert_eq!(server.id, 42);
        assert_eq!(server.networks.v4[0].kind, "public");
        assert!(server.image.is_none());
    }
}
