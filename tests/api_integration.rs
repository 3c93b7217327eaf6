//! Integration tests for the API services against a mocked HTTP server
//!
//! Covers pagination across multiple pages, sparse update payloads, auth
//! headers, local validation short-circuiting, and API error mapping.

use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use strato::api::ApiClient;
use strato::error::Error;
use strato::services::domains::DomainRecordPatch;
use strato::services::{ActionService, DomainService, VpcService};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url("some-magic-token", &server.uri()).unwrap()
}

fn vpc(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "ip_range": "10.240.0.0/16",
        "region": "syd",
        "created_at": "2024-06-01T10:00:00Z"
    })
}

#[tokio::test]
async fn list_walks_all_pages_in_order() {
    let server = MockServer::start().await;

    // Page 1 returns [A, B] and points at page 2; page 2 returns [C] and is
    // terminal. The walk must issue exactly these two requests.
    Mock::given(method("GET"))
        .and(path("/v2/vpcs"))
        .and(query_param("page", "1"))
        .and(bearer_token("some-magic-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vpcs": [vpc(1, "alpha"), vpc(2, "beta")],
            "links": {"pages": {"next": format!("{}/v2/vpcs?page=2", server.uri())}},
            "meta": {"total": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/vpcs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vpcs": [vpc(3, "gamma")],
            "links": {},
            "meta": {"total": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vpcs = VpcService::new(client_for(&server));
    let list = vpcs.list().await.unwrap();

    let names: Vec<_> = list.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn sparse_record_update_sends_only_supplied_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/domains/example.com/records/5"))
        .and(body_json(json!({"name": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domain_record": {"id": 5, "type": "A", "name": "x", "data": "203.0.113.7"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let domains = DomainService::new(client_for(&server));
    let patch = DomainRecordPatch {
        name: Some("x".into()),
        ..Default::default()
    };
    let record = domains.edit_record("example.com", 5, &patch).await.unwrap();
    assert_eq!(record.name, "x");
}

#[tokio::test]
async fn explicit_zero_port_reaches_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/domains/example.com/records"))
        .and(body_json(json!({
            "type": "SRV",
            "name": "_sip._tcp",
            "data": "sip.example.com.",
            "port": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "domain_record": {
                "id": 9,
                "type": "SRV",
                "name": "_sip._tcp",
                "data": "sip.example.com.",
                "port": 0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let domains = DomainService::new(client_for(&server));
    let patch = DomainRecordPatch {
        kind: Some("SRV".into()),
        name: Some("_sip._tcp".into()),
        data: Some("sip.example.com.".into()),
        port: Some(0),
        ..Default::default()
    };
    let record = domains.create_record("example.com", &patch).await.unwrap();
    assert_eq!(record.port, Some(0));
}

#[tokio::test]
async fn validation_failures_issue_no_requests() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and the assertion below
    // would see a non-empty request log.

    let domains = DomainService::new(client_for(&server));
    assert!(matches!(
        domains.get("").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        domains.record("example.com", 0).await,
        Err(Error::InvalidArgument(_))
    ));

    let vpcs = VpcService::new(client_for(&server));
    assert!(matches!(vpcs.get(-1).await, Err(Error::InvalidArgument(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn structured_api_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/vpcs/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let vpcs = VpcService::new(client_for(&server));
    match vpcs.get(7).await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("could not be found"));
        }
        other => panic!("expected Api error, got {:?}", other.map(|v| v.id)),
    }
}

fn action(status: &str) -> serde_json::Value {
    json!({
        "action": {
            "id": 11,
            "status": status,
            "type": "power_on",
            "started_at": "2024-06-01T10:00:00Z"
        }
    })
}

#[tokio::test]
async fn wait_polls_until_the_action_completes() {
    let server = MockServer::start().await;

    // First poll sees the action still running; every later poll sees it
    // done.
    Mock::given(method("GET"))
        .and(path("/v2/actions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(action("in-progress")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/actions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(action("completed")))
        .mount(&server)
        .await;

    let actions = ActionService::new(client_for(&server));
    let done = actions.wait(11, 30).await.unwrap();

    assert_eq!(done.status, "completed");
    assert!(server.received_requests().await.unwrap().len() >= 2);
}

#[tokio::test]
async fn wait_surfaces_an_errored_action() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(action("errored")))
        .mount(&server)
        .await;

    let actions = ActionService::new(client_for(&server));
    assert!(matches!(
        actions.wait(11, 30).await,
        Err(Error::ActionFailed(11, kind)) if kind == "power_on"
    ));
}

#[tokio::test]
async fn wait_times_out_on_a_stuck_action() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(action("in-progress")))
        .mount(&server)
        .await;

    let actions = ActionService::new(client_for(&server));
    // A zero-second deadline expires on the first non-terminal poll.
    assert!(matches!(
        actions.wait(11, 0).await,
        Err(Error::WaitTimeout(0, 11))
    ));
}

#[tokio::test]
async fn pagination_failure_discards_partial_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/vpcs"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vpcs": [vpc(1, "alpha")],
            "links": {"pages": {"next": format!("{}/v2/vpcs?page=2", server.uri())}}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/vpcs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "id": "server_error",
            "message": "internal error"
        })))
        .mount(&server)
        .await;

    let vpcs = VpcService::new(client_for(&server));
    assert!(matches!(
        vpcs.list().await,
        Err(Error::Api { status: 500, .. })
    ));
}
