//! Unit and integration tests for the ProntoClient.

use super::*;
use crate::error::{ApiError, Error};
use crate::models::EnrichmentContact;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ProntoClient {
    ProntoClient::builder("test-api-key")
        .base_url(base_url)
        .build()
        .expect("failed to build client")
}

// Test: ProntoClient should store the API key for later use
#[test]
fn test_client_stores_api_key() {
    let client = ProntoClient::new("my-secret-key");
    assert_eq!(client.api_key(), "my-secret-key");
}

// Test: ProntoClient should implement Clone
#[test]
fn test_client_is_clone() {
    let client = ProntoClient::new("test-key");
    let _cloned = client.clone();
}

// Test: the API key must not leak through Debug output
#[test]
fn test_client_debug_redacts_api_key() {
    let client = ProntoClient::new("test-key");
    let debug_str = format!("{:?}", client);
    assert!(!debug_str.contains("test-key"), "API key should be redacted in debug output");
}

#[test]
fn test_builder_custom_base_url() {
    let client = test_client("https://staging.example.com/v1");
    assert_eq!(client.base_url(), "https://staging.example.com/v1");
}

#[test]
fn test_builder_trims_trailing_slash() {
    let client = test_client("https://staging.example.com/v1/");
    assert_eq!(client.base_url(), "https://staging.example.com/v1");
}

#[test]
fn test_builder_with_timeout_builds() {
    let client = ProntoClient::builder("key")
        .base_url("https://example.com")
        .timeout(std::time::Duration::from_secs(5))
        .build();
    assert!(client.is_ok());
}

// ============================================================================
// Endpoint tests (mocked HTTP)
// ============================================================================

#[tokio::test]
async fn test_get_searches_deserializes_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "s-1", "name": "CTOs Paris", "leads_count": 12},
            {"id": "s-2", "name": "CMOs Lyon", "leads_count": 7}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let searches = client.get_searches().await.expect("get_searches failed");

    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0].id, "s-1");
    assert_eq!(searches[1].leads_count, 7);
}

#[tokio::test]
async fn test_get_search_hits_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches/s-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "s-42",
            "name": "CTOs Paris",
            "leads_count": 1,
            "leads": [{"first_name": "Marie", "last_name": "Durand"}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let detail = client.get_search("s-42").await.expect("get_search failed");

    assert_eq!(detail.id, "s-42");
    assert_eq!(detail.leads.len(), 1);
    assert_eq!(detail.leads[0].full_name(), "Marie Durand");
}

#[tokio::test]
async fn test_get_search_leads_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches/s-1/leads"))
        .and(query_param("page", "3"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "leads": [{"first_name": "Paul", "last_name": "Martin"}],
            "page": 3,
            "limit": 50
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .get_search_leads("s-1", LeadsQuery { page: 3, limit: 50 })
        .await
        .expect("get_search_leads failed");

    assert_eq!(page.leads.len(), 1);
    assert_eq!(page.page, Some(3));
}

#[tokio::test]
async fn test_enrich_contacts_bulk_posts_expected_body() {
    let mock_server = MockServer::start().await;

    let request = BulkEnrichmentRequest::new(
        vec![EnrichmentContact::new("Marie", "Durand")],
        ["email"],
    );

    Mock::given(method("POST"))
        .and(path("/pronto/enrichments/contacts/bulk"))
        .and(body_json(serde_json::json!({
            "contacts": [{"first_name": "Marie", "last_name": "Durand"}],
            "enrichment_type": ["email"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 1,
            "enriched": 1,
            "failed": 0
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let summary = client
        .enrich_contacts_bulk(&request)
        .await
        .expect("enrich_contacts_bulk failed");

    assert_eq!(summary.total, 1);
    assert_eq!(summary.enriched, 1);
}

#[tokio::test]
async fn test_upload_file_posts_base64_content() {
    let mock_server = MockServer::start().await;

    let request = FileUploadRequest::from_bytes("export.csv", "text/csv", b"a,b\n1,2\n");

    Mock::given(method("POST"))
        .and(path("/file"))
        .and(body_json(serde_json::json!({
            "filename": "export.csv",
            "mimeType": "text/csv",
            "content": "YSxiCjEsMgo="
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "f-1",
            "filename": "export.csv"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let ack = client.upload_file(&request).await.expect("upload_file failed");

    assert_eq!(ack.id.as_deref(), Some("f-1"));
}

// ============================================================================
// Error mapping tests
// ============================================================================

#[tokio::test]
async fn test_401_maps_to_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let error = client.get_searches().await.unwrap_err();

    match error {
        Error::Api(ApiError::Auth { message }) => assert_eq!(message, "invalid api key"),
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let error = client.get_search("missing").await.unwrap_err();

    assert!(matches!(error, Error::Api(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn test_400_maps_to_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/file"))
        .respond_with(ResponseTemplate::new(400).set_body_string("filename required"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let request = FileUploadRequest::from_bytes("", "text/csv", b"");
    let error = client.upload_file(&request).await.unwrap_err();

    match error {
        Error::Api(ApiError::Validation { message, .. }) => {
            assert_eq!(message, "filename required");
        }
        other => panic!("expected Validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_500_maps_to_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let error = client.get_searches().await.unwrap_err();

    match error {
        Error::Api(ApiError::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Http error, got {:?}", other),
    }
}

// ============================================================================
// Retry tests
// ============================================================================

#[tokio::test]
async fn test_429_retries_then_succeeds() {
    let mock_server = MockServer::start().await;

    // First attempt is rate limited, second succeeds
    Mock::given(method("GET"))
        .and(path("/searches"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/searches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "s-1", "name": "CTOs Paris", "leads_count": 3}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let searches = client.get_searches().await.expect("retry should recover");

    assert_eq!(searches.len(), 1);
}

#[tokio::test]
async fn test_429_exhausts_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/searches"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let error = client.get_searches().await.unwrap_err();

    assert!(matches!(error, Error::Api(ApiError::RateLimit { .. })));
    assert!(error.is_retryable());
}
