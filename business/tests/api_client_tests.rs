//! ApiClient against a wiremock server: envelopes, errors and the bespoke
//! endpoints.

use sitedesk_business::api::{ApiClient, ListParams, ReorderItem, RequestError};
use sitedesk_business::entities::{Faq, Resource, Subscriber};
use sitedesk_business::BusinessConfig;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

async fn setup() -> (MockServer, ApiClient) {
    init_logger();
    let server = MockServer::start().await;
    let client = ApiClient::new(BusinessConfig::new(server.uri()));
    (server, client)
}

fn faq_json(id: i64, question: &str) -> serde_json::Value {
    json!({
        "id": id,
        "question": question,
        "answer": "Yes.",
        "category": "general",
        "display_order": id,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn get_all_sends_query_and_decodes_page() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/faqs"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [faq_json(1, "Open on Sundays?")],
            "pagination": { "total": 41, "limit": 20, "offset": 40 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .get_all::<Faq>(Faq::ENDPOINT, &ListParams::new().limit(20).offset(40))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].question, "Open on Sundays?");
    assert_eq!(page.total(), 41);
}

#[tokio::test]
async fn status_error_carries_server_message() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/faqs/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": "FAQ not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_by_id::<Faq>(Faq::ENDPOINT, 7).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "FAQ not found");
}

#[tokio::test]
async fn status_error_without_body_uses_status_text() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/faqs/7"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.delete(Faq::ENDPOINT, 7).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn success_false_is_rejected() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/faqs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Validation failed",
            "details": ["question is required"]
        })))
        .mount(&server)
        .await;

    let err = client
        .create::<Faq, _>(Faq::ENDPOINT, &json!({ "question": "" }))
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Rejected { ref message } if message == "Validation failed"));
}

#[tokio::test]
async fn empty_success_body_is_an_ack() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/faqs/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client.delete(Faq::ENDPOINT, 3).await.unwrap();
    assert!(ack.success);
}

#[tokio::test]
async fn unparsable_success_body_is_a_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn no_response_is_a_transport_error() {
    let (server, _) = setup().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::new(BusinessConfig::new(uri));
    let err = client.health().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn update_uses_put_with_the_full_body() {
    let (server, client) = setup().await;
    let body = json!({ "question": "Q", "answer": "A", "category": "", "display_order": 0, "is_active": false });
    Mock::given(method("PUT"))
        .and(path("/api/faqs/5"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": faq_json(5, "Q")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.update::<Faq, _>(Faq::ENDPOINT, 5, &body).await.unwrap();
    assert_eq!(response.data.map(|faq| faq.id), Some(5));
}

#[tokio::test]
async fn subscription_endpoints_patch() {
    let (server, client) = setup().await;
    Mock::given(method("PATCH"))
        .and(path("/api/subscribers/9/subscription"))
        .and(body_json(json!({ "subscribed": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/subscribers/subscription"))
        .and(body_json(json!({ "email": "ada@example.com", "subscribed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client.update_subscription_status(9, false).await.unwrap();
    client
        .update_subscription_by_email("ada@example.com", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn faq_search_encodes_the_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/faqs/search"))
        .and(query_param("q", "opening hours & prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [faq_json(2, "What are the opening hours & prices?")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = client.search_faqs("opening hours & prices").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);
}

#[tokio::test]
async fn project_listings() {
    let (server, client) = setup().await;
    let project = json!({
        "id": 4,
        "title": "Harbor",
        "description": "Pier renovation",
        "images": ["https://cdn.example.com/a.png"],
        "project_category_id": 2,
        "is_featured": true,
        "is_active": true
    });
    Mock::given(method("GET"))
        .and(path("/api/projects/featured"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [project.clone()] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projects/category/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [project] })),
        )
        .mount(&server)
        .await;

    let featured = client.featured_projects().await.unwrap();
    assert!(featured[0].is_featured);
    let by_category = client.projects_by_category(2).await.unwrap();
    assert_eq!(by_category[0].images, vec!["https://cdn.example.com/a.png"]);
}

#[tokio::test]
async fn settings_by_key_and_as_map() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/settings/object"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "site_name": "Winner", "contact_email": "hi@example.com" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/settings/key/site_name"))
        .and(body_json(json!({ "value": "Winner Ltd" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 1, "key": "site_name", "value": "Winner Ltd" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = client.settings_object().await.unwrap();
    assert_eq!(settings.get("site_name").map(String::as_str), Some("Winner"));

    let updated = client
        .update_setting_by_key("site_name", "Winner Ltd")
        .await
        .unwrap();
    assert_eq!(updated.data.map(|s| s.value).as_deref(), Some("Winner Ltd"));
}

#[tokio::test]
async fn privacy_sections_reorder() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/privacy-policy-sections/reorder"))
        .and(body_json(json!({
            "sections": [
                { "id": 3, "display_order": 1 },
                { "id": 1, "display_order": 2 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .reorder_privacy_sections(&[
            ReorderItem { id: 3, display_order: 1 },
            ReorderItem { id: 1, display_order: 2 },
        ])
        .await
        .unwrap();
}

#[tokio::test]
async fn count_reads_pagination_total() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/subscribers"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "pagination": { "total": 128, "limit": 1, "offset": 0 }
        })))
        .mount(&server)
        .await;

    assert_eq!(client.count(Subscriber::ENDPOINT).await.unwrap(), 128);
}

#[tokio::test]
async fn health_reports_uptime() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "status": "ok", "database": "connected", "uptime": 10_800.5 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health/detailed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "memory": { "rss": 1024 } }
        })))
        .mount(&server)
        .await;

    let health = client.health().await.unwrap().data.unwrap();
    assert_eq!(health.database.as_deref(), Some("connected"));
    assert_eq!(health.uptime_hours(), Some(3));

    let detailed = client.detailed_health().await.unwrap();
    assert_eq!(detailed.data.unwrap()["memory"]["rss"], 1024);
}
