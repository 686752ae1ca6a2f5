use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use sitedesk_ui::SitedeskApp;
use sitedesk_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = SitedeskApp> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, SitedeskApp> {
    /// App against a server that already answers the dashboard.
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;
        mount_dashboard(&mock_server, [12, 3, 5, 7]).await;
        Self::with_server(mock_server)
    }

    /// App against a server the test mounted itself.
    pub fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = SitedeskApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::vec2(1280.0, 900.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Steps the UI, letting spawned requests progress between frames, until
/// `done` holds. Returns whether it ever did.
pub async fn run_until<T: eframe::App>(
    harness: &mut Harness<'_, T>,
    mut done: impl FnMut(&Harness<'_, T>) -> bool,
) -> bool {
    for _ in 0..100 {
        harness.step();
        if done(harness) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

pub fn list_body(rows: Vec<Value>) -> Value {
    let total = rows.len();
    json!({
        "success": true,
        "data": rows,
        "pagination": { "total": total, "limit": 100, "offset": 0 }
    })
}

fn count_body(total: u64) -> Value {
    json!({
        "success": true,
        "data": [],
        "pagination": { "total": total, "limit": 1, "offset": 0 }
    })
}

/// Counts for subscribers, reviews, services and projects, plus a healthy
/// `/health`.
pub async fn mount_dashboard(server: &MockServer, totals: [u64; 4]) {
    let endpoints = [
        "/api/subscribers",
        "/api/customer-reviews",
        "/api/services",
        "/api/projects",
    ];
    for (endpoint, total) in endpoints.into_iter().zip(totals) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(count_body(total)))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "status": "OK",
                "database": "connected",
                "uptime": 7300.0,
                "environment": "production"
            }
        })))
        .mount(server)
        .await;
}

#[allow(unused)]
pub fn faq_json(id: i64, question: &str) -> Value {
    json!({
        "id": id,
        "question": question,
        "answer": "Answer",
        "category": "General",
        "display_order": id,
        "is_active": true,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z"
    })
}
