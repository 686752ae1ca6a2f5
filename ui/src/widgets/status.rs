use egui::{Color32, Response, Ui};
use sitedesk_business::DashboardState;

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle(rect.center(), STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);

    response.on_hover_text(tooltip_text)
}

/// Caption and color for the API health as last reported.
pub fn health_summary(dashboard: &DashboardState) -> (String, Color32) {
    match (&dashboard.health, &dashboard.health_error) {
        (Some(health), _) => {
            let status = health.status.as_deref().unwrap_or("unknown");
            let color = if status.eq_ignore_ascii_case("ok") || status.eq_ignore_ascii_case("healthy") {
                COLOR_GREEN
            } else {
                COLOR_AMBER
            };
            (format!("API: {status}"), color)
        }
        (None, Some(error)) => (format!("API: {error}"), COLOR_RED),
        (None, None) => ("API: checking".to_owned(), COLOR_AMBER),
    }
}

/// Health dot with the status as tooltip, plus the short caption.
pub fn api_health(ui: &mut Ui, dashboard: &DashboardState) -> Response {
    let (caption, color) = health_summary(dashboard);
    ui.horizontal(|ui| {
        let response = status_dot(ui, caption.clone(), color);
        ui.small(caption);
        response
    })
    .inner
}
