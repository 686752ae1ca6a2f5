use egui::{RichText, Ui};
use sitedesk_business::{ApiClient, DashboardState};

use super::Screen;
use crate::utils::colors::{COLOR_MUTED, COLOR_RED};
use crate::widgets::health_summary;

pub struct DashboardScreen {
    pub state: DashboardState,
}

impl DashboardScreen {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: DashboardState::new(client),
        }
    }
}

fn stat_card(ui: &mut Ui, title: &str, value: Option<u64>, loading: bool) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).color(COLOR_MUTED));
                match value {
                    Some(value) => {
                        ui.heading(RichText::new(value.to_string()).strong());
                    }
                    None if loading => {
                        ui.spinner();
                    }
                    None => {
                        ui.heading("-");
                    }
                }
            });
        });
}

fn health_row(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).color(COLOR_MUTED));
    ui.label(value);
    ui.end_row();
}

impl Screen for DashboardScreen {
    fn enter(&mut self) {
        self.state.refresh();
    }

    fn leave(&mut self) {
        self.state.cancel();
    }

    fn poll(&mut self) -> bool {
        self.state.poll()
    }

    fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Welcome back! Here's what's happening with your company website.")
                    .color(COLOR_MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.state.loading, egui::Button::new("⟳ Refresh"))
                    .clicked()
                {
                    self.state.refresh();
                }
            });
        });
        ui.add_space(12.0);

        if let Some(error) = &self.state.last_error {
            ui.label(RichText::new(format!("⚠ {error}")).color(COLOR_RED));
            ui.add_space(8.0);
        }

        let stats = self.state.stats;
        let loading = self.state.loading;
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Total Subscribers", stats.map(|s| s.subscribers), loading);
            stat_card(ui, "Customer Reviews", stats.map(|s| s.reviews), loading);
            stat_card(ui, "Services", stats.map(|s| s.services), loading);
            stat_card(ui, "Projects", stats.map(|s| s.projects), loading);
        });

        ui.add_space(16.0);
        ui.heading("System Health");
        ui.add_space(4.0);
        let (caption, color) = health_summary(&self.state);
        ui.label(RichText::new(caption).color(color));
        if let Some(health) = &self.state.health {
            egui::Grid::new("dashboard_health")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    health_row(
                        ui,
                        "Database",
                        health.database.clone().unwrap_or_else(|| "-".to_owned()),
                    );
                    health_row(
                        ui,
                        "Uptime",
                        health
                            .uptime_hours()
                            .map_or_else(|| "-".to_owned(), |hours| format!("{hours}h")),
                    );
                    health_row(
                        ui,
                        "Environment",
                        health.environment.clone().unwrap_or_else(|| "-".to_owned()),
                    );
                });
        }

        if let Some(fetched) = self.state.last_fetch {
            ui.add_space(12.0);
            ui.small(
                RichText::new(format!("Last updated {}", fetched.format("%H:%M:%S UTC")))
                    .color(COLOR_MUTED),
            );
        }
    }
}
