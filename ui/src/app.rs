use std::time::Duration;

use egui::{RichText, Ui};

use crate::pages::Route;
use crate::state::State;
use crate::utils::colors::COLOR_BLUE;
use crate::widgets;

/// Repaint cadence while requests are in flight; results arrive off-frame.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct SitedeskApp {
    state: State,
}

impl SitedeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

fn sidebar(state: &mut State, ui: &mut Ui) {
    ui.add_space(8.0);
    ui.heading(RichText::new("Company Dashboard").strong());
    ui.add_space(12.0);
    ui.separator();

    let mut target = None;
    for route in Route::ALL {
        let active = state.route == route;
        let caption = if active {
            RichText::new(route.label()).color(COLOR_BLUE).strong()
        } else {
            RichText::new(route.label())
        };
        if ui
            .add_sized([ui.available_width(), 28.0], egui::Button::selectable(active, caption))
            .clicked()
        {
            target = Some(route);
        }
    }
    if let Some(route) = target {
        state.navigate(route);
    }
}

impl eframe::App for SitedeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| sidebar(&mut self.state, ui));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.state.route.title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::api_health(ui, &self.state.dashboard.state);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let route = self.state.route;
                self.state.screen_mut(route).ui(ui);
            });
        });

        if self.state.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
