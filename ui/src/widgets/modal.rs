//! Overlay dialog for create/edit forms and confirmations.

use egui::{Id, RichText, Ui};
use sitedesk_business::ModalState;

/// What happened in the overlay this frame.
pub struct ModalResponse<R> {
    /// The user asked to dismiss: backdrop click, Escape or the × button.
    pub close_requested: bool,
    /// Return value of the content closure, `None` while closed.
    pub inner: Option<R>,
}

/// Shows `add_contents` in a centered modal while `state.open` is set.
///
/// The modal never closes itself; the caller decides what a close request
/// means and flips `state.open`.
pub fn modal<R>(
    ctx: &egui::Context,
    id_salt: impl std::hash::Hash,
    state: &ModalState,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> ModalResponse<R> {
    if !state.open {
        return ModalResponse {
            close_requested: false,
            inner: None,
        };
    }

    let mut close_clicked = false;
    let response = egui::Modal::new(Id::new(id_salt)).show(ctx, |ui| {
        ui.set_width(state.size.width());
        ui.horizontal(|ui| {
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(RichText::new("×").size(18.0))
                    .on_hover_text("Close")
                    .clicked()
                {
                    close_clicked = true;
                }
            });
        });
        ui.separator();
        ui.add_space(4.0);
        add_contents(ui)
    });

    ModalResponse {
        close_requested: close_clicked || response.should_close(),
        inner: Some(response.inner),
    }
}

/// Yes/no confirmation. Returns `Some(true)` on confirm, `Some(false)` on
/// cancel or dismissal, `None` while undecided.
pub fn confirm_dialog(
    ctx: &egui::Context,
    id_salt: impl std::hash::Hash,
    title: &str,
    message: &str,
    confirm_label: &str,
) -> Option<bool> {
    let state = ModalState {
        open: true,
        size: sitedesk_business::ModalSize::Small,
    };
    let response = modal(ctx, id_salt, &state, title, |ui| {
        ui.label(message);
        ui.add_space(12.0);
        let mut decision = None;
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                decision = Some(false);
            }
            let confirm = egui::Button::new(RichText::new(confirm_label).color(egui::Color32::WHITE))
                .fill(crate::utils::colors::COLOR_RED);
            if ui.add(confirm).clicked() {
                decision = Some(true);
            }
        });
        decision
    });

    if response.close_requested {
        return Some(false);
    }
    response.inner.flatten()
}
