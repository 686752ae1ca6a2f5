//! egui renderer for [`TableModel`].
//!
//! The widget only paints what [`TableModel::view`] produced and reports
//! clicks back; sorting, filtering and cell text are decided by the model.

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use serde::Serialize;
use sitedesk_business::table::{Cell, TableModel, TableState, TableView};

use crate::utils::colors::{COLOR_MUTED, tone_color, variant_fill};

const ROW_HEIGHT: f32 = 28.0;
const HEADER_HEIGHT: f32 = 24.0;

/// Interaction reported by [`data_table`] for one frame.
pub struct TableResponse<A> {
    /// Intent produced by the clicked row action, if any.
    pub action: Option<A>,
    /// New query when the model leaves filtering to the caller.
    pub search_changed: Option<String>,
}

pub fn data_table<T: Serialize, A>(
    ui: &mut Ui,
    id_salt: &str,
    model: &TableModel<T, A>,
    state: &mut TableState,
    data: &[T],
    loading: bool,
) -> TableResponse<A> {
    let mut response = TableResponse {
        action: None,
        search_changed: None,
    };

    if model.searchable {
        let mut query = state.query.clone();
        let edit = ui.add(
            egui::TextEdit::singleline(&mut query)
                .id_salt((id_salt, "search"))
                .hint_text(model.search_placeholder.as_str())
                .desired_width(320.0),
        );
        if edit.changed() {
            response.search_changed = model.set_query(state, query);
        }
        ui.add_space(8.0);
    }

    let mut header_clicked = None;
    match model.view(data, state, loading) {
        TableView::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.spinner();
                ui.label(RichText::new("Loading...").color(COLOR_MUTED));
                ui.add_space(24.0);
            });
        }
        TableView::Empty(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(message).color(COLOR_MUTED).italics());
                ui.add_space(24.0);
            });
        }
        TableView::Rows(rows) => {
            let mut builder = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for column in &model.columns {
                builder = builder.column(match column.width {
                    Some(width) => Column::initial(width).at_least(40.0),
                    None => Column::auto().at_least(60.0).clip(true),
                });
            }
            if !model.actions.is_empty() {
                builder = builder.column(Column::remainder().at_least(120.0));
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for (index, column) in model.columns.iter().enumerate() {
                        header.col(|ui| {
                            match model.sort_indicator(state, index) {
                                Some(marker) => {
                                    let caption = RichText::new(format!("{} {marker}", column.label)).strong();
                                    let active = state.sort.is_active(&column.key);
                                    if ui.selectable_label(active, caption).clicked() {
                                        header_clicked = Some(index);
                                    }
                                }
                                None => {
                                    ui.label(RichText::new(&column.label).strong());
                                }
                            }
                        });
                    }
                    if !model.actions.is_empty() {
                        header.col(|ui| {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(RichText::new("Actions").strong());
                            });
                        });
                    }
                })
                .body(|mut body| {
                    for row_view in &rows {
                        body.row(ROW_HEIGHT, |mut row| {
                            for cell in &row_view.cells {
                                row.col(|ui| {
                                    cell_label(ui, cell);
                                });
                            }
                            if !model.actions.is_empty() {
                                row.col(|ui| {
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            // right-to-left: paint in reverse to keep the declared order
                                            for &index in row_view.actions.iter().rev() {
                                                let action = &model.actions[index];
                                                let caption = RichText::new(action.caption()).small();
                                                let button = match variant_fill(action.variant) {
                                                    Some(fill) => egui::Button::new(
                                                        caption.color(Color32::WHITE),
                                                    )
                                                    .fill(fill),
                                                    None => egui::Button::new(caption),
                                                };
                                                if ui.add(button).clicked() {
                                                    response.action = Some(action.trigger(row_view.row));
                                                }
                                            }
                                        },
                                    );
                                });
                            }
                        });
                    }
                });
        }
    }

    if let Some(index) = header_clicked {
        model.click_header(state, index);
    }

    response
}

fn cell_label(ui: &mut Ui, cell: &Cell) {
    let text = RichText::new(&cell.text);
    let text = match tone_color(cell.tone) {
        Some(color) => text.color(color),
        None => text,
    };
    ui.add(egui::Label::new(text).truncate());
}
