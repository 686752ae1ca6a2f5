use egui::{Color32, RichText, Ui};
use sitedesk_business::entities::Setting;
use sitedesk_business::table::{ActionDescriptor, Cell, ColumnDescriptor, TableModel, Tone, Variant};
use sitedesk_business::{ApiClient, ModalSize, ModalState};

use super::crud::{Crud, RowIntent, delete_action, edit_action};
use super::{Screen, format_date};
use crate::utils::colors::COLOR_BLUE;
use crate::widgets::{Input, TextArea, modal};

#[derive(Debug, Clone)]
enum SettingIntent {
    Row(RowIntent<Setting>),
    QuickEdit(Setting),
}

impl From<RowIntent<Setting>> for SettingIntent {
    fn from(intent: RowIntent<Setting>) -> Self {
        SettingIntent::Row(intent)
    }
}

/// Value-only edit through `PUT /api/settings/key/{key}`.
#[derive(Debug, Clone)]
struct QuickEdit {
    key: String,
    value: String,
}

pub struct SettingsScreen {
    crud: Crud<Setting, SettingIntent>,
    quick: Option<QuickEdit>,
}

impl SettingsScreen {
    pub fn new(client: ApiClient) -> Self {
        let table = TableModel::new(vec![
            ColumnDescriptor::new("key", "Key")
                .sortable()
                .render(|_, row: &Setting| Cell::new(row.key.clone(), Tone::Accent)),
            ColumnDescriptor::new("value", "Value"),
            ColumnDescriptor::new("description", "Description"),
            ColumnDescriptor::new("updated_at", "Updated")
                .sortable()
                .render(|_, row: &Setting| Cell::muted(format_date(&row.updated_at))),
        ])
        .actions(vec![
            ActionDescriptor::new("Quick edit", |row: &Setting| SettingIntent::QuickEdit(row.clone()))
                .variant(Variant::Primary),
            edit_action(),
            delete_action(),
        ])
        .search_placeholder("Search settings...")
        .empty_message("No settings found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
            quick: None,
        }
    }

    fn quick_edit_modal(&mut self, ctx: &egui::Context) {
        let Some(quick) = &mut self.quick else {
            return;
        };
        let state = ModalState {
            open: true,
            size: ModalSize::Small,
        };
        let title = format!("Edit {}", quick.key);
        let response = modal(ctx, "setting_quick_edit", &state, &title, |ui| {
            ui.add(Input::new("Value", &mut quick.value).required());
            ui.add_space(12.0);
            let mut save = None;
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    save = Some(false);
                }
                let button = egui::Button::new(RichText::new("Save").color(Color32::WHITE)).fill(COLOR_BLUE);
                if ui
                    .add_enabled(!quick.value.trim().is_empty(), button)
                    .clicked()
                {
                    save = Some(true);
                }
            });
            save
        });

        match response.inner.flatten() {
            Some(true) => {
                if let Some(QuickEdit { key, value }) = self.quick.take() {
                    log::info!("Updating setting {key}");
                    self.crud.page.run(move |client| async move {
                        client.update_setting_by_key(&key, &value).await
                    });
                }
            }
            Some(false) => self.quick = None,
            None if response.close_requested => self.quick = None,
            None => {}
        }
    }
}

impl Screen for SettingsScreen {
    fn enter(&mut self) {
        self.crud.enter();
    }

    fn leave(&mut self) {
        self.quick = None;
        self.crud.leave();
    }

    fn poll(&mut self) -> bool {
        self.crud.poll()
    }

    fn is_busy(&self) -> bool {
        self.crud.is_busy()
    }

    fn ui(&mut self, ui: &mut Ui) {
        self.crud.toolbar(ui, |_| {});
        let output = self.crud.show(ui, |ui, draft, errors| {
            ui.add(
                Input::new("Key", &mut draft.key)
                    .required()
                    .hint("e.g. site_title")
                    .error(errors.get("key")),
            );
            ui.add(
                TextArea::new("Value", &mut draft.value)
                    .rows(3)
                    .required()
                    .error(errors.get("value")),
            );
            ui.add(Input::new("Description", &mut draft.description));
        });

        match output.action {
            Some(SettingIntent::Row(intent)) => intent.apply(&mut self.crud.page),
            Some(SettingIntent::QuickEdit(setting)) => {
                self.quick = Some(QuickEdit {
                    key: setting.key,
                    value: setting.value,
                });
            }
            None => {}
        }

        let ctx = ui.ctx().clone();
        self.quick_edit_modal(&ctx);
    }
}
