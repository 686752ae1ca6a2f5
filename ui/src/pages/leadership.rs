use egui::Ui;
use sitedesk_business::entities::Leadership;
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel, Tone};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

pub struct LeadershipScreen {
    crud: Crud<Leadership, RowIntent<Leadership>>,
}

impl LeadershipScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<Leadership, RowIntent<Leadership>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("profile_image", "Photo")
                .width(60.0)
                .render(|_, row: &Leadership| match &row.profile_image {
                    Some(url) if !url.is_empty() => Cell::new("🖼", Tone::Accent),
                    _ => Cell::muted("-"),
                }),
            ColumnDescriptor::new("name", "Name").sortable(),
            ColumnDescriptor::new("position", "Position"),
            ColumnDescriptor::new("bio", "Bio"),
            ColumnDescriptor::new("display_order", "Order").sortable().width(60.0),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &Leadership| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search leadership...")
        .empty_message("No leadership members found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }
}

impl Screen for LeadershipScreen {
    fn enter(&mut self) {
        self.crud.enter();
    }

    fn leave(&mut self) {
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
                Input::new("Name", &mut draft.name)
                    .required()
                    .error(errors.get("name")),
            );
            ui.add(
                Input::new("Position", &mut draft.position)
                    .required()
                    .hint("e.g. Chief Executive Officer")
                    .error(errors.get("position")),
            );
            ui.add(TextArea::new("Bio", &mut draft.bio));
            ui.add(Input::new("Profile Image URL", &mut draft.profile_image).hint("https://..."));
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}
