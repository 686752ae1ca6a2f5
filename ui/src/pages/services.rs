use egui::Ui;
use sitedesk_business::entities::Service;
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel, Tone};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

pub struct ServicesScreen {
    crud: Crud<Service, RowIntent<Service>>,
}

impl ServicesScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<Service, RowIntent<Service>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("icon", "Icon")
                .width(80.0)
                .render(|_, row: &Service| Cell::new(row.icon.clone(), Tone::Accent)),
            ColumnDescriptor::new("title", "Title").sortable(),
            ColumnDescriptor::new("description", "Description"),
            ColumnDescriptor::new("display_order", "Order").sortable().width(60.0),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &Service| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search services...")
        .empty_message("No services found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }
}

impl Screen for ServicesScreen {
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
                Input::new("Icon", &mut draft.icon)
                    .hint("e.g. code")
                    .helper("Icon name used by the public site"),
            );
            ui.add(
                Input::new("Title", &mut draft.title)
                    .required()
                    .error(errors.get("title")),
            );
            ui.add(TextArea::new("Description", &mut draft.description));
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}
