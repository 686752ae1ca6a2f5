use egui::Ui;
use sitedesk_business::entities::ProjectCategory;
use sitedesk_business::table::{ColumnDescriptor, TableModel};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

pub struct ProjectCategoriesScreen {
    crud: Crud<ProjectCategory, RowIntent<ProjectCategory>>,
}

impl ProjectCategoriesScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<ProjectCategory, RowIntent<ProjectCategory>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("name", "Name").sortable(),
            ColumnDescriptor::new("description", "Description"),
            ColumnDescriptor::new("display_order", "Order").sortable().width(60.0),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &ProjectCategory| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search categories...")
        .empty_message("No categories found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }
}

impl Screen for ProjectCategoriesScreen {
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
            ui.add(TextArea::new("Description", &mut draft.description).rows(3));
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}
