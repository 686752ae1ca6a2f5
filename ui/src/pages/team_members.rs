use egui::Ui;
use sitedesk_business::entities::TeamMember;
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel, Tone};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

/// Short link caption when the URL is present.
fn link_cell(url: Option<&String>, caption: &str) -> Cell {
    match url {
        Some(url) if !url.is_empty() => Cell::new(caption, Tone::Accent),
        _ => Cell::muted("-"),
    }
}

pub struct TeamMembersScreen {
    crud: Crud<TeamMember, RowIntent<TeamMember>>,
}

impl TeamMembersScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<TeamMember, RowIntent<TeamMember>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("profile_image", "Photo")
                .width(60.0)
                .render(|_, row: &TeamMember| link_cell(row.profile_image.as_ref(), "🖼")),
            ColumnDescriptor::new("name", "Name").sortable(),
            ColumnDescriptor::new("position", "Position"),
            ColumnDescriptor::new("email", "Email"),
            ColumnDescriptor::new("linkedin", "LinkedIn")
                .render(|_, row: &TeamMember| link_cell(row.linkedin.as_ref(), "Profile")),
            ColumnDescriptor::new("github", "GitHub")
                .render(|_, row: &TeamMember| link_cell(row.github.as_ref(), "Repo")),
            ColumnDescriptor::new("display_order", "Order").sortable().width(60.0),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &TeamMember| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search team members...")
        .empty_message("No team members found");

        Self {
            crud: Crud::new(client, table, ModalSize::Large),
        }
    }
}

impl Screen for TeamMembersScreen {
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
            ui.columns(2, |columns| {
                columns[0].add(
                    Input::new("Name", &mut draft.name)
                        .required()
                        .error(errors.get("name")),
                );
                columns[1].add(
                    Input::new("Position", &mut draft.position)
                        .required()
                        .error(errors.get("position")),
                );
            });
            ui.add(TextArea::new("Bio", &mut draft.bio).rows(3));
            ui.add(Input::new("Profile Image URL", &mut draft.profile_image).hint("https://..."));
            ui.add(Input::new("Email", &mut draft.email));
            ui.columns(2, |columns| {
                columns[0].add(Input::new("LinkedIn", &mut draft.linkedin));
                columns[1].add(Input::new("GitHub", &mut draft.github));
            });
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}
