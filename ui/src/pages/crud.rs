//! The list + modal form layout every entity screen shares.

use egui::{Color32, RichText, Ui};
use sitedesk_business::entities::Resource;
use sitedesk_business::table::{ActionDescriptor, Cell, TableModel, TableState, Tone, Variant};
use sitedesk_business::{ApiClient, EntityPage, FieldErrors, ModalSize, ModalState};

use crate::utils::colors::{COLOR_BLUE, COLOR_RED};
use crate::widgets::{confirm_dialog, data_table, modal};

/// The row actions every entity table offers.
#[derive(Debug, Clone, PartialEq)]
pub enum RowIntent<R> {
    Edit(R),
    Delete(R),
    Toggle(R),
}

impl<R: Resource> RowIntent<R> {
    pub fn apply(self, page: &mut EntityPage<R>) {
        match self {
            RowIntent::Edit(row) => page.open_edit(&row),
            RowIntent::Delete(row) => page.request_delete(&row),
            RowIntent::Toggle(row) => {
                page.toggle(&row);
            }
        }
    }
}

pub fn edit_action<R, A>() -> ActionDescriptor<R, A>
where
    R: Resource,
    A: From<RowIntent<R>> + 'static,
{
    ActionDescriptor::new("Edit", |row: &R| A::from(RowIntent::Edit(row.clone())))
        .icon("✏")
        .variant(Variant::Secondary)
}

pub fn delete_action<R, A>() -> ActionDescriptor<R, A>
where
    R: Resource,
    A: From<RowIntent<R>> + 'static,
{
    ActionDescriptor::new("Delete", |row: &R| A::from(RowIntent::Delete(row.clone())))
        .icon("🗑")
        .variant(Variant::Danger)
}

/// "Activate" on inactive rows and "Deactivate" on active ones.
pub fn activation_actions<R, A>(is_active: fn(&R) -> bool) -> [ActionDescriptor<R, A>; 2]
where
    R: Resource,
    A: From<RowIntent<R>> + 'static,
{
    [
        ActionDescriptor::new("Activate", |row: &R| A::from(RowIntent::Toggle(row.clone())))
            .variant(Variant::Primary)
            .show_when(move |row| !is_active(row)),
        ActionDescriptor::new("Deactivate", |row: &R| A::from(RowIntent::Toggle(row.clone())))
            .variant(Variant::Secondary)
            .show_when(is_active),
    ]
}

pub fn status_cell(active: bool) -> Cell {
    if active {
        Cell::new("Active", Tone::Success)
    } else {
        Cell::new("Inactive", Tone::Danger)
    }
}

/// Interaction the screen has to act on after [`Crud::show`].
pub struct CrudOutput<A> {
    pub action: Option<A>,
    pub search_changed: Option<String>,
}

#[derive(Clone, Copy)]
enum FormButton {
    Cancel,
    Submit,
}

pub struct Crud<R: Resource, A> {
    pub page: EntityPage<R>,
    pub table: TableModel<R, A>,
    pub table_state: TableState,
    pub form: ModalState,
}

impl<R: Resource, A> Crud<R, A> {
    pub fn new(client: ApiClient, table: TableModel<R, A>, size: ModalSize) -> Self {
        Self {
            page: EntityPage::new(client),
            table,
            table_state: TableState::default(),
            form: ModalState::new(size),
        }
    }

    pub fn enter(&mut self) {
        self.page.load();
    }

    pub fn leave(&mut self) {
        self.page.cancel();
        self.page.cancel_delete();
    }

    pub fn poll(&mut self) -> bool {
        self.page.poll()
    }

    pub fn is_busy(&self) -> bool {
        self.page.is_busy()
    }

    /// "Add …" button followed by the screen's own controls. Returns whether
    /// the create form was opened this frame.
    pub fn toolbar(&mut self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) -> bool {
        let mut opened = false;
        ui.horizontal(|ui| {
            let add = egui::Button::new(
                RichText::new(format!("+ Add {}", R::NOUN)).color(Color32::WHITE),
            )
            .fill(COLOR_BLUE);
            if ui.add(add).clicked() {
                self.page.open_create();
                opened = true;
            }
            add_contents(ui);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.page.loading, egui::Button::new("⟳ Refresh"))
                    .clicked()
                {
                    self.page.load();
                }
            });
        });
        ui.add_space(8.0);
        opened
    }

    /// Error line, table, create/edit modal and delete confirmation.
    ///
    /// `form` draws the fields of the draft; the Cancel/Submit row is added
    /// here.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        form: impl FnOnce(&mut Ui, &mut R::Draft, &FieldErrors),
    ) -> CrudOutput<A> {
        if let Some(error) = self.page.last_error.clone() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("⚠ {error}")).color(COLOR_RED));
                if ui.small_button("Dismiss").clicked() {
                    self.page.last_error = None;
                }
            });
            ui.add_space(4.0);
        }

        let table = data_table(
            ui,
            R::ENDPOINT,
            &self.table,
            &mut self.table_state,
            &self.page.items,
            self.page.loading,
        );

        let ctx = ui.ctx().clone();
        self.form_modal(&ctx, form);
        self.delete_confirmation(&ctx);

        CrudOutput {
            action: table.action,
            search_changed: table.search_changed,
        }
    }

    fn form_modal(&mut self, ctx: &egui::Context, form: impl FnOnce(&mut Ui, &mut R::Draft, &FieldErrors)) {
        self.form.open = self.page.mode.is_open();
        let title = self.page.mode.title(R::NOUN);
        let submit_label = self.page.mode.submit_label(R::NOUN);
        let saving = self.page.saving;
        let draft = &mut self.page.draft;
        let errors = &self.page.errors;

        let response = modal(ctx, (R::ENDPOINT, "form"), &self.form, &title, |ui| {
            form(ui, draft, errors);
            ui.add_space(12.0);
            let mut pressed = None;
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    pressed = Some(FormButton::Cancel);
                }
                let caption = if saving { "Saving..." } else { submit_label.as_str() };
                let submit =
                    egui::Button::new(RichText::new(caption).color(Color32::WHITE)).fill(COLOR_BLUE);
                if ui.add_enabled(!saving, submit).clicked() {
                    pressed = Some(FormButton::Submit);
                }
            });
            pressed
        });

        match response.inner.flatten() {
            Some(FormButton::Submit) => {
                self.page.submit();
            }
            Some(FormButton::Cancel) => self.page.close_form(),
            None if response.close_requested => self.page.close_form(),
            None => {}
        }
    }

    fn delete_confirmation(&mut self, ctx: &egui::Context) {
        if self.page.pending_delete.is_none() {
            return;
        }
        let message = format!(
            "Are you sure you want to delete this {}?",
            R::NOUN.to_lowercase()
        );
        match confirm_dialog(
            ctx,
            (R::ENDPOINT, "delete"),
            &format!("Delete {}", R::NOUN),
            &message,
            "Delete",
        ) {
            Some(true) => {
                self.page.confirm_delete();
            }
            Some(false) => self.page.cancel_delete(),
            None => {}
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use sitedesk_business::BusinessConfig;
    use sitedesk_business::entities::Faq;

    use super::*;

    fn faq(active: bool) -> Faq {
        Faq {
            id: 9,
            question: "Q?".to_owned(),
            answer: "A.".to_owned(),
            category: String::new(),
            display_order: 1,
            is_active: active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn activation_actions_are_exclusive() {
        let [activate, deactivate] = activation_actions::<Faq, RowIntent<Faq>>(|f| f.is_active);
        assert!(activate.is_visible(&faq(false)));
        assert!(!deactivate.is_visible(&faq(false)));
        assert!(!activate.is_visible(&faq(true)));
        assert!(deactivate.is_visible(&faq(true)));
    }

    #[test]
    fn edit_intent_opens_the_form() {
        let mut page: EntityPage<Faq> =
            EntityPage::new(ApiClient::new(BusinessConfig::new("http://127.0.0.1:9")));
        let intent = edit_action::<Faq, RowIntent<Faq>>().trigger(&faq(true));
        intent.apply(&mut page);
        assert_eq!(page.mode.editing().map(|f| f.id), Some(9));
    }

    #[test]
    fn delete_intent_waits_for_confirmation() {
        let mut page: EntityPage<Faq> =
            EntityPage::new(ApiClient::new(BusinessConfig::new("http://127.0.0.1:9")));
        delete_action::<Faq, RowIntent<Faq>>()
            .trigger(&faq(true))
            .apply(&mut page);
        assert!(page.pending_delete.is_some());
        assert!(!page.is_busy());
    }
}
