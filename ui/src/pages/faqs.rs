use egui::Ui;
use sitedesk_business::entities::Faq;
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

/// FAQ list with server-side search.
pub struct FaqsScreen {
    crud: Crud<Faq, RowIntent<Faq>>,
}

impl FaqsScreen {
    pub fn new(client: ApiClient) -> Self {
        let table = TableModel::new(vec![
            ColumnDescriptor::new("question", "Question").sortable(),
            ColumnDescriptor::new("answer", "Answer"),
            ColumnDescriptor::new("category", "Category").sortable(),
            ColumnDescriptor::new("display_order", "Order").sortable().width(60.0),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, faq: &Faq| status_cell(faq.is_active)),
        ])
        .actions(vec![edit_action(), delete_action()])
        .external_search()
        .search_placeholder("Search FAQs...")
        .empty_message("No FAQs found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }

    /// Lists `/api/faqs/search?q=` results for a non-blank query, the whole
    /// collection otherwise.
    fn search(&mut self, query: String) {
        let query = query.trim().to_owned();
        if query.is_empty() {
            self.crud.page.reset_source();
        } else {
            self.crud.page.set_source(move |client| {
                let query = query.clone();
                async move { client.search_faqs(&query).await }
            });
        }
        self.crud.page.load();
    }
}

impl Screen for FaqsScreen {
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
                Input::new("Question", &mut draft.question)
                    .required()
                    .error(errors.get("question")),
            );
            ui.add(
                TextArea::new("Answer", &mut draft.answer)
                    .required()
                    .error(errors.get("answer")),
            );
            ui.add(Input::new("Category", &mut draft.category).hint("e.g. Billing"));
            ui.add(
                NumberInput::new("Display Order", &mut draft.display_order)
                    .range(0..=9999)
                    .helper("Lower numbers are shown first"),
            );
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(query) = output.search_changed {
            self.search(query);
        }
        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_column_colors_the_flag() {
        let screen = FaqsScreen::new(ApiClient::new(sitedesk_business::BusinessConfig::new(
            "http://127.0.0.1:9",
        )));
        let faq = Faq {
            id: 1,
            question: "Q?".to_owned(),
            answer: "A.".to_owned(),
            category: String::new(),
            display_order: 0,
            is_active: false,
            created_at: String::new(),
            updated_at: String::new(),
        };
        let status = &screen.crud.table.columns[4];
        assert_eq!(status.cell(None, &faq), Cell::new("Inactive", sitedesk_business::table::Tone::Danger));
    }
}
