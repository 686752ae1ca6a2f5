use egui::Ui;
use sitedesk_business::entities::{CustomerReview, MAX_RATING};
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel, Tone};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

/// `3` → `★★★☆☆`.
fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub struct ReviewsScreen {
    crud: Crud<CustomerReview, RowIntent<CustomerReview>>,
}

impl ReviewsScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<CustomerReview, RowIntent<CustomerReview>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("client_photo", "Photo")
                .width(60.0)
                .render(|_, row: &CustomerReview| match &row.client_photo {
                    Some(url) if !url.is_empty() => Cell::new("🖼", Tone::Accent),
                    _ => Cell::muted("-"),
                }),
            ColumnDescriptor::new("client_name", "Name").sortable(),
            ColumnDescriptor::new("comment", "Comment"),
            ColumnDescriptor::new("rating", "Rating")
                .sortable()
                .render(|_, row: &CustomerReview| Cell::new(stars(row.rating), Tone::Warning)),
            ColumnDescriptor::new("is_featured", "Featured")
                .render(|_, row: &CustomerReview| Cell::flag(row.is_featured, "Featured", "-")),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &CustomerReview| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search reviews...")
        .empty_message("No reviews found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }
}

impl Screen for ReviewsScreen {
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
                Input::new("Client Name", &mut draft.client_name)
                    .required()
                    .error(errors.get("client_name")),
            );
            ui.add(
                Input::new("Client Photo URL", &mut draft.client_photo).hint("https://..."),
            );
            ui.add(TextArea::new("Comment", &mut draft.comment));
            ui.add(
                NumberInput::new("Rating", &mut draft.rating)
                    .range(0..=MAX_RATING)
                    .error(errors.get("rating")),
            );
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Featured", &mut draft.is_featured));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            intent.apply(&mut self.crud.page);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
