use std::cell;
use std::rc::Rc;

use egui::Ui;
use sitedesk_business::api::ReorderItem;
use sitedesk_business::entities::PrivacyPolicySection;
use sitedesk_business::table::{ActionDescriptor, Cell, ColumnDescriptor, TableModel, Variant};
use sitedesk_business::{ApiClient, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, NumberInput, TextArea};

#[derive(Debug, Clone)]
enum SectionIntent {
    Row(RowIntent<PrivacyPolicySection>),
    Move { id: i64, up: bool },
}

impl From<RowIntent<PrivacyPolicySection>> for SectionIntent {
    fn from(intent: RowIntent<PrivacyPolicySection>) -> Self {
        SectionIntent::Row(intent)
    }
}

/// New display order after moving `id` one step, or `None` at either end.
fn moved(sections: &[PrivacyPolicySection], id: i64, up: bool) -> Option<Vec<ReorderItem>> {
    let index = sections.iter().position(|section| section.id == id)?;
    let target = if up {
        index.checked_sub(1)?
    } else {
        Some(index + 1).filter(|target| *target < sections.len())?
    };
    let mut order = sections.to_vec();
    order.swap(index, target);
    Some(PrivacyPolicySection::reorder_items(&order))
}

/// Sections listed through `/ordered`, reorderable one step at a time.
///
/// Moves swap neighbours in fetch order, so they are offered only while the
/// table shows that order unsorted and unfiltered.
pub struct PrivacyScreen {
    crud: Crud<PrivacyPolicySection, SectionIntent>,
    reorderable: Rc<cell::Cell<bool>>,
}

impl PrivacyScreen {
    pub fn new(client: ApiClient) -> Self {
        let [activate, deactivate] =
            activation_actions::<PrivacyPolicySection, SectionIntent>(|row| row.is_active);
        let reorderable = Rc::new(cell::Cell::new(true));
        let (can_move_up, can_move_down) = (Rc::clone(&reorderable), Rc::clone(&reorderable));
        let table = TableModel::new(vec![
            ColumnDescriptor::new("display_order", "Order")
                .width(60.0)
                .render(|_, row: &PrivacyPolicySection| Cell::muted(format!("≡ {}", row.display_order))),
            ColumnDescriptor::new("title", "Title").sortable(),
            ColumnDescriptor::new("content", "Content"),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &PrivacyPolicySection| status_cell(row.is_active)),
        ])
        .actions(vec![
            ActionDescriptor::new("Move up", |row: &PrivacyPolicySection| SectionIntent::Move {
                id: row.id,
                up: true,
            })
            .icon("▲")
            .variant(Variant::Secondary)
            .show_when(move |_| can_move_up.get()),
            ActionDescriptor::new("Move down", |row: &PrivacyPolicySection| SectionIntent::Move {
                id: row.id,
                up: false,
            })
            .icon("▼")
            .variant(Variant::Secondary)
            .show_when(move |_| can_move_down.get()),
            edit_action(),
            activate,
            deactivate,
            delete_action(),
        ])
        .search_placeholder("Search sections...")
        .empty_message("No sections found");

        let mut crud = Crud::new(client, table, ModalSize::Large);
        crud.page
            .set_source(|client| async move { client.ordered_privacy_sections().await });
        Self { crud, reorderable }
    }

    fn sync_reorderable(&self) -> bool {
        let state = &self.crud.table_state;
        let reorderable = state.sort.key.is_none() && state.query.is_empty();
        self.reorderable.set(reorderable);
        reorderable
    }
}

impl Screen for PrivacyScreen {
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
        self.sync_reorderable();
        let output = self.crud.show(ui, |ui, draft, errors| {
            ui.add(
                Input::new("Title", &mut draft.title)
                    .required()
                    .error(errors.get("title")),
            );
            ui.add(TextArea::new("Content", &mut draft.content).rows(8));
            ui.add(NumberInput::new("Display Order", &mut draft.display_order).range(0..=9999));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        match output.action {
            Some(SectionIntent::Row(intent)) => intent.apply(&mut self.crud.page),
            Some(SectionIntent::Move { .. }) if !self.sync_reorderable() => {
                log::debug!("Ignoring move while the sections are sorted or filtered");
            }
            Some(SectionIntent::Move { id, up }) => match moved(&self.crud.page.items, id, up) {
                Some(order) => {
                    self.crud.page.run(move |client| async move {
                        client.reorder_privacy_sections(&order).await
                    });
                }
                None => log::debug!("Section {id} is already at the edge"),
            },
            None => {}
        }
    }
}
