use egui::Ui;
use sitedesk_business::entities::Subscriber;
use sitedesk_business::table::{ActionDescriptor, Cell, ColumnDescriptor, TableModel, Tone, Variant};
use sitedesk_business::{ApiClient, ModalSize};

use super::crud::{Crud, RowIntent, delete_action, edit_action};
use super::{Screen, format_date};
use crate::widgets::{Checkbox, Input, TextArea};

#[derive(Debug, Clone)]
enum SubscriberIntent {
    Row(RowIntent<Subscriber>),
    /// PATCH the subscription flag only.
    SetSubscribed(i64, bool),
}

impl From<RowIntent<Subscriber>> for SubscriberIntent {
    fn from(intent: RowIntent<Subscriber>) -> Self {
        SubscriberIntent::Row(intent)
    }
}

pub struct SubscribersScreen {
    crud: Crud<Subscriber, SubscriberIntent>,
}

impl SubscribersScreen {
    pub fn new(client: ApiClient) -> Self {
        let table = TableModel::new(vec![
            ColumnDescriptor::new("name", "Name")
                .sortable()
                .render(|_, row: &Subscriber| Cell::text(format!("({}) {}", row.initial(), row.name))),
            ColumnDescriptor::new("email", "Email").sortable(),
            ColumnDescriptor::new("phone", "Phone"),
            ColumnDescriptor::new("company", "Company").sortable(),
            ColumnDescriptor::new("subscribed", "Status").render(|_, row: &Subscriber| {
                if row.subscribed {
                    Cell::new("Subscribed", Tone::Success)
                } else {
                    Cell::new("Unsubscribed", Tone::Muted)
                }
            }),
            ColumnDescriptor::new("created_at", "Created")
                .sortable()
                .render(|_, row: &Subscriber| Cell::muted(format_date(&row.created_at))),
        ])
        .actions(vec![
            edit_action(),
            ActionDescriptor::new("Subscribe", |row: &Subscriber| {
                SubscriberIntent::SetSubscribed(row.id, true)
            })
            .show_when(|row| !row.subscribed),
            ActionDescriptor::new("Unsubscribe", |row: &Subscriber| {
                SubscriberIntent::SetSubscribed(row.id, false)
            })
            .variant(Variant::Secondary)
            .show_when(|row| row.subscribed),
            delete_action(),
        ])
        .search_placeholder("Search subscribers...")
        .empty_message("No subscribers found");

        Self {
            crud: Crud::new(client, table, ModalSize::Medium),
        }
    }
}

impl Screen for SubscribersScreen {
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
                Input::new("Email", &mut draft.email)
                    .required()
                    .hint("name@example.com")
                    .error(errors.get("email")),
            );
            ui.add(Input::new("Phone", &mut draft.phone));
            ui.add(Input::new("Company", &mut draft.company));
            ui.add(TextArea::new("Message", &mut draft.message).rows(3));
            ui.add(Checkbox::new("Subscribed", &mut draft.subscribed));
        });

        match output.action {
            Some(SubscriberIntent::Row(intent)) => intent.apply(&mut self.crud.page),
            Some(SubscriberIntent::SetSubscribed(id, subscribed)) => {
                log::info!("Setting subscriber {id} subscription to {subscribed}");
                self.crud.page.run(move |client| async move {
                    client.update_subscription_status(id, subscribed).await
                });
            }
            None => {}
        }
    }
}
