//! Projects, with their category picker and list filters.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use egui::Ui;
use sitedesk_business::entities::{Project, ProjectCategory};
use sitedesk_business::table::{Cell, ColumnDescriptor, TableModel, Tone};
use sitedesk_business::{ApiClient, EntityPage, ModalSize};

use super::Screen;
use super::crud::{Crud, RowIntent, activation_actions, delete_action, edit_action, status_cell};
use crate::widgets::{Checkbox, Input, Select, TextArea};

/// Category id → name, shared with the table's category column.
type CategoryNames = Rc<RefCell<HashMap<i64, String>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Filter {
    /// `0` lists every category.
    category_id: i64,
    featured_only: bool,
}

pub struct ProjectsScreen {
    crud: Crud<Project, RowIntent<Project>>,
    categories: EntityPage<ProjectCategory>,
    category_names: CategoryNames,
    filter: Filter,
    /// Raw images text while the form is open; blank lines survive typing.
    images_text: String,
}

impl ProjectsScreen {
    pub fn new(client: ApiClient) -> Self {
        let category_names = CategoryNames::default();
        let names = Rc::clone(&category_names);
        let [activate, deactivate] =
            activation_actions::<Project, RowIntent<Project>>(|row| row.is_active);
        let table = TableModel::new(vec![
            ColumnDescriptor::new("title", "Title").sortable(),
            ColumnDescriptor::new("description", "Description"),
            ColumnDescriptor::new("project_category_id", "Category")
                .render(move |_, row: &Project| match names.borrow().get(&row.project_category_id) {
                    Some(name) => Cell::text(name.clone()),
                    None => Cell::muted(format!("#{}", row.project_category_id)),
                }),
            ColumnDescriptor::new("images", "Images").render(|_, row: &Project| match row.images.len() {
                0 => Cell::muted("No images"),
                1 => Cell::text("1 image"),
                n => Cell::text(format!("{n} images")),
            }),
            ColumnDescriptor::new("is_featured", "Featured").render(|_, row: &Project| {
                if row.is_featured {
                    Cell::new("★ Featured", Tone::Warning)
                } else {
                    Cell::muted("-")
                }
            }),
            ColumnDescriptor::new("is_active", "Status")
                .render(|_, row: &Project| status_cell(row.is_active)),
        ])
        .actions(vec![edit_action(), activate, deactivate, delete_action()])
        .search_placeholder("Search projects...")
        .empty_message("No projects found");

        Self {
            crud: Crud::new(client.clone(), table, ModalSize::Large),
            categories: EntityPage::new(client),
            category_names,
            filter: Filter::default(),
            images_text: String::new(),
        }
    }

    fn category_options(&self, all_caption: Option<&str>) -> Vec<(i64, String)> {
        all_caption
            .map(|caption| (0, caption.to_owned()))
            .into_iter()
            .chain(
                self.categories
                    .items
                    .iter()
                    .map(|category| (category.id, category.name.clone())),
            )
            .collect()
    }

    /// Featured-only wins over a category; neither lists everything.
    fn apply_filter(&mut self) {
        let Filter {
            category_id,
            featured_only,
        } = self.filter;
        let page = &mut self.crud.page;
        if featured_only {
            page.set_source(|client| async move { client.featured_projects().await });
        } else if category_id != 0 {
            page.set_source(move |client| async move { client.projects_by_category(category_id).await });
        } else {
            page.reset_source();
        }
        page.load();
    }

    fn sync_category_names(&self) {
        let mut names = self.category_names.borrow_mut();
        names.clear();
        names.extend(
            self.categories
                .items
                .iter()
                .map(|category| (category.id, category.name.clone())),
        );
    }
}

impl Screen for ProjectsScreen {
    fn enter(&mut self) {
        self.categories.load();
        self.crud.enter();
    }

    fn leave(&mut self) {
        self.categories.cancel();
        self.crud.leave();
    }

    fn poll(&mut self) -> bool {
        if self.categories.poll() {
            self.sync_category_names();
            if let Some(error) = self.categories.last_error.take() {
                self.crud.page.last_error = Some(error);
            }
            self.crud.poll();
            return true;
        }
        self.crud.poll()
    }

    fn is_busy(&self) -> bool {
        self.crud.is_busy() || self.categories.is_busy()
    }

    fn ui(&mut self, ui: &mut Ui) {
        let filter_options = self.category_options(Some("All categories"));
        let mut filter = self.filter;
        if self.crud.toolbar(ui, |ui| {
            ui.add_space(16.0);
            egui::ComboBox::from_id_salt("project_category_filter")
                .selected_text(
                    filter_options
                        .iter()
                        .find(|(id, _)| *id == filter.category_id)
                        .map_or("All categories", |(_, name)| name.as_str()),
                )
                .show_ui(ui, |ui| {
                    for (id, name) in &filter_options {
                        ui.selectable_value(&mut filter.category_id, *id, name);
                    }
                });
            ui.checkbox(&mut filter.featured_only, "Featured only");
        }) {
            self.images_text.clear();
        }
        if filter != self.filter {
            self.filter = filter;
            self.apply_filter();
        }

        let form_options = self.category_options(None);
        let images_text = &mut self.images_text;
        let output = self.crud.show(ui, |ui, draft, errors| {
            ui.add(
                Input::new("Title", &mut draft.title)
                    .required()
                    .error(errors.get("title")),
            );
            ui.add(
                TextArea::new("Description", &mut draft.description)
                    .required()
                    .error(errors.get("description")),
            );
            ui.add(
                Select::new("Category", &mut draft.project_category_id, &form_options)
                    .placeholder("Select a category")
                    .required()
                    .error(errors.get("project_category_id")),
            );
            if ui
                .add(
                    TextArea::new("Images", images_text)
                        .rows(3)
                        .helper("One URL per line"),
                )
                .changed()
            {
                draft.set_images_text(images_text);
            }
            ui.add(Checkbox::new("Featured", &mut draft.is_featured));
            ui.add(Checkbox::new("Active", &mut draft.is_active));
        });

        if let Some(intent) = output.action {
            if let RowIntent::Edit(project) = &intent {
                self.images_text = project.images.join("\n");
            }
            intent.apply(&mut self.crud.page);
        }
    }
}
