use serde::Serialize;
use serde_json::Value;

use super::action::ActionDescriptor;
use super::cell::Cell;
use super::column::ColumnDescriptor;
use super::sort::{SortDirection, SortState, sort_order};
use super::value::{resolve, search_text};

/// Who filters rows for a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// The table filters the rows it was given.
    #[default]
    Local,
    /// The caller filters (e.g. server-side search); the table only reports
    /// query changes.
    External,
}

/// Interactive state of one table: sort and search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    pub query: String,
}

/// One visible row.
#[derive(Debug)]
pub struct RowView<'a, T> {
    pub row: &'a T,
    pub cells: Vec<Cell>,
    /// Indices into [`TableModel::actions`] whose `show` predicate holds.
    pub actions: Vec<usize>,
}

#[derive(Debug)]
pub enum TableView<'a, T> {
    Loading,
    Empty(&'a str),
    Rows(Vec<RowView<'a, T>>),
}

impl<T> TableView<'_, T> {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// Declarative description of a table over rows of type `T` whose actions
/// produce intents of type `A`.
#[derive(Debug)]
pub struct TableModel<T, A> {
    pub columns: Vec<ColumnDescriptor<T>>,
    pub actions: Vec<ActionDescriptor<T, A>>,
    pub searchable: bool,
    pub search: SearchMode,
    pub empty_message: String,
    pub search_placeholder: String,
}

impl<T: Serialize, A> TableModel<T, A> {
    pub fn new(columns: Vec<ColumnDescriptor<T>>) -> Self {
        Self {
            columns,
            actions: Vec::new(),
            searchable: true,
            search: SearchMode::Local,
            empty_message: "No data available".to_owned(),
            search_placeholder: "Search...".to_owned(),
        }
    }

    pub fn actions(mut self, actions: Vec<ActionDescriptor<T, A>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn external_search(mut self) -> Self {
        self.search = SearchMode::External;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Header click on column `index`. Returns whether the sort changed;
    /// clicks on unsortable columns are ignored.
    pub fn click_header(&self, state: &mut TableState, index: usize) -> bool {
        match self.columns.get(index) {
            Some(column) if column.sortable => {
                state.sort.click(&column.key);
                true
            }
            _ => false,
        }
    }

    /// Header marker for column `index`: ▲/▼ when it is the active sort key,
    /// ↕ for other sortable columns, nothing otherwise.
    pub fn sort_indicator(&self, state: &TableState, index: usize) -> Option<&'static str> {
        let column = self.columns.get(index).filter(|c| c.sortable)?;
        if !state.sort.is_active(&column.key) {
            return Some("↕");
        }
        Some(match state.sort.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        })
    }

    /// Stores a new query. Returns it back when the caller owns filtering.
    pub fn set_query(&self, state: &mut TableState, query: impl Into<String>) -> Option<String> {
        state.query = query.into();
        (self.search == SearchMode::External).then(|| state.query.clone())
    }

    /// Sorts, filters and renders `data`.
    ///
    /// `loading` wins over both the empty and the populated view.
    pub fn view<'a>(&'a self, data: &'a [T], state: &TableState, loading: bool) -> TableView<'a, T> {
        if loading {
            return TableView::Loading;
        }

        let values: Vec<Value> = data
            .iter()
            .map(|row| {
                serde_json::to_value(row).unwrap_or_else(|err| {
                    log::warn!("Table row could not be serialized: {err}");
                    Value::Null
                })
            })
            .collect();

        let order = match &state.sort.key {
            Some(key) => sort_order(&values, key, state.sort.direction),
            None => (0..values.len()).collect(),
        };

        let needle = state.query.to_lowercase();
        let filter = self.search == SearchMode::Local && !needle.is_empty();

        let rows: Vec<RowView<'a, T>> = order
            .into_iter()
            .filter(|&i| !filter || self.matches(&values[i], &needle))
            .map(|i| self.row_view(&data[i], &values[i]))
            .collect();

        if rows.is_empty() {
            TableView::Empty(&self.empty_message)
        } else {
            TableView::Rows(rows)
        }
    }

    fn matches(&self, value: &Value, needle: &str) -> bool {
        self.columns.iter().any(|column| {
            search_text(resolve(value, &column.key))
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }

    fn row_view<'a>(&self, row: &'a T, value: &Value) -> RowView<'a, T> {
        let cells = self
            .columns
            .iter()
            .map(|column| column.cell(resolve(value, &column.key), row))
            .collect();
        let actions = self
            .actions
            .iter()
            .enumerate()
            .filter(|(_, action)| action.is_visible(row))
            .map(|(i, _)| i)
            .collect();

        RowView {
            row,
            cells,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Tone, Variant};

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Person {
        id: i64,
        name: String,
        active: bool,
        team: Option<Team>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Team {
        name: String,
    }

    #[derive(Debug, PartialEq)]
    enum Intent {
        Edit(i64),
        Activate(i64),
        Deactivate(i64),
    }

    fn person(id: i64, name: &str, active: bool) -> Person {
        Person {
            id,
            name: name.to_owned(),
            active,
            team: None,
        }
    }

    fn model() -> TableModel<Person, Intent> {
        TableModel::new(vec![
            ColumnDescriptor::new("name", "Name").sortable(),
            ColumnDescriptor::new("team.name", "Team"),
            ColumnDescriptor::new("active", "Status")
                .render(|_, p: &Person| Cell::flag(p.active, "Active", "Inactive")),
        ])
        .actions(vec![
            ActionDescriptor::new("Edit", |p: &Person| Intent::Edit(p.id)),
            ActionDescriptor::new("Activate", |p: &Person| Intent::Activate(p.id))
                .show_when(|p| !p.active),
            ActionDescriptor::new("Deactivate", |p: &Person| Intent::Deactivate(p.id))
                .variant(Variant::Danger)
                .show_when(|p| p.active),
        ])
        .empty_message("No people found")
    }

    fn names<T>(view: &TableView<'_, T>) -> Vec<String> {
        match view {
            TableView::Rows(rows) => rows.iter().map(|r| r.cells[0].text.clone()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn local_search_is_case_insensitive() {
        let model = model();
        let data = vec![person(1, "Alice", true), person(2, "bob", true)];
        let mut state = TableState::default();
        assert_eq!(model.set_query(&mut state, "AL"), None);

        assert_eq!(names(&model.view(&data, &state, false)), vec!["Alice"]);
    }

    #[test]
    fn local_search_keeps_whitespace() {
        let model = model();
        let data = vec![person(1, "Alice", true), person(2, "Ann Lee", true)];
        let mut state = TableState::default();

        model.set_query(&mut state, "al ");
        assert!(matches!(model.view(&data, &state, false), TableView::Empty(_)));

        model.set_query(&mut state, " ");
        assert_eq!(names(&model.view(&data, &state, false)), vec!["Ann Lee"]);
    }

    #[test]
    fn external_search_skips_local_filtering() {
        let model = model().external_search();
        let data = vec![person(1, "Alice", true), person(2, "bob", true)];
        let mut state = TableState::default();

        let forwarded = model.set_query(&mut state, "AL");
        assert_eq!(forwarded.as_deref(), Some("AL"));
        assert_eq!(names(&model.view(&data, &state, false)), vec!["Alice", "bob"]);
    }

    #[test]
    fn search_matches_nested_columns() {
        let model = model();
        let mut data = vec![person(1, "Alice", true), person(2, "bob", true)];
        data[1].team = Some(Team {
            name: "Platform".to_owned(),
        });
        let mut state = TableState::default();
        model.set_query(&mut state, "platf");

        assert_eq!(names(&model.view(&data, &state, false)), vec!["bob"]);
    }

    #[test]
    fn loading_wins_over_empty() {
        let model = model();
        let view = model.view(&[], &TableState::default(), true);
        assert!(matches!(view, TableView::Loading));
    }

    #[test]
    fn empty_result_shows_the_message() {
        let model = model();
        let data = vec![person(1, "Alice", true)];
        let mut state = TableState::default();
        model.set_query(&mut state, "zzz");

        let view = model.view(&data, &state, false);
        assert!(matches!(view, TableView::Empty("No people found")));
        assert_eq!(view.row_count(), 0);
    }

    #[test]
    fn cells_use_render_or_dash() {
        let model = model();
        let data = vec![person(1, "Alice", false)];
        let view = model.view(&data, &TableState::default(), false);

        let TableView::Rows(rows) = view else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].cells[1].text, "-");
        assert_eq!(rows[0].cells[2], Cell::new("Inactive", Tone::Muted));
    }

    #[test]
    fn hidden_actions_do_not_affect_others() {
        let model = model();
        let data = vec![person(1, "Alice", true), person(2, "bob", false)];
        let view = model.view(&data, &TableState::default(), false);

        let TableView::Rows(rows) = view else {
            panic!("expected rows");
        };
        let labels = |row: &RowView<'_, Person>| -> Vec<&str> {
            row.actions
                .iter()
                .map(|&i| model.actions[i].label.as_str())
                .collect()
        };
        assert_eq!(labels(&rows[0]), vec!["Edit", "Deactivate"]);
        assert_eq!(labels(&rows[1]), vec!["Edit", "Activate"]);
        assert_eq!(
            model.actions[rows[1].actions[1]].trigger(rows[1].row),
            Intent::Activate(2)
        );
    }

    #[test]
    fn only_sortable_headers_sort() {
        let model = model();
        let data = vec![person(1, "bob", true), person(2, "Alice", true)];
        let mut state = TableState::default();

        assert!(!model.click_header(&mut state, 1));
        assert_eq!(model.sort_indicator(&state, 1), None);
        assert_eq!(model.sort_indicator(&state, 0), Some("↕"));

        assert!(model.click_header(&mut state, 0));
        assert_eq!(model.sort_indicator(&state, 0), Some("▲"));
        assert_eq!(names(&model.view(&data, &state, false)), vec!["Alice", "bob"]);

        model.click_header(&mut state, 0);
        assert_eq!(model.sort_indicator(&state, 0), Some("▼"));
        assert_eq!(names(&model.view(&data, &state, false)), vec!["bob", "Alice"]);
    }

    #[test]
    fn sort_runs_before_search() {
        let model = model();
        let data = vec![
            person(1, "carol", true),
            person(2, "Carl", true),
            person(3, "bob", true),
        ];
        let mut state = TableState::default();
        model.click_header(&mut state, 0);
        model.set_query(&mut state, "car");

        assert_eq!(names(&model.view(&data, &state, false)), vec!["Carl", "carol"]);
    }
}
