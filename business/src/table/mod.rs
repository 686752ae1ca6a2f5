//! Generic, UI-agnostic table model.
//!
//! A [`TableModel`] describes how a collection of rows is shown: ordered
//! [`ColumnDescriptor`]s, per-row [`ActionDescriptor`]s, and the search mode.
//! [`TableModel::view`] turns rows plus the current [`TableState`] into a
//! [`TableView`] that a renderer can paint without knowing anything about the
//! row type.
//!
//! Rows are read through their `serde_json` form, so any `T: Serialize`
//! works and column keys are the row's JSON field names.

mod action;
mod cell;
mod column;
mod model;
mod sort;
mod value;

pub use action::{ActionDescriptor, Variant};
pub use cell::{Cell, Tone};
pub use column::ColumnDescriptor;
pub use model::{RowView, SearchMode, TableModel, TableState, TableView};
pub use sort::{SortDirection, SortState, compare_defined, sort_order};
pub use value::{display_text, resolve, search_text};
