//! Create/edit form state shared by every entity page.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;

/// Which record, if any, the modal form is bound to.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode<R> {
    #[default]
    Closed,
    Creating,
    Editing(R),
}

impl<R> FormMode<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing(&self) -> Option<&R> {
        match self {
            Self::Editing(record) => Some(record),
            _ => None,
        }
    }

    /// Modal heading, e.g. "Add New FAQ" / "Edit FAQ".
    pub fn title(&self, noun: &str) -> String {
        match self {
            Self::Editing(_) => format!("Edit {noun}"),
            _ => format!("Add New {noun}"),
        }
    }

    /// Submit button caption, e.g. "Create FAQ" / "Update FAQ".
    pub fn submit_label(&self, noun: &str) -> String {
        match self {
            Self::Editing(_) => format!("Update {noun}"),
            _ => format!("Create {noun}"),
        }
    }
}

/// Per-field validation messages keyed by the draft's JSON field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Records "`label` is required" when `value` is blank.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.insert(field, format!("{label} is required"));
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// The editable shadow of a record; serialized as the create/update body.
pub trait Draft: Clone + Debug + Default + Serialize + Send + Sync + 'static {
    /// Client-side required-field checks. Empty means submittable.
    fn validate(&self) -> FieldErrors;
}
