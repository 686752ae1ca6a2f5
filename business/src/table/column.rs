use serde_json::Value;

use super::cell::Cell;
use super::value::display_text;

type RenderFn<T> = Box<dyn Fn(Option<&Value>, &T) -> Cell>;

/// How one field of a row is displayed and sorted.
pub struct ColumnDescriptor<T> {
    /// JSON field name, optionally one dotted level deep (`"category.name"`).
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Preferred width in points.
    pub width: Option<f32>,
    render: Option<RenderFn<T>>,
}

impl<T> ColumnDescriptor<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Replaces the default text with `render(resolved value, row)`.
    pub fn render(mut self, render: impl Fn(Option<&Value>, &T) -> Cell + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn cell(&self, value: Option<&Value>, row: &T) -> Cell {
        match &self.render {
            Some(render) => render(value, row),
            None => Cell::text(display_text(value)),
        }
    }
}

impl<T> std::fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
