//! Labeled form fields.
//!
//! Every field renders its label above the control and, below it, either the
//! validation error in red or the helper text in gray. They hold no state of
//! their own; the value lives in the page's draft.

use egui::{Response, RichText, Ui, Widget};

use crate::utils::colors::{COLOR_MUTED, COLOR_RED};

fn field_label(ui: &mut Ui, label: &str, required: bool) {
    if required {
        ui.label(RichText::new(format!("{label} *")).strong());
    } else {
        ui.label(RichText::new(label).strong());
    }
}

fn field_footer(ui: &mut Ui, error: Option<&str>, helper: Option<&str>) {
    match (error, helper) {
        (Some(error), _) => {
            ui.label(RichText::new(error).color(COLOR_RED).small());
        }
        (None, Some(helper)) => {
            ui.label(RichText::new(helper).color(COLOR_MUTED).small());
        }
        (None, None) => {}
    }
}

/// Single-line text field.
pub struct Input<'a> {
    label: &'a str,
    value: &'a mut String,
    error: Option<&'a str>,
    helper: Option<&'a str>,
    hint: Option<&'a str>,
    required: bool,
}

impl<'a> Input<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self {
            label,
            value,
            error: None,
            helper: None,
            hint: None,
            required: false,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Widget for Input<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label, self.required);
            let mut edit = egui::TextEdit::singleline(self.value).desired_width(f32::INFINITY);
            if let Some(hint) = self.hint {
                edit = edit.hint_text(hint);
            }
            let response = ui.add(edit);
            field_footer(ui, self.error, self.helper);
            response
        })
        .inner
    }
}

/// Multi-line text field.
pub struct TextArea<'a> {
    label: &'a str,
    value: &'a mut String,
    rows: usize,
    error: Option<&'a str>,
    helper: Option<&'a str>,
    required: bool,
}

impl<'a> TextArea<'a> {
    pub fn new(label: &'a str, value: &'a mut String) -> Self {
        Self {
            label,
            value,
            rows: 4,
            error: None,
            helper: None,
            required: false,
        }
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Widget for TextArea<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label, self.required);
            let response = ui.add(
                egui::TextEdit::multiline(self.value)
                    .desired_rows(self.rows)
                    .desired_width(f32::INFINITY),
            );
            field_footer(ui, self.error, self.helper);
            response
        })
        .inner
    }
}

/// Drop-down over a fixed list of `(value, caption)` options.
pub struct Select<'a, V> {
    label: &'a str,
    value: &'a mut V,
    options: &'a [(V, String)],
    placeholder: &'a str,
    error: Option<&'a str>,
    helper: Option<&'a str>,
    required: bool,
}

impl<'a, V: PartialEq + Clone> Select<'a, V> {
    pub fn new(label: &'a str, value: &'a mut V, options: &'a [(V, String)]) -> Self {
        Self {
            label,
            value,
            options,
            placeholder: "Select...",
            error: None,
            helper: None,
            required: false,
        }
    }

    /// Caption shown while the value matches none of the options.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl<V: PartialEq + Clone> Widget for Select<'_, V> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label, self.required);
            let selected = self
                .options
                .iter()
                .find(|(value, _)| value == self.value)
                .map_or(self.placeholder, |(_, caption)| caption.as_str());

            let mut changed = false;
            let mut response = egui::ComboBox::from_id_salt(self.label)
                .selected_text(selected)
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for (value, caption) in self.options {
                        let checked = value == self.value;
                        if ui.selectable_label(checked, caption).clicked() && !checked {
                            *self.value = value.clone();
                            changed = true;
                        }
                    }
                })
                .response;
            if changed {
                response.mark_changed();
            }
            field_footer(ui, self.error, self.helper);
            response
        })
        .inner
    }
}

/// Integer field.
pub struct NumberInput<'a, N> {
    label: &'a str,
    value: &'a mut N,
    range: Option<std::ops::RangeInclusive<N>>,
    error: Option<&'a str>,
    helper: Option<&'a str>,
}

impl<'a, N: egui::emath::Numeric> NumberInput<'a, N> {
    pub fn new(label: &'a str, value: &'a mut N) -> Self {
        Self {
            label,
            value,
            range: None,
            error: None,
            helper: None,
        }
    }

    pub fn range(mut self, range: std::ops::RangeInclusive<N>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }
}

impl<N: egui::emath::Numeric> Widget for NumberInput<'_, N> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            field_label(ui, self.label, false);
            let mut drag = egui::DragValue::new(self.value).speed(1);
            if let Some(range) = self.range {
                drag = drag.range(range);
            }
            let response = ui.add(drag);
            field_footer(ui, self.error, self.helper);
            response
        })
        .inner
    }
}

/// Boolean flag.
pub struct Checkbox<'a> {
    label: &'a str,
    value: &'a mut bool,
    helper: Option<&'a str>,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, value: &'a mut bool) -> Self {
        Self {
            label,
            value,
            helper: None,
        }
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }
}

impl Widget for Checkbox<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            let response = ui.checkbox(self.value, self.label);
            field_footer(ui, None, self.helper);
            response
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn error_replaces_helper() {
        let harness = Harness::new_ui(|ui| {
            let mut value = String::new();
            ui.add(
                Input::new("Question", &mut value)
                    .required()
                    .helper("Shown on the public FAQ page")
                    .error(Some("Question is required")),
            );
        });

        assert!(harness.query_by_label("Question *").is_some());
        assert!(harness.query_by_label("Question is required").is_some());
        assert!(
            harness
                .query_by_label("Shown on the public FAQ page")
                .is_none()
        );
    }

    #[test]
    fn helper_shows_without_error() {
        let harness = Harness::new_ui(|ui| {
            let mut value = String::from("https://cdn.example.com/a.png");
            ui.add(TextArea::new("Images", &mut value).helper("One URL per line"));
        });

        assert!(harness.query_by_label("One URL per line").is_some());
    }
}
