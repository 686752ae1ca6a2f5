/// Visual category of an action button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

type ClickFn<T, A> = Box<dyn Fn(&T) -> A>;
type ShowFn<T> = Box<dyn Fn(&T) -> bool>;

/// One per-row control.
///
/// Clicking does not act directly: `on_click` maps the row to an intent
/// value of type `A` that the owning page applies.
pub struct ActionDescriptor<T, A> {
    pub label: String,
    pub icon: Option<&'static str>,
    pub variant: Variant,
    on_click: ClickFn<T, A>,
    show: Option<ShowFn<T>>,
}

impl<T, A> ActionDescriptor<T, A> {
    pub fn new(label: impl Into<String>, on_click: impl Fn(&T) -> A + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: Variant::Primary,
            on_click: Box::new(on_click),
            show: None,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Only offer the action on rows where `show` holds.
    pub fn show_when(mut self, show: impl Fn(&T) -> bool + 'static) -> Self {
        self.show = Some(Box::new(show));
        self
    }

    pub fn is_visible(&self, row: &T) -> bool {
        self.show.as_ref().is_none_or(|show| show(row))
    }

    pub fn trigger(&self, row: &T) -> A {
        (self.on_click)(row)
    }

    /// Button caption with the icon prefixed when there is one.
    pub fn caption(&self) -> String {
        match self.icon {
            Some(icon) => format!("{icon} {}", self.label),
            None => self.label.clone(),
        }
    }
}

impl<T, A> std::fmt::Debug for ActionDescriptor<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("show", &self.show.is_some())
            .finish()
    }
}
