/// Visual emphasis of a cell; the renderer maps it to a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Success,
    Danger,
    Warning,
    Accent,
}

/// Rendered content of one table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Default)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    /// Pill-style status cell: `on` text in green, `off` text muted.
    pub fn flag(value: bool, on: &str, off: &str) -> Self {
        if value {
            Self::new(on, Tone::Success)
        } else {
            Self::new(off, Tone::Muted)
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}
