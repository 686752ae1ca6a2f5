/// Fixed set of modal widths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ModalSize {
    /// Width in points.
    pub fn width(self) -> f32 {
        match self {
            Self::Small => 400.0,
            Self::Medium => 560.0,
            Self::Large => 720.0,
            Self::ExtraLarge => 960.0,
        }
    }
}

/// Visibility of one overlay.
///
/// Only the owner flips `open`; the renderer reports dismissal requests and
/// leaves acting on them to the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub size: ModalSize,
}

impl ModalState {
    pub fn new(size: ModalSize) -> Self {
        Self { open: false, size }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
