use std::time::Duration;

/// How long the "Copied" confirmation stays visible.
pub const COPIED_FLASH: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
    /// Clipboard access failed; the summary is shown for manual copying.
    Manual,
}

impl CopyState {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            CopyState::Idle => None,
            CopyState::Copied => Some("Copied"),
            CopyState::Manual => Some("Clipboard unavailable. Copy the text below."),
        }
    }
}
