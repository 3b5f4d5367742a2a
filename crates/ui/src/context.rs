use std::sync::Arc;

use services::QuizSession;

pub trait UiApp: Send + Sync {
    /// The restored session, or `None` when no question bank could be loaded.
    fn initial_session(&self) -> Option<QuizSession>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: Option<QuizSession>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
        }
    }

    /// A fresh copy of the session the window opened with.
    #[must_use]
    pub fn initial_session(&self) -> Option<QuizSession> {
        self.initial_session.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
