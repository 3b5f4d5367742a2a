mod progress;
mod report;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use report::QuizReport;
pub use session::QuizSession;
