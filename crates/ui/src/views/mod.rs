mod quiz;
mod result;
mod scripts;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::{FALLBACK_TEXT_ID, QuizView};
pub use result::ResultPanel;
pub use state::{COPIED_FLASH, CopyState};
