use std::path::{Path, PathBuf};

use quiz_core::QuestionBank;
use tracing::{info, warn};

use crate::error::BankLoadError;

/// The 24-question bank shipped with the app.
pub const BUNDLED_BANK: &str = include_str!("../assets/disc_bank.txt");

/// Where the question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BankSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl BankSource {
    /// Load and validate the bank.
    ///
    /// Files ending in `.json` use the JSON format; anything else is read as
    /// plain-text markup.
    ///
    /// # Errors
    ///
    /// Returns `BankLoadError::Read` if the file cannot be read and
    /// `BankLoadError::Parse` if it holds no usable questions.
    pub fn load(&self) -> Result<QuestionBank, BankLoadError> {
        let bank = match self {
            BankSource::Bundled => QuestionBank::from_markup(BUNDLED_BANK)?,
            BankSource::File(path) => {
                let input = std::fs::read_to_string(path).map_err(|source| BankLoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                if is_json(path) {
                    QuestionBank::from_json(&input)?
                } else {
                    QuestionBank::from_markup(&input)?
                }
            }
        };

        if bank.skipped() > 0 {
            warn!(skipped = bank.skipped(), "skipped malformed questions");
        }
        info!(questions = bank.total(), source = ?self, "question bank loaded");
        Ok(bank)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Category;

    #[test]
    fn bundled_bank_has_24_questions_and_all_pairs() {
        let bank = BankSource::Bundled.load().unwrap();
        assert_eq!(bank.total(), 24);
        assert_eq!(bank.skipped(), 0);
        assert!(bank.title().is_some());

        for first in Category::ALL {
            for second in Category::ALL {
                if first != second {
                    assert!(
                        bank.pair_blurb((first, second)).is_some(),
                        "missing blurb for {first}{second}"
                    );
                }
            }
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = BankSource::File(PathBuf::from("/definitely/not/here.json"));
        assert!(matches!(source.load(), Err(BankLoadError::Read { .. })));
    }

    #[test]
    fn extension_picks_format() {
        assert!(is_json(Path::new("bank.JSON")));
        assert!(!is_json(Path::new("bank.txt")));
        assert!(!is_json(Path::new("bank")));
    }
}
