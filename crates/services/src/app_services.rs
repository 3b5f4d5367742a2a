use std::sync::Arc;

use quiz_core::QuestionBank;
use storage::repository::Storage;

use crate::answer_store::AnswerStore;
use crate::bank_source::BankSource;
use crate::error::AppServicesError;
use crate::quiz::QuizSession;

/// Assembles the question bank and answer store the app runs on.
#[derive(Clone)]
pub struct AppServices {
    bank: Arc<QuestionBank>,
    answers: AnswerStore,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or bank loading fails.
    pub async fn new_sqlite(db_url: &str, source: &BankSource) -> Result<Self, AppServicesError> {
        let bank = source.load()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(bank, &storage))
    }

    /// Wire an already-loaded bank to the given storage.
    #[must_use]
    pub fn from_parts(bank: QuestionBank, storage: &Storage) -> Self {
        Self {
            bank: Arc::new(bank),
            answers: AnswerStore::new(Arc::clone(&storage.kv)),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn answer_store(&self) -> AnswerStore {
        self.answers.clone()
    }

    /// Start a session from whatever answers were saved last time.
    pub async fn restore_session(&self) -> QuizSession {
        QuizSession::restore(self.bank(), self.answer_store()).await
    }
}
