//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::BankError;
use quiz_core::model::QuestionId;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {id} is not part of this questionnaire")]
    UnknownQuestion { id: QuestionId },
}

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankLoadError {
    #[error("failed to read question bank {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] BankError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Bank(#[from] BankLoadError),
}
