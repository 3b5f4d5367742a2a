#![forbid(unsafe_code)]

pub mod answer_store;
pub mod app_services;
pub mod bank_source;
pub mod error;
pub mod quiz;

pub use answer_store::{ANSWERS_STORAGE_KEY, AnswerStore};
pub use app_services::AppServices;
pub use bank_source::{BUNDLED_BANK, BankSource};
pub use error::{AppServicesError, BankLoadError, QuizError};
pub use quiz::{QuizProgress, QuizReport, QuizSession};
