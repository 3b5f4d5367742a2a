#![forbid(unsafe_code)]

pub mod bank;
pub mod model;
pub mod scoring;

pub use bank::{BankError, QuestionBank};
