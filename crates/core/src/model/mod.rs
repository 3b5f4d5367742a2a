mod answers;
mod category;
mod ids;
mod question;

pub use answers::{AnswerSet, QuestionState};
pub use category::{Category, LETTER_CATEGORIES, LetterError, OptionLetter};
pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionError};
