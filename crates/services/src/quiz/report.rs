use std::fmt::Write as _;

use quiz_core::QuestionBank;
use quiz_core::model::{AnswerSet, Category, QuestionId};
use quiz_core::scoring::{Evaluation, missing_questions};

/// Result of scoring the current answers against a bank.
///
/// Built for partial answer sets too; callers check [`QuizReport::is_complete`]
/// before showing the result panel and use [`QuizReport::nudge`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub evaluation: Evaluation,
    pub missing: Vec<QuestionId>,
    pub blurb: Option<String>,
}

impl QuizReport {
    #[must_use]
    pub fn build(bank: &QuestionBank, answers: &AnswerSet) -> Self {
        let evaluation = Evaluation::of(answers);
        let missing = missing_questions(answers, bank.total());
        let blurb = evaluation
            .pair
            .and_then(|pair| bank.pair_blurb(pair))
            .map(str::to_owned);
        Self {
            evaluation,
            missing,
            blurb,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Prompt listing the unanswered question numbers, if any.
    #[must_use]
    pub fn nudge(&self) -> Option<String> {
        if self.missing.is_empty() {
            return None;
        }
        let numbers = self
            .missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let noun = if self.missing.len() == 1 {
            "question"
        } else {
            "questions"
        };
        Some(format!("Please answer the remaining {noun}: {numbers}"))
    }

    /// `D (Dominance)` for one leader, `D, i (tie)` otherwise.
    #[must_use]
    pub fn top_label(&self) -> String {
        match self.evaluation.top.as_slice() {
            [single] => category_label(*single),
            many => {
                let codes = many.iter().map(|c| c.code()).collect::<Vec<_>>().join(", ");
                format!("{codes} (tie)")
            }
        }
    }

    /// `D + i` when the leading pair is unambiguous.
    #[must_use]
    pub fn pair_label(&self) -> Option<String> {
        self.evaluation
            .pair
            .map(|(first, second)| format!("{} + {}", first.code(), second.code()))
    }

    /// Plain-text summary for the clipboard.
    #[must_use]
    pub fn summary_text(&self) -> String {
        let mut out = String::from("DISC result\n");
        for (category, count) in self.evaluation.scores.iter() {
            let _ = writeln!(out, "{}: {count}", category_label(category));
        }
        let _ = write!(out, "Top: {}", self.top_label());
        if let Some(pair) = self.pair_label() {
            let _ = write!(out, "\nPair: {pair}");
        }
        out
    }
}

fn category_label(category: Category) -> String {
    format!("{} ({})", category.code(), category.name())
}
