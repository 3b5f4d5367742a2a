use quiz_core::model::{AnswerSet, QuestionId};

/// Aggregated view of questionnaire progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: u32,
    pub answered: u32,
    pub remaining: u32,
    pub is_complete: bool,
}

impl QuizProgress {
    /// Progress over ids `1..=total`; answers outside that range are ignored.
    #[must_use]
    pub fn of(answers: &AnswerSet, total: u32) -> Self {
        let answered = (1..=total)
            .filter(|n| answers.contains(QuestionId::new(*n)))
            .fold(0_u32, |acc, _| acc + 1);
        let remaining = total - answered;
        Self {
            total,
            answered,
            remaining,
            is_complete: remaining == 0,
        }
    }

    /// Whole-number percentage for progress bars.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = u64::from(self.answered) * 100 / u64::from(self.total);
        u32::try_from(pct).unwrap_or(100)
    }
}
