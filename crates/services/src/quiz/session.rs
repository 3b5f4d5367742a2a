use std::sync::Arc;

use quiz_core::QuestionBank;
use quiz_core::model::{AnswerSet, OptionLetter, QuestionId, QuestionState};
use quiz_core::scoring::{is_complete, missing_questions};
use tracing::debug;

use crate::answer_store::AnswerStore;
use crate::error::QuizError;
use crate::quiz::{QuizProgress, QuizReport};

/// The single owned answer state for one questionnaire run.
///
/// Memory is authoritative; persistence through the `AnswerStore` is
/// best-effort. The synchronous `choose` / `clear_answers` pair exists for
/// UI callers that persist on their own task.
#[derive(Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    answers: AnswerSet,
    store: AnswerStore,
}

impl QuizSession {
    /// Start from an already-loaded answer set. Answers for ids the bank
    /// does not contain are discarded.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, store: AnswerStore, answers: AnswerSet) -> Self {
        let before = answers.len();
        let answers: AnswerSet = answers.iter().filter(|(id, _)| bank.contains(*id)).collect();
        if answers.len() < before {
            debug!(
                dropped = before - answers.len(),
                "discarded saved answers for unknown questions"
            );
        }
        Self {
            bank,
            answers,
            store,
        }
    }

    /// Restore the saved answers from the store.
    pub async fn restore(bank: Arc<QuestionBank>, store: AnswerStore) -> Self {
        let answers = store.load().await;
        Self::new(bank, store, answers)
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn store(&self) -> &AnswerStore {
        &self.store
    }

    #[must_use]
    pub fn state(&self, id: QuestionId) -> QuestionState {
        self.answers.state(id)
    }

    /// Record a selection in memory only, returning the replaced letter.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` if `id` is not in the bank.
    pub fn choose(
        &mut self,
        id: QuestionId,
        letter: OptionLetter,
    ) -> Result<Option<OptionLetter>, QuizError> {
        if !self.bank.contains(id) {
            return Err(QuizError::UnknownQuestion { id });
        }
        Ok(self.answers.set(id, letter))
    }

    /// Forget every selection in memory only.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
    }

    /// Record a selection and persist the whole answer set.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` if `id` is not in the bank.
    pub async fn select(
        &mut self,
        id: QuestionId,
        letter: OptionLetter,
    ) -> Result<Option<OptionLetter>, QuizError> {
        if !self.bank.contains(id) {
            return Err(QuizError::UnknownQuestion { id });
        }
        let previous = self.answers.get(id);
        self.store.set_answer(&mut self.answers, id, letter).await;
        Ok(previous)
    }

    /// Clear persisted and in-memory answers.
    pub async fn reset(&mut self) {
        self.store.clear().await;
        self.answers.clear();
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::of(&self.answers, self.bank.total())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_complete(&self.answers, self.bank.total())
    }

    #[must_use]
    pub fn missing(&self) -> Vec<QuestionId> {
        missing_questions(&self.answers, self.bank.total())
    }

    #[must_use]
    pub fn report(&self) -> QuizReport {
        QuizReport::build(&self.bank, &self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Category;
    use quiz_core::scoring::CategoryScores;
    use storage::repository::InMemoryRepository;

    fn bank(questions: usize) -> Arc<QuestionBank> {
        let markup = (1..=questions)
            .map(|n| format!("{n}. Question {n}\nA. a\nB. b\nC. c\nD. d\n"))
            .collect::<Vec<_>>()
            .join("\n");
        Arc::new(QuestionBank::from_markup(&markup).unwrap())
    }

    fn store() -> AnswerStore {
        AnswerStore::new(Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn select_persists_and_restore_picks_it_up() {
        let bank = bank(3);
        let store = store();
        let mut session = QuizSession::restore(Arc::clone(&bank), store.clone()).await;

        assert_eq!(
            session.select(QuestionId::new(2), OptionLetter::C).await.unwrap(),
            None
        );
        assert_eq!(
            session.select(QuestionId::new(2), OptionLetter::A).await.unwrap(),
            Some(OptionLetter::C)
        );

        let restored = QuizSession::restore(bank, store).await;
        assert_eq!(
            restored.state(QuestionId::new(2)),
            QuestionState::Answered(OptionLetter::A)
        );
        assert_eq!(restored.progress().answered, 1);
    }

    #[tokio::test]
    async fn unknown_questions_are_rejected() {
        let mut session = QuizSession::restore(bank(2), store()).await;
        let err = session
            .select(QuestionId::new(3), OptionLetter::A)
            .await
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownQuestion { id } if id == QuestionId::new(3)));
        assert!(session.choose(QuestionId::new(0), OptionLetter::A).is_err());
        assert!(session.answers().is_empty());
    }

    #[tokio::test]
    async fn restore_discards_answers_outside_the_bank() {
        let store = store();
        let saved: AnswerSet = [
            (QuestionId::new(1), OptionLetter::B),
            (QuestionId::new(7), OptionLetter::B),
        ]
        .into_iter()
        .collect();
        store.save(&saved).await;

        let session = QuizSession::restore(bank(2), store).await;
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.missing(), vec![QuestionId::new(2)]);
    }

    #[tokio::test]
    async fn reset_clears_memory_and_storage() {
        let bank = bank(2);
        let store = store();
        let mut session = QuizSession::restore(Arc::clone(&bank), store.clone()).await;
        session.select(QuestionId::new(1), OptionLetter::A).await.unwrap();
        session.select(QuestionId::new(2), OptionLetter::B).await.unwrap();
        assert!(session.is_complete());

        session.reset().await;

        assert!(!session.is_complete());
        assert_eq!(session.report().evaluation.scores, CategoryScores::default());
        assert!(store.load().await.is_empty());
        assert!(QuizSession::restore(bank, store).await.answers().is_empty());
    }

    #[tokio::test]
    async fn choose_does_not_touch_storage() {
        let store = store();
        let mut session = QuizSession::restore(bank(1), store.clone()).await;
        session.choose(QuestionId::new(1), OptionLetter::D).unwrap();

        assert!(session.is_complete());
        assert!(store.load().await.is_empty());

        session.clear_answers();
        assert!(!session.is_complete());
    }

    #[tokio::test]
    async fn even_answers_over_24_questions_tie_all_four() {
        let mut session = QuizSession::restore(bank(24), store()).await;
        for n in 1..=24_u32 {
            let letter = OptionLetter::ALL[((n - 1) % 4) as usize];
            session.select(QuestionId::new(n), letter).await.unwrap();
        }

        let report = session.report();
        assert!(report.is_complete());
        assert_eq!(
            report.evaluation.scores,
            CategoryScores::from_counts([6, 6, 6, 6])
        );
        assert_eq!(report.evaluation.top, Category::ALL.to_vec());
        assert_eq!(report.evaluation.pair, None);
    }
}
