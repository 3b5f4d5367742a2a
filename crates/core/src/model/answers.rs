use std::collections::BTreeMap;

use crate::model::{OptionLetter, QuestionId};

/// Display state of one question; derived from the `AnswerSet`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered(OptionLetter),
}

/// The user's current selections, at most one letter per question.
///
/// Keys may be any subset of the bank's question ids; partial sets are
/// normal while the form is being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionId, OptionLetter>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<OptionLetter> {
        self.entries.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn state(&self, id: QuestionId) -> QuestionState {
        self.get(id)
            .map_or(QuestionState::Unanswered, QuestionState::Answered)
    }

    /// Record a selection, returning the letter it replaced.
    pub fn set(&mut self, id: QuestionId, letter: OptionLetter) -> Option<OptionLetter> {
        self.entries.insert(id, letter)
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, OptionLetter)> + '_ {
        self.entries.iter().map(|(id, letter)| (*id, *letter))
    }
}

impl FromIterator<(QuestionId, OptionLetter)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, OptionLetter)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
