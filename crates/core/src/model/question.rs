use thiserror::Error;

use crate::model::{OptionLetter, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("option {0} has no text")]
    EmptyOption(OptionLetter),
}

/// A single questionnaire item: a prompt and one text per option letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: [String; 4],
}

impl Question {
    /// Build a question, trimming all text.
    ///
    /// `options` is indexed by `OptionLetter::index()`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyOption`
    /// when any text is blank after trimming.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: [String; 4],
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options = options.map(|text| text.trim().to_owned());
        if let Some(letter) = OptionLetter::ALL
            .into_iter()
            .find(|letter| options[letter.index()].is_empty())
        {
            return Err(QuestionError::EmptyOption(letter));
        }

        Ok(Self {
            id,
            prompt,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> &str {
        &self.options[letter.index()]
    }

    /// Options in letter order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        OptionLetter::ALL
            .into_iter()
            .map(|letter| (letter, self.option(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(a: &str, b: &str, c: &str, d: &str) -> [String; 4] {
        [a.into(), b.into(), c.into(), d.into()]
    }

    #[test]
    fn trims_and_exposes_options_in_letter_order() {
        let q = Question::new(
            QuestionId::new(1),
            "  How do you start?  ",
            opts(" fast", "chatty ", "calm", "planned"),
        )
        .unwrap();

        assert_eq!(q.prompt(), "How do you start?");
        assert_eq!(q.option(OptionLetter::A), "fast");
        let letters: Vec<_> = q.options().map(|(l, _)| l).collect();
        assert_eq!(letters, OptionLetter::ALL.to_vec());
    }

    #[test]
    fn rejects_blank_text() {
        let err = Question::new(QuestionId::new(1), "   ", opts("a", "b", "c", "d")).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);

        let err = Question::new(QuestionId::new(1), "Q", opts("a", "b", " ", "d")).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption(OptionLetter::C));
    }
}
