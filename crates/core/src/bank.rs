//! Question bank loading.
//!
//! Two input formats are accepted:
//!
//! - JSON: `{ "title"?, "questions": [{ "prompt", "options": { "A".."D" } }], "pairs"? }`
//! - plain-text markup: blank-line separated blocks of one prompt line
//!   followed by four `A.` .. `D.` option lines, plus optional
//!   `pair Di: text` lines and a leading `# Title` line.
//!
//! Malformed questions are skipped and counted; ids are assigned over the
//! kept questions only, so they always run `1..=len`.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Category, OptionLetter, Question, QuestionId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no questions found")]
    NoQuestions,
}

static NUMBERED_PROMPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s+(?P<text>.+)$").expect("valid prompt regex"));
static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<letter>[A-Da-d])\s*[.):]\s*(?P<text>.+)$").expect("valid option regex")
});
static PAIR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:pair)\s+(?P<key>[^:]+?)\s*:\s*(?P<text>.+)$").expect("valid pair regex")
});

#[derive(Debug, Deserialize)]
struct RawBank {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    questions: Vec<serde_json::Value>,
    #[serde(default)]
    pairs: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    prompt: String,
    options: BTreeMap<String, String>,
}

/// An ordered, validated set of questions plus optional pairing blurbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: Option<String>,
    questions: Vec<Question>,
    pair_blurbs: BTreeMap<(Category, Category), String>,
    skipped: usize,
}

impl QuestionBank {
    /// Parse the structured JSON format.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` when the document itself is not valid, or
    /// `BankError::NoQuestions` when no question survives validation.
    pub fn from_json(input: &str) -> Result<Self, BankError> {
        let raw: RawBank = serde_json::from_str(input)?;
        let mut builder = BankBuilder::default();
        builder.title = raw.title.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());

        for value in raw.questions {
            match serde_json::from_value::<RawQuestion>(value) {
                Ok(q) => {
                    let options = OptionLetter::ALL.map(|letter| {
                        q.options
                            .iter()
                            .find(|(key, _)| key.trim().eq_ignore_ascii_case(letter.as_str()))
                            .map(|(_, text)| text.clone())
                            .unwrap_or_default()
                    });
                    builder.push_question(q.prompt, options);
                }
                Err(_) => builder.skipped += 1,
            }
        }

        for (key, text) in raw.pairs {
            builder.push_pair(&key, &text);
        }

        builder.finish()
    }

    /// Parse the plain-text markup format.
    ///
    /// # Errors
    ///
    /// Returns `BankError::NoQuestions` when no well-formed block is found.
    pub fn from_markup(input: &str) -> Result<Self, BankError> {
        let mut builder = BankBuilder::default();
        let mut block: Vec<&str> = Vec::new();

        for line in input.lines().map(str::trim) {
            if line.is_empty() {
                builder.push_block(&block);
                block.clear();
                continue;
            }
            if let Some(title) = line.strip_prefix("# ") {
                if builder.title.is_none() && builder.is_empty() && block.is_empty() {
                    builder.title = Some(title.trim().to_owned());
                    continue;
                }
            }
            // Lines like `Pair work: ...` whose key is not two codes are prompts.
            if let Some(caps) = PAIR_LINE.captures(line) {
                if builder.push_pair(&caps["key"], &caps["text"]) {
                    continue;
                }
            }
            block.push(line);
        }
        builder.push_block(&block);

        builder.finish()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        let index = usize::try_from(id.value()).ok()?.checked_sub(1)?;
        self.questions.get(index)
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// Number of questions; ids run `1..=total`.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// How many malformed questions were dropped while loading.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Explanatory text for a top-2 pairing, trying the reversed pair second.
    #[must_use]
    pub fn pair_blurb(&self, pair: (Category, Category)) -> Option<&str> {
        self.pair_blurbs
            .get(&pair)
            .or_else(|| self.pair_blurbs.get(&(pair.1, pair.0)))
            .map(String::as_str)
    }
}

#[derive(Default)]
struct BankBuilder {
    title: Option<String>,
    questions: Vec<Question>,
    pair_blurbs: BTreeMap<(Category, Category), String>,
    skipped: usize,
}

impl BankBuilder {
    fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.skipped == 0
    }

    fn push_question(&mut self, prompt: String, options: [String; 4]) {
        let Some(id) = QuestionId::from_index(self.questions.len()) else {
            self.skipped += 1;
            return;
        };
        match Question::new(id, prompt, options) {
            Ok(question) => self.questions.push(question),
            Err(_) => self.skipped += 1,
        }
    }

    /// A block is a prompt line followed by options `A` to `D`, in order.
    fn push_block(&mut self, lines: &[&str]) {
        let Some((prompt, option_lines)) = lines.split_first() else {
            return;
        };
        if option_lines.len() != OptionLetter::ALL.len() {
            self.skipped += 1;
            return;
        }

        let mut options: [String; 4] = Default::default();
        for (expected, line) in OptionLetter::ALL.into_iter().zip(option_lines) {
            let parsed = OPTION_LINE.captures(line).and_then(|caps| {
                let letter = caps["letter"].chars().next().and_then(OptionLetter::from_char)?;
                Some((letter, caps["text"].to_owned()))
            });
            match parsed {
                Some((letter, text)) if letter == expected => options[letter.index()] = text,
                _ => {
                    self.skipped += 1;
                    return;
                }
            }
        }

        let prompt = NUMBERED_PROMPT
            .captures(prompt)
            .map_or_else(|| (*prompt).to_owned(), |caps| caps["text"].to_owned());
        self.push_question(prompt, options);
    }

    /// Pair keys are two category codes, optionally separated: `Di`, `D-i`, `S/C`.
    fn push_pair(&mut self, key: &str, text: &str) -> bool {
        let codes: Vec<Category> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(Category::from_code)
            .collect::<Option<_>>()
            .unwrap_or_default();
        let text = text.trim();
        match codes.as_slice() {
            [first, second] if first != second && !text.is_empty() => {
                self.pair_blurbs.insert((*first, *second), text.to_owned());
                true
            }
            _ => false,
        }
    }

    fn finish(self) -> Result<QuestionBank, BankError> {
        if self.questions.is_empty() {
            return Err(BankError::NoQuestions);
        }
        Ok(QuestionBank {
            title: self.title,
            questions: self.questions,
            pair_blurbs: self.pair_blurbs,
            skipped: self.skipped,
        })
    }
}
