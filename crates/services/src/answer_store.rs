//! Best-effort persistence of the answer set.
//!
//! Nothing in here returns an error: unreadable data loads as an empty set
//! and failed writes are logged and dropped, leaving the in-memory answers
//! authoritative for the rest of the session.

use std::sync::Arc;

use quiz_core::model::{AnswerSet, OptionLetter, QuestionId};
use serde_json::{Map, Value};
use storage::repository::KeyValueRepository;
use tracing::{debug, warn};

/// Storage key the answers are kept under.
pub const ANSWERS_STORAGE_KEY: &str = "disc-quiz.answers";

#[derive(Clone)]
pub struct AnswerStore {
    repo: Arc<dyn KeyValueRepository>,
    key: String,
}

impl AnswerStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self::with_key(repo, ANSWERS_STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(repo: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted answers; anything missing or malformed yields an empty set.
    pub async fn load(&self) -> AnswerSet {
        match self.repo.get(&self.key).await {
            Ok(Some(raw)) => decode_answers(&raw),
            Ok(None) => AnswerSet::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "could not read saved answers");
                AnswerSet::new()
            }
        }
    }

    /// Persist the full answer set.
    pub async fn save(&self, answers: &AnswerSet) {
        let encoded = encode_answers(answers);
        if let Err(err) = self.repo.put(&self.key, &encoded).await {
            warn!(key = %self.key, error = %err, "could not save answers");
        }
    }

    /// Remove the persisted answers.
    pub async fn clear(&self) {
        if let Err(err) = self.repo.remove(&self.key).await {
            warn!(key = %self.key, error = %err, "could not clear saved answers");
        }
    }

    /// Record one selection, then persist the whole set.
    ///
    /// Does not check that `id` belongs to a question bank.
    pub async fn set_answer(&self, answers: &mut AnswerSet, id: QuestionId, letter: OptionLetter) {
        answers.set(id, letter);
        self.save(answers).await;
    }
}

/// Encode as a JSON object `{"<id>": "<letter>"}`.
#[must_use]
pub fn encode_answers(answers: &AnswerSet) -> String {
    let map: Map<String, Value> = answers
        .iter()
        .map(|(id, letter)| (id.to_string(), Value::String(letter.as_str().to_owned())))
        .collect();
    Value::Object(map).to_string()
}

/// Decode the JSON object written by [`encode_answers`].
///
/// A value that is not a JSON object decodes as empty. Inside an object,
/// entries with a non-numeric id or an unknown letter are dropped.
#[must_use]
pub fn decode_answers(raw: &str) -> AnswerSet {
    let map = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            debug!("saved answers are not a JSON object; starting empty");
            return AnswerSet::new();
        }
        Err(err) => {
            debug!(error = %err, "saved answers are not valid JSON; starting empty");
            return AnswerSet::new();
        }
    };

    let mut dropped = 0_usize;
    let answers: AnswerSet = map
        .iter()
        .filter_map(|(key, value)| {
            let id = key.parse::<QuestionId>().ok();
            let letter = value.as_str().and_then(|s| s.parse::<OptionLetter>().ok());
            let entry = id.zip(letter);
            if entry.is_none() {
                dropped += 1;
            }
            entry
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, "ignored unreadable saved answer entries");
    }
    answers
}
