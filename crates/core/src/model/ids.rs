use std::fmt;
use std::str::FromStr;

/// 1-based identifier of a question, assigned sequentially in bank order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Identifier of the question at zero-based position `index`.
    ///
    /// Returns `None` when the position does not fit the id space.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .map(Self)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `QuestionId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse question id from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    /// Ids are positive; `"0"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(id) if id > 0 => Ok(QuestionId::new(id)),
            _ => Err(ParseIdError { raw: s.to_string() }),
        }
    }
}
