use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LetterError {
    #[error("invalid option letter: {0:?}")]
    InvalidLetter(String),
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// The four DISC buckets every answer is counted into.
///
/// Variant order is the canonical order used to break ties when ranking,
/// so the derived `Ord` is part of the contract:
/// `Dominance < Influence < Steadiness < Conscientiousness`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Dominance,
        Category::Influence,
        Category::Steadiness,
        Category::Conscientiousness,
    ];

    /// Position in canonical order (0-3).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Category::Dominance => 0,
            Category::Influence => 1,
            Category::Steadiness => 2,
            Category::Conscientiousness => 3,
        }
    }

    /// Short code as printed on results: `D`, `i`, `S`, `C`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Category::Dominance => "D",
            Category::Influence => "i",
            Category::Steadiness => "S",
            Category::Conscientiousness => "C",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Dominance => "Dominance",
            Category::Influence => "Influence",
            Category::Steadiness => "Steadiness",
            Category::Conscientiousness => "Conscientiousness",
        }
    }

    /// Parses a category code, ignoring case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'D' => Some(Category::Dominance),
            'I' => Some(Category::Influence),
            'S' => Some(Category::Steadiness),
            'C' => Some(Category::Conscientiousness),
            _ => None,
        }
    }

    /// The option letter that scores into this category.
    #[must_use]
    pub fn letter(self) -> OptionLetter {
        LETTER_CATEGORIES[self.index()].0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//
// ─── OPTION LETTER ────────────────────────────────────────────────────────────
//

/// One of the four fixed option letters offered by every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    /// Parses a letter, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    /// The category this letter scores into, via [`LETTER_CATEGORIES`].
    #[must_use]
    pub fn category(self) -> Category {
        LETTER_CATEGORIES[self.index()].1
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLetter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                OptionLetter::from_char(c).ok_or_else(|| LetterError::InvalidLetter(s.to_string()))
            }
            _ => Err(LetterError::InvalidLetter(s.to_string())),
        }
    }
}

/// The single letter→category table used by scoring and display.
///
/// Indexed by `OptionLetter::index()`; entry `i` also belongs to the
/// category with canonical index `i`.
pub const LETTER_CATEGORIES: [(OptionLetter, Category); 4] = [
    (OptionLetter::A, Category::Dominance),
    (OptionLetter::B, Category::Influence),
    (OptionLetter::C, Category::Steadiness),
    (OptionLetter::D, Category::Conscientiousness),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
