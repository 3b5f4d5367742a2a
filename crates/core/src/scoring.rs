//! Tallying and ranking of an `AnswerSet`.
//!
//! Everything here is a pure function of its inputs and is recomputed after
//! every change to the answers.

use crate::model::{AnswerSet, Category, QuestionId};

//
// ─── CATEGORY SCORES ──────────────────────────────────────────────────────────
//

/// Per-category answer counts, indexed in canonical category order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores {
    counts: [u32; 4],
}

impl CategoryScores {
    /// Scores from raw counts in canonical order (D, i, S, C).
    #[must_use]
    pub fn from_counts(counts: [u32; 4]) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.counts[category.index()]
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn increment(&mut self, category: Category) {
        let slot = &mut self.counts[category.index()];
        *slot = slot.saturating_add(1);
    }
}

/// Count every answered question into the category its letter maps to.
#[must_use]
pub fn compute_scores(answers: &AnswerSet) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for (_, letter) in answers.iter() {
        scores.increment(letter.category());
    }
    scores
}

//
// ─── RANK ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    pub category: Category,
    pub score: u32,
}

/// All four categories ordered by descending score.
///
/// Equal scores keep canonical category order, so the ordering is total
/// and identical inputs always rank identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    entries: [RankEntry; 4],
}

impl Rank {
    #[must_use]
    pub fn entries(&self) -> &[RankEntry; 4] {
        &self.entries
    }

    /// Categories in rank order.
    #[must_use]
    pub fn categories(&self) -> [Category; 4] {
        self.entries.map(|entry| entry.category)
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.entries[0].score
    }
}

#[must_use]
pub fn rank(scores: &CategoryScores) -> Rank {
    let mut entries = Category::ALL.map(|category| RankEntry {
        category,
        score: scores.get(category),
    });
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.category.cmp(&b.category))
    });
    Rank { entries }
}

/// Every category sharing the maximum score, in rank order.
#[must_use]
pub fn top_categories(rank: &Rank) -> Vec<Category> {
    let max = rank.max_score();
    rank.entries
        .iter()
        .take_while(|entry| entry.score == max)
        .map(|entry| entry.category)
        .collect()
}

/// The two highest-ranked categories, or `None` when rank 1 is tied.
#[must_use]
pub fn top_pair(rank: &Rank) -> Option<(Category, Category)> {
    let [first, second, ..] = rank.entries;
    if first.score == second.score {
        return None;
    }
    Some((first.category, second.category))
}

//
// ─── COMPLETION ───────────────────────────────────────────────────────────────
//

/// True iff every id in `1..=total` has an answer.
#[must_use]
pub fn is_complete(answers: &AnswerSet, total: u32) -> bool {
    (1..=total).all(|n| answers.contains(QuestionId::new(n)))
}

/// Unanswered ids in `1..=total`, ascending.
#[must_use]
pub fn missing_questions(answers: &AnswerSet, total: u32) -> Vec<QuestionId> {
    (1..=total)
        .map(QuestionId::new)
        .filter(|id| !answers.contains(*id))
        .collect()
}

//
// ─── EVALUATION ───────────────────────────────────────────────────────────────
//

/// Scores, rank and top categories computed together for one answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub scores: CategoryScores,
    pub rank: Rank,
    pub top: Vec<Category>,
    pub pair: Option<(Category, Category)>,
}

impl Evaluation {
    #[must_use]
    pub fn of(answers: &AnswerSet) -> Self {
        let scores = compute_scores(answers);
        let rank = rank(&scores);
        let top = top_categories(&rank);
        let pair = top_pair(&rank);
        Self {
            scores,
            rank,
            top,
            pair,
        }
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.top.len() > 1
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionLetter;

    use crate::model::Category::{
        Conscientiousness as C, Dominance as D, Influence as I, Steadiness as S,
    };

    fn answers_from(letters: &[OptionLetter]) -> AnswerSet {
        letters
            .iter()
            .enumerate()
            .map(|(i, letter)| (QuestionId::from_index(i).unwrap(), *letter))
            .collect()
    }

    #[test]
    fn scores_sum_to_answered_count() {
        let answers = answers_from(&[
            OptionLetter::A,
            OptionLetter::A,
            OptionLetter::C,
            OptionLetter::D,
            OptionLetter::B,
        ]);
        let scores = compute_scores(&answers);

        assert_eq!(scores.total() as usize, answers.len());
        assert_eq!(scores.get(D), 2);
        assert_eq!(scores.get(I), 1);
        assert_eq!(scores.get(S), 1);
        assert_eq!(scores.get(C), 1);
    }

    #[test]
    fn unanswered_questions_contribute_nothing() {
        let mut answers = AnswerSet::new();
        answers.set(QuestionId::new(7), OptionLetter::B);
        let scores = compute_scores(&answers);
        assert_eq!(scores, CategoryScores::from_counts([0, 1, 0, 0]));
    }

    #[test]
    fn rank_breaks_ties_in_canonical_order() {
        let rank = rank(&CategoryScores::from_counts([3, 3, 1, 0]));
        assert_eq!(rank.categories(), [D, I, S, C]);

        let rank = super::rank(&CategoryScores::from_counts([0, 2, 2, 5]));
        assert_eq!(rank.categories(), [C, I, S, D]);
    }

    #[test]
    fn rank_always_covers_all_categories() {
        let rank = rank(&CategoryScores::default());
        assert_eq!(rank.categories(), Category::ALL);
        assert!(rank.entries().iter().all(|e| e.score == 0));
    }

    #[test]
    fn rank_is_deterministic() {
        let scores = CategoryScores::from_counts([4, 1, 4, 1]);
        assert_eq!(rank(&scores), rank(&scores));
        assert_eq!(rank(&scores).categories(), [D, S, I, C]);
    }

    #[test]
    fn top_categories_include_every_tie() {
        let rank = rank(&CategoryScores::from_counts([5, 5, 2, 0]));
        assert_eq!(top_categories(&rank), vec![D, I]);

        let rank = super::rank(&CategoryScores::from_counts([1, 4, 4, 4]));
        assert_eq!(top_categories(&rank), vec![I, S, C]);
    }

    #[test]
    fn top_pair_requires_a_single_leader() {
        let rank = rank(&CategoryScores::from_counts([6, 4, 3, 3]));
        assert_eq!(top_categories(&rank), vec![D]);
        assert_eq!(top_pair(&rank), Some((D, I)));

        let tied = super::rank(&CategoryScores::from_counts([5, 5, 1, 1]));
        assert_eq!(top_pair(&tied), None);

        let three_way = super::rank(&CategoryScores::from_counts([2, 6, 6, 6]));
        assert_eq!(top_pair(&three_way), None);
    }

    #[test]
    fn top_pair_takes_canonical_runner_up_when_second_place_ties() {
        let rank = rank(&CategoryScores::from_counts([1, 1, 7, 1]));
        assert_eq!(top_pair(&rank), Some((S, D)));
    }

    #[test]
    fn completion_matches_missing_list() {
        let mut answers = AnswerSet::new();
        assert!(!is_complete(&answers, 3));
        assert_eq!(
            missing_questions(&answers, 3),
            vec![QuestionId::new(1), QuestionId::new(2), QuestionId::new(3)]
        );

        answers.set(QuestionId::new(2), OptionLetter::A);
        assert_eq!(
            missing_questions(&answers, 3),
            vec![QuestionId::new(1), QuestionId::new(3)]
        );

        answers.set(QuestionId::new(1), OptionLetter::A);
        answers.set(QuestionId::new(3), OptionLetter::A);
        assert!(is_complete(&answers, 3));
        assert!(missing_questions(&answers, 3).is_empty());
    }

    #[test]
    fn completion_ignores_ids_outside_the_bank() {
        let mut answers = AnswerSet::new();
        answers.set(QuestionId::new(9), OptionLetter::A);
        assert!(!is_complete(&answers, 1));
        assert!(is_complete(&answers, 0));
        assert!(missing_questions(&answers, 0).is_empty());
    }

    #[test]
    fn completion_and_missing_agree_for_every_subset() {
        let total = 4_u32;
        for mask in 0_u32..(1 << total) {
            let answers: AnswerSet = (1..=total)
                .filter(|n| mask & (1 << (n - 1)) != 0)
                .map(|n| (QuestionId::new(n), OptionLetter::D))
                .collect();
            assert_eq!(
                is_complete(&answers, total),
                missing_questions(&answers, total).is_empty(),
                "mask {mask:b}"
            );
        }
    }

    #[test]
    fn cleared_answers_score_zero_and_are_incomplete() {
        let mut answers = answers_from(&[OptionLetter::A; 5]);
        answers.clear();
        assert!(!is_complete(&answers, 5));
        assert_eq!(compute_scores(&answers), CategoryScores::default());
    }

    #[test]
    fn even_spread_over_24_questions_ties_all_four() {
        let letters: Vec<OptionLetter> = (0..24).map(|i| OptionLetter::ALL[i % 4]).collect();
        let answers = answers_from(&letters);

        assert!(is_complete(&answers, 24));
        let eval = Evaluation::of(&answers);
        assert_eq!(eval.scores, CategoryScores::from_counts([6, 6, 6, 6]));
        assert_eq!(eval.top, Category::ALL.to_vec());
        assert_eq!(eval.pair, None);
        assert!(eval.is_tied());
    }
}
