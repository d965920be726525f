//! # Daily Sampler
//!
//! Deterministic per-day selection over the question pool.
//!
//! The UTC calendar date, rendered as `YYYYMMDD`, is the sole entropy
//! source: it seeds a Fisher-Yates shuffle over a copy of the pool, so the
//! same (pool, date, count) triple yields the same selection on every call
//! and across process restarts. Determinism is pinned to the `rand`
//! version in Cargo.toml; bit-identical output across other
//! implementations is not a goal.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::models::{Question, RedactedQuestion};

/// Textual key for a calendar day, zero-padded `YYYYMMDD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

// The key is all digits, so it doubles as the numeric seed.
fn daily_seed(date: NaiveDate) -> u64 {
    date_key(date).parse().unwrap_or_default()
}

/// Selects up to `count` questions for `date`, in shuffled order.
///
/// Shuffles a copy; the pool's own ordering and ids are never touched. An
/// empty pool yields an empty selection and the caller decides how to
/// surface that.
pub fn select(pool: &[Question], date: NaiveDate, count: usize) -> Vec<Question> {
    let mut shuffled = pool.to_vec();
    let mut rng = StdRng::seed_from_u64(daily_seed(date));
    shuffled.shuffle(&mut rng);
    shuffled.truncate(count);

    shuffled
}

/// Drops the correct-choice field before a question list leaves the
/// process.
pub fn redact(questions: &[Question]) -> Vec<RedactedQuestion> {
    questions.iter().map(RedactedQuestion::from).collect()
}

/// Maps each question id to its correct-choice index. Entries with an
/// out-of-range index are skipped rather than failing the request.
pub fn answer_key(questions: &[Question]) -> BTreeMap<u32, usize> {
    questions
        .iter()
        .filter(|question| question.correct_choice_index < question.choices.len())
        .map(|question| (question.id, question.correct_choice_index))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn pool(size: u32) -> Vec<Question> {
        (1..=size)
            .map(|id| Question {
                id,
                text: format!("Question {id}"),
                choices: vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                    "d".to_string(),
                ],
                correct_choice_index: id as usize % 4,
                explanation: String::new(),
            })
            .collect()
    }

    fn day(key: &str) -> NaiveDate {
        NaiveDate::parse_from_str(key, "%Y%m%d").unwrap()
    }

    fn ids(questions: &[Question]) -> Vec<u32> {
        questions.iter().map(|question| question.id).collect()
    }

    #[test]
    fn key_is_zero_padded() {
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()), "20240307");
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), "20241231");
    }

    #[test]
    fn same_day_same_selection() {
        let pool = pool(10);
        let first = select(&pool, day("20240101"), 5);
        let second = select(&pool, day("20240101"), 5);

        assert_eq!(first.len(), 5);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn different_days_are_not_all_identical() {
        let pool = pool(20);
        let monday = ids(&select(&pool, day("20240101"), 5));

        let differs = (2..=9).any(|dom| {
            let date = NaiveDate::from_ymd_opt(2024, 1, dom).unwrap();
            ids(&select(&pool, date, 5)) != monday
        });
        assert!(differs);
    }

    #[test]
    fn selection_has_unique_ids_from_the_pool() {
        let pool = pool(10);
        let picked = ids(&select(&pool, day("20240101"), 5));

        assert_eq!(picked.len(), 5);
        let unique: BTreeSet<u32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 5);
        assert!(picked.iter().all(|id| (1..=10).contains(id)));
    }

    #[test]
    fn short_pool_returns_everything_once() {
        let pool = pool(3);
        let picked = ids(&select(&pool, day("20240101"), 5));

        assert_eq!(picked.len(), 3);
        let unique: BTreeSet<u32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn empty_pool_selects_nothing() {
        assert!(select(&[], day("20240101"), 5).is_empty());
    }

    #[test]
    fn pool_order_is_untouched() {
        let pool = pool(10);
        let before = ids(&pool);
        let _ = select(&pool, day("20240615"), 5);

        assert_eq!(ids(&pool), before);
    }

    #[test]
    fn redaction_never_serializes_the_answer() {
        let redacted = redact(&pool(4));
        let json = serde_json::to_string(&redacted).unwrap();

        assert_eq!(redacted.len(), 4);
        assert!(!json.contains("correctChoiceIndex"));
        assert!(json.contains("\"choices\""));
        assert!(json.contains("\"explanation\""));
    }

    #[test]
    fn answer_key_matches_the_selection() {
        let pool = pool(10);
        let selection = select(&pool, day("20240101"), 5);
        let key = answer_key(&selection);

        assert_eq!(key.len(), selection.len());
        for question in &selection {
            let original = pool.iter().find(|entry| entry.id == question.id).unwrap();
            assert_eq!(key[&question.id], original.correct_choice_index);
        }
    }

    #[test]
    fn answer_key_skips_out_of_range_entries() {
        let mut broken = pool(2);
        broken[1].correct_choice_index = 99;
        let key = answer_key(&broken);

        assert_eq!(key.len(), 1);
        assert!(key.contains_key(&1));
    }

    #[test]
    fn answer_key_serializes_ids_as_strings() {
        let json = serde_json::to_value(answer_key(&pool(2))).unwrap();

        assert!(json.get("1").is_some());
        assert!(json.get("2").is_some());
    }
}
