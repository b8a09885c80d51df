//! "Recommended next module" selector.
//!
//! A greedy single-pass heuristic over a user's quiz history: find the
//! category with the lowest cumulative success rate and pick the first
//! module there the user has not completed. Deliberately ignores difficulty,
//! estimated duration, and recency.

use std::collections::HashSet;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// One past quiz attempt, tagged with the owning module's category.
#[derive(Debug, Clone)]
pub struct CategoryAttempt {
    pub category: String,
    pub score: i32,
    pub total_questions: i32,
}

/// A module as seen by the selector.
#[derive(Debug, Clone)]
pub struct CandidateModule {
    pub id: DbId,
    pub category: String,
    pub order_index: i32,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick the module to present as "recommended next". Returns `None` only
/// when the user has completed every active module (or none exist).
///
/// Selection order:
///
/// 1. No attempt history → lowest-order-index active module (cold start,
///    regardless of completion state).
/// 2. Accumulate correct/total per category across all attempts; the
///    category with the lowest success rate wins, ties broken by
///    first-seen order in `attempts`.
/// 3. First active non-completed module in that category, by order index.
/// 4. Fallback: first active non-completed module overall.
pub fn recommend_next(
    attempts: &[CategoryAttempt],
    modules: &[CandidateModule],
    completed: &HashSet<DbId>,
) -> Option<DbId> {
    let mut active: Vec<&CandidateModule> = modules.iter().filter(|m| m.is_active).collect();
    active.sort_by_key(|m| m.order_index);

    if attempts.is_empty() {
        return active.first().map(|m| m.id);
    }

    // Per-category (correct, total) tallies. A Vec keeps first-seen order so
    // rate ties resolve deterministically.
    let mut tallies: Vec<(String, (i32, i32))> = Vec::new();
    for attempt in attempts {
        match tallies.iter_mut().find(|(c, _)| c == &attempt.category) {
            Some((_, tally)) => {
                tally.0 += attempt.score;
                tally.1 += attempt.total_questions;
            }
            None => tallies.push((
                attempt.category.clone(),
                (attempt.score, attempt.total_questions),
            )),
        }
    }

    let mut weakest: Option<(&str, f64)> = None;
    for (category, (correct, total)) in &tallies {
        let rate = if *total > 0 {
            *correct as f64 / *total as f64
        } else {
            0.0
        };
        match weakest {
            Some((_, best)) if rate >= best => {}
            _ => weakest = Some((category, rate)),
        }
    }
    let weakest_category = weakest.map(|(c, _)| c)?;

    active
        .iter()
        .find(|m| m.category == weakest_category && !completed.contains(&m.id))
        .or_else(|| active.iter().find(|m| !completed.contains(&m.id)))
        .map(|m| m.id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: DbId, category: &str, order_index: i32) -> CandidateModule {
        CandidateModule {
            id,
            category: category.to_string(),
            order_index,
            is_active: true,
        }
    }

    fn attempt(category: &str, score: i32, total: i32) -> CategoryAttempt {
        CategoryAttempt {
            category: category.to_string(),
            score,
            total_questions: total,
        }
    }

    fn catalog() -> Vec<CandidateModule> {
        vec![
            module(1, "Password Security", 1),
            module(2, "Phishing Prevention", 2),
            module(3, "Authentication", 3),
            module(4, "Social Engineering", 4),
            module(5, "Data Privacy", 5),
        ]
    }

    #[test]
    fn cold_start_returns_lowest_order_active_module() {
        let got = recommend_next(&[], &catalog(), &HashSet::new());
        assert_eq!(got, Some(1));
    }

    #[test]
    fn cold_start_skips_inactive_modules() {
        let mut modules = catalog();
        modules[0].is_active = false;
        let got = recommend_next(&[], &modules, &HashSet::new());
        assert_eq!(got, Some(2));
    }

    #[test]
    fn cold_start_ignores_completion_state() {
        let completed: HashSet<DbId> = [1].into_iter().collect();
        let got = recommend_next(&[], &catalog(), &completed);
        assert_eq!(got, Some(1));
    }

    #[test]
    fn weakest_category_wins() {
        // Phishing Prevention at 40%, Password Security at 90%.
        let attempts = vec![
            attempt("Phishing Prevention", 4, 10),
            attempt("Password Security", 9, 10),
        ];
        let got = recommend_next(&attempts, &catalog(), &HashSet::new());
        assert_eq!(got, Some(2));
    }

    #[test]
    fn weakest_category_skips_completed_modules() {
        let modules = vec![
            module(1, "Password Security", 1),
            module(2, "Phishing Prevention", 2),
            module(3, "Phishing Prevention", 3),
        ];
        let attempts = vec![
            attempt("Phishing Prevention", 4, 10),
            attempt("Password Security", 9, 10),
        ];
        let completed: HashSet<DbId> = [2].into_iter().collect();
        let got = recommend_next(&attempts, &modules, &completed);
        assert_eq!(got, Some(3));
    }

    #[test]
    fn rate_ties_break_by_first_seen_category() {
        let attempts = vec![
            attempt("Authentication", 5, 10),
            attempt("Data Privacy", 5, 10),
        ];
        let got = recommend_next(&attempts, &catalog(), &HashSet::new());
        assert_eq!(got, Some(3));
    }

    #[test]
    fn attempts_in_same_category_accumulate() {
        // Password Security: 9/10 + 1/10 = 50%; Authentication: 6/10 = 60%.
        let attempts = vec![
            attempt("Password Security", 9, 10),
            attempt("Authentication", 6, 10),
            attempt("Password Security", 1, 10),
        ];
        let got = recommend_next(&attempts, &catalog(), &HashSet::new());
        assert_eq!(got, Some(1));
    }

    #[test]
    fn falls_back_outside_weakest_when_all_there_complete() {
        let attempts = vec![
            attempt("Phishing Prevention", 0, 10),
            attempt("Password Security", 10, 10),
        ];
        let completed: HashSet<DbId> = [2].into_iter().collect();
        let got = recommend_next(&attempts, &catalog(), &completed);
        assert_eq!(got, Some(1));
    }

    #[test]
    fn none_when_everything_is_completed() {
        let attempts = vec![attempt("Password Security", 2, 10)];
        let completed: HashSet<DbId> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(recommend_next(&attempts, &catalog(), &completed), None);
    }

    #[test]
    fn none_when_catalog_is_empty() {
        assert_eq!(recommend_next(&[], &[], &HashSet::new()), None);
    }
}
