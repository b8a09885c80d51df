//! Admin analytics math.
//!
//! The storage layer produces grouped counts; the rate computation and
//! ordering live here. Rates are fractions in `[0.0, 1.0]`.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Weak areas
// ---------------------------------------------------------------------------

/// Grouped attempt counts for one module category.
#[derive(Debug, Clone)]
pub struct CategoryCounts {
    pub category: String,
    pub failed_attempts: i64,
    pub total_attempts: i64,
}

/// One row of the weak-area report.
#[derive(Debug, Clone, Serialize)]
pub struct WeakArea {
    pub category: String,
    pub failure_rate: f64,
    pub attempt_count: i64,
}

/// Turn grouped counts into the weak-area report: failure rate per category,
/// sorted descending. Categories with zero attempts never arrive (grouping
/// runs over attempts), so every rate is well-defined.
pub fn weak_areas(rows: Vec<CategoryCounts>) -> Vec<WeakArea> {
    let mut areas: Vec<WeakArea> = rows
        .into_iter()
        .map(|row| WeakArea {
            failure_rate: if row.total_attempts > 0 {
                row.failed_attempts as f64 / row.total_attempts as f64
            } else {
                0.0
            },
            attempt_count: row.total_attempts,
            category: row.category,
        })
        .collect();

    // Stable sort: equal rates keep the grouping order.
    areas.sort_by(|a, b| {
        b.failure_rate
            .partial_cmp(&a.failure_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    areas
}

// ---------------------------------------------------------------------------
// Completion rate
// ---------------------------------------------------------------------------

/// Fraction of users who have completed at least one module. `0.0` when the
/// user table is empty.
pub fn completion_rate(completed_users: i64, total_users: i64) -> f64 {
    if total_users > 0 {
        completed_users as f64 / total_users as f64
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(category: &str, failed: i64, total: i64) -> CategoryCounts {
        CategoryCounts {
            category: category.to_string(),
            failed_attempts: failed,
            total_attempts: total,
        }
    }

    // -- weak_areas --

    #[test]
    fn weak_areas_computes_rates_per_category() {
        let report = weak_areas(vec![
            counts("Password Security", 1, 4),
            counts("Phishing Prevention", 3, 4),
        ]);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].category, "Phishing Prevention");
        assert!((report[0].failure_rate - 0.75).abs() < f64::EPSILON);
        assert_eq!(report[0].attempt_count, 4);
        assert_eq!(report[1].category, "Password Security");
        assert!((report[1].failure_rate - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn weak_areas_sorts_descending_by_rate() {
        let report = weak_areas(vec![
            counts("A", 0, 10),
            counts("B", 10, 10),
            counts("C", 5, 10),
        ]);
        let order: Vec<&str> = report.iter().map(|w| w.category.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn weak_areas_empty_input_gives_empty_report() {
        assert!(weak_areas(vec![]).is_empty());
    }

    #[test]
    fn weak_areas_equal_rates_keep_input_order() {
        let report = weak_areas(vec![counts("First", 2, 4), counts("Second", 3, 6)]);
        assert_eq!(report[0].category, "First");
        assert_eq!(report[1].category, "Second");
    }

    // -- completion_rate --

    #[test]
    fn completion_rate_is_a_fraction() {
        assert!((completion_rate(1, 4) - 0.25).abs() < f64::EPSILON);
        assert!((completion_rate(4, 4) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completion_rate_zero_users_is_zero() {
        assert_eq!(completion_rate(0, 0), 0.0);
    }
}
