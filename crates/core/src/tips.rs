//! Daily security tip rotation.
//!
//! The tip of the day is a pure function of the date: the catalog index is
//! the proleptic-Gregorian day number modulo the catalog size, so every user
//! sees the same tip on a given day and the rotation needs no stored state.

use chrono::{Datelike, NaiveDate};

/// Served when the tip catalog is empty.
pub const FALLBACK_TIP: &str = "Stay curious and keep learning about cyber safety!";

/// Catalog index of the tip for `date`, or `None` for an empty catalog.
pub fn daily_tip_index(date: NaiveDate, tip_count: usize) -> Option<usize> {
    if tip_count == 0 {
        return None;
    }
    let ordinal = date.num_days_from_ce() as i64;
    Some(ordinal.rem_euclid(tip_count as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_stable_for_a_given_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(daily_tip_index(date, 7), daily_tip_index(date, 7));
    }

    #[test]
    fn index_advances_by_one_each_day() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let tomorrow = today.succ_opt().unwrap();
        let a = daily_tip_index(today, 7).unwrap();
        let b = daily_tip_index(tomorrow, 7).unwrap();
        assert_eq!((a + 1) % 7, b);
    }

    #[test]
    fn index_always_within_catalog() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        for count in 1..=10 {
            assert!(daily_tip_index(date, count).unwrap() < count);
        }
    }

    #[test]
    fn empty_catalog_has_no_index() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(daily_tip_index(date, 0), None);
    }
}
