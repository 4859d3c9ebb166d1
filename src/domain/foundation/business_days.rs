//! Business-day calendar.
//!
//! A business day is Monday through Friday; there is no holiday calendar.
//! The three counting policies correspond to the distinct aging call sites,
//! which must not be mixed up: an open step counts days strictly after its
//! start, a finished step counts both endpoints, and a step feeding an
//! accumulated total skips its start day so the seed day is not counted
//! twice.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How endpoints participate in a business-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    /// Business days strictly after `start`, up to and including `end`.
    /// Used for "how long has this open step been running".
    HalfOpenForward,
    /// Business days from `start` through `end`, both endpoints counted
    /// when they fall on business days. Used for total process aging.
    ClosedInclusive,
    /// Like [`CountPolicy::ClosedInclusive`] but the start day itself is
    /// never counted. Used when a started step contributes to an
    /// accumulated total.
    ExcludeStart,
}

/// Whether the given date falls on a Monday–Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts business days between two dates under the given policy.
///
/// Symmetric in its result: when `end < start` the pair is swapped before
/// counting, so the caller never has to order the endpoints.
pub fn business_days_between(start: NaiveDate, end: NaiveDate, policy: CountPolicy) -> i64 {
    let (start, end) = if end < start { (end, start) } else { (start, end) };

    let mut count = 0i64;
    let mut cursor = start;
    while cursor <= end {
        if is_business_day(cursor) {
            count += 1;
        }
        cursor = match cursor.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    match policy {
        CountPolicy::ClosedInclusive => count,
        CountPolicy::HalfOpenForward | CountPolicy::ExcludeStart => {
            if is_business_day(start) {
                count - 1
            } else {
                count
            }
        }
    }
}

/// [`business_days_between`] floored at one day.
///
/// A step that has started can never contribute zero days to a duration,
/// even when it began today or spans only a weekend.
pub fn business_days_at_least_one(start: NaiveDate, end: NaiveDate, policy: CountPolicy) -> i64 {
    business_days_between(start, end, policy).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_business_days() {
        assert!(is_business_day(date(2024, 6, 3))); // Monday
        assert!(is_business_day(date(2024, 6, 7))); // Friday
        assert!(!is_business_day(date(2024, 6, 8))); // Saturday
        assert!(!is_business_day(date(2024, 6, 9))); // Sunday
    }

    #[test]
    fn closed_inclusive_counts_both_endpoints() {
        // Mon..Fri of one week
        assert_eq!(
            business_days_between(date(2024, 6, 3), date(2024, 6, 7), CountPolicy::ClosedInclusive),
            5
        );
        // Same day, a weekday
        assert_eq!(
            business_days_between(date(2024, 6, 3), date(2024, 6, 3), CountPolicy::ClosedInclusive),
            1
        );
        // Weekend only
        assert_eq!(
            business_days_between(date(2024, 6, 8), date(2024, 6, 9), CountPolicy::ClosedInclusive),
            0
        );
    }

    #[test]
    fn half_open_forward_skips_the_start_day() {
        // Mon 2024-06-03 -> Mon 2024-06-10: Tue..Fri + Mon = 5
        assert_eq!(
            business_days_between(date(2024, 6, 3), date(2024, 6, 10), CountPolicy::HalfOpenForward),
            5
        );
        assert_eq!(
            business_days_between(date(2024, 6, 3), date(2024, 6, 3), CountPolicy::HalfOpenForward),
            0
        );
    }

    #[test]
    fn exclude_start_never_counts_the_seed_day() {
        assert_eq!(
            business_days_between(date(2024, 6, 3), date(2024, 6, 7), CountPolicy::ExcludeStart),
            4
        );
        // Saturday start contributes nothing to subtract
        assert_eq!(
            business_days_between(date(2024, 6, 8), date(2024, 6, 10), CountPolicy::ExcludeStart),
            1
        );
    }

    #[test]
    fn swapped_endpoints_yield_the_same_count() {
        let a = date(2024, 6, 3);
        let b = date(2024, 6, 21);
        assert_eq!(
            business_days_between(a, b, CountPolicy::ClosedInclusive),
            business_days_between(b, a, CountPolicy::ClosedInclusive),
        );
    }

    #[test]
    fn floored_duration_is_never_zero() {
        let sat = date(2024, 6, 8);
        let sun = date(2024, 6, 9);
        assert_eq!(business_days_at_least_one(sat, sun, CountPolicy::ClosedInclusive), 1);
        let mon = date(2024, 6, 3);
        assert_eq!(business_days_at_least_one(mon, mon, CountPolicy::ExcludeStart), 1);
    }

    proptest! {
        #[test]
        fn closed_inclusive_is_symmetric(a in 0u64..2000, b in 0u64..2000) {
            let base = date(2022, 1, 1);
            let da = base.checked_add_days(Days::new(a)).unwrap();
            let db = base.checked_add_days(Days::new(b)).unwrap();
            prop_assert_eq!(
                business_days_between(da, db, CountPolicy::ClosedInclusive),
                business_days_between(db, da, CountPolicy::ClosedInclusive)
            );
        }

        #[test]
        fn never_negative(a in 0u64..2000, b in 0u64..2000) {
            let base = date(2022, 1, 1);
            let da = base.checked_add_days(Days::new(a)).unwrap();
            let db = base.checked_add_days(Days::new(b)).unwrap();
            for policy in [CountPolicy::HalfOpenForward, CountPolicy::ClosedInclusive, CountPolicy::ExcludeStart] {
                prop_assert!(business_days_between(da, db, policy) >= 0);
            }
        }
    }
}
