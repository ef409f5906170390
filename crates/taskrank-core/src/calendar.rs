//! Working-day calendar.
//!
//! Urgency is measured in working days, so the engine needs to know which
//! calendar days count. The holiday set lives on the calendar value rather
//! than in a global, so callers and tests can substitute their own.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Parse a strict `YYYY-MM-DD` date string. Anything else is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Immutable working-day calendar: weekends plus a fixed holiday set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl Default for WorkCalendar {
    /// Ships a small fixed-date holiday set (New Year's Day, July 4th,
    /// Christmas for 2025-2027).
    fn default() -> Self {
        const FIXED: &[(i32, u32, u32)] = &[
            (2025, 1, 1),
            (2025, 7, 4),
            (2025, 12, 25),
            (2026, 1, 1),
            (2026, 7, 4),
            (2026, 12, 25),
            (2027, 1, 1),
            (2027, 7, 4),
            (2027, 12, 25),
        ];
        let holidays = FIXED
            .iter()
            .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
            .collect();
        Self { holidays }
    }
}

impl WorkCalendar {
    /// Calendar with a caller-supplied holiday set.
    pub fn with_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Calendar with no holidays at all (weekends only).
    pub fn weekends_only() -> Self {
        Self {
            holidays: BTreeSet::new(),
        }
    }

    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        self.holidays.contains(&day)
    }

    /// A working day is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, day: NaiveDate) -> bool {
        !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(day)
    }

    /// Count working days between `start` and `end`, walking day by day.
    ///
    /// `start` itself is never counted, so a task due tomorrow is one
    /// working day out and a task due today is zero. The function is
    /// antisymmetric: `count_working_days(a, b) == -count_working_days(b, a)`.
    pub fn count_working_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if start == end {
            return 0;
        }
        if start > end {
            return -self.count_working_days(end, start);
        }
        let mut count = 0;
        let mut day = start;
        while day < end {
            day += Duration::days(1);
            if self.is_working_day(day) {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_not_working_days() {
        let cal = WorkCalendar::weekends_only();
        // 2026-03-07 is a Saturday, 2026-03-08 a Sunday.
        assert!(!cal.is_working_day(date(2026, 3, 7)));
        assert!(!cal.is_working_day(date(2026, 3, 8)));
        assert!(cal.is_working_day(date(2026, 3, 9)));
    }

    #[test]
    fn holidays_are_not_working_days() {
        let cal = WorkCalendar::default();
        // 2026-12-25 is a Friday.
        assert!(!cal.is_working_day(date(2026, 12, 25)));
        assert!(cal.is_working_day(date(2026, 12, 24)));
    }

    #[test]
    fn custom_holiday_set_replaces_default() {
        let cal = WorkCalendar::with_holidays([date(2026, 3, 9)]);
        assert!(!cal.is_working_day(date(2026, 3, 9)));
        // Default holidays are absent from custom calendars.
        assert!(cal.is_working_day(date(2026, 12, 25)));
    }

    #[test]
    fn same_day_counts_zero() {
        let cal = WorkCalendar::weekends_only();
        assert_eq!(cal.count_working_days(date(2026, 3, 2), date(2026, 3, 2)), 0);
    }

    #[test]
    fn counts_skip_weekends() {
        let cal = WorkCalendar::weekends_only();
        // Monday to next Monday: Tue-Fri plus Monday itself.
        assert_eq!(cal.count_working_days(date(2026, 3, 2), date(2026, 3, 9)), 5);
        // Monday to Tuesday is one working day.
        assert_eq!(cal.count_working_days(date(2026, 3, 2), date(2026, 3, 3)), 1);
        // Friday to Monday crosses only the weekend.
        assert_eq!(cal.count_working_days(date(2026, 3, 6), date(2026, 3, 9)), 1);
    }

    #[test]
    fn counts_skip_holidays() {
        let cal = WorkCalendar::with_holidays([date(2026, 3, 4)]);
        // Mon -> Fri normally 4, minus the Wednesday holiday.
        assert_eq!(cal.count_working_days(date(2026, 3, 2), date(2026, 3, 6)), 3);
    }

    #[test]
    fn reversed_range_negates() {
        let cal = WorkCalendar::weekends_only();
        assert_eq!(cal.count_working_days(date(2026, 3, 9), date(2026, 3, 2)), -5);
    }

    #[test]
    fn parse_date_is_strict() {
        assert_eq!(parse_date("2026-03-02"), Some(date(2026, 3, 2)));
        assert_eq!(parse_date(" 2026-03-02 "), Some(date(2026, 3, 2)));
        assert_eq!(parse_date("03/02/2026"), None);
        assert_eq!(parse_date("2026-13-40"), None);
        assert_eq!(parse_date(""), None);
    }

    proptest! {
        #[test]
        fn count_is_antisymmetric(a in 0i64..2000, b in 0i64..2000) {
            let epoch = date(2025, 1, 1);
            let d1 = epoch + Duration::days(a);
            let d2 = epoch + Duration::days(b);
            let cal = WorkCalendar::default();
            prop_assert_eq!(
                cal.count_working_days(d1, d2),
                -cal.count_working_days(d2, d1)
            );
        }

        #[test]
        fn count_bounded_by_calendar_days(a in 0i64..2000, b in 0i64..2000) {
            let epoch = date(2025, 1, 1);
            let d1 = epoch + Duration::days(a);
            let d2 = epoch + Duration::days(b);
            let cal = WorkCalendar::default();
            prop_assert!(cal.count_working_days(d1, d2).abs() <= (a - b).abs());
        }
    }
}
