//! Urgency factor: time pressure from the due date.

use chrono::NaiveDate;

use super::FactorScore;
use crate::calendar::WorkCalendar;

/// Score for tasks with no deadline at all.
const NO_DEADLINE_SCORE: f64 = 20.0;

/// Working days overdue at which the overdue penalty saturates.
const OVERDUE_SATURATION_DAYS: f64 = 20.0;

/// Numerically stable logistic function.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Score time pressure on a 0-100 scale.
///
/// The base curve is `100 * sigmoid(-working_days / tau)`: 50 at the due
/// date, rising as the deadline approaches and falling off for far-future
/// dates. Overdue tasks get a penalty multiplier of up to 2x, clamped to
/// 100, so "a month late" saturates instead of growing without bound.
pub fn urgency_score(
    due: Option<NaiveDate>,
    today: NaiveDate,
    tau: f64,
    calendar: &WorkCalendar,
) -> FactorScore {
    let Some(due) = due else {
        return FactorScore::new(NO_DEADLINE_SCORE, "no deadline set");
    };

    let working_days = calendar.count_working_days(today, due);
    let calendar_days = (due - today).num_days();
    let base = 100.0 * sigmoid(-(working_days as f64) / tau);

    if working_days < 0 {
        let overdue = -working_days;
        let multiplier = 1.0 + 0.5 * (overdue as f64 / OVERDUE_SATURATION_DAYS).min(2.0);
        let plural = if overdue == 1 { "" } else { "s" };
        return FactorScore::new(
            (base * multiplier).min(100.0),
            format!("overdue by {overdue} working day{plural}"),
        );
    }

    let explanation = match working_days {
        0 => "due today".to_string(),
        1 => "due tomorrow".to_string(),
        n => format!("due in {n} working days ({calendar_days} calendar days)"),
    };
    FactorScore::new(base, explanation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-03-02 is a Monday.
    fn today() -> NaiveDate {
        date(2026, 3, 2)
    }

    #[test]
    fn no_deadline_is_a_fixed_low_score() {
        let cal = WorkCalendar::weekends_only();
        let score = urgency_score(None, today(), 5.0, &cal);
        assert_eq!(score.value, 20.0);
        assert_eq!(score.explanation, "no deadline set");
    }

    #[test]
    fn due_today_scores_fifty() {
        let cal = WorkCalendar::weekends_only();
        let score = urgency_score(Some(today()), today(), 5.0, &cal);
        assert!((score.value - 50.0).abs() < 1e-9);
        assert_eq!(score.explanation, "due today");
    }

    #[test]
    fn due_tomorrow_reports_tomorrow() {
        let cal = WorkCalendar::weekends_only();
        let score = urgency_score(Some(date(2026, 3, 3)), today(), 5.0, &cal);
        assert_eq!(score.explanation, "due tomorrow");
        assert!(score.value < 50.0);
    }

    #[test]
    fn future_dates_report_both_day_counts() {
        let cal = WorkCalendar::weekends_only();
        // Monday -> next Tuesday: 6 working days, 8 calendar days.
        let score = urgency_score(Some(date(2026, 3, 10)), today(), 5.0, &cal);
        assert_eq!(score.explanation, "due in 6 working days (8 calendar days)");
    }

    #[test]
    fn overdue_applies_penalty_multiplier() {
        let cal = WorkCalendar::weekends_only();
        // Friday before a Monday "today": one working day overdue.
        let overdue = urgency_score(Some(date(2026, 2, 27)), today(), 5.0, &cal);
        assert_eq!(overdue.explanation, "overdue by 1 working day");
        let base = 100.0 * sigmoid(1.0 / 5.0);
        assert!((overdue.value - base * 1.025).abs() < 1e-9);
    }

    #[test]
    fn far_overdue_saturates_at_one_hundred() {
        let cal = WorkCalendar::weekends_only();
        let score = urgency_score(Some(date(2025, 3, 3)), today(), 5.0, &cal);
        assert_eq!(score.value, 100.0);
        assert!(score.explanation.starts_with("overdue by"));
    }

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert_eq!(sigmoid(1e6), 1.0);
        assert_eq!(sigmoid(-1e6), 0.0);
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn earlier_deadlines_never_score_lower(offset1 in 0i64..500, extra in 0i64..500) {
            let cal = WorkCalendar::default();
            let d1 = today() + chrono::Duration::days(offset1);
            let d2 = d1 + chrono::Duration::days(extra);
            let s1 = urgency_score(Some(d1), today(), 5.0, &cal);
            let s2 = urgency_score(Some(d2), today(), 5.0, &cal);
            prop_assert!(s1.value >= s2.value);
        }

        #[test]
        fn more_overdue_never_scores_lower(k in 1i64..500, extra in 0i64..500) {
            let cal = WorkCalendar::default();
            let d1 = today() - chrono::Duration::days(k);
            let d2 = d1 - chrono::Duration::days(extra);
            let s1 = urgency_score(Some(d1), today(), 5.0, &cal);
            let s2 = urgency_score(Some(d2), today(), 5.0, &cal);
            prop_assert!(s2.value >= s1.value);
            prop_assert!(s2.value <= 100.0);
        }
    }
}
