//! Single-task scoring: weighted factor combination and explanations.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::WorkCalendar;
use crate::factors::{dependency, effort, importance, urgency};
use crate::graph::DependencyGraph;
use crate::strategy::Strategy;
use crate::task::Task;

/// A factor's explanation makes it into the final text only when its
/// weighted contribution reaches this many points.
const EXPLANATION_THRESHOLD: f64 = 12.0;

/// Scoring output for one task. Immutable once returned.
///
/// `subscores` holds the raw factor values and `contributions` the
/// weight-multiplied share each factor added to the final score, both
/// rounded to one decimal and keyed by factor name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub explanation: String,
    pub subscores: BTreeMap<String, f64>,
    pub contributions: BTreeMap<String, f64>,
    pub strategy: String,
}

/// Batch context for graph-aware dependency scoring: the prebuilt graph,
/// an id index of the batch's tasks, and the immutable first-pass score
/// snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GraphContext<'a> {
    pub graph: &'a DependencyGraph,
    pub tasks_by_id: &'a BTreeMap<String, Task>,
    pub first_pass: &'a BTreeMap<String, ScoreResult>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score one task under a strategy.
///
/// With a [`GraphContext`] the dependency factor is graph-aware; without
/// one it falls back to a flat per-dependency proxy, which is what the
/// batch analyzer's first pass and the single-task entry point use.
pub fn score_task(
    task: &Task,
    strategy: &Strategy,
    today: NaiveDate,
    calendar: &WorkCalendar,
    context: Option<&GraphContext<'_>>,
) -> ScoreResult {
    let urgency = urgency::urgency_score(task.due(), today, strategy.tau, calendar);
    let importance = importance::importance_score(task.importance);
    let effort = effort::effort_score(task.estimated_hours, strategy.effort_mode);
    let dep = match context {
        Some(ctx) => dependency::dependency_score(
            task.id.as_deref().unwrap_or(""),
            ctx.graph,
            ctx.tasks_by_id,
            ctx.first_pass,
        ),
        None => dependency::proxy_dependency_score(&task.dependencies),
    };

    let factors = [
        ("urgency", strategy.urgency_weight, urgency),
        ("importance", strategy.importance_weight, importance),
        ("effort", strategy.effort_weight, effort),
        ("dependency", strategy.dependency_weight, dep),
    ];

    let total: f64 = factors.iter().map(|(_, weight, f)| weight * f.value).sum();
    let score = total.clamp(0.0, 100.0);

    let mut subscores = BTreeMap::new();
    let mut contributions = BTreeMap::new();
    for (name, weight, factor) in &factors {
        subscores.insert(name.to_string(), round1(factor.value));
        contributions.insert(name.to_string(), round1(weight * factor.value));
    }

    // Rank factors by contribution so the explanation leads with whatever
    // actually drove the score.
    let mut ranked: Vec<_> = factors
        .iter()
        .map(|(name, weight, factor)| (*name, weight * factor.value, factor))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut parts = Vec::new();
    for (name, contribution, factor) in &ranked {
        let include = if *name == "dependency" {
            factor.value != 0.0
        } else {
            *contribution >= EXPLANATION_THRESHOLD
        };
        if include {
            parts.push(factor.explanation.clone());
        }
    }
    let explanation = if parts.is_empty() {
        "standard priority".to_string()
    } else {
        parts.join("; ")
    };

    ScoreResult {
        score,
        explanation,
        subscores,
        contributions,
        strategy: strategy.name.to_string(),
    }
}

/// Score a single task by strategy name, with no batch context.
///
/// This is the graph-free entry point for callers scoring one task in
/// isolation. Unknown strategy names resolve to the default preset.
pub fn score_single(
    task: &Task,
    strategy_name: &str,
    today: NaiveDate,
    calendar: &WorkCalendar,
) -> ScoreResult {
    let strategy = Strategy::by_name(strategy_name);
    score_task(task, &strategy, today, calendar, None)
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
    fn score_is_a_weighted_sum_of_subscores() {
        let cal = WorkCalendar::weekends_only();
        let task = Task::new("t").with_importance(10).with_hours(0.0);
        let result = score_single(&task, "smart", today(), &cal);

        // urgency 20 (no deadline), importance 100, effort 100, dependency 0.
        assert_eq!(result.subscores["urgency"], 20.0);
        assert_eq!(result.subscores["importance"], 100.0);
        assert_eq!(result.subscores["effort"], 100.0);
        assert_eq!(result.subscores["dependency"], 0.0);
        assert_eq!(result.contributions["urgency"], 8.0);
        assert_eq!(result.contributions["importance"], 30.0);
        assert_eq!(result.contributions["effort"], 20.0);
        assert!((result.score - 58.0).abs() < 1e-9);
        assert_eq!(result.strategy, "smart");
    }

    #[test]
    fn unknown_strategy_scores_like_smart() {
        let cal = WorkCalendar::weekends_only();
        let task = Task::new("t").with_importance(8).with_due_date("2026-03-04");
        let smart = score_single(&task, "smart", today(), &cal);
        let unknown = score_single(&task, "definitely-not-a-strategy", today(), &cal);
        assert_eq!(smart.score, unknown.score);
        assert_eq!(unknown.strategy, "smart");
    }

    #[test]
    fn explanation_ranks_dominant_factors_first() {
        let cal = WorkCalendar::weekends_only();
        let task = Task::new("t")
            .with_importance(10)
            .with_hours(1.0)
            .with_due_date("2026-03-02");
        let result = score_single(&task, "smart", today(), &cal);
        // importance contributes 30, urgency 20, effort ~18.8.
        let positions: Vec<usize> = ["importance", "due today", "quick win"]
            .iter()
            .map(|s| result.explanation.find(s).unwrap())
            .collect();
        assert!(positions[0] < positions[1]);
        assert!(positions[1] < positions[2]);
    }

    #[test]
    fn small_contributions_are_filtered_from_explanation() {
        let cal = WorkCalendar::weekends_only();
        // Low importance, no deadline, long task: nothing clears the bar.
        let task = Task::new("t").with_importance(1).with_hours(100.0);
        let result = score_single(&task, "fastest", today(), &cal);
        assert_eq!(result.explanation, "standard priority");
    }

    #[test]
    fn dependency_text_appears_despite_small_weight() {
        let cal = WorkCalendar::weekends_only();
        let task = Task::new("t")
            .with_importance(1)
            .with_hours(100.0)
            .with_dependencies(["x"]);
        let result = score_single(&task, "fastest", today(), &cal);
        // Proxy subscore 15, contribution 1.5: included because nonzero.
        assert_eq!(result.explanation, "blocked by 1 task");
    }

    #[test]
    fn due_date_string_is_parsed_leniently() {
        let cal = WorkCalendar::weekends_only();
        let garbled = Task::new("t").with_due_date("next tuesday-ish");
        let absent = Task::new("t");
        let a = score_single(&garbled, "smart", today(), &cal);
        let b = score_single(&absent, "smart", today(), &cal);
        assert_eq!(a.subscores["urgency"], 20.0);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn extreme_inputs_stay_clamped() {
        let cal = WorkCalendar::weekends_only();
        let task = Task::new("t")
            .with_importance(10)
            .with_hours(0.0)
            .with_due_date("1990-01-01");
        let result = score_single(&task, "deadline", today(), &cal);
        // urgency saturates at 100; weighted total lands at 90, in range.
        assert!(result.score <= 100.0);
        assert!((result.score - 90.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn final_score_is_always_in_range(
            importance in -100i32..100,
            hours in -10.0f64..500.0,
            due_offset in -2000i64..2000,
            strategy in prop::sample::select(vec!["smart", "deadline", "fastest", "impact", "bogus"]),
        ) {
            let cal = WorkCalendar::default();
            let due = today() + chrono::Duration::days(due_offset);
            let task = Task::new("t")
                .with_importance(importance)
                .with_hours(hours)
                .with_due_date(due.format("%Y-%m-%d").to_string());
            let result = score_single(&task, strategy, today(), &cal);
            prop_assert!((0.0..=100.0).contains(&result.score));
        }
    }
}
