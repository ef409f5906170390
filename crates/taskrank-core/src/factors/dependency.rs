//! Dependency factor: position in the batch's dependency graph.

use std::collections::BTreeMap;

use super::FactorScore;
use crate::graph::DependencyGraph;
use crate::scorer::ScoreResult;
use crate::task::Task;

/// Fixed score for tasks caught in a dependency cycle. Deliberately
/// mediocre: a cycle is a data problem, not a reason to bury or boost the
/// task.
pub const CYCLE_SCORE: f64 = 25.0;

/// Urgency assumed for a blocker with no first-pass score.
const FALLBACK_BLOCKER_URGENCY: f64 = 50.0;

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Graph-aware dependency score.
///
/// Unblocking other tasks raises the score (20 points per dependent,
/// capped at 100). Being blocked lowers it: each blocker contributes a
/// penalty weighted by its first-pass urgency, its importance, and its
/// size, and the total deduction is capped at 50. The result may be
/// negative; only the final combined score is clamped.
pub fn dependency_score(
    task_id: &str,
    graph: &DependencyGraph,
    tasks_by_id: &BTreeMap<String, Task>,
    first_pass: &BTreeMap<String, ScoreResult>,
) -> FactorScore {
    if graph.is_cyclic(task_id) {
        return FactorScore::new(CYCLE_SCORE, "part of a circular dependency");
    }

    let unblocked = graph.unblocks_tasks(task_id, tasks_by_id);
    let unblocking_benefit = (20.0 * unblocked.len() as f64).min(100.0);

    let blockers = graph.blocked_by_tasks(task_id, tasks_by_id);
    let mut blocking_penalty = 0.0;
    for blocker in &blockers {
        let blocker_id = blocker.id.as_deref().unwrap_or("");
        let urgency = first_pass
            .get(blocker_id)
            .and_then(|r| r.subscores.get("urgency"))
            .copied()
            .unwrap_or(FALLBACK_BLOCKER_URGENCY);
        let block_weight = (urgency / 100.0).sqrt()
            * (blocker.importance_clamped() as f64 / 10.0).powf(1.5);
        let effort_penalty = 1.0 + blocker.hours_or_default() / 20.0;
        blocking_penalty += block_weight * effort_penalty;
    }

    let value = unblocking_benefit - (10.0 * blocking_penalty).min(50.0);

    let mut parts = Vec::new();
    if !unblocked.is_empty() {
        parts.push(format!(
            "unblocks {} task{}",
            unblocked.len(),
            plural(unblocked.len())
        ));
    }
    if !blockers.is_empty() {
        parts.push(format!(
            "blocked by {} task{}",
            blockers.len(),
            plural(blockers.len())
        ));
    }
    let explanation = if parts.is_empty() {
        "no dependencies".to_string()
    } else {
        parts.join(", ")
    };
    FactorScore::new(value, explanation)
}

/// Graph-free proxy used for first-pass and single-task scoring, where no
/// batch context exists: a small flat boost per declared dependency.
pub fn proxy_dependency_score(dependencies: &[String]) -> FactorScore {
    if dependencies.is_empty() {
        return FactorScore::new(0.0, "no dependencies");
    }
    let n = dependencies.len();
    FactorScore::new(
        (15.0 * n as f64).min(50.0),
        format!("blocked by {n} task{}", plural(n)),
    )
}
