//! Batch analysis: two-pass scoring over a task list.
//!
//! Pass one scores every task in isolation and freezes the results into an
//! id-keyed snapshot. Pass two rescores with the dependency graph and that
//! snapshot, so a task's blockers have known urgency before the dependency
//! factor reads it. The snapshot is read-only in pass two; scoring order
//! within a pass cannot change any result.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::WorkCalendar;
use crate::error::AnalyzeError;
use crate::graph::DependencyGraph;
use crate::scorer::{score_task, GraphContext, ScoreResult};
use crate::strategy::Strategy;
use crate::task::Task;

/// One task's analysis output: the effective task fields merged with its
/// score, explanation, full score detail and warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTask {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Importance after defaulting and clamping.
    pub importance: i32,
    /// Hour estimate after defaulting.
    pub estimated_hours: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    pub score: f64,
    pub explanation: String,
    pub detail: ScoreResult,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Analyze a batch of tasks, returning results sorted by descending score.
///
/// Tasks without an id get their zero-based list position as id. If any
/// two tasks end up with the same id, explicit or assigned, the whole
/// batch is rejected: silently overwriting score-map entries would
/// misattribute scores and warnings.
///
/// Ties in the final ordering break by descending importance, then input
/// order.
pub fn analyze_tasks(
    tasks: &[Task],
    strategy_name: &str,
    today: NaiveDate,
    calendar: &WorkCalendar,
) -> Result<Vec<AnalyzedTask>, AnalyzeError> {
    let strategy = Strategy::by_name(strategy_name);

    let mut resolved: Vec<Task> = Vec::with_capacity(tasks.len());
    for (position, task) in tasks.iter().enumerate() {
        let mut task = task.clone();
        if task.id.is_none() {
            task.id = Some(position.to_string());
        }
        resolved.push(task);
    }

    let mut seen = BTreeSet::new();
    for task in &resolved {
        let id = task.id.clone().unwrap_or_default();
        if !seen.insert(id.clone()) {
            return Err(AnalyzeError::DuplicateTaskId { id });
        }
    }

    let entries: Vec<(String, Vec<String>)> = resolved
        .iter()
        .map(|t| (t.id.clone().unwrap_or_default(), t.dependencies.clone()))
        .collect();
    let graph = DependencyGraph::build(&entries);

    let tasks_by_id: BTreeMap<String, Task> = resolved
        .iter()
        .map(|t| (t.id.clone().unwrap_or_default(), t.clone()))
        .collect();

    tracing::debug!(tasks = resolved.len(), strategy = strategy.name, "first pass");
    let mut first_pass: BTreeMap<String, ScoreResult> = BTreeMap::new();
    for task in &resolved {
        let result = score_task(task, &strategy, today, calendar, None);
        first_pass.insert(task.id.clone().unwrap_or_default(), result);
    }

    tracing::debug!("second pass with dependency graph");
    let context = GraphContext {
        graph: &graph,
        tasks_by_id: &tasks_by_id,
        first_pass: &first_pass,
    };

    let mut results: Vec<AnalyzedTask> = Vec::with_capacity(resolved.len());
    for task in &resolved {
        let id = task.id.clone().unwrap_or_default();
        let detail = score_task(task, &strategy, today, calendar, Some(&context));

        let mut warnings = Vec::new();
        if graph.is_cyclic(&id) {
            warnings.push("circular dependency detected".to_string());
        }

        results.push(AnalyzedTask {
            id,
            title: task.title.clone(),
            due_date: task.due_date.clone(),
            importance: task.importance_clamped(),
            estimated_hours: task.hours_or_default(),
            dependencies: task.dependencies.clone(),
            score: detail.score,
            explanation: detail.explanation.clone(),
            detail,
            warnings,
        });
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.importance.cmp(&a.importance))
    });
    Ok(results)
}

/// Analyze a batch and keep only the top `limit` suggestions.
pub fn suggest_tasks(
    tasks: &[Task],
    strategy_name: &str,
    today: NaiveDate,
    calendar: &WorkCalendar,
    limit: usize,
) -> Result<Vec<AnalyzedTask>, AnalyzeError> {
    let mut results = analyze_tasks(tasks, strategy_name, today, calendar)?;
    results.truncate(limit);
    Ok(results)
}
