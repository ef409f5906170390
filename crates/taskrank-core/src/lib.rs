//! # Taskrank Core Library
//!
//! Deterministic priority scoring for to-do tasks. Given a task's due
//! date, importance, effort estimate and dependency links plus a named
//! weighting strategy, the engine produces a 0-100 score, per-factor
//! subscores and a human-readable explanation. A batch analyzer builds a
//! dependency graph over a whole task list, detects cycles, and rescores
//! every task with graph awareness.
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state,
//! and none of the scoring operations can fail. Anomalous inputs
//! (malformed dates, out-of-range ratings, unknown strategy names,
//! dangling or circular dependencies) are absorbed into defaults,
//! warnings, or explanation text. The one hard error is a batch with
//! colliding task ids.
//!
//! ## Key components
//!
//! - [`Task`]: the unit being scored, with defaulted optional fields
//! - [`WorkCalendar`]: working-day arithmetic over an explicit holiday set
//! - [`Strategy`]: named weight presets, the only tunable surface
//! - [`DependencyGraph`]: blocked-by/unblocks edges plus cycle detection
//! - [`score_single`] / [`analyze_tasks`]: the two entry points

pub mod analyzer;
pub mod calendar;
pub mod error;
pub mod factors;
pub mod graph;
pub mod scorer;
pub mod strategy;
pub mod task;

pub use analyzer::{analyze_tasks, suggest_tasks, AnalyzedTask};
pub use calendar::{parse_date, WorkCalendar};
pub use error::AnalyzeError;
pub use factors::FactorScore;
pub use graph::DependencyGraph;
pub use scorer::{score_single, score_task, GraphContext, ScoreResult};
pub use strategy::{EffortMode, Strategy};
pub use task::Task;
