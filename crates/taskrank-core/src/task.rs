//! Task model for the scoring engine.
//!
//! Tasks arrive from the outside world as loose JSON, so every scoring
//! input is optional and gets defaulted or clamped here rather than
//! rejected. The title is display-only and never influences the score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_date;

/// Importance used when the field is missing.
pub const DEFAULT_IMPORTANCE: i32 = 5;

/// Estimated hours used when the field is missing or negative.
pub const DEFAULT_HOURS: f64 = 1.0;

/// Clamp an optional importance rating into [1, 10], defaulting to 5.
pub fn clamp_importance(importance: Option<i32>) -> i32 {
    importance.unwrap_or(DEFAULT_IMPORTANCE).clamp(1, 10)
}

/// Default an optional hour estimate: missing, negative or NaN become 1.0.
pub fn clamp_hours(hours: Option<f64>) -> f64 {
    match hours {
        Some(h) if h >= 0.0 => h,
        _ => DEFAULT_HOURS,
    }
}

/// A task to be scored.
///
/// `id` is unique within a batch when present; the batch analyzer assigns
/// the zero-based list position to tasks without one. `dependencies` lists
/// the ids this task is blocked by; ids that never resolve to a task in
/// the batch are silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    /// ISO calendar date (`YYYY-MM-DD`); anything unparseable means
    /// "no deadline".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// 1-10 rating, defaulted to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,

    /// Non-negative hour estimate, defaulted to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            due_date: None,
            importance: None,
            estimated_hours: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Effective importance after defaulting and clamping.
    pub fn importance_clamped(&self) -> i32 {
        clamp_importance(self.importance)
    }

    /// Effective hour estimate after defaulting.
    pub fn hours_or_default(&self) -> f64 {
        clamp_hours(self.estimated_hours)
    }

    /// Parsed due date; `None` covers both absent and malformed strings.
    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_date)
    }
}
