//! Effort factor: estimated duration, shorter is better.

use super::FactorScore;
use crate::strategy::EffortMode;
use crate::task::clamp_hours;

/// Exponential half-life of the effort curve, in hours.
const HALF_LIFE_HOURS: f64 = 8.0;

/// Score an hour estimate.
///
/// Pure mode decays to zero, so a week-long task is worth almost nothing.
/// Hybrid mode floors the same curve at 50: long tasks are de-prioritized
/// but never pushed below half credit.
pub fn effort_score(hours: Option<f64>, mode: EffortMode) -> FactorScore {
    let hours = clamp_hours(hours);
    let decay = (-hours / HALF_LIFE_HOURS).exp();
    let value = match mode {
        EffortMode::Pure => 100.0 * decay,
        EffortMode::Hybrid => 50.0 + 50.0 * decay,
    };
    let label = if hours <= 0.5 {
        "instant"
    } else if hours <= 2.0 {
        "quick win"
    } else if hours <= 4.0 {
        "short"
    } else if hours <= 8.0 {
        "moderate"
    } else {
        "long project"
    };
    FactorScore::new(value, format!("{label} ({hours}h)"))
}
