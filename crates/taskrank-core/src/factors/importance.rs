//! Importance factor: the user's stated 1-10 rating.

use super::FactorScore;
use crate::task::clamp_importance;

/// Score stated importance on a convex curve.
///
/// `100 * (importance/10)^2.5` stretches the top of the range so a 9 or 10
/// dominates a 6 or 7 by more than the raw ratings suggest.
pub fn importance_score(importance: Option<i32>) -> FactorScore {
    let importance = clamp_importance(importance);
    let value = 100.0 * (importance as f64 / 10.0).powf(2.5);
    let label = match importance {
        9..=10 => "critical",
        7..=8 => "high",
        5..=6 => "moderate",
        _ => "lower",
    };
    FactorScore::new(value, format!("{label} importance ({importance}/10)"))
}
