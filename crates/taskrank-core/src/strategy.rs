//! Strategy presets.
//!
//! A strategy is the only tunable surface of the engine: a named vector of
//! factor weights plus the urgency decay constant and the effort-scoring
//! mode. Changing strategy changes how factors combine, never the factor
//! formulas themselves.

use serde::{Deserialize, Serialize};

/// How the effort factor maps hours to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortMode {
    /// Exponential decay toward 0: long tasks score near nothing.
    Pure,
    /// Same curve floored at 50: long tasks keep half credit.
    Hybrid,
}

/// Named preset of factor weights. Weights are designed to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Strategy {
    pub name: &'static str,
    pub urgency_weight: f64,
    pub importance_weight: f64,
    pub effort_weight: f64,
    pub dependency_weight: f64,
    /// Urgency decay constant, in working days.
    pub tau: f64,
    pub effort_mode: EffortMode,
}

/// Balanced default.
pub const SMART: Strategy = Strategy {
    name: "smart",
    urgency_weight: 0.40,
    importance_weight: 0.30,
    effort_weight: 0.20,
    dependency_weight: 0.10,
    tau: 5.0,
    effort_mode: EffortMode::Hybrid,
};

/// Deadline-driven: urgency dominates and decays faster.
pub const DEADLINE: Strategy = Strategy {
    name: "deadline",
    urgency_weight: 0.60,
    importance_weight: 0.20,
    effort_weight: 0.10,
    dependency_weight: 0.10,
    tau: 3.0,
    effort_mode: EffortMode::Hybrid,
};

/// Quick wins first: effort dominates, in pure mode so long tasks sink.
pub const FASTEST: Strategy = Strategy {
    name: "fastest",
    urgency_weight: 0.20,
    importance_weight: 0.20,
    effort_weight: 0.50,
    dependency_weight: 0.10,
    tau: 5.0,
    effort_mode: EffortMode::Pure,
};

/// Impact first: importance dominates, dependencies count a little more.
pub const IMPACT: Strategy = Strategy {
    name: "impact",
    urgency_weight: 0.20,
    importance_weight: 0.55,
    effort_weight: 0.10,
    dependency_weight: 0.15,
    tau: 5.0,
    effort_mode: EffortMode::Hybrid,
};

impl Strategy {
    /// Resolve a preset by name, case-insensitively.
    ///
    /// Unknown names fall back to `smart`; callers wanting strict
    /// validation check the name before calling. `balanced` is an alias
    /// for `smart`.
    pub fn by_name(name: &str) -> Strategy {
        match name.trim().to_ascii_lowercase().as_str() {
            "deadline" => DEADLINE,
            "fastest" => FASTEST,
            "impact" => IMPACT,
            _ => SMART,
        }
    }

    /// All presets, for listing.
    pub fn presets() -> &'static [Strategy] {
        &[SMART, DEADLINE, FASTEST, IMPACT]
    }
}
