//! The four factor scorers.
//!
//! Each factor is a pure function from task data to a 0-100-ish subscore
//! plus a short explanation fragment. The task scorer combines them with
//! strategy weights; nothing here knows about weights.

pub mod dependency;
pub mod effort;
pub mod importance;
pub mod urgency;

/// One factor's raw subscore and its explanation fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub value: f64,
    pub explanation: String,
}

impl FactorScore {
    pub fn new(value: f64, explanation: impl Into<String>) -> Self {
        Self {
            value,
            explanation: explanation.into(),
        }
    }
}
