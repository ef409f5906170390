//! Strategy preset listing.

use std::error::Error;

use taskrank_core::{EffortMode, Strategy};

pub fn run() -> Result<(), Box<dyn Error>> {
    println!(
        "{:<10} {:>8} {:>11} {:>7} {:>11} {:>5}  effort mode",
        "name", "urgency", "importance", "effort", "dependency", "tau"
    );
    for preset in Strategy::presets() {
        let mode = match preset.effort_mode {
            EffortMode::Pure => "pure",
            EffortMode::Hybrid => "hybrid",
        };
        println!(
            "{:<10} {:>8.2} {:>11.2} {:>7.2} {:>11.2} {:>5.1}  {mode}",
            preset.name,
            preset.urgency_weight,
            preset.importance_weight,
            preset.effort_weight,
            preset.dependency_weight,
            preset.tau,
        );
    }
    println!("\nUnknown names fall back to 'smart'.");
    Ok(())
}
