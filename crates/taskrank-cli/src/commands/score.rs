//! Single-task scoring command.

use std::error::Error;

use clap::Args;
use taskrank_core::{score_single, Task};

use super::{load_calendar, resolve_today};

#[derive(Args)]
pub struct ScoreArgs {
    /// Task title
    pub title: String,
    /// Due date (YYYY-MM-DD); malformed values mean "no deadline"
    #[arg(long)]
    pub due: Option<String>,
    /// Importance rating 1-10 (default 5)
    #[arg(long)]
    pub importance: Option<i32>,
    /// Estimated hours (default 1)
    #[arg(long)]
    pub hours: Option<f64>,
    /// Comma-separated dependency ids; scored with the graph-free proxy
    #[arg(long)]
    pub dependencies: Option<String>,
    /// Strategy preset (unknown names fall back to smart)
    #[arg(long, default_value = "smart")]
    pub strategy: String,
    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<String>,
    /// TOML file with a `holidays` list of YYYY-MM-DD dates
    #[arg(long)]
    pub holidays: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn Error>> {
    let calendar = load_calendar(args.holidays.as_deref())?;
    let today = resolve_today(args.today.as_deref())?;

    let mut task = Task::new(args.title);
    task.due_date = args.due;
    task.importance = args.importance;
    task.estimated_hours = args.hours;
    if let Some(dependencies) = &args.dependencies {
        task.dependencies = dependencies
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
    }

    let result = score_single(&task, &args.strategy, today, &calendar);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Score: {:.1} (strategy: {})", result.score, result.strategy);
    println!("Explanation: {}", result.explanation);
    println!("Subscores:");
    for (name, value) in &result.subscores {
        let contribution = result.contributions.get(name).copied().unwrap_or(0.0);
        println!("  {name:<11} {value:>6.1}  (contributes {contribution:.1})");
    }
    Ok(())
}
