//! Batch analysis and suggestion commands.

use std::error::Error;

use clap::Args;
use taskrank_core::{analyze_tasks, suggest_tasks, AnalyzedTask};

use super::{load_calendar, load_tasks, resolve_today};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a JSON array of tasks, or `-` for stdin
    pub tasks: String,
    /// Strategy preset (unknown names fall back to smart)
    #[arg(long, default_value = "smart")]
    pub strategy: String,
    /// Keep only the N highest-scoring tasks
    #[arg(long)]
    pub top: Option<usize>,
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

pub fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let tasks = load_tasks(&args.tasks)?;
    let calendar = load_calendar(args.holidays.as_deref())?;
    let today = resolve_today(args.today.as_deref())?;
    let mut results = analyze_tasks(&tasks, &args.strategy, today, &calendar)?;
    if let Some(top) = args.top {
        results.truncate(top);
    }
    print_results(&results, args.json)
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Path to a JSON array of tasks, or `-` for stdin
    pub tasks: String,
    /// Strategy preset (unknown names fall back to smart)
    #[arg(long, default_value = "smart")]
    pub strategy: String,
    /// How many suggestions to keep
    #[arg(long, default_value = "3")]
    pub count: usize,
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

pub fn run_suggest(args: SuggestArgs) -> Result<(), Box<dyn Error>> {
    let tasks = load_tasks(&args.tasks)?;
    let calendar = load_calendar(args.holidays.as_deref())?;
    let today = resolve_today(args.today.as_deref())?;
    let results = suggest_tasks(&tasks, &args.strategy, today, &calendar, args.count)?;
    print_results(&results, args.json)
}

fn print_results(results: &[AnalyzedTask], json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No tasks to rank.");
        return Ok(());
    }
    for (rank, task) in results.iter().enumerate() {
        println!(
            "{:>2}. [{:>5.1}] {} -- {}",
            rank + 1,
            task.score,
            task.title,
            task.explanation
        );
        for warning in &task.warnings {
            println!("      warning: {warning}");
        }
    }
    Ok(())
}
