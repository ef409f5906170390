//! CLI subcommands and shared input helpers.

pub mod analyze;
pub mod score;
pub mod strategies;

use std::error::Error;
use std::fs;
use std::io::Read;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use taskrank_core::{parse_date, Task, WorkCalendar};

/// Load a task batch from a JSON file, or stdin when the path is `-`.
pub fn load_tasks(path: &str) -> Result<Vec<Task>, Box<dyn Error>> {
    let data = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    let tasks: Vec<Task> = serde_json::from_str(&data)?;
    Ok(tasks)
}

#[derive(Debug, Deserialize)]
struct HolidayFile {
    #[serde(default)]
    holidays: Vec<String>,
}

/// Build the working-day calendar, optionally from a TOML holiday file
/// (`holidays = ["2026-01-01", ...]`). Without a file the engine's
/// built-in holiday set applies.
pub fn load_calendar(path: Option<&str>) -> Result<WorkCalendar, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(WorkCalendar::default());
    };
    let file: HolidayFile = toml::from_str(&fs::read_to_string(path)?)?;
    let mut holidays = Vec::with_capacity(file.holidays.len());
    for value in &file.holidays {
        let date = parse_date(value)
            .ok_or_else(|| format!("invalid holiday date '{value}' in {path}"))?;
        holidays.push(date);
    }
    Ok(WorkCalendar::with_holidays(holidays))
}

/// Resolve the reference date: an explicit `--today` wins, otherwise the
/// local date. Unlike task due dates, a malformed value here is an error;
/// silently scoring against the wrong day would be worse.
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate, Box<dyn Error>> {
    match today {
        Some(value) => {
            parse_date(value).ok_or_else(|| format!("invalid --today date '{value}'").into())
        }
        None => Ok(Local::now().date_naive()),
    }
}
