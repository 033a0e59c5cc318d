//! u-timeline - assign timeline tasks to non-overlapping lanes
//!
//! Reads a JSON array of `{id, name, start, end}` records, places them in
//! lanes and prints the result as text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::{debug, warn};
use serde_json::json;

use u_timeline::config::{BoundaryRule, LaneConfig, MalformedPolicy};
use u_timeline::lanes::{LaneAssigner, LaneKpi};
use u_timeline::models::{LaneSet, Task, TimelineRange};
use u_timeline::normalize::tasks_from_json;
use u_timeline::validation::validate_tasks;

/// Assign timeline tasks to the fewest non-overlapping lanes
#[derive(Parser, Debug)]
#[command(name = "u-timeline", version)]
struct Cli {
    /// JSON file holding an array of task records
    file: PathBuf,

    /// Lane config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Let a task start on the day another ends in the same lane
    #[arg(long)]
    exclusive: bool,

    /// Fail on tasks that start after they end
    #[arg(long)]
    reject_inverted: bool,

    /// Print lane metrics after the lanes
    #[arg(long)]
    stats: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!("lane config: {config:?}");

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let tasks = tasks_from_json(&text)
        .with_context(|| format!("failed to load tasks from {}", cli.file.display()))?;

    if let Err(errors) = validate_tasks(&tasks) {
        for err in &errors {
            warn!("{}", err.message);
        }
    }

    let lanes = LaneAssigner::new()
        .with_config(config)
        .assign(&tasks)
        .context("lane assignment failed")?;
    let range = TimelineRange::of(&tasks);
    let kpi = cli.stats.then(|| LaneKpi::calculate(&lanes, config.boundary));

    if cli.json {
        let mut out = json!({ "range": range, "lanes": lanes });
        if let Some(kpi) = &kpi {
            out["stats"] = json!({
                "lane_count": kpi.lane_count,
                "task_count": kpi.task_count,
                "max_depth": kpi.max_depth,
                "minimal": kpi.is_minimal(),
                "avg_fill": kpi.avg_fill,
            });
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lanes(&lanes, range);
        if let Some(kpi) = &kpi {
            print_stats(kpi);
        }
    }

    Ok(())
}

/// Config file first, then flags on top.
fn resolve_config(cli: &Cli) -> Result<LaneConfig> {
    let mut config = match &cli.config {
        Some(path) => LaneConfig::load(path)?,
        None => LaneConfig::default(),
    };
    if cli.exclusive {
        config.boundary = BoundaryRule::Exclusive;
    }
    if cli.reject_inverted {
        config.malformed = MalformedPolicy::Reject;
    }
    Ok(config)
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn plural_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn print_lanes(lanes: &LaneSet<'_, Task>, range: Option<TimelineRange>) {
    let Some(range) = range else {
        println!("No tasks.");
        return;
    };

    println!(
        "Timeline {} - {} ({}), {} lane{}",
        short_date(range.start),
        short_date(range.end),
        plural_days(range.total_days()),
        lanes.len(),
        if lanes.len() == 1 { "" } else { "s" }
    );
    for lane in lanes {
        println!("Lane {}:", lane.index() + 1);
        for task in lane.iter() {
            let label = if task.name.is_empty() { &task.id } else { &task.name };
            println!(
                "  [{}] {}  {} - {} ({})",
                task.id,
                label,
                short_date(task.start),
                short_date(task.end),
                plural_days(task.duration_days())
            );
        }
    }
}

fn print_stats(kpi: &LaneKpi) {
    println!();
    println!("Tasks:       {}", kpi.task_count);
    println!("Lanes:       {}", kpi.lane_count);
    println!(
        "Max overlap: {}{}",
        kpi.max_depth,
        if kpi.is_minimal() { " (minimal)" } else { "" }
    );
    println!("Avg fill:    {:.0}%", kpi.avg_fill * 100.0);
}
