use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::model::Task;
use crate::projection::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

pub fn print_task(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(task)?),
        Format::Pretty => {
            let text = if task.completed {
                task.text.strikethrough().dimmed().to_string()
            } else {
                task.text.clone()
            };
            println!("[{}] {} (due {}) {}", task.id, text, task.date, badge(task));
        }
        Format::Minimal => print_minimal_row(task),
    }
    Ok(())
}

/// Render a projection. An empty projection renders a single placeholder
/// line; that is purely a display state, the store itself may be non-empty.
pub fn print_tasks(tasks: &[&Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty => {
            if tasks.is_empty() {
                println!("{}", "no tasks to display".dimmed());
                return Ok(());
            }
            for task in tasks {
                print_task(task, Format::Pretty)?;
            }
        }
        Format::Minimal => {
            println!("{:>4} {:30} {:10} STATUS", "ID", "TASK", "DUE");
            println!("{}", "-".repeat(56));
            if tasks.is_empty() {
                println!("{}", "no tasks to display".dimmed());
                return Ok(());
            }
            for task in tasks {
                print_minimal_row(task);
            }
        }
    }
    Ok(())
}

pub fn print_stats(stats: &Stats, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(stats)?),
        Format::Pretty | Format::Minimal => println!(
            "total: {} | completed: {} | pending: {} | progress: {}%",
            stats.total, stats.completed, stats.pending, stats.progress
        ),
    }
    Ok(())
}

fn print_minimal_row(task: &Task) {
    println!(
        "{:>4} {:30} {:10} {}",
        task.id,
        truncate_text(&task.text, 30),
        task.date.to_string(),
        badge(task)
    );
}

fn badge(task: &Task) -> String {
    let label = task.status_label();
    if task.completed {
        label.green().to_string()
    } else {
        label.yellow().to_string()
    }
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("Buy milk", 30), "Buy milk");
    }

    #[test]
    fn truncate_appends_ellipsis_at_the_limit() {
        let long = "a task description that goes on and on";
        let out = truncate_text(long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
