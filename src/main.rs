use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tarea::confirm::TermGate;
use tarea::error::{Result, TareaError};
use tarea::model::{SortOrder, StatusFilter};
use tarea::output::Format;

#[derive(Parser)]
#[command(name = "tarea", version, about = "Due-date task list for the terminal")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Data directory (default: $TAREA_DIR, else ~/.tarea)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task, or apply a pending edit
    Add {
        /// Task description
        text: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Load a task's fields for editing; the next `add` updates it
    Edit {
        /// Task ID to edit
        id: u64,
    },
    /// Toggle a task between completed and pending
    Toggle {
        /// Task ID to toggle
        id: u64,
    },
    /// Delete a task (asks for confirmation)
    Delete {
        /// Task ID to delete
        id: u64,
    },
    /// Delete every task and restart ids at 1 (asks for confirmation)
    Clear,
    /// List tasks through search, status filter, and date sort
    List {
        /// Case-insensitive substring match on the description
        #[arg(long)]
        search: Option<String>,
        /// Status filter
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
        /// Sort direction override for this invocation
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },
    /// Toggle the saved sort direction
    Sort,
    /// Show aggregate statistics
    Stats,
}

/// Resolve the data directory: explicit flag, then `TAREA_DIR`, then
/// `~/.tarea`.
fn data_dir(cli_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = cli_dir {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os("TAREA_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|home| PathBuf::from(home).join(".tarea"))
        .ok_or(TareaError::NoDataDir)
}

fn run(cli: Cli, format: Format) -> Result<()> {
    let dir = data_dir(cli.dir)?;
    let mut gate = TermGate::new(cli.yes);

    match cli.command {
        Commands::Add { text, date } => {
            tarea::commands::add::run(&dir, text, date, &mut gate, format)
        }
        Commands::Edit { id } => tarea::commands::edit::run(&dir, id, &mut gate, format),
        Commands::Toggle { id } => tarea::commands::toggle::run(&dir, id, &mut gate, format),
        Commands::Delete { id } => tarea::commands::delete::run(&dir, id, &mut gate, format),
        Commands::Clear => tarea::commands::clear::run(&dir, &mut gate),
        Commands::List {
            search,
            status,
            sort,
        } => tarea::commands::list::run(&dir, search, status, sort, format),
        Commands::Sort => tarea::commands::sort::run(&dir, &mut gate, format),
        Commands::Stats => tarea::commands::stats::run(&dir, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = cli.format;
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_flag_wins() {
        let dir = data_dir(Some(PathBuf::from("/tmp/elsewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
