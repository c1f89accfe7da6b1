//! Native front end for the DOS terminal.
//!
//! Without a subcommand it runs an interactive prompt on stdin. `run` executes
//! lines non-interactively, `complete` prints what Tab would do and `tree`
//! prints the directory tree.

mod clock;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;

use dosterm_core::Shell;

use crate::clock::LocalClock;

#[derive(Debug, Parser)]
#[command(version, about = "DOS-style virtual terminal", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute each argument as one input line, in order
    Run {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// Show the Tab completion for a partial line
    Complete {
        /// Directory to complete in, e.g. `WINDOWS\SYSTEM32`
        #[arg(long)]
        cwd: Option<String>,
        line: String,
    },
    /// Print the directory tree
    Tree {
        /// Directory to start from, e.g. `WINDOWS`
        #[arg(long)]
        cwd: Option<String>,
    },
}

fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut shell = Shell::builtin().context("failed to load built-in blog posts")?;
    let clock = LocalClock;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => repl::interactive(&mut shell, &clock, std::io::stdin().lock(), &mut out),
        Some(Commands::Run { lines }) => repl::run_lines(&mut shell, &clock, &lines, &mut out),
        Some(Commands::Complete { cwd, line }) => {
            if let Some(cwd) = cwd {
                repl::change_dir(&mut shell, &clock, &cwd)?;
            }
            repl::print_completion(&shell, &line, &mut out)
        }
        Some(Commands::Tree { cwd }) => {
            if let Some(cwd) = cwd {
                repl::change_dir(&mut shell, &clock, &cwd)?;
            }
            repl::print_tree(&mut shell, &clock, &mut out)
        }
    }
}
