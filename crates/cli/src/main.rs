use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::*;
use jobber_core::task_manager::{TaskManager, TaskManagerConfig};
use jobber_core::JobberError;

mod commands;

/// Jobber - a minimal task runner with dependency resolution
#[derive(Parser)]
#[command(name = "jobber")]
#[command(about = "Run a task and everything it depends on, in order")]
#[command(version)]
struct Cli {
    /// Name of the task to perform
    task: String,

    /// Task definition files, one task per file
    #[arg(required = true, value_name = "SOURCE")]
    sources: Vec<PathBuf>,

    /// Print the execution order without running any commands
    #[arg(long)]
    plan: bool,

    /// Print every declared task and its dependencies, then exit
    #[arg(long)]
    graph: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load all definition sources up front; any malformed source aborts
    // before resolution starts
    let manager = TaskManager::new(TaskManagerConfig {
        definition_sources: cli.sources,
    })?;

    // Dispatch (CLI layer only handles presentation)
    if cli.graph {
        return commands::graph::execute(&manager);
    }
    if cli.plan {
        return commands::plan::execute(&manager, &cli.task);
    }
    commands::run::execute(&manager, &cli.task)
}

/// Each error kind carries its own exit code; anything unclassified exits 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<JobberError>()
        .map(JobberError::exit_code)
        .unwrap_or(1)
}
