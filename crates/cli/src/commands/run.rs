use anyhow::Result;
use colored::*;
use jobber_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, task: &str) -> Result<()> {
    println!("{} {}", "Running task".bold(), task.cyan());

    let summary = manager.run(task)?;

    println!();
    if summary.all_succeeded() {
        println!(
            "{} {}",
            "✓".green().bold(),
            "All tasks completed successfully!".green().bold()
        );
    } else {
        let failed: Vec<&str> = summary.failed().map(|outcome| outcome.name.as_str()).collect();
        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("{} command(s) failed: {}", failed.len(), failed.join(", ")).yellow()
        );
    }

    Ok(())
}
