use anyhow::Result;
use colored::*;
use jobber_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager) -> Result<()> {
    println!("{}", "Task Dependency Graph:".bold().underline());

    let mut tasks: Vec<_> = manager.registry().iter().collect();
    tasks.sort_by(|a, b| a.name.cmp(&b.name));

    if tasks.is_empty() {
        println!("  {}", "No tasks declared".dimmed());
        return Ok(());
    }

    for task in tasks {
        println!("{}", task.name.blue().bold());

        let mut deps: Vec<&str> = task.dependencies.iter().map(String::as_str).collect();
        deps.sort_unstable();

        if deps.is_empty() {
            println!("  {}", "no dependencies".dimmed());
        } else {
            println!("  {} {}", "depends on:".dimmed(), deps.join(", "));
        }
        println!();
    }

    Ok(())
}
