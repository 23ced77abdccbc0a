use anyhow::Result;
use colored::*;
use jobber_core::task_manager::TaskManager;

pub fn execute(manager: &TaskManager, task: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), task.cyan());

    let plan = manager.plan(task)?;

    println!("\n{}:", "Execution order".bold());
    for (i, name) in plan.order.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }

    Ok(())
}
