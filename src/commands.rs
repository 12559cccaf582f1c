use crate::database::TaskManager;
use crate::display::{print_list_header, print_selection_list, print_task_line};
use crate::selector;
use crate::types::{Task, TaskCommand, TaskError};
use clap_complete::generate;
use clap_complete::shells::{Bash, Elvish, Fish, PowerShell, Zsh};
use colored::*;
use std::io::{self, Write};

pub fn execute_command(manager: &TaskManager, command: TaskCommand) -> Result<(), TaskError> {
    match command {
        TaskCommand::Add { description } => handle_add(manager, description),

        TaskCommand::List { unchecked_only } => handle_list(manager, unchecked_only),

        TaskCommand::Toggle => select_and_apply(manager, TaskManager::toggle_task, "toggled"),

        TaskCommand::Delete => select_and_apply(manager, TaskManager::delete_task, "deleted"),

        TaskCommand::Completions { shell } => handle_completions(shell),
    }
}

fn handle_add(manager: &TaskManager, description: String) -> Result<(), TaskError> {
    let task = Task::new(description)?;
    manager.add_task(&task)?;
    println!("{}", "task added".bright_green());
    print_task_line(&task, 0);
    Ok(())
}

fn handle_list(manager: &TaskManager, unchecked_only: bool) -> Result<(), TaskError> {
    let tasks = manager.list_tasks(unchecked_only)?;

    if tasks.is_empty() {
        let message = if unchecked_only {
            "no unchecked tasks found"
        } else {
            "no tasks found"
        };
        println!("{}", message.dimmed());
        return Ok(());
    }

    print_list_header();
    for task in &tasks {
        print_task_line(task, 0);
    }
    Ok(())
}

/// Interactive bulk flow shared by toggle and delete: enumerate every task,
/// read a selection string, expand it against the listed count and run the
/// action once per resolved id.
///
/// Every index is resolved to its task id before the first write, so a
/// selection that parses but points past the list applies nothing at all.
fn select_and_apply(
    manager: &TaskManager,
    action: fn(&TaskManager, &str) -> Result<bool, TaskError>,
    past_tense: &str,
) -> Result<(), TaskError> {
    let tasks = manager.list_tasks(false)?;
    if tasks.is_empty() {
        println!("{}", "no tasks to select".dimmed());
        return Ok(());
    }

    println!("Select task(s), e.g. '0', '1-3,5' or '-' for all:");
    print_selection_list(&tasks);

    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let indices = selector::parse(&input, tasks.len())?;

    let mut ids = Vec::with_capacity(indices.len());
    for &idx in &indices {
        let task = tasks.get(idx).ok_or_else(|| {
            TaskError::InvalidInput(format!(
                "index {} is out of range (the list has {} tasks)",
                idx,
                tasks.len()
            ))
        })?;
        ids.push(task.id.as_str());
    }

    for id in ids {
        action(manager, id)?;
    }

    println!(
        "{}",
        format!("task(s) {:?} {}", indices, past_tense).bright_green()
    );
    Ok(())
}

fn handle_completions(shell: String) -> Result<(), TaskError> {
    let mut cmd = crate::cli::build_cli();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match shell.as_str() {
        "bash" => generate(Bash, &mut cmd, "faena", &mut out),
        "zsh" => generate(Zsh, &mut cmd, "faena", &mut out),
        "fish" => generate(Fish, &mut cmd, "faena", &mut out),
        "powershell" => generate(PowerShell, &mut cmd, "faena", &mut out),
        "elvish" => generate(Elvish, &mut cmd, "faena", &mut out),
        _ => unreachable!(),
    };
    Ok(())
}
