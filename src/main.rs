//! Taskbook CLI - an interactive menu over the flat-file task store.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use taskbook::{StoreError, TaskStore, TaskUpdate};

mod cli;

use cli::{Cli, MenuChoice};

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskbook")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskbook.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Print a prompt and read one input line; None on end of input.
fn prompt(lines: &mut InputLines<'_>, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    match lines.next() {
        Some(line) => {
            let line = line.context("Failed to read input")?;
            Ok(Some(line.trim_end().to_string()))
        }
        None => Ok(None),
    }
}

/// Prompt for a task id; None on end of input or non-integer input.
fn prompt_id(lines: &mut InputLines<'_>, message: &str) -> Result<Option<u64>> {
    let Some(raw) = prompt(lines, message)? else {
        return Ok(None);
    };

    match raw.trim().parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("{} Task id must be a number.", "✗".red());
            Ok(None)
        }
    }
}

/// Map an empty input line to "leave unchanged".
fn non_blank(input: String) -> Option<String> {
    if input.is_empty() { None } else { Some(input) }
}

fn add_task(store: &mut TaskStore, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(title) = prompt(lines, "Enter task title: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(lines, "Enter task description: ")? else {
        return Ok(());
    };
    let Some(assignee) = prompt(lines, "Enter assignee name: ")? else {
        return Ok(());
    };
    let Some(deadline) = prompt(lines, "Enter deadline (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    match store.add_task(&title, &description, &assignee, &deadline) {
        Ok(task) => println!(
            "{} Task '{}' assigned to {} successfully.",
            "✓".green(),
            task.title,
            task.assignee.cyan()
        ),
        Err(e) => println!("{} {}", "✗".red(), e),
    }
    Ok(())
}

fn view_tasks(store: &TaskStore) {
    let tasks = store.list_tasks();
    if tasks.is_empty() {
        println!("{}", "No tasks in the system.".dimmed());
    } else {
        for task in tasks {
            println!("{}", task);
        }
    }
}

fn update_task(store: &mut TaskStore, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(id) = prompt_id(lines, "Enter task ID to update: ")? else {
        return Ok(());
    };

    let mut update = TaskUpdate::default();
    let fields: [(&str, &mut Option<String>); 5] = [
        ("title", &mut update.title),
        ("description", &mut update.description),
        ("assignee", &mut update.assignee),
        ("deadline", &mut update.deadline),
        ("status", &mut update.status),
    ];
    for (name, slot) in fields {
        let message = format!("Enter new {} (leave blank to keep current): ", name);
        let Some(input) = prompt(lines, &message)? else {
            return Ok(());
        };
        *slot = non_blank(input);
    }

    match store.update_task(id, update) {
        Ok(_) => println!("{} Task ID {} updated successfully.", "✓".green(), id),
        Err(StoreError::TaskNotFound(id)) => {
            println!("{} Task with ID {} not found.", "✗".red(), id);
        }
        Err(e) => println!("{} {}", "✗".red(), e),
    }
    Ok(())
}

fn delete_task(store: &mut TaskStore, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(id) = prompt_id(lines, "Enter task ID to delete: ")? else {
        return Ok(());
    };

    match store.delete_task(id) {
        Ok(_) => println!("{} Task ID {} deleted successfully.", "✓".green(), id),
        Err(StoreError::TaskNotFound(id)) => {
            println!("{} Task with ID {} not found.", "✗".red(), id);
        }
        Err(e) => println!("{} {}", "✗".red(), e),
    }
    Ok(())
}

fn search_tasks(store: &TaskStore, lines: &mut InputLines<'_>) -> Result<()> {
    let Some(term) = prompt(lines, "Enter title or status to search: ")? else {
        return Ok(());
    };

    let found = store.search_tasks(&term);
    if found.is_empty() {
        println!("{}", format!("No tasks found for '{}'.", term).dimmed());
    } else {
        for task in found {
            println!("{}", task);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut store = TaskStore::load(&cli.file)
        .with_context(|| format!("Failed to load task file {}", cli.file.display()))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("{}", "Task Assignment and Tracking System".bold());
        println!("1. Add Task");
        println!("2. View Tasks");
        println!("3. Update Task");
        println!("4. Delete Task");
        println!("5. Search Task");
        println!("6. Exit");

        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_task(&mut store, &mut lines)?,
            Some(MenuChoice::View) => view_tasks(&store),
            Some(MenuChoice::Update) => update_task(&mut store, &mut lines)?,
            Some(MenuChoice::Delete) => delete_task(&mut store, &mut lines)?,
            Some(MenuChoice::Search) => search_tasks(&store, &mut lines)?,
            Some(MenuChoice::Exit) => {
                println!("Exiting Task Management System.");
                break;
            }
            None => println!("{} Invalid choice. Please try again.", "✗".red()),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Task file: {}", cli.file.display());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
