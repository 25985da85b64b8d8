//! CLI argument parsing and menu choices for taskbook.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taskbook",
    about = "A single-user task bookkeeping utility",
    version,
    after_help = "Logs are written to: ~/.local/share/taskbook/logs/taskbook.log"
)]
pub struct Cli {
    /// Path to the task file
    #[arg(short, long, default_value = "tasks.json")]
    pub file: PathBuf,
}

/// One of the six menu choices of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    /// Parse a menu input line; None for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
