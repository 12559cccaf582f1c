mod cli;
mod commands;
mod database;
mod display;
mod selector;
mod types;

use commands::execute_command;
use database::TaskManager;

fn main() {
    let command = cli::parse_command();

    let manager = match TaskManager::new() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to initialize task manager: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = execute_command(&manager, command) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
