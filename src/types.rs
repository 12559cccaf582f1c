use colored::*;
use std::{fmt, io};
use uuid::Uuid;

use crate::selector::SelectionError;

#[derive(Debug)]
pub enum TaskError {
    Database(rusqlite::Error),
    Io(io::Error),
    Selection(SelectionError),
    InvalidInput(String),
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Database(err)
    }
}

impl From<io::Error> for TaskError {
    fn from(err: io::Error) -> Self {
        TaskError::Io(err)
    }
}

impl From<SelectionError> for TaskError {
    fn from(err: SelectionError) -> Self {
        TaskError::Selection(err)
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Database(e) => write!(f, "{} {}", "Database error:".bright_red(), e),
            TaskError::Io(e) => write!(f, "{} {}", "IO error:".bright_red(), e),
            TaskError::Selection(e) => write!(f, "{} {}", "Invalid selection:".bright_yellow(), e),
            TaskError::InvalidInput(e) => write!(f, "{} {}", "Invalid input:".bright_yellow(), e),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Task {
    pub id: String,
    pub created: String,
    pub description: String,
    pub checked: bool,
}

impl Task {
    pub fn new(description: String) -> Result<Self, TaskError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(TaskError::InvalidInput(
                "task description cannot be empty".to_string(),
            ));
        }

        Ok(Task {
            id: Uuid::new_v4().to_string(),
            created: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            description: trimmed.to_string(),
            checked: false,
        })
    }
}

#[derive(Debug)]
pub enum TaskCommand {
    Add { description: String },
    List { unchecked_only: bool },
    Toggle,
    Delete,
    Completions { shell: String },
}
