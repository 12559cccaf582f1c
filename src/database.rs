use crate::types::{Task, TaskError};
use rusqlite::Connection;
use std::io;
use std::path::PathBuf;
use std::{env, fs};

pub struct TaskManager {
    conn: Connection,
}

impl TaskManager {
    pub fn new() -> Result<Self, TaskError> {
        let conn = Connection::open(get_db_path()?)?;
        create_schema(&conn)?;
        Ok(TaskManager { conn })
    }

    #[cfg(test)]
    fn in_memory() -> Result<Self, TaskError> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(TaskManager { conn })
    }

    pub fn add_task(&self, task: &Task) -> Result<(), TaskError> {
        self.conn.execute(
            "INSERT INTO tasks (id, created, description, checked) VALUES (?1, ?2, ?3, ?4)",
            (
                &task.id,
                &task.created,
                &task.description,
                task.checked as i64,
            ),
        )?;
        Ok(())
    }

    /// Tasks in insertion order, so list indices stay stable between the
    /// enumeration a user sees and the selection they type against it.
    pub fn list_tasks(&self, unchecked_only: bool) -> Result<Vec<Task>, TaskError> {
        let mut sql = String::from("SELECT id, created, description, checked FROM tasks");
        if unchecked_only {
            sql.push_str(" WHERE checked = 0");
        }
        sql.push_str(" ORDER BY rowid");

        let mut statement = self.conn.prepare(&sql)?;
        let rows = statement.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                created: row.get(1)?,
                description: row.get(2)?,
                checked: row.get::<_, i64>(3)? != 0,
            })
        })?;

        let mut task_list = Vec::new();
        for result in rows {
            task_list.push(result?);
        }
        Ok(task_list)
    }

    pub fn toggle_task(&self, id: &str) -> Result<bool, TaskError> {
        Ok(self
            .conn
            .execute("UPDATE tasks SET checked = NOT checked WHERE id = ?1", [id])?
            > 0)
    }

    pub fn delete_task(&self, id: &str) -> Result<bool, TaskError> {
        Ok(self.conn.execute("DELETE FROM tasks WHERE id = ?1", [id])? > 0)
    }
}

fn get_faena_dir() -> Result<PathBuf, TaskError> {
    let home = env::var("HOME").map_err(|_| {
        TaskError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "HOME environment variable not found",
        ))
    })?;

    let faena_dir = PathBuf::from(home).join(".faena");
    if !faena_dir.exists() {
        fs::create_dir_all(&faena_dir)?;
    }
    Ok(faena_dir)
}

pub fn get_db_path() -> Result<PathBuf, TaskError> {
    Ok(get_faena_dir()?.join("tasks.db"))
}

fn create_schema(conn: &Connection) -> Result<(), TaskError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            created TEXT NOT NULL,
            description TEXT NOT NULL,
            checked INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(descriptions: &[&str]) -> TaskManager {
        let manager = TaskManager::in_memory().unwrap();
        for d in descriptions {
            let task = Task::new(d.to_string()).unwrap();
            manager.add_task(&task).unwrap();
        }
        manager
    }

    #[test]
    fn added_tasks_come_back_in_insertion_order() {
        let manager = manager_with(&["first", "second", "third"]);
        let tasks = manager.list_tasks(false).unwrap();
        let names: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(tasks.iter().all(|t| !t.checked));
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let manager = manager_with(&["only"]);
        let id = manager.list_tasks(false).unwrap()[0].id.clone();

        assert!(manager.toggle_task(&id).unwrap());
        assert!(manager.list_tasks(false).unwrap()[0].checked);

        assert!(manager.toggle_task(&id).unwrap());
        assert!(!manager.list_tasks(false).unwrap()[0].checked);
    }

    #[test]
    fn unchecked_filter_hides_checked_tasks() {
        let manager = manager_with(&["keep", "done"]);
        let id = manager.list_tasks(false).unwrap()[1].id.clone();
        manager.toggle_task(&id).unwrap();

        let unchecked = manager.list_tasks(true).unwrap();
        assert_eq!(unchecked.len(), 1);
        assert_eq!(unchecked[0].description, "keep");

        assert_eq!(manager.list_tasks(false).unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_task() {
        let manager = manager_with(&["a", "b"]);
        let id = manager.list_tasks(false).unwrap()[0].id.clone();

        assert!(manager.delete_task(&id).unwrap());
        assert!(!manager.delete_task(&id).unwrap());

        let remaining = manager.list_tasks(false).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "b");
    }

    #[test]
    fn toggling_a_missing_id_changes_nothing() {
        let manager = manager_with(&["a"]);
        assert!(!manager.toggle_task("no-such-id").unwrap());
    }
}
