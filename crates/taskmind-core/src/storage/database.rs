//! SQLite-backed task storage.
//!
//! Rows decode leniently: an unknown priority string degrades to the `none`
//! class and an unparseable deadline to no deadline, so a single bad record
//! never aborts a listing.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

use super::data_dir;
use crate::error::DatabaseError;
use crate::task::{Priority, Task};

/// SQLite database holding the task collection.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open the store at `<data_dir>/taskmind.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("taskmind.db");
        Ok(Self::open_at(path)?)
    }

    /// Open the store at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory().map_err(|source| DatabaseError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id          TEXT PRIMARY KEY,
                    title       TEXT NOT NULL,
                    description TEXT,
                    priority    TEXT NOT NULL DEFAULT 'none',
                    category    TEXT NOT NULL DEFAULT 'general',
                    deadline    TEXT,
                    completed   INTEGER NOT NULL DEFAULT 0,
                    created_at  TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);
                CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Insert a new task.
    ///
    /// # Errors
    /// Returns an error if the insert fails (including a duplicate id).
    pub fn insert(&self, task: &Task) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, priority, category, deadline, completed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.category,
                task.deadline.map(|d| d.to_rfc3339()),
                task.completed,
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// List all tasks, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, priority, category, deadline, completed, created_at
             FROM tasks ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], decode_row)?;
        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    /// Fetch one task by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn get(&self, id: &str) -> Result<Option<Task>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, priority, category, deadline, completed, created_at
             FROM tasks WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], decode_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Write back every mutable field of a task. Returns false when the id
    /// is unknown.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn save(&self, task: &Task) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET title = ?2, description = ?3, priority = ?4, category = ?5,
                 deadline = ?6, completed = ?7
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.category,
                task.deadline.map(|d| d.to_rfc3339()),
                task.completed,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Set only the completion flag. Returns false when the id is unknown.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn set_completed(&self, id: &str, completed: bool) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET completed = ?2 WHERE id = ?1",
            params![id, completed],
        )?;
        Ok(changed > 0)
    }

    /// Set only the priority class. Returns false when the id is unknown.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn set_priority(&self, id: &str, priority: Priority) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET priority = ?2 WHERE id = ?1",
            params![id, priority.as_str()],
        )?;
        Ok(changed > 0)
    }

    /// Delete a task. Returns false when the id is unknown.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn decode_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(3)?;
    let deadline: Option<String> = row.get(5)?;
    let created_at: String = row.get(7)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: Priority::parse_lenient(&priority),
        category: row.get(4)?,
        deadline: deadline.and_then(|d| parse_instant(&d)),
        completed: row.get(6)?,
        // A corrupt creation timestamp falls back to the epoch rather than
        // dropping the row.
        created_at: parse_instant(&created_at).unwrap_or(DateTime::UNIX_EPOCH),
    })
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_task(id: &str, title: &str) -> Task {
        Task::new(id, title, "work", Utc::now())
    }

    #[test]
    fn test_insert_and_get() {
        let store = TaskStore::open_memory().unwrap();
        let task = make_task("t1", "Write report")
            .with_description("quarterly numbers")
            .with_priority(Priority::High)
            .with_deadline(Utc::now() + Duration::days(2));
        store.insert(&task).unwrap();

        let fetched = store.get("t1").unwrap().unwrap();
        assert_eq!(fetched.title, "Write report");
        assert_eq!(fetched.description.as_deref(), Some("quarterly numbers"));
        assert_eq!(fetched.priority, Priority::High);
        assert!(fetched.deadline.is_some());
        assert!(!fetched.completed);
    }

    #[test]
    fn test_get_unknown_is_none() {
        let store = TaskStore::open_memory().unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let store = TaskStore::open_memory().unwrap();
        let base = Utc::now();
        for i in 0..3 {
            let mut task = make_task(&format!("t{i}"), &format!("Task {i}"));
            task.created_at = base + Duration::seconds(i);
            store.insert(&task).unwrap();
        }

        let tasks = store.list().unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "t0"]);
    }

    #[test]
    fn test_save_and_toggles() {
        let store = TaskStore::open_memory().unwrap();
        let mut task = make_task("t1", "Old title");
        store.insert(&task).unwrap();

        task.title = "New title".to_string();
        task.priority = Priority::Medium;
        assert!(store.save(&task).unwrap());

        assert!(store.set_completed("t1", true).unwrap());
        assert!(store.set_priority("t1", Priority::Low).unwrap());

        let fetched = store.get("t1").unwrap().unwrap();
        assert_eq!(fetched.title, "New title");
        assert_eq!(fetched.priority, Priority::Low);
        assert!(fetched.completed);

        assert!(!store.set_completed("missing", true).unwrap());
    }

    #[test]
    fn test_delete() {
        let store = TaskStore::open_memory().unwrap();
        store.insert(&make_task("t1", "Task")).unwrap();
        assert!(store.delete("t1").unwrap());
        assert!(!store.delete("t1").unwrap());
        assert!(store.get("t1").unwrap().is_none());
    }

    #[test]
    fn test_malformed_fields_degrade_to_absent() {
        let store = TaskStore::open_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO tasks (id, title, priority, category, deadline, completed, created_at)
                 VALUES ('bad', 'Bad row', 'URGENT!!', 'work', 'not-a-date', 0, ?1)",
                params![Utc::now().to_rfc3339()],
            )
            .unwrap();

        let task = store.get("bad").unwrap().unwrap();
        assert_eq!(task.priority, Priority::None);
        assert!(task.deadline.is_none());

        // The bad row doesn't abort a listing either
        store.insert(&make_task("good", "Good row")).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
