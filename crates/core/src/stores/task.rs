//! Personal task store

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::Task;
use crate::storage::{load_slot, save_slot, SlotStore};

/// Durable slot name; must stay bit-exact to read existing deployments
pub const TASK_SLOT: &str = "campus-task-storage";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TaskState {
    tasks: Vec<Task>,
}

/// Input for a new task. The store assigns the id, creation time, and the
/// initial completion flag.
#[derive(Debug, Clone)]
pub struct NewTask<'a> {
    pub user_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub time: &'a str,
}

/// Per-user task list with completion and classification queries.
///
/// Classification compares `YYYY-MM-DD` keys lexicographically against a
/// caller-supplied `today`; the store reads a clock only for `createdAt`.
pub struct TaskStore<'a> {
    slots: &'a dyn SlotStore,
    state: TaskState,
}

impl<'a> TaskStore<'a> {
    /// Construct from the durable slot, falling back to an empty list
    pub fn new(slots: &'a dyn SlotStore) -> Self {
        let state = load_slot(slots, TASK_SLOT).unwrap_or_default();
        Self { slots, state }
    }

    /// Add a task.
    ///
    /// Title and description are trimmed; title, date, and time must be
    /// non-empty after trimming.
    #[instrument(skip(self, task), fields(user_id = task.user_id))]
    pub fn add_task(&mut self, task: NewTask<'_>) -> Result<Task> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("title must not be empty".to_string()));
        }
        if task.date.trim().is_empty() {
            return Err(Error::InvalidInput("date must not be empty".to_string()));
        }
        if task.time.trim().is_empty() {
            return Err(Error::InvalidInput("time must not be empty".to_string()));
        }

        let task = Task {
            id: format!("task-{}", Uuid::new_v4()),
            user_id: task.user_id.to_string(),
            title: title.to_string(),
            description: task.description.trim().to_string(),
            date: task.date.to_string(),
            time: task.time.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.state.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Flip a task's completion flag
    #[instrument(skip(self))]
    pub fn toggle_complete(&mut self, task_id: &str) -> Result<()> {
        let task = self
            .state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| Error::NotFound(format!("no task with id {task_id}")))?;
        task.completed = !task.completed;
        self.persist();
        Ok(())
    }

    /// Remove a task
    #[instrument(skip(self))]
    pub fn delete_task(&mut self, task_id: &str) -> Result<()> {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != task_id);
        if self.state.tasks.len() == before {
            return Err(Error::NotFound(format!("no task with id {task_id}")));
        }
        self.persist();
        Ok(())
    }

    /// All tasks owned by a user, oldest first
    pub fn user_tasks(&self, user_id: &str) -> Vec<&Task> {
        self.state
            .tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .collect()
    }

    /// Open tasks dated strictly before `today`
    pub fn overdue_tasks(&self, user_id: &str, today: &str) -> Vec<&Task> {
        self.user_tasks(user_id)
            .into_iter()
            .filter(|t| t.is_overdue(today))
            .collect()
    }

    /// Open tasks dated `today` or later, soonest `(date, time)` first
    pub fn upcoming_tasks(&self, user_id: &str, today: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .user_tasks(user_id)
            .into_iter()
            .filter(|t| t.is_upcoming(today))
            .collect();
        tasks.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        tasks
    }

    /// Completed tasks, oldest first
    pub fn completed_tasks(&self, user_id: &str) -> Vec<&Task> {
        self.user_tasks(user_id)
            .into_iter()
            .filter(|t| t.completed)
            .collect()
    }

    /// First `limit` upcoming tasks, for the dashboard preview card
    pub fn upcoming_preview(&self, user_id: &str, today: &str, limit: usize) -> Vec<&Task> {
        let mut tasks = self.upcoming_tasks(user_id, today);
        tasks.truncate(limit);
        tasks
    }

    fn persist(&self) {
        save_slot(self.slots, TASK_SLOT, &self.state);
    }
}
