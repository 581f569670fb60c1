//! Personal task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived task classification. Never stored; computed on demand against a
/// caller-supplied day key so tests and timezone handling stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Overdue,
    Upcoming,
}

/// A personal reminder.
///
/// `date` is a `YYYY-MM-DD` key; lexicographic order on that format equals
/// chronological order, which classification relies on. `time` is a
/// display-only `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Classify against the caller's current day key
    pub fn status(&self, today: &str) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else if self.date.as_str() < today {
            TaskStatus::Overdue
        } else {
            TaskStatus::Upcoming
        }
    }

    pub fn is_overdue(&self, today: &str) -> bool {
        self.status(today) == TaskStatus::Overdue
    }

    pub fn is_upcoming(&self, today: &str) -> bool {
        self.status(today) == TaskStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(date: &str, completed: bool) -> Task {
        Task {
            id: "task-1".to_string(),
            user_id: "u1".to_string(),
            title: "Essay".to_string(),
            description: String::new(),
            date: date.to_string(),
            time: "09:00".to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_overdue_across_year_boundary() {
        // Lexicographic comparison must agree with chronology here.
        let task = make_task("2024-12-31", false);
        assert_eq!(task.status("2025-01-01"), TaskStatus::Overdue);
    }

    #[test]
    fn test_due_today_is_upcoming() {
        let task = make_task("2025-03-02", false);
        assert_eq!(task.status("2025-03-02"), TaskStatus::Upcoming);
    }

    #[test]
    fn test_completed_wins_over_overdue() {
        let task = make_task("2024-01-01", true);
        assert_eq!(task.status("2025-01-01"), TaskStatus::Completed);
        assert!(!task.is_overdue("2025-01-01"));
    }
}
