use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single trackable to-do item with identity, description, category, and
/// completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    id: u64,
    description: String,
    category: String,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub(crate) fn new(id: u64, description: String, category: String) -> Self {
        Self {
            id,
            description,
            category,
            completed: false,
            completed_at: None,
        }
    }

    /// Returns the ID of the task.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the name of the category the task belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns whether the task has been completed.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the completion timestamp, present exactly when the task is
    /// completed.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the task completed and stamps `completed_at` on the first
    /// transition. Completing an already-completed task keeps the original
    /// timestamp.
    pub(crate) fn complete(&mut self) {
        if !self.completed {
            self.completed = true;
            self.completed_at = Some(Utc::now());
        }
    }
}
