use crate::category::{Category, FALLBACK_ICON};
use crate::task::Task;
use thiserror::Error;

/// Error type for inputs rejected by [`TaskStore::add_task`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The task description was empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,
    /// The category name was empty after trimming.
    #[error("category name must not be empty")]
    EmptyCategory,
}

/// Authoritative in-memory holder of all tasks and categories.
///
/// Tasks are kept in insertion order and keyed by an ever-increasing id
/// counter, so ids of deleted tasks are never reused. Categories are seeded
/// with a fixed default set at construction and grow as new names are
/// introduced through [`TaskStore::add_task`]; once known, a category
/// persists for the store's lifetime even after its last referencing task
/// is deleted.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store seeded with the default categories.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            categories: Category::defaults(),
            next_id: 1,
        }
    }

    /// Adds a task and returns its id.
    ///
    /// Both arguments are trimmed before validation and the trimmed text is
    /// what gets stored; an argument that is empty after trimming is
    /// rejected and the store is left unchanged. A category name not yet
    /// known to the store is registered with the fallback icon before the
    /// task is inserted.
    pub fn add_task(&mut self, description: &str, category: &str) -> Result<u64, TaskStoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskStoreError::EmptyDescription);
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(TaskStoreError::EmptyCategory);
        }

        self.ensure_category(category);

        let id = self.next_id;
        self.next_id += 1;
        self.tasks
            .push(Task::new(id, description.to_string(), category.to_string()));
        Ok(id)
    }

    /// Registers `name` with the fallback icon unless it is already known.
    fn ensure_category(&mut self, name: &str) {
        if !self.categories.iter().any(|c| c.name() == name) {
            self.categories.push(Category::new(name, FALLBACK_ICON));
        }
    }

    /// Marks the task with the given id completed, stamping its completion
    /// time, and returns `true`. Completing an already-completed task is a
    /// no-op that still returns `true` and keeps the original timestamp.
    /// Returns `false` without changing anything if the id is unknown.
    pub fn complete_task(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.complete();
                true
            }
            None => false,
        }
    }

    /// Removes the task with the given id and returns `true`, or returns
    /// `false` without changing anything if the id is unknown. The id
    /// counter is never rewound, so a deleted id is never handed out again.
    pub fn delete_task(&mut self, id: u64) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() < len_before
    }

    /// Returns all tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns every category the store knows: the default set plus each
    /// distinct name ever introduced through [`TaskStore::add_task`],
    /// whether or not tasks referencing it still exist.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the fixed default category set, unaffected by any
    /// [`TaskStore::add_task`] call.
    pub fn default_categories(&self) -> Vec<Category> {
        Category::defaults()
    }
}
