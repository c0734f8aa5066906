//! In-memory task and category store for the tasktrack service.
mod category;
mod store;
mod task;

pub use category::Category;
pub use store::{TaskStore, TaskStoreError};
pub use task::Task;
