//! Ordered task list with index addressing

use super::Task;
use crate::error::{OracleError, Result};

/// Ordered sequence of tasks. Insertion order is display order; indices
/// are 0-based here and converted to 1-based only in user-facing text.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append a task at the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return the task at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        self.check_index(index)?;
        Ok(&self.tasks[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        self.check_index(index)?;
        Ok(&mut self.tasks[index])
    }

    /// Case-insensitive substring search against each task's rendered
    /// form, preserving list order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.render().to_lowercase().contains(&needle))
            .collect()
    }

    // The one bounds rule for every index-taking command: an empty list
    // gets its own error, otherwise the index must be in [0, len).
    fn check_index(&self, index: usize) -> Result<()> {
        if self.tasks.is_empty() {
            return Err(OracleError::EmptyList);
        }
        if index >= self.tasks.len() {
            return Err(OracleError::IndexOutOfRange {
                size: self.tasks.len(),
            });
        }
        Ok(())
    }
}
