//! Ordered task sequence with value-rebuilding operations.

use super::{Task, TaskDomainError, TaskId, TaskName};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered sequence of tasks in insertion order.
///
/// Every operation returns a new list and leaves `self` untouched. Task
/// identifiers are unique within a list.
///
/// # Examples
///
/// ```
/// use todomatic::todo::domain::{TaskList, TaskName};
///
/// let empty = TaskList::new();
/// let (list, id) = empty.add(TaskName::new("Buy milk").expect("valid name"));
/// assert!(empty.is_empty());
/// assert_eq!(list.len(), 1);
/// assert!(list.get(id).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a list from existing tasks, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskDomainError> {
        let collected: Vec<Task> = tasks.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        for task in &collected {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTaskId(task.id()));
            }
        }
        Ok(Self { tasks: collected })
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the tasks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a new incomplete task and returns the rebuilt list together
    /// with the generated identifier.
    #[must_use]
    pub fn add(&self, name: TaskName) -> (Self, TaskId) {
        let task = Task::new(name);
        let id = task.id();
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        (Self { tasks }, id)
    }

    /// Returns a list where the matching task has its completion inverted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when no task matches `id`.
    pub fn toggle_completed(&self, id: TaskId) -> Result<Self, TaskDomainError> {
        self.map_matching(id, Task::with_completed_toggled)
    }

    /// Returns a list without the matching task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when no task matches `id`.
    pub fn delete(&self, id: TaskId) -> Result<Self, TaskDomainError> {
        if !self.contains(id) {
            return Err(TaskDomainError::TaskNotFound(id));
        }
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Ok(Self { tasks })
    }

    /// Returns a list where the matching task carries `new_name`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] when no task matches `id`.
    pub fn edit(&self, id: TaskId, new_name: TaskName) -> Result<Self, TaskDomainError> {
        self.map_matching(id, |task| task.renamed(new_name.clone()))
    }

    /// Copies the list, replacing the task matching `id` with `update(task)`.
    fn map_matching(
        &self,
        id: TaskId,
        update: impl Fn(&Task) -> Task,
    ) -> Result<Self, TaskDomainError> {
        if !self.contains(id) {
            return Err(TaskDomainError::TaskNotFound(id));
        }
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    update(task)
                } else {
                    task.clone()
                }
            })
            .collect();
        Ok(Self { tasks })
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
