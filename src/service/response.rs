//! A2A task service response types

use crate::protocol::task::Task;

/// Response from a task operation
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResponse {
    /// Task response (from send, get and cancel)
    Task(Box<Task>),

    /// Empty response (for operations with no return value)
    Empty,
}

impl TaskResponse {
    /// Extract a task from the response, if present
    pub fn into_task(self) -> Option<Task> {
        match self {
            TaskResponse::Task(task) => Some(*task),
            TaskResponse::Empty => None,
        }
    }

    /// Borrow the task in the response, if present
    pub fn task(&self) -> Option<&Task> {
        match self {
            TaskResponse::Task(task) => Some(task),
            TaskResponse::Empty => None,
        }
    }

    /// Check if the response is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, TaskResponse::Empty)
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse::Task(Box::new(task))
    }
}
