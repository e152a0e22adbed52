//! A2A task operations

use super::params::{TaskIdParams, TaskQueryParams, TaskSendParams};

/// JSON-RPC method that sends a message to a task
pub const METHOD_SEND: &str = "tasks/send";
/// JSON-RPC method that fetches a task
pub const METHOD_GET: &str = "tasks/get";
/// JSON-RPC method that cancels a task
pub const METHOD_CANCEL: &str = "tasks/cancel";

/// A request a client makes about a task
///
/// Each operation is binding-independent; codecs decide how it is framed.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOperation {
    /// Initiate or continue a task with a message
    Send(TaskSendParams),

    /// Get a task, optionally bounding its history
    Get(TaskQueryParams),

    /// Cancel a task
    Cancel(TaskIdParams),
}

impl TaskOperation {
    /// Id of the task this operation targets
    pub fn task_id(&self) -> &str {
        match self {
            TaskOperation::Send(params) => &params.id,
            TaskOperation::Get(params) => &params.id,
            TaskOperation::Cancel(params) => &params.id,
        }
    }

    /// History cap requested by the caller, if any
    pub fn history_length(&self) -> Option<i64> {
        match self {
            TaskOperation::Send(params) => params.history_length,
            TaskOperation::Get(params) => params.history_length,
            TaskOperation::Cancel(_) => None,
        }
    }

    /// JSON-RPC method name for this operation
    pub fn method(&self) -> &'static str {
        match self {
            TaskOperation::Send(_) => METHOD_SEND,
            TaskOperation::Get(_) => METHOD_GET,
            TaskOperation::Cancel(_) => METHOD_CANCEL,
        }
    }
}

impl From<TaskSendParams> for TaskOperation {
    fn from(params: TaskSendParams) -> Self {
        TaskOperation::Send(params)
    }
}

impl From<TaskQueryParams> for TaskOperation {
    fn from(params: TaskQueryParams) -> Self {
        TaskOperation::Get(params)
    }
}

impl From<TaskIdParams> for TaskOperation {
    fn from(params: TaskIdParams) -> Self {
        TaskOperation::Cancel(params)
    }
}
