//! A2A task types

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{error::ValidationError, message::Message};

/// A task in the A2A protocol
///
/// The task is the aggregate root: it owns its current status and the
/// conversation history exchanged so far. Only the most recent status is
/// kept; history is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Conversation history, oldest first
    pub history: Vec<Message>,
}

impl Task {
    /// Create a task with an empty history
    pub fn new(id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            status,
            history: Vec::new(),
        }
    }

    /// Create a freshly submitted task whose history starts with `message`
    pub fn submitted(id: impl Into<String>, message: Message) -> Self {
        Self::new(id, TaskStatus::new(TaskState::Submitted)).with_history_message(message)
    }

    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }

    /// Replace the current status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Append a message to the history
    pub fn with_history_message(mut self, message: Message) -> Self {
        self.history.push(message);
        self
    }

    /// Keep only the most recent `length` history messages
    ///
    /// `None` keeps the full history; zero or a negative length clears it.
    pub fn with_history_length(mut self, length: Option<i64>) -> Self {
        if let Some(length) = length {
            let keep = usize::try_from(length.max(0)).unwrap_or(usize::MAX);
            if self.history.len() > keep {
                self.history.drain(..self.history.len() - keep);
            }
        }
        self
    }
}

/// Status of a task at a given moment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStatus {
    /// Lifecycle label
    pub state: TaskState,

    /// When this status was recorded
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl TaskStatus {
    /// Create a status stamped with the current time
    pub fn new(state: TaskState) -> Self {
        Self::at(state, Utc::now())
    }

    /// Create a status with an explicit timestamp
    pub fn at(state: TaskState, timestamp: DateTime<Utc>) -> Self {
        Self { state, timestamp }
    }
}

/// Lifecycle labels a task status may hold
///
/// No transition table exists: any state may follow any other.
/// Unrecognized labels deserialize to [`TaskState::Unknown`] and are logged at
/// warn level, since the original label does not survive re-serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum TaskState {
    /// Task has been received
    Submitted,

    /// Task is in progress
    Working,

    /// Agent is waiting for more input
    InputRequired,

    /// Task is done
    Completed,

    /// Task was canceled by the user or the system
    Canceled,

    /// Task failed
    Failed,

    /// Undefined or unrecognized state
    Unknown,
}

impl TaskState {
    /// All states, in declaration order
    pub const ALL: [TaskState; 7] = [
        TaskState::Submitted,
        TaskState::Working,
        TaskState::InputRequired,
        TaskState::Completed,
        TaskState::Canceled,
        TaskState::Failed,
        TaskState::Unknown,
    ];

    /// Wire literal of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Submitted => "submitted",
            TaskState::Working => "working",
            TaskState::InputRequired => "input-required",
            TaskState::Completed => "completed",
            TaskState::Canceled => "canceled",
            TaskState::Failed => "failed",
            TaskState::Unknown => "unknown",
        }
    }

    /// Check if this is a terminal state by naming convention
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Canceled | TaskState::Failed
        )
    }

    /// Check if the agent is waiting on the client
    pub fn requires_input(&self) -> bool {
        matches!(self, TaskState::InputRequired)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ValidationError::field("state", format!("unknown task state '{}'", s)))
    }
}

impl From<String> for TaskState {
    fn from(label: String) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(label = %label, "unrecognized task state, relabeled as unknown");
            TaskState::Unknown
        })
    }
}
