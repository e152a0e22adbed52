//! Request parameters for task operations

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::message::Message;

/// Free-form metadata attached to a request
pub type Metadata = HashMap<String, Value>;

/// Generate a random session id: 32 lowercase hex characters
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Identifies a task, e.g. when canceling it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskIdParams {
    /// The task id
    pub id: String,

    /// Optional metadata for additional context
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl TaskIdParams {
    /// Create params targeting the given task
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: None,
        }
    }

    /// Add a metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}

/// Identifies a task and bounds how much history to return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskQueryParams {
    /// The task id
    pub id: String,

    /// Optional metadata for additional context
    #[serde(default)]
    pub metadata: Option<Metadata>,

    /// Maximum number of most recent history messages to return
    #[serde(default)]
    pub history_length: Option<i64>,
}

impl TaskQueryParams {
    /// Create a query for the given task
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: None,
            history_length: None,
        }
    }

    /// Limit the returned history
    pub fn with_history_length(mut self, length: i64) -> Self {
        self.history_length = Some(length);
        self
    }

    /// Add a metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }

    /// The id params this query extends
    pub fn id_params(&self) -> TaskIdParams {
        TaskIdParams {
            id: self.id.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl From<TaskIdParams> for TaskQueryParams {
    fn from(params: TaskIdParams) -> Self {
        Self {
            id: params.id,
            metadata: params.metadata,
            history_length: None,
        }
    }
}

/// Request envelope to initiate or continue a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskSendParams {
    /// Task id, usually generated client-side
    pub id: String,

    /// Groups related tasks; generated when omitted
    #[serde(default = "new_session_id")]
    pub session_id: String,

    /// The message that initiates or continues the task
    pub message: Message,

    /// Maximum number of most recent history messages to return
    #[serde(default)]
    pub history_length: Option<i64>,

    /// Optional metadata for additional context
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl TaskSendParams {
    /// Create send params with a fresh session id
    pub fn new(id: impl Into<String>, message: Message) -> Self {
        Self {
            id: id.into(),
            session_id: new_session_id(),
            message,
            history_length: None,
            metadata: None,
        }
    }

    /// Continue an existing session
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Limit the returned history
    pub fn with_history_length(mut self, length: i64) -> Self {
        self.history_length = Some(length);
        self
    }

    /// Add a metadata field
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }
}
