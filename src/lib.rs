//! # Tower A2A Tasks
//!
//! Task schemas for the Agent2Agent (A2A) protocol, with codecs and a Tower
//! validation layer.
//!
//! This library defines the records a client and an agent exchange about a
//! task: parts, messages, task status and state, tasks, and the parameters of
//! the send/get/cancel operations. Records are plain immutable values; the
//! crate does no networking, storage or state-transition enforcement.
//!
//! ## Features
//!
//! - **Checked construction**: untyped JSON becomes records only through
//!   [`protocol::validate`], failing with a [`protocol::ValidationError`]
//! - **Wire compatible**: field names and literals match the A2A JSON shapes
//! - **Codecs**: bare JSON and JSON-RPC 2.0 framing for task operations
//! - **Middleware**: a Tower layer validating operations for any orchestrator service
//!
//! ## Example
//!
//! ```rust
//! use tower_a2a_tasks::prelude::*;
//!
//! let task = Task::new("t1", TaskStatus::new(TaskState::Submitted))
//!     .with_history_message(Message::new(Role::User, vec![Part::text("hello")]));
//!
//! assert_eq!(task.status.state, TaskState::Submitted);
//! assert_eq!(task.history[0].parts[0].as_text(), Some("hello"));
//!
//! let params = TaskSendParams::new("t1", Message::user("hello"));
//! assert_eq!(params.session_id.len(), 32);
//! ```

pub mod codec;
pub mod config;
pub mod layer;
pub mod protocol;
pub mod service;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        codec::{Codec, JsonCodec, JsonRpcCodec},
        config::ValidationConfig,
        layer::TaskValidationLayer,
        protocol::{
            A2AError, Message, Part, Role, Task, TaskIdParams, TaskOperation, TaskQueryParams,
            TaskSendParams, TaskState, TaskStatus, TextPart, ValidationError,
        },
        service::TaskResponse,
    };
}
