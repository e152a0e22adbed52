//! Core A2A task types and definitions

pub mod error;
pub mod message;
pub mod operation;
pub mod params;
pub mod part;
pub mod task;
pub mod validate;

pub use error::{A2AError, A2AResult, ValidationError};
pub use message::{Message, MessageBuilder, Role};
pub use operation::TaskOperation;
pub use params::{new_session_id, Metadata, TaskIdParams, TaskQueryParams, TaskSendParams};
pub use part::{Part, TextPart};
pub use task::{Task, TaskState, TaskStatus};
