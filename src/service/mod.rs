//! Types exchanged with a task orchestrator through a Tower `Service`
//!
//! The orchestrator itself lives outside this crate: any
//! `Service<TaskOperation, Response = TaskResponse, Error = A2AError>` fits.

pub mod response;

pub use response::TaskResponse;
