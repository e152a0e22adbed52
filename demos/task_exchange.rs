//! Walks one task through a send/get/cancel exchange.
//!
//! The "agent" is a toy in-memory orchestrator behind the validation layer;
//! every request and reply passes through the JSON-RPC codec as bytes.
//!
//! Run with `RUST_LOG=debug cargo run --example task_exchange` to see the
//! codec and layer logs.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use tower::{service_fn, ServiceBuilder, ServiceExt};
use tower_a2a_tasks::prelude::*;
use tracing_subscriber::EnvFilter;

type Store = Arc<Mutex<HashMap<String, Task>>>;

/// Applies an operation to the in-memory store
fn orchestrate(store: &Store, operation: TaskOperation) -> Result<TaskResponse, A2AError> {
    let mut tasks = store
        .lock()
        .map_err(|_| A2AError::Protocol("task store poisoned".into()))?;

    let task = match operation {
        TaskOperation::Send(params) => {
            let reply = Message::agent(format!("You said: {}", params.message.text()));
            let submitted = TaskStatus::new(TaskState::Submitted);
            let task = tasks
                .remove(&params.id)
                .unwrap_or_else(|| Task::new(params.id.clone(), submitted))
                .with_history_message(params.message)
                .with_history_message(reply)
                .with_status(TaskStatus::new(TaskState::InputRequired));
            tasks.insert(params.id, task.clone());
            task
        }
        TaskOperation::Get(params) => tasks.get(&params.id).cloned().ok_or_else(|| {
            A2AError::JsonRpc {
                code: -32001,
                message: format!("Task not found: {}", params.id),
                data: None,
            }
        })?,
        TaskOperation::Cancel(params) => {
            let task = tasks.remove(&params.id).ok_or_else(|| A2AError::JsonRpc {
                code: -32001,
                message: format!("Task not found: {}", params.id),
                data: None,
            })?;
            let task = task.with_status(TaskStatus::new(TaskState::Canceled));
            tasks.insert(params.id, task.clone());
            task
        }
    };

    Ok(TaskResponse::from(task))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store: Store = Arc::default();
    let agent = ServiceBuilder::new()
        .layer(TaskValidationLayer::new(
            ValidationConfig::new().with_max_history_length(20),
        ))
        .service(service_fn(move |operation: TaskOperation| {
            let store = store.clone();
            async move { orchestrate(&store, operation) }
        }));

    let codec = JsonRpcCodec::new();
    let send = TaskSendParams::new("task-1", Message::user("Book a table for two"));
    let session_id = send.session_id.clone();

    let operations = [
        TaskOperation::from(send),
        TaskOperation::from(
            TaskSendParams::new("task-1", Message::user("At seven")).with_session_id(session_id),
        ),
        TaskOperation::from(TaskQueryParams::new("task-1").with_history_length(2)),
        TaskOperation::from(TaskIdParams::new("task-1")),
        TaskOperation::from(TaskQueryParams::new("")),
    ];

    for operation in operations {
        // Client side
        let request = codec.encode_request(&operation)?;

        // Agent side
        let incoming = codec.decode_request(&request)?;
        let reply = match agent.clone().oneshot(incoming.operation).await {
            Ok(response) => codec.encode_response(&incoming.id, &response)?,
            Err(err) => codec.encode_error(&incoming.id, &err)?,
        };

        // Client side
        match codec.decode_response(&reply, &operation) {
            Ok(response) => {
                let task = response.into_task().context("agent returned no task")?;
                println!(
                    "{} {} -> {} ({} messages)",
                    operation.method(),
                    task.id,
                    task.status.state,
                    task.history.len()
                );
            }
            Err(err) => println!("{} '{}' -> {}", operation.method(), operation.task_id(), err),
        }
    }

    Ok(())
}
