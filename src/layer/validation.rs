//! Validation layer for task operations and the tasks returned for them

use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt};
use tower_layer::Layer;
use tower_service::Service;

use crate::{
    config::ValidationConfig,
    protocol::{
        error::{A2AError, ValidationError},
        operation::TaskOperation,
    },
    service::TaskResponse,
};

/// Layer that validates task operations before they reach an orchestrator
#[derive(Clone, Debug, Default)]
pub struct TaskValidationLayer {
    config: ValidationConfig,
}

impl TaskValidationLayer {
    /// Create a new validation layer
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for TaskValidationLayer {
    type Service = TaskValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TaskValidationService {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone, Debug)]
pub struct TaskValidationService<S> {
    inner: S,
    config: ValidationConfig,
}

impl<S> TaskValidationService<S> {
    /// Validate an operation against the configured policy
    fn validate_request(
        config: &ValidationConfig,
        operation: &TaskOperation,
    ) -> Result<(), ValidationError> {
        if operation.task_id().is_empty() {
            return Err(ValidationError::field("id", "task id cannot be empty"));
        }

        if let TaskOperation::Send(params) = operation {
            if params.session_id.is_empty() {
                return Err(ValidationError::field(
                    "sessionId",
                    "session id cannot be empty",
                ));
            }
            if config.require_message_parts && params.message.parts.is_empty() {
                return Err(ValidationError::field(
                    "message.parts",
                    "message must have at least one part",
                ));
            }
        }

        if let Some(requested) = operation.history_length() {
            if requested < 0 {
                return Err(ValidationError::field(
                    "historyLength",
                    format!("{} is negative", requested),
                ));
            }
        }

        if let (Some(requested), Some(max)) =
            (operation.history_length(), config.max_history_length)
        {
            if requested > i64::from(max) {
                return Err(ValidationError::field(
                    "historyLength",
                    format!("{} exceeds the maximum of {}", requested, max),
                ));
            }
        }

        Ok(())
    }

    /// Validate a response for the task with the given id
    fn validate_response(task_id: &str, response: &TaskResponse) -> Result<(), ValidationError> {
        if let TaskResponse::Task(task) = response {
            if task.id.is_empty() {
                return Err(ValidationError::field("id", "returned task has an empty id"));
            }
            if task.id != task_id {
                return Err(ValidationError::field(
                    "id",
                    format!("expected task '{}', got '{}'", task_id, task.id),
                ));
            }
        }

        Ok(())
    }
}

impl<S> Service<TaskOperation> for TaskValidationService<S>
where
    S: Service<TaskOperation, Response = TaskResponse, Error = A2AError> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = TaskResponse;
    type Error = A2AError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, operation: TaskOperation) -> Self::Future {
        if let Err(e) = Self::validate_request(&self.config, &operation) {
            tracing::debug!(
                method = operation.method(),
                task_id = operation.task_id(),
                error = %e,
                "rejected task operation"
            );
            return futures::future::ready(Err(A2AError::from(e))).boxed();
        }

        let task_id = operation.task_id().to_string();
        let history_length = operation.history_length();
        let validate_responses = self.config.validate_responses;

        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        async move {
            let response = inner.call(operation).await?;

            if validate_responses {
                Self::validate_response(&task_id, &response).inspect_err(|e| {
                    tracing::warn!(task_id = %task_id, error = %e, "invalid task response")
                })?;
            }

            let response = match response {
                TaskResponse::Task(task) => {
                    TaskResponse::from((*task).with_history_length(history_length))
                }
                TaskResponse::Empty => TaskResponse::Empty,
            };
            Ok::<_, A2AError>(response)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use serde_json::json;
    use tower::{service_fn, ServiceBuilder, ServiceExt};

    use super::*;
    use crate::protocol::{
        message::{Message, Role},
        params::{TaskIdParams, TaskQueryParams, TaskSendParams},
        task::{Task, TaskState, TaskStatus},
        validate,
    };

    fn conversation(id: &str) -> Task {
        Task::submitted(id, Message::user("1"))
            .with_history_message(Message::agent("2"))
            .with_history_message(Message::user("3"))
            .with_status(TaskStatus::new(TaskState::InputRequired))
    }

    #[test]
    fn test_validate_send() {
        let config = ValidationConfig::default();
        let op = TaskOperation::Send(TaskSendParams::new("t1", Message::user("Hello")));
        assert!(TaskValidationService::<()>::validate_request(&config, &op).is_ok());

        let op = TaskOperation::Send(TaskSendParams::new("t1", Message::new(Role::User, vec![])));
        let err = TaskValidationService::<()>::validate_request(&config, &op).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("message.parts"));

        let relaxed = config.with_require_message_parts(false);
        assert!(TaskValidationService::<()>::validate_request(&relaxed, &op).is_ok());
    }

    #[test]
    fn test_validate_empty_ids() {
        let config = ValidationConfig::default();

        let op = TaskOperation::Cancel(TaskIdParams::new(""));
        assert!(TaskValidationService::<()>::validate_request(&config, &op).is_err());

        let op = TaskOperation::Send(
            TaskSendParams::new("t1", Message::user("Hello")).with_session_id(""),
        );
        let err = TaskValidationService::<()>::validate_request(&config, &op).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("sessionId"));
    }

    #[test]
    fn test_validate_history_bound() {
        let config = ValidationConfig::default().with_max_history_length(10);

        let op = TaskOperation::Get(TaskQueryParams::new("t1").with_history_length(10));
        assert!(TaskValidationService::<()>::validate_request(&config, &op).is_ok());

        let op = TaskOperation::Get(TaskQueryParams::new("t1").with_history_length(11));
        let err = TaskValidationService::<()>::validate_request(&config, &op).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("historyLength"));
    }

    #[test]
    fn test_validate_negative_history_length() {
        let config = ValidationConfig::default();
        let params: TaskQueryParams =
            validate::from_value(json!({"id": "t1", "historyLength": -1})).unwrap();
        assert_eq!(params.history_length, Some(-1));

        let op = TaskOperation::Get(params);
        let err = TaskValidationService::<()>::validate_request(&config, &op).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("historyLength"));

        let op = TaskOperation::Send(
            TaskSendParams::new("t1", Message::user("Hello")).with_history_length(-5),
        );
        assert!(TaskValidationService::<()>::validate_request(&config, &op).is_err());

        let op = TaskOperation::Get(TaskQueryParams::new("t1").with_history_length(5_000_000_000));
        assert!(TaskValidationService::<()>::validate_request(&config, &op).is_ok());
    }

    #[test]
    fn test_validate_response() {
        let response = TaskResponse::from(conversation("t1"));
        assert!(TaskValidationService::<()>::validate_response("t1", &response).is_ok());
        assert!(TaskValidationService::<()>::validate_response("t2", &response).is_err());
        assert!(TaskValidationService::<()>::validate_response("t1", &TaskResponse::Empty).is_ok());
    }

    #[tokio::test]
    async fn test_rejects_before_inner_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let inner = service_fn(move |op: TaskOperation| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, A2AError>(TaskResponse::from(conversation(op.task_id()))) }
        });

        let service = ServiceBuilder::new()
            .layer(TaskValidationLayer::default())
            .service(inner);

        let result = service
            .oneshot(TaskOperation::Get(TaskQueryParams::new("")))
            .await;

        assert!(matches!(result, Err(A2AError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_trims_history() {
        let inner = service_fn(|op: TaskOperation| async move {
            Ok::<_, A2AError>(TaskResponse::from(conversation(op.task_id())))
        });
        let service = TaskValidationLayer::default().layer(inner);

        let response = service
            .oneshot(TaskOperation::Get(
                TaskQueryParams::new("t1").with_history_length(2),
            ))
            .await
            .unwrap();

        let task = response.into_task().unwrap();
        assert_eq!(task.history, vec![Message::agent("2"), Message::user("3")]);
        assert_eq!(task.status.state, TaskState::InputRequired);
    }

    #[tokio::test]
    async fn test_rejects_mismatched_task() {
        let inner = service_fn(|_op: TaskOperation| async move {
            Ok::<_, A2AError>(TaskResponse::from(conversation("other")))
        });

        let result = TaskValidationLayer::default()
            .layer(inner.clone())
            .oneshot(TaskOperation::Cancel(TaskIdParams::new("t1")))
            .await;
        assert!(matches!(result, Err(A2AError::Validation(_))));

        let config = ValidationConfig::default().with_response_validation(false);
        let response = TaskValidationLayer::new(config)
            .layer(inner)
            .oneshot(TaskOperation::Cancel(TaskIdParams::new("t1")))
            .await
            .unwrap();
        assert_eq!(response.into_task().unwrap().id, "other");
    }

    #[tokio::test]
    async fn test_propagates_inner_errors() {
        let inner = service_fn(|op: TaskOperation| async move {
            Err::<TaskResponse, _>(A2AError::JsonRpc {
                code: -32001,
                message: format!("Task not found: {}", op.task_id()),
                data: None,
            })
        });

        let result = TaskValidationLayer::default()
            .layer(inner)
            .oneshot(TaskOperation::Get(TaskQueryParams::new("missing")))
            .await;

        match result {
            Err(A2AError::JsonRpc { code, message, .. }) => {
                assert_eq!(code, -32001);
                assert_eq!(message, "Task not found: missing");
            }
            other => panic!("Expected JSON-RPC error, got {:?}", other),
        }
    }
}
