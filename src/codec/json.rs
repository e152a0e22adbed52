//! Bare JSON codec: operation params and tasks without an envelope

use bytes::Bytes;
use serde_json::Value;

use crate::{
    codec::Codec,
    protocol::{
        error::A2AError,
        operation::{TaskOperation, METHOD_CANCEL, METHOD_GET, METHOD_SEND},
        task::Task,
        validate,
    },
    service::response::TaskResponse,
};

/// JSON codec that writes operation params directly
///
/// The operation itself is not part of the payload; callers that need to
/// recover it from bytes use [`JsonCodec::decode_operation`] with the method
/// name carried out of band.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }

    /// Serialize the params of an operation to a JSON value
    pub fn params_value(operation: &TaskOperation) -> Result<Value, A2AError> {
        let value = match operation {
            TaskOperation::Send(params) => serde_json::to_value(params)?,
            TaskOperation::Get(params) => serde_json::to_value(params)?,
            TaskOperation::Cancel(params) => serde_json::to_value(params)?,
        };
        Ok(value)
    }

    /// Rebuild an operation from its method name and params
    pub fn decode_operation(method: &str, params: Value) -> Result<TaskOperation, A2AError> {
        let operation = match method {
            METHOD_SEND => TaskOperation::Send(validate::from_value(params)?),
            METHOD_GET => TaskOperation::Get(validate::from_value(params)?),
            METHOD_CANCEL => TaskOperation::Cancel(validate::from_value(params)?),
            other => return Err(A2AError::MethodNotFound(other.to_string())),
        };
        Ok(operation)
    }

    /// Deserialize a task result
    pub fn decode_task(value: Value) -> Result<TaskResponse, A2AError> {
        if value.is_null() {
            return Ok(TaskResponse::Empty);
        }
        let task: Task = validate::from_value(value)?;
        Ok(TaskResponse::from(task))
    }

    /// Serialize a response to a JSON value, `null` when empty
    pub fn response_value(response: &TaskResponse) -> Result<Value, A2AError> {
        match response {
            TaskResponse::Task(task) => Ok(serde_json::to_value(task)?),
            TaskResponse::Empty => Ok(Value::Null),
        }
    }
}

impl Codec for JsonCodec {
    fn encode_request(&self, operation: &TaskOperation) -> Result<Bytes, A2AError> {
        let params = Self::params_value(operation)?;
        let bytes = serde_json::to_vec(&params)?;
        Ok(Bytes::from(bytes))
    }

    fn decode_response(
        &self,
        body: &[u8],
        _operation: &TaskOperation,
    ) -> Result<TaskResponse, A2AError> {
        if body.is_empty() {
            return Ok(TaskResponse::Empty);
        }

        let value: Value = serde_json::from_slice(body)?;
        Self::decode_task(value)
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
