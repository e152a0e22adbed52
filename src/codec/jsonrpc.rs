//! JSON-RPC 2.0 codec for task operations
//!
//! Wraps operation params in JSON-RPC request envelopes and task results in
//! response envelopes. Both directions are covered: clients encode requests
//! and decode responses, agents decode requests and encode responses.

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    codec::Codec,
    protocol::{
        error::{A2AError, INVALID_REQUEST},
        operation::TaskOperation,
    },
    service::response::TaskResponse,
};

use super::json::JsonCodec;

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Serialize, Deserialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing field is `None`
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Serialize, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

/// A request decoded on the agent side
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingRequest {
    /// Request id to echo in the response
    pub id: Value,

    /// The decoded operation
    pub operation: TaskOperation,
}

/// JSON-RPC 2.0 codec for task operations
#[derive(Debug, Clone, Default)]
pub struct JsonRpcCodec {
    /// Inner JSON codec for the params and results
    inner: JsonCodec,
}

impl JsonRpcCodec {
    /// Create a new JSON-RPC codec
    pub fn new() -> Self {
        Self {
            inner: JsonCodec::new(),
        }
    }

    /// Decode an incoming request envelope into an operation
    pub fn decode_request(&self, body: &[u8]) -> Result<IncomingRequest, A2AError> {
        // Malformed JSON is a parse error; well-formed JSON that is not a
        // request object is an invalid request
        let request: JsonRpcRequest = serde_json::from_slice(body).map_err(|e| {
            if e.is_syntax() || e.is_eof() {
                A2AError::Serialization(e)
            } else {
                A2AError::Protocol(format!("Invalid JSON-RPC request: {}", e))
            }
        })?;

        if request.jsonrpc != JSONRPC_VERSION {
            return Err(A2AError::Protocol(format!(
                "Unsupported JSON-RPC version '{}'",
                request.jsonrpc
            )));
        }

        tracing::debug!(method = %request.method, id = %request.id, "decoding task request");

        let operation = JsonCodec::decode_operation(&request.method, request.params)
            .inspect_err(|e| {
                tracing::warn!(method = %request.method, error = %e, "rejected task request")
            })?;

        Ok(IncomingRequest {
            id: request.id,
            operation,
        })
    }

    /// Encode a successful response to the request with the given id
    pub fn encode_response(&self, id: &Value, response: &TaskResponse) -> Result<Bytes, A2AError> {
        let envelope = JsonRpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.clone(),
            result: Some(JsonCodec::response_value(response)?),
            error: None,
        };

        let bytes = serde_json::to_vec(&envelope)?;
        Ok(Bytes::from(bytes))
    }

    /// Encode an error response to the request with the given id
    ///
    /// Pass `Value::Null` when the request id could not be read.
    pub fn encode_error(&self, id: &Value, error: &A2AError) -> Result<Bytes, A2AError> {
        let data = match error {
            A2AError::JsonRpc { data, .. } => data.clone(),
            _ => None,
        };

        let envelope = JsonRpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.clone(),
            result: None,
            error: Some(JsonRpcError {
                code: error.code(),
                message: error.to_string(),
                data,
            }),
        };

        let bytes = serde_json::to_vec(&envelope)?;
        Ok(Bytes::from(bytes))
    }
}

impl Codec for JsonRpcCodec {
    fn encode_request(&self, operation: &TaskOperation) -> Result<Bytes, A2AError> {
        let request = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Value::String(Uuid::now_v7().to_string()),
            method: operation.method().to_string(),
            params: JsonCodec::params_value(operation)?,
        };

        let bytes = serde_json::to_vec(&request)?;
        Ok(Bytes::from(bytes))
    }

    fn decode_response(
        &self,
        body: &[u8],
        operation: &TaskOperation,
    ) -> Result<TaskResponse, A2AError> {
        if body.is_empty() {
            return Ok(TaskResponse::Empty);
        }

        let response: JsonRpcResponse = serde_json::from_slice(body)
            .map_err(|e| A2AError::Protocol(format!("Failed to parse JSON-RPC response: {}", e)))?;

        if let Some(error) = response.error {
            tracing::debug!(
                code = error.code,
                message = %error.message,
                task_id = operation.task_id(),
                "JSON-RPC error response"
            );
            return Err(A2AError::JsonRpc {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        let result = response.result.ok_or_else(|| A2AError::JsonRpc {
            code: INVALID_REQUEST,
            message: "JSON-RPC response missing 'result' field".to_string(),
            data: None,
        })?;

        let result_bytes = serde_json::to_vec(&result)?;
        self.inner.decode_response(&result_bytes, operation)
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
