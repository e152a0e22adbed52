//! Serialization codecs for task operations

pub mod json;
pub mod jsonrpc;

pub use json::JsonCodec;
pub use jsonrpc::{IncomingRequest, JsonRpcCodec};

use crate::{
    protocol::{error::A2AError, operation::TaskOperation},
    service::response::TaskResponse,
};
use bytes::Bytes;

/// Codec trait for encoding and decoding task operations
///
/// Different codecs implement different framings of the same operations
/// (bare JSON params, JSON-RPC 2.0 envelopes).
pub trait Codec: Send + Sync {
    /// Serialize a task operation to bytes
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation to encode
    fn encode_request(&self, operation: &TaskOperation) -> Result<Bytes, A2AError>;

    /// Deserialize response bytes for a previously encoded operation
    ///
    /// # Arguments
    ///
    /// * `body` - The response body bytes
    /// * `operation` - The original operation (for context)
    fn decode_response(
        &self,
        body: &[u8],
        operation: &TaskOperation,
    ) -> Result<TaskResponse, A2AError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &str;
}
