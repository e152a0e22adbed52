//! Construction of records from untyped data
//!
//! These are the checked entry points for data arriving from outside the
//! type system: every field is checked for type, presence and literal-set
//! membership, and defaults (status timestamps, session ids) are applied.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ValidationError;

/// Build a record from a JSON value
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(ValidationError::from)
}

/// Build a record from a JSON document
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ValidationError> {
    serde_json::from_str(json).map_err(ValidationError::from)
}

/// Build a record from JSON bytes
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    serde_json::from_slice(bytes).map_err(ValidationError::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::{Message, Task, TaskQueryParams, TaskState};

    #[test]
    fn test_task_from_value() {
        let task: Task = from_value(json!({
            "id": "t1",
            "status": {"state": "submitted"},
            "history": [{"role": "user", "parts": [{"type": "text", "text": "hello"}]}]
        }))
        .unwrap();

        assert_eq!(task.status.state, TaskState::Submitted);
        assert_eq!(task.history[0].parts[0].as_text(), Some("hello"));
    }

    #[test]
    fn test_task_rejects_invalid_fields() {
        let status = json!({"state": "working"});

        assert!(from_value::<Task>(json!({"id": 1, "status": status, "history": []})).is_err());
        assert!(from_value::<Task>(json!({"id": "t", "status": "working", "history": []})).is_err());
        assert!(from_value::<Task>(json!({
            "id": "t",
            "status": status,
            "history": [{"role": "user"}]
        }))
        .is_err());
    }

    #[test]
    fn test_message_from_json() {
        let err = from_json::<Message>(r#"{"role": "system", "parts": []}"#).unwrap_err();
        assert!(err.message.contains("system"));

        let msg: Message =
            from_slice(br#"{"role": "agent", "parts": [{"text": "a"}, {"text": "b"}]}"#).unwrap();
        assert_eq!(msg.text(), "a\nb");
    }

    #[test]
    fn test_query_rejects_textual_history_length() {
        let result = from_value::<TaskQueryParams>(json!({"id": "t1", "historyLength": "five"}));
        assert!(result.is_err());
    }
}
