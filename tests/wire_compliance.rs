//! A2A task wire-format compliance tests
//!
//! These tests verify that records serialize to the JSON shapes agents and
//! clients exchange, and that untyped input is checked on construction.

use chrono::{TimeZone, Utc};
use serde_json::json;
use tower_a2a_tasks::{
    codec::{Codec, JsonRpcCodec},
    protocol::{
        validate, Message, Part, Role, Task, TaskOperation, TaskQueryParams, TaskSendParams,
        TaskState, TaskStatus, TextPart,
    },
    service::TaskResponse,
};

#[test]
fn test_example_task_constructs() {
    let task = Task::new("t1", TaskStatus::new(TaskState::Submitted)).with_history_message(
        Message::new(Role::User, vec![Part::from(TextPart::new("hello"))]),
    );

    assert_eq!(task.status.state, TaskState::Submitted);
    assert_eq!(task.history[0].parts[0].as_text(), Some("hello"));
}

#[test]
fn test_role_serialization() {
    let json = serde_json::to_value(Message::user("Hello")).unwrap();
    assert_eq!(json["role"], "user");

    let json = serde_json::to_value(Message::agent("Hi there")).unwrap();
    assert_eq!(json["role"], "agent");
}

#[test]
fn test_system_role_rejected() {
    let result = validate::from_value::<Message>(json!({"role": "system", "parts": []}));
    assert!(result.is_err());
    assert!("system".parse::<Role>().is_err());
}

#[test]
fn test_text_part_discriminator() {
    let json = serde_json::to_value(Part::text("Hello, world!")).unwrap();
    assert_eq!(json, json!({"type": "text", "text": "Hello, world!"}));
}

#[test]
fn test_task_state_literals() {
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let expected = [
        (TaskState::Submitted, "submitted"),
        (TaskState::Working, "working"),
        (TaskState::InputRequired, "input-required"),
        (TaskState::Completed, "completed"),
        (TaskState::Canceled, "canceled"),
        (TaskState::Failed, "failed"),
        (TaskState::Unknown, "unknown"),
    ];

    for (state, literal) in expected {
        let task = Task::new("t1", TaskStatus::at(state, timestamp));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"]["state"], literal);
    }
}

#[test]
fn test_params_field_naming() {
    let params = TaskSendParams::new("t1", Message::user("Test")).with_history_length(3);
    let json = serde_json::to_value(&params).unwrap();

    assert!(json.get("sessionId").is_some());
    assert_eq!(json["historyLength"], 3);
    assert!(json.get("session_id").is_none());
    assert!(json.get("history_length").is_none());

    let json = serde_json::to_value(TaskQueryParams::new("t1").with_history_length(2)).unwrap();
    assert_eq!(json["historyLength"], 2);
}

#[test]
fn test_query_history_length_must_be_integer() {
    let result =
        validate::from_value::<TaskQueryParams>(json!({"id": "t1", "historyLength": "five"}));
    assert!(result.is_err());

    let params =
        validate::from_value::<TaskQueryParams>(json!({"id": "t1", "historyLength": 5})).unwrap();
    assert_eq!(params.history_length, Some(5));
}

#[test]
fn test_generated_session_ids() {
    let first = TaskSendParams::new("t1", Message::user("a"));
    let second = TaskSendParams::new("t1", Message::user("a"));

    for session_id in [&first.session_id, &second.session_id] {
        assert_eq!(session_id.len(), 32);
        assert!(session_id.chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_ne!(first.session_id, second.session_id);
}

#[test]
fn test_task_round_trip() {
    let task = Task::new("t1", TaskStatus::new(TaskState::Working))
        .with_history_message(Message::user("What time is it?"))
        .with_history_message(
            Message::builder()
                .role(Role::Agent)
                .text("It is")
                .text("noon")
                .build()
                .unwrap(),
        );

    let json = serde_json::to_string(&task).unwrap();
    let restored: Task = validate::from_json(&json).unwrap();

    assert_eq!(restored.id, task.id);
    assert_eq!(restored.status.state, task.status.state);
    assert_eq!(restored.status.timestamp, task.status.timestamp);
    assert_eq!(restored.history, task.history);
}

#[test]
fn test_task_deserialization_from_wire_example() {
    let wire = json!({
        "id": "task-42",
        "status": {"state": "input-required", "timestamp": "2024-05-01T12:00:00Z"},
        "history": [
            {"role": "user", "parts": [{"type": "text", "text": "Book a table"}]},
            {"role": "agent", "parts": [{"type": "text", "text": "For how many?"}]}
        ]
    });

    let task: Task = validate::from_value(wire).unwrap();
    assert!(task.status.state.requires_input());
    assert_eq!(
        task.status.timestamp,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(task.history[1].role, Role::Agent);
    assert_eq!(task.history[1].text(), "For how many?");
}

#[test]
fn test_jsonrpc_exchange() {
    let codec = JsonRpcCodec::new();
    let operation = TaskOperation::from(
        TaskSendParams::new("t1", Message::user("hello")).with_session_id("session-1"),
    );

    // Client encodes, agent decodes
    let request = codec.encode_request(&operation).unwrap();
    let incoming = codec.decode_request(&request).unwrap();
    assert_eq!(incoming.operation, operation);

    // Agent answers, client decodes
    let task = Task::submitted("t1", Message::user("hello"))
        .with_history_message(Message::agent("hi"))
        .with_status(TaskStatus::new(TaskState::Completed));
    let reply = codec
        .encode_response(&incoming.id, &TaskResponse::from(task.clone()))
        .unwrap();

    let response = codec.decode_response(&reply, &operation).unwrap();
    assert_eq!(response.into_task(), Some(task));
}
