//! Integration tests for MCP protocol handling.
//!
//! These tests verify the MCP server's JSON-RPC 2.0 protocol implementation,
//! including request/response handling, error responses, and lifecycle management.

use xano_developer_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use xano_developer_mcp::mcp::server::{ToolCallResult, ToolContent};

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {
            "name": "xanoscript_docs",
            "arguments": { "topic": "syntax" }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "tools/call");
        assert_eq!(req.id, RequestId::Number(2));
        assert!(req.params.is_some());
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_resources_read_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 3,
        "method": "resources/read",
        "params": { "uri": "xanoscript://docs/syntax" }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "resources/read");
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Notification(notif) = result.unwrap() {
        assert_eq!(notif.method, "notifications/initialized");
    } else {
        panic!("Expected Notification");
    }
}

#[test]
fn test_parse_invalid_json() {
    let json = "not valid json";

    let result = parse_message(json);
    assert!(result.is_err());
}

#[test]
fn test_parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    let result = parse_message(json);
    assert!(result.is_err());
}

// =============================================================================
// Tool Result Serialisation Tests
// =============================================================================

#[test]
fn test_tool_result_text_wire_shape() {
    let result = ToolCallResult::text("hello");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["content"][0]["type"], "text");
    assert_eq!(value["content"][0]["text"], "hello");
    // isError is omitted on success
    assert!(value.get("isError").is_none());
}

#[test]
fn test_tool_result_error_wire_shape() {
    let result = ToolCallResult::error("something broke");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["isError"], true);
    assert_eq!(value["content"][0]["text"], "something broke");
}

#[test]
fn test_tool_result_multiple_blocks() {
    let result = ToolCallResult::texts(vec!["one".to_string(), "two".to_string()]);
    assert_eq!(result.content.len(), 2);
    let ToolContent::Text { text } = &result.content[1];
    assert_eq!(text, "two");
}
