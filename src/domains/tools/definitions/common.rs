//! Common utilities shared across tool definitions.
//!
//! Response-envelope helpers and the argument-validation step every tool
//! runs before its handler sees typed parameters.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Create an error-flagged result with a plain message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result holding a pretty-printed JSON payload.
pub fn json_result(payload: &impl Serialize) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {e}")),
    }
}

/// Check that every required argument is present (and not null).
///
/// Returns an error-flagged result naming the tool's required set when any
/// key is missing, so the handler (and any upstream call) never runs.
pub fn require_args(
    args: &serde_json::Map<String, serde_json::Value>,
    required: &[&str],
) -> Option<CallToolResult> {
    let any_missing = required
        .iter()
        .any(|key| args.get(*key).is_none_or(serde_json::Value::is_null));

    if !any_missing {
        return None;
    }

    let message = if required.len() == 1 {
        format!("Missing required argument: {}", required[0])
    } else {
        format!("Missing required arguments: {}", required.join(", "))
    };
    Some(error_result(&message))
}

/// Deserialize the argument map into a tool's typed parameters.
pub fn parse_args<P: DeserializeOwned>(
    args: serde_json::Map<String, serde_json::Value>,
) -> Result<P, CallToolResult> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| error_result(&format!("Invalid arguments: {e}")))
}

/// Serialize a tool result into the wire envelope used by the HTTP transport.
#[cfg(feature = "http")]
pub fn envelope(result: &CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_require_args_all_present() {
        let args = serde_json::json!({ "origin": "JFK", "destination": "LHR" });
        let args = args.as_object().cloned().unwrap();
        assert!(require_args(&args, &["origin", "destination"]).is_none());
    }

    #[test]
    fn test_require_args_single_missing() {
        let args = serde_json::Map::new();
        let result = require_args(&args, &["destination"]).unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Missing required argument: destination");
    }

    #[test]
    fn test_require_args_names_full_required_set() {
        let args = serde_json::json!({ "origin": "JFK" });
        let args = args.as_object().cloned().unwrap();
        let result = require_args(&args, &["origin", "destination", "departDate"]).unwrap();
        assert_eq!(
            text_of(&result),
            "Missing required arguments: origin, destination, departDate"
        );
    }

    #[test]
    fn test_require_args_null_counts_as_missing() {
        let args = serde_json::json!({ "query": null });
        let args = args.as_object().cloned().unwrap();
        assert!(require_args(&args, &["query"]).is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_envelope_wire_shape() {
        let env = envelope(&error_result("boom"));
        assert_eq!(env["isError"], serde_json::json!(true));
        assert_eq!(env["content"][0]["type"], "text");
        assert_eq!(env["content"][0]["text"], "boom");
    }

    #[test]
    fn test_json_result_pretty_prints() {
        let result = json_result(&serde_json::json!({ "a": 1 }));
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(text_of(&result).contains("\"a\": 1"));
    }
}
