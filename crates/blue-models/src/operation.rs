//! Long-running operation types.
//!
//! A Blue service that starts asynchronous work (a cost calculation, a
//! report export) returns an [`Operation`] handle. The client only ever
//! observes the operation by polling; it is never mutated locally.
//! `response` and `error` form a result union: at most one is set, and
//! only when `done` is true.

use serde::{Deserialize, Serialize};

/// A server-side long-running operation.
///
/// # Examples
///
/// ```
/// use blue_models::Operation;
///
/// let op: Operation = serde_json::from_str(
///     r#"{"name":"operations/calc-123","done":false}"#,
/// ).unwrap();
/// assert_eq!(op.name, "operations/calc-123");
/// assert!(!op.done);
/// assert!(op.response().is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Operation {
    /// Opaque handle assigned by the server, e.g. `operations/calc-123`.
    pub name: String,
    /// True once the operation has finished, successfully or not.
    #[serde(default)]
    pub done: bool,
    /// Service-specific progress payload; shape varies per operation type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Success payload; set iff the operation finished successfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    /// Failure status; set iff the operation finished unsuccessfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
}

/// Error reported by a failed operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl Operation {
    /// Result of the operation if it finished successfully.
    pub fn response(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()
    }

    /// Error of the operation if it finished unsuccessfully.
    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pending_operation_has_no_result() {
        let op: Operation =
            serde_json::from_value(json!({"name": "operations/x", "done": false})).unwrap();
        assert!(!op.done);
        assert!(op.response().is_none());
        assert!(op.error().is_none());
    }

    #[test]
    fn done_operation_with_response() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/x",
            "done": true,
            "response": {"rows": 42}
        }))
        .unwrap();
        assert!(op.done);
        assert_eq!(op.response().unwrap()["rows"], 42);
    }

    #[test]
    fn done_operation_with_error() {
        let op: Operation = serde_json::from_value(json!({
            "name": "operations/x",
            "done": true,
            "error": {"code": 5, "message": "not found"}
        }))
        .unwrap();
        let err = op.error().unwrap();
        assert_eq!(err.code, 5);
        assert_eq!(err.message, "not found");
    }

    #[test]
    fn serialized_pending_operation_stays_lean() {
        let op = Operation {
            name: "operations/y".into(),
            done: false,
            metadata: Some(json!({"stage": "fetching"})),
            response: None,
            error: None,
        };
        let value = serde_json::to_value(&op).unwrap();
        assert!(value.get("response").is_none());
        assert!(value.get("error").is_none());

        let back: Operation = serde_json::from_value(value).unwrap();
        assert_eq!(back, op);
    }
}
