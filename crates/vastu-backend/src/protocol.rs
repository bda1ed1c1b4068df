//! JSON-RPC 2.0 protocol types for the consultation service WebSocket.
//!
//! Every service operation is a single request answered by a single response.
//! Parameters are sent positionally, in the order the service interface
//! declares them. This module also provides the request tracker that matches
//! responses to waiting callers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::oneshot;

/// Method names exposed by the consultation service.
pub mod methods {
    pub const GENERATE_REPORT: &str = "generateNumerologyReport";
    pub const GET_VASTU_REMEDIES: &str = "getVastuRemedies";
    pub const BOOK_CONSULTATION: &str = "bookConsultation";
    pub const GET_AVAILABLE_SLOTS: &str = "getAvailableTimeSlots";
    pub const ADD_AVAILABLE_SLOT: &str = "addAvailableSlot";
    pub const GET_ALL_BOOKINGS: &str = "getAllBookings";
    pub const GET_ALL_REPORTS: &str = "getAllNumerologyReports";
    pub const GET_ALL_REMEDIES: &str = "getAllVastuRemedies";
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 request to the consultation service.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Unique request ID used to correlate the response.
    pub id: u64,
    pub method: String,
    /// Positional parameters. Always an array, possibly empty.
    pub params: Value,
}

impl RpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: method.into(),
            params: Value::Array(params),
        }
    }
}

/// JSON-RPC 2.0 response from the consultation service.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    /// The ID matching the original request.
    pub id: Option<u64>,
    /// Successful result payload. May legitimately be `null`.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error payload, present when the call failed.
    pub error: Option<RpcError>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

// ---------------------------------------------------------------------------
// Parsed message discriminant
// ---------------------------------------------------------------------------

/// The result of parsing a raw WebSocket text frame.
#[derive(Debug)]
pub enum RpcMessage {
    /// A response to a request we sent (has a numeric `id`).
    Response(RpcResponse),
    /// Anything else. The service never pushes notifications, so these are
    /// logged and dropped.
    Unknown(String),
}

/// Parse a raw WebSocket text message into a typed [`RpcMessage`].
pub fn parse_rpc_message(text: &str) -> RpcMessage {
    let value: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return RpcMessage::Unknown(text.to_string()),
    };

    let has_id = value.get("id").is_some_and(|v| !v.is_null());
    if !has_id {
        return RpcMessage::Unknown(text.to_string());
    }

    match serde_json::from_value::<RpcResponse>(value) {
        Ok(response) => RpcMessage::Response(response),
        Err(_) => RpcMessage::Unknown(text.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Request tracker
// ---------------------------------------------------------------------------

/// Global monotonically-increasing counter for request IDs.
static RPC_REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_request_id() -> u64 {
    RPC_REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A registered pending request waiting for a response.
struct PendingRequest {
    response_tx: oneshot::Sender<RpcResponse>,
    created_at: Instant,
}

/// Tracks in-flight requests and matches them to responses.
pub struct RpcRequestTracker {
    pending: HashMap<u64, PendingRequest>,
}

impl RpcRequestTracker {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Generate a fresh request ID and register a pending slot for it.
    ///
    /// Returns `(id, receiver)`; `receiver` yields the response when it
    /// arrives, or errors if the slot is dropped first.
    pub fn register(&mut self) -> (u64, oneshot::Receiver<RpcResponse>) {
        let id = next_request_id();
        let (tx, rx) = oneshot::channel();

        self.pending.insert(
            id,
            PendingRequest {
                response_tx: tx,
                created_at: Instant::now(),
            },
        );

        (id, rx)
    }

    /// Deliver a response to its waiting caller.
    ///
    /// Returns `false` if no matching pending request exists.
    pub fn complete(&mut self, id: u64, response: RpcResponse) -> bool {
        if let Some(pending) = self.pending.remove(&id) {
            // The receiver may have been dropped; ignore the error.
            let _ = pending.response_tx.send(response);
            true
        } else {
            false
        }
    }

    /// Forget a request that never reached the wire.
    ///
    /// Returns `false` if `id` was not pending.
    pub fn cancel(&mut self, id: u64) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Remove requests pending longer than `timeout`. Their callers observe a
    /// closed channel.
    pub fn cleanup_stale(&mut self, timeout: Duration) -> Vec<u64> {
        let now = Instant::now();

        let stale: Vec<u64> = self
            .pending
            .iter()
            .filter(|(_, req)| now.duration_since(req.created_at) > timeout)
            .map(|(id, _)| *id)
            .collect();

        for id in &stale {
            self.pending.remove(id);
        }

        stale
    }

    /// Drop every pending request, e.g. when the connection goes away.
    pub fn fail_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for RpcRequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "userName": "Asha", "lifePathNumber": 9 }
        }"#;

        match parse_rpc_message(json) {
            RpcMessage::Response(resp) => {
                assert_eq!(resp.id, Some(1));
                assert!(resp.result.is_some());
                assert!(resp.error.is_none());
            }
            other => panic!("Expected Response, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 42,
            "error": { "code": -32601, "message": "Method not found" }
        }"#;

        match parse_rpc_message(json) {
            RpcMessage::Response(resp) => {
                assert_eq!(resp.id, Some(42));
                let err = resp.error.expect("error should be present");
                assert_eq!(err.code, -32601);
                assert_eq!(err.message, "Method not found");
            }
            other => panic!("Expected Response, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_null_result_is_response() {
        let msg = parse_rpc_message(r#"{"jsonrpc":"2.0","id":5,"result":null}"#);
        assert!(matches!(msg, RpcMessage::Response(_)));
    }

    #[test]
    fn test_parse_invalid_json_returns_unknown() {
        let msg = parse_rpc_message("not json at all {{{");
        assert!(matches!(msg, RpcMessage::Unknown(_)));
    }

    #[test]
    fn test_parse_notification_returns_unknown() {
        let msg = parse_rpc_message(r#"{"jsonrpc":"2.0","method":"ping"}"#);
        assert!(matches!(msg, RpcMessage::Unknown(_)));
    }

    #[test]
    fn test_request_serializes_positional_params() {
        let req = RpcRequest::new(
            7,
            methods::GENERATE_REPORT,
            vec![Value::from("Asha"), Value::from("12/05/1990")],
        );
        let val = serde_json::to_value(&req).unwrap();

        assert_eq!(val["jsonrpc"], "2.0");
        assert_eq!(val["id"], 7);
        assert_eq!(val["method"], "generateNumerologyReport");
        assert_eq!(val["params"][0], "Asha");
        assert_eq!(val["params"][1], "12/05/1990");
    }

    #[test]
    fn test_request_without_params_sends_empty_array() {
        let req = RpcRequest::new(1, methods::GET_AVAILABLE_SLOTS, vec![]);
        let val = serde_json::to_value(&req).unwrap();
        assert_eq!(val["params"], serde_json::json!([]));
    }

    #[test]
    fn test_request_tracker_register_and_complete() {
        let mut tracker = RpcRequestTracker::new();

        let (id, mut rx) = tracker.register();
        assert_eq!(tracker.pending_count(), 1);

        let response = RpcResponse {
            id: Some(id),
            result: Some(serde_json::json!({ "ok": true })),
            error: None,
        };

        assert!(tracker.complete(id, response));
        assert_eq!(tracker.pending_count(), 0);

        let received = rx.try_recv().expect("response should be available");
        assert!(received.result.is_some());
    }

    #[test]
    fn test_request_tracker_unknown_id() {
        let mut tracker = RpcRequestTracker::new();
        let response = RpcResponse {
            id: Some(999_999),
            result: None,
            error: None,
        };
        assert!(!tracker.complete(999_999, response));
    }

    #[test]
    fn test_request_tracker_ids_are_unique() {
        let mut tracker = RpcRequestTracker::new();
        let (id1, _rx1) = tracker.register();
        let (id2, _rx2) = tracker.register();
        assert_ne!(id1, id2);
        assert_eq!(tracker.pending_count(), 2);
    }

    #[test]
    fn test_request_tracker_cleanup_stale() {
        let mut tracker = RpcRequestTracker::new();
        let (_id, mut rx) = tracker.register();

        let removed = tracker.cleanup_stale(Duration::ZERO);
        assert_eq!(removed.len(), 1);
        assert_eq!(tracker.pending_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_request_tracker_cleanup_keeps_fresh_requests() {
        let mut tracker = RpcRequestTracker::new();
        let (_id, _rx) = tracker.register();
        assert!(tracker.cleanup_stale(Duration::from_secs(3600)).is_empty());
        assert_eq!(tracker.pending_count(), 1);
    }

    #[test]
    fn test_request_tracker_cancel() {
        let mut tracker = RpcRequestTracker::new();
        let (id, mut rx) = tracker.register();

        assert!(tracker.cancel(id));
        assert_eq!(tracker.pending_count(), 0);
        assert!(rx.try_recv().is_err());
        assert!(!tracker.cancel(id));
    }

    #[test]
    fn test_request_tracker_fail_all() {
        let mut tracker = RpcRequestTracker::default();
        let (_a, _rx_a) = tracker.register();
        let (_b, _rx_b) = tracker.register();
        assert_eq!(tracker.fail_all(), 2);
        assert_eq!(tracker.pending_count(), 0);
    }
}
