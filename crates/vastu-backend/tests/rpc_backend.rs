//! RpcBackend against a scripted local WebSocket server

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;

use vastu_backend::{methods, ConsultationBackend, RpcBackend};
use vastu_core::Error;

/// Spawn a server that answers each request with `respond(method, params)`
/// and forwards every received request to the returned channel.
async fn spawn_server<F>(respond: F) -> (String, mpsc::UnboundedReceiver<Value>)
where
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (seen_tx, seen_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let ws = tokio_tungstenite::accept_async(stream).await.unwrap();
            let (mut sink, mut source) = ws.split();

            while let Some(Ok(frame)) = source.next().await {
                let WsMessage::Text(text) = frame else {
                    continue;
                };
                let request: Value = serde_json::from_str(text.as_str()).unwrap();
                let method = request["method"].as_str().unwrap_or_default().to_string();
                let body = respond(&method, &request["params"]);

                let mut reply = json!({ "jsonrpc": "2.0", "id": request["id"].clone() });
                if let Some(error) = body.get("error") {
                    reply["error"] = error.clone();
                } else {
                    reply["result"] = body;
                }
                let _ = seen_tx.send(request);
                sink.send(WsMessage::Text(reply.to_string().into()))
                    .await
                    .unwrap();
            }
        }
    });

    (format!("ws://{addr}"), seen_rx)
}

#[tokio::test]
async fn test_generate_report_round_trip() {
    let (url, mut seen) = spawn_server(|_, params| {
        json!({
            "userName": params[0],
            "birthDate": params[1],
            "favorableColors": ["Yellow"],
            "relationshipGuidance": "Be patient.",
            "lifePathNumber": 9,
            "careerRecommendations": ["Teacher"],
            "luckyNumbers": [3, 9],
            "birthChartAnalysis": "Humanitarian."
        })
    })
    .await;

    let backend = RpcBackend::new(url);
    let report = backend
        .generate_report("Asha", "12/05/1990")
        .await
        .unwrap();

    assert_eq!(report.owner_name, "Asha");
    assert_eq!(report.birth_date, "12/05/1990");
    assert_eq!(report.life_path_number, 9);

    let request = seen.recv().await.unwrap();
    assert_eq!(request["jsonrpc"], "2.0");
    assert_eq!(request["method"], methods::GENERATE_REPORT);
    assert_eq!(request["params"], json!(["Asha", "12/05/1990"]));
}

#[tokio::test]
async fn test_remedy_sends_life_path_number() {
    let (url, mut seen) = spawn_server(|_, params| {
        json!({
            "userName": params[0],
            "numerologyNumber": params[1],
            "preferredDirections": ["North-East"],
            "vastuSuggestions": ["Keep the entrance bright."],
            "remedyInstructions": "Light a lamp."
        })
    })
    .await;

    let backend = RpcBackend::new(url);
    let remedy = backend.generate_remedy("Asha", 9).await.unwrap();
    assert_eq!(remedy.numerology_number, 9);

    let request = seen.recv().await.unwrap();
    assert_eq!(request["method"], methods::GET_VASTU_REMEDIES);
    assert_eq!(request["params"], json!(["Asha", 9]));
}

#[tokio::test]
async fn test_error_object_becomes_remote_error() {
    let (url, _seen) = spawn_server(|_, _| {
        json!({ "error": { "code": -32000, "message": "slot already booked" } })
    })
    .await;

    let backend = RpcBackend::new(url);
    let err = backend
        .book_consultation("Asha", "+91 98765 43210", "10:00 - 11:00")
        .await
        .unwrap_err();

    assert!(err.is_remote_call_error());
    match err {
        Error::Remote { method, code, .. } => {
            assert_eq!(method, methods::BOOK_CONSULTATION);
            assert_eq!(code, -32000);
        }
        other => panic!("Expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_result_shape_is_protocol_error() {
    let (url, _seen) = spawn_server(|_, _| json!("not a slot list")).await;

    let backend = RpcBackend::new(url);
    let err = backend.list_available_slots().await.unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[tokio::test]
async fn test_connection_is_reused_across_calls() {
    let (url, mut seen) = spawn_server(|method, _| match method {
        "getAvailableTimeSlots" => json!([
            { "slotId": 1, "timeRange": "10:00 - 11:00", "isAvailable": true, "timestamp": 0 },
            { "slotId": 2, "timeRange": "11:00 - 12:00", "isAvailable": false, "timestamp": 0 }
        ]),
        "getAllBookings" => json!([]),
        _ => json!(null),
    })
    .await;

    let backend = RpcBackend::new(url);
    let slots = backend.list_available_slots().await.unwrap();
    assert_eq!(slots.len(), 2);
    assert!(backend.list_bookings().await.unwrap().is_empty());

    let first = seen.recv().await.unwrap();
    let second = seen.recv().await.unwrap();
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_unreachable_service_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = RpcBackend::new(format!("ws://{addr}"));
    let err = backend.list_reports().await.unwrap_err();
    assert!(matches!(err, Error::Connection { .. }));
}
