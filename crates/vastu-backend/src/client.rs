//! Async WebSocket client for the consultation service.
//!
//! The [`RpcClient`] connects over WebSocket, sends JSON-RPC 2.0 requests and
//! routes each response back to its caller through a oneshot channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        RpcClient                          │
//! │                                                           │
//! │  ┌──────────────┐        ┌─────────────────────────────┐ │
//! │  │  RpcHandle   │        │   Background Task            │ │
//! │  │              │        │                              │ │
//! │  │  request() ──┼──cmd──▶│  WebSocket read/write loop   │ │
//! │  │              │  chan  │  response → tracker → caller │ │
//! │  └──────────────┘        └─────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no reconnection loop: when the socket closes, every pending call
//! fails with [`Error::ChannelClosed`] and the handle reports itself closed.

use std::time::Duration;

use futures_util::stream::SplitSink;
use futures_util::{Sink, SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use vastu_core::prelude::*;

use crate::protocol::{parse_rpc_message, RpcMessage, RpcRequest, RpcRequestTracker, RpcResponse};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Capacity of the command channel (bounded, to apply backpressure).
const CMD_CHANNEL_CAPACITY: usize = 32;

/// How often to run stale request cleanup in the I/O loop.
const STALE_REQUEST_CLEANUP_INTERVAL: Duration = Duration::from_secs(15);

/// Timeout after which a pending request is considered stale and removed.
const STALE_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Internal command type
// ---------------------------------------------------------------------------

enum ClientCommand {
    SendRequest {
        method: String,
        params: Vec<Value>,
        response_tx: oneshot::Sender<Result<Value>>,
    },
    Disconnect,
}

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

// ---------------------------------------------------------------------------
// RpcHandle
// ---------------------------------------------------------------------------

/// A clonable handle for issuing requests over a shared connection.
///
/// Becomes inoperable once the background task exits; requests then return
/// [`Error::ChannelClosed`].
#[derive(Clone)]
pub struct RpcHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl std::fmt::Debug for RpcHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl RpcHandle {
    /// Send a request and wait for its response.
    ///
    /// # Errors
    ///
    /// - [`Error::ChannelClosed`] if the connection is gone or the request
    ///   went stale.
    /// - [`Error::Remote`] if the service answered with a JSON-RPC error.
    /// - [`Error::Connection`] if the frame could not be written.
    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let (response_tx, response_rx) = oneshot::channel();

        self.cmd_tx
            .send(ClientCommand::SendRequest {
                method: method.to_string(),
                params,
                response_tx,
            })
            .await
            .map_err(|_| Error::ChannelClosed)?;

        response_rx.await.map_err(|_| Error::ChannelClosed)?
    }

    /// `true` once the background task has exited.
    pub fn is_closed(&self) -> bool {
        self.cmd_tx.is_closed()
    }
}

// ---------------------------------------------------------------------------
// RpcClient
// ---------------------------------------------------------------------------

/// Owns the connection's background task. Dropping the client (and every
/// handle cloned from it) closes the socket.
pub struct RpcClient {
    handle: RpcHandle,
}

impl RpcClient {
    /// Connect to `ws_url` and spawn the I/O task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the WebSocket handshake fails.
    pub async fn connect(ws_url: &str) -> Result<Self> {
        info!("Connecting to consultation service at {}", ws_url);
        let (ws_stream, _response) = connect_async(ws_url)
            .await
            .map_err(|err| Error::connection(format!("{ws_url}: {err}")))?;

        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>(CMD_CHANNEL_CAPACITY);
        tokio::spawn(run_io_loop(ws_stream, cmd_rx));

        Ok(Self {
            handle: RpcHandle { cmd_tx },
        })
    }

    /// A clonable handle sharing this client's connection.
    pub fn request_handle(&self) -> RpcHandle {
        self.handle.clone()
    }

    /// Ask the background task to send a Close frame and exit.
    pub async fn disconnect(&self) {
        // Already closed if the send fails.
        let _ = self.handle.cmd_tx.send(ClientCommand::Disconnect).await;
    }
}

// ---------------------------------------------------------------------------
// Background task
// ---------------------------------------------------------------------------

async fn run_io_loop(ws_stream: WsStream, mut cmd_rx: mpsc::Receiver<ClientCommand>) {
    let (mut ws_sink, mut ws_stream) = ws_stream.split();
    let mut tracker = RpcRequestTracker::new();

    let mut cleanup_interval = tokio::time::interval(STALE_REQUEST_CLEANUP_INTERVAL);
    cleanup_interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            frame = ws_stream.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        handle_ws_text(text.as_str(), &mut tracker);
                    }
                    Some(Ok(WsMessage::Close(_))) => {
                        debug!("RPC: received Close frame");
                        break;
                    }
                    Some(Ok(_)) => {
                        // Ping/Pong/Binary: ignore
                    }
                    Some(Err(err)) => {
                        warn!("RPC: WebSocket read error: {}", err);
                        break;
                    }
                    None => {
                        debug!("RPC: WebSocket stream ended");
                        break;
                    }
                }
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(ClientCommand::SendRequest { method, params, response_tx }) => {
                        handle_send_request(&method, params, response_tx, &mut tracker, &mut ws_sink).await;
                    }
                    Some(ClientCommand::Disconnect) | None => {
                        send_close(&mut ws_sink).await;
                        break;
                    }
                }
            }

            _ = cleanup_interval.tick() => {
                let stale = tracker.cleanup_stale(STALE_REQUEST_TIMEOUT);
                if !stale.is_empty() {
                    warn!("RPC: dropped {} stale request(s): {:?}", stale.len(), stale);
                }
            }
        }
    }

    let dropped = tracker.fail_all();
    if dropped > 0 {
        warn!("RPC: connection closed with {} request(s) in flight", dropped);
    }
    debug!("RPC background task exiting");
}

fn handle_ws_text(text: &str, tracker: &mut RpcRequestTracker) {
    match parse_rpc_message(text) {
        RpcMessage::Response(mut response) => {
            if let Some(id) = response.id.take() {
                if !tracker.complete(id, response) {
                    debug!("RPC: received response for unknown request id {}", id);
                }
            }
        }
        RpcMessage::Unknown(raw) => {
            let preview: String = raw.chars().take(120).collect();
            debug!("RPC: ignoring unknown message: {}", preview);
        }
    }
}

/// Register the request, write it to the socket and forward the eventual
/// response to `response_tx`. A request that never reaches the socket is
/// dropped from `tracker` straight away.
async fn handle_send_request<S>(
    method: &str,
    params: Vec<Value>,
    response_tx: oneshot::Sender<Result<Value>>,
    tracker: &mut RpcRequestTracker,
    ws_sink: &mut S,
) where
    S: Sink<WsMessage> + Unpin,
    S::Error: std::fmt::Display,
{
    // Register before touching the wire so a fast response finds its slot.
    let (id, response_rx) = tracker.register();
    let request = RpcRequest::new(id, method, params);

    let json = match serde_json::to_string(&request) {
        Ok(j) => j,
        Err(err) => {
            tracker.cancel(id);
            let _ = response_tx.send(Err(Error::protocol(format!(
                "failed to serialize {method} request: {err}"
            ))));
            return;
        }
    };

    trace!("RPC → {}", json);
    if let Err(err) = ws_sink.send(WsMessage::Text(json.into())).await {
        tracker.cancel(id);
        let _ = response_tx.send(Err(Error::connection(format!(
            "failed to send {method} request: {err}"
        ))));
        return;
    }

    let method = method.to_string();
    tokio::spawn(async move {
        let result = match response_rx.await {
            Ok(response) => response_to_result(&method, response),
            Err(_) => Err(Error::ChannelClosed),
        };
        let _ = response_tx.send(result);
    });
}

fn response_to_result(method: &str, response: RpcResponse) -> Result<Value> {
    match response.error {
        Some(error) => Err(Error::remote(method, error.code, error.message)),
        None => Ok(response.result.unwrap_or(Value::Null)),
    }
}

async fn send_close(ws_sink: &mut SplitSink<WsStream, WsMessage>) {
    let _ = ws_sink.send(WsMessage::Close(None)).await;
    let _ = ws_sink.close().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RpcError;

    #[test]
    fn test_response_to_result_maps_error_object() {
        let response = RpcResponse {
            id: Some(1),
            result: None,
            error: Some(RpcError {
                code: -32000,
                message: "slot already booked".to_string(),
                data: None,
            }),
        };
        let err = response_to_result("bookConsultation", response).unwrap_err();
        match err {
            Error::Remote {
                method,
                code,
                message,
            } => {
                assert_eq!(method, "bookConsultation");
                assert_eq!(code, -32000);
                assert_eq!(message, "slot already booked");
            }
            other => panic!("Expected Remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_response_to_result_null_result() {
        let response = RpcResponse {
            id: Some(1),
            result: None,
            error: None,
        };
        assert_eq!(response_to_result("x", response).unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_failed_write_drops_pending_request() {
        let mut tracker = RpcRequestTracker::new();
        let mut broken_sink = futures_util::sink::unfold((), |(), _frame: WsMessage| {
            std::future::ready(Err::<(), _>("socket closed"))
        });
        let (response_tx, response_rx) = oneshot::channel();

        handle_send_request(
            "generateNumerologyReport",
            vec![Value::from("Asha")],
            response_tx,
            &mut tracker,
            &mut broken_sink,
        )
        .await;

        assert_eq!(tracker.pending_count(), 0);
        let result = response_rx.await.unwrap();
        assert!(matches!(result, Err(Error::Connection { .. })));
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_error() {
        // Bind then drop to obtain a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = RpcClient::connect(&format!("ws://{addr}")).await;
        assert!(matches!(result, Err(Error::Connection { .. })));
    }
}
