//! vastu-backend - Remote consultation service client
//!
//! Speaks JSON-RPC 2.0 over a WebSocket to the service that generates
//! numerology reports, Vastu remedies and consultation bookings.
//!
//! ## Public API
//!
//! - [`ConsultationBackend`] / [`LocalConsultationBackend`] - The eight service operations
//! - [`RpcBackend`] - Implementation over a lazily opened WebSocket connection
//! - [`RpcClient`], [`RpcHandle`] - Low-level request/response transport
//! - [`protocol`] - Wire types, method names and the request tracker
//!
//! With the `test-helpers` feature, `test_utils` exposes `FakeBackend` and
//! sample records for downstream tests.

pub mod client;
pub mod protocol;
pub mod rpc_backend;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{RpcClient, RpcHandle};
pub use protocol::methods;
pub use rpc_backend::RpcBackend;
pub use service::{ConsultationBackend, LocalConsultationBackend};
