//! [`ConsultationBackend`] over JSON-RPC
//!
//! The connection is opened on first use and replaced whenever the previous
//! one has closed, so the UI can start while the service is unreachable.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use vastu_core::prelude::*;
use vastu_core::{AvailableSlot, ConsultationBooking, NumerologyReport, VastuRemedy};

use crate::client::{RpcClient, RpcHandle};
use crate::protocol::methods;
use crate::service::ConsultationBackend;

/// Consultation service reached through a WebSocket JSON-RPC endpoint.
pub struct RpcBackend {
    url: String,
    connection: Mutex<Option<RpcClient>>,
}

impl std::fmt::Debug for RpcBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcBackend").field("url", &self.url).finish()
    }
}

impl RpcBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connection: Mutex::new(None),
        }
    }

    /// Current handle, connecting first if there is no live connection.
    async fn handle(&self) -> Result<RpcHandle> {
        let mut guard = self.connection.lock().await;

        if let Some(client) = guard.as_ref() {
            let handle = client.request_handle();
            if !handle.is_closed() {
                return Ok(handle);
            }
            debug!("Previous connection to {} closed, reconnecting", self.url);
        }

        let client = RpcClient::connect(&self.url).await?;
        let handle = client.request_handle();
        *guard = Some(client);
        Ok(handle)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<T> {
        let handle = self.handle().await?;
        let value = handle.request(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| Error::protocol(format!("unexpected {method} result: {e}")))
    }

    /// Close the connection if one is open.
    pub async fn disconnect(&self) {
        if let Some(client) = self.connection.lock().await.take() {
            client.disconnect().await;
        }
    }
}

impl ConsultationBackend for RpcBackend {
    async fn generate_report(&self, name: &str, birth_date: &str) -> Result<NumerologyReport> {
        self.call(
            methods::GENERATE_REPORT,
            vec![Value::from(name), Value::from(birth_date)],
        )
        .await
    }

    async fn generate_remedy(&self, name: &str, life_path_number: u32) -> Result<VastuRemedy> {
        self.call(
            methods::GET_VASTU_REMEDIES,
            vec![Value::from(name), Value::from(life_path_number)],
        )
        .await
    }

    async fn book_consultation(
        &self,
        name: &str,
        phone: &str,
        time_range: &str,
    ) -> Result<ConsultationBooking> {
        self.call(
            methods::BOOK_CONSULTATION,
            vec![Value::from(name), Value::from(phone), Value::from(time_range)],
        )
        .await
    }

    async fn list_available_slots(&self) -> Result<Vec<AvailableSlot>> {
        self.call(methods::GET_AVAILABLE_SLOTS, vec![]).await
    }

    async fn add_available_slot(&self, time_range: &str) -> Result<AvailableSlot> {
        self.call(methods::ADD_AVAILABLE_SLOT, vec![Value::from(time_range)])
            .await
    }

    async fn list_bookings(&self) -> Result<Vec<ConsultationBooking>> {
        self.call(methods::GET_ALL_BOOKINGS, vec![]).await
    }

    async fn list_reports(&self) -> Result<Vec<NumerologyReport>> {
        self.call(methods::GET_ALL_REPORTS, vec![]).await
    }

    async fn list_remedies(&self) -> Result<Vec<VastuRemedy>> {
        self.call(methods::GET_ALL_REMEDIES, vec![]).await
    }
}
