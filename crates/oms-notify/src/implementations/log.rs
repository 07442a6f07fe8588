//! Log-only notification backend.
//!
//! Writes each snapshot to the log instead of a broker. Useful when the
//! engine runs without outbound infrastructure.

use crate::{NotifierInterface, NotifyError};
use async_trait::async_trait;
use oms_types::OrderMessage;

/// Notifier that emits every message as a structured log line.
pub struct LogNotifier;

impl LogNotifier {
	pub fn new() -> Self {
		Self
	}
}

impl Default for LogNotifier {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl NotifierInterface for LogNotifier {
	async fn publish(&self, topic: &str, message: OrderMessage) -> Result<(), NotifyError> {
		let payload = serde_json::to_string(&message)
			.map_err(|e| NotifyError::Serialization(e.to_string()))?;
		tracing::info!(topic = %topic, payload = %payload, "Order notification");
		Ok(())
	}
}
