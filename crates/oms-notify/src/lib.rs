//! Outbound notification module for the OMS engine.
//!
//! This module handles publication of order snapshots to a configured
//! channel after a successfully committed transaction. It provides
//! abstractions for different broker backends and a service wrapper that
//! performs the publish asynchronously relative to the processing pipeline.
//!
//! Delivery is at-most-once, best-effort: the pipeline never blocks on the
//! broker, the completion callback only logs, and a failed send is neither
//! retried nor escalated.

use async_trait::async_trait;
use oms_types::{Order, OrderMessage};
use std::sync::Arc;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod channel;
	pub mod log;
}

/// Errors that can occur during notification publication.
///
/// These never abort a transaction; the pipeline treats them as non-fatal
/// and only logs them.
#[derive(Debug, Error)]
pub enum NotifyError {
	/// Error that occurs when the broker rejects or cannot take the message.
	#[error("Broker error: {0}")]
	Broker(String),
	/// Error that occurs while encoding the message.
	#[error("Serialization error: {0}")]
	Serialization(String),
}

/// Trait defining the interface for notification backends.
#[async_trait]
pub trait NotifierInterface: Send + Sync {
	/// Publishes one message on the named topic.
	async fn publish(&self, topic: &str, message: OrderMessage) -> Result<(), NotifyError>;
}

/// Service that publishes order snapshots on the outbound channel.
///
/// The service converts the persisted order into an immutable
/// [`OrderMessage`] and hands the send to a spawned task. The caller gets no
/// result back; the completion is observed only through the log.
pub struct NotificationService {
	notifier: Arc<dyn NotifierInterface>,
	topic: String,
}

impl NotificationService {
	/// Creates a new NotificationService publishing on the given topic.
	pub fn new(notifier: Arc<dyn NotifierInterface>, topic: impl Into<String>) -> Self {
		Self {
			notifier,
			topic: topic.into(),
		}
	}

	/// Publishes a snapshot of the order, fire-and-forget.
	///
	/// Returns immediately after spawning the send. Caller cancellation does
	/// not cancel an in-flight publish.
	pub fn publish(&self, order: &Order) {
		let message = OrderMessage::from(order);
		let notifier = Arc::clone(&self.notifier);
		let topic = self.topic.clone();
		let order_id = message.order_id.clone();

		tracing::info!(order_id = %order_id, topic = %topic, "Sending order notification");
		tokio::spawn(async move {
			match notifier.publish(&topic, message).await {
				Ok(()) => {
					tracing::info!(
						order_id = %order_id,
						topic = %topic,
						"Order notification sent"
					);
				}
				Err(e) => {
					tracing::error!(
						order_id = %order_id,
						topic = %topic,
						"Failed to send order notification: {}",
						e
					);
				}
			}
		});
	}
}
