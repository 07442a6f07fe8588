//! In-process channel notification backend.
//!
//! Publishes snapshots on a tokio broadcast channel. Primarily used by
//! tests and in-process consumers that want to observe delivered
//! notifications without a broker.

use crate::{NotifierInterface, NotifyError};
use async_trait::async_trait;
use oms_types::OrderMessage;
use tokio::sync::broadcast;

/// Notifier backed by a broadcast channel.
pub struct ChannelNotifier {
	sender: broadcast::Sender<OrderMessage>,
}

impl ChannelNotifier {
	/// Creates a notifier with the given channel capacity.
	pub fn new(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	/// Subscribes a new receiver to published messages.
	pub fn subscribe(&self) -> broadcast::Receiver<OrderMessage> {
		self.sender.subscribe()
	}
}

#[async_trait]
impl NotifierInterface for ChannelNotifier {
	async fn publish(&self, _topic: &str, message: OrderMessage) -> Result<(), NotifyError> {
		// Send fails when no subscriber is listening; the service logs it.
		self.sender
			.send(message)
			.map(|_| ())
			.map_err(|_| NotifyError::Broker("no active subscribers".to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use oms_types::{CancelState, Order, State, TxKind};

	fn order(order_id: &str) -> Order {
		Order {
			id: Some(1),
			order_id: order_id.to_string(),
			parent_order_id: None,
			root_order_id: Some(order_id.to_string()),
			tx: TxKind::NO,
			tx_nr: 1,
			cl_ord_id: None,
			account: None,
			sending_time: None,
			symbol: Some("AAPL".to_string()),
			security_id: None,
			side: None,
			ord_type: None,
			price: None,
			stop_px: None,
			order_qty: None,
			cash_order_qty: None,
			time_in_force: None,
			transact_time: None,
			expire_time: None,
			ex_destination: None,
			text: None,
			state: State::Unack,
			cancel_state: CancelState::None,
		}
	}

	#[tokio::test]
	async fn publish_reaches_subscriber() {
		let notifier = ChannelNotifier::new(16);
		let mut rx = notifier.subscribe();

		let message = OrderMessage::from(&order("O-1"));
		notifier.publish("orders", message.clone()).await.unwrap();

		let received = rx.recv().await.unwrap();
		assert_eq!(received, message);
	}

	#[tokio::test]
	async fn publish_without_subscriber_fails_softly() {
		let notifier = ChannelNotifier::new(16);
		let message = OrderMessage::from(&order("O-2"));
		let result = notifier.publish("orders", message).await;
		assert!(matches!(result, Err(NotifyError::Broker(_))));
	}
}
