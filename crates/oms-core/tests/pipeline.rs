//! End-to-end tests of the orchestration pipeline against the in-memory
//! store and the channel notification backend.

use oms_core::{OrchestrationPipeline, SequenceIdGenerator};
use oms_notify::implementations::channel::ChannelNotifier;
use oms_notify::NotificationService;
use oms_storage::implementations::memory::MemoryOrderStore;
use oms_storage::OrderStore;
use oms_types::{
	AcceptOrderTx, ErrorCode, NewOrderTx, OrderEventKind, RejectOrderTx, Side, State,
	Transaction, TxKind, TxState,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::timeout;

struct Harness {
	pipeline: OrchestrationPipeline,
	store: Arc<MemoryOrderStore>,
	notifier: Arc<ChannelNotifier>,
}

fn harness() -> Harness {
	let store = Arc::new(MemoryOrderStore::new());
	let notifier = Arc::new(ChannelNotifier::new(16));
	let notifications = Arc::new(NotificationService::new(
		Arc::clone(&notifier) as Arc<dyn oms_notify::NotifierInterface>,
		"orders",
	));
	let pipeline = OrchestrationPipeline::new(
		Arc::clone(&store) as Arc<dyn OrderStore>,
		Arc::new(SequenceIdGenerator::new("ORD")),
		notifications,
	);
	Harness {
		pipeline,
		store,
		notifier,
	}
}

fn new_order() -> Transaction {
	Transaction::NewOrder(NewOrderTx {
		symbol: Some("AAPL".to_string()),
		side: Some(Side::Buy),
		order_qty: Some(Decimal::from(100)),
		price: Some("172.06".parse().unwrap()),
		..Default::default()
	})
}

fn accept(order_id: &str) -> Transaction {
	Transaction::AcceptOrder(AcceptOrderTx {
		order_id: order_id.to_string(),
	})
}

fn reject(order_id: &str) -> Transaction {
	Transaction::RejectOrder(RejectOrderTx {
		order_id: order_id.to_string(),
	})
}

async fn next_message(
	rx: &mut broadcast::Receiver<oms_types::OrderMessage>,
) -> oms_types::OrderMessage {
	timeout(Duration::from_secs(1), rx.recv())
		.await
		.expect("notification not delivered in time")
		.expect("notification channel closed")
}

#[tokio::test]
async fn new_order_commits_at_unack() {
	let h = harness();
	let mut rx = h.notifier.subscribe();

	let result = h.pipeline.process(new_order()).await;

	assert_eq!(result.state, TxState::Ok);
	assert_eq!(result.message, "Processing completed");
	let order_id = result.order_id.expect("order id assigned");

	let order = h.store.find_by_order_id(&order_id).await.unwrap().unwrap();
	assert_eq!(order.state, State::Unack);
	assert_eq!(order.tx, TxKind::NO);
	assert_eq!(order.tx_nr, 1);
	assert_eq!(order.id, Some(1));
	assert_eq!(order.root_order_id.as_deref(), Some(order_id.as_str()));

	let trail = h.store.audit_trail(&order_id).await.unwrap();
	assert_eq!(trail.len(), 1);
	assert_eq!(trail[0].event, OrderEventKind::NewOrder);
	assert_eq!(trail[0].id, 1);

	let message = next_message(&mut rx).await;
	assert_eq!(message.order_id, order_id);
	assert_eq!(message.state, State::Unack);
	assert_eq!(message.symbol.as_deref(), Some("AAPL"));
}

#[tokio::test]
async fn accept_moves_order_to_live() {
	let h = harness();
	let mut rx = h.notifier.subscribe();

	let created = h.pipeline.process(new_order()).await;
	let order_id = created.order_id.unwrap();
	let _ = next_message(&mut rx).await;

	let result = h.pipeline.process(accept(&order_id)).await;
	assert_eq!(result.state, TxState::Ok);
	assert_eq!(result.order_id.as_deref(), Some(order_id.as_str()));

	let order = h.store.find_by_order_id(&order_id).await.unwrap().unwrap();
	assert_eq!(order.state, State::Live);
	assert_eq!(order.tx, TxKind::AO);
	assert_eq!(order.tx_nr, 2);

	let trail = h.store.audit_trail(&order_id).await.unwrap();
	assert_eq!(trail.len(), 2);
	assert_eq!(trail[1].event, OrderEventKind::Ack);

	let message = next_message(&mut rx).await;
	assert_eq!(message.state, State::Live);
	assert_eq!(message.tx_nr, 2);
}

#[tokio::test]
async fn second_accept_fails_validation_and_leaves_state() {
	let h = harness();

	let order_id = h.pipeline.process(new_order()).await.order_id.unwrap();
	assert_eq!(h.pipeline.process(accept(&order_id)).await.state, TxState::Ok);

	let result = h.pipeline.process(accept(&order_id)).await;
	assert_eq!(result.state, TxState::Fail);
	assert_eq!(result.message, "Validation failed");
	assert_eq!(result.error_code, Some(ErrorCode::ValidationFailed));

	let order = h.store.find_by_order_id(&order_id).await.unwrap().unwrap();
	assert_eq!(order.state, State::Live);
	// The failed unit of work left no audit row behind.
	assert_eq!(h.store.audit_trail(&order_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn accept_of_unknown_order_fails_without_side_effects() {
	let h = harness();
	let mut rx = h.notifier.subscribe();

	let result = h.pipeline.process(accept("does-not-exist")).await;

	assert_eq!(result.state, TxState::Fail);
	assert_eq!(result.message, "Order not found: does-not-exist");
	assert_eq!(result.error_code, Some(ErrorCode::NotFound));
	assert!(result.order_id.is_none());

	assert!(h
		.store
		.audit_trail("does-not-exist")
		.await
		.unwrap()
		.is_empty());
	assert!(h.store.list_orders().await.unwrap().is_empty());

	// No notification for a failed transaction.
	tokio::time::sleep(Duration::from_millis(50)).await;
	assert!(matches!(
		rx.try_recv(),
		Err(broadcast::error::TryRecvError::Empty)
	));
}

#[tokio::test]
async fn reject_moves_unacked_order_to_rej() {
	let h = harness();

	let order_id = h.pipeline.process(new_order()).await.order_id.unwrap();
	let result = h.pipeline.process(reject(&order_id)).await;

	assert_eq!(result.state, TxState::Ok);
	let order = h.store.find_by_order_id(&order_id).await.unwrap().unwrap();
	assert_eq!(order.state, State::Rej);
	assert_eq!(order.tx, TxKind::RO);

	let trail = h.store.audit_trail(&order_id).await.unwrap();
	assert_eq!(trail.len(), 2);
	assert_eq!(trail[1].event, OrderEventKind::Reject);
}

#[tokio::test]
async fn reject_also_applies_to_live_orders() {
	let h = harness();

	let order_id = h.pipeline.process(new_order()).await.order_id.unwrap();
	assert_eq!(h.pipeline.process(accept(&order_id)).await.state, TxState::Ok);
	assert_eq!(h.pipeline.process(reject(&order_id)).await.state, TxState::Ok);

	let order = h.store.find_by_order_id(&order_id).await.unwrap().unwrap();
	assert_eq!(order.state, State::Rej);
	assert_eq!(order.tx_nr, 3);
}

#[tokio::test]
async fn transactions_for_different_orders_run_concurrently() {
	let h = harness();
	let h = Arc::new(h);

	let mut handles = Vec::new();
	for _ in 0..8 {
		let h = Arc::clone(&h);
		handles.push(tokio::spawn(
			async move { h.pipeline.process(new_order()).await },
		));
	}

	let mut ids = Vec::new();
	for handle in handles {
		let result = handle.await.unwrap();
		assert_eq!(result.state, TxState::Ok);
		ids.push(result.order_id.unwrap());
	}

	ids.sort();
	ids.dedup();
	assert_eq!(ids.len(), 8);
	assert_eq!(h.store.list_orders().await.unwrap().len(), 8);
}
