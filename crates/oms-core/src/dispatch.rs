//! Transaction dispatch.
//!
//! Interprets an inbound transaction, materializes or loads the target
//! order and computes the desired next lifecycle state. The dispatcher only
//! computes: it never commits anything to storage.

use crate::context::ProcessingContext;
use crate::error::ProcessError;
use crate::idgen::OrderIdGenerator;
use oms_storage::OrderStore;
use oms_types::{
	CancelState, NewOrderTx, Order, OrderEventKind, State, Transaction, TxKind,
};
use std::sync::Arc;

/// Interprets inbound transactions into a populated processing context.
pub struct TransactionDispatcher {
	store: Arc<dyn OrderStore>,
	id_generator: Arc<dyn OrderIdGenerator>,
}

impl TransactionDispatcher {
	pub fn new(store: Arc<dyn OrderStore>, id_generator: Arc<dyn OrderIdGenerator>) -> Self {
		Self {
			store,
			id_generator,
		}
	}

	/// Resolves the transaction's order and target state.
	///
	/// `NewOrder` builds a fresh aggregate and never looks up existing
	/// orders; `AcceptOrder` and `RejectOrder` load by external id and fail
	/// with [`ProcessError::NotFound`] when the order is unknown.
	pub async fn dispatch(
		&self,
		transaction: Transaction,
	) -> Result<ProcessingContext, ProcessError> {
		match &transaction {
			Transaction::NewOrder(tx) => {
				let order = self.materialize(tx);
				tracing::info!(order_id = %order.order_id, "Order created");
				Ok(ProcessingContext::new(
					transaction.clone(),
					order,
					State::Unack,
					OrderEventKind::NewOrder,
				))
			}
			Transaction::AcceptOrder(tx) => {
				let mut order = self.load(&tx.order_id).await?;
				order.tx = TxKind::AO;
				tracing::info!(order_id = %order.order_id, "Order accepted");
				Ok(ProcessingContext::new(
					transaction.clone(),
					order,
					State::Live,
					OrderEventKind::Ack,
				))
			}
			Transaction::RejectOrder(tx) => {
				let mut order = self.load(&tx.order_id).await?;
				order.tx = TxKind::RO;
				tracing::info!(order_id = %order.order_id, "Order rejected");
				Ok(ProcessingContext::new(
					transaction.clone(),
					order,
					State::Rej,
					OrderEventKind::Reject,
				))
			}
		}
	}

	async fn load(&self, order_id: &str) -> Result<Order, ProcessError> {
		match self.store.find_by_order_id(order_id).await? {
			Some(order) => Ok(order),
			None => {
				tracing::error!(order_id = %order_id, "Order not found");
				Err(ProcessError::NotFound(order_id.to_string()))
			}
		}
	}

	/// Builds a new order aggregate from the transaction payload.
	fn materialize(&self, tx: &NewOrderTx) -> Order {
		let order_id = self.id_generator.next_id();
		Order {
			id: None,
			root_order_id: Some(order_id.clone()),
			order_id,
			parent_order_id: tx.parent_order_id.clone(),
			tx: TxKind::NO,
			tx_nr: 0,
			cl_ord_id: tx.cl_ord_id.clone(),
			account: tx.account.clone(),
			sending_time: tx.sending_time,
			symbol: tx.symbol.clone(),
			security_id: tx.security_id.clone(),
			side: tx.side,
			ord_type: tx.ord_type,
			price: tx.price,
			stop_px: tx.stop_px,
			order_qty: tx.order_qty,
			cash_order_qty: tx.cash_order_qty,
			time_in_force: tx.time_in_force,
			transact_time: tx.transact_time,
			expire_time: tx.expire_time,
			ex_destination: tx.ex_destination.clone(),
			text: tx.text.clone(),
			state: State::New,
			cancel_state: CancelState::None,
		}
	}
}
