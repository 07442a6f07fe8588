//! Outbound notification message types.
//!
//! [`OrderMessage`] is the immutable snapshot published after a successfully
//! committed transaction. It carries enough of the order for downstream
//! consumers to reconstruct order status without querying back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CancelState, OrdType, Order, Side, State, TimeInForce, TxKind};

/// Snapshot of an order published on the outbound channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMessage {
	pub order_id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub root_order_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent_order_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cl_ord_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub side: Option<Side>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ord_type: Option<OrdType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_qty: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cash_order_qty: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub time_in_force: Option<TimeInForce>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transact_time: Option<DateTime<Utc>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expire_time: Option<DateTime<Utc>>,
	pub state: State,
	pub cancel_state: CancelState,
	pub tx: TxKind,
	pub tx_nr: u64,
}

impl From<&Order> for OrderMessage {
	fn from(order: &Order) -> Self {
		Self {
			order_id: order.order_id.clone(),
			root_order_id: order.root_order_id.clone(),
			parent_order_id: order.parent_order_id.clone(),
			cl_ord_id: order.cl_ord_id.clone(),
			account: order.account.clone(),
			symbol: order.symbol.clone(),
			side: order.side,
			ord_type: order.ord_type,
			price: order.price,
			order_qty: order.order_qty,
			cash_order_qty: order.cash_order_qty,
			time_in_force: order.time_in_force,
			transact_time: order.transact_time,
			expire_time: order.expire_time,
			state: order.state,
			cancel_state: order.cancel_state,
			tx: order.tx,
			tx_nr: order.tx_nr,
		}
	}
}
