//! Append-only audit entry types.
//!
//! One [`AuditEntry`] is recorded per processed transaction, inside the same
//! atomic unit that mutates the order. Entries are immutable once written
//! and form the order's replayable history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Transaction;

/// Event tag classifying the audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEventKind {
	/// A new order was created.
	NewOrder,
	/// An order was acknowledged.
	Ack,
	/// An order was rejected.
	Reject,
}

impl OrderEventKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderEventKind::NewOrder => "NewOrder",
			OrderEventKind::Ack => "Ack",
			OrderEventKind::Reject => "Reject",
		}
	}
}

impl fmt::Display for OrderEventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Immutable record of one processed transaction against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
	/// Storage-assigned identifier, allocated from the audit sequence when
	/// the entry is staged. Zero until then.
	pub id: u64,
	/// External identifier of the order the entry belongs to.
	pub order_id: String,
	/// Event tag for the transaction.
	pub event: OrderEventKind,
	/// The full transaction payload that produced this entry.
	pub transaction: Transaction,
	/// Creation timestamp.
	pub time_stamp: DateTime<Utc>,
}

impl AuditEntry {
	/// Builds an unstaged entry for the given transaction.
	pub fn record(
		order_id: impl Into<String>,
		event: OrderEventKind,
		transaction: Transaction,
	) -> Self {
		Self {
			id: 0,
			order_id: order_id.into(),
			event,
			transaction,
			time_stamp: Utc::now(),
		}
	}
}
