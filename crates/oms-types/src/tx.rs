//! Inbound transaction commands and transaction results.
//!
//! [`Transaction`] is the closed tagged union of commands driving order
//! state changes. Each processed transaction produces a [`TxResult`]
//! describing the outcome; failures additionally carry a stable,
//! machine-readable [`ErrorCode`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{OrdType, Side, TimeInForce};

/// Inbound transaction command, tagged by `type` on the wire.
///
/// The union is closed; an unrecognized tag fails JSON decoding at the
/// service boundary and surfaces as an unsupported-transaction failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transaction {
	/// Create a new order from the carried attributes.
	NewOrder(NewOrderTx),
	/// Accept an existing order, moving it to LIVE.
	AcceptOrder(AcceptOrderTx),
	/// Reject an existing order, moving it to REJ.
	RejectOrder(RejectOrderTx),
}

impl Transaction {
	/// Short name of the transaction variant, for logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Transaction::NewOrder(_) => "NewOrder",
			Transaction::AcceptOrder(_) => "AcceptOrder",
			Transaction::RejectOrder(_) => "RejectOrder",
		}
	}
}

impl fmt::Display for Transaction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.kind())
	}
}

/// Payload of a new-order transaction: the full set of trading attributes
/// copied onto the created order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderTx {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent_order_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cl_ord_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sending_time: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub security_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub side: Option<Side>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ord_type: Option<OrdType>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub price: Option<Decimal>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stop_px: Option<Decimal>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub order_qty: Option<Decimal>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cash_order_qty: Option<Decimal>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_in_force: Option<TimeInForce>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub transact_time: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expire_time: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ex_destination: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
}

/// Payload of an accept-order transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptOrderTx {
	/// External identifier of the order to accept.
	pub order_id: String,
}

/// Payload of a reject-order transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectOrderTx {
	/// External identifier of the order to reject.
	pub order_id: String,
}

/// Outcome state of a processed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxState {
	Ok,
	Fail,
}

/// Stable, enumerable error code attached to failed transaction results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	NotFound,
	UnsupportedTransaction,
	ValidationFailed,
	PersistenceFailure,
}

/// Result of one processed transaction, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResult {
	/// External order identifier, when one was resolved before the failure.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_id: Option<String>,
	/// OK or FAIL.
	pub state: TxState,
	/// Human-readable outcome description.
	pub message: String,
	/// Machine-readable failure code, absent on success.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_code: Option<ErrorCode>,
}

impl TxResult {
	/// Successful result for the given order.
	pub fn ok(order_id: impl Into<String>) -> Self {
		Self {
			order_id: Some(order_id.into()),
			state: TxState::Ok,
			message: "Processing completed".to_string(),
			error_code: None,
		}
	}

	/// Failed result carrying the error text and stable code.
	pub fn fail(message: impl Into<String>, code: ErrorCode) -> Self {
		Self {
			order_id: None,
			state: TxState::Fail,
			message: message.into(),
			error_code: Some(code),
		}
	}
}
