//! The order aggregate and its trading attribute enumerations.
//!
//! [`Order`] is the central persisted aggregate: a write-once external
//! identifier, optional hierarchy references, a single lifecycle [`State`],
//! a separate cancel state, a strictly increasing transaction counter and a
//! bag of trading attributes the engine treats as opaque payload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CancelState, State};

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
	Buy,
	Sell,
}

impl Side {
	pub fn as_str(&self) -> &'static str {
		match self {
			Side::Buy => "BUY",
			Side::Sell => "SELL",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"BUY" => Some(Side::Buy),
			"SELL" => Some(Side::Sell),
			_ => None,
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Order price type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrdType {
	Market,
	Limit,
	Stop,
	StopLimit,
}

impl OrdType {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrdType::Market => "MARKET",
			OrdType::Limit => "LIMIT",
			OrdType::Stop => "STOP",
			OrdType::StopLimit => "STOP_LIMIT",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"MARKET" => Some(OrdType::Market),
			"LIMIT" => Some(OrdType::Limit),
			"STOP" => Some(OrdType::Stop),
			"STOP_LIMIT" => Some(OrdType::StopLimit),
			_ => None,
		}
	}
}

impl fmt::Display for OrdType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Time in force of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
	Day,
	GoodTillCancel,
	ImmediateOrCancel,
	FillOrKill,
	GoodTillDate,
	AtTheOpening,
	AtTheClose,
}

impl TimeInForce {
	pub fn as_str(&self) -> &'static str {
		match self {
			TimeInForce::Day => "DAY",
			TimeInForce::GoodTillCancel => "GOOD_TILL_CANCEL",
			TimeInForce::ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
			TimeInForce::FillOrKill => "FILL_OR_KILL",
			TimeInForce::GoodTillDate => "GOOD_TILL_DATE",
			TimeInForce::AtTheOpening => "AT_THE_OPENING",
			TimeInForce::AtTheClose => "AT_THE_CLOSE",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"DAY" => Some(TimeInForce::Day),
			"GOOD_TILL_CANCEL" => Some(TimeInForce::GoodTillCancel),
			"IMMEDIATE_OR_CANCEL" => Some(TimeInForce::ImmediateOrCancel),
			"FILL_OR_KILL" => Some(TimeInForce::FillOrKill),
			"GOOD_TILL_DATE" => Some(TimeInForce::GoodTillDate),
			"AT_THE_OPENING" => Some(TimeInForce::AtTheOpening),
			"AT_THE_CLOSE" => Some(TimeInForce::AtTheClose),
			_ => None,
		}
	}
}

impl fmt::Display for TimeInForce {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of the last transaction applied to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
	/// New order.
	NO,
	/// Accept order.
	AO,
	/// Reject order.
	RO,
}

impl fmt::Display for TxKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			TxKind::NO => "NO",
			TxKind::AO => "AO",
			TxKind::RO => "RO",
		};
		f.write_str(name)
	}
}

/// The persisted trading-order aggregate.
///
/// `order_id` is assigned once at creation and never reassigned. `tx_nr`
/// equals the identifier of the audit entry that produced the latest
/// mutation, giving a total order of transactions per order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Internal storage identity, assigned at first commit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<u64>,
	/// External, write-once order identifier.
	pub order_id: String,
	/// Parent order reference (hierarchy, not ownership).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent_order_id: Option<String>,
	/// Root order reference (hierarchy, not ownership).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub root_order_id: Option<String>,
	/// Kind of the last transaction applied.
	pub tx: TxKind,
	/// Identifier of the audit entry behind the latest mutation.
	pub tx_nr: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cl_ord_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sending_time: Option<DateTime<Utc>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub side: Option<Side>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ord_type: Option<OrdType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stop_px: Option<Decimal>,
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
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ex_destination: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	/// Current lifecycle state.
	pub state: State,
	/// Cancel sub-lifecycle state.
	pub cancel_state: CancelState,
}

impl Default for Order {
	fn default() -> Self {
		Self {
			id: None,
			order_id: String::new(),
			parent_order_id: None,
			root_order_id: None,
			tx: TxKind::NO,
			tx_nr: 0,
			cl_ord_id: None,
			account: None,
			sending_time: None,
			symbol: None,
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
			state: State::New,
			cancel_state: CancelState::None,
		}
	}
}
