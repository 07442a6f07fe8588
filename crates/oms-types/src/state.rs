//! Lifecycle state enumerations for the order aggregate.
//!
//! An order carries exactly one [`State`] at any time; the allowed movements
//! between states are defined by the state machine in `oms-core`. The
//! separate [`CancelState`] tracks the cancel sub-lifecycle independently of
//! the main state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
	/// Order has been created locally but not yet sent out.
	New,
	/// Order is awaiting acknowledgment.
	Unack,
	/// Order is live in the market.
	Live,
	/// Order is fully filled.
	Filled,
	/// Order has been cancelled.
	Cxl,
	/// Order has been rejected.
	Rej,
	/// Order is closed (terminal).
	Closed,
	/// Order has expired (terminal).
	Exp,
}

impl State {
	/// Symbolic name, as serialized and as accepted by enum query filters.
	pub fn as_str(&self) -> &'static str {
		match self {
			State::New => "NEW",
			State::Unack => "UNACK",
			State::Live => "LIVE",
			State::Filled => "FILLED",
			State::Cxl => "CXL",
			State::Rej => "REJ",
			State::Closed => "CLOSED",
			State::Exp => "EXP",
		}
	}

	/// Resolves a symbolic name back to a state. Case-sensitive.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"NEW" => Some(State::New),
			"UNACK" => Some(State::Unack),
			"LIVE" => Some(State::Live),
			"FILLED" => Some(State::Filled),
			"CXL" => Some(State::Cxl),
			"REJ" => Some(State::Rej),
			"CLOSED" => Some(State::Closed),
			"EXP" => Some(State::Exp),
			_ => None,
		}
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Cancel sub-lifecycle of an order, tracked separately from [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CancelState {
	/// No cancel activity.
	None,
	/// A cancel is pending.
	Pcxl,
	/// The order has been cancelled.
	Cxl,
}

impl CancelState {
	pub fn as_str(&self) -> &'static str {
		match self {
			CancelState::None => "NONE",
			CancelState::Pcxl => "PCXL",
			CancelState::Cxl => "CXL",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"NONE" => Some(CancelState::None),
			"PCXL" => Some(CancelState::Pcxl),
			"CXL" => Some(CancelState::Cxl),
			_ => None,
		}
	}
}

impl fmt::Display for CancelState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
