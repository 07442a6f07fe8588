//! Transition validation.

use crate::context::ProcessingContext;
use crate::error::ProcessError;
use crate::state::StateMachine;

/// Checks the desired transition against the state machine before commit.
pub struct Validator;

impl Validator {
	pub fn new() -> Self {
		Self
	}

	/// Applies the target state to the in-memory order when the transition
	/// is valid; otherwise fails with the attempted pair, aborting the unit
	/// of work.
	pub fn validate(&self, ctx: &mut ProcessingContext) -> Result<(), ProcessError> {
		let from = ctx.order.state;
		let to = ctx.target_state;

		match StateMachine::transition(from, to) {
			Some(next) => {
				tracing::info!(
					order_id = %ctx.order.order_id,
					"Valid state transition from {} to {}",
					from,
					to
				);
				ctx.order.state = next;
				Ok(())
			}
			None => {
				tracing::warn!(
					order_id = %ctx.order.order_id,
					"Invalid state transition from {} to {}",
					from,
					to
				);
				Err(ProcessError::ValidationFailed { from, to })
			}
		}
	}
}

impl Default for Validator {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use oms_types::{
		AcceptOrderTx, CancelState, Order, OrderEventKind, State, Transaction, TxKind,
	};

	fn context(current: State, target: State) -> ProcessingContext {
		let order = Order {
			id: Some(1),
			order_id: "O-1".to_string(),
			parent_order_id: None,
			root_order_id: None,
			tx: TxKind::AO,
			tx_nr: 1,
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
			state: current,
			cancel_state: CancelState::None,
		};
		ProcessingContext::new(
			Transaction::AcceptOrder(AcceptOrderTx {
				order_id: "O-1".to_string(),
			}),
			order,
			target,
			OrderEventKind::Ack,
		)
	}

	#[test]
	fn valid_transition_mutates_the_order() {
		let mut ctx = context(State::Unack, State::Live);
		Validator::new().validate(&mut ctx).unwrap();
		assert_eq!(ctx.order.state, State::Live);
	}

	#[test]
	fn invalid_transition_carries_the_attempted_pair() {
		let mut ctx = context(State::Live, State::Live);
		let err = Validator::new().validate(&mut ctx).unwrap_err();

		assert!(matches!(
			err,
			ProcessError::ValidationFailed {
				from: State::Live,
				to: State::Live
			}
		));
		assert_eq!(err.to_string(), "Validation failed");
		// The order is left untouched.
		assert_eq!(ctx.order.state, State::Live);
	}
}
