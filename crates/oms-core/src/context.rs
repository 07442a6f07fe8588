//! Request-scoped processing context.

use oms_types::{AuditEntry, Order, OrderEventKind, State, Transaction};

/// Ephemeral carrier for one pipeline run.
///
/// Built by the dispatcher, mutated by the subsequent steps and dropped at
/// pipeline exit. Owned exclusively by a single run; never shared across
/// concurrent requests.
#[derive(Debug)]
pub struct ProcessingContext {
	/// The inbound transaction being processed.
	pub transaction: Transaction,
	/// The resolved order aggregate, mutated in place by the pipeline.
	pub order: Order,
	/// The desired next lifecycle state computed by the dispatcher.
	pub target_state: State,
	/// Event tag classifying the transaction.
	pub event: OrderEventKind,
	/// The staged audit entry, set by the audit recorder.
	pub audit_entry: Option<AuditEntry>,
}

impl ProcessingContext {
	pub fn new(
		transaction: Transaction,
		order: Order,
		target_state: State,
		event: OrderEventKind,
	) -> Self {
		Self {
			transaction,
			order,
			target_state,
			event,
			audit_entry: None,
		}
	}
}
