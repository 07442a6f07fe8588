//! Audit recording.
//!
//! Builds and stages exactly one audit entry per processed transaction.
//! Runs before validation, inside the unit of work: when a later step fails
//! the staged entry is dropped with the rest of the unit, so rejected
//! transitions leave no audit trace.

use crate::context::ProcessingContext;
use crate::error::ProcessError;
use oms_storage::UnitOfWork;
use oms_types::AuditEntry;

/// Appends an immutable history entry for the transaction being processed.
pub struct AuditRecorder;

impl AuditRecorder {
	pub fn new() -> Self {
		Self
	}

	/// Stages the audit entry and stamps the order's transaction counter
	/// with the entry's assigned identifier.
	pub async fn record(
		&self,
		uow: &mut dyn UnitOfWork,
		ctx: &mut ProcessingContext,
	) -> Result<(), ProcessError> {
		let entry = AuditEntry::record(
			ctx.order.order_id.clone(),
			ctx.event,
			ctx.transaction.clone(),
		);
		let entry = uow.stage_audit(entry).await?;
		tracing::info!(
			order_id = %entry.order_id,
			audit_id = entry.id,
			event = %entry.event,
			"Order event recorded"
		);

		ctx.order.tx_nr = entry.id;
		ctx.audit_entry = Some(entry);
		Ok(())
	}
}

impl Default for AuditRecorder {
	fn default() -> Self {
		Self::new()
	}
}
