//! Order persistence.

use crate::context::ProcessingContext;
use crate::error::ProcessError;
use oms_storage::UnitOfWork;

/// Stages the validated order aggregate on the unit of work.
pub struct Persister;

impl Persister {
	pub fn new() -> Self {
		Self
	}

	/// Stages the order and puts the refreshed aggregate, including any
	/// storage-assigned identity, back into the context.
	pub async fn persist(
		&self,
		uow: &mut dyn UnitOfWork,
		ctx: &mut ProcessingContext,
	) -> Result<(), ProcessError> {
		let stored = uow.stage_order(ctx.order.clone()).await?;
		tracing::info!(order_id = %stored.order_id, state = %stored.state, "Order persisted");
		ctx.order = stored;
		Ok(())
	}
}

impl Default for Persister {
	fn default() -> Self {
		Self::new()
	}
}
