//! Orchestration pipeline.
//!
//! Sequences dispatch, audit recording, validation and persistence as one
//! atomic unit of work per inbound transaction, then publishes the order
//! snapshot. A failure in any of the four mutating steps drops the unit of
//! work before commit, so all staged effects roll back together.
//! Notification failures are the sole exception: they are asynchronous,
//! logged and never fed back into the transaction result.

use crate::audit::AuditRecorder;
use crate::dispatch::TransactionDispatcher;
use crate::error::ProcessError;
use crate::idgen::OrderIdGenerator;
use crate::persist::Persister;
use crate::validate::Validator;
use oms_notify::NotificationService;
use oms_storage::OrderStore;
use oms_types::{Order, Transaction, TxResult};
use std::sync::Arc;

/// Processes inbound transactions as atomic units of work.
pub struct OrchestrationPipeline {
	store: Arc<dyn OrderStore>,
	dispatcher: TransactionDispatcher,
	audit: AuditRecorder,
	validator: Validator,
	persister: Persister,
	notifications: Arc<NotificationService>,
}

impl OrchestrationPipeline {
	pub fn new(
		store: Arc<dyn OrderStore>,
		id_generator: Arc<dyn OrderIdGenerator>,
		notifications: Arc<NotificationService>,
	) -> Self {
		let dispatcher = TransactionDispatcher::new(Arc::clone(&store), id_generator);
		Self {
			store,
			dispatcher,
			audit: AuditRecorder::new(),
			validator: Validator::new(),
			persister: Persister::new(),
			notifications,
		}
	}

	/// Processes one transaction and maps the outcome to a [`TxResult`].
	///
	/// This is the outward seam: any processing error becomes a FAIL result
	/// carrying the error text and its stable code.
	pub async fn process(&self, transaction: Transaction) -> TxResult {
		let kind = transaction.kind();
		match self.run(transaction).await {
			Ok(order) => TxResult::ok(order.order_id),
			Err(e) => {
				tracing::error!(transaction = kind, "Error processing transaction: {}", e);
				TxResult::fail(e.to_string(), e.code())
			}
		}
	}

	/// Runs the pipeline steps inside a single unit of work.
	async fn run(&self, transaction: Transaction) -> Result<Order, ProcessError> {
		let mut uow = self.store.begin().await?;

		let mut ctx = self.dispatcher.dispatch(transaction).await?;
		self.audit.record(uow.as_mut(), &mut ctx).await?;
		self.validator.validate(&mut ctx)?;
		self.persister.persist(uow.as_mut(), &mut ctx).await?;
		uow.commit().await?;

		// Post-commit, fire-and-forget.
		self.notifications.publish(&ctx.order);

		Ok(ctx.order)
	}
}
