//! Storage module for the OMS order-lifecycle engine.
//!
//! This module provides abstractions for durable storage of the order
//! aggregate and its audit trail, supporting different backend
//! implementations. Mutations go through a [`UnitOfWork`]: writes are staged
//! against the unit and applied atomically on commit; dropping an
//! uncommitted unit discards every staged write, which is how the engine
//! rolls back a failed transaction.

use async_trait::async_trait;
use oms_types::{AuditEntry, Order};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod memory;
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Error that occurs when a requested item is not found.
	#[error("Not found")]
	NotFound,
	/// Error that occurs in the storage backend.
	#[error("Backend error: {0}")]
	Backend(String),
}

/// Trait defining the interface for order storage backends.
///
/// Read operations see only committed state. All writes are performed
/// through a unit of work obtained from [`OrderStore::begin`].
#[async_trait]
pub trait OrderStore: Send + Sync {
	/// Looks up an order by its external identifier.
	async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Order>, StorageError>;

	/// Returns all committed orders. The query layer filters and sorts.
	async fn list_orders(&self) -> Result<Vec<Order>, StorageError>;

	/// Returns the committed audit entries for an order, oldest first.
	async fn audit_trail(&self, order_id: &str) -> Result<Vec<AuditEntry>, StorageError>;

	/// Opens a new unit of work for staging writes.
	async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StorageError>;
}

/// A single atomic unit of work over the store.
///
/// Staged writes become visible only after [`UnitOfWork::commit`].
/// Identifier sequences are allocated eagerly at staging time and are not
/// reclaimed on rollback, mirroring database sequence behavior.
#[async_trait]
pub trait UnitOfWork: Send {
	/// Stages an audit entry, assigning its identifier from the audit
	/// sequence. Returns the entry with the assigned id.
	async fn stage_audit(&mut self, entry: AuditEntry) -> Result<AuditEntry, StorageError>;

	/// Stages the order aggregate, assigning internal identity to orders
	/// seen for the first time. Returns the refreshed aggregate.
	async fn stage_order(&mut self, order: Order) -> Result<Order, StorageError>;

	/// Atomically applies all staged writes.
	async fn commit(self: Box<Self>) -> Result<(), StorageError>;
}
