//! Processing error taxonomy.

use oms_storage::StorageError;
use oms_types::{ErrorCode, State};
use thiserror::Error;

/// Errors that can abort a processing pipeline run.
///
/// Every variant except notification failures rolls back the whole unit of
/// work; notification failures never reach this type because the producer
/// only logs them.
#[derive(Debug, Error)]
pub enum ProcessError {
	/// An Accept or Reject referenced an unknown order.
	#[error("Order not found: {0}")]
	NotFound(String),
	/// The inbound payload carried an unrecognized transaction kind.
	#[error("Unsupported transaction type: {0}")]
	UnsupportedTransaction(String),
	/// The requested lifecycle transition is not an edge of the lattice.
	/// Carries the attempted pair for diagnostics.
	#[error("Validation failed")]
	ValidationFailed { from: State, to: State },
	/// The storage layer failed to stage or commit the unit of work.
	#[error("Persistence failure: {0}")]
	Persistence(String),
}

impl ProcessError {
	/// Stable, enumerable code for the failure, exposed on transaction
	/// results.
	pub fn code(&self) -> ErrorCode {
		match self {
			ProcessError::NotFound(_) => ErrorCode::NotFound,
			ProcessError::UnsupportedTransaction(_) => ErrorCode::UnsupportedTransaction,
			ProcessError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
			ProcessError::Persistence(_) => ErrorCode::PersistenceFailure,
		}
	}
}

impl From<StorageError> for ProcessError {
	fn from(err: StorageError) -> Self {
		ProcessError::Persistence(err.to_string())
	}
}
