//! Core order-lifecycle processing engine.
//!
//! This crate sequences one inbound transaction through dispatch, audit
//! recording, lifecycle validation and persistence as a single atomic unit
//! of work, then publishes a best-effort outbound notification for the
//! committed order. Lifecycle rules live in a pure [`StateMachine`]; every
//! other step is a small component owned by the [`OrchestrationPipeline`].

/// Audit entry recording for processed transactions.
pub mod audit;
/// Request-scoped processing context.
pub mod context;
/// Transaction interpretation and order materialization.
pub mod dispatch;
/// Processing error taxonomy.
pub mod error;
/// Order identifier generation.
pub mod idgen;
/// Unit-of-work persistence of the order aggregate.
pub mod persist;
/// Atomic sequencing of the processing steps.
pub mod pipeline;
/// Pure lifecycle state machine.
pub mod state;
/// Transition validation against the state machine.
pub mod validate;

pub use audit::AuditRecorder;
pub use context::ProcessingContext;
pub use dispatch::TransactionDispatcher;
pub use error::ProcessError;
pub use idgen::{OrderIdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use persist::Persister;
pub use pipeline::OrchestrationPipeline;
pub use state::StateMachine;
pub use validate::Validator;
