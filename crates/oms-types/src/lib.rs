//! Common types module for the OMS order-lifecycle engine.
//!
//! This module defines the core data types shared by all engine components:
//! the order aggregate and its lifecycle states, inbound transaction
//! commands, audit entries, outbound notification messages and the query
//! result surface. It provides a centralized location for shared types to
//! ensure consistency across all crates.

/// Query result types for the order search surface.
pub mod api;
/// Append-only audit entry types recording processed transactions.
pub mod audit;
/// Outbound notification message types.
pub mod message;
/// The order aggregate and its trading attribute enumerations.
pub mod order;
/// Lifecycle and cancel state enumerations.
pub mod state;
/// Inbound transaction commands and transaction results.
pub mod tx;

// Re-export all types for convenient access
pub use api::*;
pub use audit::*;
pub use message::*;
pub use order::*;
pub use state::*;
pub use tx::*;
