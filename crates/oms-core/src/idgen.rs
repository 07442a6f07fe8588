//! Order identifier generation.
//!
//! The dispatcher never mints identifiers itself; it asks an injected
//! [`OrderIdGenerator`], which keeps the dispatch step deterministic under
//! test. Production uses time-ordered UUIDs so identifiers sort
//! lexicographically by creation time.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Capability to produce globally-unique, lexicographically sortable,
/// externally opaque order identifiers.
pub trait OrderIdGenerator: Send + Sync {
	/// Returns a fresh identifier. Never returns the same value twice.
	fn next_id(&self) -> String;
}

/// Production generator backed by UUID version 7.
pub struct UuidIdGenerator;

impl UuidIdGenerator {
	pub fn new() -> Self {
		Self
	}
}

impl Default for UuidIdGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl OrderIdGenerator for UuidIdGenerator {
	fn next_id(&self) -> String {
		Uuid::now_v7().to_string()
	}
}

/// Deterministic generator producing `PREFIX-00000001`-style identifiers.
///
/// Zero-padding keeps the sequence lexicographically sortable. Intended for
/// tests and tooling.
pub struct SequenceIdGenerator {
	prefix: String,
	counter: AtomicU64,
}

impl SequenceIdGenerator {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: AtomicU64::new(0),
		}
	}
}

impl OrderIdGenerator for SequenceIdGenerator {
	fn next_id(&self) -> String {
		let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
		format!("{}-{:08}", self.prefix, n)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sequence_ids_are_unique_and_sortable() {
		let generator = SequenceIdGenerator::new("ORD");
		let first = generator.next_id();
		let second = generator.next_id();

		assert_eq!(first, "ORD-00000001");
		assert_eq!(second, "ORD-00000002");
		assert!(first < second);
	}

	#[test]
	fn uuid_ids_are_unique() {
		let generator = UuidIdGenerator::new();
		assert_ne!(generator.next_id(), generator.next_id());
	}
}
