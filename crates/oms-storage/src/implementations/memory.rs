//! In-memory storage backend for the OMS engine.
//!
//! This module provides a memory-based implementation of the [`OrderStore`]
//! trait, useful for testing and development scenarios where persistence
//! across restarts is not required. Commit applies all staged writes under a
//! single write lock, so a unit of work is atomic with respect to readers
//! and to concurrently committing units.

use crate::{OrderStore, StorageError, UnitOfWork};
use async_trait::async_trait;
use oms_types::{AuditEntry, Order};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared committed state behind the store.
#[derive(Default)]
struct StoreInner {
	/// Committed orders keyed by external order id.
	orders: HashMap<String, Order>,
	/// Committed audit entries, append-only.
	audits: Vec<AuditEntry>,
}

/// In-memory order store.
pub struct MemoryOrderStore {
	inner: Arc<RwLock<StoreInner>>,
	/// Internal order identity sequence.
	order_seq: Arc<AtomicU64>,
	/// Audit entry identifier sequence.
	audit_seq: Arc<AtomicU64>,
}

impl MemoryOrderStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			inner: Arc::new(RwLock::new(StoreInner::default())),
			order_seq: Arc::new(AtomicU64::new(0)),
			audit_seq: Arc::new(AtomicU64::new(0)),
		}
	}
}

impl Default for MemoryOrderStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
	async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Order>, StorageError> {
		let inner = self.inner.read().await;
		Ok(inner.orders.get(order_id).cloned())
	}

	async fn list_orders(&self) -> Result<Vec<Order>, StorageError> {
		let inner = self.inner.read().await;
		Ok(inner.orders.values().cloned().collect())
	}

	async fn audit_trail(&self, order_id: &str) -> Result<Vec<AuditEntry>, StorageError> {
		let inner = self.inner.read().await;
		Ok(inner
			.audits
			.iter()
			.filter(|entry| entry.order_id == order_id)
			.cloned()
			.collect())
	}

	async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StorageError> {
		Ok(Box::new(MemoryUnitOfWork {
			inner: Arc::clone(&self.inner),
			order_seq: Arc::clone(&self.order_seq),
			audit_seq: Arc::clone(&self.audit_seq),
			staged_order: None,
			staged_audits: Vec::new(),
		}))
	}
}

/// Unit of work over the in-memory store.
///
/// Writes are collected in the unit and applied in [`commit`]; dropping the
/// unit without committing discards them.
struct MemoryUnitOfWork {
	inner: Arc<RwLock<StoreInner>>,
	order_seq: Arc<AtomicU64>,
	audit_seq: Arc<AtomicU64>,
	staged_order: Option<Order>,
	staged_audits: Vec<AuditEntry>,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
	async fn stage_audit(&mut self, mut entry: AuditEntry) -> Result<AuditEntry, StorageError> {
		// Sequence ids are allocated eagerly and not reclaimed on rollback.
		entry.id = self.audit_seq.fetch_add(1, Ordering::SeqCst) + 1;
		self.staged_audits.push(entry.clone());
		Ok(entry)
	}

	async fn stage_order(&mut self, mut order: Order) -> Result<Order, StorageError> {
		if order.id.is_none() {
			order.id = Some(self.order_seq.fetch_add(1, Ordering::SeqCst) + 1);
		}
		self.staged_order = Some(order.clone());
		Ok(order)
	}

	async fn commit(self: Box<Self>) -> Result<(), StorageError> {
		let mut inner = self.inner.write().await;
		inner.audits.extend(self.staged_audits);
		if let Some(order) = self.staged_order {
			inner.orders.insert(order.order_id.clone(), order);
		}
		Ok(())
	}
}
