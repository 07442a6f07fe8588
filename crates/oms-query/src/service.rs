//! Search execution over the order store.
//!
//! Filtering is delegated to [`PredicateBuilder`]; this module adds
//! multi-key sorting and offset pagination and shapes the result as a
//! [`Page`] of condensed order views.

use oms_storage::{OrderStore, StorageError};
use oms_types::{Order, OrderSummary, Page};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::fields::{self, FieldAccessor};
use crate::predicate::PredicateBuilder;

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 500;

/// One resolved sort instruction.
struct SortKey {
	target: SortTarget,
	descending: bool,
}

enum SortTarget {
	/// Internal storage identity, the insertion-order tiebreaker.
	Internal,
	Field(FieldAccessor),
}

impl SortKey {
	fn compare(&self, a: &Order, b: &Order) -> Ordering {
		let ordering = match &self.target {
			SortTarget::Internal => a.id.cmp(&b.id),
			SortTarget::Field(accessor) => match accessor {
				FieldAccessor::Text(get) => get(a).cmp(&get(b)),
				FieldAccessor::Numeric(get) => get(a).cmp(&get(b)),
				FieldAccessor::Temporal(get) => get(a).cmp(&get(b)),
				FieldAccessor::Symbolic { get, .. } => get(a).cmp(&get(b)),
			},
		};
		if self.descending {
			ordering.reverse()
		} else {
			ordering
		}
	}
}

/// Executes parameterized order searches against the store.
pub struct QueryService {
	store: Arc<dyn OrderStore>,
}

impl QueryService {
	pub fn new(store: Arc<dyn OrderStore>) -> Self {
		Self { store }
	}

	/// Runs a filtered, sorted, paginated search.
	///
	/// Out-of-range `page` and `size` fall back to their defaults, and an
	/// unusable `sort` expression falls back to newest-first by internal
	/// identity. Filter handling follows the permissive policy of
	/// [`PredicateBuilder`].
	pub async fn search(
		&self,
		filters: &HashMap<String, String>,
		page: Option<i64>,
		size: Option<i64>,
		sort: Option<&str>,
	) -> Result<Page<OrderSummary>, StorageError> {
		let page = match page {
			Some(p) if p >= 0 => p as usize,
			_ => 0,
		};
		let size = match size {
			Some(s) if s > 0 && s <= MAX_PAGE_SIZE as i64 => s as usize,
			_ => DEFAULT_PAGE_SIZE,
		};
		let keys = parse_sort(sort);

		let predicate = PredicateBuilder::build(filters);
		let mut orders = self.store.list_orders().await?;
		orders.retain(|order| predicate(order));

		orders.sort_by(|a, b| {
			keys.iter()
				.map(|key| key.compare(a, b))
				.find(|ordering| *ordering != Ordering::Equal)
				.unwrap_or(Ordering::Equal)
		});

		let total = orders.len();
		let content = orders
			.iter()
			.skip(page.saturating_mul(size))
			.take(size)
			.map(OrderSummary::from)
			.collect();

		tracing::debug!(
			filters = filters.len(),
			matched = total,
			page = page,
			size = size,
			"Order search executed"
		);

		Ok(Page::new(content, page, size, total))
	}
}

/// Parses a `field,DIR;field,DIR` sort expression.
///
/// Segments with an unknown field or direction are skipped; when nothing
/// usable remains the result is newest-first by internal identity.
fn parse_sort(sort: Option<&str>) -> Vec<SortKey> {
	let mut keys = Vec::new();

	for segment in sort.unwrap_or("").split(';') {
		let segment = segment.trim();
		if segment.is_empty() {
			continue;
		}
		let mut parts = segment.split(',');
		let field = parts.next().unwrap_or("").trim();
		let direction = parts.next().unwrap_or("ASC").trim();

		let descending = match direction.to_ascii_uppercase().as_str() {
			"ASC" | "" => false,
			"DESC" => true,
			_ => continue,
		};
		let target = if field == "id" {
			SortTarget::Internal
		} else {
			match fields::lookup(field) {
				Some(accessor) => SortTarget::Field(accessor),
				None => continue,
			}
		};
		keys.push(SortKey { target, descending });
	}

	if keys.is_empty() {
		keys.push(SortKey {
			target: SortTarget::Internal,
			descending: true,
		});
	}
	keys
}
