//! Search tests against the in-memory store.

use oms_query::QueryService;
use oms_storage::implementations::memory::MemoryOrderStore;
use oms_storage::OrderStore;
use oms_types::{Order, Side, State};
use std::collections::HashMap;
use std::sync::Arc;

fn order(order_id: &str, symbol: &str, price: &str, state: State) -> Order {
	Order {
		order_id: order_id.to_string(),
		symbol: Some(symbol.to_string()),
		side: Some(Side::Buy),
		price: Some(price.parse().unwrap()),
		state,
		..Default::default()
	}
}

async fn seeded_service() -> QueryService {
	let store = Arc::new(MemoryOrderStore::new());
	let mut uow = store.begin().await.unwrap();
	for row in [
		order("O-1", "AAPL", "20", State::Unack),
		order("O-2", "MSFT", "10", State::Live),
		order("O-3", "AAPL", "10", State::Live),
		order("O-4", "TSLA", "30", State::Rej),
		order("O-5", "AAPL", "15", State::Live),
	] {
		uow.stage_order(row).await.unwrap();
	}
	uow.commit().await.unwrap();
	QueryService::new(store)
}

fn filters(entries: &[(&str, &str)]) -> HashMap<String, String> {
	entries
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

fn ids(page: &oms_types::Page<oms_types::OrderSummary>) -> Vec<String> {
	page.content.iter().map(|s| s.order_id.clone()).collect()
}

#[tokio::test]
async fn filters_compose_and_default_sort_is_newest_first() {
	let service = seeded_service().await;

	let page = service
		.search(&filters(&[("symbol", "AAPL"), ("state", "LIVE")]), None, None, None)
		.await
		.unwrap();

	assert_eq!(page.total_elements, 2);
	assert_eq!(ids(&page), vec!["O-5", "O-3"]);
}

#[tokio::test]
async fn multi_key_sort_orders_by_price_then_symbol() {
	let service = seeded_service().await;

	let page = service
		.search(
			&filters(&[("price__lte", "20")]),
			None,
			None,
			Some("price,ASC;symbol,DESC"),
		)
		.await
		.unwrap();

	// price 10: MSFT before AAPL; then 15; then 20.
	assert_eq!(ids(&page), vec!["O-2", "O-3", "O-5", "O-1"]);
}

#[tokio::test]
async fn garbled_sort_falls_back_to_newest_first() {
	let service = seeded_service().await;

	let page = service
		.search(&HashMap::new(), None, None, Some("frobnicate,UP"))
		.await
		.unwrap();

	assert_eq!(ids(&page), vec!["O-5", "O-4", "O-3", "O-2", "O-1"]);
}

#[tokio::test]
async fn pagination_slices_and_reports_totals() {
	let service = seeded_service().await;

	let first = service
		.search(&HashMap::new(), Some(0), Some(2), Some("id,ASC"))
		.await
		.unwrap();
	assert_eq!(ids(&first), vec!["O-1", "O-2"]);
	assert_eq!(first.total_elements, 5);
	assert_eq!(first.total_pages, 3);
	assert_eq!(first.size, 2);

	let last = service
		.search(&HashMap::new(), Some(2), Some(2), Some("id,ASC"))
		.await
		.unwrap();
	assert_eq!(ids(&last), vec!["O-5"]);

	let beyond = service
		.search(&HashMap::new(), Some(9), Some(2), Some("id,ASC"))
		.await
		.unwrap();
	assert!(beyond.content.is_empty());
	assert_eq!(beyond.total_elements, 5);
}

#[tokio::test]
async fn out_of_range_paging_parameters_use_defaults() {
	let service = seeded_service().await;

	for (page, size) in [(Some(-1), Some(0)), (None, Some(501)), (Some(-5), Some(-2))] {
		let result = service
			.search(&HashMap::new(), page, size, None)
			.await
			.unwrap();
		assert_eq!(result.page, 0);
		assert_eq!(result.size, 50);
		assert_eq!(result.content.len(), 5);
	}
}

#[tokio::test]
async fn unknown_filters_do_not_restrict_the_result() {
	let service = seeded_service().await;

	let page = service
		.search(
			&filters(&[("bogus", "1"), ("price", "abc"), ("account", "")]),
			None,
			None,
			None,
		)
		.await
		.unwrap();

	assert_eq!(page.total_elements, 5);
}
