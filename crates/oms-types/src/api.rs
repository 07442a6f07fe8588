//! Query result types for the order search surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrdType, Order, Side, State};

/// Condensed order view returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
	pub order_id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub root_order_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent_order_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub side: Option<Side>,
	pub state: State,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ord_type: Option<OrdType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_qty: Option<Decimal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transact_time: Option<DateTime<Utc>>,
}

impl From<&Order> for OrderSummary {
	fn from(order: &Order) -> Self {
		Self {
			order_id: order.order_id.clone(),
			root_order_id: order.root_order_id.clone(),
			parent_order_id: order.parent_order_id.clone(),
			symbol: order.symbol.clone(),
			side: order.side,
			state: order.state,
			ord_type: order.ord_type,
			price: order.price,
			order_qty: order.order_qty,
			transact_time: order.transact_time,
		}
	}
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
	/// Items on this page.
	pub content: Vec<T>,
	/// Zero-based page number.
	pub page: usize,
	/// Requested page size.
	pub size: usize,
	/// Total number of matching items across all pages.
	pub total_elements: usize,
	/// Total number of pages.
	pub total_pages: usize,
}

impl<T> Page<T> {
	/// Builds a page from the already-sliced content and overall totals.
	pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: usize) -> Self {
		let total_pages = if size == 0 {
			0
		} else {
			total_elements.div_ceil(size)
		};
		Self {
			content,
			page,
			size,
			total_elements,
			total_pages,
		}
	}
}
