//! Predicate construction from raw filter parameters.
//!
//! Key syntax is `field` (implicit `eq`) or `field__operator`. Accepted
//! predicates are combined with logical AND; there is no OR support.
//! The permissive edge-case policy is part of the contract: blank values,
//! unknown fields, unparsable numbers or timestamps and non-name
//! enumeration values all contribute no predicate, and an unknown operator
//! on a known field falls back to `eq`.

use crate::fields::{self, FieldAccessor};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use oms_types::Order;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A composed search condition over orders.
pub type OrderPredicate = Box<dyn Fn(&Order) -> bool + Send + Sync>;

/// Translates filter parameters into composed predicates.
pub struct PredicateBuilder;

impl PredicateBuilder {
	/// Builds the AND of all accepted per-field predicates.
	///
	/// With no accepted filter the result is vacuously true.
	pub fn build(params: &HashMap<String, String>) -> OrderPredicate {
		let mut predicates: Vec<OrderPredicate> = Vec::new();

		for (key, value) in params {
			let value = value.trim();
			if value.is_empty() {
				continue; // skip empties
			}
			let key = key.trim();
			// pattern: field__op e.g. price__gte, symbol__like
			let (field, op) = match key.find("__") {
				Some(idx) if idx > 0 => (&key[..idx], &key[idx + 2..]),
				_ => (key, "eq"),
			};
			let Some(accessor) = fields::lookup(field) else {
				tracing::debug!(field = %field, "Ignoring unknown filter field");
				continue;
			};
			if let Some(predicate) = Self::for_field(accessor, op, value) {
				predicates.push(predicate);
			}
		}

		Box::new(move |order| predicates.iter().all(|p| p(order)))
	}

	fn for_field(accessor: FieldAccessor, op: &str, value: &str) -> Option<OrderPredicate> {
		match accessor {
			FieldAccessor::Text(get) => Some(Self::text(get, op, value)),
			FieldAccessor::Numeric(get) => Self::ordered(get, op, value, parse_number),
			FieldAccessor::Temporal(get) => Self::ordered(get, op, value, parse_timestamp),
			FieldAccessor::Symbolic { get, is_name } => {
				// Only exact matches against a variant name; anything else
				// degenerates to vacuously true.
				if !is_name(value) {
					return None;
				}
				let value = value.to_string();
				Some(Box::new(move |order| get(order) == Some(value.as_str())))
			}
		}
	}

	fn text(get: fn(&Order) -> Option<&str>, op: &str, value: &str) -> OrderPredicate {
		match op {
			"like" => {
				let needle = value.to_lowercase();
				Box::new(move |order| {
					get(order).is_some_and(|s| s.to_lowercase().contains(&needle))
				})
			}
			// eq and anything else: exact match
			_ => {
				let value = value.to_string();
				Box::new(move |order| get(order) == Some(value.as_str()))
			}
		}
	}

	fn ordered<T>(
		get: fn(&Order) -> Option<T>,
		op: &str,
		value: &str,
		parse: fn(&str) -> Option<T>,
	) -> Option<OrderPredicate>
	where
		T: PartialOrd + Copy + Send + Sync + 'static,
	{
		if op == "between" {
			// Two comma-separated halves; either may be empty for an open
			// bound, both empty is vacuously true.
			let parts: Vec<&str> = value.split(',').collect();
			if parts.len() != 2 {
				return None;
			}
			let low_raw = parts[0].trim();
			let high_raw = parts[1].trim();
			let low = if low_raw.is_empty() {
				None
			} else {
				Some(parse(low_raw)?)
			};
			let high = if high_raw.is_empty() {
				None
			} else {
				Some(parse(high_raw)?)
			};
			if low.is_none() && high.is_none() {
				return None;
			}
			return Some(Box::new(move |order| {
				get(order).is_some_and(|x| {
					low.map_or(true, |a| x >= a) && high.map_or(true, |b| x <= b)
				})
			}));
		}

		let v = parse(value)?;
		Some(match op {
			"gt" => Box::new(move |order| get(order).is_some_and(|x| x > v)),
			"gte" => Box::new(move |order| get(order).is_some_and(|x| x >= v)),
			"lt" => Box::new(move |order| get(order).is_some_and(|x| x < v)),
			"lte" => Box::new(move |order| get(order).is_some_and(|x| x <= v)),
			// eq and anything else: exact match
			_ => Box::new(move |order| get(order).is_some_and(|x| x == v)),
		})
	}
}

fn parse_number(value: &str) -> Option<Decimal> {
	value.parse::<Decimal>().ok()
}

/// Accepts RFC 3339 timestamps and offset-less ISO-8601 date-times, the
/// latter interpreted as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
		return Some(dt.with_timezone(&Utc));
	}
	value
		.parse::<NaiveDateTime>()
		.ok()
		.map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
	use super::*;
	use oms_types::{Side, State};

	fn order(symbol: &str, price: &str) -> Order {
		Order {
			order_id: format!("O-{}", symbol),
			symbol: Some(symbol.to_string()),
			price: Some(price.parse().unwrap()),
			side: Some(Side::Buy),
			state: State::Unack,
			..Default::default()
		}
	}

	fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
		entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn eq_and_range_filters_compose_with_and() {
		let predicate = PredicateBuilder::build(&params(&[
			("symbol", "AAPL"),
			("price__gte", "10"),
			("price__lte", "20"),
		]));

		assert!(predicate(&order("AAPL", "15")));
		assert!(predicate(&order("AAPL", "10")));
		assert!(predicate(&order("AAPL", "20")));
		assert!(!predicate(&order("AAPL", "25")));
		assert!(!predicate(&order("MSFT", "15")));
	}

	#[test]
	fn between_with_open_upper_bound_means_gte() {
		let predicate = PredicateBuilder::build(&params(&[("price__between", "5,")]));

		assert!(predicate(&order("AAPL", "5")));
		assert!(predicate(&order("AAPL", "100")));
		assert!(!predicate(&order("AAPL", "4.99")));
	}

	#[test]
	fn between_with_open_lower_bound_means_lte() {
		let predicate = PredicateBuilder::build(&params(&[("price__between", ",20")]));

		assert!(predicate(&order("AAPL", "20")));
		assert!(!predicate(&order("AAPL", "20.01")));
	}

	#[test]
	fn between_with_both_bounds_is_inclusive() {
		let predicate = PredicateBuilder::build(&params(&[("price__between", "5,20")]));

		assert!(predicate(&order("AAPL", "5")));
		assert!(predicate(&order("AAPL", "20")));
		assert!(!predicate(&order("AAPL", "4")));
		assert!(!predicate(&order("AAPL", "21")));
	}

	#[test]
	fn degenerate_between_is_vacuously_true() {
		for value in [",", "5", "1,2,3"] {
			let predicate = PredicateBuilder::build(&params(&[("price__between", value)]));
			assert!(predicate(&order("AAPL", "42")), "value {:?}", value);
		}
	}

	#[test]
	fn unknown_fields_and_unparsable_values_are_ignored() {
		let baseline = PredicateBuilder::build(&params(&[("symbol", "AAPL")]));
		let noisy = PredicateBuilder::build(&params(&[
			("symbol", "AAPL"),
			("bogus", "1"),
			("price", "abc"),
			("transactTime__gte", "not-a-timestamp"),
			("account", "   "),
		]));

		let row = order("AAPL", "15");
		assert_eq!(baseline(&row), noisy(&row));
		assert!(noisy(&row));
	}

	#[test]
	fn like_is_case_insensitive_substring() {
		let predicate = PredicateBuilder::build(&params(&[("symbol__like", "aap")]));

		assert!(predicate(&order("AAPL", "1")));
		assert!(!predicate(&order("MSFT", "1")));
	}

	#[test]
	fn symbolic_eq_matches_variant_names_case_sensitively() {
		let matching = PredicateBuilder::build(&params(&[("state", "UNACK")]));
		assert!(matching(&order("AAPL", "1")));

		let other = PredicateBuilder::build(&params(&[("state", "LIVE")]));
		assert!(!other(&order("AAPL", "1")));

		// Not a variant name: the filter degenerates to vacuously true.
		let invalid = PredicateBuilder::build(&params(&[("state", "unack")]));
		assert!(invalid(&order("AAPL", "1")));
	}

	#[test]
	fn symbolic_filter_on_absent_value_excludes_the_row() {
		let predicate = PredicateBuilder::build(&params(&[("ordType", "MARKET")]));
		assert!(!predicate(&order("AAPL", "1")));
	}

	#[test]
	fn temporal_between_honors_open_bounds() {
		let mut row = order("AAPL", "1");
		row.transact_time = Some("2026-08-24T12:00:00Z".parse().unwrap());

		let open_upper = PredicateBuilder::build(&params(&[(
			"transactTime__between",
			"2026-08-24T00:00:00Z,",
		)]));
		assert!(open_upper(&row));

		let closed = PredicateBuilder::build(&params(&[(
			"transactTime__between",
			"2026-08-23T00:00:00Z,2026-08-24T11:00:00Z",
		)]));
		assert!(!closed(&row));

		// A bound that fails to parse drops the filter key.
		let unparsable = PredicateBuilder::build(&params(&[(
			"transactTime__between",
			"yesterday,2026-08-24T23:00:00Z",
		)]));
		assert!(unparsable(&row));
	}

	#[test]
	fn temporal_bounds_parse_both_offset_and_naive_forms() {
		let mut row = order("AAPL", "1");
		row.transact_time = Some("2026-08-24T12:00:00Z".parse().unwrap());

		let rfc = PredicateBuilder::build(&params(&[(
			"transactTime__gte",
			"2026-08-24T00:00:00Z",
		)]));
		assert!(rfc(&row));

		let naive = PredicateBuilder::build(&params(&[(
			"transactTime__lt",
			"2026-08-24T11:00:00",
		)]));
		assert!(!naive(&row));
	}
}
