//! Field registry for the order query surface.
//!
//! Maps external field names to typed accessors over the persisted
//! [`Order`] shape. The field's type determines which filter operators
//! apply. Extend safely by adding arms to [`lookup`].

use chrono::{DateTime, Utc};
use oms_types::{CancelState, OrdType, Order, Side, State};
use rust_decimal::Decimal;

/// Typed accessor for one filterable order field.
pub enum FieldAccessor {
	/// String field: supports `eq` and case-insensitive `like`.
	Text(fn(&Order) -> Option<&str>),
	/// Numeric field: supports `eq`, `gt`, `gte`, `lt`, `lte`, `between`.
	Numeric(fn(&Order) -> Option<Decimal>),
	/// Timestamp field: same operator set as numeric, ISO-8601 values.
	Temporal(fn(&Order) -> Option<DateTime<Utc>>),
	/// Enumeration field: `eq` only, against the case-sensitive variant
	/// name.
	Symbolic {
		/// Symbolic name of the field's current value.
		get: fn(&Order) -> Option<&'static str>,
		/// Whether the supplied value is a name of the enumeration.
		is_name: fn(&str) -> bool,
	},
}

/// Resolves an external field name to its accessor. Unknown names return
/// `None` and are silently ignored by the predicate builder.
pub fn lookup(field: &str) -> Option<FieldAccessor> {
	Some(match field {
		"orderId" => FieldAccessor::Text(|o| Some(o.order_id.as_str())),
		"rootOrderId" => FieldAccessor::Text(|o| o.root_order_id.as_deref()),
		"parentOrderId" => FieldAccessor::Text(|o| o.parent_order_id.as_deref()),
		"clOrdId" => FieldAccessor::Text(|o| o.cl_ord_id.as_deref()),
		"account" => FieldAccessor::Text(|o| o.account.as_deref()),
		"symbol" => FieldAccessor::Text(|o| o.symbol.as_deref()),
		"securityId" => FieldAccessor::Text(|o| o.security_id.as_deref()),
		"price" => FieldAccessor::Numeric(|o| o.price),
		"orderQty" => FieldAccessor::Numeric(|o| o.order_qty),
		"cashOrderQty" => FieldAccessor::Numeric(|o| o.cash_order_qty),
		"sendingTime" => FieldAccessor::Temporal(|o| o.sending_time),
		"transactTime" => FieldAccessor::Temporal(|o| o.transact_time),
		"expireTime" => FieldAccessor::Temporal(|o| o.expire_time),
		"side" => FieldAccessor::Symbolic {
			get: |o| o.side.map(|v| v.as_str()),
			is_name: |v| Side::from_name(v).is_some(),
		},
		"ordType" => FieldAccessor::Symbolic {
			get: |o| o.ord_type.map(|v| v.as_str()),
			is_name: |v| OrdType::from_name(v).is_some(),
		},
		"state" => FieldAccessor::Symbolic {
			get: |o| Some(o.state.as_str()),
			is_name: |v| State::from_name(v).is_some(),
		},
		"cancelState" => FieldAccessor::Symbolic {
			get: |o| Some(o.cancel_state.as_str()),
			is_name: |v| CancelState::from_name(v).is_some(),
		},
		_ => return None,
	})
}
