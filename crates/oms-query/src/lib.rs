//! Ad hoc order query module.
//!
//! Translates loosely-typed filter parameters into composed, typed search
//! predicates over the persisted order shape, with pagination and multi-key
//! sorting. The translation is deliberately permissive, as a stated
//! contract: blank values, unknown fields and values that fail to parse for
//! their field's type contribute no predicate instead of failing the query.

/// Explicit registry of filterable and sortable order fields.
pub mod fields;
/// Typed predicate constructors and the AND combinator.
pub mod predicate;
/// Search execution with pagination and sorting.
pub mod service;

pub use fields::FieldAccessor;
pub use predicate::{OrderPredicate, PredicateBuilder};
pub use service::QueryService;
