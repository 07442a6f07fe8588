//! Order lifecycle state machine.
//!
//! Pure validation of lifecycle transitions. The transition table is closed,
//! built once at first use and read-only thereafter:
//! NEW -> UNACK; UNACK -> LIVE | REJ; LIVE -> FILLED | CXL | REJ;
//! FILLED, CXL, REJ -> CLOSED; CLOSED and EXP are terminal.

use once_cell::sync::Lazy;
use oms_types::State;
use std::collections::{HashMap, HashSet};

/// Static transition table - each state maps to its allowed next states.
static TRANSITIONS: Lazy<HashMap<State, HashSet<State>>> = Lazy::new(|| {
	let mut m = HashMap::new();
	m.insert(State::New, HashSet::from([State::Unack]));
	m.insert(State::Unack, HashSet::from([State::Live, State::Rej]));
	m.insert(
		State::Live,
		HashSet::from([State::Filled, State::Cxl, State::Rej]),
	);
	m.insert(State::Filled, HashSet::from([State::Closed]));
	m.insert(State::Cxl, HashSet::from([State::Closed]));
	m.insert(State::Rej, HashSet::from([State::Closed]));
	m.insert(State::Closed, HashSet::new()); // terminal
	m.insert(State::Exp, HashSet::new()); // terminal
	m
});

/// Pure, stateless validator of lifecycle transitions.
pub struct StateMachine;

impl StateMachine {
	/// Checks whether `from -> to` is an edge of the lifecycle lattice.
	///
	/// A state missing from the table is treated as having no outgoing
	/// edges; this never panics.
	pub fn is_valid_transition(from: State, to: State) -> bool {
		TRANSITIONS.get(&from).is_some_and(|set| set.contains(&to))
	}

	/// Transitions `from` to `to`, present iff the transition is valid.
	pub fn transition(from: State, to: State) -> Option<State> {
		if Self::is_valid_transition(from, to) {
			Some(to)
		} else {
			None
		}
	}

	/// Returns a curried transition function for a fixed current state.
	pub fn transition_from(from: State) -> impl Fn(State) -> Option<State> {
		move |to| Self::transition(from, to)
	}

	/// Folds [`StateMachine::transition`] over `steps` left to right,
	/// short-circuiting to `None` at the first invalid step.
	pub fn transition_sequence(initial: State, steps: &[State]) -> Option<State> {
		steps
			.iter()
			.copied()
			.try_fold(initial, Self::transition)
	}
}
