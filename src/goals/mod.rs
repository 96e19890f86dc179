//! Library of goals

use crate::core::state::State;
use tracing::trace;

pub mod combinators;
pub mod list;
pub mod numbers;
pub mod primitive;

pub use combinators::{conde, conj, disj, everyg, fresh, fresh_dyn, fresh_named, someg};
pub use primitive::{alwayso, conj2, delay, disj2, eq, fail, nevero, succeed};

/// Called by relations defined with `defrel!` each time their body runs.
#[doc(hidden)]
pub fn trace_relation(name: &'static str, s: &State) {
    trace!(relation = name, next_id = s.next_id(), bindings = s.substitution().len(), "apply");
}
