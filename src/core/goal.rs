use crate::core::state::State;
use crate::core::stream::{Stream, StreamIter};
use std::fmt::Formatter;
use std::sync::Arc;

/// A goal maps a search state to a stream of states that satisfy it.
///
/// Goals are pure and cheap to clone, so the same goal can be applied
/// to many states on different search branches.
#[derive(Clone)]
pub struct Goal(Arc<dyn Fn(State) -> Stream<State> + Send + Sync>);

impl Goal {
    pub fn new(f: impl 'static + Send + Sync + Fn(State) -> Stream<State>) -> Self {
        Goal(Arc::new(f))
    }

    pub fn apply(&self, s: State) -> Stream<State> {
        (self.0)(s)
    }

    /// Realize at most `n` states, starting from the empty state.
    ///
    /// Like the other empty-state drivers this expects the goal to
    /// introduce its own variables; apply it to the state its variables
    /// came from otherwise.
    pub fn run(&self, n: usize) -> Stream<State> {
        self.apply(State::default()).take(n)
    }

    /// Realize every state. Does not terminate if there are infinitely many.
    pub fn run_inf(&self) -> Stream<State> {
        self.apply(State::default()).take_all()
    }

    pub fn iter(&self) -> StreamIter<State> {
        self.apply(State::default()).into_iter()
    }
}

impl std::fmt::Debug for Goal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "<goal>")
    }
}
