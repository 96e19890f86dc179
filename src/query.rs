//! Run goals and collect their solutions.
//!
//! [`run`] and [`run_all`] return raw search states. A [`Query`] owns
//! the variables a caller is interested in and renders each state as a
//! [`Solution`] of reified values.

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::reify::{reify, reify_all};
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::value::Value;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Collect up to `n` states produced by `goal` from the empty state.
///
/// The goal must introduce all of its variables itself. Use
/// [`run_from`] for goals over variables taken from a [`State`].
pub fn run(n: usize, goal: &Goal) -> Vec<State> {
    run_from(State::empty(), n, goal)
}

/// Collect up to `n` states produced by `goal`, starting from `state`.
///
/// Variables allocated from `state` keep their identity; anything the
/// goal allocates gets ids after them.
pub fn run_from(state: State, n: usize, goal: &Goal) -> Vec<State> {
    goal.apply(state).take(n).into_vec()
}

/// Collect every state produced by `goal` from the empty state.
///
/// Does not terminate if the goal has infinitely many solutions.
pub fn run_all(goal: &Goal) -> Vec<State> {
    goal.apply(State::empty()).into_vec()
}

/// Create a query over `N` named variables.
///
/// The variables take the first `N` identities; goals built by `f`
/// allocate their own variables after them.
pub fn query<const N: usize>(names: [&'static str; N], f: impl FnOnce([Var; N]) -> Goal) -> Query<N> {
    let (vars, _) = State::empty().fresh_vars(Some(names));
    Query {
        vars,
        goal: f(vars),
        limit: None,
        single: false,
    }
}

pub struct Query<const N: usize> {
    vars: [Var; N],
    goal: Goal,
    limit: Option<usize>,
    single: bool,
}

impl<const N: usize> Query<N> {
    pub fn vars(&self) -> [Var; N] {
        self.vars
    }

    /// Stop after `n` states.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Reify the first variable on its own instead of a list of all variables.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    fn initial_state(&self) -> State {
        State::reserving(N)
    }

    /// States produced by the goal. Lazy unless a limit is set.
    pub fn states(&self) -> Stream<State> {
        let states = self.goal.apply(self.initial_state());
        match self.limit {
            Some(n) => states.take(n),
            None => states,
        }
    }

    /// One reified value per state: the first variable if `single` was
    /// requested, otherwise the list of all variables.
    pub fn reified(&self) -> Stream<Value> {
        let target = match (self.single, self.vars.first()) {
            (true, Some(var)) => Value::var(*var),
            _ => Value::list(self.vars.iter().copied()),
        };
        self.states()
            .map(move |s| reify(s.substitution(), &target))
    }

    /// Collect solutions, dropping those that reify to equal values.
    ///
    /// Without a limit this does not terminate on infinite search spaces.
    pub fn solve(&self) -> Answer {
        let mut solutions: Vec<Solution> = vec![];
        let mut duplicates = 0;
        for state in self.states() {
            let solution = Solution {
                bindings: self
                    .vars
                    .iter()
                    .copied()
                    .zip(reify_all(state.substitution(), &self.vars))
                    .collect(),
            };
            if solutions.contains(&solution) {
                duplicates += 1;
            } else {
                solutions.push(solution);
            }
        }
        debug!(
            solutions = solutions.len(),
            duplicates,
            limit = ?self.limit,
            "query solved"
        );
        Answer {
            success: !solutions.is_empty(),
            solutions,
        }
    }
}

/// Outcome of [`Query::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub success: bool,
    pub solutions: Vec<Solution>,
}

impl Answer {
    /// The goal succeeded exactly once and bound nothing the query asked about.
    ///
    /// Every query variable must reify to its own placeholder; variables
    /// linked to each other are constrained.
    pub fn is_tautology(&self) -> bool {
        if !self.success || self.solutions.len() != 1 {
            return false;
        }
        let bindings = &self.solutions[0].bindings;
        bindings.iter().enumerate().all(|(i, (_, value))| {
            matches!(value, Value::Reified(_)) && bindings[..i].iter().all(|(_, seen)| seen != value)
        })
    }
}

/// Reified values of the query variables for one solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    bindings: Vec<(Var, Value)>,
}

impl Solution {
    /// Value of the variable called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(var, _)| var.name() == Some(name))
            .map(|(_, value)| value)
    }

    pub fn value(&self, var: Var) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(v, _)| *v == var)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> Vec<Value> {
        self.bindings.iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn bindings(&self) -> &[(Var, Value)] {
        &self.bindings
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut iter = self.bindings.iter();
        if let Some((var, value)) = iter.next() {
            write!(f, "{:?} = {:?}", var, value)?;
        }
        for (var, value) in iter {
            write!(f, ", {:?} = {:?}", var, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::list::{appendo, membero};
    use crate::goals::numbers::addo;
    use crate::prelude::*;
    use crate::list;

    #[test]
    fn run_stops_after_n_states() {
        assert_eq!(run(3, &alwayso()).len(), 3);
        assert!(run(3, &fail()).is_empty());
    }

    #[test]
    fn run_from_keeps_caller_variables_apart_from_inner_ones() {
        let ([x], state) = State::empty().fresh_vars(Some(["x"]));
        let states = run_from(state, 10, &membero(x, list![1, 2, 3]));
        let values: Vec<Value> = states.iter().map(|s| s.substitution().reify(&x.into())).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(states.iter().all(|s| s.next_id() > x.id()));
    }

    #[test]
    fn run_all_collects_finite_search_spaces() {
        let x = Var::new(0);
        assert_eq!(run_all(&disj2(eq(x, 1), eq(x, 2))).len(), 2);
    }

    #[test]
    fn query_variables_come_first() {
        let q = query(["x", "y"], |[x, y]| {
            fresh(move |[z]| {
                assert_eq!(z.id(), 2);
                conj2(eq(x, z), eq(y, z))
            })
        });
        assert_eq!(q.vars()[0].id(), 0);
        assert_eq!(q.vars()[1].id(), 1);
        let answer = q.solve();
        assert!(answer.success);
        assert_eq!(answer.solutions[0].values(), vec![Value::rv(0), Value::rv(0)]);
    }

    #[test]
    fn failing_query_is_unsuccessful_without_error() {
        let answer = query(["x"], |[x]| conj2(eq(x, 1), eq(x, 2))).solve();
        assert!(!answer.success);
        assert!(answer.solutions.is_empty());
    }

    #[test]
    fn solutions_are_deduplicated_structurally() {
        let answer = query(["x"], |[x]| {
            disj(vec![eq(x, 1), eq(x, 1), eq(x, 2)])
        })
        .solve();
        assert_eq!(answer.solutions.len(), 2);
        assert_eq!(answer.solutions[0].get("x"), Some(&Value::new(1)));
        assert_eq!(answer.solutions[1].get("x"), Some(&Value::new(2)));
    }

    #[test]
    fn fresh_renamings_count_as_duplicates() {
        let answer = query(["x"], |[x]| {
            disj2(
                fresh(move |[a]| eq(x, Value::cons(a, ()))),
                fresh(move |[a, b]| conj2(eq(b, 0), eq(x, Value::cons(a, ())))),
            )
        })
        .solve();
        assert_eq!(answer.solutions.len(), 1);
        assert_eq!(answer.solutions[0].get("x"), Some(&list![Value::rv(0)]));
    }

    #[test]
    fn tautologies_bind_nothing() {
        let answer = query(["x"], |_| eq(1, 1)).solve();
        assert!(answer.is_tautology());
        let answer = query(["x"], |[x]| eq(x, 1)).solve();
        assert!(!answer.is_tautology());
    }

    #[test]
    fn linked_variables_are_not_a_tautology() {
        let answer = query(["x", "y"], |[x, y]| eq(x, y)).solve();
        assert!(answer.success);
        assert_eq!(answer.solutions[0].values(), vec![Value::rv(0), Value::rv(0)]);
        assert!(!answer.is_tautology());

        let answer = query(["x", "y"], |_| succeed()).solve();
        assert!(answer.is_tautology());
    }

    #[test]
    fn appending_splits_a_list_every_way() {
        let answer = query(["x", "y"], |[x, y]| appendo(x, y, list![1, 2])).solve();
        let pairs: Vec<_> = answer.solutions.iter().map(Solution::values).collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&vec![list![], list![1, 2]]));
        assert!(pairs.contains(&vec![list![1], list![2]]));
        assert!(pairs.contains(&vec![list![1, 2], list![]]));
    }

    #[test]
    fn membership_binds_one_slot_per_solution() {
        let answer = query(["x", "y", "z"], |[x, y, z]| membero(1, list![x, y, z])).solve();
        let rows: Vec<_> = answer.solutions.iter().map(Solution::values).collect();
        assert_eq!(
            rows,
            vec![
                vec![Value::new(1), Value::rv(0), Value::rv(1)],
                vec![Value::rv(0), Value::new(1), Value::rv(1)],
                vec![Value::rv(0), Value::rv(1), Value::new(1)],
            ]
        );
    }

    #[test]
    fn membership_in_a_mostly_known_list_has_one_solution() {
        let answer = query(["x"], |[x]| membero(2, list![1, x, 3])).solve();
        assert_eq!(answer.solutions.len(), 1);
        assert_eq!(answer.solutions[0].get("x"), Some(&Value::new(2)));
    }

    #[test]
    fn addition_enumerates_every_split() {
        let answer = query(["x", "y"], |[x, y]| addo(x, y, Value::nat(3))).solve();
        let mut pairs: Vec<(u64, u64)> = answer
            .solutions
            .iter()
            .map(|s| {
                let values = s.values();
                (values[0].as_nat().unwrap(), values[1].as_nat().unwrap())
            })
            .collect();
        pairs.sort();
        assert_eq!(pairs, vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn solutions_display_their_bindings() {
        let answer = query(["x", "y"], |[x, _]| eq(x, 5)).solve();
        assert_eq!(answer.solutions[0].to_string(), "x = 5, y = _0");
    }

    #[test]
    fn limit_bounds_infinite_queries() {
        let answer = query(["x"], |[x]| conj2(eq(x, 1), alwayso())).limit(4).solve();
        assert!(answer.success);
        assert_eq!(answer.solutions.len(), 1);
    }
}
