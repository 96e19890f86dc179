//! Compose goals using combinators to build more complex goals
//!

use crate::core::error::{Error, Result};
use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::value::Value;
use crate::goals::primitive::{conj2, disj2, fail, succeed};
use tracing::trace;

/// Creates a goal that succeeds if all of the goals succeed.
///
/// No goals at all always succeed.
pub fn conj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let mut goals: Vec<Goal> = goals.into_iter().collect();
    match goals.pop() {
        None => succeed(),
        Some(last) => goals.into_iter().rev().fold(last, |acc, g| conj2(g, acc)),
    }
}

/// Creates a goal that succeeds if any of the goals succeeds.
///
/// No goals at all always fail.
pub fn disj(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let mut goals: Vec<Goal> = goals.into_iter().collect();
    match goals.pop() {
        None => fail(),
        Some(last) => goals.into_iter().rev().fold(last, |acc, g| disj2(g, acc)),
    }
}

/// Creates a goal that succeeds for every clause whose goals all succeed.
///
/// All clauses are explored, their solutions interleaved.
pub fn conde<C>(clauses: impl IntoIterator<Item = C>) -> Goal
where
    C: IntoIterator<Item = Goal>,
{
    disj(clauses.into_iter().map(conj))
}

/// Introduce `N` anonymous variables scoped to the goal built by `f`.
pub fn fresh<const N: usize>(f: impl 'static + Send + Sync + Fn([Var; N]) -> Goal) -> Goal {
    Goal::new(move |s: State| {
        trace!(first = s.next_id(), arity = N, "fresh variables");
        let (vars, s) = s.fresh_vars(None);
        f(vars).apply(s)
    })
}

/// Introduce named variables scoped to the goal built by `f`.
pub fn fresh_named<const N: usize>(
    names: [&'static str; N],
    f: impl 'static + Send + Sync + Fn([Var; N]) -> Goal,
) -> Goal {
    Goal::new(move |s: State| {
        trace!(first = s.next_id(), ?names, "fresh variables");
        let (vars, s) = s.fresh_vars(Some(names));
        f(vars).apply(s)
    })
}

/// Introduce `arity` variables whose number is only known at runtime.
///
/// If `names` is given it must hold exactly `arity` names.
pub fn fresh_dyn(
    arity: usize,
    names: Option<Vec<&'static str>>,
    f: impl 'static + Send + Sync + Fn(Vec<Var>) -> Goal,
) -> Result<Goal> {
    if let Some(names) = &names {
        if names.len() != arity {
            return Err(Error::ArityMismatch {
                expected: arity,
                found: names.len(),
            });
        }
    }
    Ok(Goal::new(move |s: State| {
        trace!(first = s.next_id(), arity, "fresh variables");
        let (vars, s) = s.fresh_var_vec(arity, names.as_deref());
        f(vars).apply(s)
    }))
}

/// Creates a goal that succeeds if `f(item)` succeeds for every item of `list`.
///
/// The list is resolved under the state the goal is applied to, so
/// earlier goals may have filled in parts of it.
pub fn everyg(f: impl 'static + Send + Sync + Fn(Value) -> Goal, list: impl Into<Value>) -> Goal {
    let list = list.into();
    Goal::new(move |s: State| {
        let items = walk_items(&list, &s);
        conj(items.into_iter().map(&f)).apply(s)
    })
}

/// Creates a goal that succeeds if `f(item)` succeeds for some item of `list`.
pub fn someg(f: impl 'static + Send + Sync + Fn(Value) -> Goal, list: impl Into<Value>) -> Goal {
    let list = list.into();
    Goal::new(move |s: State| {
        let items = walk_items(&list, &s);
        disj(items.into_iter().map(&f)).apply(s)
    })
}

/// Items of the known prefix of `list`.
fn walk_items(list: &Value, s: &State) -> Vec<Value> {
    let subs = s.substitution();
    let mut items = vec![];
    let mut current = subs.walk(list);
    while let Value::Pair(p) = current {
        items.push(p.first.clone());
        current = subs.walk(&p.second);
    }
    items
}
