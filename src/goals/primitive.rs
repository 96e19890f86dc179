use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::value::Value;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Value>, v: impl Into<Value>) -> Goal {
    let u = u.into();
    let v = v.into();
    Goal::new(move |s: State| {
        let (u, s) = s.instantiate_wildcards(&u);
        let (v, s) = s.instantiate_wildcards(&v);
        match s.substitution().unify(&u, &v) {
            Some(subs) => Stream::singleton(s.with_substitution(subs)),
            None => Stream::empty(),
        }
    })
}

pub fn succeed() -> Goal {
    Goal::new(Stream::singleton)
}

pub fn fail() -> Goal {
    Goal::new(|_| Stream::empty())
}

/// Creates a goal that never produces a value but never gives up either.
pub fn nevero() -> Goal {
    Goal::new(|s| Stream::suspension(move || nevero().apply(s)))
}

/// Creates a goal that succeeds an unbounded number of times.
pub fn alwayso() -> Goal {
    Goal::new(|s| Stream::suspension(move || disj2(succeed(), alwayso()).apply(s)))
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disj2(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s: State| Stream::merge(g1.apply(s.clone()), g2.apply(s)))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: Goal, g2: Goal) -> Goal {
    Goal::new(move |s| {
        let g2 = g2.clone();
        g1.apply(s).bind(move |s| g2.apply(s))
    })
}

/// Postpones applying `g` until the stream is forced.
///
/// Recursive relations must reach their recursive call through a
/// delayed goal, otherwise building the stream recurses without bound.
pub fn delay(g: Goal) -> Goal {
    Goal::new(move |s| {
        let g = g.clone();
        Stream::suspension(move || g.apply(s))
    })
}
