pub use crate::{
    core::{
        error::Error,
        goal::Goal,
        logic_variable::{ReifiedVar, Var},
        pair::Pair,
        reify::{reify, reify_all},
        state::State,
        stream::Stream,
        substitution::Substitution,
        value::{Atom, Atomic, Kind, Value},
    },
    goals::{combinators::*, primitive::*},
    query::{query, run, run_all, run_from, Answer, Query, Solution},
};
