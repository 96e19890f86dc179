use crate::core::logic_variable::Var;
use crate::core::substitution::{Link, Substitution};
use crate::core::value::Value;
use std::fmt::Formatter;

/// Search state threaded through goals.
///
/// Pairs the current substitution with the counter used to hand out
/// identities for fresh variables. Both only ever move forward along
/// a search branch.
#[derive(Clone, Default, PartialEq)]
pub struct State {
    subs: Substitution,
    next_id: usize,
}

impl State {
    pub fn empty() -> Self {
        State {
            subs: Substitution::empty(),
            next_id: 0,
        }
    }

    /// State whose variable counter starts after `n_reserved` ids.
    pub fn reserving(n_reserved: usize) -> Self {
        State {
            subs: Substitution::empty(),
            next_id: n_reserved,
        }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.subs
    }

    pub fn next_id(&self) -> usize {
        self.next_id
    }

    pub fn with_substitution(&self, subs: Substitution) -> Self {
        State {
            subs,
            next_id: self.next_id,
        }
    }

    /// Allocate `N` consecutive variables.
    pub fn fresh_vars<const N: usize>(self, names: Option<[&'static str; N]>) -> ([Var; N], Self) {
        let first = self.next_id;
        let vars = std::array::from_fn(|i| match names {
            Some(names) => Var::named(first + i, names[i]),
            None => Var::new(first + i),
        });
        let state = State {
            subs: self.subs,
            next_id: first + N,
        };
        (vars, state)
    }

    /// Allocate `arity` consecutive variables, named from `names` if
    /// given. `names` must hold exactly `arity` entries.
    pub fn fresh_var_vec(self, arity: usize, names: Option<&[&'static str]>) -> (Vec<Var>, Self) {
        let first = self.next_id;
        let vars = (0..arity)
            .map(|i| match names.and_then(|names| names.get(i)) {
                Some(name) => Var::named(first + i, *name),
                None => Var::new(first + i),
            })
            .collect();
        let state = State {
            subs: self.subs,
            next_id: first + arity,
        };
        (vars, state)
    }

    /// Replace every wildcard in `v` with its own fresh variable.
    ///
    /// Terms without wildcards come back unchanged and leave the counter
    /// alone.
    pub fn instantiate_wildcards(self, v: &Value) -> (Value, Self) {
        if v.has_wildcard() {
            self.instantiate(v)
        } else {
            (v.clone(), self)
        }
    }

    fn instantiate(self, v: &Value) -> (Value, Self) {
        let mut state = self;
        let mut spine = vec![];
        let mut current = v;
        let end = loop {
            match current {
                Value::Wildcard => {
                    let ([w], next) = state.fresh_vars(None);
                    state = next;
                    break Value::var(w);
                }
                Value::Pair(p) => {
                    let (head, next) = state.instantiate(&p.first);
                    state = next;
                    spine.push(Link::Head(head));
                    current = &p.second;
                }
                Value::Succ(n) => {
                    spine.push(Link::Succ);
                    current = &**n;
                }
                other => break other.clone(),
            }
        };
        (Link::rebuild(spine, end), state)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.subs)
    }
}
