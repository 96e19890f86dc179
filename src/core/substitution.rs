//! Substitutions map variables to values.
//!
//! Variables can be bound to atomic values, composite values or to
//! other variables. Substitutions are persistent: extending one never
//! changes it, so search branches can share their ancestors' bindings.

use crate::core::error::{Error, Result};
use crate::core::logic_variable::{ReifiedVar, Var};
use crate::core::value::Value;
use im::OrdMap;
use std::fmt::Formatter;

/// Mapping of variables to values.
#[derive(Clone, Default, PartialEq)]
pub struct Substitution {
    subs: OrdMap<Var, Value>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: OrdMap::new(),
        }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Returns `true` if `x` has a direct binding.
    pub fn has(&self, x: &Var) -> bool {
        self.subs.contains_key(x)
    }

    /// Direct (non-transitive) binding of `x`.
    ///
    /// Check [`Substitution::has`] first; asking for an unbound
    /// variable is a usage error.
    pub fn get(&self, x: &Var) -> Result<&Value> {
        self.subs.get(x).ok_or(Error::UnboundVariable(*x))
    }

    /// Bindings in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Value)> {
        self.subs.iter()
    }

    /// Resolve the value of a variable through any chain of bindings.
    ///
    /// If `v` is no variable or a variable that cannot be
    /// resolved (i.e. it is not substituted), `v` is returned.
    pub fn walk<'a>(&'a self, mut v: &'a Value) -> &'a Value {
        while let Value::Var(var) = v {
            match self.subs.get(var) {
                Some(next) => v = next,
                None => break,
            }
        }
        v
    }

    /// Attempt to resolve any variables contained in `v`.
    ///
    /// List tails and successor chains are followed in a loop; only
    /// list heads recurse.
    pub fn walk_star(&self, v: &Value) -> Value {
        let mut spine = vec![];
        let mut current = self.walk(v);
        loop {
            match current {
                Value::Pair(p) => {
                    spine.push(Link::Head(self.walk_star(&p.first)));
                    current = self.walk(&p.second);
                }
                Value::Succ(n) => {
                    spine.push(Link::Succ);
                    current = self.walk(n);
                }
                _ => break,
            }
        }
        Link::rebuild(spine, current.clone())
    }

    /// Extend substitution with a variable => value mapping.
    ///
    /// There is no occurs check; binding a variable to a term that
    /// contains it is allowed.
    pub fn extend(&self, x: Var, v: Value) -> Self {
        Substitution {
            subs: self.subs.update(x, v),
        }
    }

    /// Attempt to unify `Value`s `u` and `v` under this substitution.
    ///
    /// Returns `None` if the values cannot be made equal.
    pub fn unify(&self, u: &Value, v: &Value) -> Option<Self> {
        let mut subs = self.clone();
        let mut u = u.clone();
        let mut v = v.clone();
        loop {
            let wu = subs.walk(&u).clone();
            let wv = subs.walk(&v).clone();

            if wu == wv {
                return Some(subs);
            }

            match (&wu, &wv) {
                // goals replace wildcards by fresh variables; a raw one matches anything
                (Value::Wildcard, _) | (_, Value::Wildcard) => return Some(subs),
                (Value::Var(x), _) => return Some(subs.extend(*x, wv.clone())),
                (_, Value::Var(y)) => return Some(subs.extend(*y, wu.clone())),
                (Value::Pair(a), Value::Pair(b)) => {
                    subs = subs.unify(&a.first, &b.first)?;
                    u = a.second.clone();
                    v = b.second.clone();
                }
                (Value::Succ(a), Value::Succ(b)) => {
                    u = (**a).clone();
                    v = (**b).clone();
                }
                _ => return None,
            }
        }
    }

    /// Bind every variable that remains fresh in `v` to a reified
    /// variable, numbered in order of first occurrence.
    pub fn reify_s(self, v: &Value) -> Self {
        let mut subs = self;
        let mut current = v.clone();
        loop {
            let walked = subs.walk(&current).clone();
            match walked {
                Value::Var(var) => {
                    let reified = Value::from(ReifiedVar(subs.len()));
                    return subs.extend(var, reified);
                }
                Value::Pair(p) => {
                    subs = subs.reify_s(&p.first);
                    current = p.second.clone();
                }
                Value::Succ(n) => current = (*n).clone(),
                _ => return subs,
            }
        }
    }
}

/// One step down a list tail or a successor chain.
pub(crate) enum Link {
    Head(Value),
    Succ,
}

impl Link {
    pub(crate) fn rebuild(spine: Vec<Link>, end: Value) -> Value {
        spine.into_iter().rev().fold(end, |tail, link| match link {
            Link::Head(head) => Value::cons(head, tail),
            Link::Succ => Value::succ(tail),
        })
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution
#[macro_export]
macro_rules! substitution {
    () => { $crate::prelude::Substitution::empty() };

    ($($var:ident : $val:expr),*) => {{
        let subs = $crate::prelude::Substitution::empty();
        $(
            let subs = subs.extend($var.clone(), $crate::prelude::Value::from($val.clone()));
        )*
        subs
    }}
}
