//! Reification renders a solution for display and comparison.
//!
//! Variables that are still unbound get placeholders `_0`, `_1`, ...
//! in the order they are first met, so two solutions that only differ
//! in the names of their fresh variables reify to equal values.

use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::value::Value;

/// Replace all variables contained in `v` with their substituted
/// values and reify variables without substitution.
pub fn reify(subs: &Substitution, v: &Value) -> Value {
    let v = subs.walk_star(v);
    let placeholders = Substitution::empty().reify_s(&v);
    placeholders.walk_star(&v)
}

/// Reify several variables in one pass so that their placeholders
/// share a numbering.
pub fn reify_all(subs: &Substitution, vars: &[Var]) -> Vec<Value> {
    let joint = reify(subs, &Value::list(vars.iter().copied()));
    let mut values = Vec::with_capacity(vars.len());
    let mut current = &joint;
    while let Value::Pair(p) = current {
        values.push(p.first.clone());
        current = &p.second;
    }
    values
}

impl Substitution {
    pub fn reify(&self, v: &Value) -> Value {
        reify(self, v)
    }
}
