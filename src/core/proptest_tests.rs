//! Property-based tests for unification and reification using proptest.

use crate::core::logic_variable::Var;
use crate::core::reify::reify;
use crate::core::substitution::Substitution;
use crate::core::value::Value;
use proptest::prelude::*;

/// Term description (before variables are numbered)
#[derive(Debug, Clone)]
enum TermDesc {
    Var,
    Atom(u8),
    Nil,
    Pair(Box<TermDesc>, Box<TermDesc>),
    Succ(Box<TermDesc>),
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        prop_oneof![
            3 => Just(TermDesc::Var),
            3 => (0..4u8).prop_map(TermDesc::Atom),
            1 => Just(TermDesc::Nil),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => Just(TermDesc::Var),
            3 => (0..4u8).prop_map(TermDesc::Atom),
            1 => Just(TermDesc::Nil),
            3 => (arb_term_desc(max_depth - 1), arb_term_desc(max_depth - 1))
                .prop_map(|(a, d)| TermDesc::Pair(Box::new(a), Box::new(d))),
            1 => arb_term_desc(max_depth - 1).prop_map(|n| TermDesc::Succ(Box::new(n))),
        ]
        .boxed()
    }
}

/// Every variable occurrence gets its own identity, so unifying two
/// built terms can never create a cyclic binding.
fn build_term(desc: &TermDesc, next_id: &mut usize) -> Value {
    match desc {
        TermDesc::Var => {
            let var = Var::new(*next_id);
            *next_id += 1;
            Value::var(var)
        }
        TermDesc::Atom(i) => Value::new(*i as i32),
        TermDesc::Nil => Value::Nil,
        TermDesc::Pair(a, d) => {
            let a = build_term(a, next_id);
            Value::cons(a, build_term(d, next_id))
        }
        TermDesc::Succ(n) => Value::succ(build_term(n, next_id)),
    }
}

fn arb_term(max_depth: u32) -> impl Strategy<Value = Value> {
    arb_term_desc(max_depth).prop_map(|desc| build_term(&desc, &mut 0))
}

/// Generate a pair of terms that share no variables
fn arb_term_pair(max_depth: u32) -> impl Strategy<Value = (Value, Value)> {
    (arb_term_desc(max_depth), arb_term_desc(max_depth)).prop_map(|(desc1, desc2)| {
        let mut next_id = 0;
        let t1 = build_term(&desc1, &mut next_id);
        let t2 = build_term(&desc2, &mut next_id);
        (t1, t2)
    })
}

fn contains_var(v: &Value) -> bool {
    match v {
        Value::Var(_) => true,
        Value::Pair(p) => contains_var(&p.first) || contains_var(&p.second),
        Value::Succ(n) => contains_var(n),
        _ => false,
    }
}

proptest! {
    /// Soundness: if unify(s, t) = σ, then sσ = tσ
    #[test]
    fn unification_soundness((t1, t2) in arb_term_pair(3)) {
        if let Some(subs) = Substitution::empty().unify(&t1, &t2) {
            prop_assert_eq!(subs.walk_star(&t1), subs.walk_star(&t2));
        }
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds, and both
    /// unifiers agree up to the naming of unbound variables
    #[test]
    fn unification_symmetry((t1, t2) in arb_term_pair(3)) {
        let r1 = Substitution::empty().unify(&t1, &t2);
        let r2 = Substitution::empty().unify(&t2, &t1);
        prop_assert_eq!(r1.is_some(), r2.is_some());
        if let (Some(s1), Some(s2)) = (r1, r2) {
            let both = Value::cons(t1.clone(), t2.clone());
            prop_assert_eq!(reify(&s1, &both), reify(&s2, &both));
        }
    }

    /// Identity: unify(t, t) succeeds without binding anything
    #[test]
    fn unification_identity(t in arb_term(3)) {
        prop_assert_eq!(Substitution::empty().unify(&t, &t), Some(Substitution::empty()));
    }

    /// A raw wildcard unifies with every term and never binds
    #[test]
    fn wildcard_never_binds((t1, t2) in arb_term_pair(3)) {
        let subs = Substitution::empty().unify(&t1, &t2).unwrap_or_default();
        prop_assert_eq!(subs.unify(&Value::wildcard(), &t1), Some(subs.clone()));
        prop_assert_eq!(subs.unify(&t2, &Value::wildcard()), Some(subs.clone()));
    }

    #[test]
    fn extend_leaves_the_receiver_untouched((t1, t2) in arb_term_pair(3), id in 100..110usize) {
        let subs = Substitution::empty().unify(&t1, &t2).unwrap_or_default();
        let before = subs.clone();
        let x = Var::new(id);
        let extended = subs.extend(x, t1.clone());
        prop_assert_eq!(&subs, &before);
        prop_assert!(!subs.has(&x));
        prop_assert!(extended.has(&x));
        prop_assert_eq!(extended.len(), subs.len() + 1);
    }

    /// Reified terms contain placeholders instead of variables
    #[test]
    fn reification_removes_variables((t1, t2) in arb_term_pair(3)) {
        let subs = Substitution::empty().unify(&t1, &t2).unwrap_or_default();
        prop_assert!(!contains_var(&reify(&subs, &t1)));
    }
}
