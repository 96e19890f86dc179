//! Terms that goals talk about.
//!
//! A [`Value`] is either a logic variable, the empty list, a pair, an
//! atom wrapping a host value, a unary natural number, the wildcard,
//! or a placeholder produced by reification.

use crate::core::error::{Error, Result};
use crate::core::logic_variable::{ReifiedVar, Var};
use crate::core::pair::Pair;
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Host types that can be used as atomic values.
pub trait Atomic: Debug {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for f64 {}

impl Atomic for f32 {}

impl Atomic for String {}

impl Atomic for &'static str {}

impl<T: Atomic> Atomic for Box<T> {}

trait AtomicValue: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn eqv(&self, other: &dyn AtomicValue) -> bool;
}

impl<T: 'static + Atomic + PartialEq + Send + Sync> AtomicValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn AtomicValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// Type-erased host value.
///
/// Two atoms are equal if they hold the same host type and the host
/// type's equality says so.
#[derive(Clone)]
pub struct Atom(Arc<dyn AtomicValue>);

impl Atom {
    pub fn new<T: 'static + Atomic + PartialEq + Send + Sync>(x: T) -> Self {
        Atom(Arc::new(x))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eqv(&*other.0)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

/// Broad classification of a term.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    Variable,
    Pair,
    Empty,
    Atomic,
    Natural,
    Wildcard,
    Placeholder,
}

#[derive(Clone)]
pub enum Value {
    Var(Var),
    Nil,
    Pair(Arc<Pair>),
    Atom(Atom),
    Zero,
    Succ(Arc<Value>),
    Wildcard,
    Reified(ReifiedVar),
}

impl Value {
    pub fn new(val: impl Into<Value>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Value::Var(v)
    }

    pub fn cons(car: impl Into<Value>, cdr: impl Into<Value>) -> Self {
        Value::Pair(Arc::new(Pair::new(car, cdr)))
    }

    /// Build a proper list from the items.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        items.into()
    }

    /// Anonymous "don't care" term.
    ///
    /// Goals turn each occurrence into its own fresh variable, so two
    /// wildcards never compare equal.
    pub fn wildcard() -> Self {
        Value::Wildcard
    }

    /// Reified variable with index `n`.
    pub fn rv(n: usize) -> Self {
        Value::Reified(ReifiedVar(n))
    }

    /// Create a numeric value
    pub fn nat(n: u64) -> Self {
        let mut value = Value::Zero;
        for _ in 0..n {
            value = Value::succ(value);
        }
        value
    }

    pub fn succ(n: impl Into<Value>) -> Self {
        Value::Succ(Arc::new(n.into()))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Var(_) => Kind::Variable,
            Value::Nil => Kind::Empty,
            Value::Pair(_) => Kind::Pair,
            Value::Atom(_) => Kind::Atomic,
            Value::Zero | Value::Succ(_) => Kind::Natural,
            Value::Wildcard => Kind::Wildcard,
            Value::Reified(_) => Kind::Placeholder,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Value::Var(_))
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Value::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn has_wildcard(&self) -> bool {
        let mut current = self;
        loop {
            match current {
                Value::Wildcard => return true,
                Value::Pair(p) if p.first.has_wildcard() => return true,
                Value::Pair(p) => current = &p.second,
                Value::Succ(n) => current = &**n,
                _ => return false,
            }
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Atom(atom) => atom.downcast_ref(),
            _ => None,
        }
    }

    /// Interpret a fully known natural number.
    pub fn as_nat(&self) -> Option<u64> {
        let mut n = 0;
        let mut current = self;
        loop {
            match current {
                Value::Zero => return Some(n),
                Value::Succ(pred) => {
                    n += 1;
                    current = pred;
                }
                _ => return None,
            }
        }
    }

    pub fn to_nat(&self) -> Result<u64> {
        self.as_nat().ok_or_else(|| Error::NotANatural(self.clone()))
    }

    /// Collect the items of a proper list.
    pub fn to_vec(&self) -> Result<Vec<Value>> {
        let mut items = vec![];
        let mut current = self;
        loop {
            match current {
                Value::Nil => return Ok(items),
                Value::Pair(p) => {
                    items.push(p.first.clone());
                    current = &p.second;
                }
                _ => return Err(Error::ImproperList(self.clone())),
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Value::Pair(x), Value::Pair(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    if x.first != y.first {
                        return false;
                    }
                    a = &x.second;
                    b = &y.second;
                }
                (Value::Succ(x), Value::Succ(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    a = &**x;
                    b = &**y;
                }
                (Value::Var(x), Value::Var(y)) => return x == y,
                (Value::Nil, Value::Nil) | (Value::Zero, Value::Zero) => return true,
                (Value::Atom(x), Value::Atom(y)) => return x == y,
                (Value::Reified(x), Value::Reified(y)) => return x == y,
                _ => return false,
            }
        }
    }
}

impl PartialEq<Var> for Value {
    fn eq(&self, v: &Var) -> bool {
        self.as_var().map(|sv| sv == *v).unwrap_or(false)
    }
}

impl<T: 'static + Atomic + PartialEq> PartialEq<T> for Value {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>()
            .map(|x| x == other)
            .unwrap_or(false)
    }
}

impl<T: 'static + Atomic + PartialEq + Send + Sync> From<T> for Value {
    fn from(v: T) -> Self {
        Value::Atom(Atom::new(v))
    }
}

impl From<Var> for Value {
    fn from(v: Var) -> Self {
        Value::Var(v)
    }
}

impl From<&Var> for Value {
    fn from(v: &Var) -> Self {
        Value::Var(*v)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<ReifiedVar> for Value {
    fn from(rv: ReifiedVar) -> Self {
        Value::Reified(rv)
    }
}

impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::Pair(Arc::new(pair))
    }
}

impl From<(Value, Value)> for Value {
    fn from(pair: (Value, Value)) -> Self {
        Value::from(Pair::from(pair))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        let mut list = Value::Nil;
        for v in items.into_iter().rev() {
            list = Value::cons(v, list);
        }
        list
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Value::Var(v) => write!(f, "{:?}", v),
            Value::Nil => write!(f, "()"),
            Value::Pair(p) => write!(f, "{:?}", p),
            Value::Atom(a) => write!(f, "{:?}", a),
            Value::Zero | Value::Succ(_) => {
                let mut n = 0;
                let mut base = self;
                while let Value::Succ(pred) = base {
                    n += 1;
                    base = pred;
                }
                match base {
                    Value::Zero => write!(f, "{}", n),
                    _ => write!(f, "{:?}+{}", base, n),
                }
            }
            Value::Wildcard => write!(f, "_"),
            Value::Reified(rv) => write!(f, "{:?}", rv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_equal_by_identity() {
        assert_eq!(Value::var(Var::named(1, "x")), Value::var(Var::new(1)));
        assert_ne!(Value::var(Var::new(1)), Value::var(Var::new(2)));
    }

    #[test]
    fn pairs_are_equal_if_heads_and_tails_are_equal() {
        assert_eq!(Value::cons(1, 2), Value::cons(1, 2));
        assert_ne!(Value::cons(1, 2), Value::cons(1, 3));
        assert_ne!(Value::cons(1, 2), Value::cons(0, 2));
    }

    #[test]
    fn atoms_of_different_host_types_differ() {
        assert_ne!(Value::new(1i32), Value::new(1i64));
        assert_ne!(Value::new("a"), Value::new(String::from("a")));
        assert_eq!(Value::new("a"), "a");
    }

    #[test]
    fn long_lists_compare_without_recursing() {
        let a = Value::list(0..200_000i32);
        let b = Value::list(0..200_000i32);
        assert_eq!(a, b);
        assert_ne!(a, Value::list(0..199_999i32));
        assert!(!a.has_wildcard());
        assert_ne!(Value::nat(1_000), Value::nat(1_001));
    }

    #[test]
    fn wildcards_are_never_equal() {
        assert_ne!(Value::wildcard(), Value::wildcard());
        assert_ne!(Value::list(vec![Value::wildcard()]), Value::list(vec![Value::wildcard()]));
        assert!(Value::cons(1, Value::succ(Value::wildcard())).has_wildcard());
        assert!(!Value::list(vec![1, 2]).has_wildcard());
    }

    #[test]
    fn values_are_classified() {
        assert_eq!(Value::var(Var::new(0)).kind(), Kind::Variable);
        assert_eq!(Value::cons(1, ()).kind(), Kind::Pair);
        assert_eq!(Value::Nil.kind(), Kind::Empty);
        assert_eq!(Value::new(true).kind(), Kind::Atomic);
        assert_eq!(Value::nat(2).kind(), Kind::Natural);
        assert_eq!(Value::wildcard().kind(), Kind::Wildcard);
        assert_eq!(Value::rv(0).kind(), Kind::Placeholder);
    }

    #[test]
    fn vectors_convert_to_proper_lists() {
        let list = Value::from(vec![Value::new(1), Value::new(2)]);
        assert_eq!(list, Value::cons(1, Value::cons(2, ())));
        assert_eq!(list.to_vec(), Ok(vec![Value::new(1), Value::new(2)]));
    }

    #[test]
    fn improper_lists_cannot_be_collected() {
        let list = Value::cons(1, 2);
        assert_eq!(list.to_vec(), Err(Error::ImproperList(list.clone())));
    }

    #[test]
    fn naturals_roundtrip_through_successors() {
        assert_eq!(Value::nat(0), Value::Zero);
        assert_eq!(Value::nat(2), Value::succ(Value::succ(Value::Zero)));
        assert_eq!(Value::nat(5).as_nat(), Some(5));
        assert_eq!(Value::new(5).to_nat(), Err(Error::NotANatural(Value::new(5))));
    }

    #[test]
    fn naturals_print_as_numbers() {
        assert_eq!(format!("{:?}", Value::nat(3)), "3");
        let open = Value::succ(Value::succ(Var::named(0, "n")));
        assert_eq!(format!("{:?}", open), "n+2");
    }

    #[test]
    fn lists_print_in_parentheses() {
        let list = Value::list(vec![1, 2, 3]);
        assert_eq!(format!("{:?}", list), "(1 2 3)");
        assert_eq!(format!("{:?}", Value::Nil), "()");
        assert_eq!(format!("{:?}", Value::cons(Value::rv(0), Value::wildcard())), "(_0 . _)");
    }
}
