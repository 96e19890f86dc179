use crate::core::value::Value;
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// Compound term made of a head and a tail.
///
/// Chains of pairs that end in [`Value::Nil`] are proper lists.
#[derive(Clone, PartialEq)]
pub struct Pair {
    pub first: Value,
    pub second: Value,
}

impl Pair {
    pub fn new(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Pair {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if !f.alternate() {
            write!(f, "(")?;
        }

        write!(f, "{:?}", self.first)?;
        let mut rest = &self.second;
        loop {
            match rest {
                Value::Nil => break,
                Value::Pair(next) => {
                    write!(f, " {:?}", next.first)?;
                    rest = &next.second;
                }
                other => {
                    write!(f, " . {:?}", other)?;
                    break;
                }
            }
        }

        if !f.alternate() {
            write!(f, ")")?;
        }

        Ok(())
    }
}

/// Unlink uniquely owned tails one at a time, so dropping a long list
/// does not recurse once per element.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut tail = std::mem::replace(&mut self.second, Value::Nil);
        while let Value::Pair(next) = tail {
            match Arc::try_unwrap(next) {
                Ok(mut pair) => tail = std::mem::replace(&mut pair.second, Value::Nil),
                Err(_) => break,
            }
        }
    }
}

impl From<(Value, Value)> for Pair {
    fn from(pair: (Value, Value)) -> Self {
        Pair {
            first: pair.0,
            second: pair.1,
        }
    }
}
