//! Errors for contract violations.
//!
//! Failing to unify is not an error: it simply produces no solutions.
//! The variants here report misuse of the API, such as asking for the
//! binding of a variable that has none.

use crate::core::logic_variable::Var;
use crate::core::value::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("variable {0:?} is not bound")]
    UnboundVariable(Var),

    #[error("arity mismatch: expected {expected} variables, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("not a proper list: {0:?}")]
    ImproperList(Value),

    #[error("not a natural number: {0:?}")]
    NotANatural(Value),
}

pub type Result<T> = std::result::Result<T, Error>;
