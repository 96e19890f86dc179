//! Core data structures and logic algorithms

pub mod error;
pub mod goal;
pub mod logic_variable;
pub mod pair;
pub mod reify;
pub mod state;
pub mod stream;
pub mod substitution;
pub mod value;

#[cfg(test)]
mod proptest_tests;
