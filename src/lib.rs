//! A relational programming core in the miniKANREN family.
//!
//! Goals are built from unification constraints (`eq`) and combined with
//! conjunction, disjunction and fresh-variable introduction. Running a goal
//! searches the space of variable bindings and yields a lazy, fairly
//! interleaved stream of solutions.
//!
//! ```
//! use micro_kanren::prelude::*;
//! use micro_kanren::goals::list::appendo;
//! use micro_kanren::{list, run};
//!
//! let splits = run!(*, (x, y), appendo(x, y, list![1, 2])).into_vec();
//! assert_eq!(splits.len(), 3);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod goals;
pub mod prelude;
pub mod query;

#[cfg(test)]
mod testing;
