//! Run a few relations forwards and backwards.
//!
//! Set `RUST_LOG=micro_kanren=trace` to watch the search.

use micro_kanren::goals::list::{appendo, membero, reverseo};
use micro_kanren::goals::numbers::addo;
use micro_kanren::prelude::*;
use micro_kanren::{conde, defrel, list, run};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

defrel! {
    /// Create a goal that succeeds if x occurs in s1 or s2 and r contains the correct result
    whiche(x, s1, s2, r) {
        conde! {
            membero(&x, &s1), membero(&x, &s2), eq(&r, "both");
            membero(&x, &s1), eq(&r, "one");
            membero(&x, &s2), eq(&r, "two");
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!(
        "Which list contains 3? {:?}",
        run!(*, q, whiche(3, list![1, 2, 3], list![3, 4, 5], q))
    );

    println!("Ways to split (1 2 3):");
    let splits = query(["prefix", "suffix"], |[x, y]| appendo(x, y, list![1, 2, 3])).solve();
    for solution in &splits.solutions {
        println!("  {}", solution);
    }

    println!(
        "Reverse of (a b c): {:?}",
        run!(*, q, reverseo(list!["a", "b", "c"], q))
    );

    println!("Pairs that add up to 4:");
    let sums = query(["x", "y"], |[x, y]| addo(x, y, Value::nat(4))).solve();
    for solution in &sums.solutions {
        println!("  {}", solution);
    }

    println!("Lists that contain 42:");
    for list in run!(q, membero(42, q)).take(3) {
        println!("  {:?}", list);
    }
}
