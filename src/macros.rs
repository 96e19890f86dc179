//! Macros for embedding miniKANREN as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*))}
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $($g:expr),+ $(,)?) => { $crate::prelude::conj2($g0, $crate::conj!($($g),+))}
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// The body only runs when the resulting stream is forced, which makes
/// recursive relations safe to use in infinite search spaces.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Value>),*) -> $crate::prelude::Goal {
            $(
                let $args: $crate::prelude::Value = $args.into();
            )*
            $crate::prelude::Goal::new(move |s: $crate::prelude::State| {
                $(
                    let ($args, s) = s.instantiate_wildcards(&$args);
                )*
                $crate::prelude::Stream::suspension(move || {
                    $crate::goals::trace_relation(stringify!($name), &s);
                    $crate::conj!($($g),*).apply(s)
                })
            })
        }
    };
}

/// Run one or more goals.
///
/// The syntax `run!(n, var(s), goal1, goal2, ...)` produces at most n
/// solutions in Scheme you wold write `(run n var(s) goal1 goal2 ...)`.
/// The syntax `run!(*, var(s), goal1, goal2, ...)` produces all
/// solutions in Scheme you wold write `(run* var(s) goal1 goal2 ...)`.
/// The latter does not terminate if there are infinitely many solutions.
///
/// We support an additional syntax `run!(var(s), goal1, goal2, ...)`
/// that returns a (possibly infinite) iterator over all solutions.
#[macro_export]
macro_rules! run {
    (@query ($($x:ident),*), $($g:expr),*) => {
        $crate::query::query([$(stringify!($x)),*], move |[$($x),*]| $crate::conj!($($g),*))
    };

    (@query $q:ident, $($g:expr),*) => {
        $crate::query::query([stringify!($q)], move |[$q]| $crate::conj!($($g),*)).single()
    };

    (*, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@query ($($x),*), $($g),*).reified().take_all()
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@query $q, $($g),*).reified().take_all()
    };

    ($n:expr, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@query ($($x),*), $($g),*).limit($n).reified()
    };

    ($n:tt, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@query $q, $($g),*).limit($n).reified()
    };

    (($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@query ($($x),*), $($g),*).reified().into_iter()
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@query $q, $($g),*).reified().into_iter()
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// The body is rebuilt every time the goal is applied, so values it
/// captures from the surrounding scope must be borrowed or cloned.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::prelude::fresh_named(
            [$(stringify!($x)),*],
            move |[$($x),*]| $crate::conj!($($g),*),
        )
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),+);+ $(;)? ) => {
        $crate::disj!($($crate::conj!( $($g),+ ));+)
    }
}

/// Build a list value.
///
/// `list![a, b, c]` is a proper list; `list![a, b ; rest]` ends in `rest`.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Value::Nil };

    ($single:expr) => {
        $crate::prelude::Value::cons($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Value::cons($car, $cdr)
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Value::cons($first, $crate::list![$($rest)*])
    };
}
