use crate::core::goal::Goal;
use crate::core::value::Value;
use crate::query::run;

/// Assert that a goal fails
pub fn fails(goal: Goal) {
    assert!(run(1, &goal).is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: Goal) {
    assert!(!run(1, &goal).is_empty());
}

pub fn has_unique_solution(mut solutions: impl Iterator<Item = Value>, expected: Value) {
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
