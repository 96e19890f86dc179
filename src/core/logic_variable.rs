use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Logic variable.
///
/// The identity is handed out by the search state that introduced
/// the variable, so two variables are the same exactly when their ids
/// are. The name is purely descriptive to help understanding and is
/// ignored by comparisons.
#[derive(Copy, Clone)]
pub struct Var {
    id: usize,
    name: Option<&'static str>,
}

impl Var {
    /// Create an anonymous variable with the given identity.
    ///
    /// Outside the crate variables come from [`State`](crate::core::state::State)
    /// or a query, so their ids never clash with ones a search hands out.
    pub(crate) fn new(id: usize) -> Self {
        Var { id, name: None }
    }

    /// Create a named variable with the given identity.
    pub(crate) fn named(id: usize, name: &'static str) -> Self {
        Var {
            id,
            name: Some(name),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Return the variable's name, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", self.id),
        }
    }
}

/// Reified logic variable.
///
/// Reified variables represent logic variables that remain fresh
/// after goals have run.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReifiedVar(pub usize);

impl std::fmt::Debug for ReifiedVar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "_{}", self.0)
    }
}
