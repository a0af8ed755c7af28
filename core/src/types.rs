//! Domain entities for session-scoped todo lists.
//!
//! # Design
//! `Todo` and `TodoList` are plain data with derived predicates only; every
//! mutation that enforces a rule lives in `ops`. Identity is positional —
//! a todo is addressed by its index within its list, a list by its index
//! within the session's collection. Deleting an entry shifts every
//! subsequent index, so callers must not hold indices across mutations.

use serde::{Deserialize, Serialize};

/// A single todo item. Position within its parent list is its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }
}

/// A named ordered collection of todos. Position within the session's
/// collection is its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    /// Number of todos not yet done.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.done).count()
    }

    /// True iff the list has at least one todo and none remain. An empty
    /// list is never complete.
    pub fn all_complete(&self) -> bool {
        !self.todos.is_empty() && self.remaining_count() == 0
    }
}
