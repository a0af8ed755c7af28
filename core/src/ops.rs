//! Mutating domain operations over the session's list collection.
//!
//! # Design
//! Collection-level operations are free functions over `&mut Vec<TodoList>`
//! so they work on whatever container the caller holds (a `SessionStore`
//! entry, a plain vec in tests). Todo-level operations are methods on
//! `TodoList`. Every operation trims its name input before validating and
//! bounds-checks positional indices before anything else, returning
//! `IndexOutOfRange` instead of panicking.

use crate::error::DomainError;
use crate::types::{Todo, TodoList};
use crate::validate::{validate_list_name, validate_todo_name};

fn check_index(index: usize, len: usize) -> Result<(), DomainError> {
    if index < len {
        Ok(())
    } else {
        Err(DomainError::IndexOutOfRange { index, len })
    }
}

/// Append a new empty list. The name is trimmed, then checked for length
/// and uniqueness against every existing list.
pub fn create_list(lists: &mut Vec<TodoList>, name: &str) -> Result<(), DomainError> {
    let name = name.trim();
    validate_list_name(name, lists, None)?;
    lists.push(TodoList::new(name));
    Ok(())
}

/// Rename the list at `index`. Uniqueness is checked against every other
/// list, so renaming a list to its own current name is a no-op success.
pub fn rename_list(lists: &mut [TodoList], index: usize, name: &str) -> Result<(), DomainError> {
    check_index(index, lists.len())?;
    let name = name.trim();
    validate_list_name(name, lists, Some(index))?;
    lists[index].name = name.to_string();
    Ok(())
}

/// Remove and return the list at `index`. Indices of all subsequent lists
/// shift down by one.
pub fn delete_list(lists: &mut Vec<TodoList>, index: usize) -> Result<TodoList, DomainError> {
    check_index(index, lists.len())?;
    Ok(lists.remove(index))
}

pub fn get_list(lists: &[TodoList], index: usize) -> Result<&TodoList, DomainError> {
    check_index(index, lists.len())?;
    Ok(&lists[index])
}

pub fn get_list_mut(lists: &mut [TodoList], index: usize) -> Result<&mut TodoList, DomainError> {
    check_index(index, lists.len())?;
    Ok(&mut lists[index])
}

impl TodoList {
    /// Append a todo with `done = false`. The name is trimmed and
    /// length-checked; duplicate names within a list are allowed.
    pub fn add_todo(&mut self, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        validate_todo_name(name)?;
        self.todos.push(Todo::new(name));
        Ok(())
    }

    /// Set the done flag of the todo at `index` from the caller's value.
    pub fn toggle_todo(&mut self, index: usize, done: bool) -> Result<(), DomainError> {
        check_index(index, self.todos.len())?;
        self.todos[index].done = done;
        Ok(())
    }

    /// Remove and return the todo at `index`. Indices of all subsequent
    /// todos shift down by one.
    pub fn delete_todo(&mut self, index: usize) -> Result<Todo, DomainError> {
        check_index(index, self.todos.len())?;
        Ok(self.todos.remove(index))
    }

    /// Mark every todo done, unconditionally. Idempotent.
    pub fn complete_all(&mut self) {
        for todo in &mut self.todos {
            todo.done = true;
        }
    }
}
