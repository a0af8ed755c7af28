//! Error types for the list domain.
//!
//! # Design
//! `Display` output doubles as the user-facing flash message, so the strings
//! here are exact and stable. Length and uniqueness are checked in that
//! order and an operation surfaces at most one error. Out-of-range
//! positional access is an explicit `IndexOutOfRange` value rather than a
//! panic — indices come from untrusted request paths.

use std::fmt;

/// Which kind of name failed validation; the two kinds carry different
/// user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Todo,
}

/// Errors returned by the domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The trimmed name is empty or longer than 100 characters.
    InvalidLength(NameKind),

    /// Another list in the session already has this exact name.
    DuplicateName,

    /// A positional index did not resolve to an existing list or todo.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidLength(NameKind::List) => {
                write!(f, "List name must be between 1 and 100 characters.")
            }
            DomainError::InvalidLength(NameKind::Todo) => {
                write!(f, "Todo item must be between 1 and 100 characters.")
            }
            DomainError::DuplicateName => write!(f, "List name must be unique."),
            DomainError::IndexOutOfRange { index, len } => {
                write!(f, "No item at position {index} (the collection has {len}).")
            }
        }
    }
}

impl std::error::Error for DomainError {}
