//! Name validation for lists and todos.
//!
//! # Design
//! Callers trim input before validating — trimming is request preprocessing,
//! not a rule. Length is measured in Unicode scalar values so a 100-glyph
//! non-ASCII name is accepted. The length check short-circuits before the
//! uniqueness scan, so at most one error surfaces per call.
//!
//! List names must be unique within a session (case-sensitive, exact match).
//! Todo names carry no uniqueness rule: duplicate todo names within a list
//! are allowed.

use crate::error::{DomainError, NameKind};
use crate::types::TodoList;

pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;

fn length_ok(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// Validate a (pre-trimmed) list name against the session's existing lists.
///
/// `exclude` names an index to skip in the uniqueness scan; rename passes
/// the list's own position so renaming a list to its current name succeeds.
pub fn validate_list_name(
    name: &str,
    existing: &[TodoList],
    exclude: Option<usize>,
) -> Result<(), DomainError> {
    if !length_ok(name) {
        return Err(DomainError::InvalidLength(NameKind::List));
    }
    let duplicate = existing
        .iter()
        .enumerate()
        .any(|(i, list)| Some(i) != exclude && list.name == name);
    if duplicate {
        return Err(DomainError::DuplicateName);
    }
    Ok(())
}

/// Validate a (pre-trimmed) todo name. Length only.
pub fn validate_todo_name(name: &str) -> Result<(), DomainError> {
    if !length_ok(name) {
        return Err(DomainError::InvalidLength(NameKind::Todo));
    }
    Ok(())
}
