//! User-facing success messages, surfaced as flash text by the
//! presentation layer. Error text lives on `DomainError`'s `Display`.

pub const LIST_CREATED: &str = "The list has been created.";
pub const LIST_UPDATED: &str = "The list has been updated.";
pub const LIST_DELETED: &str = "The list has been deleted.";
pub const TODO_CREATED: &str = "The todo item has been created.";
pub const TODO_DELETED: &str = "The todo item has been deleted.";
pub const TODO_UPDATED: &str = "The todo has been updated.";
pub const ALL_COMPLETE: &str = "All items have been marked complete.";
