//! Session-scoped to-do list domain.
//!
//! # Overview
//! Users keep named lists of named todo items, each with a done flag, and
//! all state lives in per-session memory. This crate is the whole rule set:
//! entities, name validation, the mutating operations, display ordering,
//! and the keyed session store. It is synchronous, does no I/O, and exposes
//! only plain data, so any transport layer can sit on top of it.
//!
//! # Design
//! - Lists and todos are addressed by position; deletes shift later indices.
//! - Every fallible operation returns `Result<_, DomainError>`, and the
//!   error's `Display` text is the exact user-facing message.
//! - Display order (incomplete first) is computed per render and never
//!   written back to the stored sequences.

pub mod display;
pub mod error;
pub mod messages;
pub mod ops;
pub mod store;
pub mod types;
pub mod validate;

pub use display::sort_for_display;
pub use error::{DomainError, NameKind};
pub use ops::{create_list, delete_list, get_list, get_list_mut, rename_list};
pub use store::SessionStore;
pub use types::{Todo, TodoList};
pub use validate::{validate_list_name, validate_todo_name, MAX_NAME_LEN, MIN_NAME_LEN};
