//! End-to-end domain walkthrough exercising the public API the way a
//! request handler would: session lookup, list CRUD, todo lifecycle, and
//! display ordering, all through the crate root re-exports.

use lists_core::{
    create_list, delete_list, get_list, get_list_mut, rename_list, sort_for_display, DomainError,
    SessionStore, Todo, TodoList,
};
use uuid::Uuid;

#[test]
fn groceries_lifecycle() {
    let mut store = SessionStore::new();
    let session = Uuid::new_v4();

    // Step 1: first touch of the session yields an empty collection.
    assert!(store.lists(session).is_empty());

    // Step 2: create a list.
    create_list(store.lists(session), "Groceries").unwrap();
    let list = get_list(store.lists(session), 0).unwrap();
    assert_eq!(list.name, "Groceries");
    assert!(!list.all_complete());

    // Step 3: add a todo; it starts pending.
    get_list_mut(store.lists(session), 0)
        .unwrap()
        .add_todo("Milk")
        .unwrap();
    let list = get_list(store.lists(session), 0).unwrap();
    assert_eq!(list.remaining_count(), 1);

    // Step 4: mark it done; the list becomes complete.
    get_list_mut(store.lists(session), 0)
        .unwrap()
        .toggle_todo(0, true)
        .unwrap();
    assert!(get_list(store.lists(session), 0).unwrap().all_complete());

    // Step 5: delete the todo; the now-empty list is no longer complete.
    let removed = get_list_mut(store.lists(session), 0)
        .unwrap()
        .delete_todo(0)
        .unwrap();
    assert_eq!(removed.name, "Milk");
    let list = get_list(store.lists(session), 0).unwrap();
    assert_eq!(list.todo_count(), 0);
    assert!(!list.all_complete());

    // Step 6: delete the list; the session is empty again.
    delete_list(store.lists(session), 0).unwrap();
    assert!(store.lists(session).is_empty());
}

#[test]
fn rename_and_uniqueness_across_a_session() {
    let mut store = SessionStore::new();
    let session = Uuid::new_v4();
    let lists = store.lists(session);

    create_list(lists, "Groceries").unwrap();
    create_list(lists, "Chores").unwrap();

    // Renaming to a sibling's name fails; renaming to itself succeeds.
    assert_eq!(
        rename_list(lists, 1, "Groceries").unwrap_err(),
        DomainError::DuplicateName
    );
    rename_list(lists, 1, "Chores").unwrap();
    rename_list(lists, 1, "Errands").unwrap();
    assert_eq!(lists[1].name, "Errands");

    // The freed name is available again.
    create_list(lists, "Chores").unwrap();
    assert_eq!(lists.len(), 3);
}

#[test]
fn display_order_tracks_completion_state() {
    let mut store = SessionStore::new();
    let session = Uuid::new_v4();
    let lists = store.lists(session);

    for name in ["A", "B", "C", "D"] {
        create_list(lists, name).unwrap();
    }
    for index in [0, 2] {
        let list = get_list_mut(lists, index).unwrap();
        list.add_todo("only item").unwrap();
        list.complete_all();
    }

    let ordered = sort_for_display(lists, TodoList::all_complete);
    let names: Vec<&str> = ordered.iter().map(|(_, l)| l.name.as_str()).collect();
    assert_eq!(names, ["B", "D", "A", "C"]);

    // Stored order is untouched by display ordering.
    let stored: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(stored, ["A", "B", "C", "D"]);
}

#[test]
fn todos_partition_within_a_list() {
    let mut list = TodoList::new("Groceries");
    for name in ["Milk", "Eggs", "Bread", "Jam"] {
        list.add_todo(name).unwrap();
    }
    list.toggle_todo(0, true).unwrap();
    list.toggle_todo(2, true).unwrap();

    let ordered = sort_for_display(&list.todos, |t: &Todo| t.done);
    let names: Vec<&str> = ordered.iter().map(|(_, t)| t.name.as_str()).collect();
    assert_eq!(names, ["Eggs", "Jam", "Milk", "Bread"]);
    // Original indices ride along for positional addressing.
    let indices: Vec<usize> = ordered.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [1, 3, 0, 2]);
}
