//! Tests for the page cursor

use super::*;
use crate::error::Error;
use crate::types::NavAction;

const ROOT: &str = "https://pokeapi.co/api/v2/pokemon";
const PAGE_2: &str = "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20";
const PAGE_3: &str = "https://pokeapi.co/api/v2/pokemon?offset=40&limit=20";

// ============================================================================
// Fresh cursor
// ============================================================================

#[test]
fn test_new_cursor_has_only_initial() {
    let cursor = PageCursor::new(ROOT);
    assert_eq!(cursor.initial(), ROOT);
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert!(cursor.can(NavAction::Initial));
    assert_eq!(cursor.active(), None);
}

#[test]
fn test_resolve_initial() {
    let cursor = PageCursor::new(ROOT);
    assert_eq!(cursor.resolve(NavAction::Initial).unwrap(), ROOT);
    // Resolving alone does not move the cursor
    assert_eq!(cursor.active(), None);
}

#[test]
fn test_activate_records_displayed_action() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.activate(NavAction::Initial);
    assert_eq!(cursor.active(), Some(NavAction::Initial));
    cursor.activate(NavAction::Next);
    assert_eq!(cursor.active(), Some(NavAction::Next));
}

#[test]
fn test_resolve_next_before_first_fetch_fails() {
    let cursor = PageCursor::new(ROOT);
    let err = cursor.resolve(NavAction::Next).unwrap_err();
    assert!(matches!(
        err,
        Error::NoSuchPage {
            action: NavAction::Next
        }
    ));
    assert_eq!(cursor.active(), None);
}

// ============================================================================
// After updates
// ============================================================================

#[test]
fn test_resolve_after_update() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.update(Some(PAGE_3.to_string()), Some(ROOT.to_string()));

    assert!(cursor.has_next());
    assert!(cursor.has_previous());
    assert_eq!(cursor.resolve(NavAction::Next).unwrap(), PAGE_3);
    assert_eq!(cursor.resolve(NavAction::Previous).unwrap(), ROOT);
    assert_eq!(cursor.active(), None);
}

#[test]
fn test_resolve_next_fails_at_end() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.update(Some(PAGE_2.to_string()), None);
    cursor.update(None, Some(PAGE_2.to_string()));

    assert!(!cursor.can(NavAction::Next));
    assert!(matches!(
        cursor.resolve(NavAction::Next),
        Err(Error::NoSuchPage {
            action: NavAction::Next
        })
    ));
    assert_eq!(cursor.resolve(NavAction::Previous).unwrap(), PAGE_2);
}

#[test]
fn test_resolve_previous_fails_on_first_page() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.update(Some(PAGE_2.to_string()), None);

    assert!(!cursor.can(NavAction::Previous));
    assert!(matches!(
        cursor.resolve(NavAction::Previous),
        Err(Error::NoSuchPage {
            action: NavAction::Previous
        })
    ));
}

#[test]
fn test_update_overwrites_unconditionally() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.update(Some(PAGE_3.to_string()), Some(PAGE_2.to_string()));
    cursor.update(None, None);

    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.previous(), None);
}

#[test]
fn test_initial_ignores_history() {
    let mut cursor = PageCursor::new(ROOT);
    cursor.update(Some(PAGE_3.to_string()), Some(PAGE_2.to_string()));
    cursor.resolve(NavAction::Next).unwrap();

    assert_eq!(cursor.resolve(NavAction::Initial).unwrap(), ROOT);
    // Slots stay untouched until the next page arrives
    assert_eq!(cursor.next(), Some(PAGE_3));
    assert_eq!(cursor.previous(), Some(PAGE_2));
}
