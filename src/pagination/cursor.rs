//! Page cursor
//!
//! Holds the initial/next/previous page references and decides which one
//! a navigation action dereferences.

use crate::error::{Error, Result};
use crate::types::{NavAction, PageReference};
use tracing::debug;

/// Tracks the three page references of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Configured root reference
    initial: PageReference,
    /// Reference to the following page, absent at the end of the listing
    next: Option<PageReference>,
    /// Reference to the preceding page, absent on the first page
    previous: Option<PageReference>,
    /// Action that produced the displayed page
    active: Option<NavAction>,
}

impl PageCursor {
    /// Create a cursor rooted at the given reference
    pub fn new(initial: impl Into<PageReference>) -> Self {
        Self {
            initial: initial.into(),
            next: None,
            previous: None,
            active: None,
        }
    }

    /// Resolve a navigation action to the reference it should dereference.
    ///
    /// `Initial` always yields the root, regardless of history. Resolving
    /// does not move the cursor; see [`PageCursor::activate`].
    pub fn resolve(&self, action: NavAction) -> Result<PageReference> {
        let reference = match action {
            NavAction::Initial => Some(&self.initial),
            NavAction::Next => self.next.as_ref(),
            NavAction::Previous => self.previous.as_ref(),
        }
        .cloned()
        .ok_or(Error::NoSuchPage { action })?;

        debug!(%action, %reference, "Resolved page reference");
        Ok(reference)
    }

    /// Record the action whose page is now displayed
    pub fn activate(&mut self, action: NavAction) {
        self.active = Some(action);
    }

    /// Overwrite the next/previous references with the values of a fetched page
    pub fn update(&mut self, next: Option<PageReference>, previous: Option<PageReference>) {
        self.next = next;
        self.previous = previous;
    }

    /// Whether a `Next` action can be resolved
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a `Previous` action can be resolved
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Whether the given action can be resolved
    pub fn can(&self, action: NavAction) -> bool {
        match action {
            NavAction::Initial => true,
            NavAction::Next => self.has_next(),
            NavAction::Previous => self.has_previous(),
        }
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Action that produced the displayed page, if any
    pub fn active(&self) -> Option<NavAction> {
        self.active
    }
}
