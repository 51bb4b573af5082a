//! Pagination module
//!
//! # Overview
//!
//! The listing API hands out absolute `next`/`previous` URLs with every page.
//! [`PageCursor`] keeps those references together with the configured root and
//! maps navigation actions onto them. Missing references mean the end of the
//! listing has been reached in that direction.

mod cursor;

pub use cursor::PageCursor;

#[cfg(test)]
mod tests;
