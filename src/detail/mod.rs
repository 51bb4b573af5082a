//! Detail view module
//!
//! Selection state for the detail dialog: which Pokémon is open and which
//! tab is showing.

mod view;

pub use view::{DetailTab, DetailView};
