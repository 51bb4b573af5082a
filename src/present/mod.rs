//! Presentation module
//!
//! Derived display fields and the card/panel view models built from them.
//! Nothing here performs I/O.

mod format;
mod views;

pub use format::{
    background_color, display_id, display_name, normalize_stat, stat_percent, types_label,
    DEFAULT_BACKGROUND, STAT_MAX, STAT_MIN, TYPE_COLORS,
};
pub use views::{DetailPanel, PageView, PokemonCard, StatBar, TabContent};
