//! CLI module
//!
//! Command-line front end standing in for the rendering layer.
//!
//! # Commands
//!
//! - `page` - Print listing pages as cards
//! - `show` - Print one Pokémon's detail panel
//! - `browse` - Interactive navigation and detail view session

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands, OutputFormat};
pub use runner::Runner;
