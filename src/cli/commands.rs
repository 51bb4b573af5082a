//! CLI commands and argument parsing

use crate::detail::DetailTab;
use crate::types::NavAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pokédex client CLI
#[derive(Parser, Debug)]
#[command(name = "pokedex-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the listing root URL
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print listing pages as cards, starting from the root
    Page {
        /// Navigation applied after loading the root (initial, next, previous)
        #[arg(short, long, default_value = "initial", value_parser = parse_action)]
        action: NavAction,

        /// Number of pages to print
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },

    /// Print the detail panel of one Pokémon
    Show {
        /// Name or national dex number
        pokemon: String,

        /// Tab to show
        #[arg(short, long, default_value = "stats", value_parser = parse_tab)]
        tab: DetailTab,
    },

    /// Interactive session reading commands from stdin
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

fn parse_action(s: &str) -> std::result::Result<NavAction, String> {
    s.parse()
}

fn parse_tab(s: &str) -> std::result::Result<DetailTab, String> {
    s.parse()
}

/// One line of input in a `browse` session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Navigation affordance
    Navigate(NavAction),
    /// Card info affordance, 1-based position on the current page
    Open(usize),
    /// Tab affordance
    Tab(DetailTab),
    /// Close affordance
    Close,
    /// Reprint the current page
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            anyhow::bail!("empty command");
        };
        let arg = words.next();

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("next" | "n", None) => Self::Navigate(NavAction::Next),
            ("prev" | "previous" | "p", None) => Self::Navigate(NavAction::Previous),
            ("initial" | "first" | "home", None) => Self::Navigate(NavAction::Initial),
            ("open" | "o" | "info", Some(n)) => {
                let index: usize = n
                    .parse()
                    .map_err(|_| anyhow::anyhow!("'{n}' is not a card number"))?;
                if index == 0 {
                    anyhow::bail!("card numbers start at 1");
                }
                Self::Open(index)
            }
            ("tab" | "t", Some(tab)) => Self::Tab(tab.parse().map_err(anyhow::Error::msg)?),
            ("stats", None) => Self::Tab(DetailTab::Stats),
            ("abilities", None) => Self::Tab(DetailTab::Abilities),
            ("close" | "c", None) => Self::Close,
            ("list" | "ls" | "l", None) => Self::List,
            ("help" | "h" | "?", None) => Self::Help,
            ("quit" | "exit" | "q", None) => Self::Quit,
            (other, _) => anyhow::bail!("unknown command '{other}', try 'help'"),
        };

        if words.next().is_some() {
            anyhow::bail!("too many arguments");
        }
        Ok(command)
    }
}

/// Help text for a `browse` session
pub const BROWSE_HELP: &str = "\
commands:
  next | prev | initial     navigate the listing
  open <n>                  toggle the detail view for card n
  tab stats|abilities       switch the detail tab
  close                     close the detail view
  list                      reprint the current page
  quit                      leave";
