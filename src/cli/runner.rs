//! CLI runner - executes commands

use crate::cli::commands::{BrowseCommand, Cli, Commands, OutputFormat, BROWSE_HELP};
use crate::config::PokedexConfig;
use crate::detail::{DetailTab, DetailView};
use crate::error::{Error, Result};
use crate::present::{DetailPanel, PageView};
use crate::session::{FetchState, Pokedex};
use crate::types::NavAction;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let pokedex = Pokedex::from_config(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Page { action, pages } => self.page(&pokedex, *action, *pages).await,
            Commands::Show { pokemon, tab } => self.show(&pokedex, pokemon, *tab).await,
            Commands::Browse => self.browse(&pokedex).await,
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<PokedexConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PokedexConfig::from_file(path)?,
            None => PokedexConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url);
        }

        debug!("Using configuration: {:?}", config);
        Ok(config)
    }

    /// Print `pages` listing pages.
    ///
    /// The root is loaded first, then `action` is applied to it. Further
    /// pages follow `previous` when walking backwards and `next` otherwise.
    async fn page(&self, pokedex: &Pokedex, action: NavAction, pages: usize) -> Result<()> {
        let mut state = pokedex.new_state();
        pokedex.navigate(&mut state, NavAction::Initial).await?;

        if action != NavAction::Initial {
            if !state.cursor().can(action) {
                return Err(Error::NoSuchPage { action });
            }
            pokedex.navigate(&mut state, action).await?;
        }

        let step = match action {
            NavAction::Previous => NavAction::Previous,
            NavAction::Initial | NavAction::Next => NavAction::Next,
        };

        for printed in 1..=pages {
            self.emit(&PageView::from_state(&state))?;

            if printed == pages || !state.cursor().can(step) {
                break;
            }
            pokedex.navigate(&mut state, step).await?;
        }

        Ok(())
    }

    /// Print the detail panel of one Pokémon
    async fn show(&self, pokedex: &Pokedex, pokemon: &str, tab: DetailTab) -> Result<()> {
        let detail = pokedex.lookup(pokemon).await?;
        self.emit(&DetailPanel::for_pokemon(&detail, tab))
    }

    /// Line-oriented interactive session
    async fn browse(&self, pokedex: &Pokedex) -> Result<()> {
        let mut state = pokedex.new_state();
        let mut view = DetailView::new();

        match pokedex.navigate(&mut state, NavAction::Initial).await {
            Ok(_) => self.emit(&PageView::from_state(&state))?,
            Err(e) => eprintln!("Error: {e}"),
        }
        println!("{BROWSE_HELP}");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match BrowseCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("Error: {}", Error::from(e));
                    continue;
                }
            };

            if command == BrowseCommand::Quit {
                break;
            }

            if let Err(e) = self.apply(pokedex, &mut state, &mut view, command).await {
                // Failures never end the session; the last good page stays up
                eprintln!("Error: {e}");
            }
        }

        Ok(())
    }

    /// Apply one browse command and print what changed
    async fn apply(
        &self,
        pokedex: &Pokedex,
        state: &mut FetchState,
        view: &mut DetailView,
        command: BrowseCommand,
    ) -> Result<()> {
        match command {
            BrowseCommand::Navigate(action) => {
                if !state.cursor().can(action) {
                    return Err(Error::Other(format!("{action} is disabled")));
                }
                pokedex.navigate(state, action).await?;
                self.emit(&PageView::from_state(state))
            }
            BrowseCommand::Open(index) => {
                let pokemon = state.pokemon().get(index - 1).ok_or_else(|| {
                    Error::Other(format!(
                        "no card {index} on this page ({} shown)",
                        state.pokemon().len()
                    ))
                })?;
                view.toggle(pokemon);
                self.emit_view(view)
            }
            BrowseCommand::Tab(tab) => {
                view.select_tab(tab);
                self.emit_view(view)
            }
            BrowseCommand::Close => {
                view.close();
                self.emit_view(view)
            }
            BrowseCommand::List => self.emit(&PageView::from_state(state)),
            BrowseCommand::Help => {
                println!("{BROWSE_HELP}");
                Ok(())
            }
            BrowseCommand::Quit => Ok(()),
        }
    }

    fn emit_view(&self, view: &DetailView) -> Result<()> {
        match DetailPanel::from_view(view) {
            Some(panel) => self.emit(&panel),
            None => {
                println!("(detail view closed)");
                Ok(())
            }
        }
    }

    /// Print a view model in the selected format
    fn emit<T: Serialize + std::fmt::Display>(&self, value: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
            OutputFormat::Pretty => print!("{value}"),
        }
        Ok(())
    }
}
