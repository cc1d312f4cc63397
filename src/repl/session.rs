//! REPL session
//!
//! Holds the state that lives between commands and executes them.

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::client::CatalogClient;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaPage, Pokemon};
use crate::repl::{attempt_catch, clean_input, Command, COMMANDS};

/// Whether the loop should keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State carried across commands.
///
/// Paging links are only changed by `map` and `mapb`. Caught pokemon are
/// kept for the lifetime of the session.
pub struct Session<R = StdRng> {
    client: CatalogClient,
    next_page: Option<String>,
    previous_page: Option<String>,
    listed_any: bool,
    pokedex: BTreeMap<String, Pokemon>,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(client: CatalogClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session that rolls catches with `rng`.
    pub fn with_rng(client: CatalogClient, rng: R) -> Self {
        Self {
            client,
            next_page: None,
            previous_page: None,
            listed_any: false,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Caught pokemon by name.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous_page.as_deref()
    }

    /// Cleans, parses and executes one line of input.
    ///
    /// Blank lines do nothing.
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(&clean_input(line))? {
            Some(command) => self.execute(command, out).await,
            None => Ok(Flow::Continue),
        }
    }

    /// Executes a parsed command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!("Executing {:?}", command);

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Cache => {
                let cache = self.client.cache();
                writeln!(out, "Cache ({:?} interval): {}", cache.interval(), cache.stats())?;
            }
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{:<22}{}", info.usage, info.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.listed_any && self.next_page.is_none() {
            writeln!(out, "You're on the last page")?;
            return Ok(());
        }

        let url = self.next_page.clone();
        let page = self.client.location_areas(url.as_deref()).await?;
        self.show_page(page, out)
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.previous_page.clone() else {
            writeln!(out, "You're on the first page")?;
            return Ok(());
        };

        let page = self.client.location_areas(Some(&url)).await?;
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        self.next_page = page.next;
        self.previous_page = page.previous;
        self.listed_any = true;
        debug!(
            "Paging state: next={:?}, previous={:?}",
            self.next_page, self.previous_page
        );

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let detail = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;
        let base_experience = pokemon.base_experience.unwrap_or(0);

        if attempt_catch(&mut self.rng, base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}
