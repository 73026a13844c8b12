//! REPL commands
//!
//! The command table and the handler for each command.

use std::io::Write;

use tracing::debug;

use super::catch::attempt_catch;
use super::{Flow, Repl};
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

// == Command Table ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    Mapb,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` prints them.
    pub const ALL: [Command; 8] = [
        Command::Catch,
        Command::Exit,
        Command::Explore,
        Command::Help,
        Command::Inspect,
        Command::Map,
        Command::Mapb,
        Command::Pokedex,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Catch => "catch",
            Command::Exit => "exit",
            Command::Explore => "explore",
            Command::Help => "help",
            Command::Inspect => "inspect",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Pokedex => "pokedex",
        }
    }

    /// Name plus argument placeholders, as shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Catch => "catch <pokemon_name>",
            Command::Explore => "explore <location_area_name>",
            Command::Inspect => "inspect <pokemon_name>",
            other => other.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Catch => "Attempt to catch a Pokémon and add it to your Pokedex",
            Command::Exit => "Exit the Pokedex",
            Command::Explore => "Lists Pokémon in a given location area",
            Command::Help => "Displays a help message",
            Command::Inspect => "Show details of a Pokémon you have caught",
            Command::Map => "Display the next 20 location areas",
            Command::Mapb => "Display the previous 20 location areas",
            Command::Pokedex => "List the Pokémon you have caught",
        }
    }
}

fn no_args(command: Command, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(PokedexError::Usage(format!(
            "{} command does not take any arguments",
            command.name()
        )))
    }
}

fn one_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(PokedexError::Usage(format!(
            "you must provide exactly one {what}"
        ))),
    }
}

impl Repl {
    pub(super) async fn execute(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<Flow> {
        debug!(command = command.name(), ?args, "Executing command");

        match command {
            Command::Help => {
                no_args(command, args)?;
                help(out)?;
            }
            Command::Exit => {
                no_args(command, args)?;
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                no_args(command, args)?;
                self.map_next(out).await?;
            }
            Command::Mapb => {
                no_args(command, args)?;
                self.map_previous(out).await?;
            }
            Command::Explore => {
                let area = one_arg(args, "location area name to explore")?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = one_arg(args, "Pokémon name to catch")?;
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let name = one_arg(args, "Pokémon name to inspect")?;
                self.inspect(name, out)?;
            }
            Command::Pokedex => {
                no_args(command, args)?;
                self.list_pokedex(out)?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn map_next(&mut self, out: &mut dyn Write) -> Result<()> {
        let next = match &self.pages {
            None => None,
            Some(cursor) => match &cursor.next {
                Some(url) => Some(url.clone()),
                None => {
                    writeln!(out, "You are at the last page of locations.")?;
                    return Ok(());
                }
            },
        };

        let page = self.client.list_location_areas(next.as_deref()).await?;
        self.show_page(page, out)
    }

    async fn map_previous(&mut self, out: &mut dyn Write) -> Result<()> {
        let Some(previous) = self.pages.as_ref().and_then(|c| c.previous.clone()) else {
            writeln!(out, "You are at the first page of locations.")?;
            return Ok(());
        };

        let page = self.client.list_location_areas(Some(&previous)).await?;
        self.show_page(page, out)
    }

    fn show_page(&mut self, page: LocationAreaPage, out: &mut dyn Write) -> Result<()> {
        if page.results.is_empty() {
            writeln!(out, "No location areas found.")?;
        }
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }

        self.pages = Some(super::PageCursor {
            next: page.next,
            previous: page.previous,
        });
        Ok(())
    }

    async fn explore(&mut self, area: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Exploring {area}...")?;

        let details = self
            .client
            .location_area(area)
            .await
            .map_err(|source| PokedexError::Details {
                name: area.to_string(),
                source: Box::new(source),
            })?;
        if details.pokemon_encounters.is_empty() {
            writeln!(out, "No Pokémon found in {area}.")?;
            return Ok(());
        }

        writeln!(out, "Found Pokemon:")?;
        for encounter in &details.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str, out: &mut dyn Write) -> Result<()> {
        if self.pokedex.contains(name) {
            writeln!(out, "{name} is already in your Pokedex!")?;
            return Ok(());
        }

        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let pokemon = self.client.pokemon(name).await?;

        // Forms without a base experience are treated as 0, the easiest roll
        let base_experience = pokemon.base_experience.unwrap_or(0);
        if attempt_catch(&mut self.rng, base_experience) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "{} added to Pokedex.", pokemon.name)?;
            self.pokedex.add(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };
        let pokemon = &caught.pokemon;

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
        writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn list_pokedex(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        if self.pokedex.is_empty() {
            writeln!(out, " (is empty)")?;
            return Ok(());
        }
        for name in self.pokedex.names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }
}

fn help(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.usage(), command.description())?;
    }
    writeln!(out)?;
    Ok(())
}
