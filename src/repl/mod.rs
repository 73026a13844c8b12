//! Read-eval-print loop
//!
//! Reads commands line by line, runs them against the PokeAPI client and
//! writes their output. Command errors are printed and the loop continues.

mod catch;
mod commands;
mod pokedex;

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;

pub use catch::{attempt_catch, catch_score, MAX_CATCH_SCORE, MAX_ROLL, MIN_CATCH_SCORE};
pub use commands::Command;
pub use pokedex::{CaughtPokemon, Pokedex};

pub const PROMPT: &str = "Pokedex > ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Pagination cursors from the last location-area page shown.
#[derive(Debug, Clone, Default)]
struct PageCursor {
    next: Option<String>,
    previous: Option<String>,
}

/// Session state: API client, map pagination, caught Pokemon.
pub struct Repl {
    client: PokeApiClient,
    /// `None` until the first `map`
    pages: Option<PageCursor>,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Repl {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Uses `rng` for catch rolls.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            pages: None,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    // == Run ==
    /// Runs until `exit` or end of input.
    ///
    /// Only I/O failures on `input` or `out` end the loop with an error.
    pub async fn run<R>(&mut self, input: R, out: &mut dyn Write) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                writeln!(out, "Exiting Pokedex REPL.")?;
                break;
            };

            if self.eval(&line, out).await? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    // == Eval ==
    /// Runs one input line. Errors from the command are printed, not returned.
    pub(crate) async fn eval(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Flow::Continue);
        };

        match self.execute(command, args, out).await {
            Ok(flow) => Ok(flow),
            Err(err) => {
                debug!(command = command.name(), error = %err, "Command failed");
                writeln!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }
}

/// Trims, lowercases and splits a line into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
