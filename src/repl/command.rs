//! Command parsing

use crate::error::{PokedexError, Result};

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

/// Name and help text for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the next page of world locations",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the previous page of world locations",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area_name>",
        description: "Explore an area for pokemon",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Attempt to catch a pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Show details of a caught pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "List caught pokemon",
    },
    CommandInfo {
        name: "cache",
        usage: "cache",
        description: "Show response cache statistics",
    },
];

impl Command {
    /// Parses cleaned input words.
    ///
    /// Returns `Ok(None)` for empty input. Extra arguments are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = |expected: &'static str| {
            args.first()
                .cloned()
                .ok_or(PokedexError::MissingArgument(expected))
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg("area_name")?),
            "catch" => Command::Catch(arg("pokemon")?),
            "inspect" => Command::Inspect(arg("pokemon")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::Cache,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}
