//! REPL Module
//!
//! Reads commands from a line reader thread, keeps paging state and the
//! caught pokemon between them, and renders results.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the explorer
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area_name>` - List pokemon in an area
//! - `catch <pokemon>` - Try to catch a pokemon
//! - `inspect <pokemon>` - Show a caught pokemon
//! - `pokedex` - List caught pokemon
//! - `cache` - Show response cache statistics

mod catch;
mod command;
mod input;
mod session;

pub use catch::{attempt_catch, catch_chance};
pub use command::{Command, CommandInfo, COMMANDS};
pub use input::{clean_input, spawn_line_reader};
pub use session::{Flow, Session};

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";
