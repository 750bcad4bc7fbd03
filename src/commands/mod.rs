//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod decode;
mod embed_file;
mod encode;
mod inspect;

pub use capacity::CapacityCommand;
pub use decode::DecodeCommand;
pub use embed_file::EmbedFileCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use anyhow::Result;

use nibblehide::Settings;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and loaded settings.
    fn execute(&self, settings: &Settings) -> Result<()>;
}
