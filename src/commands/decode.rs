//! Decode command - recover a hidden message from an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nibblehide::{decode_file, Settings};

use super::CommandExecutor;

/// Recover the message hidden in an image.
///
/// Prints the message to stdout, or writes it to --output.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Image holding a hidden message
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the message to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let message = decode_file(&self.input)
            .with_context(|| format!("Failed to decode message from {}", self.input.display()))?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &message)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("Decoded {} characters to {}", message.chars().count(), path.display());
            }
            None => println!("{}", message),
        }
        Ok(())
    }
}
