//! Encode command - hide a text message in an image.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nibblehide::{encode_file, Settings};

use super::CommandExecutor;

/// Hide a text message in a PNG or BMP image.
///
/// The message is written into the low nibble of the image's channel bytes.
/// The output must be PNG or BMP; lossy formats destroy the message.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier image (PNG or BMP)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output image (.png or .bmp), may equal --input to encode in place
    #[arg(short, long)]
    pub output: PathBuf,

    /// Message to hide (reads stdin when neither --message nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// UTF-8 text file holding the message
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let message = self.resolve_message()?;

        let report = encode_file(&self.input, &self.output, &message)
            .with_context(|| format!("Failed to encode message into {}", self.input.display()))?;

        eprintln!(
            "Hid {} characters ({} available) in {}",
            report.characters,
            report.capacity.max_chars,
            self.output.display()
        );
        Ok(())
    }
}

impl EncodeCommand {
    /// Resolve the message from --message, --file, or stdin.
    fn resolve_message(&self) -> Result<String> {
        if let Some(m) = &self.message {
            return Ok(m.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message from {}", path.display()));
        }

        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read message from stdin")?;
        Ok(input.trim_end_matches('\n').to_string())
    }
}
