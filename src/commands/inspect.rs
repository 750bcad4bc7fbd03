//! Inspect command - dump the header and leading symbols of an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nibblehide::stego::{read_header, read_symbols};
use nibblehide::{read_image, Settings};

use super::CommandExecutor;

/// Show what the header of an image declares and the symbols after it.
///
/// Useful to check whether an image carries a message at all.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Image to inspect
    #[arg(short, long)]
    pub input: PathBuf,

    /// Payload symbols to show (default from settings)
    #[arg(short, long)]
    pub symbols: Option<usize>,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let buffer = read_image(&self.input)
            .with_context(|| format!("Failed to load {}", self.input.display()))?;
        let shape = buffer.shape();

        let (capacity, declared) = read_header(&buffer);
        let count = self.symbols.unwrap_or(settings.inspect_symbols);
        let end = (capacity.len_all + count).min(shape.byte_count());
        let payload = read_symbols(&buffer, capacity.len_all..end);

        println!(
            "Shape:    {} rows x {} columns x {} channels",
            shape.rows(),
            shape.columns(),
            shape.channels()
        );
        println!("Header:   {} symbols, declares {} characters", capacity.len_all, declared);
        if declared > capacity.max_chars as u64 {
            println!("          (exceeds capacity of {}: no message)", capacity.max_chars);
        }

        let hex: Vec<String> = payload.iter().map(|s| s.to_string()).collect();
        println!("Symbols:  {}", hex.join(" "));
        Ok(())
    }
}
