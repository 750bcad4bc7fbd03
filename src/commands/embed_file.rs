//! Embed-file command - hide a whole text file in an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use nibblehide::{embed_text_file, Settings};

use super::CommandExecutor;

/// Hide the contents of a UTF-8 text file in an image.
///
/// The symbol stream is written in chunks; the result is identical to
/// `encode --file`.
#[derive(Args, Debug)]
pub struct EmbedFileCommand {
    /// Carrier image (PNG or BMP)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Text file to hide
    #[arg(short, long)]
    pub text: PathBuf,

    /// Output image (.png or .bmp)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of chunks to write (default from settings, normally 100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunks: Option<u32>,
}

impl CommandExecutor for EmbedFileCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let chunks = self.chunks.map_or(settings.chunks, |c| c as usize);

        let report = embed_text_file(&self.input, &self.text, &self.output, chunks)
            .with_context(|| {
                format!(
                    "Failed to embed {} into {}",
                    self.text.display(),
                    self.input.display()
                )
            })?;

        eprintln!(
            "Hid {} characters from {} in {}",
            report.characters,
            self.text.display(),
            self.output.display()
        );
        Ok(())
    }
}
