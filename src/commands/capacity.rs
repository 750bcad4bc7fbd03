//! Capacity command - show how much text an image holds.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use nibblehide::{compute_capacity, read_image, Settings};

use super::CommandExecutor;

/// Show the header width and character capacity for an image.
///
/// Give either an image or its dimensions.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Image to measure
    #[arg(short, long, conflicts_with_all = ["rows", "columns"])]
    pub input: Option<PathBuf>,

    /// Image height in pixels
    #[arg(long, requires = "columns")]
    pub rows: Option<usize>,

    /// Image width in pixels
    #[arg(long, requires = "rows")]
    pub columns: Option<usize>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self, _settings: &Settings) -> Result<()> {
        let (rows, columns) = match (&self.input, self.rows, self.columns) {
            (Some(path), _, _) => {
                let shape = read_image(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
                    .shape();
                (shape.rows(), shape.columns())
            }
            (None, Some(rows), Some(columns)) => (rows, columns),
            _ => bail!("Provide --input or both --rows and --columns"),
        };

        let capacity = compute_capacity(rows, columns);
        println!("Image:         {} x {} pixels", columns, rows);
        println!("Raw capacity:  {} characters", capacity.raw_chars());
        println!(
            "Header:        {} symbols ({} bits)",
            capacity.len_all,
            capacity.header_bits()
        );
        println!("Max message:   {} characters", capacity.max_chars);
        Ok(())
    }
}
