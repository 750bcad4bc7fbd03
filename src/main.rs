//! nibblehide - text in the low nibble
//!
//! A CLI tool for hiding text messages in PNG and BMP images.

mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};

use commands::{
    CapacityCommand, CommandExecutor, DecodeCommand, EmbedFileCommand, EncodeCommand,
    InspectCommand,
};
use nibblehide::Settings;

/// nibblehide - hide text in the low nibble of image color channels
///
/// Every channel byte carries 4 bits of the message, so an image holds
/// 1.5 characters per pixel. Use lossless images (PNG, BMP) only.
#[derive(Parser)]
#[command(name = "nibblehide")]
#[command(version)]
#[command(about = "Hide text in the low nibble of image color channels")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: ~/.nibblehide/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a text message in an image
    Encode(EncodeCommand),

    /// Recover a hidden message from an image
    Decode(DecodeCommand),

    /// Hide the contents of a text file in an image
    #[command(name = "embed-file")]
    EmbedFile(EmbedFileCommand),

    /// Show how many characters an image can hold
    Capacity(CapacityCommand),

    /// Show the header and leading symbols of an image
    Inspect(InspectCommand),
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(p) => Settings::load_from(p)
            .with_context(|| format!("Failed to load settings from {}", p.display())),
        None => Settings::load().context("Failed to load settings"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_ref())?;
    init_logger(cli.verbose || settings.verbose);

    let command: &dyn CommandExecutor = match &cli.command {
        Commands::Encode(cmd) => cmd,
        Commands::Decode(cmd) => cmd,
        Commands::EmbedFile(cmd) => cmd,
        Commands::Capacity(cmd) => cmd,
        Commands::Inspect(cmd) => cmd,
    };

    command.execute(&settings)
}
