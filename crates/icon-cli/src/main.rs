//! Command-line tool for turning logo images into square app icons.
//!
//! `icon-tool crop` isolates the first block of drawn content (the emblem
//! before a wordmark) and squares it; `icon-tool pad` squares the whole
//! image without any content analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use icon_engine::{crop_to_content, io, pad_to_square};

#[derive(Parser, Debug)]
#[command(name = "icon-tool")]
#[command(about = "Crop and pad logo images into square transparent icons")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crop to the first content block, trim margins, and square-pad
    Crop {
        /// Source image (any decodable raster format)
        input: PathBuf,
        /// Destination image; format follows the extension
        output: PathBuf,
    },
    /// Center the whole image on a square transparent canvas
    Pad {
        /// Source image (any decodable raster format)
        input: PathBuf,
        /// Destination image; format follows the extension
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Crop { input, output } => {
            let img = io::load_rgba(&input)?;
            let icon = crop_to_content(&img);
            io::save_rgba(&icon, &output)?;
            println!("Successfully created icon: {}", output.display());
        }
        Command::Pad { input, output } => {
            let img = io::load_rgba(&input)?;
            let squared = pad_to_square(&img);
            io::save_rgba(&squared, &output)?;
            println!("Successfully created square image: {}", output.display());
        }
    }

    Ok(())
}
