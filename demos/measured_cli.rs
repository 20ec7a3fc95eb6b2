//! CLI for inspecting measured Ambilight color snapshots.
//!
//! Reads a measured-colors JSON document (side → layer → color) from a file
//! or stdin and prints the aggregated colors.
//!
//! Run with: cargo run --example measured_cli -- --help

use std::io::Read;
use std::path::PathBuf;

use ambilight_rs::{
    Color, Error, HueSaturation, MeasuredColorMap, average_all, average_by_side,
    average_for_side,
};
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "measured-cli")]
#[command(about = "Aggregate measured Ambilight colors", long_about = None)]
struct Cli {
    /// JSON file with the measured colors (stdin if omitted)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average color over all sides
    Average,

    /// Average color of every side
    Sides,

    /// Average color of one side
    Side {
        /// Side name (e.g., left, right, top, bottom)
        name: String,
    },

    /// List sides and how many of their layers are usable
    Layers,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let raw = match &cli.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    let measured: Value = serde_json::from_str(&raw).map_err(Error::JsonLoad)?;

    match cli.command {
        Commands::Average => print_color("average", average_all(&measured)),

        Commands::Sides => {
            let by_side = average_by_side(&measured);
            if by_side.is_empty() {
                println!("No sides in snapshot.");
            }
            for (side, color) in by_side {
                print_color(&side, color);
            }
        }

        Commands::Side { name } => print_color(&name, average_for_side(&measured, &name)),

        Commands::Layers => {
            let parsed = MeasuredColorMap::from_value(&measured);
            for side in parsed.sides() {
                if let Some(samples) = parsed.side(side) {
                    let usable = samples
                        .layers()
                        .filter(|(_, sample)| sample.sample().is_some())
                        .count();
                    println!("  {:10} {}/{} layers usable", side, usable, samples.len());
                }
            }
        }
    }

    Ok(())
}

fn print_color(label: &str, color: Option<Color>) {
    match color {
        Some(color) => {
            let hs = HueSaturation::from_color(&color).rounded();
            println!(
                "  {:10} {}  RGB({}, {}, {})  HS({}, {})",
                label,
                color,
                color.red(),
                color.green(),
                color.blue(),
                hs.hue(),
                hs.saturation()
            );
        }
        None => println!("  {:10} no usable colors", label),
    }
}
