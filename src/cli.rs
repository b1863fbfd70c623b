use clap::Parser;
use std::path::PathBuf;

/// Render a map of the filming locations of a year that are
/// closest to and farthest from a given point.
#[derive(Debug, Parser)]
#[command(name = "filmap", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Release year of the films
    pub year: u16,

    /// Latitude of the reference point in decimal degrees
    pub latitude: f64,

    /// Longitude of the reference point in decimal degrees
    pub longitude: f64,

    /// Path to the locations listing
    pub path: PathBuf,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the map (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
