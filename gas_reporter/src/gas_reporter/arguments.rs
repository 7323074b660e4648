//!
//! The gas reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Directory with the four per-toolchain benchmark JSON files.
    #[arg(long = "data-directory", default_value = "data")]
    pub data_directory: PathBuf,

    /// The output file. If unset, the report is printed to `stdout`.
    #[arg(short = 'o', long = "output-path")]
    pub output_path: Option<PathBuf>,
}
