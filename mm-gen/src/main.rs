#![deny(
    // Somewhat of a "quality seal": deviations need an inline allow, which
    // makes them visible at the deviation site.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! Command-line entry point that regenerates the six traffic-model
//! artifacts and echoes the nonstop ones for source embedding.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mm_gen::{
    print_file_as_literals,
    write_model_file,
    ModelKind,
    Variant,
};
use tracing::info;

/// mm-gen command-line interface to regenerate the traffic generator's
/// Markov model configuration files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the generated model files are written into (not created
    /// when missing).
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    mm_gen::logging::setup(&args.verbosity);

    // the nonstop models are echoed as quoted literals right after being
    // written, in construction order
    for kind in ModelKind::ALL {
        let path = write_model_file(kind, Variant::Default, &args.output_dir)?;
        print_file_as_literals(&path)?;
    }

    // save the delayed models, but don't echo them
    for kind in ModelKind::ALL {
        write_model_file(kind, Variant::Delayed, &args.output_dir)?;
    }

    info!("model generation complete");
    Ok(())
}
