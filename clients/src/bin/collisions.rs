//! `pphy-collisions` — Generates the PPhy `CollisionType` enum entries.
//!
//! Prints one `{A}{B}Collision = 0x{code},` line per ordered pair of object
//! types to stdout, ready to paste into the engine's enum. Diagnostics go to
//! stderr.
//!
//! **Usage:**
//! ```
//! pphy-collisions [--format <entries|cpp-enum|rust-enum>] [--skip-spatial-self] [-v]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pphy_codegen::{EmitOptions, OutputFormat};
use tracing_subscriber::EnvFilter;

/// Generate the collision-matrix enum for every ordered object-type pair.
#[derive(Parser)]
#[command(
    name = "pphy-collisions",
    about = "Generate PPhy collision-type enum entries"
)]
struct Args {
    /// Shape of the generated text.
    #[arg(long, value_enum, default_value_t = Format::Entries)]
    format: Format,

    /// Leave out StaticStatic and ClipClip, the self-pairs of immovable types.
    #[arg(long)]
    skip_spatial_self: bool,

    /// Log each emitted pair to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Bare entry lines.
    Entries,
    /// A complete C++ `enum class`.
    CppEnum,
    /// A `#[repr(u16)]` Rust enum.
    RustEnum,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Entries => OutputFormat::Entries,
            Format::CppEnum => OutputFormat::CppEnum,
            Format::RustEnum => OutputFormat::RustEnum,
        }
    }
}

impl From<&Args> for EmitOptions {
    fn from(args: &Args) -> Self {
        EmitOptions {
            format: args.format.into(),
            skip_spatial_self_pairs: args.skip_spatial_self,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = EmitOptions::from(&args);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pphy_codegen::write_to(&mut out, &options)
        .with_context(|| format!("Failed to write {} to stdout", options.format))?;
    Ok(())
}
