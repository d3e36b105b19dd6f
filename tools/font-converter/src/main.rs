//! Tool for converting plain-text glyph-table descriptions into glyph-table source fragments.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod cli;

fn main() -> Result<()> {
    init_logging();

    let config = cli::get_config();
    let summary = font_converter::convert(&config)
        .with_context(|| format!("error converting \"{}\"", config.input_path.display()))?;

    if summary.skipped_blocks != 0 {
        println!("Skipped {} malformed block(s)", summary.skipped_blocks);
    }
    println!(
        "Conversion completed. Output written to {}",
        summary.output_path.display()
    );

    Ok(())
}

/// Sets up logging to stderr, filtered by `RUST_LOG` and defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
