use std::{
    fs::File,
    io::{self, BufWriter},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use prefixspan::{cli::Cli, loader::read_sequence_file, mining::PrefixSpan, output::write_patterns};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; `--debug` turns on everything down to TRACE
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = args.mining_config()?;

    // Load problems are logged by the loader and never fatal.
    let database = read_sequence_file(&args.input, args.input_format).database;
    let min_support = config.min_support.to_count(database.len());

    let started = Instant::now();
    let patterns = PrefixSpan::new(min_support, config.max_length).mine(&database);
    info!(
        sequences = database.len(),
        min_support,
        patterns = patterns.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "mining finished"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            write_patterns(
                &mut BufWriter::new(file),
                &patterns,
                config.min_length,
                args.format,
            )
            .with_context(|| format!("cannot write output file {}", path.display()))?;
        }
        None => {
            write_patterns(
                &mut io::stdout().lock(),
                &patterns,
                config.min_length,
                args.format,
            )
            .context("cannot write to stdout")?;
        }
    }

    Ok(())
}
