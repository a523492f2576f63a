//! CLI argument parsing for prefixspan

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::{
    config::{non_negative_int, probability_float, MinSupport, MiningConfig},
    error::ConfigError,
    loader::InputFormat,
    output::OutputFormat,
};

#[derive(Parser, Debug)]
#[command(name = "prefixspan")]
#[command(version)]
#[command(about = "Mine frequent sequential patterns with PrefixSpan", long_about = None)]
#[command(group(
    ArgGroup::new("support")
        .required(true)
        .args(["min_sup", "min_sup_percentage"])
))]
pub struct Cli {
    /// Sequence file to mine
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the patterns here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Minimum number of supporting sequences
    #[arg(
        long = "min-sup",
        value_name = "COUNT",
        value_parser = non_negative_int,
        allow_negative_numbers = true
    )]
    pub min_sup: Option<usize>,

    /// Minimum share of supporting sequences, in [0.0, 1.0]
    #[arg(
        long = "min-sup-percentage",
        value_name = "FRACTION",
        value_parser = probability_float,
        allow_negative_numbers = true
    )]
    pub min_sup_percentage: Option<f64>,

    /// Only report patterns with at least this many items
    #[arg(
        long = "min-length",
        value_name = "N",
        default_value = "1",
        value_parser = non_negative_int,
        allow_negative_numbers = true
    )]
    pub min_length: usize,

    /// Do not grow patterns beyond this many items
    #[arg(
        long = "max-length",
        value_name = "N",
        default_value = "100",
        value_parser = non_negative_int,
        allow_negative_numbers = true
    )]
    pub max_length: usize,

    /// Layout of the input file
    #[arg(long = "input-format", value_enum, default_value = "auto")]
    pub input_format: InputFormat,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub fn min_support(&self) -> MinSupport {
        match (self.min_sup, self.min_sup_percentage) {
            (Some(count), _) => MinSupport::Count(count),
            (None, Some(fraction)) => MinSupport::Fraction(fraction),
            // the argument group requires one of the two
            (None, None) => MinSupport::Count(0),
        }
    }

    pub fn mining_config(&self) -> Result<MiningConfig, ConfigError> {
        MiningConfig {
            min_support: self.min_support(),
            min_length: self.min_length,
            max_length: self.max_length,
        }
        .validate()
    }
}
