use crate::{error::ConfigError, types::SupportCount};

pub const MIN_PROBABILITY_FLOAT: f64 = 0.0;
pub const MAX_PROBABILITY_FLOAT: f64 = 1.0;
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 100;

const FRACTION_TOLERANCE: f64 = 1e-9;

/// Parses a non-negative integer flag value.
pub fn non_negative_int(arg: &str) -> Result<usize, ConfigError> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotAnInteger(arg.to_owned()))?;
    usize::try_from(value).map_err(|_| ConfigError::Negative(arg.to_owned()))
}

/// Parses a fraction in `[MIN_PROBABILITY_FLOAT, MAX_PROBABILITY_FLOAT]`.
pub fn probability_float(arg: &str) -> Result<f64, ConfigError> {
    let value: f64 = arg
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotAFloat(arg.to_owned()))?;
    if !(MIN_PROBABILITY_FLOAT..=MAX_PROBABILITY_FLOAT).contains(&value) {
        return Err(ConfigError::OutOfRange {
            value,
            min: MIN_PROBABILITY_FLOAT,
            max: MAX_PROBABILITY_FLOAT,
        });
    }
    Ok(value)
}

/// Support threshold as given by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Absolute number of supporting sequences.
    Count(SupportCount),
    /// Share of the database's sequences.
    Fraction(f64),
}

impl MinSupport {
    /// Absolute count for a database of `num_sequences` sequences.
    ///
    /// A fraction is rounded up, since an integer support `s` satisfies
    /// `s >= fraction * n` exactly when `s >= ceil(fraction * n)`. A product
    /// within float noise of an integer counts as that integer, so
    /// `0.07 * 100` gives 7 and not 8.
    pub fn to_count(&self, num_sequences: usize) -> SupportCount {
        match *self {
            MinSupport::Count(count) => count,
            MinSupport::Fraction(fraction) => {
                let scaled = fraction * num_sequences as f64;
                let nearest = scaled.round();
                if (scaled - nearest).abs() <= FRACTION_TOLERANCE * scaled.max(1.0) {
                    nearest as SupportCount
                } else {
                    scaled.ceil() as SupportCount
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub min_length: usize,
    pub max_length: usize,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min_length: self.min_length,
                max_length: self.max_length,
            });
        }
        Ok(self)
    }
}
