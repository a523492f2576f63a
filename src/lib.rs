//! Frequent sequential pattern mining with PrefixSpan.
//!
//! A [`Database`] holds sequences of itemsets. [`prefix_span`] returns every
//! pattern supported by at least `min_support` of them, grown one item at a
//! time over a pseudo-projected view of the database.
//!
//! ```
//! use prefixspan::{prefix_span, sequence, Database};
//!
//! let database = Database::new(vec![
//!     sequence![["bread"], ["milk", "eggs"]],
//!     sequence![["bread", "milk"], ["eggs"]],
//! ]);
//! let patterns = prefix_span(&database, 2, 10);
//!
//! assert_eq!(patterns[&sequence![["bread"], ["eggs"]]], 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod loader;
pub mod matching;
pub mod mining;
pub mod output;
pub mod sequence;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::{MinSupport, MiningConfig};
pub use error::{ConfigError, LoadError};
pub use loader::{parse_sequences, read_sequence_file, InputFormat, Loaded};
pub use matching::Cursor;
pub use mining::{prefix_span, PrefixSpan};
pub use sequence::{Database, Item, ItemSet, Sequence};
pub use types::{PatternCounts, SupportCount};
