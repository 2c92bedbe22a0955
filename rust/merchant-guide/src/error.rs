//! Error types for the merchant's guide.

use merchant_numerals::NumeralError;
use thiserror::Error;

/// Errors raised while applying declarations or reading notes.
#[derive(Error, Debug)]
pub enum GuideError {
    /// A numeral in a note could not be translated.
    #[error(transparent)]
    Numeral(#[from] NumeralError),

    /// A commodity with no recorded price.
    #[error("No price is recorded for {name:?}")]
    UnknownCommodity { name: String },

    /// The notes could not be read.
    #[error("Failed to read notes: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for guide operations
pub type GuideResult<T> = Result<T, GuideError>;
