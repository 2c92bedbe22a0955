//! Error types for numeral translation.

use thiserror::Error;

/// Errors raised while validating or translating a numeral.
///
/// Positions are zero-based: a character offset inside a Roman numeral, or a
/// token index inside an intergalactic numeral.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// A Roman numeral with no symbols at all.
    #[error("Roman numeral can't be empty")]
    EmptyNumeral,

    /// A symbol repeats in succession more often than the grammar allows.
    #[error("'{symbol}' appears {count} times in succession at position {position}")]
    TooManyRepeats {
        symbol: char,
        count: usize,
        position: usize,
    },

    /// A subtractor precedes a symbol it may not be subtracted from.
    #[error("'{subtractor}' can't be subtracted from '{minuend}' at position {position}")]
    IllegalMinuend {
        subtractor: char,
        minuend: char,
        position: usize,
    },

    /// A symbol takes a second role that the numeral already used up.
    #[error("'{symbol}' at position {position} was already used")]
    SymbolReused { symbol: char, position: usize },

    /// An arabic value that has no strict Roman form.
    #[error("{value} is outside the Roman numeral range 1..=3999")]
    OutOfRange { value: u32 },

    /// Something that is not one of the seven base Roman symbols.
    #[error("{symbol:?} at position {position} is not a base Roman numeral")]
    InvalidRomanSymbol { symbol: String, position: usize },

    /// An intergalactic token with no Roman symbol bound to it.
    #[error("The Roman numeral for {token:?} (token {position}) is not recorded")]
    UnboundIntergalToken { token: String, position: usize },

    /// A Roman symbol with no intergalactic token bound to it.
    #[error("No intergalactic numeral is recorded for '{symbol}' (position {position})")]
    UnboundRomanSymbol { symbol: char, position: usize },

    /// A composite declaration pairs a different number of tokens and symbols.
    #[error("{tokens} intergalactic tokens can't spell a Roman numeral of {symbols} symbols")]
    ArityMismatch { tokens: usize, symbols: usize },

    /// A composite declaration contradicts a binding that is already recorded.
    #[error("{token:?} can't be declared as '{symbol}': one of them is already paired elsewhere")]
    ConflictingBinding { token: String, symbol: char },
}

/// Result type for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
