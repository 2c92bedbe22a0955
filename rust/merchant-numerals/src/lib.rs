//! # merchant-numerals
//!
//! Numeral translation for the merchant's guide: a strict Roman numeral
//! grammar, and a learned vocabulary of intergalactic words layered on top
//! of it.
//!
//! ## Representations
//!
//! - **Roman**: strings over `I V X L C D M`, validated against the strict
//!   grammar (see [`roman`]). Only `1..=3999` can be written.
//! - **Arabic**: plain `u32` values.
//! - **Intergalactic**: space separated words, each bound one-to-one to a
//!   base Roman symbol by a declaration such as `glob is I`.
//!
//! ## Example
//!
//! ```
//! use merchant_numerals::Translator;
//!
//! let mut translator = Translator::new();
//! translator.record_base_mapping("glob", "I").unwrap();
//! translator.record_base_mapping("prok", "V").unwrap();
//! translator.record_base_mapping("pish", "X").unwrap();
//!
//! assert_eq!(translator.intergal_to_arabic("pish glob prok").unwrap(), 14);
//! assert_eq!(translator.arabic_to_intergal(16).unwrap(), "pish prok glob");
//! ```

pub mod error;
pub mod intergalactic;
pub mod roman;
pub mod translator;

pub use error::{NumeralError, NumeralResult};
pub use intergalactic::IntergalacticTable;
pub use roman::{MAX_ROMAN, MIN_ROMAN, RomanSymbol, arabic_to_roman, roman_to_arabic};
pub use translator::Translator;
