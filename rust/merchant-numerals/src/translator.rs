//! Translation between Roman, arabic and intergalactic numerals.
//!
//! ```text
//!               intergal_to_roman            roman_to_arabic
//! Intergalactic ─────────────────► Roman ─────────────────► Arabic
//!               ◄───────────────── (strict) ◄─────────────────
//!               roman_to_intergal            arabic_to_roman
//! ```
//!
//! Roman ⇄ arabic is fixed grammar. Intergalactic ⇄ Roman goes through the
//! [`IntergalacticTable`] the translator owns, which is learned from
//! declarations and is only ever partial.

use crate::error::{NumeralError, NumeralResult};
use crate::intergalactic::IntergalacticTable;
use crate::roman::{self, RomanSymbol};

/// Owns the learned vocabulary and answers every numeral conversion.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    table: IntergalacticTable,
}

impl Translator {
    /// A translator that knows no intergalactic words yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &IntergalacticTable {
        &self.table
    }

    /// Bind an intergalactic word to one of the seven base Roman symbols.
    ///
    /// `roman` must be exactly one base symbol; anything else fails with
    /// [`NumeralError::InvalidRomanSymbol`] and leaves the table untouched.
    pub fn record_base_mapping(&mut self, word: &str, roman: &str) -> NumeralResult<()> {
        let symbol: RomanSymbol = roman.parse()?;
        self.table.bind(word, symbol);
        Ok(())
    }

    /// Remember a word seen in a note without knowing its value.
    ///
    /// Returns `false` if the word was already known.
    pub fn note_unbound_word(&mut self, word: &str) -> bool {
        self.table.insert_unbound(word)
    }

    /// Learn bindings from a composite declaration such as
    /// `pish glob is XI`.
    ///
    /// Word `i` is paired with symbol `i`. The numeral must be valid, the
    /// counts must agree, and no pair may contradict a binding already held
    /// in either direction. On any failure nothing is learned. Returns the
    /// number of newly bound words.
    pub fn learn_composite<S: AsRef<str>>(
        &mut self,
        words: &[S],
        roman: &str,
    ) -> NumeralResult<usize> {
        roman::roman_to_arabic(roman)?;

        let symbols: Vec<RomanSymbol> = roman
            .chars()
            .map(RomanSymbol::try_from)
            .collect::<NumeralResult<_>>()?;
        if symbols.len() != words.len() {
            return Err(NumeralError::ArityMismatch {
                tokens: words.len(),
                symbols: symbols.len(),
            });
        }

        let mut fresh = Vec::new();
        for (word, &symbol) in words.iter().zip(&symbols) {
            let word: &str = word.as_ref();
            let held = self.table.symbol_for(word);
            let holder = self.table.word_for(symbol);
            match (held, holder) {
                (Some(held), _) if held == symbol => {}
                (None, None) => {
                    if !fresh.iter().any(|&(w, s)| w == word || s == symbol) {
                        fresh.push((word, symbol));
                    } else if !fresh.contains(&(word, symbol)) {
                        return Err(conflict(word, symbol));
                    }
                }
                _ => return Err(conflict(word, symbol)),
            }
        }

        for (word, symbol) in &fresh {
            self.table.bind(word, *symbol);
        }
        Ok(fresh.len())
    }

    /// Whether every rank has a bound word, which is what full translation
    /// in both directions needs.
    pub fn has_complete_bindings(&self) -> bool {
        self.table.is_complete()
    }

    /// Spell a space separated intergalactic numeral in Roman symbols.
    ///
    /// Words are separated by single spaces, so a doubled space yields an
    /// empty word, which is never bound. The result is not validated; pass it
    /// through [`roman::roman_to_arabic`] to check it.
    pub fn intergal_to_roman(&self, numeral: &str) -> NumeralResult<String> {
        if numeral.is_empty() {
            return Ok(String::new());
        }
        numeral
            .split(' ')
            .enumerate()
            .map(|(position, word)| {
                self.table
                    .symbol_for(word)
                    .map(RomanSymbol::as_char)
                    .ok_or_else(|| NumeralError::UnboundIntergalToken {
                        token: word.to_string(),
                        position,
                    })
            })
            .collect()
    }

    /// Spell a Roman numeral with the learned intergalactic words, separated
    /// by single spaces.
    pub fn roman_to_intergal(&self, numeral: &str) -> NumeralResult<String> {
        let words = numeral
            .chars()
            .enumerate()
            .map(|(position, c)| {
                RomanSymbol::from_char(c)
                    .ok_or_else(|| NumeralError::InvalidRomanSymbol {
                        symbol: c.to_string(),
                        position,
                    })
                    .and_then(|symbol| {
                        self.table
                            .word_for(symbol)
                            .ok_or(NumeralError::UnboundRomanSymbol { symbol: c, position })
                    })
            })
            .collect::<NumeralResult<Vec<&str>>>()?;
        Ok(words.join(" "))
    }

    pub fn intergal_to_arabic(&self, numeral: &str) -> NumeralResult<u32> {
        roman::roman_to_arabic(&self.intergal_to_roman(numeral)?)
    }

    pub fn arabic_to_intergal(&self, value: u32) -> NumeralResult<String> {
        self.roman_to_intergal(&roman::arabic_to_roman(value)?)
    }
}

fn conflict(word: &str, symbol: RomanSymbol) -> NumeralError {
    NumeralError::ConflictingBinding {
        token: word.to_string(),
        symbol: symbol.as_char(),
    }
}
