//! The learned intergalactic vocabulary.
//!
//! Intergalactic numerals are invented words, each standing for one base
//! Roman symbol. Bindings are learned from declaration notes and may change
//! over a run: declaring a new word for a symbol that already has one
//! releases the old word back to "known but unbound" rather than forgetting
//! it.

use std::collections::HashMap;

use crate::roman::RomanSymbol;

/// A one-to-one, partial mapping between intergalactic words and Roman ranks.
///
/// Invariant: `by_rank[r] == Some(w)` exactly when `words[w] == Some(r)`.
#[derive(Debug, Clone, Default)]
pub struct IntergalacticTable {
    by_rank: [Option<String>; RomanSymbol::COUNT],
    words: HashMap<String, Option<RomanSymbol>>,
    pairs: usize,
}

impl IntergalacticTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `word` to `symbol`.
    ///
    /// Whatever word held `symbol` before becomes known-but-unbound, and so
    /// does any rank `word` itself held before.
    pub fn bind(&mut self, word: &str, symbol: RomanSymbol) {
        if let Some(previous) = self.by_rank[symbol.rank()].take() {
            self.words.insert(previous, None);
            self.pairs -= 1;
        }
        if let Some(Some(held)) = self.words.get(word) {
            self.by_rank[held.rank()] = None;
            self.pairs -= 1;
        }

        self.by_rank[symbol.rank()] = Some(word.to_string());
        self.words.insert(word.to_string(), Some(symbol));
        self.pairs += 1;
    }

    /// Remember `word` without giving it a value.
    ///
    /// Returns `false` if the word was already known, bound or not.
    pub fn insert_unbound(&mut self, word: &str) -> bool {
        if self.words.contains_key(word) {
            return false;
        }
        self.words.insert(word.to_string(), None);
        true
    }

    /// Drop the binding held by `word`, keeping the word itself known.
    pub fn unbind(&mut self, word: &str) -> Option<RomanSymbol> {
        let symbol = self.words.get_mut(word)?.take()?;
        self.by_rank[symbol.rank()] = None;
        self.pairs -= 1;
        Some(symbol)
    }

    pub fn symbol_for(&self, word: &str) -> Option<RomanSymbol> {
        self.words.get(word).copied().flatten()
    }

    pub fn word_for(&self, symbol: RomanSymbol) -> Option<&str> {
        self.by_rank[symbol.rank()].as_deref()
    }

    /// Whether `word` has been seen at all, bound or not.
    pub fn is_known(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of ranks that currently have a word bound to them.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// True once every one of the seven ranks has a word.
    pub fn is_complete(&self) -> bool {
        self.pairs == RomanSymbol::COUNT
    }

    /// Bound pairs in rank order.
    pub fn bindings(&self) -> impl Iterator<Item = (RomanSymbol, &str)> + '_ {
        RomanSymbol::ALL
            .into_iter()
            .filter_map(|symbol| self.word_for(symbol).map(|word| (symbol, word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bind_and_lookup() {
        let mut table = IntergalacticTable::new();
        table.bind("glob", RomanSymbol::I);
        table.bind("prok", RomanSymbol::V);

        assert_eq!(table.symbol_for("glob"), Some(RomanSymbol::I));
        assert_eq!(table.word_for(RomanSymbol::V), Some("prok"));
        assert_eq!(table.pair_count(), 2);
        assert!(!table.is_complete());
    }

    #[test]
    fn test_new_word_for_rank_evicts_old_word() {
        let mut table = IntergalacticTable::new();
        table.bind("glob", RomanSymbol::I);
        table.bind("prok", RomanSymbol::I);

        assert_eq!(table.symbol_for("glob"), None);
        assert!(table.is_known("glob"));
        assert_eq!(table.word_for(RomanSymbol::I), Some("prok"));
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn test_rebinding_word_releases_its_old_rank() {
        let mut table = IntergalacticTable::new();
        table.bind("glob", RomanSymbol::I);
        table.bind("glob", RomanSymbol::V);

        assert_eq!(table.word_for(RomanSymbol::I), None);
        assert_eq!(table.word_for(RomanSymbol::V), Some("glob"));
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn test_rebinding_same_pair_is_stable() {
        let mut table = IntergalacticTable::new();
        table.bind("glob", RomanSymbol::I);
        table.bind("glob", RomanSymbol::I);

        assert_eq!(table.symbol_for("glob"), Some(RomanSymbol::I));
        assert_eq!(table.pair_count(), 1);
    }

    #[test]
    fn test_unbound_words() {
        let mut table = IntergalacticTable::new();
        assert!(table.insert_unbound("blarg"));
        assert!(!table.insert_unbound("blarg"));
        assert!(table.is_known("blarg"));
        assert_eq!(table.symbol_for("blarg"), None);
        assert_eq!(table.pair_count(), 0);

        table.bind("blarg", RomanSymbol::X);
        assert_eq!(table.unbind("blarg"), Some(RomanSymbol::X));
        assert_eq!(table.unbind("blarg"), None);
        assert!(table.is_known("blarg"));
        assert_eq!(table.word_for(RomanSymbol::X), None);
    }

    #[test]
    fn test_complete_table() {
        let mut table = IntergalacticTable::new();
        let words = ["a", "b", "c", "d", "e", "f", "g"];
        for (word, symbol) in words.iter().zip(RomanSymbol::ALL) {
            table.bind(word, symbol);
        }
        assert!(table.is_complete());
        assert_eq!(
            table.bindings().map(|(s, w)| (s.as_char(), w)).collect::<Vec<_>>(),
            vec![
                ('I', "a"),
                ('V', "b"),
                ('X', "c"),
                ('L', "d"),
                ('C', "e"),
                ('D', "f"),
                ('M', "g")
            ]
        );
    }
}
