//! A single pass over a note's tokens that records where each lexical
//! category occurs.
//!
//! The scan is built once by folding over the tokens and is immutable
//! afterwards. Classification only ever looks at the finished scan.

use std::ops::RangeInclusive;

use crate::token::{Category, categorize, is_intergalactic, tokenize};

/// How often a category occurred and where it was seen last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: usize,
    pub last: Option<usize>,
}

impl Tally {
    /// True when the category occurred exactly once, at `position`.
    pub fn is_once_at(&self, position: usize) -> bool {
        self.count == 1 && self.last == Some(position)
    }
}

/// An inclusive range of token indices holding intergalactic numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    pub start: usize,
    pub end: usize,
}

impl Cluster {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn spans(&self, start: usize, end: usize) -> bool {
        self.start == start && self.end == end
    }
}

/// Positional metadata for one note.
///
/// Clusters are maximal runs of intergalactic tokens. Only the first two are
/// kept; further ones are counted but not located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteScan {
    tokens: Vec<String>,
    tallies: [Tally; Category::COUNT],
    commodities: [Option<usize>; 2],
    roman_position: Option<usize>,
    clusters: Vec<Cluster>,
}

impl NoteScan {
    /// Tokenize and scan a raw note.
    pub fn scan(note: &str) -> Self {
        Self::from_tokens(tokenize(note))
    }

    /// Scan an already tokenized note.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut builder = ScanBuilder::default();
        let mut position = 0;

        while position < tokens.len() {
            match categorize(&tokens[position]) {
                Category::Intergalactic => {
                    let end = tokens[position..]
                        .iter()
                        .take_while(|token| is_intergalactic(token))
                        .count()
                        + position
                        - 1;
                    builder.cluster(Cluster {
                        start: position,
                        end,
                    });
                    position = end + 1;
                }
                category => {
                    builder.record(category, position);
                    position += 1;
                }
            }
        }

        builder.finish(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occurrences of `category`. For [`Category::Intergalactic`] this counts
    /// clusters, and `last` is the start of the last one.
    pub fn tally(&self, category: Category) -> Tally {
        self.tallies[category.index()]
    }

    pub fn count(&self, category: Category) -> usize {
        self.tally(category).count
    }

    pub fn first_commodity(&self) -> Option<usize> {
        self.commodities[0]
    }

    pub fn second_commodity(&self) -> Option<usize> {
        self.commodities[1]
    }

    /// Position of the last Roman numeral, base or composite.
    pub fn roman_position(&self) -> Option<usize> {
        self.roman_position
    }

    /// The located clusters, at most two.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Every cluster seen, located or not.
    pub fn cluster_count(&self) -> usize {
        self.count(Category::Intergalactic)
    }

    /// The tokens covered by `cluster`.
    pub fn cluster_tokens(&self, cluster: &Cluster) -> &[String] {
        &self.tokens[cluster.range()]
    }

    pub fn last_token(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Whether the token counts alone already rule out every note shape:
    /// a repeated keyword, numeral or question mark, more than two clusters or
    /// commodities, or both `much` and `many`.
    pub fn is_malformed(&self) -> bool {
        let repeated = [
            Category::Is,
            Category::QuestionMark,
            Category::How,
            Category::Much,
            Category::Many,
            Category::Arabic,
            Category::Credits,
            Category::BaseRoman,
            Category::CompositeRoman,
        ]
        .into_iter()
        .any(|category| self.count(category) > 1);

        repeated
            || self.cluster_count() > 2
            || self.count(Category::Commodity) > 2
            || self.count(Category::Much) + self.count(Category::Many) > 1
            || self.count(Category::BaseRoman) + self.count(Category::CompositeRoman) > 1
    }
}

#[derive(Default)]
struct ScanBuilder {
    tallies: [Tally; Category::COUNT],
    commodities: [Option<usize>; 2],
    roman_position: Option<usize>,
    clusters: Vec<Cluster>,
}

impl ScanBuilder {
    fn record(&mut self, category: Category, position: usize) {
        let tally = &mut self.tallies[category.index()];
        if category == Category::Commodity && tally.count < 2 {
            self.commodities[tally.count] = Some(position);
        }
        tally.count += 1;
        tally.last = Some(position);

        if matches!(category, Category::BaseRoman | Category::CompositeRoman) {
            self.roman_position = Some(position);
        }
    }

    fn cluster(&mut self, cluster: Cluster) {
        if self.clusters.len() < 2 {
            self.clusters.push(cluster);
        }
        self.record(Category::Intergalactic, cluster.start);
    }

    fn finish(self, tokens: Vec<String>) -> NoteScan {
        NoteScan {
            tokens,
            tallies: self.tallies,
            commodities: self.commodities,
            roman_position: self.roman_position,
            clusters: self.clusters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_commodity_declaration() {
        let scan = NoteScan::scan("glob prok Silver is 68 Credits");

        assert_eq!(scan.len(), 6);
        assert_eq!(scan.clusters(), &[Cluster { start: 0, end: 1 }]);
        assert_eq!(scan.first_commodity(), Some(2));
        assert_eq!(scan.second_commodity(), None);
        assert!(scan.tally(Category::Is).is_once_at(3));
        assert!(scan.tally(Category::Arabic).is_once_at(4));
        assert!(scan.tally(Category::Credits).is_once_at(5));
        assert_eq!(scan.roman_position(), None);
        assert!(!scan.is_malformed());
    }

    #[test]
    fn test_absent_categories_have_no_position() {
        let scan = NoteScan::scan("glob is I");
        assert_eq!(scan.tally(Category::How), Tally::default());
        assert_eq!(scan.roman_position(), Some(2));
    }

    #[test]
    fn test_cluster_run_is_one_step() {
        let scan = NoteScan::scan("how much is pish tegj glob glob ?");
        assert_eq!(scan.cluster_count(), 1);
        assert_eq!(
            scan.cluster_tokens(&scan.clusters()[0]),
            &["pish", "tegj", "glob", "glob"]
        );
        assert!(scan.tally(Category::QuestionMark).is_once_at(7));
    }

    #[test]
    fn test_cluster_at_end_of_note() {
        let scan = NoteScan::scan("how much is glob prok");
        assert_eq!(scan.clusters(), &[Cluster { start: 3, end: 4 }]);
    }

    #[test]
    fn test_cluster_absorbs_many() {
        let scan = NoteScan::scan("glob many Silver");
        assert_eq!(scan.clusters(), &[Cluster { start: 0, end: 1 }]);
        assert_eq!(scan.count(Category::Many), 0);

        let scan = NoteScan::scan("many glob");
        assert!(scan.tally(Category::Many).is_once_at(0));
        assert_eq!(scan.clusters(), &[Cluster { start: 1, end: 1 }]);
    }

    #[test]
    fn test_third_cluster_is_counted_not_located() {
        let scan = NoteScan::scan("glob is prok is pish is tegj");
        assert_eq!(scan.cluster_count(), 4);
        assert_eq!(
            scan.clusters(),
            &[Cluster { start: 0, end: 0 }, Cluster { start: 2, end: 2 }]
        );
        assert!(scan.is_malformed());
    }

    #[test]
    fn test_two_commodities() {
        let scan = NoteScan::scan("Gold is Silver");
        assert_eq!(scan.first_commodity(), Some(0));
        assert_eq!(scan.second_commodity(), Some(2));
        assert_eq!(scan.count(Category::Commodity), 2);
        assert!(!scan.is_malformed());
    }

    #[test]
    fn test_malformed_counts() {
        assert!(NoteScan::scan("how much many glob ?").is_malformed());
        assert!(NoteScan::scan("glob is I is").is_malformed());
        assert!(NoteScan::scan("glob is I XI").is_malformed());
        assert!(NoteScan::scan("Gold Silver Iron").is_malformed());
        assert!(!NoteScan::scan("how many Credits is glob prok Silver ?").is_malformed());
    }

    #[test]
    fn test_roman_position_tracks_last_numeral() {
        let scan = NoteScan::scan("XI glob is I");
        assert_eq!(scan.count(Category::CompositeRoman), 1);
        assert_eq!(scan.count(Category::BaseRoman), 1);
        assert_eq!(scan.roman_position(), Some(3));
    }
}
