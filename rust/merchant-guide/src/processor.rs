//! Applying a batch of notes and answering its queries.
//!
//! Notes are classified first. Declarations are then applied by kind (base
//! numerals, composite numerals, commodity prices), each kind in input order,
//! so a query can rely on every declaration in the batch no matter where it
//! appears. Queries are answered last, in input order.

use merchant_notes::{
    BaseNumeralDeclaration, CommodityDeclaration, CompositeNumeralDeclaration, Note, NoteScan,
    Query, UnknownNote, classify_scan,
};
use merchant_numerals::Translator;
use tracing::{debug, info, warn};

use crate::config::GuideConfig;
use crate::error::GuideError;
use crate::ledger::Ledger;
use crate::query::{Answer, QueryHandler};

/// A declaration that could not be applied.
#[derive(Debug)]
pub struct FailedDeclaration {
    pub note: String,
    pub error: GuideError,
}

/// What a batch produced.
#[derive(Debug, Default)]
pub struct Report {
    /// One answer per query, in input order.
    pub answers: Vec<Answer>,
    pub unknown: Vec<UnknownNote>,
    pub failed: Vec<FailedDeclaration>,
}

#[derive(Default)]
struct Batch {
    bases: Vec<BaseNumeralDeclaration>,
    composites: Vec<CompositeNumeralDeclaration>,
    commodities: Vec<CommodityDeclaration>,
    queries: Vec<Query>,
    unknown: Vec<UnknownNote>,
}

impl Batch {
    fn sort<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = Self::default();
        for note in notes {
            let note = note.as_ref();
            let scan = NoteScan::scan(note);
            match classify_scan(note, &scan) {
                Note::BaseNumeral(declaration) => batch.bases.push(declaration),
                Note::CompositeNumeral(declaration) => batch.composites.push(declaration),
                Note::Commodity(declaration) => batch.commodities.push(declaration),
                Note::Query(query) => batch.queries.push(query),
                Note::Unknown(unknown) => {
                    warn!(
                        note = %unknown.raw,
                        malformed = scan.is_malformed(),
                        "Note has no known shape"
                    );
                    batch.unknown.push(unknown);
                }
            }
        }
        batch
    }
}

/// Holds what has been learned so far. Learning carries over between
/// batches.
#[derive(Debug, Default)]
pub struct NoteProcessor {
    config: GuideConfig,
    translator: Translator,
    ledger: Ledger,
}

impl NoteProcessor {
    pub fn new(config: GuideConfig) -> Self {
        Self {
            config,
            translator: Translator::new(),
            ledger: Ledger::new(config.price_policy),
        }
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Learn from every declaration in `notes`, then answer its queries.
    pub fn process<I, S>(&mut self, notes: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = Batch::sort(notes);
        let mut report = Report {
            unknown: batch.unknown,
            ..Report::default()
        };

        for declaration in &batch.bases {
            let roman = declaration.roman.to_string();
            match self
                .translator
                .record_base_mapping(&declaration.intergal, &roman)
            {
                Ok(()) => debug!(word = %declaration.intergal, %roman, "Learned numeral"),
                Err(error) => report.fail(&declaration.raw, error.into()),
            }
        }

        for declaration in &batch.composites {
            self.apply_composite(declaration, &mut report);
        }

        for declaration in &batch.commodities {
            for word in &declaration.intergal {
                self.translator.note_unbound_word(word);
            }
            match self.ledger.record_declaration(&self.translator, declaration) {
                Ok(price) => debug!(
                    commodity = %declaration.commodity,
                    credits = price.credits,
                    "Recorded unit price"
                ),
                Err(error) => report.fail(&declaration.raw, error),
            }
        }

        let handler = QueryHandler::new(&self.translator, &self.ledger);
        report.answers = batch
            .queries
            .iter()
            .map(|query| {
                let answer = handler.answer(query);
                debug!(note = %query.raw, %answer, "Answered query");
                answer
            })
            .collect();

        info!(
            numerals = self.translator.table().pair_count(),
            commodities = self.ledger.len(),
            answers = report.answers.len(),
            unknown = report.unknown.len(),
            failed = report.failed.len(),
            "Processed notes"
        );
        report
    }

    fn apply_composite(&mut self, declaration: &CompositeNumeralDeclaration, report: &mut Report) {
        if !self.config.learn_from_composites {
            for word in &declaration.intergal {
                self.translator.note_unbound_word(word);
            }
            debug!(note = %declaration.raw, "Composite learning is off");
            return;
        }

        match self
            .translator
            .learn_composite(&declaration.intergal, &declaration.roman)
        {
            Ok(learned) => debug!(
                note = %declaration.raw,
                value = declaration.value,
                learned,
                "Learned from composite numeral"
            ),
            Err(error) => report.fail(&declaration.raw, error.into()),
        }
    }
}

impl Report {
    fn fail(&mut self, note: &str, error: GuideError) {
        warn!(%note, %error, "Declaration was not applied");
        self.failed.push(FailedDeclaration {
            note: note.to_string(),
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricePolicy;
    use merchant_numerals::NumeralError;
    use pretty_assertions::assert_eq;

    fn answers(report: &Report) -> Vec<String> {
        report.answers.iter().map(ToString::to_string).collect()
    }

    #[test_log::test]
    fn test_queries_see_later_declarations() {
        let mut processor = NoteProcessor::default();
        let report = processor.process([
            "how much is pish glob ?",
            "how many Credits is glob prok Silver ?",
            "glob is I",
            "pish is X",
            "prok is V",
            "glob glob Silver is 34 Credits",
        ]);

        assert_eq!(
            answers(&report),
            vec!["pish glob is 11", "glob prok Silver is 68 Credits"]
        );
        assert!(report.failed.is_empty());
    }

    #[test_log::test]
    fn test_composite_declaration_teaches_new_words() {
        let mut processor = NoteProcessor::default();
        let report = processor.process([
            "glob is I",
            "pish is X",
            "blip pish is CX",
            "how much is blip glob ?",
        ]);

        assert_eq!(answers(&report), vec!["blip glob is 101"]);
    }

    #[test_log::test]
    fn test_composite_learning_can_be_disabled() {
        let config = GuideConfig::default().with_composite_learning(false);
        let mut processor = NoteProcessor::new(config);
        let report = processor.process([
            "glob is I",
            "pish is X",
            "blip pish is CX",
            "how much is blip glob ?",
        ]);

        assert_eq!(
            answers(&report),
            vec!["I don't know how to answer 'how much is blip glob ?'"]
        );
        assert!(processor.translator().table().is_known("blip"));
    }

    #[test_log::test]
    fn test_unknown_and_failed_notes_are_reported() {
        let mut processor = NoteProcessor::default();
        let report = processor.process([
            "glob is I",
            "glob prok is VI",
            "blarg Gold is 10 Credits",
            "this note means nothing",
        ]);

        assert_eq!(report.unknown.len(), 1);
        assert_eq!(report.unknown[0].raw, "this note means nothing");

        let failed: Vec<&str> = report.failed.iter().map(|f| f.note.as_str()).collect();
        assert_eq!(failed, vec!["glob prok is VI", "blarg Gold is 10 Credits"]);
        assert!(matches!(
            report.failed[0].error,
            GuideError::Numeral(NumeralError::ConflictingBinding { .. })
        ));
        assert!(matches!(
            report.failed[1].error,
            GuideError::Numeral(NumeralError::UnboundIntergalToken { .. })
        ));
        assert!(processor.translator().table().is_known("blarg"));
    }

    #[test_log::test]
    fn test_price_policy_is_applied() {
        let notes = [
            "glob is I",
            "glob Gold is 10 Credits",
            "glob Gold is 20 Credits",
            "how many Credits is glob Gold ?",
        ];

        let mut overwrite = NoteProcessor::default();
        assert_eq!(
            answers(&overwrite.process(notes)),
            vec!["glob Gold is 20 Credits"]
        );

        let config = GuideConfig::default().with_price_policy(PricePolicy::KeepFirst);
        let mut keep_first = NoteProcessor::new(config);
        assert_eq!(keep_first.config(), &config);
        assert_eq!(keep_first.ledger().policy(), PricePolicy::KeepFirst);
        assert_eq!(
            answers(&keep_first.process(notes)),
            vec!["glob Gold is 10 Credits"]
        );
    }

    #[test_log::test]
    fn test_learning_carries_over_between_batches() {
        let mut processor = NoteProcessor::default();
        processor.process(["glob is I", "prok is V"]);
        let report = processor.process(["how much is glob prok ?"]);

        assert_eq!(answers(&report), vec!["glob prok is 4"]);
    }
}
