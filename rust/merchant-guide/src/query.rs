//! Answering questions about numerals and commodity prices.
//!
//! Two kinds of question are understood:
//!
//! ```text
//! how much is <numeral> ?
//! how many Credits is <numeral> <Commodity> ?
//! ```
//!
//! Any other question is ill-formed. A well-formed question can still be
//! unanswerable, when its numeral does not translate.

use std::fmt;

use merchant_notes::Query;
use merchant_numerals::Translator;
use tracing::debug;

use crate::error::GuideResult;
use crate::ledger::Ledger;

/// The reply to one query.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// `pish tegj glob glob is 42`
    Quantity { numeral: String, value: u32 },
    /// `glob prok Silver is 68 Credits`
    Cost {
        numeral: String,
        commodity: String,
        credits: f64,
    },
    /// The question made sense but its numeral could not be translated.
    Unanswerable { note: String },
    /// The question did not have a known shape.
    IllFormed { note: String },
}

impl Answer {
    /// True for answers that carry a value.
    pub fn is_answered(&self) -> bool {
        matches!(self, Answer::Quantity { .. } | Answer::Cost { .. })
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Quantity { numeral, value } => write!(f, "{numeral} is {value}"),
            Answer::Cost {
                numeral,
                commodity,
                credits,
            } => write!(
                f,
                "{numeral} {commodity} is {} Credits",
                format_credits(*credits)
            ),
            Answer::Unanswerable { note } => write!(f, "I don't know how to answer '{note}'"),
            Answer::IllFormed { note } => {
                write!(f, "I don't know what '{note}' is trying to ask.")
            }
        }
    }
}

/// At most two decimals, and none at all for whole amounts.
pub fn format_credits(credits: f64) -> String {
    let fixed = format!("{credits:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

enum Question<'q> {
    Much {
        numeral: &'q [String],
    },
    Many {
        numeral: &'q [String],
        commodity: &'q str,
    },
}

/// Answers queries against what the translator and ledger have learned.
pub struct QueryHandler<'a> {
    translator: &'a Translator,
    ledger: &'a Ledger,
}

impl<'a> QueryHandler<'a> {
    pub fn new(translator: &'a Translator, ledger: &'a Ledger) -> Self {
        Self { translator, ledger }
    }

    pub fn answer(&self, query: &Query) -> Answer {
        let Some(question) = self.question(query) else {
            return Answer::IllFormed {
                note: query.raw.clone(),
            };
        };

        self.evaluate(question).unwrap_or_else(|error| {
            debug!(note = %query.raw, %error, "Query could not be answered");
            Answer::Unanswerable {
                note: query.raw.clone(),
            }
        })
    }

    /// Match the query against the two known shapes. Every word of the
    /// numeral must at least have been seen before, and a commodity must
    /// have a price.
    fn question<'q>(&self, query: &'q Query) -> Option<Question<'q>> {
        let tokens = query.tokens.as_slice();
        let numeral = query.intergal.as_slice();
        let known = !numeral.is_empty()
            && numeral
                .iter()
                .all(|word| self.translator.table().is_known(word));
        if !known {
            return None;
        }

        match tokens {
            [how, much, is, middle @ .., question]
                if how == "how" && much == "much" && is == "is" && question == "?" =>
            {
                (middle == numeral).then_some(Question::Much { numeral })
            }
            [how, many, credits, is, middle @ .., commodity, question]
                if how == "how"
                    && many == "many"
                    && credits == "Credits"
                    && is == "is"
                    && question == "?" =>
            {
                let priced = query.commodity.as_deref() == Some(commodity.as_str())
                    && self.ledger.price_of(commodity).is_some();
                (middle == numeral && priced).then_some(Question::Many {
                    numeral,
                    commodity: commodity.as_str(),
                })
            }
            _ => None,
        }
    }

    fn evaluate(&self, question: Question<'_>) -> GuideResult<Answer> {
        match question {
            Question::Much { numeral } => {
                let numeral = numeral.join(" ");
                let value = self.translator.intergal_to_arabic(&numeral)?;
                Ok(Answer::Quantity { numeral, value })
            }
            Question::Many { numeral, commodity } => {
                let numeral = numeral.join(" ");
                let amount = self.translator.intergal_to_arabic(&numeral)?;
                let price = self.ledger.unit_price(commodity)?;
                Ok(Answer::Cost {
                    numeral,
                    commodity: commodity.to_string(),
                    credits: price.credits * f64::from(amount),
                })
            }
        }
    }
}
