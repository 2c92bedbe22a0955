//! # merchant-guide
//!
//! A guide to the intergalactic commodity markets, learned from a merchant's
//! notes.
//!
//! The notes declare what intergalactic numerals mean and what commodities
//! cost, and ask questions about both:
//!
//! ```text
//! glob is I
//! prok is V
//! glob glob Silver is 34 Credits
//! how many Credits is glob prok Silver ?
//! ```
//!
//! A [`NoteProcessor`] learns from every declaration in a batch before it
//! answers that batch's questions.
//!
//! ```
//! use merchant_guide::NoteProcessor;
//!
//! let mut processor = NoteProcessor::default();
//! let report = processor.process([
//!     "glob is I",
//!     "prok is V",
//!     "glob glob Silver is 34 Credits",
//!     "how many Credits is glob prok Silver ?",
//! ]);
//!
//! assert_eq!(report.answers[0].to_string(), "glob prok Silver is 68 Credits");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod processor;
pub mod query;
pub mod source;

pub use config::{GuideConfig, PricePolicy};
pub use error::{GuideError, GuideResult};
pub use ledger::{Ledger, Price};
pub use processor::{FailedDeclaration, NoteProcessor, Report};
pub use query::{Answer, QueryHandler};
pub use source::{NoteSource, read_notes};
