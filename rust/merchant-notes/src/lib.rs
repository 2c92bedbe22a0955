//! # merchant-notes
//!
//! Reading notes about the intergalactic commodity markets.
//!
//! Each note is one line of free text. It is split into tokens, every token
//! is put into a lexical category, and the resulting [`NoteScan`] decides
//! which of five shapes the note has:
//!
//! ```text
//! glob is I                          base numeral declaration
//! pish tegj glob is XLI              composite numeral declaration
//! glob prok Silver is 68 Credits     commodity declaration
//! how much is pish tegj glob glob ?  query
//! anything else                      unknown
//! ```
//!
//! Classification holds no state between notes and never fails.
//!
//! ## Example
//!
//! ```
//! use merchant_notes::{Note, classify};
//!
//! let Note::Commodity(declaration) = classify("glob prok Silver is 68 Credits") else {
//!     panic!("not a commodity declaration");
//! };
//! assert_eq!(declaration.intergal, ["glob", "prok"]);
//! assert_eq!(declaration.commodity, "Silver");
//! assert_eq!(declaration.credits, 68);
//! ```

pub mod classify;
pub mod note;
pub mod scan;
pub mod token;

pub use classify::{classify, classify_scan};
pub use note::{
    BaseNumeralDeclaration, CommodityDeclaration, CompositeNumeralDeclaration, Note, NoteKind,
    Query, UnknownNote,
};
pub use scan::{Cluster, NoteScan, Tally};
pub use token::{Category, categorize, is_token_char, tokenize};
