//! The five shapes a classified note can take.
//!
//! Every variant keeps the raw note text, which is also what [`Note`]
//! displays as, so diagnostics can always quote the input line verbatim.

use std::fmt;

use merchant_numerals::RomanSymbol;

/// `glob is I`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseNumeralDeclaration {
    pub raw: String,
    pub intergal: String,
    pub roman: RomanSymbol,
}

/// `pish glob is XI`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeNumeralDeclaration {
    pub raw: String,
    /// At least two tokens.
    pub intergal: Vec<String>,
    pub roman: String,
    pub value: u32,
}

/// `glob prok Silver is 68 Credits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommodityDeclaration {
    pub raw: String,
    /// The amount of the commodity, in intergalactic numerals.
    pub intergal: Vec<String>,
    pub commodity: String,
    /// Total price of that amount, in Credits.
    pub credits: u64,
}

/// Any note whose last token is a lone `?`. Whether the question makes
/// sense is up to whoever answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub tokens: Vec<String>,
    /// The first commodity mentioned, if any.
    pub commodity: Option<String>,
    /// The tokens of the first intergalactic cluster; empty if there is none.
    pub intergal: Vec<String>,
}

impl Query {
    /// The intergalactic numeral as it should be quoted in an answer.
    pub fn numeral(&self) -> String {
        self.intergal.join(" ")
    }
}

/// A note matching none of the known shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNote {
    pub raw: String,
    pub tokens: Vec<String>,
}

/// A classified note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    BaseNumeral(BaseNumeralDeclaration),
    CompositeNumeral(CompositeNumeralDeclaration),
    Commodity(CommodityDeclaration),
    Query(Query),
    Unknown(UnknownNote),
}

/// The variant of a [`Note`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    BaseNumeral,
    CompositeNumeral,
    Commodity,
    Query,
    Unknown,
}

impl Note {
    /// The note exactly as it was given.
    pub fn raw(&self) -> &str {
        match self {
            Note::BaseNumeral(note) => &note.raw,
            Note::CompositeNumeral(note) => &note.raw,
            Note::Commodity(note) => &note.raw,
            Note::Query(note) => &note.raw,
            Note::Unknown(note) => &note.raw,
        }
    }

    pub fn kind(&self) -> NoteKind {
        match self {
            Note::BaseNumeral(_) => NoteKind::BaseNumeral,
            Note::CompositeNumeral(_) => NoteKind::CompositeNumeral,
            Note::Commodity(_) => NoteKind::Commodity,
            Note::Query(_) => NoteKind::Query,
            Note::Unknown(_) => NoteKind::Unknown,
        }
    }

    /// True for the three declaration shapes.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Note::BaseNumeral(_) | Note::CompositeNumeral(_) | Note::Commodity(_)
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteKind::BaseNumeral => "base numeral declaration",
            NoteKind::CompositeNumeral => "composite numeral declaration",
            NoteKind::Commodity => "commodity declaration",
            NoteKind::Query => "query",
            NoteKind::Unknown => "unknown note",
        };
        write!(f, "{name}")
    }
}
