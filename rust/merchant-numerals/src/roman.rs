//! Strict Roman numerals.
//!
//! The seven base symbols and their rules are fixed data:
//!
//! ```text
//! symbol   I  V  X   L   C    D    M
//! rank     0  1  2   3   4    5    6
//! value    1  5  10  50  100  500  1000
//! ```
//!
//! - `V`, `L` and `D` never repeat; every other symbol repeats at most three
//!   times in succession.
//! - Only `I`, `X` and `C` subtract, and only from the next two symbols up:
//!   `I` from `V`/`X`, `X` from `L`/`C`, `C` from `D`/`M`.
//! - A single symbol is subtracted at a time, and no symbol takes the same
//!   role twice in one numeral.
//!
//! [`roman_to_arabic`] validates while it converts, so it doubles as the
//! grammar check used by the note classifier. [`arabic_to_roman`] always
//! produces the canonical digit-wise form.

use std::fmt;
use std::str::FromStr;

use crate::error::{NumeralError, NumeralResult};

/// Smallest value with a strict Roman form.
pub const MIN_ROMAN: u32 = 1;

/// Largest value with a strict Roman form. There is no symbol above `M`.
pub const MAX_ROMAN: u32 = 3999;

/// One of the seven base Roman symbols, ordered by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RomanSymbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl RomanSymbol {
    /// Number of base symbols (and therefore of ranks).
    pub const COUNT: usize = 7;

    /// Every base symbol, indexed by rank.
    pub const ALL: [RomanSymbol; Self::COUNT] = [
        RomanSymbol::I,
        RomanSymbol::V,
        RomanSymbol::X,
        RomanSymbol::L,
        RomanSymbol::C,
        RomanSymbol::D,
        RomanSymbol::M,
    ];

    /// Zero-based rank, `I` = 0 through `M` = 6.
    pub const fn rank(self) -> usize {
        self as usize
    }

    pub const fn value(self) -> u32 {
        match self {
            RomanSymbol::I => 1,
            RomanSymbol::V => 5,
            RomanSymbol::X => 10,
            RomanSymbol::L => 50,
            RomanSymbol::C => 100,
            RomanSymbol::D => 500,
            RomanSymbol::M => 1000,
        }
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(RomanSymbol::I),
            'V' => Some(RomanSymbol::V),
            'X' => Some(RomanSymbol::X),
            'L' => Some(RomanSymbol::L),
            'C' => Some(RomanSymbol::C),
            'D' => Some(RomanSymbol::D),
            'M' => Some(RomanSymbol::M),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            RomanSymbol::I => 'I',
            RomanSymbol::V => 'V',
            RomanSymbol::X => 'X',
            RomanSymbol::L => 'L',
            RomanSymbol::C => 'C',
            RomanSymbol::D => 'D',
            RomanSymbol::M => 'M',
        }
    }

    /// `V`, `L` and `D` may never appear twice in a row.
    pub const fn is_repeatable(self) -> bool {
        !matches!(self, RomanSymbol::V | RomanSymbol::L | RomanSymbol::D)
    }

    /// The symbols this one may be subtracted from. Empty for non-subtractors.
    pub const fn minuends(self) -> &'static [RomanSymbol] {
        match self {
            RomanSymbol::I => &[RomanSymbol::V, RomanSymbol::X],
            RomanSymbol::X => &[RomanSymbol::L, RomanSymbol::C],
            RomanSymbol::C => &[RomanSymbol::D, RomanSymbol::M],
            _ => &[],
        }
    }

    pub const fn is_subtractor(self) -> bool {
        matches!(self, RomanSymbol::I | RomanSymbol::X | RomanSymbol::C)
    }
}

impl fmt::Display for RomanSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for RomanSymbol {
    type Error = NumeralError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        base_symbol(symbol, 0)
    }
}

impl FromStr for RomanSymbol {
    type Err = NumeralError;

    /// Parse a single base symbol such as `"X"`. Anything longer is rejected.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => base_symbol(c, 0),
            _ => Err(NumeralError::InvalidRomanSymbol {
                symbol: symbol.to_string(),
                position: 0,
            }),
        }
    }
}

fn base_symbol(symbol: char, position: usize) -> NumeralResult<RomanSymbol> {
    RomanSymbol::from_char(symbol).ok_or_else(|| NumeralError::InvalidRomanSymbol {
        symbol: symbol.to_string(),
        position,
    })
}

/// The role a symbol has already played while one numeral is parsed.
///
/// A symbol moves forward through these states and never back:
///
/// ```text
/// Unused ──add──────► AddendUsed ───subtract──► Spent
///   │                                             ▲
///   ├──subtract─► SubtractorUsed ───add───────────┘
///   │
///   └──as minuend──► MinuendUsed
/// ```
///
/// `AddendUsed` and `SubtractorUsed` may also become `MinuendUsed`. `Spent`
/// and `MinuendUsed` are terminal and admit no further role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Usage {
    #[default]
    Unused,
    AddendUsed,
    SubtractorUsed,
    MinuendUsed,
    /// Added and subtracted, in either order.
    Spent,
}

impl Usage {
    fn added(self) -> Option<Self> {
        match self {
            Usage::Unused => Some(Usage::AddendUsed),
            Usage::SubtractorUsed => Some(Usage::Spent),
            Usage::AddendUsed | Usage::MinuendUsed | Usage::Spent => None,
        }
    }

    fn subtracted(self) -> Option<Self> {
        match self {
            Usage::Unused => Some(Usage::SubtractorUsed),
            Usage::AddendUsed => Some(Usage::Spent),
            Usage::SubtractorUsed | Usage::MinuendUsed | Usage::Spent => None,
        }
    }

    fn subtracted_from(self) -> Option<Self> {
        match self {
            Usage::Unused | Usage::AddendUsed | Usage::SubtractorUsed => Some(Usage::MinuendUsed),
            Usage::MinuendUsed | Usage::Spent => None,
        }
    }
}

/// Per-rank usage for a single numeral. Never shared between parses.
#[derive(Debug, Default)]
struct Usages([Usage; RomanSymbol::COUNT]);

impl Usages {
    fn advance(
        &mut self,
        symbol: RomanSymbol,
        position: usize,
        step: fn(Usage) -> Option<Usage>,
    ) -> NumeralResult<()> {
        let slot = &mut self.0[symbol.rank()];
        *slot = step(*slot).ok_or(NumeralError::SymbolReused {
            symbol: symbol.as_char(),
            position,
        })?;
        Ok(())
    }
}

/// Convert a strict Roman numeral to its value.
///
/// ```
/// use merchant_numerals::roman::roman_to_arabic;
///
/// assert_eq!(roman_to_arabic("MCMXLIV").unwrap(), 1944);
/// assert!(roman_to_arabic("IC").is_err());
/// ```
pub fn roman_to_arabic(numeral: &str) -> NumeralResult<u32> {
    if numeral.is_empty() {
        return Err(NumeralError::EmptyNumeral);
    }
    let symbols: Vec<char> = numeral.chars().collect();
    consume(&symbols, 0, &mut Usages::default())
}

/// Value of the leading group of `rest` plus everything after it.
///
/// `offset` is the position of `rest[0]` within the whole numeral. Each call
/// consumes at least one symbol, so the recursion always terminates.
fn consume(rest: &[char], offset: usize, usages: &mut Usages) -> NumeralResult<u32> {
    let Some(&lead) = rest.first() else {
        return Ok(0);
    };
    let symbol = base_symbol(lead, offset)?;
    let run = rest.iter().take_while(|&&c| c == lead).count();
    check_repeats(symbol, run, offset)?;

    let (value, consumed) = match minuend_after(symbol, run, rest, offset)? {
        Some(minuend) => (subtract(symbol, minuend, offset, usages)?, 2),
        None => {
            usages.advance(symbol, offset, Usage::added)?;
            (run as u32 * symbol.value(), run)
        }
    };

    Ok(value + consume(&rest[consumed..], offset + consumed, usages)?)
}

fn check_repeats(symbol: RomanSymbol, run: usize, position: usize) -> NumeralResult<()> {
    let limit = if symbol.is_repeatable() { 3 } else { 1 };
    if run > limit {
        return Err(NumeralError::TooManyRepeats {
            symbol: symbol.as_char(),
            count: run,
            position,
        });
    }
    Ok(())
}

/// The symbol `lead` is subtracted from, if the numeral starts with a
/// subtraction pair.
fn minuend_after(
    lead: RomanSymbol,
    run: usize,
    rest: &[char],
    offset: usize,
) -> NumeralResult<Option<RomanSymbol>> {
    if !lead.is_subtractor() || run != 1 {
        return Ok(None);
    }
    let Some(&next) = rest.get(1) else {
        return Ok(None);
    };
    let next = base_symbol(next, offset + 1)?;
    Ok((next.rank() > lead.rank()).then_some(next))
}

fn subtract(
    subtractor: RomanSymbol,
    minuend: RomanSymbol,
    offset: usize,
    usages: &mut Usages,
) -> NumeralResult<u32> {
    if !subtractor.minuends().contains(&minuend) {
        return Err(NumeralError::IllegalMinuend {
            subtractor: subtractor.as_char(),
            minuend: minuend.as_char(),
            position: offset,
        });
    }
    usages.advance(subtractor, offset, Usage::subtracted)?;
    usages.advance(minuend, offset + 1, Usage::subtracted_from)?;
    Ok(minuend.value() - subtractor.value())
}

/// The low, mid and high symbols used to spell one decimal digit.
struct Triad {
    low: RomanSymbol,
    mid: RomanSymbol,
    high: RomanSymbol,
}

const HUNDREDS: Triad = Triad {
    low: RomanSymbol::C,
    mid: RomanSymbol::D,
    high: RomanSymbol::M,
};

const TENS: Triad = Triad {
    low: RomanSymbol::X,
    mid: RomanSymbol::L,
    high: RomanSymbol::C,
};

const ONES: Triad = Triad {
    low: RomanSymbol::I,
    mid: RomanSymbol::V,
    high: RomanSymbol::X,
};

impl Triad {
    fn spell(&self, digit: u32, out: &mut String) {
        let repeat = |symbol: RomanSymbol, times: u32, out: &mut String| {
            (0..times).for_each(|_| out.push(symbol.as_char()));
        };
        match digit {
            0 => {}
            1..=3 => repeat(self.low, digit, out),
            4 => {
                out.push(self.low.as_char());
                out.push(self.mid.as_char());
            }
            5..=8 => {
                out.push(self.mid.as_char());
                repeat(self.low, digit - 5, out);
            }
            _ => {
                out.push(self.low.as_char());
                out.push(self.high.as_char());
            }
        }
    }
}

/// Spell a value in `1..=3999` as a canonical Roman numeral.
///
/// ```
/// use merchant_numerals::roman::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(3487).unwrap(), "MMMCDLXXXVII");
/// assert!(arabic_to_roman(4000).is_err());
/// ```
pub fn arabic_to_roman(value: u32) -> NumeralResult<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(NumeralError::OutOfRange { value });
    }

    let mut numeral = String::new();
    for _ in 0..value / 1000 {
        numeral.push(RomanSymbol::M.as_char());
    }
    HUNDREDS.spell(value % 1000 / 100, &mut numeral);
    TENS.spell(value % 100 / 10, &mut numeral);
    ONES.spell(value % 10, &mut numeral);

    Ok(numeral)
}
