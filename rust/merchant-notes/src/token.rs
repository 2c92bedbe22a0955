//! Splitting notes into tokens and sorting tokens into lexical categories.
//!
//! A token is a maximal run of ASCII letters, digits, `_` and `?`. Everything
//! else separates tokens, so a question mark only stands alone when it is set
//! apart: `"how much is glob ?"` ends in `"?"`, `"how much is glob?"` in
//! `"glob?"`.

use std::fmt;

use merchant_numerals::{RomanSymbol, roman_to_arabic};

/// The question mark token.
pub const QUESTION_MARK: &str = "?";

/// Words that can never be part of an intergalactic numeral.
const RESERVED: [&str; 4] = ["Credits", "how", "much", "is"];

/// Split a note into tokens, dropping empty ones.
pub fn tokenize(note: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in note.chars() {
        if is_token_char(ch) {
            word.push(ch);
        } else if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

/// Whether `ch` belongs to a token rather than separating two.
pub fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '?'
}

/// The lexical category of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Is,
    Credits,
    How,
    Much,
    Many,
    QuestionMark,
    /// Only ASCII digits.
    Arabic,
    /// A capitalized word such as `Silver`.
    Commodity,
    /// One of `I V X L C D M`.
    BaseRoman,
    /// A valid Roman numeral of two or more symbols.
    CompositeRoman,
    /// A lowercase word that is not reserved.
    Intergalactic,
    /// Anything else.
    Unrecognized,
}

impl Category {
    pub const COUNT: usize = 12;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Is,
        Category::Credits,
        Category::How,
        Category::Much,
        Category::Many,
        Category::QuestionMark,
        Category::Arabic,
        Category::Commodity,
        Category::BaseRoman,
        Category::CompositeRoman,
        Category::Intergalactic,
        Category::Unrecognized,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Is => "'is'",
            Category::Credits => "'Credits'",
            Category::How => "'how'",
            Category::Much => "'much'",
            Category::Many => "'many'",
            Category::QuestionMark => "'?'",
            Category::Arabic => "arabic numeral",
            Category::Commodity => "commodity",
            Category::BaseRoman => "base Roman numeral",
            Category::CompositeRoman => "composite Roman numeral",
            Category::Intergalactic => "intergalactic numeral",
            Category::Unrecognized => "unrecognized",
        };
        write!(f, "{name}")
    }
}

/// Categorize a token. The tests run in a fixed order and the first match
/// wins.
pub fn categorize(token: &str) -> Category {
    match token {
        "is" => return Category::Is,
        "Credits" => return Category::Credits,
        "how" => return Category::How,
        "much" => return Category::Much,
        "many" => return Category::Many,
        QUESTION_MARK => return Category::QuestionMark,
        _ => {}
    }

    if is_arabic(token) {
        Category::Arabic
    } else if is_commodity(token) {
        Category::Commodity
    } else if is_base_roman(token) {
        Category::BaseRoman
    } else if token.len() > 1 && roman_to_arabic(token).is_ok() {
        Category::CompositeRoman
    } else if is_intergalactic(token) {
        Category::Intergalactic
    } else {
        Category::Unrecognized
    }
}

/// Whether `token` may be part of an intergalactic numeral cluster.
///
/// Note that `many` passes: it is only recognized on its own when it starts
/// a token run, so a cluster that reaches it absorbs it.
pub fn is_intergalactic(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_lowercase())
        && !RESERVED.contains(&token)
}

fn is_arabic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn is_commodity(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    token.len() >= 2
        && first.is_ascii_uppercase()
        && chars.all(|c| c.is_ascii_lowercase())
        && token != "Credits"
}

fn is_base_roman(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next().and_then(RomanSymbol::from_char), chars.next()),
        (Some(_), None)
    )
}
