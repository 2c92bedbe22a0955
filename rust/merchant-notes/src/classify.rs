//! Deciding which shape a note has.
//!
//! The decision runs on a finished [`NoteScan`] and tries each shape in a
//! fixed order: query, base numeral, composite numeral, commodity. A note
//! that matches none of them is [`Note::Unknown`]; that is an outcome, not an
//! error.

use merchant_numerals::{RomanSymbol, roman_to_arabic};

use crate::note::{
    BaseNumeralDeclaration, CommodityDeclaration, CompositeNumeralDeclaration, Note, Query,
    UnknownNote,
};
use crate::scan::NoteScan;
use crate::token::{Category, QUESTION_MARK};

/// Classify a raw note. Pure: the same input always gives an equal note.
pub fn classify(note: &str) -> Note {
    classify_scan(note, &NoteScan::scan(note))
}

/// Classify a note that has already been scanned.
pub fn classify_scan(raw: &str, scan: &NoteScan) -> Note {
    query(raw, scan)
        .or_else(|| base_numeral(raw, scan))
        .or_else(|| composite_numeral(raw, scan))
        .or_else(|| commodity(raw, scan))
        .unwrap_or_else(|| {
            Note::Unknown(UnknownNote {
                raw: raw.to_string(),
                tokens: scan.tokens().to_vec(),
            })
        })
}

fn query(raw: &str, scan: &NoteScan) -> Option<Note> {
    if scan.last_token() != Some(QUESTION_MARK) {
        return None;
    }

    let commodity = scan
        .first_commodity()
        .map(|position| scan.tokens()[position].clone());
    let intergal = scan
        .clusters()
        .first()
        .map(|cluster| scan.cluster_tokens(cluster).to_vec())
        .unwrap_or_default();

    Some(Note::Query(Query {
        raw: raw.to_string(),
        tokens: scan.tokens().to_vec(),
        commodity,
        intergal,
    }))
}

/// `<word> is <base roman>`
fn base_numeral(raw: &str, scan: &NoteScan) -> Option<Note> {
    let shaped = scan.len() == 3
        && single_cluster(scan, 0)
        && scan.tally(Category::Is).is_once_at(1)
        && scan.tally(Category::BaseRoman).is_once_at(2)
        && scan.roman_position() == Some(2);
    if !shaped {
        return None;
    }

    let tokens = scan.tokens();
    let roman = tokens[2].chars().next().and_then(RomanSymbol::from_char)?;
    Some(Note::BaseNumeral(BaseNumeralDeclaration {
        raw: raw.to_string(),
        intergal: tokens[0].clone(),
        roman,
    }))
}

/// `<words> is <composite roman>`
fn composite_numeral(raw: &str, scan: &NoteScan) -> Option<Note> {
    let n = scan.len();
    let shaped = n > 3
        && single_cluster(scan, n - 3)
        && scan.tally(Category::Is).is_once_at(n - 2)
        && scan.tally(Category::CompositeRoman).is_once_at(n - 1)
        && scan.roman_position() == Some(n - 1);
    if !shaped {
        return None;
    }

    let tokens = scan.tokens();
    let roman = tokens[n - 1].clone();
    let value = roman_to_arabic(&roman).ok()?;
    Some(Note::CompositeNumeral(CompositeNumeralDeclaration {
        raw: raw.to_string(),
        intergal: tokens[..n - 2].to_vec(),
        roman,
        value,
    }))
}

/// `<words> <Commodity> is <arabic> Credits`
fn commodity(raw: &str, scan: &NoteScan) -> Option<Note> {
    let n = scan.len();
    let shaped = n > 4
        && single_cluster(scan, n - 5)
        && scan.first_commodity() == Some(n - 4)
        && scan.tally(Category::Is).is_once_at(n - 3)
        && scan.tally(Category::Arabic).is_once_at(n - 2)
        && scan.tally(Category::Credits).is_once_at(n - 1);
    if !shaped {
        return None;
    }

    let tokens = scan.tokens();
    // Amounts too large for a u64 leave the note unclassified.
    let credits = tokens[n - 2].parse().ok()?;
    Some(Note::Commodity(CommodityDeclaration {
        raw: raw.to_string(),
        intergal: tokens[..n - 4].to_vec(),
        commodity: tokens[n - 4].clone(),
        credits,
    }))
}

/// Exactly one cluster, running from the first token through `end`.
fn single_cluster(scan: &NoteScan, end: usize) -> bool {
    scan.cluster_count() == 1 && scan.clusters().first().is_some_and(|c| c.spans(0, end))
}
