//! Unknown-word substitution.
//!
//! Rewrites every out-of-vocabulary token to a placeholder. The plain
//! variant collapses everything to `_UNK_`; the typed variant first tries to
//! classify the token as a numeric, time or date literal and uses a
//! type-specific placeholder.
use itertools::Itertools;

use super::Transform;
use crate::corpus::Document;
use crate::filtering::{Filter, VocabularyFilter};

pub const UNK: &str = "_UNK_";
pub const NUM: &str = "_NUM_";
pub const TIME: &str = "_TIME_";
pub const DATE: &str = "_DATE_";

fn split_digits(s: &str, sep: char) -> Option<Vec<&str>> {
    let parts: Vec<&str> = s.split(sep).collect();
    let all_digits = parts
        .iter()
        .all(|p| !p.is_empty() && p.len() <= 2 && p.bytes().all(|b| b.is_ascii_digit()));
    if all_digits {
        Some(parts)
    } else {
        None
    }
}

/// Parseable as a floating-point number.
fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

/// `HH:MM`, optionally `-`-prefixed, or a leading digit with an `am`/`pm`
/// suffix.
fn is_time(token: &str) -> bool {
    let starts_with_digit = token.chars().next().map_or(false, |c| c.is_ascii_digit());
    if starts_with_digit && (token.ends_with("am") || token.ends_with("pm")) {
        return true;
    }

    let clock = token.strip_prefix('-').unwrap_or(token);
    match split_digits(clock, ':').as_deref() {
        Some([hours, minutes]) => {
            hours.parse::<u8>().unwrap() <= 23 && minutes.parse::<u8>().unwrap() <= 59
        }
        _ => false,
    }
}

/// `MM/DD/YY` or `MM/DD`.
fn is_date(token: &str) -> bool {
    match split_digits(token, '/').as_deref() {
        Some([month, day]) | Some([month, day, _]) => {
            let month = month.parse::<u8>().unwrap();
            let day = day.parse::<u8>().unwrap();
            (1..=12).contains(&month) && (1..=31).contains(&day)
        }
        _ => false,
    }
}

/// Placeholder for an out-of-vocabulary token, in classification priority
/// order: numeric, time, date, then the generic unknown.
fn classify(token: &str) -> &'static str {
    if is_numeric(token) {
        NUM
    } else if is_time(token) {
        TIME
    } else if is_date(token) {
        DATE
    } else {
        UNK
    }
}

/// Apply a per-token replacement to every sentence. `None` keeps the token.
fn substitute(doc: Document, replacement: impl Fn(&str) -> Option<&'static str>) -> Document {
    let label = doc.label();
    let sentences = doc
        .into_sentences()
        .into_iter()
        .map(|sentence| {
            sentence
                .split_whitespace()
                .map(|token| replacement(token).unwrap_or(token))
                .join(" ")
        })
        .collect();
    Document::new(label, sentences)
}

/// Plain substituter: any out-of-vocabulary token becomes `_UNK_`.
pub struct UnkSubstituter {
    vocab: VocabularyFilter,
}

impl UnkSubstituter {
    pub fn new(vocab: VocabularyFilter) -> Self {
        Self { vocab }
    }
}

impl Transform for UnkSubstituter {
    fn transform_own(&self, doc: Document) -> Document {
        substitute(doc, |token| {
            if self.vocab.detect(token) {
                None
            } else {
                Some(UNK)
            }
        })
    }
}

/// Typed substituter: out-of-vocabulary tokens get a type-aware placeholder.
pub struct TypedUnkSubstituter {
    vocab: VocabularyFilter,
}

impl TypedUnkSubstituter {
    pub fn new(vocab: VocabularyFilter) -> Self {
        Self { vocab }
    }
}

impl Transform for TypedUnkSubstituter {
    fn transform_own(&self, doc: Document) -> Document {
        substitute(doc, |token| {
            if self.vocab.detect(token) {
                None
            } else {
                Some(classify(token))
            }
        })
    }
}
