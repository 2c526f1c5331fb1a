use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sentiment label.
///
/// Valid values live in `0..=4`: the fine-grained 5-class space, of which the
/// 3-class (`{0, 2}` after remapping) and binary (`{0, 1}`) spaces are
/// subsets. Construction rejects anything outside of `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(u8);

impl Label {
    /// Build from an already 0-indexed label value.
    pub fn from_raw(value: i64) -> Result<Self, Error> {
        if (0..=4).contains(&value) {
            Ok(Label(value as u8))
        } else {
            Err(Error::LabelDomain(value))
        }
    }

    /// Build from a 1-indexed star rating (Yelp convention, 1..=5).
    pub fn from_star(star: i64) -> Result<Self, Error> {
        if (1..=5).contains(&star) {
            Ok(Label((star - 1) as u8))
        } else {
            Err(Error::LabelDomain(star))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("invalid label: {:?}", s)))?;
        Label::from_raw(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled document: one [Label] and its sentences, in order.
///
/// Sentences hold no embedded newline (they map to one line each in corpus
/// files) and are non-empty. A document may end up with zero sentences after
/// aggressive token dropping; its framing is still kept on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    label: Label,
    sentences: Vec<String>,
}

impl Document {
    pub fn new(label: Label, sentences: Vec<String>) -> Self {
        Self { label, sentences }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Get a reference to the document's sentences.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<String> {
        self.sentences
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_domain() {
        assert!(Label::from_raw(0).is_ok());
        assert!(Label::from_raw(4).is_ok());
        assert!(Label::from_raw(5).is_err());
        assert!(Label::from_raw(-1).is_err());
    }

    #[test]
    fn label_from_star() {
        assert_eq!(Label::from_star(1).unwrap().value(), 0);
        assert_eq!(Label::from_star(5).unwrap().value(), 4);
        assert!(Label::from_star(0).is_err());
        assert!(Label::from_star(6).is_err());
    }

    #[test]
    fn label_parse() {
        let l: Label = "3".parse().unwrap();
        assert_eq!(l.value(), 3);
        assert!("3.5".parse::<Label>().is_err());
        assert!("foo".parse::<Label>().is_err());
    }

    #[test]
    fn document_accessors() {
        let doc = Document::new(
            Label::from_raw(2).unwrap(),
            vec!["a sentence".to_string(), "another one".to_string()],
        );
        assert_eq!(doc.label().value(), 2);
        assert_eq!(doc.sentences().len(), 2);
        assert!(!doc.is_empty());
    }
}
