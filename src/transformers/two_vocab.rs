//! Two-vocabulary substitution.
//!
//! Tokens in the known vocabulary pass through unchanged, tokens in the
//! replaceable vocabulary collapse to a generic `UNK` marker, and tokens in
//! neither are dropped from the sentence. Sentences left empty by dropping
//! are omitted; the document keeps its label framing either way.
use itertools::Itertools;

use super::Transform;
use crate::corpus::Document;
use crate::filtering::{Filter, VocabularyFilter};

pub const UNK_MARKER: &str = "UNK";

pub struct DualVocabSubstituter {
    known: VocabularyFilter,
    replaceable: VocabularyFilter,
}

impl DualVocabSubstituter {
    pub fn new(known: VocabularyFilter, replaceable: VocabularyFilter) -> Self {
        Self { known, replaceable }
    }
}

impl Transform for DualVocabSubstituter {
    fn transform_own(&self, doc: Document) -> Document {
        let label = doc.label();
        let sentences = doc
            .into_sentences()
            .into_iter()
            .filter_map(|sentence| {
                let tokens: Vec<&str> = sentence
                    .split_whitespace()
                    .filter_map(|token| {
                        if self.known.detect(token) {
                            Some(token)
                        } else if self.replaceable.detect(token) {
                            Some(UNK_MARKER)
                        } else {
                            None
                        }
                    })
                    .collect();
                if tokens.is_empty() {
                    None
                } else {
                    Some(tokens.iter().join(" "))
                }
            })
            .collect();
        Document::new(label, sentences)
    }
}
