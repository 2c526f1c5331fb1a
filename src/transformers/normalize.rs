//! Surface normalization used when merging label and document files.
use super::Transform;
use crate::corpus::Document;

/// Lowercases every sentence.
#[derive(Debug, Default)]
pub struct CaseFold;

impl Transform for CaseFold {
    fn transform_own(&self, doc: Document) -> Document {
        let label = doc.label();
        let sentences = doc
            .into_sentences()
            .into_iter()
            .map(|sentence| sentence.to_lowercase())
            .collect();
        Document::new(label, sentences)
    }
}

/// Restores `-lrb-`/`-rrb-` bracket placeholders (either case) to literal
/// `(`/`)`.
#[derive(Debug, Default)]
pub struct RestoreBrackets;

impl Transform for RestoreBrackets {
    fn transform_own(&self, doc: Document) -> Document {
        let label = doc.label();
        let sentences = doc
            .into_sentences()
            .into_iter()
            .map(|sentence| {
                sentence
                    .replace("-lrb-", "(")
                    .replace("-rrb-", ")")
                    .replace("-LRB-", "(")
                    .replace("-RRB-", ")")
            })
            .collect();
        Document::new(label, sentences)
    }
}
