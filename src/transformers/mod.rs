/*! Document transformers.

Transforms rewrite document content sentence by sentence: unknown-word
substitution in its three variants, case folding and bracket-placeholder
restoration. Label framing is never touched by a transform.

!*/
mod normalize;
mod transform;
mod two_vocab;
mod unknown;

pub use normalize::CaseFold;
pub use normalize::RestoreBrackets;
pub use transform::Transform;
pub use two_vocab::DualVocabSubstituter;
pub use unknown::TypedUnkSubstituter;
pub use unknown::UnkSubstituter;
