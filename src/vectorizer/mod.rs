pub mod corpus;
pub mod document;
pub mod scheme;
pub mod tfidf;

use indexmap::IndexMap;

pub type Term = String;
pub type DocumentId = String;
pub type RawCount = u64;
pub type Weight = f64;

/// Term -> raw count, in first-occurrence order
pub type TermCounts = IndexMap<Term, RawCount>;
/// Term -> weight, in the same order as the counts it was derived from
pub type TermWeights = IndexMap<Term, Weight>;
/// Document id -> term weights, in corpus order
pub type Scores<N = Weight> = IndexMap<DocumentId, IndexMap<Term, N>>;
