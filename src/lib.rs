/// This crate computes TF-IDF weights over a collection of pre-tokenized documents
/// with interchangeable TF and IDF weighting schemes.
pub mod error;
pub mod vectorizer;

/// Error type shared by every fallible operation of this crate.
///
/// - `ZeroTotalTerms`: Standard TF applied to a document with no terms
/// - `MissingIdfTerm`: a document term has no IDF entry (corpus/document mismatch)
/// - `UnknownScheme`: a scheme identifier could not be parsed
pub use error::{Result, TfIdfError};

/// Document
/// Holds one document's terms, in the order supplied, together with the raw
/// count of each distinct term and the total number of terms.
///
/// Counts are computed once when the document is built. A document never changes
/// afterwards; build a new one to change its terms.
///
/// TF weights are derived on demand with `get_term_frequency`, using either the
/// given `TfScheme` or the document's default (Standard unless configured).
pub use vectorizer::document::Document;

/// Corpus
/// Owns a collection of documents and the number of documents in which each term
/// appears (document frequency).
///
/// Duplicate terms inside one document count once. Document ids are not checked
/// by `Corpus::new`; use `Corpus::try_new` to reject duplicate ids and empty
/// documents up front.
///
/// IDF weights are derived on demand with `get_inverse_document_frequency`.
pub use vectorizer::corpus::Corpus;

/// TF-IDF Calculation Engine
/// Combines a corpus with TF and IDF schemes into per-document, per-term weights.
///
/// The IDF mapping is computed once per call and shared by every document.
/// A rayon based `par_calculate_scores` gives the same result in parallel.
pub use vectorizer::tfidf::{SchemeSelection, TfIdfEngine};

/// Weighting schemes
/// - `TfScheme`: Binary, Raw, Standard, LogNorm, DoubleNorm
/// - `IdfScheme`: Unary, Standard, Smooth, Max, Prob
/// - `CombinedScheme`: named (TF, IDF) presets
///
/// Every scheme is a stateless value. Identifiers parse with `FromStr` and
/// serialize in kebab-case (`log-norm`, `raw-standard`, ...).
pub use vectorizer::scheme::{CombinedScheme, IdfScheme, TfScheme};

pub use vectorizer::{DocumentId, RawCount, Scores, Term, TermCounts, TermWeights, Weight};
