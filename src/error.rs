use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfIdfError {
    /// Standard TF divides by the document length
    #[error("Division by zero: document has no terms (count={count})")]
    ZeroTotalTerms { count: u64 },

    #[error("IDF missing for term {term:?} of document {doc_id:?}")]
    MissingIdfTerm { doc_id: String, term: String },

    #[error("Unknown {kind} scheme: {name:?}")]
    UnknownScheme { kind: &'static str, name: String },

    #[error("Duplicate document id: {0:?}")]
    DuplicateDocumentId(String),

    #[error("Document has no terms: {0:?}")]
    EmptyDocument(String),

    #[error("Weight {0} cannot be represented in the requested type")]
    WeightConversion(f64),
}

pub type Result<T> = std::result::Result<T, TfIdfError>;
