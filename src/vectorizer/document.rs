use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::Result, vectorizer::{scheme::TfScheme, DocumentId, RawCount, Term, TermCounts, TermWeights}};

/// Document 構造体
/// One document: its id, its terms as supplied, and the raw count of each
/// distinct term.
///
/// Counts are built eagerly in `new`, so `total_terms` always equals the sum of
/// `raw_frequencies`.
///
/// # Examples
/// ```
/// use tfidf_schemes::{Document, TfScheme};
/// let doc = Document::new(["hello", "world", "hello"], "doc1");
/// assert_eq!(doc.total_terms(), 3);
///
/// let tf = doc.get_term_frequency(Some(TfScheme::Raw)).unwrap();
/// assert_eq!(tf["hello"], 2.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "DocumentData", into = "DocumentData")]
pub struct Document {
    id: DocumentId,
    terms: Vec<Term>,
    raw_frequencies: TermCounts,
    total_terms: RawCount,
    default_tf_scheme: TfScheme,
}

/// Serialized form of a `Document`
/// Only the supplied data is stored; counts are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct DocumentData {
    id: DocumentId,
    terms: Vec<Term>,
    #[serde(default)]
    default_tf_scheme: TfScheme,
}

impl From<DocumentData> for Document {
    fn from(data: DocumentData) -> Self {
        Document::new(data.terms, data.id).with_default_scheme(data.default_tf_scheme)
    }
}

impl From<Document> for DocumentData {
    fn from(doc: Document) -> Self {
        DocumentData {
            id: doc.id,
            terms: doc.terms,
            default_tf_scheme: doc.default_tf_scheme,
        }
    }
}

impl Document {
    /// Create a document from already tokenized terms
    ///
    /// # Arguments
    /// * `terms` - terms in document order; no normalization is applied
    /// * `id` - document id
    pub fn new<I, T>(terms: I, id: impl Into<DocumentId>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        let terms: Vec<Term> = terms.into_iter().map(Into::into).collect();
        let mut raw_frequencies: TermCounts = IndexMap::new();
        for term in &terms {
            *raw_frequencies.entry(term.clone()).or_insert(0) += 1;
        }
        let total_terms = terms.len() as RawCount;
        Document {
            id: id.into(),
            terms,
            raw_frequencies,
            total_terms,
            default_tf_scheme: TfScheme::default(),
        }
    }

    /// Create a document by splitting `text` on whitespace
    pub fn from_text(text: &str, id: impl Into<DocumentId>) -> Self {
        Self::new(text.split_whitespace(), id)
    }

    /// Replace the scheme used when `get_term_frequency` is called with `None`
    pub fn with_default_scheme(mut self, scheme: TfScheme) -> Self {
        self.default_tf_scheme = scheme;
        self
    }

    /// Calculate the TF weight of every distinct term
    ///
    /// # Arguments
    /// * `tf_scheme` - scheme to apply; `None` uses the document default
    ///
    /// # Returns
    /// * `TermWeights` - one weight per distinct term, in first-occurrence order
    pub fn get_term_frequency(&self, tf_scheme: Option<TfScheme>) -> Result<TermWeights> {
        let scheme = tf_scheme.unwrap_or(self.default_tf_scheme);
        let max_count = self.max_raw_count();
        self.raw_frequencies
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(term, &count)| {
                scheme
                    .calculate(count, self.total_terms, max_count)
                    .map(|weight| (term.clone(), weight))
            })
            .collect()
    }
}

/// Accessors
impl Document {
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn raw_frequencies(&self) -> &TermCounts {
        &self.raw_frequencies
    }

    #[inline]
    pub fn total_terms(&self) -> RawCount {
        self.total_terms
    }

    #[inline]
    pub fn default_scheme(&self) -> TfScheme {
        self.default_tf_scheme
    }

    /// Raw count of `term`, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> RawCount {
        self.raw_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Highest raw count of any term, 1 for an empty document
    #[inline]
    pub fn max_raw_count(&self) -> RawCount {
        self.raw_frequencies.values().copied().max().unwrap_or(1)
    }

    /// Distinct terms in first-occurrence order
    pub fn unique_terms(&self) -> impl Iterator<Item = &str> {
        self.raw_frequencies.keys().map(String::as_str)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_terms == 0
    }
}
