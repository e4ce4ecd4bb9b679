use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{error::{Result, TfIdfError}, vectorizer::{document::Document, scheme::IdfScheme, RawCount, TermCounts, TermWeights}};

/// keep documents and the number of documents each term appears in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CorpusData", into = "CorpusData")]
pub struct Corpus {
    documents: Vec<Document>,
    doc_count: RawCount,
    /// term -> number of documents containing it
    document_frequencies: TermCounts,
    default_idf_scheme: IdfScheme,
}

#[derive(Serialize, Deserialize)]
struct CorpusData {
    documents: Vec<Document>,
    #[serde(default)]
    default_idf_scheme: IdfScheme,
}

impl From<CorpusData> for Corpus {
    fn from(data: CorpusData) -> Self {
        Corpus::new(data.documents).with_default_scheme(data.default_idf_scheme)
    }
}

impl From<Corpus> for CorpusData {
    fn from(corpus: Corpus) -> Self {
        CorpusData {
            documents: corpus.documents,
            default_idf_scheme: corpus.default_idf_scheme,
        }
    }
}

impl Corpus {
    /// Create a corpus and count document frequencies
    ///
    /// Duplicate ids and empty documents are accepted; each one is logged.
    /// Use `try_new` to reject them.
    pub fn new(documents: Vec<Document>) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id()) {
                warn!("duplicate document id {:?}: later scores replace earlier ones", doc.id());
            }
            if doc.is_empty() {
                warn!("document {:?} has no terms", doc.id());
            }
        }

        let document_frequencies = Self::count_document_frequencies(&documents);
        let doc_count = documents.len() as RawCount;
        debug!(
            "corpus built: {} documents, {} distinct terms",
            doc_count,
            document_frequencies.len()
        );
        Corpus {
            documents,
            doc_count,
            document_frequencies,
            default_idf_scheme: IdfScheme::default(),
        }
    }

    /// Create a corpus, rejecting duplicate document ids and documents without terms
    pub fn try_new(documents: Vec<Document>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if doc.is_empty() {
                return Err(TfIdfError::EmptyDocument(doc.id().to_string()));
            }
            if !seen.insert(doc.id()) {
                return Err(TfIdfError::DuplicateDocumentId(doc.id().to_string()));
            }
        }
        Ok(Self::new(documents))
    }

    /// Replace the scheme used when `get_inverse_document_frequency` is called with `None`
    pub fn with_default_scheme(mut self, scheme: IdfScheme) -> Self {
        self.default_idf_scheme = scheme;
        self
    }

    /// each distinct term of a document counts once
    fn count_document_frequencies(documents: &[Document]) -> TermCounts {
        let mut document_frequencies: TermCounts = IndexMap::new();
        for doc in documents {
            for (term, &count) in doc.raw_frequencies() {
                if count == 0 {
                    continue;
                }
                *document_frequencies.entry(term.clone()).or_insert(0) += 1;
            }
        }
        document_frequencies
    }

    /// Calculate the IDF weight of every term in the corpus
    ///
    /// # Arguments
    /// * `idf_scheme` - scheme to apply; `None` uses the corpus default
    ///
    /// # Returns
    /// * `TermWeights` - one weight per term present in at least one document
    pub fn get_inverse_document_frequency(&self, idf_scheme: Option<IdfScheme>) -> TermWeights {
        let scheme = idf_scheme.unwrap_or(self.default_idf_scheme);
        let max_count = self.max_document_frequency();
        self.document_frequencies
            .iter()
            .map(|(term, &term_count)| {
                (term.clone(), scheme.calculate(self.doc_count, term_count, max_count))
            })
            .collect()
    }
}

/// Accessors
impl Corpus {
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn doc_count(&self) -> RawCount {
        self.doc_count
    }

    #[inline]
    pub fn document_frequencies(&self) -> &TermCounts {
        &self.document_frequencies
    }

    /// Number of documents containing `term`, 0 if absent
    #[inline]
    pub fn document_frequency(&self, term: &str) -> RawCount {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Highest document frequency, 0 for a corpus without terms
    #[inline]
    pub fn max_document_frequency(&self) -> RawCount {
        self.document_frequencies.values().copied().max().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.document_frequencies.len()
    }

    #[inline]
    pub fn default_scheme(&self) -> IdfScheme {
        self.default_idf_scheme
    }

    /// First document with the given id
    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id() == id)
    }
}
