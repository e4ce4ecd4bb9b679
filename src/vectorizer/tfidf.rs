use indexmap::IndexMap;
use log::{debug, trace, warn};
use num::{Float, FromPrimitive};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{error::{Result, TfIdfError}, vectorizer::{corpus::Corpus, document::Document, scheme::{CombinedScheme, IdfScheme, TfScheme}, DocumentId, Scores, TermWeights, Weight}};

/// Scheme choice for one scoring run
///
/// Deserializes from kebab-case names, e.g.
/// `{"tf": "log-norm", "idf": "smooth"}` or `{"combined": "raw-standard"}`.
/// Missing fields fall back to the document and corpus defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SchemeSelection {
    pub combined: Option<CombinedScheme>,
    pub tf: Option<TfScheme>,
    pub idf: Option<IdfScheme>,
}

impl SchemeSelection {
    pub fn combined(scheme: CombinedScheme) -> Self {
        SchemeSelection { combined: Some(scheme), ..Default::default() }
    }

    pub fn pair(tf: TfScheme, idf: IdfScheme) -> Self {
        SchemeSelection { combined: None, tf: Some(tf), idf: Some(idf) }
    }

    /// A combined preset overrides the individual schemes
    pub fn resolve(&self) -> (Option<TfScheme>, Option<IdfScheme>) {
        match self.combined {
            Some(combined) => {
                let (tf, idf) = combined.get_schemes();
                (Some(tf), Some(idf))
            }
            None => (self.tf, self.idf),
        }
    }
}

/// TF-IDF calculation engine over one corpus
#[derive(Debug, Clone)]
pub struct TfIdfEngine {
    corpus: Corpus,
}

impl From<Corpus> for TfIdfEngine {
    fn from(corpus: Corpus) -> Self {
        Self::new(corpus)
    }
}

impl TfIdfEngine {
    pub fn new(corpus: Corpus) -> Self {
        TfIdfEngine { corpus }
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    /// Calculate TF-IDF scores for every document
    ///
    /// # Arguments
    /// * `combined_scheme` - preset; when given it overrides `tf_scheme` and `idf_scheme`
    /// * `tf_scheme` - TF scheme; `None` uses each document's default
    /// * `idf_scheme` - IDF scheme; `None` uses the corpus default
    ///
    /// # Returns
    /// * `Scores` - document id -> term -> tf * idf, in corpus order
    ///
    /// # Errors
    /// * `ZeroTotalTerms` from the Standard TF scheme
    /// * `MissingIdfTerm` if a document term has no IDF entry
    pub fn calculate_scores(
        &self,
        combined_scheme: Option<CombinedScheme>,
        tf_scheme: Option<TfScheme>,
        idf_scheme: Option<IdfScheme>,
    ) -> Result<Scores> {
        let selection = SchemeSelection { combined: combined_scheme, tf: tf_scheme, idf: idf_scheme };
        self.calculate_with(&selection)
    }

    /// Calculate TF-IDF scores with a `SchemeSelection`
    pub fn calculate_with(&self, selection: &SchemeSelection) -> Result<Scores> {
        let (tf_scheme, idf) = self.prepare(selection);
        let mut scores: Scores = IndexMap::with_capacity(self.corpus.documents().len());
        for doc in self.corpus.documents() {
            let weights = Self::score_document(doc, tf_scheme, &idf)?;
            Self::insert_scores(&mut scores, doc.id().to_string(), weights);
        }
        Ok(scores)
    }

    /// Same result as `calculate_with`, with documents scored in parallel
    pub fn par_calculate_scores(&self, selection: &SchemeSelection) -> Result<Scores> {
        let (tf_scheme, idf) = self.prepare(selection);
        let scored: Vec<(DocumentId, TermWeights)> = self
            .corpus
            .documents()
            .par_iter()
            .map(|doc| Self::score_document(doc, tf_scheme, &idf).map(|w| (doc.id().to_string(), w)))
            .collect::<Result<Vec<_>>>()?;

        let mut scores: Scores = IndexMap::with_capacity(scored.len());
        for (id, weights) in scored {
            Self::insert_scores(&mut scores, id, weights);
        }
        Ok(scores)
    }

    /// Calculate scores and convert them to another float type (e.g. `f32`)
    ///
    /// # Errors
    /// `WeightConversion` if a finite weight does not fit in `N`
    pub fn calculate_scores_as<N>(&self, selection: &SchemeSelection) -> Result<Scores<N>>
    where
        N: Float + FromPrimitive,
    {
        let scores = self.calculate_with(selection)?;
        scores
            .into_iter()
            .map(|(id, weights)| -> Result<_> {
                let converted = weights
                    .into_iter()
                    .map(|(term, w)| Self::convert_weight::<N>(w).map(|n| (term, n)))
                    .collect::<Result<IndexMap<_, _>>>()?;
                Ok((id, converted))
            })
            .collect()
    }

    /// resolve schemes and compute the corpus wide IDF once
    fn prepare(&self, selection: &SchemeSelection) -> (Option<TfScheme>, TermWeights) {
        let (tf_scheme, idf_scheme) = selection.resolve();
        debug!(
            "scoring {} documents: tf={}, idf={}",
            self.corpus.doc_count(),
            tf_scheme.map_or("default", TfScheme::name),
            idf_scheme.map_or("default", IdfScheme::name),
        );
        let idf = self.corpus.get_inverse_document_frequency(idf_scheme);
        (tf_scheme, idf)
    }

    fn score_document(doc: &Document, tf_scheme: Option<TfScheme>, idf: &TermWeights) -> Result<TermWeights> {
        trace!("scoring document {:?}", doc.id());
        doc.get_term_frequency(tf_scheme)?
            .into_iter()
            .map(|(term, tf)| match idf.get(&term) {
                Some(&idf_weight) => Ok((term, tf * idf_weight)),
                None => Err(TfIdfError::MissingIdfTerm { doc_id: doc.id().to_string(), term }),
            })
            .collect()
    }

    fn insert_scores(scores: &mut Scores, id: DocumentId, weights: TermWeights) {
        if scores.contains_key(&id) {
            warn!("document id {:?} scored twice, keeping the later scores", id);
        }
        scores.insert(id, weights);
    }

    fn convert_weight<N: Float + FromPrimitive>(w: Weight) -> Result<N> {
        match N::from_f64(w) {
            Some(n) if n.is_finite() || !w.is_finite() => Ok(n),
            _ => Err(TfIdfError::WeightConversion(w)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_corpus() -> Corpus {
        Corpus::new(vec![
            Document::new(["hello", "world", "hello"], "doc1"),
            Document::new(["hello", "everyone"], "doc2"),
        ])
    }

    #[test]
    fn default_schemes_are_standard() {
        let corpus = hello_corpus();
        let idf = corpus.get_inverse_document_frequency(Some(IdfScheme::Standard));
        let scores = TfIdfEngine::new(corpus).calculate_scores(None, None, None).unwrap();

        assert_eq!(scores["doc1"]["hello"], (2.0 / 3.0) * idf["hello"]);
        assert_eq!(scores["doc1"]["world"], (1.0 / 3.0) * idf["world"]);
        assert_eq!(scores["doc2"]["hello"], 0.5 * idf["hello"]);
        assert_eq!(scores["doc2"]["everyone"], 0.5 * idf["everyone"]);
    }

    #[test]
    fn monotonicity_scenario() {
        let engine = TfIdfEngine::new(hello_corpus());
        let idf = engine.corpus().get_inverse_document_frequency(None);
        assert_eq!(idf["hello"], 0.0);
        assert!(idf["world"] > 0.0);

        let scores = engine.calculate_scores(Some(CombinedScheme::Standard), None, None).unwrap();
        assert!(scores["doc1"]["hello"] < scores["doc1"]["world"]);
        assert!(scores["doc1"]["world"] < scores["doc2"]["everyone"]);
    }

    #[test]
    fn raw_standard_literal_values() {
        let engine = TfIdfEngine::new(hello_corpus());
        let scores = engine.calculate_scores(None, Some(TfScheme::Raw), Some(IdfScheme::Standard)).unwrap();
        assert_eq!(scores["doc1"]["hello"], 0.0);
        assert_eq!(scores["doc1"]["world"], 1.0 * 2.0f64.ln());
    }

    #[test]
    fn custom_schemes() {
        let corpus = Corpus::new(vec![
            Document::new(["test", "example"], "doc1"),
            Document::new(["test", "sample"], "doc2"),
        ]);
        let idf = corpus.get_inverse_document_frequency(Some(IdfScheme::Standard));
        let scores = TfIdfEngine::new(corpus)
            .calculate_scores(None, Some(TfScheme::Raw), Some(IdfScheme::Standard))
            .unwrap();
        assert_eq!(scores["doc1"]["test"], idf["test"]);
        assert_eq!(scores["doc1"]["example"], idf["example"]);
        assert_eq!(scores["doc2"]["test"], idf["test"]);
        assert_eq!(scores["doc2"]["sample"], idf["sample"]);
    }

    #[test]
    fn combined_overrides_individual_schemes() {
        let engine = TfIdfEngine::new(hello_corpus());
        let with_override = engine
            .calculate_scores(Some(CombinedScheme::RawStandard), Some(TfScheme::Binary), Some(IdfScheme::Unary))
            .unwrap();
        let plain = engine.calculate_scores(None, Some(TfScheme::Raw), Some(IdfScheme::Standard)).unwrap();
        assert_eq!(with_override, plain);
    }

    #[test]
    fn composition_holds_for_every_scheme_pair() {
        let corpus = Corpus::new(vec![
            Document::new(["a", "b", "a", "c"], "1"),
            Document::new(["b", "c", "d"], "2"),
            Document::new(["a", "d", "d", "d", "e"], "3"),
        ]);
        let engine = TfIdfEngine::new(corpus);
        for tf_scheme in TfScheme::ALL {
            for idf_scheme in IdfScheme::ALL {
                let scores = engine.calculate_scores(None, Some(tf_scheme), Some(idf_scheme)).unwrap();
                let idf = engine.corpus().get_inverse_document_frequency(Some(idf_scheme));
                assert_eq!(scores.len(), engine.corpus().documents().len());
                for doc in engine.corpus().documents() {
                    let tf = doc.get_term_frequency(Some(tf_scheme)).unwrap();
                    let doc_scores = &scores[doc.id()];
                    assert_eq!(doc_scores.len(), doc.raw_frequencies().len());
                    for (term, w) in &tf {
                        assert_eq!(doc_scores[term], w * idf[term]);
                    }
                }
            }
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let docs = (0..64)
            .map(|i| Document::new((0..(i % 7 + 1)).map(|j| format!("t{}", (i * j) % 11)), format!("d{i}")))
            .collect();
        let engine = TfIdfEngine::new(Corpus::new(docs));
        for combined in CombinedScheme::ALL {
            let selection = SchemeSelection::combined(combined);
            assert_eq!(
                engine.par_calculate_scores(&selection).unwrap(),
                engine.calculate_with(&selection).unwrap()
            );
        }
    }

    #[test]
    fn empty_corpus_has_no_scores() {
        let engine = TfIdfEngine::new(Corpus::new(Vec::new()));
        assert!(engine.calculate_scores(None, None, None).unwrap().is_empty());
    }

    #[test]
    fn empty_document_gets_empty_entry() {
        let engine = TfIdfEngine::new(Corpus::new(vec![
            Document::new(["a"], "full"),
            Document::new(Vec::<String>::new(), "empty"),
        ]));
        let scores = engine.calculate_scores(None, None, None).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores["empty"].is_empty());
    }

    #[test]
    fn duplicate_ids_keep_later_scores() {
        let engine = TfIdfEngine::new(Corpus::new(vec![
            Document::new(["a", "b"], "same"),
            Document::new(["c"], "other"),
            Document::new(["b", "b"], "same"),
        ]));
        let scores = engine.calculate_scores(None, Some(TfScheme::Raw), Some(IdfScheme::Unary)).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get_index_of("same"), Some(0));
        assert_eq!(scores["same"].len(), 1);
        assert_eq!(scores["same"]["b"], 2.0);
    }

    #[test]
    fn missing_idf_term_is_error() {
        let doc = Document::new(["known", "stray"], "d");
        let mut idf = TermWeights::new();
        idf.insert("known".to_string(), 1.0);
        assert_eq!(
            TfIdfEngine::score_document(&doc, Some(TfScheme::Raw), &idf),
            Err(TfIdfError::MissingIdfTerm { doc_id: "d".to_string(), term: "stray".to_string() })
        );
    }

    #[test]
    fn selection_serde_round_trip() {
        let selection: SchemeSelection = serde_cbor::from_slice(
            &serde_cbor::to_vec(&SchemeSelection::pair(TfScheme::LogNorm, IdfScheme::Smooth)).unwrap(),
        )
        .unwrap();
        assert_eq!(selection.resolve(), (Some(TfScheme::LogNorm), Some(IdfScheme::Smooth)));

        let mut selection = SchemeSelection::combined(CombinedScheme::DoubleNormStandard);
        selection.tf = Some(TfScheme::Binary);
        assert_eq!(selection.resolve(), (Some(TfScheme::DoubleNorm), Some(IdfScheme::Standard)));
        assert_eq!(SchemeSelection::default().resolve(), (None, None));
    }

    #[test]
    fn scores_as_f32() {
        let engine = TfIdfEngine::new(hello_corpus());
        let selection = SchemeSelection::pair(TfScheme::Raw, IdfScheme::Standard);
        let scores = engine.calculate_scores_as::<f32>(&selection).unwrap();
        assert_eq!(scores["doc1"]["world"], 2.0f64.ln() as f32);
        assert_eq!(scores["doc1"]["hello"], 0.0f32);
    }

    #[test]
    fn conversion_overflow_is_error() {
        assert_eq!(
            TfIdfEngine::convert_weight::<f32>(1e300),
            Err(TfIdfError::WeightConversion(1e300))
        );
        assert_eq!(TfIdfEngine::convert_weight::<f32>(0.25), Ok(0.25f32));
    }
}
