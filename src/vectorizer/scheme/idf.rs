use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::{Result, TfIdfError}, vectorizer::{RawCount, Weight}};

/// IDF weighting scheme
/// Converts the document frequency of a term into an IDF weight.
/// Depending on the variant the weight may be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdfScheme {
    /// always 1.0
    Unary,
    /// ln(N / df)
    #[default]
    Standard,
    /// ln((N + 1) / (df + 1))
    Smooth,
    /// ln(max_df / (df + 1))
    Max,
    /// ln((N - df) / df)
    Prob,
}

impl IdfScheme {
    pub const ALL: [IdfScheme; 5] = [
        IdfScheme::Unary,
        IdfScheme::Standard,
        IdfScheme::Smooth,
        IdfScheme::Max,
        IdfScheme::Prob,
    ];

    /// Calculate the IDF weight
    ///
    /// # Arguments
    /// * `doc_count` - number of documents in the corpus
    /// * `term_count` - number of documents containing the term
    /// * `max_count` - highest document frequency of any term in the corpus
    ///
    /// Degenerate inputs (zero document frequency, zero maximum, empty corpus)
    /// give 0.0 instead of an infinite or NaN weight.
    #[inline]
    pub fn calculate(self, doc_count: RawCount, term_count: RawCount, max_count: RawCount) -> Weight {
        match self {
            IdfScheme::Unary => 1.0,
            IdfScheme::Standard => {
                if term_count == 0 || doc_count == 0 {
                    return 0.0;
                }
                (doc_count as Weight / term_count as Weight).ln()
            }
            IdfScheme::Smooth => {
                ((doc_count as Weight + 1.0) / (term_count as Weight + 1.0)).ln()
            }
            IdfScheme::Max => {
                if term_count == 0 || max_count == 0 {
                    return 0.0;
                }
                (max_count as Weight / (term_count as Weight + 1.0)).ln()
            }
            IdfScheme::Prob => {
                if term_count == 0 || doc_count <= term_count {
                    return 0.0;
                }
                ((doc_count - term_count) as Weight / term_count as Weight).ln()
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IdfScheme::Unary => "unary",
            IdfScheme::Standard => "standard",
            IdfScheme::Smooth => "smooth",
            IdfScheme::Max => "max",
            IdfScheme::Prob => "prob",
        }
    }
}

impl fmt::Display for IdfScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdfScheme {
    type Err = TfIdfError;

    fn from_str(s: &str) -> Result<Self> {
        IdfScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| TfIdfError::UnknownScheme { kind: "idf", name: s.to_string() })
    }
}
