use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::{Result, TfIdfError}, vectorizer::{RawCount, Weight}};

/// Double normalization constant K
pub const DOUBLE_NORM_K: Weight = 0.5;

/// TF weighting scheme
/// Converts the raw count of a term inside one document into a TF weight.
/// TF weights are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TfScheme {
    /// 1.0 if the term occurs, else 0.0
    Binary,
    /// raw count
    Raw,
    /// count / total terms of the document
    #[default]
    Standard,
    /// ln(1 + count)
    LogNorm,
    /// K + (1 - K) * count / max_count with K = 0.5
    DoubleNorm,
}

impl TfScheme {
    pub const ALL: [TfScheme; 5] = [
        TfScheme::Binary,
        TfScheme::Raw,
        TfScheme::Standard,
        TfScheme::LogNorm,
        TfScheme::DoubleNorm,
    ];

    /// Calculate the TF weight
    ///
    /// # Arguments
    /// * `count` - occurrences of the term in the document
    /// * `total` - total terms in the document
    /// * `max_count` - highest raw count of any term in the document
    ///
    /// # Errors
    /// `Standard` fails with `ZeroTotalTerms` when `total == 0`.
    /// Every other variant is total.
    #[inline]
    pub fn calculate(self, count: RawCount, total: RawCount, max_count: RawCount) -> Result<Weight> {
        let weight = match self {
            TfScheme::Binary => {
                if count > 0 { 1.0 } else { 0.0 }
            }
            TfScheme::Raw => count as Weight,
            TfScheme::Standard => {
                if total == 0 {
                    return Err(TfIdfError::ZeroTotalTerms { count });
                }
                count as Weight / total as Weight
            }
            TfScheme::LogNorm => (1.0 + count as Weight).ln(),
            TfScheme::DoubleNorm => {
                if max_count == 0 {
                    0.0
                } else {
                    DOUBLE_NORM_K + (1.0 - DOUBLE_NORM_K) * (count as Weight / max_count as Weight)
                }
            }
        };
        Ok(weight)
    }

    pub fn name(self) -> &'static str {
        match self {
            TfScheme::Binary => "binary",
            TfScheme::Raw => "raw",
            TfScheme::Standard => "standard",
            TfScheme::LogNorm => "log-norm",
            TfScheme::DoubleNorm => "double-norm",
        }
    }
}

impl fmt::Display for TfScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TfScheme {
    type Err = TfIdfError;

    fn from_str(s: &str) -> Result<Self> {
        TfScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| TfIdfError::UnknownScheme { kind: "tf", name: s.to_string() })
    }
}
