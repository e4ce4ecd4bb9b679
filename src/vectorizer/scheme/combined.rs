use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::{Result, TfIdfError}, vectorizer::scheme::{IdfScheme, TfScheme}};

/// Named (TF, IDF) preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombinedScheme {
    #[default]
    Standard,
    RawStandard,
    DoubleNormStandard,
    LogNormStandard,
}

impl CombinedScheme {
    pub const ALL: [CombinedScheme; 4] = [
        CombinedScheme::Standard,
        CombinedScheme::RawStandard,
        CombinedScheme::DoubleNormStandard,
        CombinedScheme::LogNormStandard,
    ];

    #[inline]
    pub fn get_schemes(self) -> (TfScheme, IdfScheme) {
        match self {
            CombinedScheme::Standard => (TfScheme::Standard, IdfScheme::Standard),
            CombinedScheme::RawStandard => (TfScheme::Raw, IdfScheme::Standard),
            CombinedScheme::DoubleNormStandard => (TfScheme::DoubleNorm, IdfScheme::Standard),
            CombinedScheme::LogNormStandard => (TfScheme::LogNorm, IdfScheme::Standard),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CombinedScheme::Standard => "standard",
            CombinedScheme::RawStandard => "raw-standard",
            CombinedScheme::DoubleNormStandard => "double-norm-standard",
            CombinedScheme::LogNormStandard => "log-norm-standard",
        }
    }
}

impl fmt::Display for CombinedScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CombinedScheme {
    type Err = TfIdfError;

    fn from_str(s: &str) -> Result<Self> {
        CombinedScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| TfIdfError::UnknownScheme { kind: "combined", name: s.to_string() })
    }
}
