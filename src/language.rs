use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoliError;

/// One of the three languages the service translates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// High-resource source language
    #[serde(rename = "en")]
    English,
    /// High-resource regional language
    #[serde(rename = "hi")]
    Hindi,
    /// Low-resource dialect
    Gadhwali,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 3] = [Self::English, Self::Hindi, Self::Gadhwali];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Gadhwali => "gadhwali",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Gadhwali => "Gadhwali",
        }
    }

    /// Languages the online translation service covers.
    pub fn is_high_resource(&self) -> bool {
        matches!(self, Self::English | Self::Hindi)
    }

    /// Targets whose word order gets repaired after word-level translation.
    pub fn requires_correction(&self) -> bool {
        matches!(self, Self::Hindi | Self::Gadhwali)
    }

    /// Comma separated list of accepted codes, for error messages.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = BoliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::English),
            "hi" => Ok(Self::Hindi),
            "gadhwali" => Ok(Self::Gadhwali),
            "" => Err(BoliError::InvalidInput("Language code is required".to_string())),
            other => Err(BoliError::InvalidInput(format!(
                "Invalid language '{}'. Must be one of: {}",
                other,
                Self::valid_codes()
            ))),
        }
    }
}

/// Ordered (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self { source, target }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.target, self.source)
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// Both sides are served by the online translation service.
    pub fn is_online_eligible(&self) -> bool {
        self.source.is_high_resource() && self.target.is_high_resource()
    }

    /// Every ordered pair of distinct languages.
    pub fn all() -> Vec<LanguagePair> {
        let mut pairs = Vec::with_capacity(6);
        for source in LanguageCode::ALL {
            for target in LanguageCode::ALL {
                if source != target {
                    pairs.push(Self::new(source, target));
                }
            }
        }
        pairs
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}
