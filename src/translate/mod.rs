// Translation resolution pipeline
//
// Tiers are tried in order until one produces a translation:
// - online: full-sentence online translation (en <-> hi only)
// - dictionary: exact full-sentence match in the phrase dictionary
// - wordwise: word-by-word resolution with per-word online escalation
// The orchestrator runs the tiers and applies grammar correction.

pub mod online;
pub mod orchestrator;
pub mod wordwise;

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

pub use online::{GoogleTranslator, HttpConnectivityProbe};
pub use orchestrator::TranslationOrchestrator;
pub use wordwise::{ResolvedWord, WordSource, WordwiseResolver, WordwiseTranslation};

use crate::error::Result;
use crate::language::LanguagePair;

/// Online machine-translation capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnlineTranslator: Send + Sync {
    /// Translate text for the given direction
    async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String>;
}

/// Reports whether the online translation service can currently be reached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

/// One bounded online attempt. Failures, timeouts and empty results all
/// come back as `None` so the caller can fall through to the next tier.
pub(crate) async fn attempt_online(
    online: &dyn OnlineTranslator,
    text: &str,
    pair: LanguagePair,
    limit: Duration,
) -> Option<String> {
    match tokio::time::timeout(limit, online.translate(text, pair)).await {
        Ok(Ok(translation)) if !translation.trim().is_empty() => Some(translation.trim().to_string()),
        Ok(Ok(_)) => {
            warn!("Online translation of '{}' returned nothing", text);
            None
        }
        Ok(Err(e)) => {
            warn!("Online translation of '{}' failed: {}", text, e);
            None
        }
        Err(_) => {
            warn!("Online translation of '{}' timed out after {:?}", text, limit);
            None
        }
    }
}
