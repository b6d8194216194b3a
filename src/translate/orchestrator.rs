use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::online::{GoogleTranslator, HttpConnectivityProbe};
use super::{attempt_online, ConnectivityProbe, OnlineTranslator, WordwiseResolver};
use crate::config::Config;
use crate::dictionary::{load_csv, DictionaryStore};
use crate::error::{BoliError, Result};
use crate::grammar::GrammarCorrectors;
use crate::language::{LanguageCode, LanguagePair};

/// Online service plus the probe that gates it.
struct OnlineTier {
    translator: Arc<dyn OnlineTranslator>,
    probe: Arc<dyn ConnectivityProbe>,
}

/// Decides, per request, which translation source to trust.
pub struct TranslationOrchestrator {
    dictionary: Arc<DictionaryStore>,
    online: Option<OnlineTier>,
    correctors: GrammarCorrectors,
    request_timeout: Duration,
    probe_timeout: Duration,
}

impl TranslationOrchestrator {
    /// Offline orchestrator using only the dictionary and grammar correction.
    pub fn new(dictionary: Arc<DictionaryStore>, correctors: GrammarCorrectors) -> Self {
        Self {
            dictionary,
            online: None,
            correctors,
            request_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(3),
        }
    }

    pub fn with_online(
        mut self,
        translator: Arc<dyn OnlineTranslator>,
        probe: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        self.online = Some(OnlineTier { translator, probe });
        self
    }

    pub fn with_timeouts(mut self, request_timeout: Duration, probe_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self.probe_timeout = probe_timeout;
        self
    }

    /// Build the full pipeline from configuration, loading the dictionary.
    ///
    /// Fails when the dictionary data is missing or malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = load_csv(
            &config.dictionary.csv_path,
            config.dictionary.include_builtin_lexicon,
        )?;
        let store = Arc::new(DictionaryStore::new(dictionary));

        let request_timeout = Duration::from_secs(config.online.request_timeout_secs);
        let probe_timeout = Duration::from_secs(config.online.probe_timeout_secs);

        let mut orchestrator = Self::new(store, GrammarCorrectors::default())
            .with_timeouts(request_timeout, probe_timeout);

        if config.online.enabled {
            let translator = GoogleTranslator::new(&config.online.endpoint, request_timeout)?;
            let probe = HttpConnectivityProbe::new(&config.online.probe_url, probe_timeout)?;
            orchestrator = orchestrator.with_online(Arc::new(translator), Arc::new(probe));
            info!("Online translation enabled via {}", config.online.endpoint);
        } else {
            info!("Online translation disabled, using dictionary only");
        }

        Ok(orchestrator)
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    /// Validate raw request fields, then translate.
    pub async fn translate_codes(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(BoliError::InvalidInput("Text is required".to_string()));
        }
        let source = parse_language(source, "source")?;
        let target = parse_language(target, "target")?;
        self.translate(text, source, target).await
    }

    pub async fn translate(
        &self,
        sentence: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String> {
        if sentence.trim().is_empty() {
            return Err(BoliError::InvalidInput(
                "Sentence, source language and target language are required".to_string(),
            ));
        }

        let pair = LanguagePair::new(source, target);
        info!("Translating from {} to {}: {}", source, target, sentence);

        if pair.is_identity() {
            return Ok(sentence.to_string());
        }

        let online_eligible = pair.is_online_eligible();
        let mut online_available = false;

        if online_eligible {
            match &self.online {
                Some(tier) => {
                    online_available = self.check_connectivity(tier).await;
                    if online_available {
                        let translation = attempt_online(
                            tier.translator.as_ref(),
                            sentence,
                            pair,
                            self.request_timeout,
                        )
                        .await;
                        if let Some(translation) = translation {
                            info!("Online translation succeeded: {}", translation);
                            return Ok(translation);
                        }
                    } else {
                        info!("No connection to online translator, using dictionary");
                    }
                }
                None => info!("Online translator not available, using dictionary"),
            }
        }

        // Hold one snapshot for the whole request
        let dictionary = self.dictionary.snapshot();

        // Full-sentence entries are stored already in target word order
        if let Some(translation) = dictionary.lookup(pair, sentence) {
            info!("Found exact match in dictionary: {}", translation);
            return Ok(translation.to_string());
        }

        let online = self.online.as_ref().map(|tier| tier.translator.as_ref());
        let resolver = WordwiseResolver::new(&dictionary, online, self.request_timeout);
        let resolved = resolver
            .resolve(sentence, pair, online_eligible, online_available)
            .await;

        if resolved.words.is_empty() {
            return Err(BoliError::TranslationFailure(format!(
                "No translation produced for '{}'",
                sentence
            )));
        }

        match self.correctors.for_target(target) {
            Some(corrector) => Ok(corrector.correct(&resolved.text)),
            None => Ok(resolved.text),
        }
    }

    async fn check_connectivity(&self, tier: &OnlineTier) -> bool {
        tokio::time::timeout(self.probe_timeout, tier.probe.is_reachable())
            .await
            .unwrap_or(false)
    }
}

fn parse_language(code: &str, role: &str) -> Result<LanguageCode> {
    if code.trim().is_empty() {
        return Err(BoliError::InvalidInput(format!(
            "{} language is required",
            capitalize(role)
        )));
    }
    code.parse().map_err(|_| {
        BoliError::InvalidInput(format!(
            "Invalid {} language '{}'. Must be one of: {}",
            role,
            code.trim(),
            LanguageCode::valid_codes()
        ))
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
