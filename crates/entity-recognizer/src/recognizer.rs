//! Configured entry point bundling options, a parser and a clock.
//!
//! The free functions in [`crate::datetime`], [`crate::extract`] and
//! [`crate::choice`] take every setting as an argument. [`EntityRecognizer`]
//! holds a validated [`RecognizerConfig`] and supplies those settings, so a
//! dialog layer can load one config and call the operations directly.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::choice::{self, ChoiceMatch, DEFAULT_THRESHOLD};
use crate::clock::{Clock, SystemClock};
use crate::datetime::resolve_time_with_clock;
use crate::entity::Entity;
use crate::error::{RecognizerError, Result};
use crate::extract::{extract_time, Extraction};
use crate::phrase::{parse_timezone, ParserOptions, PhraseParser, TemporalParser};

/// Recognizer settings. Every field has a default, so a partial JSON
/// document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Minimum (exclusive) score for a choice to match.
    pub threshold: f64,
    /// Hours to add to local time to reach UTC; `None` uses the clock's offset.
    pub timezone_offset: Option<i32>,
    /// Options for the bundled phrase parser.
    pub parser: ParserOptions,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            timezone_offset: None,
            parser: ParserOptions::default(),
        }
    }
}

impl RecognizerConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Examples
    ///
    /// ```
    /// use entity_recognizer::recognizer::RecognizerConfig;
    ///
    /// let config = RecognizerConfig::from_json(r#"{"threshold": 0.5}"#).unwrap();
    /// assert_eq!(config.threshold, 0.5);
    /// assert_eq!(config.parser.timezone, "UTC");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RecognizerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RecognizerError::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if let Some(offset) = self.timezone_offset {
            if !(-14..=14).contains(&offset) {
                return Err(RecognizerError::InvalidConfig(format!(
                    "timezone_offset must be within [-14, 14] hours, got {offset}"
                )));
            }
        }
        if self.parser.max_phrase_words == 0 {
            return Err(RecognizerError::InvalidConfig(
                "parser.max_phrase_words must be at least 1".to_string(),
            ));
        }
        parse_timezone(&self.parser.timezone)?;
        Ok(())
    }
}

/// Recognizer operations with configured defaults.
#[derive(Debug, Clone)]
pub struct EntityRecognizer<P = PhraseParser, C = SystemClock> {
    config: RecognizerConfig,
    parser: P,
    clock: C,
}

impl EntityRecognizer {
    /// Build a recognizer with the bundled parser and the system clock.
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        let parser = PhraseParser::new(config.parser.clone());
        Ok(Self {
            config,
            parser,
            clock: SystemClock,
        })
    }
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        let config = RecognizerConfig::default();
        Self {
            parser: PhraseParser::new(config.parser.clone()),
            config,
            clock: SystemClock,
        }
    }
}

impl<P: TemporalParser, C: Clock> EntityRecognizer<P, C> {
    /// Assemble a recognizer from explicit parts. `config.parser` is ignored
    /// in favor of `parser`.
    pub fn with_parts(config: RecognizerConfig, parser: P, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parser,
            clock,
        })
    }

    /// Swap the clock, keeping config and parser.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> EntityRecognizer<P, C2> {
        EntityRecognizer {
            config: self.config,
            parser: self.parser,
            clock,
        }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Merge date/time fragments using the configured timezone offset.
    pub fn resolve_time(&self, entities: &[Entity]) -> Option<DateTime<FixedOffset>> {
        resolve_time_with_clock(entities, self.config.timezone_offset, &self.clock)
    }

    /// Extract the first temporal phrase, keeping a parser failure visible.
    pub fn extract_time(&self, utterance: &str, reference: Option<DateTime<Utc>>) -> Extraction {
        let reference = reference.unwrap_or_else(|| self.clock.now_utc());
        extract_time(&self.parser, utterance, reference)
    }

    /// Extract the first temporal phrase; failures are logged and yield `None`.
    pub fn recognize_time(
        &self,
        utterance: &str,
        reference: Option<DateTime<Utc>>,
    ) -> Option<Entity> {
        self.extract_time(utterance, reference).into_entity()
    }

    /// Recognize and resolve a time in raw text.
    pub fn parse_time_text(&self, utterance: &str) -> Option<DateTime<FixedOffset>> {
        let entity = self.recognize_time(utterance, None)?;
        self.resolve_time(std::slice::from_ref(&entity))
    }

    /// Every choice scoring above the configured threshold.
    pub fn find_all_matches<S: AsRef<str>>(
        &self,
        choices: &[S],
        utterance: &str,
    ) -> Vec<ChoiceMatch> {
        choice::find_all_matches(choices, utterance, self.config.threshold)
    }

    /// The best choice scoring above the configured threshold.
    pub fn find_best_match<S: AsRef<str>>(
        &self,
        choices: &[S],
        utterance: &str,
    ) -> Option<ChoiceMatch> {
        choice::find_best_match(choices, utterance, self.config.threshold)
    }
}
