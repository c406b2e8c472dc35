//! Tagged entities and their resolutions.
//!
//! An [`Entity`] is a positioned span of an utterance, produced either by an
//! upstream recognizer (LUIS-style `builtin.*` tags) or by
//! [`crate::extract`]. Entities are never mutated by this crate; every
//! operation borrows them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ── Type tags ───────────────────────────────────────────────────────────────

/// Combined date/time recognizer tag (value may carry both halves).
pub const BUILTIN_DATETIME: &str = "builtin.datetime";
/// Date-only recognizer tag.
pub const BUILTIN_DATETIME_DATE: &str = "builtin.datetime.date";
/// Time-only recognizer tag.
pub const BUILTIN_DATETIME_TIME: &str = "builtin.datetime.time";
/// Tag of entities produced by the free-text extractor.
pub const CHRONO_DURATION: &str = "chrono.duration";
/// Numeric literal tag.
pub const BUILTIN_NUMBER: &str = "builtin.number";

/// A tagged span recognized in an utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Type tag, e.g. `"builtin.datetime.date"`.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// The matched substring.
    pub text: String,
    /// Character offset of the first matched character.
    pub start_index: usize,
    /// Character offset one past the last matched character.
    pub end_index: usize,
    /// Confidence in `[0, 1]`, when the producer supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Structured interpretation of the span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

impl Entity {
    /// Create an entity with no score and no resolution.
    pub fn new(
        entity_type: impl Into<String>,
        text: impl Into<String>,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            text: text.into(),
            start_index,
            end_index,
            score: None,
            resolution: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// A date entity resolved to `date` (ISO 8601, e.g. `"2026-03-15"`).
    pub fn date(text: impl Into<String>, date: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self::new(BUILTIN_DATETIME_DATE, text, 0, len).with_resolution(Resolution::Date {
            date: date.into(),
        })
    }

    /// A time entity resolved to a partial time string (e.g. `"T09"`, `"T18:30"`).
    pub fn time(text: impl Into<String>, time: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self::new(BUILTIN_DATETIME_TIME, text, 0, len).with_resolution(Resolution::Time {
            time: time.into(),
            comment: None,
        })
    }
}

/// The structured interpretation attached to an entity, one case per kind.
///
/// Serialized with a `resolution_type` tag carrying the recognizer's type
/// name. Tags this crate does not understand deserialize to
/// [`Resolution::Other`] and are ignored during resolution. `Other` keeps
/// neither the original tag nor its fields, so it serializes back as
/// `"resolution_type": "Other"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resolution_type")]
pub enum Resolution {
    #[serde(rename = "builtin.datetime.date")]
    Date { date: String },

    /// `comment` holds side annotations such as `"ampm"`; they are not
    /// folded into the hour.
    #[serde(rename = "builtin.datetime.time")]
    Time {
        time: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },

    /// Combined recognizer output; either half may be missing and a single
    /// value may carry both as `<date>T<time>`.
    #[serde(rename = "builtin.datetime")]
    DateTime {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },

    /// Fully resolved span from the free-text extractor.
    #[serde(rename = "chrono.duration")]
    Duration {
        start: DateTime<FixedOffset>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<DateTime<FixedOffset>>,
        #[serde(
            rename = "ref",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        reference: Option<DateTime<FixedOffset>>,
    },

    #[serde(rename = "builtin.number")]
    Number { value: String },

    #[serde(other)]
    Other,
}

// ── Lookup ──────────────────────────────────────────────────────────────────

/// Return the first entity tagged `entity_type`, scanning in order.
pub fn find_entity<'a>(entities: &'a [Entity], entity_type: &str) -> Option<&'a Entity> {
    entities.iter().find(|e| e.entity_type == entity_type)
}

/// Return every entity tagged `entity_type`, in order.
pub fn find_all_entities<'a>(entities: &'a [Entity], entity_type: &str) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|e| e.entity_type == entity_type)
        .collect()
}
