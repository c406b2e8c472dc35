//! Fuzzy matching of an utterance against a fixed list of choices.
//!
//! Each candidate gets exactly one of three scores, checked in order:
//!
//! 1. the candidate contains the whole utterance: `|utterance| / |candidate|`
//! 2. the utterance contains the whole candidate: `|candidate| / |utterance|`
//! 3. otherwise, the utterance's space-separated tokens that occur inside the
//!    candidate are concatenated: `|matched| / |candidate|`, capped at 1
//!
//! Both strings are trimmed and lowercased first; lengths count characters.
//! A candidate qualifies only when its score is strictly above the threshold.

use serde::Serialize;
use serde_json::Value;

/// Threshold used when the caller has no preference.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// A candidate that scored above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceMatch {
    /// Position in the original candidate list.
    pub index: usize,
    /// The candidate as supplied (not normalized).
    pub entity: String,
    /// Score in `(threshold, 1.0]`.
    pub score: f64,
}

/// Score one candidate against an utterance.
///
/// # Examples
///
/// ```
/// use entity_recognizer::choice::score_choice;
///
/// // "new york city" contains "new york": 8 / 13.
/// assert_eq!(score_choice("New York City", "New York"), 8.0 / 13.0);
/// ```
pub fn score_choice(utterance: &str, candidate: &str) -> f64 {
    let utterance = normalize(utterance);
    let tokens: Vec<&str> = utterance.split(' ').collect();
    score_normalized(&utterance, &tokens, &normalize(candidate))
}

/// Every candidate scoring strictly above `threshold`, in candidate order.
pub fn find_all_matches<S: AsRef<str>>(
    choices: &[S],
    utterance: &str,
    threshold: f64,
) -> Vec<ChoiceMatch> {
    let utterance = normalize(utterance);
    let tokens: Vec<&str> = utterance.split(' ').collect();

    choices
        .iter()
        .enumerate()
        .filter_map(|(index, choice)| {
            let choice = choice.as_ref();
            let score = score_normalized(&utterance, &tokens, &normalize(choice));
            tracing::trace!(index, choice, score, "scored choice");
            (score > threshold).then(|| ChoiceMatch {
                index,
                entity: choice.to_string(),
                score,
            })
        })
        .collect()
}

/// The highest-scoring candidate above `threshold`; the lowest index wins ties.
///
/// # Examples
///
/// ```
/// use entity_recognizer::choice::{find_best_match, DEFAULT_THRESHOLD};
///
/// let choices = ["London", "New York", "Paris"];
/// let best = find_best_match(&choices, "new york city", DEFAULT_THRESHOLD).unwrap();
/// assert_eq!(best.entity, "New York");
/// assert_eq!(best.index, 1);
/// ```
pub fn find_best_match<S: AsRef<str>>(
    choices: &[S],
    utterance: &str,
    threshold: f64,
) -> Option<ChoiceMatch> {
    find_all_matches(choices, utterance, threshold)
        .into_iter()
        .fold(None, |best, candidate| match best {
            Some(best) if candidate.score <= best.score => Some(best),
            _ => Some(candidate),
        })
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn score_normalized(utterance: &str, tokens: &[&str], value: &str) -> f64 {
    let value_len = value.chars().count();
    let utterance_len = utterance.chars().count();

    let (numerator, denominator) = if value.contains(utterance) {
        (utterance_len, value_len)
    } else if utterance.contains(value) {
        (value_len, utterance_len)
    } else {
        let matched: usize = tokens
            .iter()
            .filter(|token| value.contains(**token))
            .map(|token| token.chars().count())
            .sum();
        // Repeated tokens can sum past the candidate's length.
        (matched.min(value_len), value_len)
    };

    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

// ── Choice lists ────────────────────────────────────────────────────────────

/// A candidate list built from any of the shapes dialogs supply choices in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choices(Vec<String>);

impl Choices {
    /// Expand a JSON value: a `|`-separated string, an array (strings kept,
    /// other values stringified), or an object (its keys, in document order).
    /// Anything else is an empty list.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::from(s.as_str()),
            Value::Array(items) => Self(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::Object(map) => Self(map.keys().cloned().collect()),
            _ => Self::default(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `"red|green|blue"` → three choices.
impl From<&str> for Choices {
    fn from(s: &str) -> Self {
        Self(s.split('|').map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Choices {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<&[&str]> for Choices {
    fn from(v: &[&str]) -> Self {
        Self(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Normalize any supported choice shape to a flat list.
pub fn expand_choices(choices: impl Into<Choices>) -> Vec<String> {
    choices.into().into_vec()
}
