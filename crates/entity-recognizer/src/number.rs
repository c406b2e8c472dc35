//! Numeric literal extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::entity::{find_entity, Entity, Resolution, BUILTIN_NUMBER};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?(?:\d+(?:\.\d+)?|\.\d+)").unwrap());

/// Parse the first signed integer or decimal found in `text`.
///
/// # Examples
///
/// ```
/// use entity_recognizer::number::parse_number;
///
/// assert_eq!(parse_number("about -2.5 degrees"), Some(-2.5));
/// assert_eq!(parse_number("a dozen"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let found = NUMBER_RE.find(text.trim())?;
    found.as_str().parse().ok()
}

/// Parse the first `builtin.number` entity, preferring its resolved value
/// over its matched text.
pub fn parse_number_entity(entities: &[Entity]) -> Option<f64> {
    let entity = find_entity(entities, BUILTIN_NUMBER)?;
    match &entity.resolution {
        Some(Resolution::Number { value }) => parse_number(value),
        _ => parse_number(&entity.text),
    }
}
