//! Free-text time extraction.
//!
//! Wraps a [`TemporalParser`] and turns its first match into a
//! `chrono.duration` [`Entity`]. The entity's score is a coverage ratio
//! (matched characters over utterance characters), not a linguistic
//! confidence.
//!
//! [`extract_time`] reports parser failures as [`Extraction::Failed`];
//! [`recognize_time`] and friends log them and return `None`, so no parser
//! error reaches the caller of the convenience functions.

use chrono::{DateTime, FixedOffset, Utc};

use crate::clock::{Clock, SystemClock};
use crate::datetime::{resolve_time, resolve_time_with_clock};
use crate::entity::{Entity, Resolution, CHRONO_DURATION};
use crate::error::RecognizerError;
use crate::phrase::{PhraseParser, TemporalParser};

/// Outcome of one extraction call.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The parser found a phrase; the entity describes its first match.
    Found(Entity),
    /// The parser ran and found nothing.
    NotFound,
    /// The parser failed; the error is the diagnostic.
    Failed(RecognizerError),
}

impl Extraction {
    /// Collapse to the found entity, logging a failure.
    pub fn into_entity(self) -> Option<Entity> {
        match self {
            Extraction::Found(entity) => Some(entity),
            Extraction::NotFound => None,
            Extraction::Failed(error) => {
                tracing::warn!(%error, "error recognizing time");
                None
            }
        }
    }
}

/// Run `parser` over `utterance` and build an entity from its first match.
pub fn extract_time(
    parser: &dyn TemporalParser,
    utterance: &str,
    reference: DateTime<Utc>,
) -> Extraction {
    let matches = match parser.parse(utterance, reference) {
        Ok(matches) => matches,
        Err(error) => return Extraction::Failed(error),
    };

    let Some(first) = matches.into_iter().next() else {
        return Extraction::NotFound;
    };

    let matched_len = first.text.chars().count();
    let utterance_len = utterance.chars().count();
    let score = if utterance_len == 0 {
        0.0
    } else {
        matched_len as f64 / utterance_len as f64
    };

    let entity = Entity::new(
        CHRONO_DURATION,
        first.text,
        first.index,
        first.index + matched_len,
    )
    .with_score(score)
    .with_resolution(Resolution::Duration {
        start: first.start,
        end: first.end,
        reference: first.reference,
    });

    Extraction::Found(entity)
}

/// Find the first temporal phrase in `utterance` with the default
/// [`PhraseParser`], anchored at `reference` (or now).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use entity_recognizer::extract::recognize_time;
///
/// let anchor = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
/// let entity = recognize_time("see you tomorrow at noon?", Some(anchor)).unwrap();
/// assert_eq!(entity.text, "tomorrow at noon");
/// assert_eq!(entity.start_index, 8);
/// ```
pub fn recognize_time(utterance: &str, reference: Option<DateTime<Utc>>) -> Option<Entity> {
    recognize_time_with(&PhraseParser::default(), &SystemClock, utterance, reference)
}

/// Like [`recognize_time`], with an explicit parser and clock.
pub fn recognize_time_with(
    parser: &dyn TemporalParser,
    clock: &dyn Clock,
    utterance: &str,
    reference: Option<DateTime<Utc>>,
) -> Option<Entity> {
    let reference = reference.unwrap_or_else(|| clock.now_utc());
    extract_time(parser, utterance, reference).into_entity()
}

/// Recognize a time in raw text and resolve it to a timestamp.
pub fn parse_time_text(utterance: &str) -> Option<DateTime<FixedOffset>> {
    let entity = recognize_time(utterance, None)?;
    resolve_time(std::slice::from_ref(&entity), None)
}

/// Like [`parse_time_text`], with an explicit parser and clock.
pub fn parse_time_text_with(
    parser: &dyn TemporalParser,
    clock: &dyn Clock,
    utterance: &str,
    timezone_offset: Option<i32>,
) -> Option<DateTime<FixedOffset>> {
    let entity = recognize_time_with(parser, clock, utterance, None)?;
    resolve_time_with_clock(std::slice::from_ref(&entity), timezone_offset, clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Result;
    use crate::phrase::{ParsedMatch, ParserOptions};
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    struct FailingParser;

    impl TemporalParser for FailingParser {
        fn parse(&self, _text: &str, _reference: DateTime<Utc>) -> Result<Vec<ParsedMatch>> {
            Err(RecognizerError::Parser("grammar table corrupt".to_string()))
        }
    }

    /// Returns its canned matches regardless of input.
    struct CannedParser(Vec<ParsedMatch>);

    impl TemporalParser for CannedParser {
        fn parse(&self, _text: &str, _reference: DateTime<Utc>) -> Result<Vec<ParsedMatch>> {
            Ok(self.0.clone())
        }
    }

    fn canned(text: &str, index: usize, start: &str) -> ParsedMatch {
        ParsedMatch {
            text: text.to_string(),
            index,
            start: DateTime::parse_from_rfc3339(start).unwrap(),
            end: None,
            reference: None,
        }
    }

    #[test]
    fn test_extract_builds_duration_entity() {
        let parser = PhraseParser::default();
        let Extraction::Found(entity) = extract_time(&parser, "see you tomorrow", anchor()) else {
            panic!("expected a match");
        };
        assert_eq!(entity.entity_type, CHRONO_DURATION);
        assert_eq!(entity.text, "tomorrow");
        assert_eq!(entity.start_index, 8);
        assert_eq!(entity.end_index, 16);
        assert_eq!(entity.score, Some(0.5));
        match entity.resolution {
            Some(Resolution::Duration { start, end, reference }) => {
                assert_eq!(start.to_rfc3339(), "2026-03-16T00:00:00+00:00");
                assert_eq!(end, None);
                assert_eq!(reference, Some(anchor().fixed_offset()));
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_extract_full_coverage_scores_one() {
        let parser = PhraseParser::default();
        let entity = extract_time(&parser, "next week", anchor()).into_entity().unwrap();
        assert_eq!(entity.score, Some(1.0));
        let Some(Resolution::Duration { end, .. }) = entity.resolution else {
            panic!("expected duration");
        };
        assert!(end.is_some());
    }

    #[test]
    fn test_extract_not_found() {
        let parser = PhraseParser::default();
        assert_eq!(
            extract_time(&parser, "order a pizza", anchor()),
            Extraction::NotFound
        );
    }

    #[test]
    fn test_extract_takes_parser_first_match_not_leftmost() {
        let parser = CannedParser(vec![
            canned("friday", 18, "2026-03-20T00:00:00+00:00"),
            canned("monday", 5, "2026-03-16T00:00:00+00:00"),
        ]);
        let entity = extract_time(&parser, "from monday until friday", anchor())
            .into_entity()
            .unwrap();
        assert_eq!(entity.text, "friday");
        assert_eq!(entity.start_index, 18);
        assert_eq!(entity.end_index, 24);
    }

    #[test]
    fn test_parser_failure_is_reported_not_raised() {
        let outcome = extract_time(&FailingParser, "tomorrow", anchor());
        assert!(matches!(outcome, Extraction::Failed(RecognizerError::Parser(_))));
        assert_eq!(outcome.into_entity(), None);
    }

    #[test]
    fn test_invalid_timezone_degrades_to_none() {
        let parser = PhraseParser::new(ParserOptions {
            timezone: "Not/AZone".to_string(),
            ..Default::default()
        });
        let clock = FixedClock::new(anchor().fixed_offset());
        assert_eq!(recognize_time_with(&parser, &clock, "tomorrow", None), None);
    }

    #[test]
    fn test_recognize_defaults_reference_to_clock() {
        let clock = FixedClock::parse("2026-06-01T09:00:00+00:00").unwrap();
        let entity =
            recognize_time_with(&PhraseParser::default(), &clock, "tomorrow", None).unwrap();
        let Some(Resolution::Duration { start, .. }) = entity.resolution else {
            panic!("expected duration");
        };
        assert_eq!(start.to_rfc3339(), "2026-06-02T00:00:00+00:00");
    }

    #[test]
    fn test_parse_time_text_resolves_duration_start() {
        let clock = FixedClock::parse("2026-03-15T12:00:00+00:00").unwrap();
        let resolved =
            parse_time_text_with(&PhraseParser::default(), &clock, "call me in 2 hours", None)
                .unwrap();
        assert_eq!(resolved.to_rfc3339(), "2026-03-15T14:00:00+00:00");
    }

    #[test]
    fn test_parse_time_text_without_phrase() {
        let clock = FixedClock::parse("2026-03-15T12:00:00+00:00").unwrap();
        assert_eq!(
            parse_time_text_with(&PhraseParser::default(), &clock, "hello there", None),
            None
        );
    }

    #[test]
    fn test_empty_utterance() {
        let parser = PhraseParser::default();
        assert_eq!(extract_time(&parser, "", anchor()), Extraction::NotFound);
    }
}
