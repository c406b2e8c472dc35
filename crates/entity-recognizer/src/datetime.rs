//! Merge tagged date/time fragments into a single timestamp.
//!
//! Upstream recognizers emit dates and times as separate entities with
//! partial values (`"2026-03-15"`, `"T09"`, `"T18:30"`). This module picks
//! the first date and the first time it sees, fills in whatever is missing,
//! and composes one absolute instant.
//!
//! # Precedence
//!
//! A `chrono.duration` resolution is already an absolute instant. The first
//! one encountered ends the scan and its `start` is returned unchanged, even
//! if date or time fragments precede it.
//!
//! # Limitations
//!
//! AM/PM annotations carried in a time resolution's `comment` are not folded
//! into the hour; time values are read as 24-hour clock strings.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use regex::Regex;

use crate::clock::{Clock, SystemClock};
use crate::entity::{Entity, Resolution};

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Resolve entities to a timestamp using the system clock.
///
/// `timezone_offset` is the number of hours to add to local time to reach
/// UTC (`5` for UTC-05:00). When `None`, the system's local offset is used.
///
/// Returns `None` when no date, time or duration fragment is present.
pub fn resolve_time(
    entities: &[Entity],
    timezone_offset: Option<i32>,
) -> Option<DateTime<FixedOffset>> {
    resolve_time_with_clock(entities, timezone_offset, &SystemClock)
}

/// Resolve entities to a timestamp, reading "today" and the default offset
/// from `clock`.
///
/// # Examples
///
/// ```
/// use entity_recognizer::clock::FixedClock;
/// use entity_recognizer::datetime::resolve_time_with_clock;
/// use entity_recognizer::entity::Entity;
///
/// let clock = FixedClock::parse("2026-03-15T08:00:00-05:00").unwrap();
/// let entities = vec![Entity::time("half six", "T18:30")];
/// let resolved = resolve_time_with_clock(&entities, None, &clock).unwrap();
/// assert_eq!(resolved.to_rfc3339(), "2026-03-15T18:30:00-05:00");
/// ```
pub fn resolve_time_with_clock(
    entities: &[Entity],
    timezone_offset: Option<i32>,
    clock: &dyn Clock,
) -> Option<DateTime<FixedOffset>> {
    let mut fragments = Fragments::default();

    for entity in entities {
        let Some(resolution) = &entity.resolution else {
            continue;
        };
        match resolution {
            Resolution::Date { date } => fragments.absorb(date, FragmentKind::Date),
            Resolution::Time { time, .. } => fragments.absorb(time, FragmentKind::Time),
            Resolution::DateTime { date, time } => {
                if let Some(date) = date {
                    fragments.absorb(date, FragmentKind::Date);
                }
                if let Some(time) = time {
                    fragments.absorb(time, FragmentKind::Time);
                }
            }
            Resolution::Duration { start, .. } => {
                tracing::debug!(
                    entity = %entity.text,
                    start = %start,
                    "duration fragment short-circuits resolution"
                );
                return Some(*start);
            }
            Resolution::Number { .. } | Resolution::Other => {}
        }
    }

    fragments.compose(timezone_offset, clock)
}

/// Build the timestamp string `<date><time><sign><HH>:00`.
///
/// `offset_hours` follows the "hours to add to reach UTC" convention, so a
/// positive offset yields a `-` sign.
pub fn compose_timestamp(date: &str, time: &str, offset_hours: i32) -> String {
    let sign = if offset_hours > 0 { '-' } else { '+' };
    format!("{date}{time}{sign}{:02}:00", offset_hours.unsigned_abs())
}

/// Expand a `T`-prefixed partial time to `THH:MM:SS`.
///
/// `T09` gains `:00:00`, `T18:30` gains `:00`. The part-of-day mnemonics
/// `TMO`, `TAF`, `TEV` and `TNI` map to 08:00, 14:00, 18:00 and 20:00. Any
/// other shape is returned unchanged.
pub fn normalize_time(token: &str) -> String {
    match token {
        "TMO" => "T08:00:00".to_string(),
        "TAF" => "T14:00:00".to_string(),
        "TEV" => "T18:00:00".to_string(),
        "TNI" => "T20:00:00".to_string(),
        _ => match token.chars().count() {
            3 => format!("{token}:00:00"),
            6 => format!("{token}:00"),
            _ => token.to_string(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentKind {
    Date,
    Time,
}

/// First-wins accumulator for the date and time halves.
#[derive(Debug, Default)]
struct Fragments {
    date: Option<String>,
    time: Option<String>,
}

impl Fragments {
    /// Split a resolution value on `T` and fill empty slots.
    ///
    /// A bare value (no `T`) is a date for date resolutions and a time for
    /// time resolutions. Date halves that are not `YYYY-MM-DD` (for example
    /// `XXXX-WXX-1`) are dropped.
    fn absorb(&mut self, value: &str, kind: FragmentKind) {
        let value = value.trim();
        let (date_part, time_part) = match value.split_once('T') {
            Some((head, tail)) => (Some(head), Some(tail)),
            None => match kind {
                FragmentKind::Date => (Some(value), None),
                FragmentKind::Time => (None, Some(value)),
            },
        };

        if self.date.is_none() {
            if let Some(date) = date_part.filter(|d| ISO_DATE_RE.is_match(d)) {
                self.date = Some(date.to_string());
            }
        }
        if self.time.is_none() {
            if let Some(time) = time_part.filter(|t| !t.is_empty()) {
                self.time = Some(normalize_time(&format!("T{time}")));
            }
        }
    }

    fn compose(
        self,
        timezone_offset: Option<i32>,
        clock: &dyn Clock,
    ) -> Option<DateTime<FixedOffset>> {
        if self.date.is_none() && self.time.is_none() {
            return None;
        }

        let Some(time) = self.time else {
            // Date only: midnight UTC, as an ISO date string without offset reads.
            let date = self.date?;
            let midnight = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight).fixed_offset());
        };

        let date = self
            .date
            .unwrap_or_else(|| clock.today().format("%Y-%m-%d").to_string());
        let offset = timezone_offset.unwrap_or_else(|| clock.timezone_offset_hours());
        let composed = compose_timestamp(&date, &time, offset);

        match DateTime::parse_from_rfc3339(&composed) {
            Ok(dt) => Some(dt),
            Err(e) => {
                tracing::debug!(
                    timestamp = %composed,
                    error = %e,
                    "composed timestamp did not parse"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entity::{
        BUILTIN_DATETIME, BUILTIN_DATETIME_DATE, BUILTIN_DATETIME_TIME, BUILTIN_NUMBER,
        CHRONO_DURATION,
    };

    fn clock() -> FixedClock {
        // Sunday, March 15 2026, 08:00 EDT
        FixedClock::parse("2026-03-15T08:00:00-04:00").unwrap()
    }

    fn resolve(entities: &[Entity], offset: Option<i32>) -> Option<String> {
        resolve_time_with_clock(entities, offset, &clock()).map(|dt| dt.to_rfc3339())
    }

    // ── normalize_time ──────────────────────────────────────────────────

    #[test]
    fn test_normalize_hour_only() {
        assert_eq!(normalize_time("T09"), "T09:00:00");
    }

    #[test]
    fn test_normalize_hour_minute() {
        assert_eq!(normalize_time("T18:30"), "T18:30:00");
    }

    #[test]
    fn test_normalize_full_time_unchanged() {
        assert_eq!(normalize_time("T18:30:15"), "T18:30:15");
    }

    #[test]
    fn test_normalize_unexpected_length_passes_through() {
        assert_eq!(normalize_time("T9"), "T9");
        assert_eq!(normalize_time("T9:30"), "T9:30");
    }

    #[test]
    fn test_normalize_part_of_day_mnemonics() {
        assert_eq!(normalize_time("TMO"), "T08:00:00");
        assert_eq!(normalize_time("TAF"), "T14:00:00");
        assert_eq!(normalize_time("TEV"), "T18:00:00");
        assert_eq!(normalize_time("TNI"), "T20:00:00");
    }

    // ── compose_timestamp ───────────────────────────────────────────────

    #[test]
    fn test_compose_positive_offset_gets_minus_sign() {
        assert_eq!(
            compose_timestamp("2026-03-15", "T09:00:00", 5),
            "2026-03-15T09:00:00-05:00"
        );
    }

    #[test]
    fn test_compose_negative_offset_gets_plus_sign() {
        assert_eq!(
            compose_timestamp("2026-03-15", "T09:00:00", -9),
            "2026-03-15T09:00:00+09:00"
        );
    }

    #[test]
    fn test_compose_zero_offset() {
        assert_eq!(
            compose_timestamp("2026-03-15", "T09:00:00", 0),
            "2026-03-15T09:00:00+00:00"
        );
    }

    // ── resolve_time_with_clock ─────────────────────────────────────────

    #[test]
    fn test_empty_entities_resolve_to_none() {
        assert_eq!(resolve(&[], None), None);
    }

    #[test]
    fn test_entities_without_temporal_fragments_resolve_to_none() {
        let entities = vec![
            Entity::new(BUILTIN_NUMBER, "3", 0, 1)
                .with_resolution(Resolution::Number { value: "3".into() }),
            Entity::new("builtin.geography.city", "paris", 2, 7).with_resolution(Resolution::Other),
            Entity::new(BUILTIN_DATETIME_DATE, "soon", 8, 12),
        ];
        assert_eq!(resolve(&entities, None), None);
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let entities = vec![Entity::date("july 1st", "2026-07-01")];
        assert_eq!(
            resolve(&entities, Some(5)).as_deref(),
            Some("2026-07-01T00:00:00+00:00")
        );
    }

    #[test]
    fn test_time_only_uses_clock_date_and_offset() {
        let entities = vec![Entity::time("9am", "T09")];
        assert_eq!(
            resolve(&entities, None).as_deref(),
            Some("2026-03-15T09:00:00-04:00")
        );
    }

    #[test]
    fn test_time_only_with_explicit_offset() {
        let entities = vec![Entity::time("6:30pm", "T18:30")];
        assert_eq!(
            resolve(&entities, Some(-2)).as_deref(),
            Some("2026-03-15T18:30:00+02:00")
        );
    }

    #[test]
    fn test_date_and_time_combine() {
        let entities = vec![
            Entity::date("friday", "2026-03-20"),
            Entity::time("noon", "T12"),
        ];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-20T12:00:00+00:00")
        );
    }

    #[test]
    fn test_first_date_wins() {
        let entities = vec![
            Entity::date("friday", "2026-03-20"),
            Entity::date("saturday", "2026-03-21"),
        ];
        assert_eq!(
            resolve(&entities, None).as_deref(),
            Some("2026-03-20T00:00:00+00:00")
        );
    }

    #[test]
    fn test_first_time_wins() {
        let entities = vec![
            Entity::time("9am", "T09"),
            Entity::time("5pm", "T17"),
        ];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-15T09:00:00+00:00")
        );
    }

    #[test]
    fn test_time_ahead_of_date_still_merges() {
        let entities = vec![
            Entity::time("9am", "T09"),
            Entity::date("friday", "2026-03-20"),
        ];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-20T09:00:00+00:00")
        );
    }

    #[test]
    fn test_combined_date_value_fills_both_slots() {
        let entities = vec![Entity::new(BUILTIN_DATETIME, "friday at 9", 0, 11).with_resolution(
            Resolution::DateTime {
                date: Some("2026-03-20T09".into()),
                time: None,
            },
        )];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-20T09:00:00+00:00")
        );
    }

    #[test]
    fn test_weekday_pattern_date_is_ignored() {
        // Recurring weekday pattern: date half is dropped, time half kept.
        let entities = vec![Entity::date("mondays at 9", "XXXX-WXX-1T09")];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-15T09:00:00+00:00")
        );
    }

    #[test]
    fn test_part_of_day_time() {
        let entities = vec![Entity::time("this evening", "TEV")];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-15T18:00:00+00:00")
        );
    }

    #[test]
    fn test_ampm_comment_is_not_applied() {
        let entities = vec![Entity::new(BUILTIN_DATETIME_TIME, "9 pm", 0, 4).with_resolution(
            Resolution::Time {
                time: "T09".into(),
                comment: Some("ampm".into()),
            },
        )];
        assert_eq!(
            resolve(&entities, Some(0)).as_deref(),
            Some("2026-03-15T09:00:00+00:00")
        );
    }

    #[test]
    fn test_malformed_time_resolves_to_none() {
        let entities = vec![Entity::time("around nine-ish", "T9ish")];
        assert_eq!(resolve(&entities, Some(0)), None);
    }

    #[test]
    fn test_duration_short_circuits() {
        let start = DateTime::parse_from_rfc3339("2026-04-01T10:00:00+00:00").unwrap();
        let entities = vec![
            Entity::date("friday", "2026-03-20"),
            Entity::new(CHRONO_DURATION, "april 1st at 10", 0, 15).with_resolution(
                Resolution::Duration {
                    start,
                    end: None,
                    reference: None,
                },
            ),
            Entity::time("9am", "T09"),
        ];
        assert_eq!(resolve(&entities, Some(0)).as_deref(), Some("2026-04-01T10:00:00+00:00"));
    }

    #[test]
    fn test_resolution_is_idempotent_under_fixed_clock() {
        let entities = vec![Entity::time("9am", "T09")];
        let first = resolve(&entities, None);
        let second = resolve(&entities, None);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
