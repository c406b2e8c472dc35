//! Natural-language date/time phrase scanning.
//!
//! [`TemporalParser`] is the seam between the free-text extractor and
//! whatever recognizes temporal phrases inside an utterance. The bundled
//! [`PhraseParser`] scans an utterance word by word, tries the longest
//! window first at each position, and resolves windows against a
//! deterministic grammar. It never reads the system clock; the caller
//! provides the reference instant.
//!
//! # Grammar
//!
//! **Passthrough**: RFC 3339 timestamps and ISO 8601 dates (`2026-03-15`)
//!
//! **Anchored**: `now`, `today`, `tonight`, `tomorrow`, `yesterday`,
//! `day after tomorrow`, `day before yesterday`
//!
//! **Weekdays**: `friday` (next occurrence, today included),
//! `next monday`, `this friday`, `last wednesday`, `on friday`
//!
//! **Calendar dates**: `march 20`, `march 20th 2027`, `20 march`,
//! `the 20th of march`, `first monday of march`, `last friday of the month`,
//! `last day of february`
//!
//! **Times**: `2pm`, `2:30 pm`, `14:00`, `noon`, `morning`, `evening`,
//! `midnight`, `end of day`, `at 5pm`
//!
//! **Combined**: `tomorrow at 5pm`, `next friday at 10:30am`,
//! `tomorrow morning`, `5pm tomorrow`, `march 20 at noon`
//!
//! **Offsets**: `in 2 hours`, `in an hour`, `30 minutes ago`,
//! `a week from now`
//!
//! **Periods** (with an end): `next week`, `this month`, `last year`,
//! `next quarter`
//!
//! **Boundaries**: `end of month`, `start of next week`,
//! `beginning of last quarter`, `end of today`

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{RecognizerError, Result};

// ── Parser seam ─────────────────────────────────────────────────────────────

/// One temporal phrase found in an utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMatch {
    /// The matched substring, as it appears in the utterance.
    pub text: String,
    /// Character offset of the match within the utterance.
    pub index: usize,
    /// Resolved start instant.
    pub start: DateTime<FixedOffset>,
    /// Resolved end instant, for phrases that denote a span.
    pub end: Option<DateTime<FixedOffset>>,
    /// The reference instant relative phrases were resolved against.
    pub reference: Option<DateTime<FixedOffset>>,
}

/// Finds temporal phrases in free text.
///
/// Implementations return matches in their own ranking order; callers that
/// want a single answer take the first element.
pub trait TemporalParser: Send + Sync {
    fn parse(&self, text: &str, reference: DateTime<Utc>) -> Result<Vec<ParsedMatch>>;
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Which day begins a week for period computations ("next week", "end of week").
///
/// Does **not** affect named-weekday expressions like "next Monday".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 standard.
    #[default]
    Monday,
    /// US/Canada convention.
    Sunday,
}

/// Options for [`PhraseParser`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// IANA timezone used to interpret local-time phrases.
    pub timezone: String,
    /// Which day starts the week.
    pub week_start: WeekStartDay,
    /// Longest phrase, in words, the scanner will try.
    pub max_phrase_words: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            week_start: WeekStartDay::Monday,
            max_phrase_words: 6,
        }
    }
}

// ── PhraseParser ────────────────────────────────────────────────────────────

/// Grammar-based [`TemporalParser`]. Matches are returned left to right and
/// never overlap.
#[derive(Debug, Clone, Default)]
pub struct PhraseParser {
    options: ParserOptions,
}

impl PhraseParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

impl TemporalParser for PhraseParser {
    fn parse(&self, text: &str, reference: DateTime<Utc>) -> Result<Vec<ParsedMatch>> {
        let tz = parse_timezone(&self.options.timezone)?;
        let ctx = Context {
            anchor: reference,
            local: reference.with_timezone(&tz),
            tz,
            week_start: self.options.week_start,
        };

        let words = split_words(text);
        let max_words = self.options.max_phrase_words.max(1);
        let mut matches = Vec::new();
        let mut i = 0;

        while i < words.len() {
            let longest = max_words.min(words.len() - i);
            let found = (1..=longest).rev().find_map(|n| {
                let (start, end) = (words[i].start, words[i + n - 1].end);
                ctx.resolve(&text[start..end]).map(|r| (n, start, end, r))
            });

            match found {
                Some((n, start, end, resolved)) => {
                    matches.push(ParsedMatch {
                        text: text[start..end].to_string(),
                        index: text[..start].chars().count(),
                        start: resolved.start.fixed_offset(),
                        end: resolved.end.map(|dt| dt.fixed_offset()),
                        reference: resolved
                            .relative
                            .then(|| reference.fixed_offset()),
                    });
                    i += n;
                }
                None => i += 1,
            }
        }

        Ok(matches)
    }
}

/// A resolved phrase, in the parser's timezone.
#[derive(Debug, Clone)]
struct Resolved {
    start: DateTime<Tz>,
    end: Option<DateTime<Tz>>,
    relative: bool,
}

impl Resolved {
    fn absolute(start: DateTime<Tz>) -> Self {
        Self {
            start,
            end: None,
            relative: false,
        }
    }

    fn relative(start: DateTime<Tz>) -> Self {
        Self {
            start,
            end: None,
            relative: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Week,
    Month,
    Quarter,
    Year,
}

/// Everything a phrase is resolved against.
struct Context {
    anchor: DateTime<Utc>,
    local: DateTime<Tz>,
    tz: Tz,
    week_start: WeekStartDay,
}

impl Context {
    fn resolve(&self, phrase: &str) -> Option<Resolved> {
        // Passthrough uses the raw text: case matters to some RFC 3339 parsers.
        if let Ok(dt) = DateTime::parse_from_rfc3339(phrase.trim()) {
            return Some(Resolved::absolute(dt.with_timezone(&self.tz)));
        }

        let s = normalize_expression(phrase);
        if s.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return self.at(date, NaiveTime::MIN).map(Resolved::absolute);
        }

        match s.as_str() {
            "now" | "right now" => return Some(Resolved::relative(self.local)),
            "tonight" => {
                let time = named_time_to_naive("night")?;
                return self.at(self.today(), time).map(Resolved::relative);
            }
            _ => {}
        }

        self.try_period_relative(&s)
            .or_else(|| self.try_period_boundary(&s))
            .or_else(|| self.try_natural_offset(&s))
            .or_else(|| {
                let date = self.resolve_day(&s)?;
                self.at(date, NaiveTime::MIN).map(Resolved::relative)
            })
            .or_else(|| {
                let time = resolve_clock(&s)?;
                self.at(self.today(), time).map(Resolved::relative)
            })
            .or_else(|| self.try_day_and_time(&s))
    }

    fn today(&self) -> NaiveDate {
        self.local.date_naive()
    }

    /// Local wall-clock `date time` in the parser's timezone.
    fn at(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
        self.tz.from_local_datetime(&date.and_time(time)).earliest()
    }

    // ── Days ────────────────────────────────────────────────────────────

    /// Resolve a phrase naming a calendar day.
    fn resolve_day(&self, s: &str) -> Option<NaiveDate> {
        if let Some(rest) = s.strip_prefix("on ") {
            return self.resolve_day(rest);
        }

        let today = self.today();
        match s {
            "today" => return Some(today),
            "tomorrow" => return today.succ_opt(),
            "yesterday" => return today.pred_opt(),
            "day after tomorrow" => return today.succ_opt()?.succ_opt(),
            "day before yesterday" => return today.pred_opt()?.pred_opt(),
            _ => {}
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }

        self.try_weekday(s)
            .or_else(|| self.try_month_day(s))
            .or_else(|| self.try_ordinal_date(s))
    }

    /// "friday", "next monday", "this friday", "last wednesday".
    fn try_weekday(&self, s: &str) -> Option<NaiveDate> {
        let today = self.today();
        let current = today.weekday().num_days_from_monday() as i64;

        let Some((modifier, day)) = s.split_once(' ') else {
            // Bare weekday: only full names, to keep "sat" and "sun" out.
            let weekday = parse_full_weekday(s)?;
            let ahead = (weekday.num_days_from_monday() as i64 - current + 7) % 7;
            return Some(today + Duration::days(ahead));
        };

        let target = parse_weekday(day)?.num_days_from_monday() as i64;
        match modifier {
            "next" => {
                let ahead = (target - current + 7) % 7;
                let ahead = if ahead == 0 { 7 } else { ahead };
                Some(today + Duration::days(ahead))
            }
            "this" => Some(today + Duration::days(target - current)),
            "last" => {
                let back = (current - target + 7) % 7;
                let back = if back == 0 { 7 } else { back };
                Some(today - Duration::days(back))
            }
            _ => None,
        }
    }

    /// "march 20", "march 20th 2027", "20 march", "20th of march 2027".
    fn try_month_day(&self, s: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = s.split_whitespace().filter(|p| *p != "of").collect();
        let (month, day, year) = match parts.as_slice() {
            [first, second] | [first, second, _] => {
                if let Some(month) = parse_month(first) {
                    (month, parse_day_number(second)?, parts.get(2))
                } else {
                    (parse_month(second)?, parse_day_number(first)?, parts.get(2))
                }
            }
            _ => return None,
        };

        let year = match year {
            Some(y) => parse_year(y)?,
            None => self.local.year(),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// "first monday of march", "last friday of the month", "last day of february".
    fn try_ordinal_date(&self, s: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let of_idx = parts.iter().position(|&p| p == "of")?;
        if parts.len() < 4 || of_idx != 2 {
            return None;
        }

        let (month, year) = match parts[3] {
            "month" => (self.local.month(), self.local.year()),
            "next" if parts.get(4) == Some(&"month") => {
                let (year, month) = shift_month(self.local.year(), self.local.month(), 1);
                (month, year)
            }
            name => {
                let month = parse_month(name)?;
                let year = match parts.get(4) {
                    Some(y) => parse_year(y)?,
                    None => self.local.year(),
                };
                (month, year)
            }
        };

        if parts[0] == "last" && parts[1] == "day" {
            return last_day_of_month(year, month);
        }

        let weekday = parse_weekday(parts[1])?;
        let ordinal = parse_ordinal(parts[0])?;
        find_nth_weekday_in_month(year, month, weekday, ordinal)
    }

    // ── Combinations ────────────────────────────────────────────────────

    /// "tomorrow at 5pm", "next friday morning", "5pm tomorrow".
    fn try_day_and_time(&self, s: &str) -> Option<Resolved> {
        s.match_indices(' ').find_map(|(idx, _)| {
            let (left, right) = (&s[..idx], &s[idx + 1..]);
            let (date, time) = match (self.resolve_day(left), resolve_clock(right)) {
                (Some(date), Some(time)) => (date, time),
                _ => (self.resolve_day(right)?, resolve_clock(left)?),
            };
            self.at(date, time).map(Resolved::relative)
        })
    }

    /// "in 2 hours", "in an hour", "30 minutes ago", "a week from now".
    fn try_natural_offset(&self, s: &str) -> Option<Resolved> {
        let seconds = if let Some(rest) = s.strip_prefix("in ") {
            parse_count_and_unit(rest)?
        } else if let Some(rest) = s.strip_suffix(" ago") {
            parse_count_and_unit(rest)?.checked_neg()?
        } else if let Some(rest) = s.strip_suffix(" from now") {
            parse_count_and_unit(rest)?
        } else {
            return None;
        };

        let instant = self.anchor.checked_add_signed(Duration::try_seconds(seconds)?)?;
        Some(Resolved::relative(instant.with_timezone(&self.tz)))
    }

    // ── Periods ─────────────────────────────────────────────────────────

    /// "next week", "this month", "last year": start of the period, with its end.
    fn try_period_relative(&self, s: &str) -> Option<Resolved> {
        let (modifier, period) = s.split_once(' ')?;
        let shift = parse_shift(modifier)?;
        let (first, last) = self.period_bounds(parse_period(period)?, shift)?;
        Some(Resolved {
            start: self.at(first, NaiveTime::MIN)?,
            end: Some(self.at(last, end_of_day())?),
            relative: true,
        })
    }

    /// "end of month", "start of next week", "end of today".
    fn try_period_boundary(&self, s: &str) -> Option<Resolved> {
        let (is_start, rest) = if let Some(r) = s.strip_prefix("start of ") {
            (true, r)
        } else if let Some(r) = s.strip_prefix("beginning of ") {
            (true, r)
        } else if let Some(r) = s.strip_prefix("end of ") {
            (false, r)
        } else {
            return None;
        };

        if rest == "today" {
            let time = if is_start { NaiveTime::MIN } else { end_of_day() };
            return self.at(self.today(), time).map(Resolved::relative);
        }

        let (shift, period) = match rest.split_once(' ') {
            Some((modifier, period)) => (parse_shift(modifier)?, period),
            None => (0, rest),
        };
        let (first, last) = self.period_bounds(parse_period(period)?, shift)?;
        let instant = if is_start {
            self.at(first, NaiveTime::MIN)?
        } else {
            self.at(last, end_of_day())?
        };
        Some(Resolved::relative(instant))
    }

    /// First and last day of the period containing today, shifted by `shift` periods.
    fn period_bounds(&self, period: Period, shift: i32) -> Option<(NaiveDate, NaiveDate)> {
        let today = self.today();
        match period {
            Period::Week => {
                let since_start = days_from_week_start(today.weekday(), self.week_start);
                let first = today - Duration::days(since_start) + Duration::weeks(shift as i64);
                Some((first, first + Duration::days(6)))
            }
            Period::Month => {
                let (y, m) = shift_month(today.year(), today.month(), shift);
                Some((NaiveDate::from_ymd_opt(y, m, 1)?, last_day_of_month(y, m)?))
            }
            Period::Quarter => {
                let q_start = ((today.month() - 1) / 3) * 3 + 1;
                let (y, m) = shift_month(today.year(), q_start, shift * 3);
                let (ey, em) = shift_month(y, m, 2);
                Some((NaiveDate::from_ymd_opt(y, m, 1)?, last_day_of_month(ey, em)?))
            }
            Period::Year => {
                let y = today.year() + shift;
                Some((
                    NaiveDate::from_ymd_opt(y, 1, 1)?,
                    NaiveDate::from_ymd_opt(y, 12, 31)?,
                ))
            }
        }
    }
}

// ── Scanning helpers ────────────────────────────────────────────────────────

/// Byte span of one whitespace-separated word, edge punctuation excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word {
    start: usize,
    end: usize,
}

fn split_words(text: &str) -> Vec<Word> {
    const EDGE: &[char] = &[',', '.', '!', '?', ';', ':', '(', ')', '"', '\''];

    let mut words = Vec::new();
    let mut offset = 0;
    for raw in text.split_whitespace() {
        // split_whitespace yields subslices in order, so find() from the
        // running offset recovers each word's position.
        let Some(pos) = text[offset..].find(raw) else {
            continue;
        };
        let start = offset + pos;
        offset = start + raw.len();

        let trimmed_start = raw.trim_start_matches(EDGE);
        let trimmed = trimmed_start.trim_end_matches(EDGE);
        if trimmed.is_empty() {
            continue;
        }
        let word_start = start + (raw.len() - trimmed_start.len());
        words.push(Word {
            start: word_start,
            end: word_start + trimmed.len(),
        });
    }
    words
}

/// Trim, lowercase, drop "the" and commas, collapse spaces.
fn normalize_expression(s: &str) -> String {
    s.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .filter(|w| *w != "the")
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an IANA timezone string into `Tz`.
pub(crate) fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| RecognizerError::InvalidTimezone(format!("'{s}'")))
}

// ── Time-of-day helpers ─────────────────────────────────────────────────────

/// Resolve a phrase naming a time of day.
fn resolve_clock(s: &str) -> Option<NaiveTime> {
    if let Some(rest) = s.strip_prefix("at ") {
        return resolve_clock(rest);
    }
    named_time_to_naive(s).or_else(|| parse_time_string(s))
}

/// Map named time to NaiveTime.
fn named_time_to_naive(s: &str) -> Option<NaiveTime> {
    match s {
        "morning" | "start of business" | "sob" => NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "lunch" | "midday" => NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => NaiveTime::from_hms_opt(13, 0, 0),
        "end of day" | "end of business" | "eob" => NaiveTime::from_hms_opt(17, 0, 0),
        "evening" => NaiveTime::from_hms_opt(18, 0, 0),
        "night" => NaiveTime::from_hms_opt(21, 0, 0),
        "midnight" => NaiveTime::from_hms_opt(0, 0, 0),
        _ => None,
    }
}

/// Parse a time string: "2pm", "2:30pm", "2 pm", "14:00", "14:30:00".
fn parse_time_string(s: &str) -> Option<NaiveTime> {
    let s = s.trim();

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(t);
    }

    let compact = s.replace(' ', "");
    let (time_part, is_pm) = if let Some(t) = compact.strip_suffix("pm") {
        (t, true)
    } else if let Some(t) = compact.strip_suffix("am") {
        (t, false)
    } else {
        return None;
    };

    let mut parts = time_part.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || hour == 0 || hour > 12 {
        return None;
    }

    let hour24 = match (hour, is_pm) {
        (12, true) => 12,
        (12, false) => 0,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

// ── Calendar helpers ────────────────────────────────────────────────────────

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

/// `(year, month)` moved by `delta` months.
fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Find the Nth weekday in a month. Negative ordinals count from the end.
fn find_nth_weekday_in_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    ordinal: i32,
) -> Option<NaiveDate> {
    let target = if ordinal > 0 {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let diff = (weekday.num_days_from_monday() as i64
            - first.weekday().num_days_from_monday() as i64
            + 7)
            % 7;
        first + Duration::days(diff) + Duration::weeks((ordinal - 1) as i64)
    } else {
        let last = last_day_of_month(year, month)?;
        let diff = (last.weekday().num_days_from_monday() as i64
            - weekday.num_days_from_monday() as i64
            + 7)
            % 7;
        last - Duration::days(diff) - Duration::weeks((-ordinal - 1) as i64)
    };
    (target.month() == month).then_some(target)
}

// ── Word tables ─────────────────────────────────────────────────────────────

/// Full weekday names only.
fn parse_full_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Full and abbreviated weekday names.
fn parse_weekday(s: &str) -> Option<Weekday> {
    parse_full_weekday(s).or(match s {
        "mon" => Some(Weekday::Mon),
        "tue" | "tues" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" | "thurs" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    })
}

/// Parse a month name to number (1-12).
fn parse_month(s: &str) -> Option<u32> {
    match s {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" | "sept" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}

/// Parse an ordinal: "first"→1, "second"→2, ..., "last"→-1.
fn parse_ordinal(s: &str) -> Option<i32> {
    match s {
        "first" | "1st" => Some(1),
        "second" | "2nd" => Some(2),
        "third" | "3rd" => Some(3),
        "fourth" | "4th" => Some(4),
        "fifth" | "5th" => Some(5),
        "last" => Some(-1),
        _ => None,
    }
}

/// "20", "20th", "1st" → day of month.
fn parse_day_number(s: &str) -> Option<u32> {
    let digits = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &s[digits.len()..];
    if !matches!(suffix, "" | "st" | "nd" | "rd" | "th") {
        return None;
    }
    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

fn parse_year(s: &str) -> Option<i32> {
    (s.len() == 4).then(|| s.parse().ok()).flatten()
}

fn parse_shift(modifier: &str) -> Option<i32> {
    match modifier {
        "next" => Some(1),
        "this" => Some(0),
        "last" | "previous" => Some(-1),
        _ => None,
    }
}

fn parse_period(s: &str) -> Option<Period> {
    match s {
        "week" => Some(Period::Week),
        "month" => Some(Period::Month),
        "quarter" => Some(Period::Quarter),
        "year" => Some(Period::Year),
        _ => None,
    }
}

/// "2 hours", "an hour", "a week" → seconds. The count is unsigned; the
/// direction comes from "in", "ago" or "from now".
fn parse_count_and_unit(s: &str) -> Option<i64> {
    let (count, unit) = s.split_once(' ')?;
    if count.starts_with('+') {
        return None;
    }
    let n = match count {
        "a" | "an" => 1,
        _ => i64::from(count.parse::<u32>().ok()?),
    };
    let multiplier = match unit {
        "second" | "seconds" | "sec" | "secs" => 1,
        "minute" | "minutes" | "min" | "mins" => 60,
        "hour" | "hours" | "hr" | "hrs" => 3600,
        "day" | "days" => 86400,
        "week" | "weeks" | "wk" | "wks" => 604800,
        _ => return None,
    };
    n.checked_mul(multiplier)
}

// ── Tests ───────────────────────────────────────────────────────────────────
