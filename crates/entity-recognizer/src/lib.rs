//! # entity-recognizer
//!
//! Entity resolution for conversational prompts.
//!
//! Turns the loosely structured output of an utterance recognizer into
//! values a dialog can act on: one timestamp from scattered date/time
//! fragments or free text, and the best choice from a fixed list for
//! whatever the user typed. Every operation is a pure function of its
//! inputs plus an injectable [`clock::Clock`]; "nothing found" is `None`,
//! never an error.
//!
//! ## Modules
//!
//! - [`entity`] — Tagged entities, resolution variants, lookup by type
//! - [`datetime`] — Merge date/time fragments into one timestamp
//! - [`phrase`] — Temporal phrase scanning behind the [`phrase::TemporalParser`] seam
//! - [`extract`] — Free-text time extraction with coverage scoring
//! - [`choice`] — Fuzzy matching of an utterance against candidate choices
//! - [`number`] — Numeric literal extraction
//! - [`boolean`] — Yes/no detection
//! - [`clock`] — Injectable wall-clock source
//! - [`recognizer`] — Config-driven entry point
//! - [`error`] — Error types

pub mod boolean;
pub mod choice;
pub mod clock;
pub mod datetime;
pub mod entity;
pub mod error;
pub mod extract;
pub mod number;
pub mod phrase;
pub mod recognizer;

pub use boolean::parse_boolean;
pub use choice::{
    expand_choices, find_all_matches, find_best_match, score_choice, ChoiceMatch, Choices,
    DEFAULT_THRESHOLD,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{resolve_time, resolve_time_with_clock};
pub use entity::{find_all_entities, find_entity, Entity, Resolution};
pub use error::RecognizerError;
pub use extract::{
    extract_time, parse_time_text, parse_time_text_with, recognize_time, recognize_time_with,
    Extraction,
};
pub use number::{parse_number, parse_number_entity};
pub use phrase::{ParsedMatch, ParserOptions, PhraseParser, TemporalParser, WeekStartDay};
pub use recognizer::{EntityRecognizer, RecognizerConfig};
