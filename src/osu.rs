//! Parser of the `.osu` beatmap text format, osu!mania charts only.
//!
//! Raw `&str` == [`parse_osu`] ==> [`OsuBeatmap`] (in [`OsuOutput`])
//!
//! The format is line-oriented: `[Section]` headers, `Key: value` pairs, and comma-separated
//! rows in `[TimingPoints]` and `[HitObjects]`. Problems that lose a single row are reported
//! as [`OsuWarning`]s and the row is dropped; problems that make conversion impossible (not
//! an osu!mania chart, no tempo grid) abort with an [`OsuError`].

pub mod model;
mod parse;

use thiserror::Error;

pub use self::model::OsuBeatmap;

/// A fatal error that prevents a beatmap from being converted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OsuError {
    /// The beatmap is not an osu!mania chart (`Mode` must be 3).
    #[error("not an osu!mania beatmap (Mode = {0})")]
    NotMania(i64),
    /// A key required for conversion is missing from its section.
    #[error("missing key `{key}` in section [{section}]")]
    MissingKey {
        /// The section the key was expected in.
        section: &'static str,
        /// The missing key.
        key: &'static str,
    },
    /// The beatmap has no uninherited timing points, so there is no tempo grid to convert
    /// against.
    #[error("beatmap has no uninherited timing points")]
    NoTimingPoints,
}

/// A recoverable problem found while parsing; the offending line is dropped.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OsuWarning {
    /// A timing point row could not be parsed.
    #[error("malformed timing point at line {line}")]
    MalformedTimingPoint {
        /// The line number.
        line: usize,
    },
    /// A hit object row could not be parsed.
    #[error("malformed hit object at line {line}")]
    MalformedHitObject {
        /// The line number.
        line: usize,
    },
    /// A `Key: value` pair had an unparsable value.
    #[error("invalid value for `{key}` at line {line}")]
    InvalidValue {
        /// The key whose value was rejected.
        key: String,
        /// The line number.
        line: usize,
    },
}

/// Parse results: the beatmap plus the warnings accumulated on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct OsuOutput {
    /// The parsed beatmap.
    pub beatmap: OsuBeatmap,
    /// Warnings that occurred during parsing.
    pub warnings: Vec<OsuWarning>,
}

/// Analyzes and converts `.osu` beatmap text into an [`OsuBeatmap`].
///
/// # Errors
///
/// Returns an [`OsuError`] when the text is not a convertible osu!mania beatmap; see the
/// variants for the exact conditions.
pub fn parse_osu(source: &str) -> Result<OsuOutput, OsuError> {
    parse::parse(source)
}
