//! In-memory model of a parsed osu!mania beatmap.

use crate::chart::timeline::{HitEvent, TempoSegment};

/// A parsed osu!mania beatmap: the metadata the conversion needs, plus the tempo and hit
/// sequences in ascending time order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OsuBeatmap {
    /// Audio file name from `[General]`.
    pub audio_filename: String,
    /// Milliseconds of silence before the audio starts.
    pub audio_lead_in: i64,
    /// Preview point in milliseconds; `-1` when unset in the editor.
    pub preview_time: i64,
    /// osu!mania "N+1" special key style flag.
    pub special_style: i64,
    /// Editor bookmarks in milliseconds.
    pub bookmarks: Vec<i64>,
    /// Romanised title.
    pub title: String,
    /// Original-script title.
    pub title_unicode: String,
    /// Romanised artist.
    pub artist: String,
    /// Original-script artist.
    pub artist_unicode: String,
    /// Beatmap author.
    pub creator: String,
    /// Difficulty name.
    pub version: String,
    /// Source media of the song.
    pub source: String,
    /// Space-separated search tags.
    pub tags: String,
    /// Key count (`CircleSize` in mania).
    pub key_count: u8,
    /// Overall difficulty rating.
    pub overall_difficulty: f64,
    /// Uninherited timing points, ascending by start time. Guaranteed non-empty by the
    /// parser, and to start at or before the first hit object.
    pub timing_points: Vec<TempoSegment>,
    /// Hit objects, ascending by start time.
    pub hit_objects: Vec<HitEvent>,
}
