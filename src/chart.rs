//! The target chart model and its builders.
//!
//! `tick`, `timeline`, `lane`, `sync` and `note` form the conversion core: pure functions
//! over already-sorted input, producing tick-indexed [`track::Track`] structures. This
//! module root assembles them into a complete [`Chart`] with its `[Song]` metadata;
//! `unparse` renders the result as `.chart` text through the `Display` impls.

pub mod lane;
pub mod note;
pub mod sync;
pub mod tick;
pub mod timeline;
pub mod track;
mod unparse;

use self::{
    lane::PlayerSide, note::build_note_track, sync::build_sync_track, tick::DEFAULT_RESOLUTION,
    track::Track,
};
use crate::osu::OsuBeatmap;

/// Options threaded into the builders. There is no ambient default state; everything the
/// conversion needs is carried here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvertOptions {
    /// Ticks per beat of the output chart.
    pub resolution: u32,
    /// Length of the audio preview in seconds; `0` leaves the preview open-ended.
    pub preview_length: f64,
    /// Prefer the unicode title and artist over their romanised forms.
    pub use_unicode_metadata: bool,
    /// Write the beatmap's tag list into the `Genre` field.
    pub use_tags_as_genre: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            preview_length: 0.0,
            use_unicode_metadata: false,
            use_tags_as_genre: false,
        }
    }
}

/// A difficulty slot of the output chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// The `Expert*` sections.
    Expert,
    /// The `Hard*` sections.
    Hard,
    /// The `Medium*` sections.
    Medium,
    /// The `Easy*` sections.
    Easy,
}

impl Difficulty {
    /// Every difficulty, in the conventional section order.
    pub const ALL: [Self; 4] = [Self::Expert, Self::Hard, Self::Medium, Self::Easy];

    /// The section name prefix of this difficulty.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Hard => "Hard",
            Self::Medium => "Medium",
            Self::Easy => "Easy",
        }
    }
}

/// Source beatmaps assigned to difficulty slots. An unfilled slot is omitted from the
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultySlots<'a> {
    /// Source for the `Expert*` sections.
    pub expert: Option<&'a OsuBeatmap>,
    /// Source for the `Hard*` sections.
    pub hard: Option<&'a OsuBeatmap>,
    /// Source for the `Medium*` sections.
    pub medium: Option<&'a OsuBeatmap>,
    /// Source for the `Easy*` sections.
    pub easy: Option<&'a OsuBeatmap>,
}

impl<'a> DifficultySlots<'a> {
    /// The beatmap assigned to `difficulty`, if any.
    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> Option<&'a OsuBeatmap> {
        match difficulty {
            Difficulty::Expert => self.expert,
            Difficulty::Hard => self.hard,
            Difficulty::Medium => self.medium,
            Difficulty::Easy => self.easy,
        }
    }
}

/// The `[Song]` metadata section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongMeta {
    /// Song title.
    pub name: String,
    /// Song artist.
    pub artist: String,
    /// Chart author.
    pub charter: String,
    /// Audio offset in seconds: the first tempo segment's start time.
    pub offset: f64,
    /// Ticks per beat.
    pub resolution: u32,
    /// Instrument of the second player.
    pub player2: String,
    /// Difficulty rating (floor of the source's overall difficulty).
    pub difficulty: i32,
    /// Preview window start in seconds.
    pub preview_start: f64,
    /// Preview window end in seconds; `0` leaves it open-ended.
    pub preview_end: f64,
    /// Genre label.
    pub genre: String,
    /// Media type label.
    pub media_type: String,
    /// Audio stream file name.
    pub guitar_stream: String,
}

impl Default for SongMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            artist: String::new(),
            charter: String::new(),
            offset: 0.0,
            resolution: DEFAULT_RESOLUTION,
            player2: "bass".into(),
            difficulty: 0,
            preview_start: 0.0,
            preview_end: 0.0,
            genre: "rock".into(),
            media_type: "cd".into(),
            guitar_stream: String::new(),
        }
    }
}

impl SongMeta {
    /// Fills the metadata section from a source beatmap.
    #[must_use]
    pub fn from_osu(source: &OsuBeatmap, options: &ConvertOptions) -> Self {
        let mut song = Self::default();
        if options.use_unicode_metadata {
            song.name = source.title_unicode.clone();
            song.artist = source.artist_unicode.clone();
        } else {
            song.name = source.title.clone();
            song.artist = source.artist.clone();
        }
        song.charter = source.creator.clone();
        song.offset = source
            .timing_points
            .first()
            .map_or(0.0, |segment| round_seconds(segment.start_time));
        song.resolution = options.resolution;
        song.difficulty = source.overall_difficulty.floor() as i32;
        // The editor writes -1 when no preview point is set.
        if source.preview_time >= 0 {
            song.preview_start = round_seconds(source.preview_time as f64);
        }
        if options.preview_length > 0.0 {
            song.preview_end = song.preview_start + options.preview_length;
        }
        if options.use_tags_as_genre {
            song.genre = source.tags.clone();
        }
        song.guitar_stream = source.audio_filename.clone();
        song
    }
}

/// Milliseconds to seconds, rounded to 3 decimal places.
fn round_seconds(ms: f64) -> f64 {
    ms.round() / 1000.0
}

/// A named note track section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteTrack {
    /// Section name, e.g. `ExpertSingle`.
    pub name: String,
    /// The note events.
    pub track: Track,
}

/// A complete output chart: metadata, sync track and zero or more note tracks.
///
/// Render it with `Display` (or `to_string`) to obtain the `.chart` text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// The `[Song]` section.
    pub song: SongMeta,
    /// The `[SyncTrack]` section.
    pub sync_track: Track,
    /// The note track sections, in difficulty order.
    pub note_tracks: Vec<NoteTrack>,
}

impl Chart {
    /// Builds a chart from a metadata source plus per-difficulty sources.
    ///
    /// `source` provides the `[Song]` metadata and the sync track; each filled slot of
    /// `slots` contributes a `<Difficulty>Single` section, and additionally a
    /// `<Difficulty>DoubleGuitar` section (the second player's side) when the slot's key
    /// count marks it as a co-op chart. A slot whose beatmap has no hit events is omitted.
    #[must_use]
    pub fn from_osu(
        source: &OsuBeatmap,
        slots: &DifficultySlots<'_>,
        options: &ConvertOptions,
    ) -> Self {
        let song = SongMeta::from_osu(source, options);
        let sync_track = build_sync_track(&source.timing_points, options.resolution);

        let mut note_tracks = Vec::new();
        for difficulty in Difficulty::ALL {
            let Some(map) = slots.get(difficulty) else {
                continue;
            };
            let mut push = |suffix: &str, side: PlayerSide| {
                if let Some(track) = build_note_track(
                    &map.timing_points,
                    &map.hit_objects,
                    map.key_count,
                    side,
                    options.resolution,
                ) {
                    note_tracks.push(NoteTrack {
                        name: format!("{}{suffix}", difficulty.prefix()),
                        track,
                    });
                }
            };
            push("Single", PlayerSide::Player1);
            if map.key_count > 9 {
                push("DoubleGuitar", PlayerSide::Player2);
            }
        }

        Self {
            song,
            sync_track,
            note_tracks,
        }
    }
}
