//! Prelude module re-exporting the public surface.
//!
//! Use `use mania2chart::prelude::*;` to import everything at once.

pub use crate::{
    chart::{
        Chart, ConvertOptions, Difficulty, DifficultySlots, NoteTrack, SongMeta,
        lane::{LaneEvent, OPEN_NOTE_LANE, PlayerSide, column_of, map_column},
        note::build_note_track,
        sync::build_sync_track,
        tick::{DEFAULT_RESOLUTION, Tick, ticks_in},
        timeline::{HitEvent, TempoSegment, TickCursor},
        track::{Track, TrackEvent},
    },
    osu::{OsuBeatmap, OsuError, OsuOutput, OsuWarning, parse_osu},
};
