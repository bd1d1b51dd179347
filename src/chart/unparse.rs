//! Rendering of the chart model into `.chart` text.
//!
//! Section layout: `[Name]` followed by a braced block, one `  <tick> = <event>` line per
//! event. String metadata values are quoted, except `Player2` which the format expects bare.

use std::fmt;

use super::{
    Chart, SongMeta,
    track::{Track, TrackEvent},
};

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeSignature(numerator) => write!(f, "TS {numerator}"),
            Self::TempoChange(milli_bpm) => write!(f, "B {milli_bpm}"),
            Self::Note { lane, sustain } => write!(f, "N {lane} {sustain}"),
            // 2 is the star-power phrase type code.
            Self::StarPower { sustain } => write!(f, "S 2 {sustain}"),
        }
    }
}

fn write_track(f: &mut fmt::Formatter<'_>, name: &str, track: &Track) -> fmt::Result {
    writeln!(f, "[{name}]")?;
    writeln!(f, "{{")?;
    for (tick, event) in track.iter() {
        writeln!(f, "  {tick} = {event}")?;
    }
    writeln!(f, "}}")
}

impl fmt::Display for SongMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Song]")?;
        writeln!(f, "{{")?;
        writeln!(f, "  Name = \"{}\"", self.name)?;
        writeln!(f, "  Artist = \"{}\"", self.artist)?;
        writeln!(f, "  Charter = \"{}\"", self.charter)?;
        writeln!(f, "  Offset = {}", self.offset)?;
        writeln!(f, "  Resolution = {}", self.resolution)?;
        writeln!(f, "  Player2 = {}", self.player2)?;
        writeln!(f, "  Difficulty = {}", self.difficulty)?;
        writeln!(f, "  PreviewStart = {}", self.preview_start)?;
        writeln!(f, "  PreviewEnd = {}", self.preview_end)?;
        writeln!(f, "  Genre = \"{}\"", self.genre)?;
        writeln!(f, "  MediaType = \"{}\"", self.media_type)?;
        writeln!(f, "  GuitarStream = \"{}\"", self.guitar_stream)?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.song.fmt(f)?;
        write_track(f, "SyncTrack", &self.sync_track)?;
        for note_track in &self.note_tracks {
            write_track(f, &note_track.name, &note_track.track)?;
        }
        Ok(())
    }
}
