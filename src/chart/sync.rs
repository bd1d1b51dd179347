//! Builder of the tempo/time-signature sync track.

use super::{
    tick::Tick,
    timeline::{TempoSegment, TickCursor},
    track::{Track, TrackEvent},
};

/// Builds the `[SyncTrack]` section.
///
/// The first segment lands at tick 0 as a `TimeSignature` followed by a `TempoChange`. Every
/// subsequent segment gets the same pair at the quantized running cursor position, advanced
/// under the outgoing segment's tempo. A one-segment input emits only the tick-0 pair.
#[must_use]
pub fn build_sync_track(segments: &[TempoSegment], resolution: u32) -> Track {
    let mut track = Track::new();
    let mut cursor = TickCursor::new(segments, resolution);
    for segment in segments {
        cursor.advance_to(segment.start_time);
        let at = cursor.position();
        track.push(at, TrackEvent::TimeSignature(segment.meter));
        track.push(at, TrackEvent::TempoChange(segment.milli_bpm()));
    }
    track
}
