//! Builder of per-difficulty note tracks.

use super::{
    lane::{LaneEvent, PlayerSide, column_of, map_column},
    tick::Tick,
    timeline::{HitEvent, TempoSegment, TickCursor},
    track::{Track, TrackEvent},
};

/// Builds one note track, or `None` when the difficulty has no hit events at all (the
/// caller then omits the section from the assembled chart).
///
/// A single tick cursor advances through the hit events in time order; the time between two
/// events is charged to whichever tempo segments cover it, so dead time before a tempo
/// change lands on the outgoing tempo. Hold-note sustains are measured by an independent
/// look-ahead over `[start_time, end_time)` and quantized separately from the note's own
/// position. An event whose column maps to nothing for the requested side is dropped
/// silently; a track whose events were all dropped is still returned, as an empty section.
#[must_use]
pub fn build_note_track(
    segments: &[TempoSegment],
    events: &[HitEvent],
    key_count: u8,
    side: PlayerSide,
    resolution: u32,
) -> Option<Track> {
    if events.is_empty() {
        return None;
    }
    let mut track = Track::new();
    let mut cursor = TickCursor::new(segments, resolution);
    for event in events {
        cursor.advance_to(event.start_time);
        let sustain = if event.is_hold() {
            Tick::quantize(cursor.span_to(event.end_time)).value()
        } else {
            0
        };
        let column = column_of(event.column_x, key_count);
        let Some(mapped) = map_column(column, key_count, side) else {
            continue;
        };
        let emitted = match mapped {
            LaneEvent::Note(lane) => TrackEvent::Note { lane, sustain },
            LaneEvent::StarPower => TrackEvent::StarPower { sustain },
        };
        track.push(cursor.position(), emitted);
    }
    Some(track)
}
