//! Tick-indexed track structures of the target format.

use std::collections::BTreeMap;

use super::tick::Tick;

/// One event of a track, placed at a tick position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackEvent {
    /// A time signature change: the numerator over 4.
    TimeSignature(u32),
    /// A tempo change in milli-BPM.
    TempoChange(u64),
    /// A playable note.
    Note {
        /// Target lane code.
        lane: u8,
        /// Sustain length in ticks; `0` for a plain note.
        sustain: u64,
    },
    /// A star-power phrase marker.
    StarPower {
        /// Phrase length in ticks.
        sustain: u64,
    },
}

/// An ordered mapping from tick positions to the events emitted there.
///
/// Multiple events may share a tick; within one tick the insertion order is preserved. The
/// serializer relies on this for the convention that a time signature precedes the tempo
/// change sharing its tick, and that notes keep their original emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    events: BTreeMap<Tick, Vec<TrackEvent>>,
}

impl Track {
    /// Creates an empty track.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event at `at`, after any events already on that tick.
    pub fn push(&mut self, at: Tick, event: TrackEvent) {
        self.events.entry(at).or_default().push(event);
    }

    /// Whether the track contains no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The number of events across all ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Iterates events, ticks ascending and insertion order within each tick.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &TrackEvent)> {
        self.events
            .iter()
            .flat_map(|(tick, events)| events.iter().map(move |event| (*tick, event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept_within_a_tick() {
        let mut track = Track::new();
        track.push(Tick::ZERO, TrackEvent::TimeSignature(4));
        track.push(Tick::ZERO, TrackEvent::TempoChange(120_000));
        let events: Vec<_> = track.iter().map(|(_, event)| *event).collect();
        assert_eq!(
            events,
            vec![TrackEvent::TimeSignature(4), TrackEvent::TempoChange(120_000)],
        );
    }

    #[test]
    fn ticks_iterate_in_ascending_order() {
        let mut track = Track::new();
        track.push(Tick::quantize(384.0), TrackEvent::Note { lane: 0, sustain: 0 });
        track.push(Tick::ZERO, TrackEvent::Note { lane: 1, sustain: 0 });
        let ticks: Vec<_> = track.iter().map(|(tick, _)| tick.value()).collect();
        assert_eq!(ticks, vec![0, 384]);
    }
}
