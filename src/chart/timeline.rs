//! Input timeline model and the tick cursor that walks it.

use super::tick::{Tick, ticks_in};

/// An interval of constant tempo and time signature.
///
/// Segments come from the parsing collaborator sorted ascending by `start_time`, non-empty,
/// with strictly positive `beat_length`; the first segment's `start_time` is the global time
/// origin. The builders do not re-validate these preconditions and their output is undefined
/// when one is violated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoSegment {
    /// Start of the segment in milliseconds.
    pub start_time: f64,
    /// Milliseconds per beat. Must be strictly positive.
    pub beat_length: f64,
    /// Numerator of the time signature (over 4).
    pub meter: u32,
}

impl TempoSegment {
    /// The milli-BPM value emitted in `B` sync events.
    #[must_use]
    pub fn milli_bpm(&self) -> u64 {
        (60_000.0 / self.beat_length * 1000.0).round() as u64
    }
}

/// A single playable object of the source beatmap.
///
/// Hit events come sorted ascending by `start_time`. `end_time > start_time` holds whenever
/// the event is a hold note.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitEvent {
    /// Raw column coordinate, `0..=511`.
    pub column_x: u16,
    /// Hit time in milliseconds.
    pub start_time: f64,
    /// Release time in milliseconds for hold notes; `0` for plain notes.
    pub end_time: f64,
}

impl HitEvent {
    /// Whether this is a hold note with a sustain to measure.
    #[must_use]
    pub fn is_hold(&self) -> bool {
        self.end_time > 0.0
    }
}

/// Accumulates fractional ticks along a piecewise-constant tempo timeline.
///
/// This owns the one conversion rule every builder needs: the ticks between two times are
/// the sum of [`ticks_in`] over each sub-interval, split at every tempo boundary and charged
/// to the segment owning it. A segment owns `[start_time, next_start_time)`, so a time
/// sitting exactly on a boundary belongs to the incoming segment and the interval leading up
/// to it is charged at the outgoing tempo.
#[derive(Debug, Clone, Copy)]
pub struct TickCursor<'a> {
    segments: &'a [TempoSegment],
    resolution: u32,
    index: usize,
    time: f64,
    ticks: f64,
}

impl<'a> TickCursor<'a> {
    /// Creates a cursor at the time origin of `segments`.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn new(segments: &'a [TempoSegment], resolution: u32) -> Self {
        Self {
            segments,
            resolution,
            index: 0,
            time: segments[0].start_time,
            ticks: 0.0,
        }
    }

    /// Advances the cursor to `target` milliseconds, crossing tempo boundaries as needed.
    ///
    /// `target` must not precede the cursor's current time.
    pub fn advance_to(&mut self, target: f64) {
        while let Some(next) = self.segments.get(self.index + 1) {
            if target < next.start_time {
                break;
            }
            self.ticks += ticks_in(
                next.start_time - self.time,
                self.segments[self.index].beat_length,
                self.resolution,
            );
            self.time = next.start_time;
            self.index += 1;
        }
        self.ticks += ticks_in(
            target - self.time,
            self.segments[self.index].beat_length,
            self.resolution,
        );
        self.time = target;
    }

    /// The grid position of the cursor.
    #[must_use]
    pub fn position(&self) -> Tick {
        Tick::quantize(self.ticks)
    }

    /// The raw fractional tick count accumulated so far.
    #[must_use]
    pub const fn raw_ticks(&self) -> f64 {
        self.ticks
    }

    /// Measures the fractional ticks covered by `[current time, end)` without moving the
    /// cursor.
    ///
    /// Sustain lengths are measured this way and quantized on their own, so the rounding
    /// error of the note's own position never leaks into its length.
    #[must_use]
    pub fn span_to(&self, end: f64) -> f64 {
        let mut lookahead = Self { ticks: 0.0, ..*self };
        lookahead.advance_to(end);
        lookahead.ticks
    }
}
