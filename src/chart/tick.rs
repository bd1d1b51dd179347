//! Tick arithmetic of the target track format.
//!
//! The target format addresses time in integer ticks, `resolution` ticks per beat. All
//! conversion from milliseconds happens through [`ticks_in`]; positions and lengths are
//! snapped onto an even grid through [`Tick::quantize`] only at emission points, so rounding
//! error never accumulates in the running cursors.

/// Ticks per beat used when no explicit resolution is configured.
pub const DEFAULT_RESOLUTION: u32 = 192;

/// Converts a time delta into a fractional tick count under a constant tempo.
///
/// `ticks = resolution * delta_ms / beat_length_ms`, carried at full precision. This is
/// boundary-agnostic: a delta spanning a tempo change must be split at the boundary and
/// converted once per sub-interval with that sub-interval's beat length (see
/// [`TickCursor`](super::timeline::TickCursor)).
#[must_use]
pub fn ticks_in(delta_ms: f64, beat_length_ms: f64, resolution: u32) -> f64 {
    f64::from(resolution) * delta_ms / beat_length_ms
}

/// A position or length on the track's quantization grid: a non-negative even number of
/// resolution ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(u64);

impl Tick {
    /// The origin of the grid.
    pub const ZERO: Self = Self(0);

    /// Snaps a fractional tick count onto the even grid, reducing off-snapped positions
    /// produced by floating-point tempo math.
    #[must_use]
    pub fn quantize(raw: f64) -> Self {
        Self(((raw / 2.0).round().max(0.0) as u64) * 2)
    }

    /// The tick count as an integer.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
