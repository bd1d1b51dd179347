//! Converter from osu!mania beatmaps (.osu) into Clone Hero chart files (.chart).
//!
//! This crate consists of two halves:
//!
//! `osu` module reads the `.osu` text format into ordered in-memory sequences of tempo
//! segments and hit events, along with the metadata the output chart needs. Only osu!mania
//! beatmaps (Mode 3) are accepted.
//!
//! `chart` module is the conversion core: it walks tempo segments and hit events in lockstep,
//! converts absolute millisecond timestamps into quantized integer ticks under
//! piecewise-constant tempo, splits hold-note sustains across tempo boundaries, maps raw
//! column coordinates to target lane codes (including the co-op column split), and renders
//! the resulting tick-indexed tracks as `.chart` sections.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - The builders trust the parser's invariants (sorted sequences, positive beat lengths)
//!   and do not re-validate them; output is undefined when they are violated.
//! - Conversion is a single pass over complete, already-sorted input. There is no
//!   incremental or streaming mode.
//! - An event whose column maps to nothing is dropped silently instead of failing the
//!   whole build.
//!
//! ```
//! use mania2chart::prelude::*;
//!
//! let source = "osu file format v14
//!
//! [General]
//! AudioFilename: audio.mp3
//! Mode: 3
//!
//! [Metadata]
//! Title:Example
//! Artist:Composer
//! Creator:Charter
//!
//! [Difficulty]
//! CircleSize:4
//! OverallDifficulty:5
//!
//! [TimingPoints]
//! 0,500,4,1,0,100,1,0
//!
//! [HitObjects]
//! 64,192,0,1,0,0:0:0:0:
//! 192,192,500,1,0,0:0:0:0:
//! ";
//! let output = parse_osu(source).expect("must be an osu!mania beatmap");
//! assert!(output.warnings.is_empty());
//!
//! let slots = DifficultySlots {
//!     expert: Some(&output.beatmap),
//!     ..Default::default()
//! };
//! let chart = Chart::from_osu(&output.beatmap, &slots, &ConvertOptions::default());
//! assert!(chart.to_string().contains("[ExpertSingle]"));
//! ```

pub mod chart;
pub mod osu;
pub mod prelude;
