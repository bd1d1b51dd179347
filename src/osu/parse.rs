//! Section-based line parser for the `.osu` format.

use itertools::Itertools;

use super::{OsuError, OsuOutput, OsuWarning, model::OsuBeatmap};
use crate::chart::timeline::{HitEvent, TempoSegment};

/// Hit object type bit marking an osu!mania hold note.
const HOLD_NOTE_BIT: u32 = 128;

pub(super) fn parse(source: &str) -> Result<OsuOutput, OsuError> {
    let mut beatmap = OsuBeatmap::default();
    let mut warnings = Vec::new();
    let mut section = "";
    let mut mode: Option<i64> = None;
    let mut key_count: Option<f64> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = name;
            continue;
        }
        match section {
            "General" | "Editor" | "Metadata" | "Difficulty" => {
                let Some((key, value)) = line.split_once(':') else {
                    continue;
                };
                let (key, value) = (key.trim(), value.trim());
                apply_key_value(
                    &mut beatmap,
                    &mut mode,
                    &mut key_count,
                    &mut warnings,
                    section,
                    key,
                    value,
                    line_number,
                );
            }
            "TimingPoints" => match parse_timing_point(line) {
                Some((segment, uninherited)) => {
                    // Inherited points carry slider velocity, not tempo.
                    if uninherited {
                        beatmap.timing_points.push(segment);
                    }
                }
                None => warnings.push(OsuWarning::MalformedTimingPoint { line: line_number }),
            },
            "HitObjects" => match parse_hit_object(line) {
                Some(event) => beatmap.hit_objects.push(event),
                None => warnings.push(OsuWarning::MalformedHitObject { line: line_number }),
            },
            _ => {}
        }
    }

    let mode = mode.ok_or(OsuError::MissingKey {
        section: "General",
        key: "Mode",
    })?;
    if mode != 3 {
        return Err(OsuError::NotMania(mode));
    }
    let key_count = key_count.ok_or(OsuError::MissingKey {
        section: "Difficulty",
        key: "CircleSize",
    })?;
    beatmap.key_count = key_count as u8;
    if beatmap.timing_points.is_empty() {
        return Err(OsuError::NoTimingPoints);
    }

    // Hit objects may be placed before the first timing point; cover them by shifting a
    // copy of it back to the first hit time.
    if let (Some(first_hit), Some(first_segment)) =
        (beatmap.hit_objects.first(), beatmap.timing_points.first())
        && first_hit.start_time < first_segment.start_time
    {
        let shifted = TempoSegment {
            start_time: first_hit.start_time,
            ..*first_segment
        };
        beatmap.timing_points.insert(0, shifted);
    }

    Ok(OsuOutput { beatmap, warnings })
}

#[allow(clippy::too_many_arguments)]
fn apply_key_value(
    beatmap: &mut OsuBeatmap,
    mode: &mut Option<i64>,
    key_count: &mut Option<f64>,
    warnings: &mut Vec<OsuWarning>,
    section: &str,
    key: &str,
    value: &str,
    line: usize,
) {
    let mut invalid = |key: &str| {
        warnings.push(OsuWarning::InvalidValue {
            key: key.to_owned(),
            line,
        });
    };
    match (section, key) {
        ("General", "AudioFilename") => beatmap.audio_filename = value.to_owned(),
        ("General", "AudioLeadIn") => match value.parse() {
            Ok(parsed) => beatmap.audio_lead_in = parsed,
            Err(_) => invalid(key),
        },
        ("General", "PreviewTime") => match value.parse() {
            Ok(parsed) => beatmap.preview_time = parsed,
            Err(_) => invalid(key),
        },
        ("General", "Mode") => match value.parse() {
            Ok(parsed) => *mode = Some(parsed),
            Err(_) => invalid(key),
        },
        ("General", "SpecialStyle") => match value.parse() {
            Ok(parsed) => beatmap.special_style = parsed,
            Err(_) => invalid(key),
        },
        ("Editor", "Bookmarks") => {
            beatmap.bookmarks = value
                .split(',')
                .filter_map(|entry| entry.trim().parse().ok())
                .collect();
        }
        ("Metadata", "Title") => beatmap.title = value.to_owned(),
        ("Metadata", "TitleUnicode") => beatmap.title_unicode = value.to_owned(),
        ("Metadata", "Artist") => beatmap.artist = value.to_owned(),
        ("Metadata", "ArtistUnicode") => beatmap.artist_unicode = value.to_owned(),
        ("Metadata", "Creator") => beatmap.creator = value.to_owned(),
        ("Metadata", "Version") => beatmap.version = value.to_owned(),
        ("Metadata", "Source") => beatmap.source = value.to_owned(),
        ("Metadata", "Tags") => beatmap.tags = value.to_owned(),
        ("Difficulty", "CircleSize") => match value.parse() {
            Ok(parsed) => *key_count = Some(parsed),
            Err(_) => invalid(key),
        },
        ("Difficulty", "OverallDifficulty") => match value.parse() {
            Ok(parsed) => beatmap.overall_difficulty = parsed,
            Err(_) => invalid(key),
        },
        _ => {}
    }
}

/// Parses one `[TimingPoints]` row into a segment and its uninherited flag.
fn parse_timing_point(line: &str) -> Option<(TempoSegment, bool)> {
    let mut fields = line.split(',').map(str::trim);
    let (time, beat_length, meter, _sample_set, _sample_index, _volume, uninherited, _effects) =
        fields.next_tuple()?;
    // The editor very rarely writes fractional times; parse as float, keep whole
    // milliseconds.
    let start_time = time.parse::<f64>().ok()?.trunc();
    let beat_length = beat_length.parse::<f64>().ok()?;
    let meter = meter.parse::<u32>().ok()?;
    Some((
        TempoSegment {
            start_time,
            beat_length,
            meter,
        },
        uninherited == "1",
    ))
}

/// Parses one `[HitObjects]` row. Hold notes (`type & 128`) carry their release time as the
/// leading colon-separated field after the hit sound.
fn parse_hit_object(line: &str) -> Option<HitEvent> {
    let mut fields = line.split(',').map(str::trim);
    let (x, _y, time, kind, _hit_sound) = fields.next_tuple()?;
    let column_x = x.parse::<u16>().ok()?;
    let start_time = time.parse::<i64>().ok()? as f64;
    let kind = kind.parse::<u32>().ok()?;
    let end_time = if kind & HOLD_NOTE_BIT != 0 {
        fields.next()?.split(':').next()?.parse::<i64>().ok()? as f64
    } else {
        0.0
    };
    Some(HitEvent {
        column_x,
        start_time,
        end_time,
    })
}
