use mania2chart::prelude::*;
use pretty_assertions::assert_eq;

const MANIA_MAP: &str = "osu file format v14

[General]
AudioFilename: audio.mp3
AudioLeadIn: 0
PreviewTime: 41000
Mode: 3
SpecialStyle: 0

[Editor]
Bookmarks: 1000,2000,3000

[Metadata]
Title:Fragments
TitleUnicode:\u{30d5}\u{30e9}\u{30b0}\u{30e1}\u{30f3}\u{30c8}
Artist:Composer
ArtistUnicode:Composer
Creator:Charter
Version:4K Insane
Source:
Tags:vsrg converted

[Difficulty]
CircleSize:4
OverallDifficulty:8.5

[TimingPoints]
24,461.538461538462,4,2,0,65,1,0
5563,-100,4,2,0,65,0,0
12024,500,4,2,0,65,1,0

[HitObjects]
64,192,24,1,0,0:0:0:0:
192,192,485,1,0,0:0:0:0:
448,192,947,128,0,1870:0:0:0:0:
";

#[test]
fn parses_a_mania_map() {
    let OsuOutput { beatmap, warnings } = parse_osu(MANIA_MAP).expect("must parse");
    assert_eq!(warnings, vec![]);

    assert_eq!(beatmap.audio_filename, "audio.mp3");
    assert_eq!(beatmap.preview_time, 41_000);
    assert_eq!(beatmap.bookmarks, vec![1000, 2000, 3000]);
    assert_eq!(beatmap.title, "Fragments");
    assert_eq!(beatmap.title_unicode, "\u{30d5}\u{30e9}\u{30b0}\u{30e1}\u{30f3}\u{30c8}");
    assert_eq!(beatmap.creator, "Charter");
    assert_eq!(beatmap.version, "4K Insane");
    assert_eq!(beatmap.tags, "vsrg converted");
    assert_eq!(beatmap.key_count, 4);
    assert_eq!(beatmap.overall_difficulty, 8.5);

    // The inherited point (negative beat length) is filtered out.
    assert_eq!(
        beatmap.timing_points,
        vec![
            TempoSegment {
                start_time: 24.0,
                beat_length: 461.538461538462,
                meter: 4,
            },
            TempoSegment {
                start_time: 12_024.0,
                beat_length: 500.0,
                meter: 4,
            },
        ],
    );

    assert_eq!(beatmap.hit_objects.len(), 3);
    assert_eq!(beatmap.hit_objects[2].end_time, 1_870.0);
}

#[test]
fn rejects_non_mania_modes() {
    let source = "[General]\nMode: 0\n";
    assert_eq!(parse_osu(source), Err(OsuError::NotMania(0)));
}

#[test]
fn requires_a_mode() {
    let source = "[General]\nAudioFilename: audio.mp3\n";
    assert_eq!(
        parse_osu(source),
        Err(OsuError::MissingKey {
            section: "General",
            key: "Mode",
        }),
    );
}

#[test]
fn requires_a_tempo_grid() {
    let source = "[General]\nMode: 3\n[Difficulty]\nCircleSize:4\n";
    assert_eq!(parse_osu(source), Err(OsuError::NoTimingPoints));
}

#[test]
fn malformed_rows_warn_and_are_dropped() {
    let source = "[General]
Mode: 3

[Difficulty]
CircleSize:4

[TimingPoints]
24,461.538461538462,4,2,0,65,1,0
notatimingpoint

[HitObjects]
64,192,24,1,0,0:0:0:0:
64,192
";
    let OsuOutput { beatmap, warnings } = parse_osu(source).expect("must parse");
    assert_eq!(
        warnings,
        vec![
            OsuWarning::MalformedTimingPoint { line: 9 },
            OsuWarning::MalformedHitObject { line: 13 },
        ],
    );
    assert_eq!(beatmap.timing_points.len(), 1);
    assert_eq!(beatmap.hit_objects.len(), 1);
}

#[test]
fn early_hit_objects_get_a_covering_segment() {
    let source = "[General]
Mode: 3

[Difficulty]
CircleSize:4

[TimingPoints]
1000,500,4,2,0,65,1,0

[HitObjects]
64,192,200,1,0,0:0:0:0:
";
    let OsuOutput { beatmap, .. } = parse_osu(source).expect("must parse");
    assert_eq!(
        beatmap.timing_points,
        vec![
            TempoSegment {
                start_time: 200.0,
                beat_length: 500.0,
                meter: 4,
            },
            TempoSegment {
                start_time: 1_000.0,
                beat_length: 500.0,
                meter: 4,
            },
        ],
    );
}
