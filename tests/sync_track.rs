use mania2chart::prelude::*;
use pretty_assertions::assert_eq;

fn segment(start_time: f64, beat_length: f64, meter: u32) -> TempoSegment {
    TempoSegment {
        start_time,
        beat_length,
        meter,
    }
}

#[test]
fn tempo_change_lands_on_the_converted_tick() {
    let segments = [segment(0.0, 500.0, 4), segment(96_000.0, 375.0, 4)];
    let track = build_sync_track(&segments, 192);

    // 192 * 96000 / 500 = 36864, already on the grid.
    let events: Vec<_> = track.iter().map(|(tick, event)| (tick.value(), *event)).collect();
    assert_eq!(
        events,
        vec![
            (0, TrackEvent::TimeSignature(4)),
            (0, TrackEvent::TempoChange(120_000)),
            (36_864, TrackEvent::TimeSignature(4)),
            (36_864, TrackEvent::TempoChange(160_000)),
        ],
    );
}

#[test]
fn time_signature_precedes_tempo_within_a_tick() {
    let segments = [segment(0.0, 500.0, 3), segment(2_000.0, 250.0, 7)];
    let track = build_sync_track(&segments, 192);
    let events: Vec<_> = track.iter().map(|(_, event)| *event).collect();
    assert_eq!(
        events,
        vec![
            TrackEvent::TimeSignature(3),
            TrackEvent::TempoChange(120_000),
            TrackEvent::TimeSignature(7),
            TrackEvent::TempoChange(240_000),
        ],
    );
}

#[test]
fn later_segments_accumulate_under_each_outgoing_tempo() {
    // Second boundary crossed at 250 ms/beat, not the initial 500.
    let segments = [
        segment(0.0, 500.0, 4),
        segment(1_000.0, 250.0, 4),
        segment(2_000.0, 1_000.0, 4),
    ];
    let track = build_sync_track(&segments, 192);
    let ticks: Vec<_> = track.iter().map(|(tick, _)| tick.value()).collect();
    // 384 ticks for the first second, then 768 more for the next.
    assert_eq!(ticks, vec![0, 0, 384, 384, 1152, 1152]);
}

#[test]
fn milli_bpm_is_rounded() {
    // 461.538461538462 ms/beat is 130.000000…, a classic editor value.
    let segments = [segment(0.0, 461.538461538462, 4)];
    let track = build_sync_track(&segments, 192);
    let tempo: Vec<_> = track
        .iter()
        .filter_map(|(_, event)| match event {
            TrackEvent::TempoChange(milli_bpm) => Some(*milli_bpm),
            _ => None,
        })
        .collect();
    assert_eq!(tempo, vec![130_000]);
}

#[test]
fn builds_are_deterministic() {
    let segments = [segment(0.0, 500.0, 4), segment(7_777.0, 333.0, 4)];
    assert_eq!(build_sync_track(&segments, 192), build_sync_track(&segments, 192));
}
