//! Integration tests for the timeline subsystem.
//!
//! Exercises animedit-core clips and configuration flowing through the
//! animedit-timeline engine and editor session.

use animedit_core::{AnimEditError, AnimationClip, EditorConfig, KeyframeTrack};
use animedit_timeline::{EditorSession, TimelineEngine, TimelineEvent};

// ── Helpers ────────────────────────────────────────────────────

fn track(name: &str, times: &[f64]) -> KeyframeTrack {
    let mut track = KeyframeTrack::new(name, 4);
    for &t in times {
        track.set(t, &[0.0, 0.0, 0.0, 1.0]).unwrap();
    }
    track
}

fn wave_clip() -> AnimationClip {
    AnimationClip::with_duration(
        "",
        10.0,
        vec![
            track("hips", &[0.0, 1.0, 2.5, 10.0]),
            track("leftUpperArm", &[0.0, 1.0, 5.0]),
            track("rightUpperArm", &[0.0, 2.5, 5.0]),
        ],
    )
    .unwrap()
    .or_name_from_file("wave.vrma")
}

fn loaded_session() -> EditorSession {
    let mut session = EditorSession::new(EditorConfig::default()).unwrap();
    session.load_clip(&wave_clip()).unwrap();
    session
}

// ── Coordinate contract ────────────────────────────────────────

#[test]
fn click_past_end_of_ten_second_clip_yields_duration() {
    let mut session = loaded_session();
    assert_eq!(session.click(700.0).unwrap(), 10.0);
    assert_eq!(
        session.take_events().into_vec(),
        vec![TimelineEvent::TimeChanged(10.0)]
    );
}

#[test]
fn every_pointer_position_maps_inside_clip() {
    let engine = TimelineEngine::default();
    for x in [-1.0e6, -1.0, 0.0, 59.9, 600.0, 600.1, 1.0e6] {
        let t = engine.x_to_time(x, 10.0).unwrap();
        assert!((0.0..=10.0).contains(&t), "x={x} gave t={t}");
    }
}

#[test]
fn round_trip_through_pixels() {
    let engine = TimelineEngine::default();
    for i in 0..=100 {
        let t = i as f64 * 0.1;
        let back = engine.x_to_time(engine.time_to_x(t), 10.0).unwrap();
        assert!((back - t).abs() < 1e-9);
    }
}

// ── Frame projection ───────────────────────────────────────────

#[test]
fn frame_merges_shared_keyframes() {
    let session = loaded_session();
    let frame = session.frame().unwrap();

    let times: Vec<f64> = frame.markers.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![0.0, 1.0, 2.5, 10.0, 5.0]);
    assert_eq!(frame.markers[2].x, 150.0);
    assert_eq!(frame.width, 600.0);
    // 11 majors, 4 minors in each of the 10 gaps.
    assert_eq!(frame.ticks.len(), 11 + 40);
}

#[test]
fn dope_sheet_keeps_every_track_row() {
    let session = loaded_session();
    let rows = session.dope_sheet().rows(&wave_clip());
    let counts: Vec<usize> = rows.iter().map(|r| r.markers.len()).collect();
    assert_eq!(counts, vec![4, 3, 3]);
    assert_eq!(rows[2].top, 48.0);
}

#[test]
fn playhead_follows_host_even_out_of_range() {
    let mut session = loaded_session();
    session.set_current_time(11.0);
    assert_eq!(session.frame().unwrap().playhead_x, 660.0);
}

// ── Scrubbing across clip swaps ────────────────────────────────

#[test]
fn drag_uses_duration_of_clip_loaded_mid_drag() {
    let mut session = loaded_session();
    assert_eq!(session.pointer_down(0.0).unwrap(), 0.0);
    assert_eq!(session.pointer_move(540.0).unwrap(), Some(9.0));

    let short = AnimationClip::new("blink", vec![track("eyes", &[0.0, 0.5])]).unwrap();
    session.load_clip(&short).unwrap();

    assert_eq!(session.pointer_move(540.0).unwrap(), Some(0.5));
    assert_eq!(session.pointer_up(540.0).unwrap(), Some(0.5));
    assert_eq!(
        session.take_events().into_vec(),
        vec![TimelineEvent::TimeChanged(0.5)]
    );
}

#[test]
fn events_arrive_in_interaction_order() {
    let mut session = loaded_session();
    session.click(60.0).unwrap();
    session.select_track("hips").unwrap();
    session.click(120.0).unwrap();
    assert_eq!(
        session.take_events().into_vec(),
        vec![
            TimelineEvent::TimeChanged(1.0),
            TimelineEvent::TrackSelected("hips".into()),
            TimelineEvent::TimeChanged(2.0),
        ]
    );
}

// ── Configuration ──────────────────────────────────────────────

#[test]
fn configured_scale_reaches_session() {
    let config = EditorConfig::from_json(
        r#"{ "timeline": { "pixels_per_second": 100.0, "minor_ticks_per_major": 1 } }"#,
    )
    .unwrap();
    let mut session = EditorSession::new(config).unwrap();
    session.load_clip(&wave_clip()).unwrap();

    assert_eq!(session.click(250.0).unwrap(), 2.5);
    let frame = session.frame().unwrap();
    assert_eq!(frame.width, 1000.0);
    assert_eq!(frame.ticks.len(), 11 + 10);
}

#[test]
fn invalid_config_is_rejected_before_use() {
    let err = EditorConfig::from_json(r#"{ "timeline": { "pixels_per_second": -60.0 } }"#)
        .unwrap_err();
    assert!(matches!(err, AnimEditError::InvalidConfiguration(_)));
}

#[test]
fn unnamed_clip_takes_file_stem() {
    assert_eq!(wave_clip().name, "wave");
}
