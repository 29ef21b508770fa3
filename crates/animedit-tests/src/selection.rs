//! Integration tests for track selection across clip loads.

use animedit_core::{
    AnimEditError, AnimationClip, EditorConfig, KeyframeTrack, SelectionPolicy,
};
use animedit_timeline::{EditorSession, SelectionState, TimelineEvent, TrackSelection};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn clip(names: &[&str]) -> AnimationClip {
    let tracks = names
        .iter()
        .map(|n| KeyframeTrack::from_buffers(*n, vec![0.0, 1.0], vec![0.0, 1.0], 1).unwrap())
        .collect();
    AnimationClip::new("clip", tracks).unwrap()
}

#[test]
fn selected_track_vanishing_returns_to_unselected() {
    let mut registry = TrackSelection::new(SelectionPolicy::KeepOrClear);
    registry.set_tracks(names(&["a", "b"])).unwrap();
    registry.select("b").unwrap();
    registry.set_tracks(names(&["a", "c"])).unwrap();
    assert_eq!(registry.state(), SelectionState::Unselected);
}

#[test]
fn unknown_track_leaves_prior_selection() {
    let mut registry = TrackSelection::new(SelectionPolicy::KeepOrClear);
    registry.set_tracks(names(&["a", "b"])).unwrap();
    registry.select("a").unwrap();
    assert_eq!(
        registry.select("z").unwrap_err(),
        AnimEditError::NotFound("z".into())
    );
    assert_eq!(registry.state(), SelectionState::Selected("a"));
}

#[test]
fn full_state_machine_walk() {
    let mut registry = TrackSelection::default();
    assert_eq!(registry.state(), SelectionState::Unselected);

    registry.set_tracks(names(&["hips", "head"])).unwrap();
    registry.select("hips").unwrap();
    assert_eq!(registry.state(), SelectionState::Selected("hips"));

    registry.select("head").unwrap();
    assert_eq!(registry.state(), SelectionState::Selected("head"));

    registry.set_tracks(names(&["head", "spine"])).unwrap();
    assert_eq!(registry.state(), SelectionState::Selected("head"));

    registry.clear();
    assert_eq!(registry.state(), SelectionState::Unselected);
}

#[test]
fn reselecting_current_track_is_silent() {
    let mut session = EditorSession::default();
    session.load_clip(&clip(&["hips", "head"])).unwrap();
    assert!(session.select_track("head").unwrap());
    assert!(!session.select_track("head").unwrap());
    assert!(session.select_track("hips").unwrap());
    assert_eq!(
        session.take_events().into_vec(),
        vec![
            TimelineEvent::TrackSelected("head".into()),
            TimelineEvent::TrackSelected("hips".into()),
        ]
    );
}

#[test]
fn new_clip_identity_drops_selection_with_default_to_first() {
    let config = EditorConfig {
        selection: SelectionPolicy::DefaultToFirst,
        ..EditorConfig::default()
    };
    let mut session = EditorSession::new(config).unwrap();
    session.load_clip(&clip(&["hips", "head"])).unwrap();
    session.select_track("head").unwrap();

    session.load_clip(&clip(&["hips", "head"])).unwrap();
    assert_eq!(session.selection().selected(), Some("hips"));

    session.load_clip(&clip(&[])).unwrap();
    assert_eq!(session.selection().state(), SelectionState::Unselected);
}
