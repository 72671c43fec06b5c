mod common;

use common::{at, session_start, sighting};
use knowquest_core::{
    Config, Debouncer, DetectorConfig, FrameSampler, HuntSession, MajorityVote,
    ScriptedClassifier,
};

#[test]
fn test_cup_scenario() {
    let mut debouncer = Debouncer::starting_at(DetectorConfig::default(), session_start());

    assert!(debouncer.observe_at("cup", 0.9, at(0.0)).is_none());
    let found = debouncer.observe_at("cup", 0.9, at(0.5));
    assert_eq!(found.map(|d| d.label), Some("cup".to_string()));
    assert!(debouncer.observe_at("cup", 0.9, at(1.0)).is_none());

    assert_eq!(debouncer.discovered_count(), 1);
}

#[test]
fn test_low_confidence_stream_is_inert() {
    let mut debouncer = Debouncer::starting_at(DetectorConfig::default(), session_start());
    let before = debouncer.state().clone();

    for (i, conf) in [0.0, 0.3, 0.59, 0.6, 0.6].iter().enumerate() {
        assert!(debouncer.observe_at("cup", *conf, at(i as f64)).is_none());
    }

    assert_eq!(debouncer.state(), &before);
}

#[test]
fn test_single_false_positive_never_registers() {
    let mut session = HuntSession::new(&Config::default(), session_start());
    let mut classifier = ScriptedClassifier::new(vec![
        sighting("giraffe", 0.99, 0.0),
        sighting("cup", 0.7, 1.0),
        sighting("cup", 0.7, 2.0),
    ]);

    let events = session.run(&mut classifier);
    let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["cup"]);
    assert!(session.debouncer().state().seen_count("giraffe") == 1);
}

#[test]
fn test_idle_gap_resets_pending_sightings() {
    let mut session = HuntSession::new(&Config::default(), session_start());
    let mut classifier = ScriptedClassifier::new(vec![
        sighting("book", 0.8, 0.0),
        sighting("cup", 0.8, 1.0),
        sighting("cup", 0.8, 1.5),
        // long pause with the camera pointed away
        sighting("book", 0.8, 8.0),
        sighting("book", 0.8, 9.0),
    ]);

    let events = session.run(&mut classifier);
    let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["cup", "book"]);

    // the 0s sighting of book was discarded, so discovery came at the 9s one
    let state = session.debouncer().state();
    assert!(state.is_discovered("cup"));
    assert!(state.is_discovered("book"));
    assert!(state.seen_counts.is_empty());
}

#[test]
fn test_goal_caps_points() {
    let mut config = Config::default();
    config.rewards.discovery_goal = 3;
    config.rewards.points_per_discovery = 15;
    let mut session = HuntSession::new(&config, session_start());

    let labels = ["cup", "pen", "book", "lamp", "chair"];
    let mut script = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        script.push(sighting(label, 0.9, i as f64));
        script.push(sighting(label, 0.9, i as f64 + 0.5));
    }
    session.run(&mut ScriptedClassifier::new(script));

    let summary = session.summary();
    assert_eq!(summary.discovered.len(), 5);
    assert_eq!(summary.points, 45);
    assert!(summary.goal_met);
}

#[test]
fn test_sampled_and_smoothed_pipeline() {
    // A flickering classifier: bowl frames interleaved into a steady cup
    let frames = [
        "cup", "bowl", "cup", "cup", "bowl", "cup", "cup", "cup", "bowl", "cup",
    ];
    let script: Vec<_> = frames
        .iter()
        .enumerate()
        .map(|(i, l)| sighting(l, 0.85, i as f64 * 0.1))
        .collect();

    let classifier = ScriptedClassifier::new(script);
    let mut pipeline = MajorityVote::new(FrameSampler::new(classifier, 1), 3);

    let mut session = HuntSession::new(&Config::default(), session_start());
    let events = session.run(&mut pipeline);
    let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["cup"]);
    assert!(!session.debouncer().state().is_discovered("bowl"));
}
