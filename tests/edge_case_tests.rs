//! Edge case tests for geometry, smoothing and frame handling


use hand_control::{
    config::{Config, LandmarkConfig},
    geometry::{to_pixel, GeometryExtractor, PixelPoint},
    hand::{CapturedFrame, FrameObservation, HandObservation, HandSide, LandmarkPoint},
    session::TrackingSession,
    smoother::HandSmoother,
    Error,
};
use std::time::Duration;
use test_helpers::{frame_at, pinch};

#[test]
fn test_landmarks_outside_frame() {
    // Detectors can extrapolate landmarks past the image border
    let px = to_pixel(LandmarkPoint::new(-0.1, 1.2), 640, 480).unwrap();
    assert_eq!(px, PixelPoint::new(-64, 576));

    let extractor = GeometryExtractor::new(LandmarkConfig::default());
    let mut landmarks = vec![LandmarkPoint::default(); 21];
    landmarks[4] = LandmarkPoint::new(-0.5, 0.0);
    landmarks[8] = LandmarkPoint::new(1.5, 0.0);
    let geometry = extractor.extract(&landmarks, 100, 100).unwrap();
    assert_eq!(geometry.pinch_distance, 200);
}

#[test]
fn test_infinite_coordinates_rejected() {
    assert!(matches!(
        to_pixel(LandmarkPoint::new(f64::INFINITY, 0.5), 640, 480),
        Err(Error::InvalidInput(_))
    ));
    assert!(to_pixel(LandmarkPoint::new(1e12, 0.5), 640, 480).is_err());
}

#[test]
fn test_empty_landmark_list() {
    let mut session = TrackingSession::new(Config::default()).unwrap();
    let output = session.process_frame(&frame_at(0, vec![HandObservation::new(HandSide::Left, Vec::new())]));
    assert!(!output.hands.left.observed);
    assert_eq!(output.control(HandSide::Left), 90.0);
}

#[test]
fn test_bad_hand_does_not_block_good_hand() {
    let mut session = TrackingSession::new(Config::default()).unwrap();
    let broken = HandObservation::new(HandSide::Left, vec![LandmarkPoint::default(); 5]);
    let output = session.process_frame(&frame_at(0, vec![broken, pinch(HandSide::Right, 110)]));

    assert!(!output.hands.left.observed);
    assert!(output.hands.right.observed);
    assert!((output.control(HandSide::Right) - 90.0).abs() < 1e-9);
}

#[test]
fn test_oversized_frame_is_skipped() {
    let mut session = TrackingSession::new(Config::default()).unwrap();
    let frame = CapturedFrame::new(u32::MAX, 480, Duration::ZERO, FrameObservation::new(vec![pinch(HandSide::Left, 50)]));
    let output = session.process_frame(&frame);
    assert!(output.skipped);
    assert_eq!(output.frame, 0);
    assert_eq!(session.smoother().value(HandSide::Left), None);
}

#[test]
fn test_zero_distance_pinch() {
    let mut session = TrackingSession::new(Config::default()).unwrap();
    let output = session.process_frame(&frame_at(0, vec![pinch(HandSide::Left, 0)]));
    assert_eq!(output.hands.left.raw_distance, Some(0));
    assert_eq!(output.hands.left.smoothed_distance, Some(0.0));
}

#[test]
fn test_smoothed_value_stays_finite_and_non_negative() {
    let mut smoother = HandSmoother::new(0.3).unwrap();
    let samples = [0.0, 800.0, 0.0, 1.0, 4_000_000.0, 0.0, 20.0];
    for raw in samples {
        let value = smoother.update(HandSide::Right, raw);
        assert!(value.is_finite());
        assert!(value >= 0.0);
    }
}

#[test]
fn test_clock_going_backwards_does_not_toggle() {
    let mut session = TrackingSession::new(Config::default()).unwrap();
    let over_box = |ms| {
        let mut hand = pinch(HandSide::Left, 50);
        hand.landmarks[20] = test_helpers::point(30, 70);
        frame_at(ms, vec![hand])
    };

    assert_eq!(session.process_frame(&over_box(5_000)).events.len(), 1);
    let output = session.process_frame(&over_box(1_000));
    assert!(output.events.is_empty());
    assert!(output.box_states(HandSide::Left)[0]);
}
