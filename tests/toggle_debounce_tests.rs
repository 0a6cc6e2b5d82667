//! Debounce behaviour of the hover toggle boxes

use hand_control::{
    config::ToggleConfig,
    geometry::PixelPoint,
    hand::HandSide,
    toggle::{BoxLayout, BoxRect, ToggleBox, ToggleEngine},
};
use proptest::prelude::*;
use std::time::Duration;

const COOLDOWN: Duration = Duration::from_millis(500);

#[test]
fn test_sustained_hover_toggles_once_per_cooldown() {
    let mut toggle_box = ToggleBox::new(0);

    // 2.0 s of continuous hover sampled every 0.1 s
    let toggles = (1..=20)
        .filter(|&i| toggle_box.update(true, Duration::from_millis(i * 100), COOLDOWN))
        .count();

    assert_eq!(toggles, 4);
}

#[test]
fn test_sustained_hover_from_time_zero() {
    let mut toggle_box = ToggleBox::new(0);
    let flips: Vec<u64> = (0..20)
        .map(|i| i * 100)
        .filter(|&ms| toggle_box.update(true, Duration::from_millis(ms), COOLDOWN))
        .collect();

    assert_eq!(flips, vec![0, 600, 1200, 1800]);
    assert!(!toggle_box.is_active());
}

#[test]
fn test_boundary_points_never_hover() {
    let mut engine = ToggleEngine::from_config(&ToggleConfig::default());
    let rects = engine.layout().rects(HandSide::Left, 640).unwrap();
    let first = rects[0];

    let edges = [
        PixelPoint::new(first.x1, first.y1 + 10),
        PixelPoint::new(first.x2, first.y1 + 10),
        PixelPoint::new(first.x1 + 10, first.y1),
        PixelPoint::new(first.x1 + 10, first.y2),
        PixelPoint::new(first.x1, first.y1),
    ];

    for (i, point) in edges.into_iter().enumerate() {
        let result = engine
            .process(HandSide::Left, point, 640, Duration::from_secs(i as u64 * 10))
            .unwrap();
        assert!(result.hovering.iter().all(|&h| !h), "edge point {point:?} counted as hover");
        assert!(result.events.is_empty());
    }
    assert_eq!(engine.states(HandSide::Left), vec![false; 5]);
}

#[test]
fn test_leaving_and_returning_respects_cooldown() {
    let mut engine = ToggleEngine::from_config(&ToggleConfig::default());
    let inside = PixelPoint::new(30, 70);
    let outside = PixelPoint::new(300, 300);

    assert_eq!(engine.process(HandSide::Left, inside, 640, Duration::ZERO).unwrap().events.len(), 1);
    engine.process(HandSide::Left, outside, 640, Duration::from_millis(100)).unwrap();

    // Back inside before the cooldown ran out: ignored
    let result = engine.process(HandSide::Left, inside, 640, Duration::from_millis(200)).unwrap();
    assert!(result.events.is_empty());
    assert!(engine.states(HandSide::Left)[0]);

    let result = engine.process(HandSide::Left, inside, 640, Duration::from_millis(501)).unwrap();
    assert_eq!(result.events.len(), 1);
    assert!(!engine.states(HandSide::Left)[0]);
}

#[test]
fn test_sides_do_not_share_boxes() {
    let mut engine = ToggleEngine::from_config(&ToggleConfig::default());
    // Left box 0 geometry tested against the right column: nothing happens
    engine.process(HandSide::Right, PixelPoint::new(30, 70), 640, Duration::ZERO).unwrap();
    assert_eq!(engine.states(HandSide::Right), vec![false; 5]);
    assert_eq!(engine.states(HandSide::Left), vec![false; 5]);
}

#[test]
fn test_custom_layout() {
    let config = ToggleConfig {
        box_count: 3,
        box_width: 50,
        box_height: 20,
        box_spacing: 5,
        margin: 0,
        label_gap: 10,
        ..ToggleConfig::default()
    };
    let layout = BoxLayout::from_config(&config);
    let rects = layout.rects(HandSide::Right, 200).unwrap();
    assert_eq!(
        rects,
        vec![
            BoxRect { x1: 150, y1: 10, x2: 200, y2: 30 },
            BoxRect { x1: 150, y1: 35, x2: 200, y2: 55 },
            BoxRect { x1: 150, y1: 60, x2: 200, y2: 80 },
        ]
    );
}

proptest! {
    #[test]
    fn prop_at_most_one_flip_per_cooldown(
        steps in prop::collection::vec((1u64..400, any::<bool>()), 1..200),
        cooldown_ms in 1u64..1000,
    ) {
        let cooldown = Duration::from_millis(cooldown_ms);
        let mut toggle_box = ToggleBox::new(0);
        let mut now = Duration::ZERO;
        let mut last_flip: Option<Duration> = None;

        for (delta, hovering) in steps {
            now += Duration::from_millis(delta);
            let was_active = toggle_box.is_active();
            let flipped = toggle_box.update(hovering, now, cooldown);

            prop_assert_eq!(flipped, was_active != toggle_box.is_active());
            if flipped {
                prop_assert!(hovering);
                if let Some(previous) = last_flip {
                    prop_assert!(now - previous > cooldown);
                }
                last_flip = Some(now);
            }
        }
    }
}
