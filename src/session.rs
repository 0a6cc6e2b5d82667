//! Per-frame orchestration of smoothing, mapping and toggle debounce.
//!
//! A [`TrackingSession`] owns every piece of mutable per-hand state. The host
//! loop calls it once per captured frame and forwards the returned
//! [`SessionOutput`] to whatever drives the UI or actuator. Sides missing from
//! a frame keep their last smoothed value and box states, so short detection
//! dropouts do not disturb the output.

use crate::{
    config::Config,
    error::{Error, Result},
    geometry::{GeometryExtractor, PixelPoint},
    hand::{CapturedFrame, HandObservation, HandSide, PerSide},
    range_map::RangeMapper,
    smoother::HandSmoother,
    toggle::{BoxAppearance, HoverResult, ToggleEngine, ToggleEvent},
    utils::safe_cast::u32_to_i32,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::time::Duration;

/// Output for one hand side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandOutput {
    pub side: HandSide,
    /// Whether the side was detected in the most recent processed frame
    pub observed: bool,
    /// Mapped control value, or the neutral value before first detection
    pub control: f64,
    /// Last measured pinch distance in pixels
    pub raw_distance: Option<u32>,
    /// Smoothed pinch distance
    pub smoothed_distance: Option<f64>,
    /// Last tracked fingertip position
    pub tracked: Option<PixelPoint>,
    /// Active flag per box, top to bottom
    pub boxes: Vec<bool>,
    /// Render hint per box
    pub appearance: Vec<BoxAppearance>,
}

/// Everything emitted for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionOutput {
    /// Number of frames processed so far
    pub frame: u64,
    /// True when this tick's frame could not be used
    pub skipped: bool,
    pub hands: PerSide<HandOutput>,
    /// Boxes flipped during this tick
    pub events: Vec<ToggleEvent>,
}

impl SessionOutput {
    /// `(left, right)` control values, e.g. two servo angles.
    #[must_use]
    pub fn servo_angles(&self) -> (f64, f64) {
        (self.hands.left.control, self.hands.right.control)
    }

    #[must_use]
    pub fn control(&self, side: HandSide) -> f64 {
        self.hands[side].control
    }

    #[must_use]
    pub fn box_states(&self, side: HandSide) -> &[bool] {
        &self.hands[side].boxes
    }
}

/// Per-measurement state kept for output after the hand disappears.
#[derive(Debug, Clone, Copy, Default)]
struct LastSeen {
    raw_distance: Option<u32>,
    tracked: Option<PixelPoint>,
}

/// Owner of all per-hand state for one run.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    config: Config,
    geometry: GeometryExtractor,
    smoother: HandSmoother,
    mapper: RangeMapper,
    toggles: ToggleEngine,
    last_seen: PerSide<LastSeen>,
    last_output: SessionOutput,
    frames: u64,
}

impl TrackingSession {
    /// Create a session after validating `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for any invalid setting; nothing is
    /// checked again once frames start arriving
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let geometry = GeometryExtractor::new(config.landmarks.clone());
        let smoother = HandSmoother::new(config.smoothing.alpha)?;
        let mapper = RangeMapper::from_config(&config.mapping)?;
        let toggles = ToggleEngine::from_config(&config.toggle);

        info!(
            "Tracking session ready: alpha {}, distance {}..{} -> {}..{}, {} boxes per hand, cooldown {:?}",
            config.smoothing.alpha,
            config.mapping.distance_min,
            config.mapping.distance_max,
            config.mapping.output_min,
            config.mapping.output_max,
            config.toggle.box_count,
            toggles.cooldown(),
        );

        let mut session = Self {
            config,
            geometry,
            smoother,
            mapper,
            toggles,
            last_seen: PerSide::default(),
            last_output: SessionOutput {
                frame: 0,
                skipped: false,
                hands: PerSide::from_fn(|side| HandOutput {
                    side,
                    observed: false,
                    control: 0.0,
                    raw_distance: None,
                    smoothed_distance: None,
                    tracked: None,
                    boxes: Vec::new(),
                    appearance: Vec::new(),
                }),
                events: Vec::new(),
            },
            frames: 0,
        };
        session.last_output = session.build_output(PerSide::default(), PerSide::default(), Vec::new());
        Ok(session)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn smoother(&self) -> &HandSmoother {
        &self.smoother
    }

    #[must_use]
    pub fn toggles(&self) -> &ToggleEngine {
        &self.toggles
    }

    /// Output of the most recent tick, or the cold-start output
    #[must_use]
    pub fn last_output(&self) -> &SessionOutput {
        &self.last_output
    }

    /// Current control value for `side`
    #[must_use]
    pub fn control_value(&self, side: HandSide) -> f64 {
        self.smoother
            .value(side)
            .map_or(self.config.session.neutral_value, |smoothed| self.mapper.map(smoothed))
    }

    /// Handle one acquisition attempt. A failed attempt skips the tick.
    pub fn tick(&mut self, acquisition: Result<CapturedFrame>) -> &SessionOutput {
        match acquisition {
            Ok(frame) => self.process_frame(&frame),
            Err(e) => self.skip_frame(&e.to_string()),
        }
    }

    /// Keep the previous output for a tick whose frame could not be used.
    ///
    /// Control values and box states are repeated as-is; toggle events are
    /// not replayed.
    pub fn skip_frame(&mut self, reason: &str) -> &SessionOutput {
        warn!("Skipping frame: {reason}");
        self.last_output.skipped = true;
        self.last_output.events.clear();
        &self.last_output
    }

    /// Run every reported hand of `frame` through the pipeline
    pub fn process_frame(&mut self, frame: &CapturedFrame) -> &SessionOutput {
        if let Err(e) = Self::check_dimensions(frame) {
            return self.skip_frame(&e.to_string());
        }
        self.frames += 1;

        let mut observed = PerSide::new(false, false);
        let mut hovering: PerSide<Vec<bool>> = PerSide::default();
        let mut events = Vec::new();

        for hand in &frame.observation.hands {
            match self.process_hand(hand, frame) {
                Ok(result) => {
                    observed[hand.side] = true;
                    hovering[hand.side] = result.hovering;
                    events.extend(result.events);
                }
                Err(e) => warn!("Ignoring {} hand in frame {}: {e}", hand.side, self.frames),
            }
        }

        self.last_output = self.build_output(observed, hovering, events);
        &self.last_output
    }

    /// Clear the smoothed value of one side, e.g. on an explicit host request.
    pub fn reset_side(&mut self, side: HandSide) {
        info!("Resetting {side} smoothing");
        self.smoother.reset(side);
        self.last_seen[side] = LastSeen::default();
    }

    fn check_dimensions(frame: &CapturedFrame) -> Result<()> {
        if frame.width == 0 || frame.height == 0 {
            return Err(Error::Acquisition(format!(
                "invalid frame dimensions {}x{}",
                frame.width, frame.height
            )));
        }
        u32_to_i32(frame.width)?;
        u32_to_i32(frame.height)?;
        Ok(())
    }

    fn process_hand(&mut self, hand: &HandObservation, frame: &CapturedFrame) -> Result<HoverResult> {
        let geometry = self.geometry.extract(&hand.landmarks, frame.width, frame.height)?;
        let smoothed = self.smoother.update(hand.side, f64::from(geometry.pinch_distance));
        let hover = self
            .toggles
            .process(hand.side, geometry.tracked, frame.width, frame.timestamp)?;

        debug!(
            "{} hand: pinch {} px (smoothed {:.1}), control {:.1}, tracked ({}, {})",
            hand.side,
            geometry.pinch_distance,
            smoothed,
            self.mapper.map(smoothed),
            geometry.tracked.x,
            geometry.tracked.y,
        );

        self.last_seen[hand.side] = LastSeen {
            raw_distance: Some(geometry.pinch_distance),
            tracked: Some(geometry.tracked),
        };
        Ok(hover)
    }

    fn build_output(
        &self,
        observed: PerSide<bool>,
        hovering: PerSide<Vec<bool>>,
        events: Vec<ToggleEvent>,
    ) -> SessionOutput {
        let hands = PerSide::from_fn(|side| {
            let boxes = self.toggles.states(side);
            let appearance = boxes
                .iter()
                .enumerate()
                .map(|(i, &active)| {
                    BoxAppearance::from_state(active, hovering[side].get(i).copied().unwrap_or(false))
                })
                .collect();

            HandOutput {
                side,
                observed: observed[side],
                control: self.control_value(side),
                raw_distance: self.last_seen[side].raw_distance,
                smoothed_distance: self.smoother.value(side),
                tracked: self.last_seen[side].tracked,
                boxes,
                appearance,
            }
        });

        SessionOutput {
            frame: self.frames,
            skipped: false,
            hands,
            events,
        }
    }
}

/// Session time helper for hosts that count frames instead of reading a clock.
#[must_use]
pub fn frame_timestamp(frame_index: u64, fps: u32) -> Duration {
    if fps == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(frame_index / u64::from(fps))
        + Duration::from_nanos((frame_index % u64::from(fps)) * 1_000_000_000 / u64::from(fps))
}
