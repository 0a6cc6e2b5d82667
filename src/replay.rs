//! Recorded detector output, replayed as a [`FrameSource`].
//!
//! A recording is a YAML document:
//!
//! ```yaml
//! width: 640
//! height: 480
//! fps: 30
//! frames:
//!   - time: 0.0
//!     hands:
//!       - side: Right
//!         points:
//!           4: { x: 0.625, y: 0.25 }
//!           8: { x: 0.65625, y: 0.25 }
//!           20: { x: 0.5, y: 0.5 }
//!   - failed: true
//! ```
//!
//! A hand gives either the full `landmarks` list or a sparse `points` map
//! keyed by landmark ID; unlisted IDs sit at the origin. Frames without a
//! `time` are stamped from their position and `fps`.

use crate::{
    app::FrameSource,
    error::{Error, Result},
    hand::{CapturedFrame, FrameObservation, HandObservation, HandSide, LandmarkPoint},
    session::frame_timestamp,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Whole recording as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    /// Default frame width in pixels
    pub width: u32,
    /// Default frame height in pixels
    pub height: u32,
    /// Frame rate used to stamp frames without a time
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub frames: Vec<RecordedFrame>,
}

fn default_fps() -> u32 {
    30
}

/// One recorded acquisition attempt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordedFrame {
    /// Seconds since the start of the recording
    pub time: Option<f64>,
    /// Overrides the recording width
    pub width: Option<u32>,
    /// Overrides the recording height
    pub height: Option<u32>,
    /// The camera delivered nothing for this attempt
    pub failed: bool,
    pub hands: Vec<RecordedHand>,
}

/// One detected hand in a recorded frame.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedHand {
    pub side: HandSide,
    #[serde(default)]
    pub landmarks: Vec<LandmarkPoint>,
    #[serde(default)]
    pub points: BTreeMap<usize, LandmarkPoint>,
}

impl RecordedHand {
    fn to_observation(&self) -> HandObservation {
        let mut landmarks = self.landmarks.clone();
        if let Some(&max_id) = self.points.keys().next_back() {
            if landmarks.len() <= max_id {
                landmarks.resize(max_id + 1, LandmarkPoint::default());
            }
            for (&id, &point) in &self.points {
                landmarks[id] = point;
            }
        }
        HandObservation::new(self.side, landmarks)
    }
}

/// Plays a [`Recording`] back one frame per call.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    recording: Recording,
    cursor: usize,
}

impl ReplaySource {
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self { recording, cursor: 0 }
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is not a valid recording
    pub fn parse(content: &str) -> Result<Self> {
        let recording: Recording = serde_yaml::from_str(content)
            .map_err(|e| Error::InvalidInput(format!("Failed to parse recording: {e}")))?;
        Ok(Self::new(recording))
    }

    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Frames left to play
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.recording.frames.len().saturating_sub(self.cursor)
    }

    fn timestamp(&self, index: usize, frame: &RecordedFrame) -> Result<Duration> {
        match frame.time {
            Some(secs) => Duration::try_from_secs_f64(secs)
                .map_err(|_| Error::InvalidInput(format!("Frame {index} has invalid time {secs}"))),
            None => Ok(frame_timestamp(index as u64, self.recording.fps)),
        }
    }
}

impl FrameSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<CapturedFrame>> {
        let index = self.cursor;
        let Some(frame) = self.recording.frames.get(index) else {
            return Ok(None);
        };
        self.cursor += 1;

        if frame.failed {
            return Err(Error::Acquisition(format!("recorded frame {index} has no image")));
        }

        let observation = FrameObservation::new(frame.hands.iter().map(RecordedHand::to_observation).collect());
        Ok(Some(CapturedFrame::new(
            frame.width.unwrap_or(self.recording.width),
            frame.height.unwrap_or(self.recording.height),
            self.timestamp(index, frame)?,
            observation,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDING: &str = r#"
width: 640
height: 480
fps: 10
frames:
  - time: 0.25
    hands:
      - side: Right
        points:
          4: { x: 0.625, y: 0.25 }
          8: { x: 0.65625, y: 0.25 }
  - failed: true
  - width: 1280
    hands: []
"#;

    #[test]
    fn test_replay_sequence() {
        let mut source = ReplaySource::parse(RECORDING).unwrap();
        assert_eq!(source.remaining(), 3);

        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.timestamp, Duration::from_millis(250));
        assert_eq!(first.observation.hands.len(), 1);
        let hand = &first.observation.hands[0];
        assert_eq!(hand.side, HandSide::Right);
        assert_eq!(hand.landmarks.len(), 9);
        assert_eq!(hand.landmarks[8], LandmarkPoint::new(0.65625, 0.25));

        assert!(matches!(source.next_frame(), Err(Error::Acquisition(_))));

        let third = source.next_frame().unwrap().unwrap();
        assert_eq!(third.width, 1280);
        assert_eq!(third.height, 480);
        assert_eq!(third.timestamp, Duration::from_millis(200));

        assert!(source.next_frame().unwrap().is_none());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_points_override_full_list() {
        let hand = RecordedHand {
            side: HandSide::Left,
            landmarks: vec![LandmarkPoint::new(0.1, 0.1); 21],
            points: BTreeMap::from([(4, LandmarkPoint::new(0.9, 0.9))]),
        };
        let observation = hand.to_observation();
        assert_eq!(observation.landmarks.len(), 21);
        assert_eq!(observation.landmarks[4], LandmarkPoint::new(0.9, 0.9));
        assert_eq!(observation.landmarks[5], LandmarkPoint::new(0.1, 0.1));
    }

    #[test]
    fn test_rejects_malformed_recording() {
        assert!(ReplaySource::parse("frames: 12").is_err());

        let mut source = ReplaySource::parse("width: 640\nheight: 480\nframes:\n  - time: -1.0\n").unwrap();
        assert!(matches!(source.next_frame(), Err(Error::InvalidInput(_))));
    }
}
