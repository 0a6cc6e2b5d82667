//! Hand control library: turns per-frame hand landmarks into stable control
//! signals.
//!
//! An external landmark detector reports, for every camera frame, which hands
//! it sees and where their landmarks are. This library turns that noisy
//! stream into:
//! - a smoothed, range-mapped control value per hand (e.g. a servo angle
//!   driven by the thumb-to-index pinch distance)
//! - a column of debounced toggle boxes per hand, flipped by hovering a
//!   fingertip over them
//!
//! The pipeline for each reported hand is:
//! 1. Geometry extraction of pixel points and the pinch distance
//! 2. Exponential smoothing of the distance, per hand side
//! 3. Linear mapping of the smoothed distance to the output range
//! 4. Hover testing of the tracked fingertip against the hand's toggle boxes
//!
//! # Examples
//!
//! ## Processing frames
//!
//! ```
//! use hand_control::{
//!     config::Config,
//!     hand::{CapturedFrame, FrameObservation, HandObservation, HandSide, LandmarkPoint},
//!     session::TrackingSession,
//! };
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = TrackingSession::new(Config::default())?;
//!
//! // Thumb and index fingertip 20 px apart in a 640x480 frame
//! let mut landmarks = vec![LandmarkPoint::default(); 21];
//! landmarks[4] = LandmarkPoint::new(0.625, 0.25);
//! landmarks[8] = LandmarkPoint::new(0.65625, 0.25);
//!
//! let frame = CapturedFrame::new(
//!     640,
//!     480,
//!     Duration::ZERO,
//!     FrameObservation::new(vec![HandObservation::new(HandSide::Right, landmarks)]),
//! );
//!
//! let output = session.process_frame(&frame);
//! let (left, right) = output.servo_angles();
//! assert_eq!(left, 90.0); // never seen: neutral
//! assert_eq!(right, 0.0); // pinch at the bottom of the distance range
//! # Ok(())
//! # }
//! ```
//!
//! ## Smoothing on its own
//!
//! ```
//! use hand_control::{hand::HandSide, smoother::HandSmoother};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut smoother = HandSmoother::new(0.3)?;
//! assert_eq!(smoother.update(HandSide::Left, 20.0), 20.0);
//! let smoothed = smoother.update(HandSide::Left, 180.0);
//! assert!((smoothed - 68.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

/// Hand sides and detector observation types
pub mod hand;

/// Pixel conversion and pinch distance measurement
pub mod geometry;

/// Signal filtering algorithms for smoothing the pinch distance
pub mod filters;

/// Per-hand exponential smoothing
pub mod smoother;

/// Distance to control value mapping
pub mod range_map;

/// Hover toggle boxes with cooldown debounce
pub mod toggle;

/// Per-frame orchestration
pub mod session;

/// Host loop, frame source and output sink traits
pub mod app;

/// Recorded detector output replay
pub mod replay;

/// Command-line arguments
pub mod cli;

/// Utility functions for numeric conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
