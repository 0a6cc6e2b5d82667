//! Host loop tying a frame source and an output sink to a tracking session.

use crate::{
    config::Config,
    error::Result,
    hand::{CapturedFrame, HandSide},
    session::{SessionOutput, TrackingSession},
    toggle::BoxAppearance,
};
use log::{debug, info};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Supplies frames together with the detector's output for them.
pub trait FrameSource {
    /// Next frame.
    ///
    /// `Ok(None)` ends the stream. An `Err` is a failed acquisition attempt;
    /// the loop skips that tick and asks again.
    fn next_frame(&mut self) -> Result<Option<CapturedFrame>>;
}

/// Receives each tick's output, e.g. a UI overlay or a servo driver.
pub trait ControlSink {
    fn emit(&mut self, output: &SessionOutput) -> Result<()>;
}

/// Sink that reports through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl ControlSink for LogSink {
    fn emit(&mut self, output: &SessionOutput) -> Result<()> {
        for event in &output.events {
            info!(
                "{} box {} -> {}",
                event.side,
                event.index + 1,
                if event.active { "on" } else { "off" }
            );
        }
        let (left, right) = output.servo_angles();
        debug!("frame {}: left {left:.1}, right {right:.1}", output.frame);
        Ok(())
    }
}

/// Sink writing one line per tick.
///
/// `frame 2 L 90.0 [-----] R 48.0 [#-h--]` where `#` is active, `h` is
/// hovered and `-` is idle. Skipped ticks are marked with `(skipped)`.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render one tick as a line, without the newline
    #[must_use]
    pub fn format_line(output: &SessionOutput) -> String {
        let mut line = format!("frame {}", output.frame);
        for side in HandSide::ALL {
            let hand = &output.hands[side];
            let boxes: String = hand
                .appearance
                .iter()
                .map(|appearance| match appearance {
                    BoxAppearance::Active => '#',
                    BoxAppearance::Hover => 'h',
                    BoxAppearance::Inactive => '-',
                })
                .collect();
            let tag = match side {
                HandSide::Left => 'L',
                HandSide::Right => 'R',
            };
            line.push_str(&format!(" {tag} {:.1} [{boxes}]", hand.control));
        }
        if output.skipped {
            line.push_str(" (skipped)");
        }
        line
    }
}

impl<W: Write> ControlSink for TextSink<W> {
    fn emit(&mut self, output: &SessionOutput) -> Result<()> {
        writeln!(self.writer, "{}", Self::format_line(output))?;
        Ok(())
    }
}

/// Counters for one [`HandControlApp::run`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub skipped: u64,
    pub toggles: u64,
}

/// Main application struct
pub struct HandControlApp {
    session: TrackingSession,
}

impl HandControlApp {
    /// Create the application, failing fast on invalid configuration
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing hand control application");
        Ok(Self {
            session: TrackingSession::new(config)?,
        })
    }

    #[must_use]
    pub fn session(&self) -> &TrackingSession {
        &self.session
    }

    /// Run until the source is exhausted or `stop` is set
    ///
    /// `stop` is checked once per tick before the next frame is requested.
    /// Setting it is up to the host, e.g. a sink or another thread; the
    /// replay binary never sets it and runs to the end of the recording.
    pub fn run(
        &mut self,
        source: &mut dyn FrameSource,
        sink: &mut dyn ControlSink,
        stop: &AtomicBool,
    ) -> Result<RunStats> {
        info!("Entering main loop");
        let mut stats = RunStats::default();

        loop {
            if stop.load(Ordering::Relaxed) {
                info!("Exit requested");
                break;
            }

            let output = match source.next_frame() {
                Ok(Some(frame)) => self.session.process_frame(&frame),
                Ok(None) => {
                    info!("End of frame stream reached");
                    break;
                }
                Err(e) => self.session.tick(Err(e)),
            };

            // Unusable frames are skipped by the session, not only failed reads
            if output.skipped {
                stats.skipped += 1;
            } else {
                stats.frames += 1;
            }
            stats.toggles += output.events.len() as u64;
            sink.emit(output)?;
        }

        info!(
            "Application shutting down after {} frames ({} skipped, {} toggles)",
            stats.frames, stats.skipped, stats.toggles
        );
        Ok(stats)
    }
}
