//! Frame scheduling and timing.
//!
//! Portable frame pacing without async/await or platform-specific timers.
//! The caller's loop is the cooperative cycle: drain transport bytes into
//! the engine, call [`FrameScheduler::tick`], then sleep until the returned
//! deadline.

use embassy_time::{Duration, Instant};

use crate::engine::Engine;
use crate::{ConfigStore, OutputDriver};

/// Default target frame rate.
pub const DEFAULT_FPS: u64 = 90;

/// Default frame duration based on the target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Result of a frame tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Paces the engine's render tick and pushes frames to the output driver.
///
/// Tracks frame timing with drift correction: after a stall longer than two
/// frames the backlog is skipped instead of caught up, so a paused transport
/// never causes a burst of renders.
pub struct FrameScheduler<'a, O, P, const MAX_LEDS: usize, const INTENT_QUEUE_SIZE: usize>
where
    O: OutputDriver,
    P: ConfigStore,
{
    output: O,
    engine: Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, P, const MAX_LEDS: usize, const INTENT_QUEUE_SIZE: usize>
    FrameScheduler<'a, O, P, MAX_LEDS, INTENT_QUEUE_SIZE>
where
    O: OutputDriver,
    P: ConfigStore,
{
    /// Create a scheduler at the default frame rate.
    pub fn new(engine: Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE>, output: O) -> Self {
        Self::with_frame_duration(engine, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a scheduler with a custom frame duration.
    pub fn with_frame_duration(
        engine: Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE>,
        output: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Execute one render tick and return timing for the next.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after stalls instead of catching up.
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self.engine.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub const fn engine_mut(&mut self) -> &mut Engine<'a, P, MAX_LEDS, INTENT_QUEUE_SIZE> {
        &mut self.engine
    }
}
